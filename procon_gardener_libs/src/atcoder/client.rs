use crate::atcoder::model::Submission;
use crate::error::{GardenerError, Result};
use reqwest::{Client, Url};

pub const SUBMISSIONS_ENDPOINT: &str =
    "https://kenkoooo.com/atcoder/atcoder-api/v3/user/submissions";

/// Number of records the API returns for a full page.
pub const SUBMISSIONS_PER_PAGE: usize = 500;

pub struct SubmissionClient {
    url: Url,
    client: Client,
}

impl SubmissionClient {
    pub fn new(endpoint: &str) -> Result<Self> {
        let url = Url::parse(endpoint).map_err(|e| GardenerError::ParseError {
            url: endpoint.to_string(),
            message: e.to_string(),
        })?;
        let client = Client::builder()
            .gzip(true)
            .build()
            .map_err(|e| GardenerError::network(endpoint, e))?;

        Ok(Self { url, client })
    }

    /// `from_second`以降の提出情報を1ページ分取得するメソッド
    pub async fn fetch_page(&self, user_id: &str, from_second: i64) -> Result<Vec<Submission>> {
        let res = self
            .client
            .get(self.url.clone())
            .query(&[
                ("user", user_id),
                ("from_second", from_second.to_string().as_ref()),
            ])
            .send()
            .await
            .map_err(|e| GardenerError::network(&self.url, e))?;
        let url = res.url().clone();
        tracing::info!("request to {}", url);

        let res = res
            .error_for_status()
            .map_err(|e| GardenerError::network(&url, e))?;
        let body = res
            .bytes()
            .await
            .map_err(|e| GardenerError::network(&url, e))?;

        serde_json::from_slice(&body).map_err(|e| GardenerError::decode(&url, e))
    }

    /// ユーザの全提出情報を取得するメソッド
    ///
    /// 1ページ分(500件)に満たないページが返ってきた時点で終了する。
    /// 次のページは直前のページで最も新しい提出時刻から取得する。
    pub async fn fetch_all(&self, user_id: &str) -> Result<Vec<Submission>> {
        tracing::info!("Start to retrieve submissions of {}", user_id);

        let mut submissions: Vec<Submission> = Vec::new();
        let mut from_second: i64 = 0;
        loop {
            let page = self.fetch_page(user_id, from_second).await?;
            let len = page.len();
            let watermark = page.iter().map(|s| s.epoch_second).max();
            submissions.extend(page);

            if len < SUBMISSIONS_PER_PAGE {
                break;
            }
            if let Some(watermark) = watermark {
                from_second = watermark;
            }
        }

        tracing::info!("{} submissions retrieved.", submissions.len());
        Ok(submissions)
    }
}
