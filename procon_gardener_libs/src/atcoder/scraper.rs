use crate::error::{GardenerError, Result};
use crate::throttle::Throttle;
use once_cell::sync::Lazy;
use reqwest::{Client, Url};
use scraper::{Html, Selector};
use tokio::time::Duration;

static SCRAPER: Lazy<SubmissionPageScraper> = Lazy::new(SubmissionPageScraper::new);

/// Default spacing between two submission page requests.
pub const CRAWL_INTERVAL: Duration = Duration::from_millis(1500);

pub struct SubmissionPageScraper {
    code: Selector,
}

impl SubmissionPageScraper {
    pub fn new() -> Self {
        let code = Selector::parse(".linenums").unwrap();
        Self { code }
    }

    /// 提出詳細ページのHTMLからソースコードを抽出するメソッド
    ///
    /// 複数ファイルの提出では`.linenums`が複数あるので、文書順にすべて返す。
    /// 空のコードブロックはセレクタの不一致とみなしてエラーにする。
    pub fn extract_codes(&self, url: &str, html: &str) -> Result<Vec<String>> {
        let html = Html::parse_document(html);

        let codes: Vec<String> = html
            .select(&self.code)
            .map(|block| block.text().collect::<String>())
            .collect();

        if codes.is_empty() {
            tracing::warn!("no code block found in {}", url);
            return Err(GardenerError::ParseError {
                url: url.to_string(),
                message: String::from("no `.linenums` code block in the page"),
            });
        }

        if let Some(index) = codes.iter().position(|code| code.is_empty()) {
            tracing::error!("code block {} at {} is empty", index, url);
            return Err(GardenerError::EmptyContentError {
                url: url.to_string(),
                index,
            });
        }

        Ok(codes)
    }
}

impl Default for SubmissionPageScraper {
    fn default() -> Self {
        Self::new()
    }
}

pub struct SubmissionPageCrawler {
    client: Client,
    throttle: Throttle,
}

impl SubmissionPageCrawler {
    pub fn new(interval: Duration) -> Result<Self> {
        let client = Client::builder()
            .build()
            .map_err(|e| GardenerError::network("submission page client", e))?;

        Ok(Self {
            client,
            throttle: Throttle::new(interval),
        })
    }

    /// 提出詳細ページを取得してソースコードを返すメソッド
    ///
    /// リクエストの間隔は`interval`以上空ける。
    pub async fn crawl(&mut self, url: &Url) -> Result<Vec<String>> {
        self.throttle.wait().await;
        tracing::info!("Requesting... {}", url);

        let res = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| GardenerError::network(url, e))?;

        let res = match res.error_for_status() {
            Ok(res) => res,
            Err(e) => {
                tracing::error!("error response returned from {}: {:?}", url, e);
                return Err(GardenerError::network(url, e));
            }
        };

        let html = res
            .text()
            .await
            .map_err(|e| GardenerError::network(url, e))?;

        SCRAPER.extract_codes(url.as_str(), &html)
    }
}
