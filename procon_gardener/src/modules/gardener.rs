use crate::modules::config::Service;
use procon_gardener_libs::{
    atcoder::{
        client::SUBMISSIONS_ENDPOINT, scraper::CRAWL_INTERVAL, SubmissionClient,
        Submission, SubmissionPageCrawler,
    },
    error::{GardenerError, Result},
    filter, Archiver,
};
use std::path::PathBuf;
use tokio::time::Duration;
use url::Url;

pub const JUDGE_HOST: &str = "https://atcoder.jp";

pub struct Endpoints {
    pub submissions: String,
    pub judge: String,
    pub interval: Duration,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            submissions: String::from(SUBMISSIONS_ENDPOINT),
            judge: String::from(JUDGE_HOST),
            interval: CRAWL_INTERVAL,
        }
    }
}

/// AC提出の取得からアーカイブまでを順番に行う
pub struct Gardener {
    service: Service,
    root: PathBuf,
    judge: Url,
    client: SubmissionClient,
    crawler: SubmissionPageCrawler,
}

impl Gardener {
    pub fn new(service: Service, endpoints: Endpoints) -> Result<Self> {
        let judge = Url::parse(&endpoints.judge).map_err(|e| GardenerError::ParseError {
            url: endpoints.judge.clone(),
            message: e.to_string(),
        })?;

        Ok(Self {
            root: PathBuf::from(&service.repository_path),
            service,
            judge,
            client: SubmissionClient::new(&endpoints.submissions)?,
            crawler: SubmissionPageCrawler::new(endpoints.interval)?,
        })
    }

    /// 未アーカイブのAC提出をすべてアーカイブし、アーカイブした提出の数を返すメソッド
    ///
    /// どこかで失敗した時点で残りの提出は処理せずにエラーを返す。
    pub async fn run(&mut self) -> Result<usize> {
        let archiver = Archiver::open(&self.root, &self.service.user_email)?;
        if archiver.workspace().is_versioned() && self.service.user_email.trim().is_empty() {
            return Err(GardenerError::config(
                &self.root,
                "atcoder.user_email is required to commit into a git repository",
            ));
        }

        let submissions = self.client.fetch_all(&self.service.user_id).await?;
        let total = submissions.len();
        let targets = self.select(submissions);
        tracing::info!(
            "Archiving {} code out of {} submissions...",
            targets.len(),
            total
        );

        for submission in targets.iter() {
            let url = submission.detail_url(&self.judge);
            if let Some(at) = submission.submitted_at() {
                tracing::debug!("{} was accepted at {}", submission.id, at.to_rfc3339());
            }

            let codes = self.crawler.crawl(&url).await?;
            for code in codes.iter() {
                archiver.archive(code, submission, &url)?;
            }
        }

        tracing::info!("{} submissions archived.", targets.len());
        Ok(targets.len())
    }

    fn select(&self, submissions: Vec<Submission>) -> Vec<Submission> {
        let accepted = filter::keep_accepted(submissions);
        let unarchived = filter::keep_unarchived(&self.root, accepted);
        filter::chronological(unarchived)
    }
}
