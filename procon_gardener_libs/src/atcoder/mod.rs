pub mod client;
pub mod model;
pub mod scraper;

pub use client::SubmissionClient;
pub use model::Submission;
pub use scraper::{SubmissionPageCrawler, SubmissionPageScraper};
