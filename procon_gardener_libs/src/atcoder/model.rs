use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// Verdict string the judge reports for a submission that passed every test case.
pub const ACCEPTED: &str = "AC";

/// AtCoder Problems API (v3) が返す提出情報1件分
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    pub epoch_second: i64,
    pub problem_id: String,
    pub contest_id: String,
    pub user_id: String,
    pub language: String,
    pub point: f64,
    pub length: i64,
    pub result: String,
    pub execution_time: Option<i64>,
}

impl Submission {
    pub fn is_accepted(&self) -> bool {
        self.result == ACCEPTED
    }

    /// 提出詳細ページのURLを組み立てるメソッド
    ///
    /// `https://<judge-host>/contests/{contest_id}/submissions/{id}`
    pub fn detail_url(&self, judge: &Url) -> Url {
        let mut url = judge.clone();
        url.set_path(&format!(
            "/contests/{}/submissions/{}",
            self.contest_id, self.id
        ));
        url.set_query(None);
        url
    }

    pub fn submitted_at(&self) -> Option<DateTime<Utc>> {
        DateTime::<Utc>::from_timestamp(self.epoch_second, 0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn submission() -> Submission {
        serde_json::from_str(
            r#"{
                "id": 5871633,
                "epoch_second": 1560083640,
                "problem_id": "abc130_a",
                "contest_id": "abc130",
                "user_id": "tourist",
                "language": "C++14 (GCC 5.4.1)",
                "point": 100.0,
                "length": 211,
                "result": "AC",
                "execution_time": 1
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn deserialize_api_record() {
        let s = submission();
        assert_eq!(s.id, 5871633);
        assert_eq!(s.contest_id, "abc130");
        assert_eq!(s.problem_id, "abc130_a");
        assert_eq!(s.execution_time, Some(1));
        assert!(s.is_accepted());
    }

    #[test]
    fn deserialize_compile_error_without_execution_time() {
        let s: Submission = serde_json::from_str(
            r#"{"id":1,"epoch_second":0,"problem_id":"abc001_1","contest_id":"abc001","user_id":"u","language":"Rust","point":0.0,"length":10,"result":"CE","execution_time":null}"#,
        )
        .unwrap();
        assert_eq!(s.execution_time, None);
        assert!(!s.is_accepted());
    }

    #[test]
    fn build_detail_url() {
        let judge = Url::parse("https://atcoder.jp").unwrap();
        assert_eq!(
            submission().detail_url(&judge).as_str(),
            "https://atcoder.jp/contests/abc130/submissions/5871633"
        );
    }

    #[test]
    fn convert_epoch_second() {
        let at = submission().submitted_at().unwrap();
        assert_eq!(at.to_rfc3339(), "2019-06-09T12:34:00+00:00");
    }
}
