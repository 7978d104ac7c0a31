use crate::atcoder::model::Submission;
use itertools::Itertools;
use std::path::{Path, PathBuf};

/// `root/contest_id/problem_id/submission_id`
pub fn archive_dir(root: &Path, submission: &Submission) -> PathBuf {
    root.join(&submission.contest_id)
        .join(&submission.problem_id)
        .join(submission.id.to_string())
}

pub fn keep_accepted(submissions: Vec<Submission>) -> Vec<Submission> {
    submissions
        .into_iter()
        .filter(|submission| submission.is_accepted())
        .collect()
}

/// アーカイブ先のディレクトリがまだ存在しない提出だけを残す関数
///
/// 書き込み途中で中断したディレクトリもアーカイブ済みとして扱う。
pub fn keep_unarchived(root: &Path, submissions: Vec<Submission>) -> Vec<Submission> {
    submissions
        .into_iter()
        .filter(|submission| !archive_dir(root, submission).is_dir())
        .collect()
}

/// Sorts oldest first so commits follow submission order, then drops records
/// repeated across page boundaries.
pub fn chronological(submissions: Vec<Submission>) -> Vec<Submission> {
    submissions
        .into_iter()
        .sorted_by_key(|submission| submission.epoch_second)
        .unique_by(|submission| submission.id)
        .collect()
}
