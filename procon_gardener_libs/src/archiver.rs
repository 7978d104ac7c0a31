use crate::atcoder::model::Submission;
use crate::error::{GardenerError, Result};
use crate::filter::archive_dir;
use crate::language;
use crate::vcs::{Author, Workspace};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

pub struct Archiver {
    workspace: Workspace,
    email: String,
}

impl Archiver {
    pub fn new(workspace: Workspace, email: &str) -> Self {
        Self {
            workspace,
            email: String::from(email),
        }
    }

    pub fn open(root: &Path, email: &str) -> Result<Self> {
        Ok(Self::new(Workspace::probe(root)?, email))
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }

    /// ソースコードをアーカイブ先に書き込み、Gitリポジトリであればコミットするメソッド
    ///
    /// 書き込んだファイルのパスを返す。コミットに失敗しても書き込んだファイルは残る。
    pub fn archive(&self, code: &str, submission: &Submission, url: &Url) -> Result<PathBuf> {
        let file_name = language::file_name(&submission.language);
        let dir = archive_dir(self.workspace.root(), submission);
        fs::create_dir_all(&dir).map_err(|e| GardenerError::io(&dir, e))?;

        let path = dir.join(&file_name);
        fs::write(&path, code).map_err(|e| GardenerError::io(&path, e))?;
        tracing::info!("archived the code at {}", path.display());

        let relative = archive_dir(Path::new(""), submission).join(&file_name);
        let message = commit_message(submission, url);
        let author = Author {
            name: &submission.user_id,
            email: &self.email,
            epoch_second: submission.epoch_second,
        };
        if let Some(oid) = self.workspace.record(&relative, &message, &author)? {
            tracing::info!("committed {} as {}", relative.display(), oid);
        }

        Ok(path)
    }
}

pub fn commit_message(submission: &Submission, url: &Url) -> String {
    format!(
        "✅ {} {} {}ms {}",
        submission.contest_id,
        submission.problem_id,
        submission.execution_time.unwrap_or_default(),
        url
    )
}
