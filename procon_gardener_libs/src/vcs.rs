use crate::error::{GardenerError, Result};
use git2::{Commit, ErrorCode, Oid, Repository, Signature, Time};
use std::path::{Path, PathBuf};

pub struct Author<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub epoch_second: i64,
}

/// The archive root, as seen by the version control side effect.
pub enum Workspace {
    Git { root: PathBuf, repository: Repository },
    Plain { root: PathBuf },
}

impl Workspace {
    /// `.git`が存在すればGitリポジトリとして開く
    pub fn probe(root: &Path) -> Result<Self> {
        if !root.join(".git").exists() {
            tracing::info!("{} is not a git repository, commits are skipped", root.display());
            return Ok(Workspace::Plain {
                root: root.to_path_buf(),
            });
        }

        let repository = Repository::open(root).map_err(|e| GardenerError::vcs(root, e))?;
        Ok(Workspace::Git {
            root: root.to_path_buf(),
            repository,
        })
    }

    pub fn is_versioned(&self) -> bool {
        matches!(self, Workspace::Git { .. })
    }

    pub fn root(&self) -> &Path {
        match self {
            Workspace::Git { root, .. } | Workspace::Plain { root } => root,
        }
    }

    /// Stages `relative` and commits it alone. Returns `None` for a plain directory.
    pub fn record(&self, relative: &Path, message: &str, author: &Author) -> Result<Option<Oid>> {
        match self {
            Workspace::Plain { .. } => Ok(None),
            Workspace::Git { root, repository } => commit(repository, relative, message, author)
                .map(Some)
                .map_err(|e| GardenerError::vcs(&root.join(relative), e)),
        }
    }
}

fn commit(
    repository: &Repository,
    relative: &Path,
    message: &str,
    author: &Author,
) -> std::result::Result<Oid, git2::Error> {
    let mut index = repository.index()?;
    index.add_path(relative)?;
    index.write()?;
    let tree = repository.find_tree(index.write_tree()?)?;

    let signature = Signature::new(author.name, author.email, &Time::new(author.epoch_second, 0))?;

    let parent: Option<Commit> = match repository.head() {
        Ok(head) => Some(head.peel_to_commit()?),
        Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => None,
        Err(e) => return Err(e),
    };
    let parents: Vec<&Commit> = parent.iter().collect();

    repository.commit(
        Some("HEAD"),
        &signature,
        &signature,
        message,
        &tree,
        &parents,
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn author() -> Author<'static> {
        Author {
            name: "alice",
            email: "alice@example.com",
            epoch_second: 1560083640,
        }
    }

    #[test]
    fn probe_plain_directory() {
        let root = TempDir::new().unwrap();
        let workspace = Workspace::probe(root.path()).unwrap();

        assert!(!workspace.is_versioned());
        assert_eq!(workspace.root(), root.path());

        fs::write(root.path().join("Main.rs"), "fn main() {}").unwrap();
        let oid = workspace
            .record(Path::new("Main.rs"), "message", &author())
            .unwrap();
        assert_eq!(oid, None);
    }

    #[test]
    fn commit_with_submission_time() {
        let root = TempDir::new().unwrap();
        Repository::init(root.path()).unwrap();
        let workspace = Workspace::probe(root.path()).unwrap();
        assert!(workspace.is_versioned());

        fs::create_dir_all(root.path().join("abc130/abc130_a/1")).unwrap();
        fs::write(root.path().join("abc130/abc130_a/1/Main.rs"), "fn main() {}").unwrap();
        let first = workspace
            .record(Path::new("abc130/abc130_a/1/Main.rs"), "first", &author())
            .unwrap()
            .unwrap();

        fs::create_dir_all(root.path().join("abc130/abc130_b/2")).unwrap();
        fs::write(root.path().join("abc130/abc130_b/2/Main.rs"), "fn main() {}").unwrap();
        let second = workspace
            .record(Path::new("abc130/abc130_b/2/Main.rs"), "second", &author())
            .unwrap()
            .unwrap();

        let repository = Repository::open(root.path()).unwrap();
        let commit = repository.find_commit(second).unwrap();
        assert_eq!(commit.message(), Some("second"));
        assert_eq!(commit.author().name(), Some("alice"));
        assert_eq!(commit.author().email(), Some("alice@example.com"));
        assert_eq!(commit.author().when().seconds(), 1560083640);
        assert_eq!(commit.committer().when().seconds(), 1560083640);
        assert_eq!(commit.parent_ids().collect::<Vec<_>>(), vec![first]);

        let tree = commit.tree().unwrap();
        assert!(tree
            .get_path(Path::new("abc130/abc130_a/1/Main.rs"))
            .is_ok());
        assert!(tree
            .get_path(Path::new("abc130/abc130_b/2/Main.rs"))
            .is_ok());
    }

    #[test]
    fn fail_to_stage_missing_file() {
        let root = TempDir::new().unwrap();
        Repository::init(root.path()).unwrap();
        let workspace = Workspace::probe(root.path()).unwrap();

        let result = workspace.record(Path::new("missing/Main.rs"), "message", &author());
        assert!(matches!(result, Err(GardenerError::VCSError { .. })));
    }
}
