use procon_gardener_libs::error::{GardenerError, Result};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

pub const APP_NAME: &str = "procon-gardener";
const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub repository_path: String,
    pub user_id: String,
    pub user_email: String,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub atcoder: Service,
}

pub struct ConfigStore {
    dir: PathBuf,
}

impl ConfigStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            dir: dir.to_path_buf(),
        }
    }

    /// 設定ファイルの置き場所を決めるメソッド
    ///
    /// `PROCON_GARDENER_CONFIG_DIR`が設定されていればそれを使い、
    /// なければホームディレクトリ直下の`.procon-gardener`を使う。
    pub fn locate() -> Result<Self> {
        if let Ok(dir) = env::var("PROCON_GARDENER_CONFIG_DIR") {
            return Ok(Self::new(Path::new(&dir)));
        }

        match dirs::home_dir() {
            Some(home) => Ok(Self::new(&home.join(format!(".{}", APP_NAME)))),
            None => Err(GardenerError::config(
                Path::new("~"),
                "couldn't determine the home directory",
            )),
        }
    }

    pub fn file(&self) -> PathBuf {
        self.dir.join(CONFIG_FILE)
    }

    pub fn exists(&self) -> bool {
        self.file().is_file()
    }

    /// 空の設定ファイルを作成するメソッド
    ///
    /// `force`がfalseのときは既存のファイルを残す。
    pub fn init(&self, force: bool) -> Result<PathBuf> {
        tracing::info!("Initialize your config...");
        let file = self.file();

        if !self.dir.is_dir() {
            fs::create_dir_all(&self.dir).map_err(|e| GardenerError::io(&self.dir, e))?;
            restrict(&self.dir)?;
        }

        if force || !file.exists() {
            let content = serde_json::to_string_pretty(&Config::default())
                .map_err(|e| GardenerError::config(&file, e))?;
            fs::write(&file, content).map_err(|e| GardenerError::io(&file, e))?;
        }

        tracing::info!("Initialized your config at {}", file.display());
        Ok(file)
    }

    pub fn load(&self) -> Result<Config> {
        let file = self.file();
        let content = fs::read_to_string(&file).map_err(|e| {
            GardenerError::config(&file, format!("{} (run `{} init` first)", e, APP_NAME))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            tracing::error!("failed to parse {}: {}", file.display(), e);
            GardenerError::config(&file, e)
        })
    }

    /// Loads the config and rejects the values `archive` can't run without.
    pub fn load_validated(&self) -> Result<Config> {
        let config = self.load()?;
        let file = self.file();

        if config.atcoder.user_id.trim().is_empty() {
            return Err(GardenerError::config(&file, "atcoder.user_id is empty"));
        }
        if config.atcoder.repository_path.trim().is_empty() {
            return Err(GardenerError::config(
                &file,
                "atcoder.repository_path is empty",
            ));
        }

        Ok(config)
    }
}

#[cfg(unix)]
fn restrict(dir: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(dir, fs::Permissions::from_mode(0o700)).map_err(|e| GardenerError::io(dir, e))
}

#[cfg(not(unix))]
fn restrict(_dir: &Path) -> Result<()> {
    Ok(())
}
