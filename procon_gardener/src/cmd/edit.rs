use crate::modules::config::ConfigStore;
use anyhow::{Context, Result};
use std::{env, path::Path, process::Command};

pub fn run() -> Result<()> {
    let store = ConfigStore::locate()?;
    let file = store.file();

    // 設定ファイルがなければ作成だけ行う
    if !store.exists() {
        tracing::warn!("{} doesn't exist, so create it", file.display());
        store.init(true)?;
        return Ok(());
    }

    match env::var("EDITOR").ok().and_then(|editor| editor_command(&editor, &file)) {
        Some(mut command) => {
            tracing::info!("Open {} with {:?}", file.display(), command.get_program());
            let status = command
                .status()
                .with_context(|| format!("failed to launch editor {:?}", command.get_program()))?;
            if !status.success() {
                anyhow::bail!("editor exited with {}", status);
            }
        }
        None => {
            tracing::info!("EDITOR is not set, open {} with the default application", file.display());
            open::that(&file).with_context(|| format!("failed to open {}", file.display()))?;
        }
    }

    Ok(())
}

/// `$EDITOR`の値からコマンドを組み立てる。`code -w`のように引数を含んでもよい。
fn editor_command(editor: &str, file: &Path) -> Option<Command> {
    let mut words = editor.split_whitespace();
    let program = words.next()?;

    let mut command = Command::new(program);
    command.args(words).arg(file);
    Some(command)
}
