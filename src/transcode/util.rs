use std::path::Path;

use crate::error::FfError;

/// Maps a spawn failure to a typed launch error; a missing executable is a dependency error.
pub(crate) fn map_spawn_error(
    program: &Path,
    err: std::io::Error,
    launch: fn(String) -> FfError,
) -> FfError {
    match err.kind() {
        std::io::ErrorKind::NotFound => FfError::dependency(format!(
            "{} not found",
            program.display()
        )),
        _ => launch(format!("{}: {err}", program.display())),
    }
}

pub(crate) async fn ensure_dir(dir: &Path) -> std::io::Result<()> {
    if !tokio::fs::try_exists(dir).await? {
        tracing::info!(dir = %dir.display(), "creating working directory");
        tokio::fs::create_dir_all(dir).await?;
    }
    Ok(())
}
