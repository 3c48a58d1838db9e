use std::{
    path::{Path, PathBuf},
    process::Stdio,
    sync::{Arc, OnceLock},
};

use tokio::{process::Command, sync::Mutex};

use crate::{config::ToolConfig, error::FfError};

use super::util::map_spawn_error;

/// Runs `ffprobe` duration queries one at a time.
///
/// Clones share the same lock, so no two probes issued through one
/// coordinator ever have overlapping child processes. [`DurationProber::shared`]
/// is the process-wide coordinator.
#[derive(Clone, Debug)]
pub struct DurationProber {
    ffprobe: PathBuf,
    lock: Arc<Mutex<()>>,
}

static SHARED: OnceLock<DurationProber> = OnceLock::new();

impl DurationProber {
    pub fn new(config: &ToolConfig) -> Self {
        Self {
            ffprobe: config.ffprobe_path(),
            lock: Arc::new(Mutex::new(())),
        }
    }

    pub fn shared() -> &'static DurationProber {
        SHARED.get_or_init(|| DurationProber::new(&ToolConfig::from_env()))
    }

    pub fn ffprobe_path(&self) -> &Path {
        &self.ffprobe
    }

    /// Duration of the first video stream in whole seconds (fraction truncated).
    pub async fn probe_duration(&self, input: impl AsRef<Path>) -> Result<u64, FfError> {
        let input = input.as_ref();
        let _guard = self.lock.lock().await;

        tracing::debug!(input = %input.display(), "probing duration");

        let output = Command::new(&self.ffprobe)
            .arg("-v")
            .arg("error")
            .arg("-select_streams")
            .arg("v:0")
            .arg("-show_entries")
            .arg("stream=duration")
            .arg("-of")
            .arg("default=noprint_wrappers=1:nokey=1")
            .arg(input)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|err| {
                let err = map_spawn_error(&self.ffprobe, err, FfError::ProbeLaunch);
                tracing::error!(error = %err, "ffprobe could not be started");
                err
            })?;

        if !output.status.success() {
            tracing::warn!(status = %output.status, "ffprobe exited unsuccessfully");
        }

        let text = String::from_utf8_lossy(&output.stdout);
        parse_duration(&text)
    }
}

/// Parses `ffprobe` duration output such as `"12.345\n"` into whole seconds.
pub fn parse_duration(raw: &str) -> Result<u64, FfError> {
    let cleaned: String = raw.chars().filter(|ch| !matches!(ch, '\n' | '\r')).collect();
    let whole = cleaned.split('.').next().unwrap_or_default();

    whole
        .parse::<u64>()
        .map_err(|_| FfError::probe_parse(format!("{cleaned:?}")))
}
