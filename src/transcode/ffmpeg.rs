use std::{
    path::{Path, PathBuf},
    process::{ExitStatus, Stdio},
    sync::Arc,
};

use tokio::{
    io::AsyncRead,
    process::Command,
    sync::Mutex,
    task::JoinHandle,
};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::{
    config::ToolConfig,
    error::FfError,
    events::{DynRunListener, RunEvent, notify_error},
    log_buffer::LogBuffer,
    logging::log_tool_line,
};

use super::{
    args::{ArgumentBuilder, Filter, Flag},
    lines::ToolLines,
    util::{ensure_dir, map_spawn_error},
};

pub type SharedLog = Arc<Mutex<LogBuffer<String>>>;

/// How a run that got past launching ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Exited {
        invocation_id: Uuid,
        status: ExitStatus,
    },
    Cancelled {
        invocation_id: Uuid,
    },
}

impl RunOutcome {
    pub fn invocation_id(&self) -> Uuid {
        match self {
            RunOutcome::Exited { invocation_id, .. } | RunOutcome::Cancelled { invocation_id } => {
                *invocation_id
            }
        }
    }

    pub fn status(&self) -> Option<ExitStatus> {
        match self {
            RunOutcome::Exited { status, .. } => Some(*status),
            RunOutcome::Cancelled { .. } => None,
        }
    }
}

/// One configured `ffmpeg` invocation that can be run repeatedly.
///
/// Output from every run lands in the same bounded log; it is never reset.
/// Runs on one instance are serialized, runs on separate instances are not.
pub struct Transcoder {
    id: Uuid,
    ffmpeg: PathBuf,
    working_dir: PathBuf,
    builder: ArgumentBuilder,
    listeners: Vec<DynRunListener>,
    logs: SharedLog,
    run_lock: Mutex<()>,
}

impl Transcoder {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_config(&ToolConfig::from_env(), args)
    }

    pub fn with_config<I, S>(config: &ToolConfig, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: Uuid::new_v4(),
            ffmpeg: config.ffmpeg_path(),
            working_dir: PathBuf::new(),
            builder: ArgumentBuilder::new(args),
            listeners: Vec::new(),
            logs: Arc::new(Mutex::new(LogBuffer::new(config.log_capacity))),
            run_lock: Mutex::new(()),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn ffmpeg_path(&self) -> &Path {
        &self.ffmpeg
    }

    /// An empty path leaves the child in the caller's directory.
    pub fn set_working_dir(&mut self, dir: impl Into<PathBuf>) {
        self.working_dir = dir.into();
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    pub fn add_flag(&mut self, flag: impl Into<Option<Flag>>) {
        self.builder.add_flag(flag);
    }

    pub fn add_filter(&mut self, filter: impl Into<Option<Filter>>) {
        self.builder.add_filter(filter);
    }

    /// Folds the flag and filter groups into the arguments. Call once per run.
    pub fn compile(&mut self) {
        self.builder.compile();
    }

    pub fn arguments(&self) -> &ArgumentBuilder {
        &self.builder
    }

    pub fn add_listener(&mut self, listener: DynRunListener) {
        self.listeners.push(listener);
    }

    pub fn log_buffer(&self) -> SharedLog {
        Arc::clone(&self.logs)
    }

    pub async fn logs(&self) -> Vec<String> {
        self.logs.lock().await.to_vec()
    }

    pub async fn run(&self) -> Result<RunOutcome, FfError> {
        self.run_with_cancel(CancellationToken::new()).await
    }

    /// Runs `ffmpeg` and resolves once it exits or `cancel` fires.
    ///
    /// Cancellation kills the child. Either way both output streams are
    /// drained into the log before this returns.
    pub async fn run_with_cancel(&self, cancel: CancellationToken) -> Result<RunOutcome, FfError> {
        let _guard = self.run_lock.lock().await;

        let invocation_id = Uuid::new_v4();
        if cancel.is_cancelled() {
            tracing::debug!(%invocation_id, "run cancelled before launch");
            return Ok(RunOutcome::Cancelled { invocation_id });
        }

        let has_working_dir = !self.working_dir.as_os_str().is_empty();
        if has_working_dir {
            if let Err(err) = ensure_dir(&self.working_dir).await {
                let err = FfError::launch(format!(
                    "working directory {}: {err}",
                    self.working_dir.display()
                ));
                tracing::error!(%invocation_id, error = %err, "ffmpeg could not be started");
                return Err(err);
            }
        }

        let event = Arc::new(RunEvent {
            runner_id: self.id,
            invocation_id,
            command_line: self.builder.command_line(),
            working_dir: self.working_dir.clone(),
        });
        tracing::debug!(
            %invocation_id,
            command = %event.command_line,
            working_dir = %event.working_dir.display(),
            "spawning ffmpeg"
        );

        let mut command = Command::new(&self.ffmpeg);
        command.args(self.builder.argv());
        if has_working_dir {
            command.current_dir(&self.working_dir);
        }
        command.stdin(Stdio::null());
        command.stdout(Stdio::piped());
        command.stderr(Stdio::piped());
        command.kill_on_drop(true);

        let mut child = match command.spawn() {
            Ok(child) => child,
            Err(err) => {
                let err = map_spawn_error(&self.ffmpeg, err, FfError::Launch);
                tracing::error!(%invocation_id, error = %err, "ffmpeg could not be started");
                return Err(err);
            }
        };

        let stdout_handle = child
            .stdout
            .take()
            .map(|stdout| tokio::spawn(capture_stdout(stdout, Arc::clone(&self.logs))));
        let stderr_handle = child.stderr.take().map(|stderr| {
            tokio::spawn(capture_stderr(
                stderr,
                Arc::clone(&self.logs),
                self.listeners.clone(),
                Arc::clone(&event),
            ))
        });

        let outcome = tokio::select! {
            status = child.wait() => RunOutcome::Exited {
                invocation_id,
                status: status?,
            },
            _ = cancel.cancelled() => {
                tracing::info!(%invocation_id, "cancelling ffmpeg");
                child.kill().await?;
                RunOutcome::Cancelled { invocation_id }
            }
        };

        join_capture(stdout_handle).await?;
        join_capture(stderr_handle).await?;

        if let RunOutcome::Exited { status, .. } = outcome {
            if status.success() {
                tracing::debug!(%invocation_id, "ffmpeg finished successfully");
            } else {
                tracing::warn!(%invocation_id, %status, "ffmpeg exited with failure status");
            }
        }

        Ok(outcome)
    }
}

async fn capture_stdout<R>(stdout: R, logs: SharedLog)
where
    R: AsyncRead + Unpin,
{
    let mut lines = ToolLines::new(stdout);
    loop {
        match lines.next_line().await {
            Ok(Some(line)) => {
                log_tool_line("stdout", &line);
                logs.lock().await.insert(line);
            }
            Ok(None) => break,
            Err(err) => {
                tracing::warn!(error = %err, "ffmpeg stdout read failed");
                break;
            }
        }
    }
}

async fn capture_stderr<R>(
    stderr: R,
    logs: SharedLog,
    listeners: Vec<DynRunListener>,
    event: Arc<RunEvent>,
) where
    R: AsyncRead + Unpin,
{
    let mut lines = ToolLines::new(stderr);
    loop {
        let line = match lines.next_line().await {
            Ok(line) => line,
            Err(err) => {
                tracing::warn!(error = %err, "ffmpeg stderr read failed");
                None
            }
        };

        notify_error(&listeners, &event, line.as_deref()).await;

        match line {
            Some(line) => {
                log_tool_line("stderr", &line);
                logs.lock().await.insert(line);
            }
            None => break,
        }
    }
}

async fn join_capture(handle: Option<JoinHandle<()>>) -> Result<(), FfError> {
    if let Some(handle) = handle {
        handle
            .await
            .map_err(|join_err| FfError::Task(join_err.to_string()))?;
    }
    Ok(())
}
