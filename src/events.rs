use std::{path::PathBuf, sync::Arc};

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

/// Snapshot of one `run()` invocation handed to every notification.
///
/// Built fresh for each run and never mutated afterwards, so listeners
/// always observe the arguments of the run that produced the line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunEvent {
    pub runner_id: Uuid,
    pub invocation_id: Uuid,
    pub command_line: String,
    pub working_dir: PathBuf,
}

/// Receives notifications raised while a transcoder runs.
#[async_trait]
pub trait RunListener: Send + Sync {
    /// Raised for every stderr line, then once more with `None` when the
    /// stream closes.
    async fn on_error(&self, event: &RunEvent, line: Option<&str>);

    /// Not raised by the runner itself.
    async fn on_warn(&self, _event: &RunEvent, _line: Option<&str>) {}

    /// Not raised by the runner itself.
    async fn on_new_segment(&self, _event: &RunEvent, _line: Option<&str>) {}
}

pub type DynRunListener = Arc<dyn RunListener>;

pub(crate) async fn notify_error(listeners: &[DynRunListener], event: &RunEvent, line: Option<&str>) {
    for listener in listeners {
        listener.on_error(event, line).await;
    }
}
