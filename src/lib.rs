pub mod config;
pub mod error;
pub mod events;
pub mod log_buffer;
pub mod logging;
pub mod transcode;

pub use config::ToolConfig;
pub use error::FfError;
pub use events::{DynRunListener, RunEvent, RunListener};
pub use log_buffer::LogBuffer;
pub use transcode::{
    ArgumentBuilder, DurationProber, Filter, Flag, RunOutcome, Transcoder, parse_duration,
};
