pub mod args;
mod ffmpeg;
mod lines;
mod probe;
mod util;

pub use args::{ArgumentBuilder, Filter, Flag};
pub use ffmpeg::{RunOutcome, SharedLog, Transcoder};
pub use probe::{DurationProber, parse_duration};
