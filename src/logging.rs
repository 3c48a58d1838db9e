use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "ffdrive=debug";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`
/// (default `ffdrive=debug`). Returns false when a subscriber already exists.
pub fn init_tracing() -> bool {
    if tracing::dispatcher::has_been_set() {
        return false;
    }

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}

/// Rough category of a line printed by ffmpeg or ffprobe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Error,
    Warning,
    /// `frame=... time=... speed=...` status redraws.
    Progress,
    /// `Input #`, `Output #`, `Stream #` and `Stream mapping` headers.
    Banner,
    /// Segment muxer opening a new output file.
    Segment,
    Other,
}

pub fn classify_line(line: &str) -> LineKind {
    let lowered = line.to_ascii_lowercase();

    if lowered.contains("error") || lowered.contains("failed") || lowered.contains("fatal") {
        return LineKind::Error;
    }
    if lowered.contains("warning") || lowered.contains("deprecated") {
        return LineKind::Warning;
    }
    if lowered.contains("speed=") || (lowered.starts_with("frame=") && lowered.contains("time=")) {
        return LineKind::Progress;
    }
    if lowered.starts_with("[segment @") && lowered.contains("opening '") {
        return LineKind::Segment;
    }
    if lowered.starts_with("input #")
        || lowered.starts_with("output #")
        || lowered.contains("stream #")
        || lowered.starts_with("stream mapping")
    {
        return LineKind::Banner;
    }
    LineKind::Other
}

/// Mirrors one captured line into `tracing` at a level matching its kind.
pub(crate) fn log_tool_line(stream: &'static str, line: &str) {
    match classify_line(line) {
        LineKind::Error => tracing::error!(stream, message = %line, "ffmpeg reported an error"),
        LineKind::Warning => tracing::warn!(stream, message = %line, "ffmpeg warning"),
        LineKind::Progress => tracing::debug!(stream, message = %line, "ffmpeg progress"),
        LineKind::Segment => tracing::debug!(stream, message = %line, "ffmpeg opened segment"),
        LineKind::Banner => tracing::debug!(stream, message = %line, "ffmpeg stream info"),
        LineKind::Other => tracing::trace!(stream, message = %line, "ffmpeg output"),
    }
}
