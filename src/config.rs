use std::{
    env,
    path::{Path, PathBuf},
};

pub const DEFAULT_LOG_CAPACITY: usize = 100;

const FFMPEG_BIN: &str = "ffmpeg";
const FFPROBE_BIN: &str = "ffprobe";

/// Where the external tools live and how much of their output to keep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolConfig {
    pub tool_dir: PathBuf,
    pub log_capacity: usize,
}

impl ToolConfig {
    pub fn new(tool_dir: impl Into<PathBuf>) -> Self {
        Self {
            tool_dir: tool_dir.into(),
            log_capacity: DEFAULT_LOG_CAPACITY,
        }
    }

    pub fn from_env() -> Self {
        let tool_dir = env::var_os("FFDRIVE_TOOL_DIR")
            .map(PathBuf::from)
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(current_dir);

        let log_capacity = env::var("FFDRIVE_LOG_CAPACITY")
            .ok()
            .and_then(|val| val.parse::<usize>().ok())
            .filter(|&value| value > 0)
            .unwrap_or(DEFAULT_LOG_CAPACITY);

        Self {
            tool_dir,
            log_capacity,
        }
    }

    pub fn with_log_capacity(mut self, capacity: usize) -> Self {
        self.log_capacity = capacity;
        self
    }

    pub fn ffmpeg_path(&self) -> PathBuf {
        executable_path(&self.tool_dir, FFMPEG_BIN)
    }

    pub fn ffprobe_path(&self) -> PathBuf {
        executable_path(&self.tool_dir, FFPROBE_BIN)
    }
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self::new(current_dir())
    }
}

/// `<dir>/<name>` with the platform executable suffix (`.exe` on Windows).
pub fn executable_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{name}{}", env::consts::EXE_SUFFIX))
}

fn current_dir() -> PathBuf {
    env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    static ENV_MUTEX: OnceLock<Mutex<()>> = OnceLock::new();

    #[test]
    fn config_from_env_overrides_defaults() {
        let lock = ENV_MUTEX.get_or_init(|| Mutex::new(())).lock().unwrap();

        let prev_dir = env::var_os("FFDRIVE_TOOL_DIR");
        let prev_capacity = env::var_os("FFDRIVE_LOG_CAPACITY");

        unsafe {
            env::set_var("FFDRIVE_TOOL_DIR", "/opt/ffmpeg/bin");
            env::set_var("FFDRIVE_LOG_CAPACITY", "250");
        }

        let config = ToolConfig::from_env();
        assert_eq!(config.tool_dir, PathBuf::from("/opt/ffmpeg/bin"));
        assert_eq!(config.log_capacity, 250);

        unsafe { env::set_var("FFDRIVE_LOG_CAPACITY", "0") };
        assert_eq!(ToolConfig::from_env().log_capacity, DEFAULT_LOG_CAPACITY);

        unsafe { env::remove_var("FFDRIVE_TOOL_DIR") };
        assert_eq!(
            ToolConfig::from_env().tool_dir,
            env::current_dir().unwrap()
        );

        if let Some(value) = prev_dir {
            unsafe { env::set_var("FFDRIVE_TOOL_DIR", value) };
        } else {
            unsafe { env::remove_var("FFDRIVE_TOOL_DIR") };
        }
        if let Some(value) = prev_capacity {
            unsafe { env::set_var("FFDRIVE_LOG_CAPACITY", value) };
        } else {
            unsafe { env::remove_var("FFDRIVE_LOG_CAPACITY") };
        }

        drop(lock);
    }

    #[test]
    fn executables_carry_platform_suffix() {
        let config = ToolConfig::new("/tools");
        let ffmpeg = config.ffmpeg_path();
        let ffprobe = config.ffprobe_path();

        assert!(ffmpeg.starts_with("/tools"));
        if cfg!(windows) {
            assert!(ffmpeg.ends_with("ffmpeg.exe"));
            assert!(ffprobe.ends_with("ffprobe.exe"));
        } else {
            assert!(ffmpeg.ends_with("ffmpeg"));
            assert!(ffprobe.ends_with("ffprobe"));
        }
    }
}
