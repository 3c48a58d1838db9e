use std::fmt;

pub(crate) const FLAG_SELECTOR: &str = "-f";
pub(crate) const FILTER_SELECTOR: &str = "-fflags";

/// Demuxer format flags (see "Format Options" in the ffmpeg docs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    DiscardCorrupt,
    FastSeek,
    GenPts,
    IgnDts,
    IgnIdx,
    NoBuffer,
    NoFillIn,
    NoParse,
    SortDts,
}

impl Flag {
    pub const ALL: [Flag; 9] = [
        Flag::DiscardCorrupt,
        Flag::FastSeek,
        Flag::GenPts,
        Flag::IgnDts,
        Flag::IgnIdx,
        Flag::NoBuffer,
        Flag::NoFillIn,
        Flag::NoParse,
        Flag::SortDts,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Flag::DiscardCorrupt => "discardcorrupt",
            Flag::FastSeek => "fastseek",
            Flag::GenPts => "genpts",
            Flag::IgnDts => "igndts",
            Flag::IgnIdx => "ignidx",
            Flag::NoBuffer => "nobuffer",
            Flag::NoFillIn => "nofillin",
            Flag::NoParse => "noparse",
            Flag::SortDts => "sortdts",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Multimedia filters (see "Multimedia Filters" in the ffmpeg docs).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    Concat,
    Segment,
}

impl Filter {
    pub const ALL: [Filter; 2] = [Filter::Concat, Filter::Segment];

    pub fn as_str(self) -> &'static str {
        match self {
            Filter::Concat => "concat",
            Filter::Segment => "segment",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Base arguments plus the flag and filter groups that `compile` folds in.
///
/// `compile` is not idempotent: every call appends both groups again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgumentBuilder {
    args: Vec<String>,
    flags: Vec<String>,
    filters: Vec<String>,
}

impl ArgumentBuilder {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
            flags: vec![FLAG_SELECTOR.to_string()],
            filters: vec![FILTER_SELECTOR.to_string()],
        }
    }

    /// Appends ` <flag> ` to the flag group. `None` is ignored.
    pub fn add_flag(&mut self, flag: impl Into<Option<Flag>>) {
        if let Some(flag) = flag.into() {
            self.flags.push(padded(flag.as_str()));
        }
    }

    /// Appends ` <filter> ` to the filter group. `None` is ignored.
    pub fn add_filter(&mut self, filter: impl Into<Option<Filter>>) {
        if let Some(filter) = filter.into() {
            self.filters.push(padded(filter.as_str()));
        }
    }

    pub fn compile(&mut self) {
        self.args.extend(self.flags.iter().cloned());
        self.args.extend(self.filters.iter().cloned());
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn flags(&self) -> &[String] {
        &self.flags
    }

    pub fn filters(&self) -> &[String] {
        &self.filters
    }

    /// The child's arguments joined with single spaces.
    pub fn command_line(&self) -> String {
        self.argv().join(" ")
    }

    /// Arguments as handed to the child, one entry per stored argument.
    ///
    /// Padding around flag and filter tokens is trimmed and blank entries are
    /// dropped; whitespace inside an argument (a path with spaces) is kept.
    pub fn argv(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|arg| arg.trim())
            .filter(|arg| !arg.is_empty())
            .map(str::to_owned)
            .collect()
    }
}

fn padded(token: &str) -> String {
    format!(" {token} ")
}

#[cfg(test)]
mod tests {
    include!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/unit/args_unit.rs"));
}
