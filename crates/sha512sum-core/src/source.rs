//! Input sources: a filesystem path or standard input (the `-` sentinel).
//!
//! Paths are carried as raw OS strings; file names need not be UTF-8.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::PathBuf;

/// Argument that selects standard input instead of a file.
pub const STDIN_SENTINEL: &str = "-";

/// Where bytes are read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Stdin,
    Path(PathBuf),
}

impl Source {
    /// Interpret a command-line argument; `-` means standard input.
    pub fn parse(arg: impl AsRef<OsStr>) -> Self {
        let arg = arg.as_ref();
        if arg == STDIN_SENTINEL {
            Source::Stdin
        } else {
            Source::Path(PathBuf::from(arg))
        }
    }

    /// Interpret the raw bytes of a path taken from a checksum-list line.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::parse(os_string_from_bytes(bytes))
    }

    /// Open the source for reading. The handle is closed when dropped.
    pub fn open(&self) -> io::Result<Box<dyn Read>> {
        match self {
            Source::Stdin => Ok(Box::new(io::stdin())),
            Source::Path(path) => Ok(Box::new(File::open(path)?)),
        }
    }

    /// Name as the user wrote it (`-` for standard input), lossily decoded.
    pub fn display_name(&self) -> String {
        match self {
            Source::Stdin => STDIN_SENTINEL.to_string(),
            Source::Path(path) => path.display().to_string(),
        }
    }

    /// Name used in diagnostics about a checksum-list document.
    pub fn diagnostic_name(&self) -> String {
        match self {
            Source::Stdin => "stdin".to_string(),
            Source::Path(path) => path.display().to_string(),
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_name())
    }
}

/// Raw bytes of an OS string, as they appear on the command line.
#[cfg(unix)]
pub fn os_str_bytes(s: &OsStr) -> Cow<'_, [u8]> {
    use std::os::unix::ffi::OsStrExt;
    Cow::Borrowed(s.as_bytes())
}

#[cfg(not(unix))]
pub fn os_str_bytes(s: &OsStr) -> Cow<'_, [u8]> {
    match s.to_string_lossy() {
        Cow::Borrowed(s) => Cow::Borrowed(s.as_bytes()),
        Cow::Owned(s) => Cow::Owned(s.into_bytes()),
    }
}

/// OS string from raw bytes read out of a checksum list.
#[cfg(unix)]
pub fn os_string_from_bytes(bytes: &[u8]) -> OsString {
    use std::os::unix::ffi::OsStrExt;
    OsStr::from_bytes(bytes).to_os_string()
}

#[cfg(not(unix))]
pub fn os_string_from_bytes(bytes: &[u8]) -> OsString {
    OsString::from(String::from_utf8_lossy(bytes).into_owned())
}
