use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// Rejected game configuration.
///
/// Raised once at startup, before an [`Engine`](crate::Engine) exists. The
/// simulation itself has no failure modes.
#[derive(Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    Io(PathBuf, io::Error),
    /// The config file is not valid TOML for [`Config`](crate::Config).
    Parse(String),
    /// A size, speed or count that must be strictly positive.
    NonPositive { field: &'static str, value: i64 },
    /// An offset that may be zero but not negative.
    Negative { field: &'static str, value: i64 },
    /// A size or speed above what the arena allows.
    TooLarge {
        field: &'static str,
        value: i64,
        max: i64,
    },
    /// The arena cannot hold its paddles and ball.
    ArenaTooSmall(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::Io(path, err) => {
                write!(f, "failed to read config {}: {}", path.display(), err)
            }
            ConfigError::Parse(msg) => write!(f, "invalid config: {}", msg),
            ConfigError::NonPositive { field, value } => {
                write!(f, "`{}` must be greater than zero, got {}", field, value)
            }
            ConfigError::Negative { field, value } => {
                write!(f, "`{}` must not be negative, got {}", field, value)
            }
            ConfigError::TooLarge { field, value, max } => {
                write!(f, "`{}` must be at most {}, got {}", field, max, value)
            }
            ConfigError::ArenaTooSmall(reason) => write!(f, "arena too small: {}", reason),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ConfigError::Io(_, err) => Some(err),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}
