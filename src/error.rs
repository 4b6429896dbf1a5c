use std::path::PathBuf;
use thiserror::Error;

/// Why a selection was not added to the gathered phrases
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("nothing selected")]
    Empty,

    #[error("\"{0}\" is already selected")]
    Duplicate(String),

    #[error("\"{0}\" only contains simple words")]
    Ignorable(String),
}

#[derive(Error, Debug)]
pub enum GatherError {
    #[error("cannot access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    InvalidSelection(#[from] Rejection),

    #[error("no phrases have been selected")]
    NothingToSave,

    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}

impl GatherError {
    /// Informational errors leave the session as it was and need no more
    /// than a notice
    pub fn is_notice(&self) -> bool {
        matches!(self, GatherError::InvalidSelection(_) | GatherError::NothingToSave)
    }
}

pub type Result<T> = std::result::Result<T, GatherError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            GatherError::from(Rejection::Ignorable("the".into())).to_string(),
            "\"the\" only contains simple words"
        );
        let io = GatherError::Io {
            path: PathBuf::from("a.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(io.to_string(), "cannot access a.txt: gone");
        assert!(!io.is_notice());
        assert!(GatherError::NothingToSave.is_notice());
    }
}
