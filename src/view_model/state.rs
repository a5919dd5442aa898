//! Load status of the list.

use std::fmt;

use crate::error::ErrorKind;

/// Where the list is in its fetch cycle.
///
/// The last good page is kept separately, so `Error` does not blank the
/// list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Ready,
    Error(ErrorKind),
}

impl LoadStatus {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadStatus::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, LoadStatus::Error(_))
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        match self {
            LoadStatus::Error(kind) => Some(*kind),
            _ => None,
        }
    }
}

impl fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadStatus::Idle => write!(f, "idle"),
            LoadStatus::Loading => write!(f, "loading"),
            LoadStatus::Ready => write!(f, "ready"),
            LoadStatus::Error(kind) => write!(f, "error({:?})", kind),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_helpers() {
        assert_eq!(LoadStatus::default(), LoadStatus::Idle);
        assert!(LoadStatus::Loading.is_loading());
        assert!(LoadStatus::Error(ErrorKind::Timeout).is_error());
        assert_eq!(
            LoadStatus::Error(ErrorKind::Server(500)).error_kind(),
            Some(ErrorKind::Server(500))
        );
        assert_eq!(LoadStatus::Ready.error_kind(), None);
        assert_eq!(LoadStatus::Error(ErrorKind::Timeout).to_string(), "error(Timeout)");
    }
}
