use std::fmt;

use crate::body::BodyId;
use crate::path::SystemPath;

/// Everything that can go wrong while building, querying or editing a
/// star system.
#[derive(Debug)]
pub enum SysgenError {
    /// The sector source has no entry for this system.
    UnknownSystem(SystemPath),
    /// Procedural generation supports one to four stars.
    InvalidStarCount(usize),
    /// A custom body orbits inside 1.2 radii of its primary.
    OrbitTooClose { body: String },
    /// A custom system declares a different star count than its body tree holds.
    StarCountMismatch { declared: usize, found: usize },
    /// A body path was resolved against a different system.
    WrongSystem { expected: SystemPath, got: SystemPath },
    /// A system path was given where a body path is required.
    NotABodyPath(SystemPath),
    NoSuchBody(BodyId),
    BodyHasChildren(BodyId),
    CannotDestroyRoot(BodyId),
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for SysgenError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SysgenError::UnknownSystem(path) => write!(f, "no sector entry for system {}", path),
            SysgenError::InvalidStarCount(n) => {
                write!(f, "unsupported star count {} (expected 1 to 4)", n)
            }
            SysgenError::OrbitTooClose { body } => {
                write!(f, "custom body '{}' orbits too close to its primary", body)
            }
            SysgenError::StarCountMismatch { declared, found } => write!(
                f,
                "custom system declares {} stars but defines {}",
                declared, found
            ),
            SysgenError::WrongSystem { expected, got } => {
                write!(f, "path {} does not belong to system {}", got, expected)
            }
            SysgenError::NotABodyPath(path) => write!(f, "{} is not a body path", path),
            SysgenError::NoSuchBody(id) => write!(f, "no body with id {}", id),
            SysgenError::BodyHasChildren(id) => {
                write!(f, "body {} still has children and cannot be removed", id)
            }
            SysgenError::CannotDestroyRoot(id) => {
                write!(f, "body {} is the system root and cannot be removed", id)
            }
            SysgenError::Io(err) => write!(f, "I/O error: {}", err),
            SysgenError::Json(err) => write!(f, "JSON error: {}", err),
        }
    }
}

impl std::error::Error for SysgenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SysgenError::Io(err) => Some(err),
            SysgenError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SysgenError {
    fn from(err: std::io::Error) -> Self {
        SysgenError::Io(err)
    }
}

impl From<serde_json::Error> for SysgenError {
    fn from(err: serde_json::Error) -> Self {
        SysgenError::Json(err)
    }
}
