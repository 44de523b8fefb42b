//! Release line (minor-version family) key

use serde::Serialize;
use std::fmt;

/// The (major, minor) pair shared by every patch release of one line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct ReleaseLine {
    pub major: u64,
    pub minor: u64,
}

impl ReleaseLine {
    pub fn new(major: u64, minor: u64) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for ReleaseLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ReleaseLine::new(1, 21).to_string(), "1.21");
    }

    #[test]
    fn test_ordering() {
        assert!(ReleaseLine::new(1, 9) < ReleaseLine::new(1, 10));
        assert!(ReleaseLine::new(1, 10) < ReleaseLine::new(2, 0));
    }
}
