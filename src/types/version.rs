use std::fmt;
use std::str::FromStr;

use crate::parse::{ParseError, parse_version};

/// A dotted platform version: `major.minor.micro[.qualifier]`.
///
/// Ordered numerically on the three numeric parts, then lexicographically on
/// the qualifier, where no qualifier sorts first.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Version {
    major: u32,
    minor: u32,
    micro: u32,
    qualifier: Option<String>,
}

impl Version {
    #[must_use]
    pub fn new(major: u32, minor: u32, micro: u32) -> Self {
        Self {
            major,
            minor,
            micro,
            qualifier: None,
        }
    }

    #[must_use]
    pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }

    #[must_use]
    pub fn major(&self) -> u32 {
        self.major
    }

    #[must_use]
    pub fn minor(&self) -> u32 {
        self.minor
    }

    #[must_use]
    pub fn micro(&self) -> u32 {
        self.micro
    }

    #[must_use]
    pub fn qualifier(&self) -> Option<&str> {
        self.qualifier.as_deref()
    }
}

impl FromStr for Version {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_version(s)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)?;
        if let Some(q) = &self.qualifier {
            write!(f, ".{q}")?;
        }
        Ok(())
    }
}
