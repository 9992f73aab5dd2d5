use crate::{Error, Result};
use std::{fmt, str::FromStr};

const GLIDER: [(i64, i64); 5] = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)];

#[rustfmt::skip]
const PULSAR: [(i64, i64); 24] = [
    (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
    (2, 0), (3, 0), (4, 0), (8, 0), (9, 0), (10, 0),
    (2, 5), (3, 5), (4, 5), (8, 5), (9, 5), (10, 5),
    (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
];

/// A set of cells relative to a placement origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pattern {
    Glider,
    Pulsar,
    /// Arbitrary offsets, placed as given.
    Custom(Vec<(i64, i64)>),
}

impl Pattern {
    pub const ALL_NAMED: [Pattern; 2] = [Pattern::Glider, Pattern::Pulsar];

    pub fn offsets(&self) -> &[(i64, i64)] {
        match self {
            Self::Glider => &GLIDER,
            Self::Pulsar => &PULSAR,
            Self::Custom(offsets) => offsets,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Glider => "glider",
            Self::Pulsar => "pulsar",
            Self::Custom(_) => "custom",
        }
    }

    /// Where the control panel places the pattern.
    pub fn default_origin(&self) -> (i64, i64) {
        match self {
            Self::Pulsar => (15, 15),
            _ => (1, 1),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL_NAMED
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidArgument(format!("unknown pattern '{}'", s)))
    }
}
