//! Per-dart input: multipliers, darts and the text grammar that produces them.
//!
//! A dart is written as a multiplier prefix (`s`, `d` or `t`) followed by a
//! board number from 1 to 20, e.g. `t20` or `D10`. The bull is entered as its
//! value: `25` for the outer bull, `50` for the bullseye.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Lowest numbered segment on the board.
pub const MIN_SEGMENT: u8 = 1;

/// Highest numbered segment on the board.
pub const MAX_SEGMENT: u8 = 20;

/// Ring a dart landed in.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Multiplier {
    /// Single ring, scores the segment's face value.
    #[display("S")]
    Single,
    /// Double ring, scores twice the face value.
    #[display("D")]
    Double,
    /// Treble ring, scores three times the face value.
    #[display("T")]
    Treble,
}

impl Multiplier {
    /// Returns the factor applied to the segment number.
    pub fn factor(self) -> u32 {
        match self {
            Multiplier::Single => 1,
            Multiplier::Double => 2,
            Multiplier::Treble => 3,
        }
    }

    /// Maps an input prefix character to a multiplier (case-insensitive).
    #[instrument]
    pub fn from_prefix(prefix: char) -> Option<Self> {
        match prefix.to_ascii_lowercase() {
            's' => Some(Multiplier::Single),
            'd' => Some(Multiplier::Double),
            't' => Some(Multiplier::Treble),
            _ => None,
        }
    }
}

/// A single scoring dart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dart {
    /// A numbered segment hit in one of its rings.
    Segment {
        /// Ring the dart landed in.
        multiplier: Multiplier,
        /// Segment number, 1 to 20.
        number: u8,
    },
    /// Outer bull, 25 points.
    OuterBull,
    /// Bullseye, 50 points.
    Bullseye,
}

impl Dart {
    /// Returns the points this dart scores.
    pub fn value(self) -> u32 {
        match self {
            Dart::Segment { multiplier, number } => multiplier.factor() * u32::from(number),
            Dart::OuterBull => 25,
            Dart::Bullseye => 50,
        }
    }
}

impl std::fmt::Display for Dart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dart::Segment { multiplier, number } => write!(f, "{}{}", multiplier, number),
            Dart::OuterBull => write!(f, "25"),
            Dart::Bullseye => write!(f, "50"),
        }
    }
}

/// Reasons a dart entry is rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum DartParseError {
    /// Nothing was entered.
    #[display("Dart entry is empty")]
    Empty,

    /// Entry is a single character that is not a bull value.
    #[display("Dart entry {:?} is too short", _0)]
    TooShort(String),

    /// First character is not `s`, `d` or `t`.
    #[display("Unknown multiplier {:?}", _0)]
    UnknownMultiplier(char),

    /// Characters after the multiplier are not an integer.
    #[display("Segment {:?} is not a number", _0)]
    NotANumber(String),

    /// Segment number is outside 1 to 20.
    #[display("Segment {} is outside 1-20", _0)]
    OutOfRange(i64),
}

impl std::error::Error for DartParseError {}

impl FromStr for Dart {
    type Err = DartParseError;

    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let entry = s.trim().to_lowercase();

        match entry.as_str() {
            "" => return Err(DartParseError::Empty),
            "25" => return Ok(Dart::OuterBull),
            "50" => return Ok(Dart::Bullseye),
            _ => {}
        }

        let mut chars = entry.chars();
        let Some(prefix) = chars.next() else {
            return Err(DartParseError::Empty);
        };
        let rest = chars.as_str();
        if rest.is_empty() {
            return Err(DartParseError::TooShort(entry.clone()));
        }

        let multiplier =
            Multiplier::from_prefix(prefix).ok_or(DartParseError::UnknownMultiplier(prefix))?;

        let number: i64 = rest
            .parse()
            .map_err(|_| DartParseError::NotANumber(rest.to_string()))?;

        if !(i64::from(MIN_SEGMENT)..=i64::from(MAX_SEGMENT)).contains(&number) {
            return Err(DartParseError::OutOfRange(number));
        }

        Ok(Dart::Segment {
            multiplier,
            // Bounded to 1..=20 above.
            number: number as u8,
        })
    }
}

/// Parses a dart entry into the points it scores.
///
/// An `Err` means the entry is not a dart; callers treat it as the invalid
/// sentinel and leave game state untouched.
#[instrument]
pub fn parse_dart(input: &str) -> Result<u32, DartParseError> {
    input.parse::<Dart>().map(Dart::value)
}
