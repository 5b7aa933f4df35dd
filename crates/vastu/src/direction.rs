//! The 32 compass-subdivision labels and their fixed mapping to ray indices.
//!
//! Rays are numbered 0..32 clockwise (y-down) starting from due east. The
//! label of a ray is a pure function of its index:
//!
//! | ray index      | label   |
//! |----------------|---------|
//! | 0..=3          | E5..=E8 |
//! | 4..=11         | S1..=S8 |
//! | 12..=19        | W1..=W8 |
//! | 20..=27        | N1..=N8 |
//! | 28..=31        | E1..=E4 |

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of direction labels (and rays).
pub const LABEL_COUNT: usize = 32;

/// Compass quarter prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Quarter {
    N,
    E,
    S,
    W,
}

/// One of `{N,E,S,W} × {1..=8}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DirectionLabel {
    quarter: Quarter,
    step: u8,
}

/// Error parsing a label such as `"N9"` or `"Q1"`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction label {0:?}")]
pub struct ParseLabelError(pub String);

impl Quarter {
    pub const ALL: [Quarter; 4] = [Quarter::N, Quarter::E, Quarter::S, Quarter::W];

    fn letter(self) -> char {
        match self {
            Quarter::N => 'N',
            Quarter::E => 'E',
            Quarter::S => 'S',
            Quarter::W => 'W',
        }
    }
}

impl DirectionLabel {
    /// Build a label at compile time. Panics (at compile time in consts) if
    /// `step` is outside 1..=8.
    pub const fn of(quarter: Quarter, step: u8) -> Self {
        assert!(step >= 1 && step <= 8, "direction step must be 1..=8");
        Self { quarter, step }
    }

    pub fn new(quarter: Quarter, step: u8) -> Option<Self> {
        (1..=8).contains(&step).then_some(Self { quarter, step })
    }

    #[inline]
    pub fn quarter(self) -> Quarter {
        self.quarter
    }

    #[inline]
    pub fn step(self) -> u8 {
        self.step
    }

    /// Label for ray `index`; indices wrap modulo 32.
    pub fn for_ray_index(index: usize) -> Self {
        let i = index % LABEL_COUNT;
        // Every arm yields a step in 1..=8.
        let (quarter, step) = match i {
            20..=27 => (Quarter::N, i - 19),
            28..=31 => (Quarter::E, i - 27),
            0..=3 => (Quarter::E, i + 5),
            4..=11 => (Quarter::S, i - 3),
            _ => (Quarter::W, i - 11),
        };
        Self { quarter, step: step as u8 }
    }

    /// Inverse of [`for_ray_index`](Self::for_ray_index).
    pub fn ray_index(self) -> usize {
        let step = self.step as usize;
        match self.quarter {
            Quarter::N => step + 19,
            Quarter::E if step >= 5 => step - 5,
            Quarter::E => step + 27,
            Quarter::S => step + 3,
            Quarter::W => step + 11,
        }
    }

    /// Dense index 0..32 in N1..N8, E1..E8, S1..S8, W1..W8 order.
    #[inline]
    pub fn slot(self) -> usize {
        self.quarter as usize * 8 + (self.step as usize - 1)
    }

    /// All labels in ray-index order (E5 first).
    pub fn all() -> impl Iterator<Item = DirectionLabel> {
        (0..LABEL_COUNT).map(Self::for_ray_index)
    }
}

impl fmt::Display for DirectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.quarter.letter(), self.step)
    }
}

impl FromStr for DirectionLabel {
    type Err = ParseLabelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseLabelError(s.to_string());
        let mut chars = s.chars();
        let quarter = match chars.next() {
            Some('N') => Quarter::N,
            Some('E') => Quarter::E,
            Some('S') => Quarter::S,
            Some('W') => Quarter::W,
            _ => return Err(err()),
        };
        // Exactly one digit: no sign, no leading zeros.
        let step = match (chars.next(), chars.next()) {
            (Some(d @ '1'..='8'), None) => d as u8 - b'0',
            _ => return Err(err()),
        };
        Self::new(quarter, step).ok_or_else(err)
    }
}

impl TryFrom<String> for DirectionLabel {
    type Error = ParseLabelError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<DirectionLabel> for String {
    fn from(label: DirectionLabel) -> Self {
        label.to_string()
    }
}

// ============================================================================
// NAMED LABELS
// ============================================================================

pub const N1: DirectionLabel = DirectionLabel::of(Quarter::N, 1);
pub const N2: DirectionLabel = DirectionLabel::of(Quarter::N, 2);
pub const N3: DirectionLabel = DirectionLabel::of(Quarter::N, 3);
pub const N4: DirectionLabel = DirectionLabel::of(Quarter::N, 4);
pub const N5: DirectionLabel = DirectionLabel::of(Quarter::N, 5);
pub const N6: DirectionLabel = DirectionLabel::of(Quarter::N, 6);
pub const N7: DirectionLabel = DirectionLabel::of(Quarter::N, 7);
pub const N8: DirectionLabel = DirectionLabel::of(Quarter::N, 8);
pub const E1: DirectionLabel = DirectionLabel::of(Quarter::E, 1);
pub const E2: DirectionLabel = DirectionLabel::of(Quarter::E, 2);
pub const E3: DirectionLabel = DirectionLabel::of(Quarter::E, 3);
pub const E4: DirectionLabel = DirectionLabel::of(Quarter::E, 4);
pub const E5: DirectionLabel = DirectionLabel::of(Quarter::E, 5);
pub const E6: DirectionLabel = DirectionLabel::of(Quarter::E, 6);
pub const E7: DirectionLabel = DirectionLabel::of(Quarter::E, 7);
pub const E8: DirectionLabel = DirectionLabel::of(Quarter::E, 8);
pub const S1: DirectionLabel = DirectionLabel::of(Quarter::S, 1);
pub const S2: DirectionLabel = DirectionLabel::of(Quarter::S, 2);
pub const S3: DirectionLabel = DirectionLabel::of(Quarter::S, 3);
pub const S4: DirectionLabel = DirectionLabel::of(Quarter::S, 4);
pub const S5: DirectionLabel = DirectionLabel::of(Quarter::S, 5);
pub const S6: DirectionLabel = DirectionLabel::of(Quarter::S, 6);
pub const S7: DirectionLabel = DirectionLabel::of(Quarter::S, 7);
pub const S8: DirectionLabel = DirectionLabel::of(Quarter::S, 8);
pub const W1: DirectionLabel = DirectionLabel::of(Quarter::W, 1);
pub const W2: DirectionLabel = DirectionLabel::of(Quarter::W, 2);
pub const W3: DirectionLabel = DirectionLabel::of(Quarter::W, 3);
pub const W4: DirectionLabel = DirectionLabel::of(Quarter::W, 4);
pub const W5: DirectionLabel = DirectionLabel::of(Quarter::W, 5);
pub const W6: DirectionLabel = DirectionLabel::of(Quarter::W, 6);
pub const W7: DirectionLabel = DirectionLabel::of(Quarter::W, 7);
pub const W8: DirectionLabel = DirectionLabel::of(Quarter::W, 8);
