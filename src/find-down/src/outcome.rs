//! Visit decisions and search modes.

use std::ops::{BitOr, BitOrAssign};

/// Bit flag: include the path in the results.
pub const INCLUDE: u8 = 1;

/// Bit flag: do not descend into the path.
pub const SKIP: u8 = 4;

/// Bit flag: start no further work after this path.
pub const BREAK: u8 = 8;

/// What to do with a path a test was evaluated against.
///
/// The three decisions are independent and combine freely, e.g.
/// include and stop, or skip and stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Outcome {
    /// Attach the path to the results.
    pub include: bool,

    /// Do not descend into the path, even if it is a directory.
    pub skip: bool,

    /// Break: stop the whole search once this path is handled. Visits
    /// already in flight still finish and contribute.
    pub stop: bool,
}

impl Outcome {
    /// No decision: not included, descend normally.
    pub const NONE: Self = Self {
        include: false,
        skip: false,
        stop: false,
    };

    pub const INCLUDE: Self = Self {
        include: true,
        skip: false,
        stop: false,
    };

    pub const SKIP: Self = Self {
        include: false,
        skip: true,
        stop: false,
    };

    pub const BREAK: Self = Self {
        include: false,
        skip: false,
        stop: true,
    };

    /// Decodes the `INCLUDE`/`SKIP`/`BREAK` bit flags. Other bits are ignored.
    pub fn from_bits(bits: u8) -> Self {
        Self {
            include: bits & INCLUDE == INCLUDE,
            skip: bits & SKIP == SKIP,
            stop: bits & BREAK == BREAK,
        }
    }

    /// Encodes this outcome as bit flags.
    pub fn bits(self) -> u8 {
        let mut bits = 0;
        if self.include {
            bits |= INCLUDE;
        }
        if self.skip {
            bits |= SKIP;
        }
        if self.stop {
            bits |= BREAK;
        }
        bits
    }

    /// Returns whether no decision was made.
    pub fn is_none(self) -> bool {
        !(self.include || self.skip || self.stop)
    }
}

impl BitOr for Outcome {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            include: self.include || rhs.include,
            skip: self.skip || rhs.skip,
            stop: self.stop || rhs.stop,
        }
    }
}

impl BitOrAssign for Outcome {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl From<u8> for Outcome {
    fn from(bits: u8) -> Self {
        Self::from_bits(bits)
    }
}

/// `true` includes the path; `false` is no decision.
impl From<bool> for Outcome {
    fn from(include: bool) -> Self {
        if include { Self::INCLUDE } else { Self::NONE }
    }
}

impl From<Option<Outcome>> for Outcome {
    fn from(outcome: Option<Outcome>) -> Self {
        outcome.unwrap_or_default()
    }
}

impl From<()> for Outcome {
    fn from((): ()) -> Self {
        Self::NONE
    }
}

/// Whether a search stops at its first match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FindMode {
    /// Collect every match.
    #[default]
    All,

    /// Stop the whole search at the first accepted match.
    First,
}

impl FindMode {
    /// Returns a human-readable description of the mode.
    pub fn description(&self) -> &'static str {
        match self {
            Self::All => "all matches",
            Self::First => "first match",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bits_decode() {
        assert_eq!(Outcome::from_bits(0), Outcome::NONE);
        assert_eq!(Outcome::from_bits(INCLUDE), Outcome::INCLUDE);
        assert_eq!(Outcome::from_bits(SKIP), Outcome::SKIP);
        assert_eq!(Outcome::from_bits(BREAK), Outcome::BREAK);

        let combined = Outcome::from_bits(INCLUDE | BREAK);
        assert!(combined.include);
        assert!(!combined.skip);
        assert!(combined.stop);

        // Unknown bits carry no meaning.
        assert!(Outcome::from_bits(2).is_none());
    }

    #[test]
    fn test_bits_encode() {
        assert_eq!(Outcome::NONE.bits(), 0);
        assert_eq!((Outcome::SKIP | Outcome::BREAK).bits(), SKIP | BREAK);
        assert_eq!(
            Outcome::from_bits(INCLUDE | SKIP | BREAK).bits(),
            INCLUDE | SKIP | BREAK
        );
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Outcome::from(true), Outcome::INCLUDE);
        assert_eq!(Outcome::from(false), Outcome::NONE);
        assert_eq!(Outcome::from(None), Outcome::NONE);
        assert_eq!(Outcome::from(Some(Outcome::SKIP)), Outcome::SKIP);
        assert_eq!(Outcome::from(INCLUDE), Outcome::INCLUDE);
        assert_eq!(Outcome::from(()), Outcome::NONE);
    }

    #[test]
    fn test_bitor_assign() {
        let mut outcome = Outcome::INCLUDE;
        outcome |= Outcome::BREAK;
        assert!(outcome.include && outcome.stop && !outcome.skip);
        assert!(!outcome.is_none());
    }

    #[test]
    fn test_mode_description() {
        assert_eq!(FindMode::default(), FindMode::All);
        assert_eq!(FindMode::First.description(), "first match");
    }
}
