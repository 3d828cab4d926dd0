use crate::error::{DiceError, DiceResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::warn;

pub const DEFAULT_ROLLS: usize = 1000;
pub const DEFAULT_DICE_COUNT: usize = 3;
pub const DEFAULT_FACES: u8 = 6;

/// A simulation request: how many independent rolls, how many dice are
/// thrown together per roll, and how many faces each die has.
///
/// Face values are stored as single bytes, so 255 faces is a hard ceiling.
/// Immutable once a store has been built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RollConfig {
    rolls: usize,
    dice_count: usize,
    faces: u8,
}

impl RollConfig {
    pub fn new(rolls: usize, dice_count: usize, faces: u8) -> DiceResult<Self> {
        if dice_count == 0 {
            return Err(DiceError::Config("dice count must be >= 1".into()));
        }
        if faces == 0 {
            return Err(DiceError::Config("face count must be >= 1".into()));
        }
        Ok(Self {
            rolls,
            dice_count,
            faces,
        })
    }

    /// Parse a roll declaration of the form `"<rolls>*<dice>D<faces>"`,
    /// e.g. `"1000000*3D6"`. Whitespace around `*` is tolerated and the `D`
    /// is case-insensitive.
    ///
    /// Any malformed or invalid declaration (zero dice, faces above 255, ...)
    /// falls back to the default `1000*3D6` instead of failing; the caller
    /// always gets a usable config.
    pub fn parse(decl: &str) -> Self {
        match Self::try_parse(decl) {
            Some(config) => config,
            None => {
                let fallback = Self::default();
                warn!("unrecognized roll declaration {decl:?}, using default {fallback}");
                fallback
            }
        }
    }

    fn try_parse(decl: &str) -> Option<Self> {
        let (rolls, dice) = decl.split_once('*')?;
        let rolls: usize = rolls.trim().parse().ok()?;
        let (count, faces) = dice.trim().split_once(['D', 'd'])?;
        let count: usize = count.trim().parse().ok()?;
        let faces: u8 = faces.trim().parse().ok()?;
        Self::new(rolls, count, faces).ok()
    }

    pub fn rolls(&self) -> usize {
        self.rolls
    }

    pub fn dice_count(&self) -> usize {
        self.dice_count
    }

    pub fn faces(&self) -> u8 {
        self.faces
    }

    /// `faces` widened for use as a buffer length.
    pub fn face_count(&self) -> usize {
        self.faces as usize
    }
}

impl Default for RollConfig {
    fn default() -> Self {
        Self {
            rolls: DEFAULT_ROLLS,
            dice_count: DEFAULT_DICE_COUNT,
            faces: DEFAULT_FACES,
        }
    }
}

impl fmt::Display for RollConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}*{}D{}", self.rolls, self.dice_count, self.faces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_well_formed() {
        let config = RollConfig::parse("1000000*3D6");
        assert_eq!(config.rolls(), 1_000_000);
        assert_eq!(config.dice_count(), 3);
        assert_eq!(config.faces(), 6);
    }

    #[test]
    fn parse_tolerates_spacing_and_case() {
        let config = RollConfig::parse("500 * 2d20");
        assert_eq!(config.rolls(), 500);
        assert_eq!(config.dice_count(), 2);
        assert_eq!(config.faces(), 20);
    }

    #[test]
    fn parse_falls_back_on_garbage() {
        for decl in ["", "3D6", "ten*3D6", "100*3X6", "100*0D6", "100*3D300"] {
            assert_eq!(RollConfig::parse(decl), RollConfig::default(), "decl {decl:?}");
        }
    }

    #[test]
    fn new_rejects_degenerate_dims() {
        assert!(RollConfig::new(10, 0, 6).is_err());
        assert!(RollConfig::new(10, 3, 0).is_err());
        assert!(RollConfig::new(0, 3, 6).is_ok()); // zero rolls is a valid, empty batch
    }

    #[test]
    fn display_round_trips() {
        let config = RollConfig::new(42, 5, 12).unwrap();
        assert_eq!(RollConfig::parse(&config.to_string()), config);
    }
}
