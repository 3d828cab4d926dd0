pub mod classify;
pub mod config;
pub mod error;
pub mod generate;
pub mod stats;
pub mod store;
pub mod view;

pub use classify::{
    ClassifiedRolls, FaceClassifier, RangeSet, RawSumClassifier, RawTwistedSumClassifier,
    RollClassifier, SumClassifier, TupleClassifier, TwistedSumClassifier,
};
pub use config::RollConfig;
pub use error::{DiceError, DiceResult};
pub use generate::{generate, generate_seeded};
pub use stats::RollStats;
pub use store::RollResults;
pub use view::{RollSnapshot, RollView};
