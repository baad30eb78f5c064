//! Password generation and strength estimation.

pub mod charset;
pub mod crack_time;
mod generate;
pub mod strength;

pub use charset::{CharacterClass, ClassSet};
pub use generate::{
    GenerationRequest, MAX_LENGTH, MIN_LENGTH, Password, clamp_length, generate, generate_batch,
};
pub use strength::{Estimator, StrengthAssessment, StrengthColor, assess};
