//! Character-class constrained password generation and strength scoring.
//!
//! ```
//! use devkit_password::{generate, score, CharClass, Strength};
//!
//! let secret = generate(16, &CharClass::ALL).expect("classes enabled");
//! assert_eq!(secret.chars().count(), 16);
//! assert_eq!(score(&secret).strength, Strength::VeryStrong);
//! ```

#![forbid(unsafe_code)]

mod charset;
mod generator;
mod strength;

pub use charset::{CharClass, AMBIGUOUS};
pub use generator::{
    generate, generate_with_options, generate_with_rng, GenerationError, PasswordOptions, MAX_LENGTH,
};
pub use strength::{score, Strength, StrengthScore};
