//! Passphrase strength estimation.
//!
//! The classification looks only at length and character diversity of
//! the assembled passphrase. Composition (digits, symbols) is detected
//! and reported but does not move the label.

mod score;

pub use score::{score, Strength, StrengthReport};
