//! Passphrase assembly.
//!
//! Validates a [`GenerationRequest`], resolves one word pool per distinct
//! requested length, draws words, joins them, and scores the result.
//! Every failure aborts the request; no partial passphrase escapes.

mod engine;
mod error;
mod passphrase;
mod request;

pub use engine::PassphraseGenerator;
pub use error::{ErrorKind, GenerationError, ValidationCategory};
pub use passphrase::GeneratedPassphrase;
pub use request::{
    GenerationRequest, DEFAULT_SEPARATOR, DEFAULT_WORD_COUNT, DEFAULT_WORD_LENGTHS,
    MAX_WORD_COUNT, MAX_WORD_LENGTH, MIN_WORD_COUNT, MIN_WORD_LENGTH,
};
