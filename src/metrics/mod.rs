//! Prometheus metrics for passphrase generation.
//!
//! # Metrics Exposed
//!
//! - `kelime_sifre_generated_total` - Passphrases generated successfully
//! - `kelime_sifre_words_total` - Words drawn across all passphrases
//! - `kelime_sifre_failures_total{kind}` - Failed requests by error kind
//!   (`input`, `data_unavailable`, `unexpected`)
//! - `kelime_sifre_strength_total{strength}` - Generated passphrases by strength
//! - `kelime_sifre_last_total_length` - Character count of the latest passphrase
//!
//! # Example
//!
//! ```no_run
//! use kelime_sifre::{metrics::MetricsRegistry, GenerationRequest, MemoryProvider, PassphraseGenerator};
//!
//! let registry = MetricsRegistry::new().expect("Failed to create registry");
//! let generator = PassphraseGenerator::new(MemoryProvider::from_words(["deniz", "bulut"]));
//!
//! let result = generator.generate(&GenerationRequest::new(2, vec![5]));
//! registry.record(&result);
//! ```

mod collector;

pub use collector::{MetricsError, MetricsRegistry};
