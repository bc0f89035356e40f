//! Metrics collection and registry.

use crate::generator::{GeneratedPassphrase, GenerationError};
use prometheus::{Encoder, IntCounter, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};
use thiserror::Error;

/// Errors that can occur during metrics operations.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("prometheus error: {0}")]
    Prometheus(#[from] prometheus::Error),
}

/// Prometheus registry tracking generation outcomes.
pub struct MetricsRegistry {
    registry: Registry,
    generated_total: IntCounter,
    words_total: IntCounter,
    failures_total: IntCounterVec,
    strength_total: IntCounterVec,
    last_total_length: IntGauge,
}

impl MetricsRegistry {
    /// Creates a new registry with all generation metrics registered.
    pub fn new() -> Result<Self, MetricsError> {
        let registry = Registry::new();

        let generated_total = IntCounter::new(
            "kelime_sifre_generated_total",
            "Total number of passphrases generated",
        )?;
        let words_total = IntCounter::new(
            "kelime_sifre_words_total",
            "Total number of words drawn into passphrases",
        )?;
        let failures_total = IntCounterVec::new(
            Opts::new(
                "kelime_sifre_failures_total",
                "Total number of failed generation requests by error kind",
            ),
            &["kind"],
        )?;
        let strength_total = IntCounterVec::new(
            Opts::new(
                "kelime_sifre_strength_total",
                "Generated passphrases by strength classification",
            ),
            &["strength"],
        )?;
        let last_total_length = IntGauge::new(
            "kelime_sifre_last_total_length",
            "Character count of the most recent passphrase",
        )?;

        registry.register(Box::new(generated_total.clone()))?;
        registry.register(Box::new(words_total.clone()))?;
        registry.register(Box::new(failures_total.clone()))?;
        registry.register(Box::new(strength_total.clone()))?;
        registry.register(Box::new(last_total_length.clone()))?;

        Ok(Self {
            registry,
            generated_total,
            words_total,
            failures_total,
            strength_total,
            last_total_length,
        })
    }

    /// Records the outcome of one `generate` call.
    pub fn record(&self, result: &Result<GeneratedPassphrase, GenerationError>) {
        match result {
            Ok(passphrase) => self.record_success(passphrase),
            Err(error) => self.record_failure(error),
        }
    }

    pub fn record_success(&self, passphrase: &GeneratedPassphrase) {
        self.generated_total.inc();
        self.words_total.inc_by(passphrase.word_count() as u64);
        self.strength_total
            .with_label_values(&[passphrase.strength().as_str()])
            .inc();
        self.last_total_length.set(passphrase.total_length() as i64);
    }

    pub fn record_failure(&self, error: &GenerationError) {
        self.failures_total
            .with_label_values(&[error.kind().as_str()])
            .inc();
    }

    /// Encodes all metrics in Prometheus text format.
    pub fn encode(&self) -> Result<String, MetricsError> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{GenerationRequest, PassphraseGenerator};
    use crate::pool::MemoryProvider;

    #[test]
    fn test_registry_creation() {
        assert!(MetricsRegistry::new().is_ok());
    }

    #[test]
    fn test_records_outcomes() {
        let registry = MetricsRegistry::new().unwrap();
        let generator = PassphraseGenerator::new(MemoryProvider::from_words(["ada", "kar"]));

        registry.record(&generator.generate(&GenerationRequest::new(2, vec![3])));
        registry.record(&generator.generate(&GenerationRequest::new(0, vec![3])));
        registry.record(&generator.generate(&GenerationRequest::new(1, vec![9])));

        let output = registry.encode().unwrap();
        assert!(output.contains("kelime_sifre_generated_total 1"));
        assert!(output.contains("kelime_sifre_words_total 2"));
        assert!(output.contains("kelime_sifre_last_total_length 7"));
        assert!(output.contains(r#"kelime_sifre_failures_total{kind="input"} 1"#));
        assert!(output.contains(r#"kelime_sifre_failures_total{kind="data_unavailable"} 1"#));
        assert!(output.contains(r#"kelime_sifre_strength_total{strength="weak"} 1"#));
    }

    #[test]
    fn test_metrics_encode() {
        let registry = MetricsRegistry::new().unwrap();
        let output = registry.encode().unwrap();

        assert!(output.contains("kelime_sifre_generated_total"));
        assert!(output.contains("kelime_sifre_last_total_length"));
    }
}
