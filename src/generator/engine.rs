//! Pool resolution and random word drawing.

use super::{GeneratedPassphrase, GenerationError, GenerationRequest};
use crate::pool::WordPoolProvider;
use rand::Rng;
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use std::collections::BTreeMap;

/// Builds passphrases from the pools of a [`WordPoolProvider`].
///
/// Holds no per-request state; one instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct PassphraseGenerator<P> {
    provider: P,
}

impl<P: WordPoolProvider> PassphraseGenerator<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns the underlying provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Generates a passphrase using a freshly seeded ChaCha20 stream.
    pub fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedPassphrase, GenerationError> {
        let mut rng = ChaCha20Rng::from_entropy();
        self.generate_with_rng(request, &mut rng)
    }

    /// Generates a passphrase drawing from the given random source.
    ///
    /// Each word re-draws its length uniformly from the valid lengths,
    /// then a word uniformly from that pool. Both draws are with
    /// replacement.
    pub fn generate_with_rng<R: Rng>(
        &self,
        request: &GenerationRequest,
        rng: &mut R,
    ) -> Result<GeneratedPassphrase, GenerationError> {
        let lengths = request.validate()?;
        let pools = self.resolve_pools(&lengths)?;

        // One slot per valid length, duplicates included.
        let candidates: Vec<&Vec<String>> =
            lengths.iter().filter_map(|length| pools.get(length)).collect();

        let mut words = Vec::with_capacity(request.word_count as usize);
        for draw in 0..request.word_count {
            let pool = candidates[rng.gen_range(0..candidates.len())];
            let index = rng.gen_range(0..pool.len());
            tracing::trace!(draw, pool_size = pool.len(), index, "Drew word");
            words.push(pool[index].clone());
        }

        let passphrase = GeneratedPassphrase::assemble(words, &request.separator);

        tracing::debug!(
            word_count = passphrase.word_count(),
            total_length = passphrase.total_length(),
            strength = %passphrase.strength(),
            "Generated passphrase"
        );

        Ok(passphrase)
    }

    /// Loads each distinct length once. Any empty pool fails the request.
    fn resolve_pools(
        &self,
        lengths: &[usize],
    ) -> Result<BTreeMap<usize, Vec<String>>, GenerationError> {
        let mut pools = BTreeMap::new();

        for &length in lengths {
            if pools.contains_key(&length) {
                continue;
            }

            let words = self
                .provider
                .load_pool(length)
                .map_err(|source| GenerationError::PoolUnavailable { length, source })?;

            if words.is_empty() {
                tracing::debug!(length, "Requested length has no words");
                return Err(GenerationError::NoWordsForLength { length });
            }

            pools.insert(length, words);
        }

        Ok(pools)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{ErrorKind, ValidationCategory};
    use crate::pool::{MemoryProvider, PoolError};
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn sample_provider() -> MemoryProvider {
        MemoryProvider::from_words([
            "ada", "kar", "göl", "masa", "kedi", "deniz", "bulut", "kitap", "yıldız", "toprak",
            "kelime", "pencere", "kelebek", "dolunay", "sandalye", "kütüphane", "bilgisayar",
        ])
    }

    fn seeded(seed: u64) -> ChaCha20Rng {
        ChaCha20Rng::seed_from_u64(seed)
    }

    #[test]
    fn test_structure_holds() {
        let generator = PassphraseGenerator::new(sample_provider());
        let request = GenerationRequest::new(3, vec![5, 6, 7]);

        for seed in 0..50 {
            let passphrase = generator
                .generate_with_rng(&request, &mut seeded(seed))
                .unwrap();

            assert_eq!(passphrase.word_count(), 3);
            assert_eq!(passphrase.words().len(), 3);
            assert_eq!(passphrase.word_lengths().len(), 3);
            for (word, length) in passphrase.words().iter().zip(passphrase.word_lengths()) {
                assert_eq!(word.chars().count(), *length);
                assert!([5, 6, 7].contains(length));
            }
            assert_eq!(passphrase.password(), passphrase.words().join("-"));
            assert_eq!(
                passphrase.total_length(),
                passphrase.password().chars().count()
            );
        }
    }

    #[test]
    fn test_same_seed_same_passphrase() {
        let generator = PassphraseGenerator::new(sample_provider());
        let request = GenerationRequest::new(4, vec![3, 5, 10]);

        let first = generator.generate_with_rng(&request, &mut seeded(7)).unwrap();
        let second = generator.generate_with_rng(&request, &mut seeded(7)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_length_redrawn_per_word() {
        let generator = PassphraseGenerator::new(sample_provider());
        let request = GenerationRequest::new(10, vec![3, 5, 10]);

        let mut seen = std::collections::BTreeSet::new();
        for seed in 0..20 {
            let passphrase = generator
                .generate_with_rng(&request, &mut seeded(seed))
                .unwrap();
            seen.extend(passphrase.word_lengths().iter().copied());
        }

        assert_eq!(seen.into_iter().collect::<Vec<_>>(), vec![3, 5, 10]);
    }

    #[test]
    fn test_word_drawn_from_whole_pool() {
        let words = ["masa", "kedi", "elma", "okul", "kapı"];
        let generator = PassphraseGenerator::new(MemoryProvider::new().with_pool(4, words));
        let request = GenerationRequest::new(10, vec![4]);

        let mut seen = std::collections::BTreeSet::new();
        for seed in 0..20 {
            let passphrase = generator
                .generate_with_rng(&request, &mut seeded(seed))
                .unwrap();
            seen.extend(passphrase.words().iter().cloned());
        }

        assert_eq!(seen.len(), words.len());
    }

    #[test]
    fn test_repeated_length_weighs_more() {
        let generator = PassphraseGenerator::new(sample_provider());
        let request = GenerationRequest::new(10, vec![5, 5, 6]);

        let (mut fives, mut sixes) = (0usize, 0usize);
        for seed in 0..200 {
            let passphrase = generator
                .generate_with_rng(&request, &mut seeded(seed))
                .unwrap();
            for length in passphrase.word_lengths() {
                match length {
                    5 => fives += 1,
                    6 => sixes += 1,
                    other => panic!("unexpected length {other}"),
                }
            }
        }

        // Expected split is 2:1 over 2000 draws.
        assert_eq!(fives + sixes, 2000);
        assert!(fives * 2 > sixes * 3, "fives={fives} sixes={sixes}");
        assert!(sixes * 4 > fives, "fives={fives} sixes={sixes}");
    }

    #[test]
    fn test_out_of_range_lengths_ignored() {
        let generator = PassphraseGenerator::new(sample_provider());
        let request = GenerationRequest::new(5, vec![2, 5]);

        let passphrase = generator.generate(&request).unwrap();
        assert!(passphrase.word_lengths().iter().all(|&length| length == 5));
    }

    #[test]
    fn test_word_count_extremes() {
        let generator = PassphraseGenerator::new(sample_provider());

        assert_eq!(
            generator
                .generate(&GenerationRequest::new(1, vec![5]))
                .unwrap()
                .word_count(),
            1
        );
        assert_eq!(
            generator
                .generate(&GenerationRequest::new(10, vec![5]))
                .unwrap()
                .word_count(),
            10
        );
    }

    #[test]
    fn test_custom_separator() {
        let generator = PassphraseGenerator::new(sample_provider());
        let request = GenerationRequest::new(3, vec![4]).with_separator(".");

        let passphrase = generator.generate(&request).unwrap();
        assert_eq!(passphrase.separator(), ".");
        assert_eq!(passphrase.password().matches('.').count(), 2);
    }

    #[test]
    fn test_empty_separator() {
        let generator = PassphraseGenerator::new(sample_provider());
        let request = GenerationRequest::new(2, vec![3]).with_separator("");

        let passphrase = generator.generate(&request).unwrap();
        assert_eq!(passphrase.total_length(), 6);
    }

    #[test]
    fn test_one_missing_pool_fails_request() {
        let provider = MemoryProvider::new().with_pool(5, ["deniz"]);
        let generator = PassphraseGenerator::new(provider);

        let err = generator
            .generate(&GenerationRequest::new(3, vec![5, 8]))
            .unwrap_err();

        assert!(matches!(err, GenerationError::NoWordsForLength { length: 8 }));
        assert_eq!(err.kind(), ErrorKind::DataUnavailable);
        assert_eq!(err.to_string(), "no words found for length 8");
    }

    #[test]
    fn test_validation_is_repeatable() {
        let generator = PassphraseGenerator::new(sample_provider());
        let request = GenerationRequest::new(11, vec![5]);

        let first = generator.generate(&request).unwrap_err();
        let second = generator.generate(&request).unwrap_err();
        assert_eq!(first.category(), second.category());
        assert_eq!(first.category(), Some(ValidationCategory::WordCount));
        assert_eq!(first.to_string(), second.to_string());
    }

    struct CountingProvider {
        inner: MemoryProvider,
        loads: AtomicUsize,
    }

    impl WordPoolProvider for CountingProvider {
        fn load_pool(&self, length: usize) -> Result<Vec<String>, PoolError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            self.inner.load_pool(length)
        }
    }

    #[test]
    fn test_each_length_loaded_once() {
        let generator = PassphraseGenerator::new(CountingProvider {
            inner: sample_provider(),
            loads: AtomicUsize::new(0),
        });

        generator
            .generate(&GenerationRequest::new(10, vec![5, 5, 6, 5]))
            .unwrap();
        assert_eq!(generator.provider().loads.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_validation_before_loading() {
        let generator = PassphraseGenerator::new(CountingProvider {
            inner: sample_provider(),
            loads: AtomicUsize::new(0),
        });

        assert!(generator
            .generate(&GenerationRequest::new(3, vec![1, 12]))
            .is_err());
        assert_eq!(generator.provider().loads.load(Ordering::SeqCst), 0);
    }

    struct FailingProvider;

    impl WordPoolProvider for FailingProvider {
        fn load_pool(&self, _length: usize) -> Result<Vec<String>, PoolError> {
            Err(PoolError::Backend("disk on fire".into()))
        }
    }

    #[test]
    fn test_backend_failure_is_unexpected() {
        let generator = PassphraseGenerator::new(FailingProvider);
        let err = generator
            .generate(&GenerationRequest::default())
            .unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Unexpected);
        assert!(matches!(err, GenerationError::PoolUnavailable { length: 5, .. }));
    }
}
