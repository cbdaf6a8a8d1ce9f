//! Seeded RNG management for reproducible fixture data.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::{Mutex, OnceLock};

/// Label whose seed initializes the shared process-wide stream.
pub const GLOBAL_RNG_LABEL: &str = "vizdata random global";

/// Label whose seed initializes independent per-test sources.
pub const FIXTURE_RNG_LABEL: &str = "vizdata random object";

/// Derive a seed from a textual label: the sum of its character ordinals.
///
/// Pure arithmetic over a constant string; identical label gives an identical
/// seed on every platform.
pub fn seed_from_label(label: &str) -> u64 {
    label.chars().map(|c| c as u64).sum()
}

static GLOBAL_RNG: OnceLock<Mutex<ChaCha8Rng>> = OnceLock::new();

fn global_cell() -> &'static Mutex<ChaCha8Rng> {
    GLOBAL_RNG.get_or_init(|| Mutex::new(canonical_global()))
}

fn canonical_global() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed_from_label(GLOBAL_RNG_LABEL))
}

/// Rewind the shared stream to its canonical seed.
///
/// Call at the top of every test that draws from the shared stream. Idempotent:
/// every reset produces the same subsequent draw sequence, run after run.
pub fn reset_global_rng() {
    let mut rng = global_cell().lock().expect("global rng lock poisoned");
    *rng = canonical_global();
}

/// Run `f` with exclusive access to the shared stream.
///
/// The shared stream assumes tests run sequentially; concurrent callers
/// serialize on the lock but interleave draws, which forfeits reproducibility.
/// Tests that need order-independent randomness use [`fixture_rng`] instead.
pub fn with_global_rng<T>(f: impl FnOnce(&mut ChaCha8Rng) -> T) -> T {
    let mut rng = global_cell().lock().expect("global rng lock poisoned");
    f(&mut rng)
}

/// A fresh generator seeded from the object label.
///
/// Shares no state with the global stream, so every call starts the same
/// sequence regardless of what other tests have drawn.
pub fn fixture_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed_from_label(FIXTURE_RNG_LABEL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    // Tests touching the shared stream serialize here; the harness runs
    // tests concurrently and interleaved draws would break replay.
    static GLOBAL_STREAM_TESTS: Mutex<()> = Mutex::new(());

    #[test]
    fn test_seed_is_ordinal_sum() {
        assert_eq!(seed_from_label("ab"), 97 + 98);
        assert_eq!(seed_from_label(""), 0);
    }

    #[test]
    fn test_same_label_same_sequence() {
        let mut rng1 = ChaCha8Rng::seed_from_u64(seed_from_label(FIXTURE_RNG_LABEL));
        let mut rng2 = fixture_rng();

        let values1: Vec<u32> = (0..10).map(|_| rng1.gen()).collect();
        let values2: Vec<u32> = (0..10).map(|_| rng2.gen()).collect();
        assert_eq!(values1, values2);
    }

    #[test]
    fn test_labels_are_distinct_streams() {
        let mut global = ChaCha8Rng::seed_from_u64(seed_from_label(GLOBAL_RNG_LABEL));
        let mut object = fixture_rng();

        let global_values: Vec<u32> = (0..10).map(|_| global.gen()).collect();
        let object_values: Vec<u32> = (0..10).map(|_| object.gen()).collect();
        assert_ne!(global_values, object_values);
    }

    #[test]
    fn test_reset_rewinds_global_stream() {
        let _serial = GLOBAL_STREAM_TESTS.lock().unwrap();

        reset_global_rng();
        let first: Vec<u32> = with_global_rng(|rng| (0..10).map(|_| rng.gen()).collect());

        reset_global_rng();
        let second: Vec<u32> = with_global_rng(|rng| (0..10).map(|_| rng.gen()).collect());

        assert_eq!(first, second);
    }

    #[test]
    fn test_fixture_rng_ignores_global_state() {
        let _serial = GLOBAL_STREAM_TESTS.lock().unwrap();

        reset_global_rng();
        with_global_rng(|rng| {
            let _: u64 = rng.gen();
        });
        let mut a = fixture_rng();

        reset_global_rng();
        let mut b = fixture_rng();

        let values_a: Vec<u32> = (0..10).map(|_| a.gen()).collect();
        let values_b: Vec<u32> = (0..10).map(|_| b.gen()).collect();
        assert_eq!(values_a, values_b);
    }
}
