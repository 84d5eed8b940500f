//! RandomSource - The only source of nondeterminism in a debate
//!
//! Template choice, document choice and thinking delays all draw from
//! this port. Production wires a real generator; tests script the draws.

/// Uniform random draws
pub trait RandomSource {
    /// Uniform index in `0..len`. Callers never pass `len == 0`.
    fn index(&mut self, len: usize) -> usize;

    /// Uniform value in `low..high`; returns `low` when the range is empty
    fn between(&mut self, low: u64, high: u64) -> u64;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn index(&mut self, len: usize) -> usize {
        (**self).index(len)
    }

    fn between(&mut self, low: u64, high: u64) -> u64 {
        (**self).between(low, high)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn index(&mut self, len: usize) -> usize {
        (**self).index(len)
    }

    fn between(&mut self, low: u64, high: u64) -> u64 {
        (**self).between(low, high)
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::RandomSource;
    use std::collections::VecDeque;

    /// Replays scripted indices; falls back to 0 / `low` when exhausted
    #[derive(Debug, Default)]
    pub(crate) struct ScriptedRandom {
        indices: VecDeque<usize>,
    }

    impl ScriptedRandom {
        pub(crate) fn new(indices: impl IntoIterator<Item = usize>) -> Self {
            Self {
                indices: indices.into_iter().collect(),
            }
        }
    }

    impl RandomSource for ScriptedRandom {
        fn index(&mut self, len: usize) -> usize {
            self.indices.pop_front().unwrap_or(0) % len
        }

        fn between(&mut self, low: u64, _high: u64) -> u64 {
            low
        }
    }
}
