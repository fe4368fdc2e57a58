//! Source of randomness for food placement and reset directions.
//!
//! Game code only sees [`RandomSource`], so tests can hand in a seeded
//! generator or a fixed script instead of the thread rng.

use rand::Rng;

pub trait RandomSource {
    /// Uniform integer in `0..upper`. `upper` is never zero.
    fn below(&mut self, upper: usize) -> usize;

    fn choose<T: Copy>(&mut self, items: &[T]) -> T
    where
        Self: Sized,
    {
        items[self.below(items.len())]
    }
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn below(&mut self, upper: usize) -> usize {
        self.gen_range(0..upper)
    }
}

#[cfg(test)]
pub(crate) mod scripted {
    use super::RandomSource;

    /// Replays a fixed list of draws, cycling when it runs out.
    pub struct Scripted {
        draws: Vec<usize>,
        next: usize,
    }

    impl Scripted {
        pub fn new(draws: &[usize]) -> Self {
            Self {
                draws: draws.to_vec(),
                next: 0,
            }
        }
    }

    impl RandomSource for Scripted {
        fn below(&mut self, upper: usize) -> usize {
            let value = self.draws[self.next % self.draws.len()];
            self.next += 1;
            value % upper
        }
    }
}
