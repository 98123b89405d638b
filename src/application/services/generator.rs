//! Random tree generation with an injected random source.

use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, Value};
use crate::config::GeneratorSettings;
use crate::domain::BinaryContainerTree;

/// Upper bound on the number of values per generated tree.
pub const MAX_COUNT: usize = 10_000;

/// Produces trees of distinct random values in `[0, max_value]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomTreeGenerator {
    count: usize,
    max_value: Value,
}

impl Default for RandomTreeGenerator {
    fn default() -> Self {
        Self {
            count: 30,
            max_value: 50,
        }
    }
}

impl RandomTreeGenerator {
    /// # Errors
    /// [`ApplicationError::Config`] when `count` is not in `1..=MAX_COUNT` or
    /// `max_value` is negative.
    pub fn new(count: usize, max_value: Value) -> ApplicationResult<Self> {
        if count == 0 {
            return Err(ApplicationError::config("generator count must be at least 1"));
        }
        if count > MAX_COUNT {
            return Err(ApplicationError::config(format!(
                "generator count must not exceed {MAX_COUNT}, got {count}"
            )));
        }
        if max_value < 0 {
            return Err(ApplicationError::config(format!(
                "generator max_value must not be negative, got {max_value}"
            )));
        }
        Ok(Self { count, max_value })
    }

    pub fn from_settings(settings: &GeneratorSettings) -> ApplicationResult<Self> {
        Self::new(settings.count, settings.max_value)
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn max_value(&self) -> Value {
        self.max_value
    }

    /// Number of values actually produced: `count`, capped at the range size.
    pub fn effective_count(&self) -> usize {
        self.count.min(self.range_len())
    }

    fn range_len(&self) -> usize {
        usize::try_from(self.max_value).map_or(0, |m| m.saturating_add(1))
    }

    /// Distinct values drawn uniformly from the range, in random order.
    #[instrument(level = "debug", skip(rng))]
    pub fn generate_values<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Value> {
        let values: Vec<Value> = index::sample(rng, self.range_len(), self.effective_count())
            .into_iter()
            .filter_map(|i| Value::try_from(i).ok())
            .collect();
        debug!("generate_values: {:?}", values);
        values
    }

    /// Fresh tree holding [`generate_values`](Self::generate_values), inserted in order.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> BinaryContainerTree<Value> {
        self.generate_values(rng).into_iter().collect()
    }
}

/// Seeded generator for reproducible trees, entropy-seeded otherwise.
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}
