//! Random draw sources for the transition rules
//!
//! The rules consume integers drawn uniformly from inclusive ranges. The
//! [`DrawSource`] trait keeps that capability substitutable: the simulation
//! runs on a single seeded [`SeededDraw`], while tests script exact values
//! with [`ScriptedDraw`].

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::collections::VecDeque;

/// Produces uniformly distributed integers on demand
pub trait DrawSource {
    /// Draw an integer uniformly from `[min, max]` inclusive.
    ///
    /// Callers guarantee `min <= max`.
    fn draw(&mut self, min: i32, max: i32) -> i32;
}

impl<D: DrawSource + ?Sized> DrawSource for &mut D {
    fn draw(&mut self, min: i32, max: i32) -> i32 {
        (**self).draw(min, max)
    }
}

/// Process-lifetime generator, seeded once and reused for every draw.
///
/// Wraps `ChaCha8Rng` so identical seeds reproduce identical runs on every
/// platform.
#[derive(Debug, Clone)]
pub struct SeededDraw {
    rng: ChaCha8Rng,
    seed: u64,
}

impl SeededDraw {
    /// Create a generator from an explicit seed
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a generator from a seed taken from OS entropy.
    ///
    /// Panics if the platform entropy source is unavailable; that is a fatal
    /// startup condition rather than a per-draw failure.
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::rng().random())
    }

    /// Seed this generator was created with (log it to reproduce a run)
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl DrawSource for SeededDraw {
    #[inline]
    fn draw(&mut self, min: i32, max: i32) -> i32 {
        self.rng.random_range(min..=max)
    }
}

/// Draw source replaying scripted values, for deterministic tests.
///
/// Values are returned in order and clamped into the requested range; once
/// the script is exhausted `fallback` is used. Every requested range is
/// recorded so tests can assert which rule branch consumed a draw.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDraw {
    script: VecDeque<i32>,
    fallback: Option<i32>,
    requests: Vec<(i32, i32)>,
}

impl ScriptedDraw {
    /// Always return `value` (clamped into the requested range)
    pub fn constant(value: i32) -> Self {
        Self {
            fallback: Some(value),
            ..Self::default()
        }
    }

    /// Return `values` in order; afterwards the fallback, or the range minimum
    pub fn sequence(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            script: values.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Value returned once the script runs out
    pub fn with_fallback(mut self, value: i32) -> Self {
        self.fallback = Some(value);
        self
    }

    /// Always return the low end of the requested range
    pub fn always_min() -> Self {
        Self::constant(i32::MIN)
    }

    /// Always return the high end of the requested range
    pub fn always_max() -> Self {
        Self::constant(i32::MAX)
    }

    /// Ranges requested so far, in call order
    pub fn requests(&self) -> &[(i32, i32)] {
        &self.requests
    }

    /// Number of draws consumed so far
    pub fn draw_count(&self) -> usize {
        self.requests.len()
    }
}

impl DrawSource for ScriptedDraw {
    fn draw(&mut self, min: i32, max: i32) -> i32 {
        self.requests.push((min, max));
        let value = self
            .script
            .pop_front()
            .or(self.fallback)
            .unwrap_or(min);
        value.clamp(min, max)
    }
}
