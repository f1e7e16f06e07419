//! Traffic samplers.
//!
//! The planner asks a sampler for a traffic label every time it relaxes a
//! route. `RandomSampler` draws uniformly from a model's vocabulary;
//! `ScriptedSampler` replays a fixed sequence so searches are reproducible.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::TrafficModel;

/// Trait for producing traffic labels.
///
/// Samplers are taken by `&mut` for the duration of one search, so a
/// sampler's state is never shared between concurrent searches.
pub trait TrafficSampler {
    /// Draw the traffic label for the next route relaxation.
    fn sample(&mut self) -> String;
}

impl<S: TrafficSampler + ?Sized> TrafficSampler for &mut S {
    fn sample(&mut self) -> String {
        (**self).sample()
    }
}

/// Draws labels uniformly at random from a traffic model's vocabulary.
#[derive(Debug, Clone)]
pub struct RandomSampler<R = StdRng> {
    labels: Vec<String>,
    rng: R,
}

impl RandomSampler<StdRng> {
    /// Sampler seeded from the operating system.
    pub fn new(model: &TrafficModel) -> Self {
        Self::with_rng(model, StdRng::from_os_rng())
    }

    /// Sampler with a fixed seed, for reproducible draws.
    pub fn seeded(model: &TrafficModel, seed: u64) -> Self {
        Self::with_rng(model, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSampler<R> {
    pub fn with_rng(model: &TrafficModel, rng: R) -> Self {
        Self {
            labels: model.labels().into_iter().map(str::to_string).collect(),
            rng,
        }
    }
}

impl<R: Rng> TrafficSampler for RandomSampler<R> {
    fn sample(&mut self) -> String {
        // A TrafficModel always has at least one label.
        let idx = self.rng.random_range(0..self.labels.len());
        self.labels[idx].clone()
    }
}

/// Replays a fixed script of labels, cycling back to the start.
///
/// An empty script yields empty labels, which no traffic model accepts.
#[derive(Debug, Clone)]
pub struct ScriptedSampler {
    script: Vec<String>,
    next: usize,
}

impl ScriptedSampler {
    pub fn new<I, L>(script: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<String>,
    {
        Self {
            script: script.into_iter().map(Into::into).collect(),
            next: 0,
        }
    }

    /// A sampler that always returns `label`.
    pub fn constant(label: impl Into<String>) -> Self {
        Self::new([label.into()])
    }

    /// Number of labels drawn so far.
    pub fn draws(&self) -> usize {
        self.next
    }
}

impl TrafficSampler for ScriptedSampler {
    fn sample(&mut self) -> String {
        if self.script.is_empty() {
            return String::new();
        }
        let label = self.script[self.next % self.script.len()].clone();
        self.next += 1;
        label
    }
}
