use crate::geometry::Position;
use serde::{Deserialize, Serialize};

/// One candidate placement: gene `i` is the position of antenna slot `i`.
pub type Chromosome = Vec<Position>;

/// One generation. Kept at even length so survivors pair off without orphans.
pub type Population = Vec<Chromosome>;

/// Total quality of a chromosome. Higher is better.
pub type FitnessScore = i64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationEntry {
    pub generation: usize,
    pub best: FitnessScore,
}

/// Append-only trace of the best surviving score per generation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GenerationRecord {
    entries: Vec<GenerationEntry>,
}

impl GenerationRecord {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, generation: usize, best: FitnessScore) {
        self.entries.push(GenerationEntry { generation, best });
    }

    pub fn entries(&self) -> &[GenerationEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&GenerationEntry> {
        self.entries.last()
    }

    /// Best-so-far score after each generation.
    pub fn running_max(&self) -> Vec<FitnessScore> {
        self.entries
            .iter()
            .scan(FitnessScore::MIN, |best, e| {
                *best = (*best).max(e.best);
                Some(*best)
            })
            .collect()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub best: Chromosome,
    pub score: FitnessScore,
    pub history: GenerationRecord,
}
