use std::fmt;

/// Sampled Z-basis measurement outcomes of a single-qubit state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementCounts {
    counts: [usize; 2],
    seed: u64,
}

impl MeasurementCounts {
    /// Creates a new result set. (Internal visibility)
    pub(crate) fn new(counts: [usize; 2], seed: u64) -> Self {
        Self { counts, seed }
    }

    /// Number of shots that yielded `outcome` (0 or 1). Any other outcome has count 0.
    pub fn count(&self, outcome: usize) -> usize {
        self.counts.get(outcome).copied().unwrap_or(0)
    }

    /// Total number of shots.
    pub fn shots(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Seed the sampler was initialised with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Observed relative frequency of `outcome`; 0 for zero shots.
    pub fn frequency(&self, outcome: usize) -> f64 {
        let shots = self.shots();
        if shots == 0 { 0.0 } else { self.count(outcome) as f64 / shots as f64 }
    }
}

impl fmt::Display for MeasurementCounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Measurement ({} shots, seed {}):", self.shots(), self.seed)?;
        for outcome in 0..2 {
            let (count, frequency) = (self.count(outcome), self.frequency(outcome));
            writeln!(f, "  |{}⟩: {:>6} ({:.3})", outcome, count, frequency)?;
        }
        Ok(())
    }
}
