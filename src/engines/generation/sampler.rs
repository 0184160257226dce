use crate::engines::generation::candidate::CandidateSolution;
use rand::Rng;

/// Roulette-wheel sampling over a scored population.
///
/// Sampling is with replacement: draws are independent and the same member
/// may be returned more than once. Every draw yields a fresh deep copy, so
/// mutating a sampled parent can never corrupt the resident population.
pub struct SelectionSampler {
    weights: Vec<f64>,
}

impl SelectionSampler {
    /// Build a sampler from the per-member selection weights. A degenerate
    /// weight vector (all zero, as in an all-unevaluated generation) falls
    /// back to a uniform draw rather than dividing by zero.
    pub fn new(weights: Vec<f64>) -> Self {
        Self { weights }
    }

    /// Uniform weights over `len` members.
    pub fn uniform(len: usize) -> Self {
        Self {
            weights: vec![1.0; len],
        }
    }

    pub fn sample<R: Rng>(
        &self,
        population: &[CandidateSolution],
        rng: &mut R,
    ) -> CandidateSolution {
        assert_eq!(
            population.len(),
            self.weights.len(),
            "weight vector does not match population"
        );
        assert!(!population.is_empty(), "cannot sample an empty population");

        let total: f64 = self.weights.iter().map(|w| w.max(0.0)).sum();
        if total <= 0.0 {
            return population[rng.gen_range(0..population.len())].clone();
        }

        let mut spin = rng.gen::<f64>() * total;
        for (member, weight) in population.iter().zip(&self.weights) {
            spin -= weight.max(0.0);
            if spin <= 0.0 {
                return member.clone();
            }
        }

        // Floating point shortfall: land on the last member.
        population[population.len() - 1].clone()
    }
}
