use super::traits::ConfigSection;
use crate::error::EvogaitError;
use serde::{Deserialize, Serialize};

/// Magnitude of the uniform range used when drawing random rules. Two
/// historical variants exist: the full [-0.5, 0.5] range and the same range
/// divided by three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleMagnitude {
    Full,
    Damped,
}

impl RuleMagnitude {
    /// Scale applied to a raw uniform draw from [-0.5, 0.5].
    pub fn scale(self) -> f64 {
        match self {
            RuleMagnitude::Full => 1.0,
            RuleMagnitude::Damped => 1.0 / 3.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub num_generations: usize,
    pub rule_length: usize,
    pub elitism_count: usize,
    pub crossover_rate: f64,
    pub mutation_rate: f64,
    pub rule_magnitude: RuleMagnitude,
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 20,
            num_generations: 100,
            rule_length: 30,
            elitism_count: 4,
            crossover_rate: 1.0,
            mutation_rate: 1.0,
            rule_magnitude: RuleMagnitude::Damped,
            seed: None,
        }
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), EvogaitError> {
        if self.population_size == 0 {
            return Err(EvogaitError::Configuration(
                "Population size must be at least 1".to_string(),
            ));
        }
        if self.elitism_count >= self.population_size {
            return Err(EvogaitError::Configuration(format!(
                "Elitism count {} leaves no reproduction slots in a population of {}",
                self.elitism_count, self.population_size
            )));
        }
        if self.rule_length == 0 {
            return Err(EvogaitError::Configuration(
                "Rule sequence length must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(EvogaitError::Configuration(
                "Mutation rate must be between 0 and 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(EvogaitError::Configuration(
                "Crossover rate must be between 0 and 1".to_string(),
            ));
        }
        Ok(())
    }
}
