use crate::config::EvolutionConfig;
use crate::engines::evaluation::FitnessEvaluator;
use crate::engines::generation::{
    candidate::{CandidateSolution, UNEVALUATED},
    sampler::SelectionSampler,
};
use crate::error::Result;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

/// Per-generation report line. The run loop returns the full ordered
/// sequence to the caller instead of accumulating global history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub generation: usize,
    pub best_fitness: f64,
    pub average_fitness: f64,
}

pub trait ProgressCallback {
    fn on_generation_start(&mut self, generation: usize);
    fn on_generation_complete(&mut self, summary: &GenerationSummary);
}

/// The generation loop: initialization, external evaluation, sorting and
/// weighting, then elitist reproduction, repeated for the configured number
/// of generations. Strictly sequential; the loop blocks while the evaluator
/// runs, and population state is only ever touched here.
pub struct EvolutionEngine {
    config: EvolutionConfig,
    rng: StdRng,
    best_fitness_ever: f64,
    best_candidate: Option<CandidateSolution>,
}

impl EvolutionEngine {
    pub fn new(config: EvolutionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            rng,
            best_fitness_ever: 0.0,
            best_candidate: None,
        }
    }

    pub fn best_fitness_ever(&self) -> f64 {
        self.best_fitness_ever
    }

    /// Deep copy of the highest-scoring candidate seen so far.
    pub fn best_candidate(&self) -> Option<&CandidateSolution> {
        self.best_candidate.as_ref()
    }

    /// Run the full loop to termination, returning one summary per
    /// generation.
    pub fn run<E: FitnessEvaluator, C: ProgressCallback>(
        &mut self,
        evaluator: &mut E,
        callback: &mut C,
    ) -> Result<Vec<GenerationSummary>> {
        use crate::config::traits::ConfigSection;
        self.config.validate()?;

        let mut population = self.initialize_population();
        let mut summaries = Vec::with_capacity(self.config.num_generations);

        for generation in 0..self.config.num_generations {
            callback.on_generation_start(generation);

            self.evaluate_population(generation, &mut population, evaluator)?;

            let weights = self.sort_and_weigh(&mut population);

            let summary = summarize(generation, &population);
            info!(
                "generation {} complete: best {:.4}, average {:.4}",
                summary.generation, summary.best_fitness, summary.average_fitness
            );
            callback.on_generation_complete(&summary);
            summaries.push(summary);

            if generation == self.config.num_generations - 1 {
                break;
            }

            population = self.create_next_generation(&population, weights);
        }

        Ok(summaries)
    }

    fn initialize_population(&mut self) -> Vec<CandidateSolution> {
        (0..self.config.population_size)
            .map(|_| {
                CandidateSolution::random_init(
                    self.config.rule_length,
                    self.config.rule_magnitude,
                    &mut self.rng,
                )
            })
            .collect()
    }

    /// Hand every member still carrying the sentinel to the evaluator and
    /// block until all of them are scored. Members with a prior score
    /// (carried-over elites) skip the round.
    fn evaluate_population<E: FitnessEvaluator>(
        &mut self,
        generation: usize,
        population: &mut [CandidateSolution],
        evaluator: &mut E,
    ) -> Result<()> {
        let pending_indices: Vec<usize> = population
            .iter()
            .enumerate()
            .filter(|(_, m)| m.fitness == UNEVALUATED)
            .map(|(i, _)| i)
            .collect();

        if pending_indices.is_empty() {
            return Ok(());
        }
        info!(
            "generation {}: submitting {}/{} members for evaluation",
            generation,
            pending_indices.len(),
            population.len()
        );

        let mut pending: Vec<CandidateSolution> = pending_indices
            .iter()
            .map(|&i| population[i].clone())
            .collect();

        evaluator.evaluate(generation, &mut pending)?;

        for (index, scored) in pending_indices.into_iter().zip(pending) {
            population[index].fitness = scored.fitness;
        }
        Ok(())
    }

    /// Sort descending by fitness, track the best score seen across the
    /// whole run, and derive selection weights relative to this generation's
    /// maximum. A zero maximum yields uniform weights.
    fn sort_and_weigh(&mut self, population: &mut [CandidateSolution]) -> Vec<f64> {
        population.sort_by(|a, b| {
            b.fitness
                .partial_cmp(&a.fitness)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let generation_max = population.first().map(|m| m.fitness).unwrap_or(0.0);
        if generation_max > self.best_fitness_ever {
            self.best_fitness_ever = generation_max;
            self.best_candidate = population.first().cloned();
        }

        if generation_max > 0.0 {
            population
                .iter()
                .map(|m| m.fitness / generation_max)
                .collect()
        } else {
            vec![1.0; population.len()]
        }
    }

    /// Elitism plus fitness-proportionate reproduction. Elites are cloned
    /// by value, keeping their scores; every other child re-enters the next
    /// evaluation round with the sentinel fitness.
    fn create_next_generation(
        &mut self,
        population: &[CandidateSolution],
        weights: Vec<f64>,
    ) -> Vec<CandidateSolution> {
        let mut next_generation: Vec<CandidateSolution> = population
            .iter()
            .take(self.config.elitism_count)
            .cloned()
            .collect();

        let sampler = SelectionSampler::new(weights);

        while next_generation.len() < self.config.population_size {
            let mut parent_one = sampler.sample(population, &mut self.rng);
            parent_one.fitness = UNEVALUATED;
            parent_one.mutate(self.config.mutation_rate, &mut self.rng);

            let mut parent_two = sampler.sample(population, &mut self.rng);
            parent_two.fitness = UNEVALUATED;
            parent_two.mutate(self.config.mutation_rate, &mut self.rng);

            let (mut child_one, mut child_two) =
                if self.rng.gen::<f64>() < self.config.crossover_rate {
                    parent_one.crossover(&parent_two, &mut self.rng)
                } else {
                    (parent_one, parent_two)
                };

            child_one.fitness = UNEVALUATED;
            next_generation.push(child_one);

            if next_generation.len() < self.config.population_size {
                child_two.fitness = UNEVALUATED;
                next_generation.push(child_two);
            }
        }

        next_generation
    }
}

fn summarize(generation: usize, population: &[CandidateSolution]) -> GenerationSummary {
    let best_fitness = population.first().map(|m| m.fitness).unwrap_or(0.0);
    let average_fitness = if population.is_empty() {
        0.0
    } else {
        population.iter().map(|m| m.fitness).sum::<f64>() / population.len() as f64
    };
    GenerationSummary {
        generation,
        best_fitness,
        average_fitness,
    }
}
