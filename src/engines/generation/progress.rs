use super::evolution_engine::{GenerationSummary, ProgressCallback};

pub struct ConsoleProgressCallback;

impl ProgressCallback for ConsoleProgressCallback {
    fn on_generation_start(&mut self, generation: usize) {
        println!("Generation {} starting...", generation + 1);
    }

    fn on_generation_complete(&mut self, summary: &GenerationSummary) {
        println!("____________________");
        println!("Generation complete: {}", summary.generation + 1);
        println!("Best fitness: {:.4}", summary.best_fitness);
        println!("Average fitness: {:.4}", summary.average_fitness);
    }
}

/// Callback that discards progress; for library callers that only want the
/// returned summaries.
pub struct SilentProgressCallback;

impl ProgressCallback for SilentProgressCallback {
    fn on_generation_start(&mut self, _generation: usize) {}
    fn on_generation_complete(&mut self, _summary: &GenerationSummary) {}
}
