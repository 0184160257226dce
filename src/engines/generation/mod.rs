pub mod candidate;
pub mod evolution_engine;
pub mod progress;
pub mod sampler;

pub use candidate::{CandidateSolution, UNEVALUATED};
pub use evolution_engine::{EvolutionEngine, GenerationSummary, ProgressCallback};
pub use progress::{ConsoleProgressCallback, SilentProgressCallback};
pub use sampler::SelectionSampler;
