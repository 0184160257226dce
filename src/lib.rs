//! Genetic algorithm evolving walk-cycle rule sequences for a rigged
//! armature. Fitness is computed out of process: each generation's
//! unevaluated members are written to a snapshot file, an external evaluator
//! replays their motion and scores them, and the engine blocks on a
//! completion marker before breeding the next generation.

pub mod config;
pub mod engines;
pub mod error;
pub mod types;

pub use config::{AppConfig, BridgeConfig, ConfigManager, EvolutionConfig, RuleMagnitude};
pub use engines::evaluation::{FileBridge, FitnessEvaluator, LocalEvaluator, PopulationSnapshot};
pub use engines::generation::{
    CandidateSolution, ConsoleProgressCallback, EvolutionEngine, GenerationSummary,
    ProgressCallback, SelectionSampler, SilentProgressCallback, UNEVALUATED,
};
pub use error::{EvogaitError, Result};
pub use types::{Joint, Pose, Rule, Vec3, JOINT_COUNT};
