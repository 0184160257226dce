pub mod bridge;
pub mod local;
pub mod snapshot;

pub use bridge::{FileBridge, FitnessEvaluator};
pub use local::LocalEvaluator;
pub use snapshot::PopulationSnapshot;
