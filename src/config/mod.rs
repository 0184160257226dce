pub mod traits;
pub mod evolution;
pub mod bridge;
pub mod manager;

pub use manager::{AppConfig, ConfigManager};
pub use evolution::{EvolutionConfig, RuleMagnitude};
pub use bridge::BridgeConfig;
