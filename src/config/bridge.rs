use super::traits::ConfigSection;
use crate::error::EvogaitError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for the file-based handoff to the external evaluator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Where the population snapshot is written for (and read back from)
    /// the evaluator.
    pub snapshot_path: PathBuf,
    /// Presence-only marker the evaluator touches when scoring is done.
    pub marker_path: PathBuf,
    /// Command launched once per generation to kick off evaluation. When
    /// unset the evaluator is assumed to be watching for snapshots itself.
    pub evaluator_command: Option<String>,
    pub evaluator_args: Vec<String>,
    /// Seconds between checks for the completion marker.
    pub poll_interval_secs: u64,
    /// Upper bound on marker polls before giving up. The baseline protocol
    /// waits forever; setting this is a hardening option on top of it.
    pub max_polls: Option<u64>,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from("population_snapshot.json"),
            marker_path: PathBuf::from("evaluation_complete.marker"),
            evaluator_command: None,
            evaluator_args: Vec::new(),
            poll_interval_secs: 2,
            max_polls: None,
        }
    }
}

impl ConfigSection for BridgeConfig {
    fn section_name() -> &'static str {
        "bridge"
    }

    fn validate(&self) -> Result<(), EvogaitError> {
        if self.poll_interval_secs == 0 {
            return Err(EvogaitError::Configuration(
                "Poll interval must be at least 1 second".to_string(),
            ));
        }
        if self.snapshot_path == self.marker_path {
            return Err(EvogaitError::Configuration(
                "Snapshot and marker paths must differ".to_string(),
            ));
        }
        if self.evaluator_command.is_none() && !self.evaluator_args.is_empty() {
            return Err(EvogaitError::Configuration(
                "Evaluator arguments given without an evaluator command".to_string(),
            ));
        }
        Ok(())
    }
}
