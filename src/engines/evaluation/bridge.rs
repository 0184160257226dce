use crate::config::BridgeConfig;
use crate::engines::evaluation::snapshot::PopulationSnapshot;
use crate::engines::generation::candidate::CandidateSolution;
use crate::error::{EvogaitError, Result};
use log::{debug, info, warn};
use std::path::PathBuf;
use std::process::Command;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Seam between the engine and whatever computes fitness. The engine hands
/// over the members still carrying the unevaluated sentinel and blocks until
/// every one of them has a score.
pub trait FitnessEvaluator {
    fn evaluate(&mut self, generation: usize, pending: &mut [CandidateSolution]) -> Result<()>;
}

/// File-based handoff to an out-of-process evaluator.
///
/// Protocol, per generation: clear any stale completion marker, write the
/// pending members as a snapshot, optionally launch the evaluator command,
/// then sleep-poll for the marker. The marker's presence alone signals
/// completion; its content is ignored. The returned snapshot must carry the
/// same members in the same order with real fitness values, which are merged
/// back by position.
pub struct FileBridge {
    snapshot_path: PathBuf,
    marker_path: PathBuf,
    evaluator_command: Option<String>,
    evaluator_args: Vec<String>,
    poll_interval: Duration,
    max_polls: Option<u64>,
    cancel: Option<Arc<AtomicBool>>,
}

impl FileBridge {
    pub fn new(config: &BridgeConfig) -> Self {
        Self {
            snapshot_path: config.snapshot_path.clone(),
            marker_path: config.marker_path.clone(),
            evaluator_command: config.evaluator_command.clone(),
            evaluator_args: config.evaluator_args.clone(),
            poll_interval: Duration::from_secs(config.poll_interval_secs),
            max_polls: config.max_polls,
            cancel: None,
        }
    }

    /// Abort the blocking wait when the flag flips to true. The pending
    /// members keep their sentinel fitness.
    pub fn with_cancel(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.cancel = Some(cancel);
        self
    }

    fn export(&self, generation: usize, pending: &[CandidateSolution]) -> Result<()> {
        if self.marker_path.exists() {
            std::fs::remove_file(&self.marker_path)?;
        }
        let snapshot = PopulationSnapshot::new(generation, pending.to_vec());
        snapshot.write_to(&self.snapshot_path)?;
        debug!(
            "exported snapshot of {} members to {}",
            pending.len(),
            self.snapshot_path.display()
        );
        Ok(())
    }

    fn launch_evaluator(&self) -> Result<()> {
        let Some(command) = &self.evaluator_command else {
            debug!("no evaluator command configured; assuming an external watcher");
            return Ok(());
        };
        info!("launching evaluator: {} {:?}", command, self.evaluator_args);
        Command::new(command)
            .args(&self.evaluator_args)
            .spawn()
            .map_err(|e| EvogaitError::Evaluator(format!("failed to launch {}: {}", command, e)))?;
        Ok(())
    }

    fn await_marker(&self) -> Result<()> {
        let mut polls: u64 = 0;
        loop {
            if let Some(cancel) = &self.cancel {
                if cancel.load(Ordering::Relaxed) {
                    return Err(EvogaitError::Cancelled);
                }
            }
            if self.marker_path.exists() {
                info!("completion marker present after {} polls", polls);
                return Ok(());
            }
            if let Some(max) = self.max_polls {
                if polls >= max {
                    return Err(EvogaitError::EvaluationTimeout { polls });
                }
            }
            debug!("fitness results not ready, waiting {:?}", self.poll_interval);
            std::thread::sleep(self.poll_interval);
            polls += 1;
        }
    }

    fn import(&self, pending: &mut [CandidateSolution]) -> Result<()> {
        let snapshot = PopulationSnapshot::read_from(&self.snapshot_path)?;
        if snapshot.members.len() != pending.len() {
            return Err(EvogaitError::SnapshotMismatch {
                expected: pending.len(),
                actual: snapshot.members.len(),
            });
        }
        for (slot, scored) in pending.iter_mut().zip(snapshot.members) {
            if scored.fitness == 0.0 {
                warn!("evaluator returned a zero fitness; member will be resubmitted next round");
            }
            slot.fitness = scored.fitness;
        }
        Ok(())
    }
}

impl FitnessEvaluator for FileBridge {
    fn evaluate(&mut self, generation: usize, pending: &mut [CandidateSolution]) -> Result<()> {
        if pending.is_empty() {
            return Ok(());
        }
        self.export(generation, pending)?;
        self.launch_evaluator()?;
        self.await_marker()?;
        self.import(pending)
    }
}
