use crate::engines::generation::candidate::CandidateSolution;
use crate::error::{EvogaitError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// The durable artifact exchanged with the external evaluator.
///
/// Member order and count are part of the contract: the evaluator must hand
/// back the same members in the same order, with every fitness overwritten.
/// Joint axes are serialized in `Joint::ALL` order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationSnapshot {
    pub generation: usize,
    pub members: Vec<CandidateSolution>,
}

impl PopulationSnapshot {
    pub fn new(generation: usize, members: Vec<CandidateSolution>) -> Self {
        Self { generation, members }
    }

    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Read a snapshot back. A missing or malformed file is fatal: there is
    /// no recovery path once the evaluator has signalled completion.
    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            EvogaitError::Snapshot(format!("cannot read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&contents).map_err(|e| {
            EvogaitError::Snapshot(format!("malformed snapshot {}: {}", path.display(), e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RuleMagnitude;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn json_round_trip_preserves_order_and_count() {
        let mut rng = StdRng::seed_from_u64(21);
        let members: Vec<_> = (0..5)
            .map(|i| {
                let mut c = CandidateSolution::random_init(4, RuleMagnitude::Full, &mut rng);
                c.fitness = i as f64 * 1.5;
                c
            })
            .collect();
        let snapshot = PopulationSnapshot::new(3, members.clone());

        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: PopulationSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.generation, 3);
        assert_eq!(parsed.members.len(), members.len());
        for (a, b) in parsed.members.iter().zip(&members) {
            assert_eq!(a.fitness, b.fitness);
            assert_eq!(a.rules, b.rules);
            assert_eq!(a.poses, b.poses);
        }
    }
}
