use crate::engines::evaluation::bridge::FitnessEvaluator;
use crate::engines::generation::candidate::CandidateSolution;
use crate::error::Result;

/// In-process evaluator scoring with the sorted-axes heuristic. Lets the
/// engine run end to end when no external evaluator is attached; production
/// scoring always goes through the bridge.
#[derive(Debug, Default)]
pub struct LocalEvaluator;

impl FitnessEvaluator for LocalEvaluator {
    fn evaluate(&mut self, _generation: usize, pending: &mut [CandidateSolution]) -> Result<()> {
        for member in pending {
            member.score_locally();
        }
        Ok(())
    }
}
