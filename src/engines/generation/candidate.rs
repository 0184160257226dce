use crate::config::RuleMagnitude;
use crate::types::{clamp_axis, Joint, Pose, Rule};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Fitness value meaning "not yet scored by the evaluator".
pub const UNEVALUATED: f64 = 0.0;

/// Size of the symmetric perturbation range used by mutation.
const MUTATION_HALF_RANGE: f64 = 0.25;

/// One individual: a fixed-length sequence of motion rules, the walk cycle
/// derived from it, and the fitness assigned by the evaluator.
///
/// The pose sequence is a pure function of the rules and is re-derived after
/// every operation that touches them. `Clone` is a deep copy; elites and
/// sampled parents are always clones so that mutating one generation can
/// never reach into another.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateSolution {
    pub rules: Vec<Rule>,
    pub poses: Vec<Pose>,
    pub fitness: f64,
    pub length: usize,
}

impl CandidateSolution {
    /// Build a candidate with `length` random rules. Every axis of every
    /// joint offset is drawn uniformly from [-0.5, 0.5] scaled by
    /// `magnitude`.
    pub fn random_init<R: Rng>(length: usize, magnitude: RuleMagnitude, rng: &mut R) -> Self {
        let scale = magnitude.scale();
        let rules = (0..length)
            .map(|_| {
                let mut rule = Rule::zero();
                for joint in Joint::ALL {
                    rule.set(
                        joint,
                        [
                            (rng.gen::<f64>() - 0.5) * scale,
                            (rng.gen::<f64>() - 0.5) * scale,
                            (rng.gen::<f64>() - 0.5) * scale,
                        ],
                    );
                }
                rule
            })
            .collect();

        let mut candidate = Self {
            rules,
            poses: Vec::new(),
            fitness: UNEVALUATED,
            length,
        };
        candidate.derive_poses();
        candidate
    }

    /// Build a candidate from an existing rule sequence.
    pub fn from_rules(rules: Vec<Rule>) -> Self {
        let length = rules.len();
        let mut candidate = Self {
            rules,
            poses: Vec::new(),
            fitness: UNEVALUATED,
            length,
        };
        candidate.derive_poses();
        candidate
    }

    /// Fold the rule sequence over the seed pose, clamping each axis to
    /// [-1, 1] at every step. Produces `length + 1` poses, the first being
    /// the seed.
    pub fn derive_poses(&mut self) {
        let mut poses = Vec::with_capacity(self.rules.len() + 1);
        poses.push(Pose::seed());
        for rule in &self.rules {
            let prev = poses.last().copied().unwrap_or_else(Pose::seed);
            poses.push(prev.apply(rule));
        }
        self.poses = poses;
    }

    /// Offline fitness: one point for every (pose, joint) whose axes are
    /// already in ascending order. Only used when the external evaluator is
    /// unavailable; production scoring happens out of process.
    pub fn local_fitness(&self) -> f64 {
        let mut score = 0.0;
        for pose in &self.poses {
            for joint in Joint::ALL {
                let [x, y, z] = pose.get(joint);
                if x <= y && y <= z {
                    score += 1.0;
                }
            }
        }
        score
    }

    /// Score this candidate with the offline evaluator.
    pub fn score_locally(&mut self) {
        self.fitness = self.local_fitness();
    }

    /// Single-point crossover against `other`, with a pivot drawn uniformly
    /// in [0, length] inclusive. Slot assignment is asymmetric: child one
    /// takes self's slots strictly past the pivot and other's slots up to
    /// and including it; child two the reverse.
    pub fn crossover<R: Rng>(&self, other: &Self, rng: &mut R) -> (Self, Self) {
        assert_eq!(self.length, other.length, "crossover parents differ in length");

        let pivot = rng.gen_range(0..=self.length);
        let mut rules_one = Vec::with_capacity(self.length);
        let mut rules_two = Vec::with_capacity(self.length);

        for slot in 0..self.length {
            if slot > pivot {
                rules_one.push(self.rules[slot]);
                rules_two.push(other.rules[slot]);
            } else {
                rules_one.push(other.rules[slot]);
                rules_two.push(self.rules[slot]);
            }
        }

        let mut child_one = Self::from_rules(rules_one);
        let mut child_two = Self::from_rules(rules_two);
        child_one.score_locally();
        child_two.score_locally();

        assert_eq!(child_one.rules.len(), self.length);
        assert_eq!(child_two.rules.len(), self.length);
        (child_one, child_two)
    }

    /// With probability `prob`, perturb every axis of every rule by a
    /// uniform draw from [-0.25, 0.25], clamping at the rule level (distinct
    /// from the pose-level clamp applied during derivation), then re-derive
    /// poses and re-score locally. A failed probability gate leaves the
    /// candidate untouched.
    pub fn mutate<R: Rng>(&mut self, prob: f64, rng: &mut R) {
        if rng.gen::<f64>() < prob {
            for rule in &mut self.rules {
                for offset in &mut rule.offsets {
                    for axis in offset.iter_mut() {
                        let delta = rng.gen::<f64>() * 2.0 * MUTATION_HALF_RANGE
                            - MUTATION_HALF_RANGE;
                        *axis = clamp_axis(*axis + delta);
                    }
                }
            }
            self.derive_poses();
            self.score_locally();
        }
        assert_eq!(self.rules.len(), self.length, "mutation changed rule count");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_init_produces_full_sequences() {
        let mut rng = StdRng::seed_from_u64(7);
        let candidate = CandidateSolution::random_init(30, RuleMagnitude::Damped, &mut rng);
        assert_eq!(candidate.rules.len(), 30);
        assert_eq!(candidate.poses.len(), 31);
        assert_eq!(candidate.fitness, UNEVALUATED);
        assert_eq!(candidate.poses[0], Pose::seed());
    }

    #[test]
    fn damped_rules_stay_in_reduced_range() {
        let mut rng = StdRng::seed_from_u64(11);
        let candidate = CandidateSolution::random_init(50, RuleMagnitude::Damped, &mut rng);
        for rule in &candidate.rules {
            for offset in &rule.offsets {
                for axis in offset {
                    assert!(axis.abs() <= 0.5 / 3.0 + f64::EPSILON);
                }
            }
        }
    }

    #[test]
    fn local_fitness_counts_sorted_joints() {
        // A zeroed rule sequence keeps every joint at the seed values.
        let candidate = CandidateSolution::from_rules(vec![Rule::zero(); 2]);
        // Seed pose: 8 joints at [0,0,0] and UpperArmL at
        // [-0.411, -0.085, -0.049] are ascending; UpperArmR at
        // [-0.411, 0.085, 0.049] is not. 9 points per pose, 3 poses.
        assert_eq!(candidate.local_fitness(), 27.0);
    }

    #[test]
    fn clone_is_independent() {
        let mut rng = StdRng::seed_from_u64(3);
        let source = CandidateSolution::random_init(10, RuleMagnitude::Full, &mut rng);
        let mut copy = source.clone();
        copy.mutate(1.0, &mut rng);
        assert_ne!(source.rules, copy.rules);
        assert_ne!(source.poses, copy.poses);

        let reference = source.clone();
        assert_eq!(source.rules, reference.rules);
    }
}
