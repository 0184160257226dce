use evogait::{CandidateSolution, Joint, Rule, RuleMagnitude};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn random_candidate(length: usize, seed: u64) -> CandidateSolution {
    let mut rng = StdRng::seed_from_u64(seed);
    CandidateSolution::random_init(length, RuleMagnitude::Full, &mut rng)
}

#[test]
fn derived_pose_axes_stay_in_bounds() {
    // Long sequences of full-range rules will drift well past the clamp
    // threshold without it.
    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut candidate = random_candidate(60, seed);
        candidate.mutate(1.0, &mut rng);
        for pose in &candidate.poses {
            for joint in Joint::ALL {
                for axis in pose.get(joint) {
                    assert!(
                        (-1.0..=1.0).contains(&axis),
                        "axis {} out of bounds for {}",
                        axis,
                        joint.name()
                    );
                }
            }
        }
    }
}

#[test]
fn crossover_children_have_full_length() {
    let length = 30;
    let parent_a = random_candidate(length, 1);
    let parent_b = random_candidate(length, 2);

    // Repeated draws cover pivots across [0, length].
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..200 {
        let (child_one, child_two) = parent_a.crossover(&parent_b, &mut rng);
        assert_eq!(child_one.rules.len(), length);
        assert_eq!(child_two.rules.len(), length);
        assert_eq!(child_one.poses.len(), length + 1);
        assert_eq!(child_two.poses.len(), length + 1);
    }
}

#[test]
fn crossover_splits_are_complementary() {
    let length = 20;
    let parent_a = random_candidate(length, 10);
    let parent_b = random_candidate(length, 11);
    let mut rng = StdRng::seed_from_u64(12);

    for _ in 0..50 {
        let (child_one, child_two) = parent_a.crossover(&parent_b, &mut rng);
        for slot in 0..length {
            let from_a = child_one.rules[slot] == parent_a.rules[slot];
            let from_b = child_one.rules[slot] == parent_b.rules[slot];
            assert!(from_a || from_b, "slot {} comes from neither parent", slot);
            // Whatever child one got, child two got the other parent's slot.
            if from_a {
                assert_eq!(child_two.rules[slot], parent_b.rules[slot]);
            } else {
                assert_eq!(child_two.rules[slot], parent_a.rules[slot]);
            }
        }
        // Child one must switch from the "other" parent to "self" at most
        // once: a prefix of B slots followed by a suffix of A slots.
        let mut seen_a = false;
        for slot in 0..length {
            if child_one.rules[slot] == parent_a.rules[slot] {
                seen_a = true;
            } else {
                assert!(!seen_a, "child one switched parents more than once");
            }
        }
    }
}

#[test]
fn mutation_keeps_rules_bounded_and_sized() {
    let mut rng = StdRng::seed_from_u64(4);
    let mut candidate = random_candidate(30, 5);

    for _ in 0..20 {
        candidate.mutate(1.0, &mut rng);
        assert_eq!(candidate.rules.len(), 30);
        for rule in &candidate.rules {
            for offset in &rule.offsets {
                for axis in offset {
                    assert!((-1.0..=1.0).contains(axis));
                }
            }
        }
    }
}

#[test]
fn failed_mutation_gate_leaves_candidate_unchanged() {
    let mut rng = StdRng::seed_from_u64(6);
    let mut candidate = random_candidate(15, 7);
    let rules_before = candidate.rules.clone();
    let poses_before = candidate.poses.clone();

    candidate.mutate(0.0, &mut rng);

    assert_eq!(candidate.rules, rules_before);
    assert_eq!(candidate.poses, poses_before);
}

#[test]
fn copy_independence() {
    let mut rng = StdRng::seed_from_u64(8);
    let source = random_candidate(25, 9);
    let source_rules = source.rules.clone();
    let source_poses = source.poses.clone();

    let mut copy = source.clone();
    copy.mutate(1.0, &mut rng);

    assert_eq!(source.rules, source_rules);
    assert_eq!(source.poses, source_poses);
    assert_ne!(copy.rules, source_rules);
}

#[test]
fn worked_derivation_example() {
    // Only the torso moves; its seed is the origin, so its trajectory is the
    // worked example with the final step clamped: 0 -> 0.2 -> 0.7 -> -1.
    let steps: [[f64; 3]; 3] = [[0.2, 0.2, 0.2], [0.5, 0.5, 0.5], [-3.0, -3.0, -3.0]];
    let rules: Vec<Rule> = steps
        .iter()
        .map(|&step| {
            let mut rule = Rule::zero();
            rule.set(Joint::Torso, step);
            rule
        })
        .collect();

    let candidate = CandidateSolution::from_rules(rules);

    assert_eq!(candidate.poses.len(), 4);
    let torso: Vec<[f64; 3]> = candidate.poses.iter().map(|p| p.get(Joint::Torso)).collect();
    assert_eq!(torso[0], [0.0, 0.0, 0.0]);
    for axis in 0..3 {
        assert!((torso[1][axis] - 0.2).abs() < 1e-12);
        assert!((torso[2][axis] - 0.7).abs() < 1e-12);
        assert_eq!(torso[3][axis], -1.0);
    }
}
