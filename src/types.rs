use serde::{Deserialize, Serialize};

/// The ten armature bones driven by the walk cycle. The variant order is
/// canonical: rule and pose arrays are indexed by it, and the snapshot wire
/// format relies on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Joint {
    LowerArmR,
    UpperArmR,
    LowerArmL,
    UpperArmL,
    LowerLegR,
    UpperLegR,
    LowerLegL,
    UpperLegL,
    Torso,
    Chest,
}

pub const JOINT_COUNT: usize = 10;

impl Joint {
    pub const ALL: [Joint; JOINT_COUNT] = [
        Joint::LowerArmR,
        Joint::UpperArmR,
        Joint::LowerArmL,
        Joint::UpperArmL,
        Joint::LowerLegR,
        Joint::UpperLegR,
        Joint::LowerLegL,
        Joint::UpperLegL,
        Joint::Torso,
        Joint::Chest,
    ];

    /// Bone name as it appears in the rigged model.
    pub fn name(self) -> &'static str {
        match self {
            Joint::LowerArmR => "Lower Arm.R",
            Joint::UpperArmR => "Upper Arm.R",
            Joint::LowerArmL => "Lower Arm.L",
            Joint::UpperArmL => "Upper Arm.L",
            Joint::LowerLegR => "Lower Leg.R",
            Joint::UpperLegR => "Upper Leg.R",
            Joint::LowerLegL => "Lower Leg.L",
            Joint::UpperLegL => "Upper Leg.L",
            Joint::Torso => "Torso",
            Joint::Chest => "Chest",
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// One 3-axis rotation offset.
pub type Vec3 = [f64; 3];

/// Per-step offsets for every joint. Unbounded at creation; pose derivation
/// clamps, and mutation clamps at the rule level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub offsets: [Vec3; JOINT_COUNT],
}

impl Rule {
    pub fn zero() -> Self {
        Self {
            offsets: [[0.0; 3]; JOINT_COUNT],
        }
    }

    pub fn get(&self, joint: Joint) -> Vec3 {
        self.offsets[joint.index()]
    }

    pub fn set(&mut self, joint: Joint, offset: Vec3) {
        self.offsets[joint.index()] = offset;
    }
}

/// A joint configuration at one keyframe. Every axis is held in [-1, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub joints: [Vec3; JOINT_COUNT],
}

impl Pose {
    /// Resting pose of the armature: arms slightly rotated, everything else
    /// at the origin.
    pub fn seed() -> Self {
        let mut pose = Self {
            joints: [[0.0; 3]; JOINT_COUNT],
        };
        pose.joints[Joint::UpperArmR.index()] = [-0.411, 0.085, 0.049];
        pose.joints[Joint::UpperArmL.index()] = [-0.411, -0.085, -0.049];
        pose
    }

    pub fn get(&self, joint: Joint) -> Vec3 {
        self.joints[joint.index()]
    }

    /// Next pose in the cycle: elementwise sum with the rule's offsets,
    /// clamped axis by axis.
    pub fn apply(&self, rule: &Rule) -> Pose {
        let mut next = *self;
        for (joint, offset) in next.joints.iter_mut().zip(rule.offsets.iter()) {
            for axis in 0..3 {
                joint[axis] = clamp_axis(joint[axis] + offset[axis]);
            }
        }
        next
    }
}

/// Clamp a single axis value into the legal [-1, 1] rotation range.
pub fn clamp_axis(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}
