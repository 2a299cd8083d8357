//! Rigid rotation operators of the octahedral (cubic) point group.
//!
//! The operator set mirrors the painting algorithm's enumeration:
//! identity, nine single-axis quarter/half/three-quarter turns, and
//! every unordered composition of two single-axis turns on different
//! axes. That is 37 labeled operators covering the 24-element rotation
//! group; duplicate group elements under different labels are
//! harmless, and the fixed enumeration order keeps symmetry lists
//! deterministic.

use std::sync::OnceLock;

use glam::{Mat3, Vec3};
use lattice::Axis;

/// Index of a rotation operator into [`octahedral_rotations`]
pub type RotIdx = u8;

/// One labeled rotation operator. All matrices are exact signed
/// permutations of the coordinate axes.
#[derive(Debug, Clone)]
pub struct RotationOp {
    pub label: String,
    pub mat: Mat3,
}

impl RotationOp {
    /// Rotate an arbitrary vector
    #[inline]
    pub fn rotate_vec3(&self, v: Vec3) -> Vec3 {
        self.mat * v
    }

    /// Rotate a bond direction. Signed-permutation matrices always map
    /// axes to axes, so failure here is a construction bug.
    #[inline]
    pub fn rotate_axis(&self, axis: Axis) -> Axis {
        Axis::from_vec3(self.mat * axis.to_vec3())
            .expect("octahedral operator must map axes to axes")
    }
}

/// Exact quarter-turn about x: y -> z, z -> -y
fn rot_x90() -> Mat3 {
    Mat3::from_cols(Vec3::X, Vec3::Z, Vec3::NEG_Y)
}

/// Exact quarter-turn about y: z -> x, x -> -z
fn rot_y90() -> Mat3 {
    Mat3::from_cols(Vec3::NEG_Z, Vec3::Y, Vec3::X)
}

/// Exact quarter-turn about z: x -> y, y -> -x
fn rot_z90() -> Mat3 {
    Mat3::from_cols(Vec3::Y, Vec3::NEG_X, Vec3::Z)
}

fn single_rotations() -> Vec<(usize, RotationOp)> {
    let quarters = [rot_x90(), rot_y90(), rot_z90()];
    let names = ["x", "y", "z"];

    let mut ops = Vec::with_capacity(9);
    for (axis_idx, (quarter, name)) in quarters.iter().zip(names).enumerate() {
        let mut mat = Mat3::IDENTITY;
        for turns in [90u32, 180, 270] {
            mat = *quarter * mat;
            ops.push((
                axis_idx,
                RotationOp {
                    label: format!("{turns}{name}"),
                    mat,
                },
            ));
        }
    }
    ops
}

/// The full labeled operator set, built once.
pub fn octahedral_rotations() -> &'static [RotationOp] {
    static OPS: OnceLock<Vec<RotationOp>> = OnceLock::new();
    OPS.get_or_init(|| {
        let singles = single_rotations();

        let mut ops = Vec::with_capacity(37);
        ops.push(RotationOp {
            label: "identity".to_string(),
            mat: Mat3::IDENTITY,
        });
        ops.extend(singles.iter().map(|(_, op)| op.clone()));

        // unordered double compositions on distinct axes, first-axis
        // major, second operator applied first
        for (axis_a, a) in &singles {
            for (axis_b, b) in &singles {
                if axis_a < axis_b {
                    ops.push(RotationOp {
                        label: format!("{} + {}", a.label, b.label),
                        mat: a.mat * b.mat,
                    });
                }
            }
        }
        ops
    })
}

/// Index of the identity operator in the enumeration
pub const IDENTITY: RotIdx = 0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_count() {
        // identity + 9 singles + 3 axis pairs * 9 angle combinations
        assert_eq!(octahedral_rotations().len(), 37);
    }

    #[test]
    fn test_identity_first() {
        let ops = octahedral_rotations();
        assert_eq!(ops[IDENTITY as usize].label, "identity");
        assert_eq!(ops[IDENTITY as usize].mat, Mat3::IDENTITY);
    }

    #[test]
    fn test_matrices_are_signed_permutations() {
        for op in octahedral_rotations() {
            for axis in Axis::ALL {
                let image = op.rotate_vec3(axis.to_vec3());
                assert_eq!(image.length_squared(), 1.0, "op {}", op.label);
                assert!(
                    Axis::from_vec3(image).is_some(),
                    "op {} does not permute axes",
                    op.label
                );
            }
        }
    }

    #[test]
    fn test_quarter_turns_have_order_four() {
        for mat in [rot_x90(), rot_y90(), rot_z90()] {
            assert_eq!(mat * mat * mat * mat, Mat3::IDENTITY);
            assert_ne!(mat * mat, Mat3::IDENTITY);
        }
    }

    #[test]
    fn test_axis_rotation_examples() {
        let ops = octahedral_rotations();
        // "90x": y -> z
        let x90 = ops.iter().find(|op| op.label == "90x").unwrap();
        assert_eq!(x90.rotate_axis(Axis::PosY), Axis::PosZ);
        assert_eq!(x90.rotate_axis(Axis::PosZ), Axis::NegY);
        assert_eq!(x90.rotate_axis(Axis::PosX), Axis::PosX);
        // "180z": x -> -x, y -> -y
        let z180 = ops.iter().find(|op| op.label == "180z").unwrap();
        assert_eq!(z180.rotate_axis(Axis::PosX), Axis::NegX);
        assert_eq!(z180.rotate_axis(Axis::NegY), Axis::PosY);
    }

    #[test]
    fn test_enumeration_is_stable() {
        let labels: Vec<&str> = octahedral_rotations()
            .iter()
            .take(10)
            .map(|op| op.label.as_str())
            .collect();
        assert_eq!(
            labels,
            [
                "identity", "90x", "180x", "270x", "90y", "180y", "270y", "90z",
                "180z", "270z"
            ]
        );
    }
}
