use glam::{IVec3, Vec3};

/// One of the six bond directions of an octahedral voxel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Axis {
    PosX,
    NegX,
    PosY,
    NegY,
    PosZ,
    NegZ,
}

impl Axis {
    /// All six directions in canonical order (+x, -x, +y, -y, +z, -z)
    pub const ALL: [Axis; 6] = [
        Axis::PosX,
        Axis::NegX,
        Axis::PosY,
        Axis::NegY,
        Axis::PosZ,
        Axis::NegZ,
    ];

    /// Dense index 0..6, used to address a bond slot on a voxel
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Opposite direction: the axis a partner bond sits on
    #[inline]
    pub fn opposite(self) -> Self {
        const TABLE: [Axis; 6] = [
            Axis::NegX,
            Axis::PosX,
            Axis::NegY,
            Axis::PosY,
            Axis::NegZ,
            Axis::PosZ,
        ];
        TABLE[self as usize]
    }

    /// Unit step vector (integer)
    #[inline]
    pub fn to_ivec3(self) -> IVec3 {
        const TABLE: [IVec3; 6] = [
            IVec3::X,
            IVec3::NEG_X,
            IVec3::Y,
            IVec3::NEG_Y,
            IVec3::Z,
            IVec3::NEG_Z,
        ];
        TABLE[self as usize]
    }

    /// Unit direction vector
    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        const TABLE: [Vec3; 6] = [
            Vec3::X,
            Vec3::NEG_X,
            Vec3::Y,
            Vec3::NEG_Y,
            Vec3::Z,
            Vec3::NEG_Z,
        ];
        TABLE[self as usize]
    }

    /// Position of the bond vertex relative to the voxel center (half a step)
    #[inline]
    pub fn vertex_offset(self) -> Vec3 {
        self.to_vec3() * 0.5
    }

    /// Recover an axis from a unit direction vector (must be axis-aligned)
    pub fn from_vec3(v: Vec3) -> Option<Self> {
        let abs = v.abs();
        if abs.x > abs.y && abs.x > abs.z {
            return Some(if v.x > 0.0 { Axis::PosX } else { Axis::NegX });
        }
        if abs.y > abs.x && abs.y > abs.z {
            return Some(if v.y > 0.0 { Axis::PosY } else { Axis::NegY });
        }
        if abs.z > abs.x && abs.z > abs.y {
            return Some(if v.z > 0.0 { Axis::PosZ } else { Axis::NegZ });
        }
        None
    }

    /// Human-readable direction label for logs and reports
    pub fn label(self) -> &'static str {
        const TABLE: [&str; 6] = ["+x", "-x", "+y", "-y", "+z", "-z"];
        TABLE[self as usize]
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite() {
        for axis in Axis::ALL {
            assert_eq!(axis.opposite().opposite(), axis);
            assert_eq!(axis.to_ivec3() + axis.opposite().to_ivec3(), IVec3::ZERO);
        }
    }

    #[test]
    fn test_vector_round_trip() {
        for axis in Axis::ALL {
            assert_eq!(Axis::from_vec3(axis.to_vec3()), Some(axis));
        }
        assert_eq!(Axis::from_vec3(Vec3::ZERO), None);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, axis) in Axis::ALL.iter().enumerate() {
            assert_eq!(axis.index(), i);
        }
    }

    #[test]
    fn test_labels() {
        assert_eq!(Axis::PosX.label(), "+x");
        assert_eq!(Axis::NegZ.label(), "-z");
    }
}
