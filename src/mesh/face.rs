// ============================================
// Face Directions - Шесть граней куба
// ============================================

use ultraviolet::Vec3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FaceDir {
    PosX, NegX, PosY, NegY, PosZ, NegZ,
}

impl FaceDir {
    /// Порядок выпуска граней одного вокселя
    pub const ALL: [FaceDir; 6] = [
        FaceDir::PosX, FaceDir::NegX,
        FaceDir::PosY, FaceDir::NegY,
        FaceDir::PosZ, FaceDir::NegZ,
    ];

    /// Смещение к соседу
    #[inline]
    pub fn offset(self) -> [i32; 3] {
        match self {
            FaceDir::PosX => [1, 0, 0],
            FaceDir::NegX => [-1, 0, 0],
            FaceDir::PosY => [0, 1, 0],
            FaceDir::NegY => [0, -1, 0],
            FaceDir::PosZ => [0, 0, 1],
            FaceDir::NegZ => [0, 0, -1],
        }
    }

    #[inline]
    pub fn normal(self) -> Vec3 {
        let [x, y, z] = self.offset();
        Vec3::new(x as f32, y as f32, z as f32)
    }

    #[inline]
    pub fn neighbor(self, pos: [i32; 3]) -> [i32; 3] {
        let d = self.offset();
        [pos[0] + d[0], pos[1] + d[1], pos[2] + d[2]]
    }
}

/// Локальный базис грани: центр и две полуоси
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FaceFrame {
    pub center: Vec3,
    pub normal: Vec3,
    pub tangent: Vec3,
    pub bitangent: Vec3,
}

impl FaceFrame {
    /// tangent = (d.y, d.z, d.x), bitangent = d x tangent (правая тройка),
    /// обе длиной в полвокселя
    pub fn new(voxel: Vec3, dir: FaceDir, voxel_size: f32) -> Self {
        let normal = dir.normal();
        let scale = 0.5 * voxel_size;
        let tangent = Vec3::new(normal.y, normal.z, normal.x) * scale;
        let bitangent = normal.cross(tangent).normalized() * scale;

        Self {
            center: voxel * voxel_size + normal * scale,
            normal,
            tangent,
            bitangent,
        }
    }

    /// Угол грани; i, j = ±1
    #[inline]
    pub fn corner(&self, i: f32, j: f32) -> Vec3 {
        self.center + self.tangent * i + self.bitangent * j
    }
}

/// Два треугольника на грань, 6 независимых вершин
pub const FACE_CORNERS: [(f32, f32); 6] = [
    (1.0, 1.0), (-1.0, 1.0), (1.0, -1.0),
    (1.0, -1.0), (-1.0, 1.0), (-1.0, -1.0),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_is_orthogonal() {
        for dir in FaceDir::ALL {
            let frame = FaceFrame::new(Vec3::zero(), dir, 2.0);
            assert_eq!(frame.normal.dot(frame.tangent), 0.0, "{dir:?}");
            assert_eq!(frame.normal.dot(frame.bitangent), 0.0, "{dir:?}");
            assert_eq!(frame.tangent.dot(frame.bitangent), 0.0, "{dir:?}");
            assert_eq!(frame.tangent.mag(), 1.0);
            assert_eq!(frame.bitangent.mag(), 1.0);
            // Правая тройка: tangent x bitangent смотрит по нормали
            assert!(frame.tangent.cross(frame.bitangent).dot(frame.normal) > 0.0);
        }
    }

    #[test]
    fn test_pos_z_corners() {
        let frame = FaceFrame::new(Vec3::zero(), FaceDir::PosZ, 1.0);
        assert_eq!(frame.center, Vec3::new(0.0, 0.0, 0.5));
        assert_eq!(frame.tangent, Vec3::new(0.0, 0.5, 0.0));
        assert_eq!(frame.bitangent, Vec3::new(-0.5, 0.0, 0.0));
        assert_eq!(frame.corner(1.0, 1.0), Vec3::new(-0.5, 0.5, 0.5));
        assert_eq!(frame.corner(-1.0, -1.0), Vec3::new(0.5, -0.5, 0.5));
    }

    #[test]
    fn test_triangles_wind_along_normal() {
        for dir in FaceDir::ALL {
            let frame = FaceFrame::new(Vec3::new(3.0, 1.0, 2.0), dir, 8.0);
            for tri in FACE_CORNERS.chunks_exact(3) {
                let p: Vec<Vec3> = tri.iter().map(|&(i, j)| frame.corner(i, j)).collect();
                let n = (p[1] - p[0]).cross(p[2] - p[0]);
                assert!(n.dot(frame.normal) > 0.0, "{dir:?}");
            }
        }
    }

    #[test]
    fn test_neighbor() {
        assert_eq!(FaceDir::NegY.neighbor([2, 0, 5]), [2, -1, 5]);
        assert_eq!(FaceDir::PosX.neighbor([2, 0, 5]), [3, 0, 5]);
    }
}
