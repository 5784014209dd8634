// ============================================
// Ray / Triangle - Пересечение луча с треугольником
// ============================================
// Плоскость треугольника + три проверки рёбер по знаку
// n·((v_next - v) x (p - v)). Попадание на ребро считается попаданием.

use ultraviolet::Vec3;

use crate::mesh::ChunkVertex;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Нормализованное направление
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

/// Треугольник с заранее посчитанной плоскостью
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Triangle {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    /// Ненормированная нормаль (v1 - v0) x (v2 - v0)
    pub normal: Vec3,
    /// d в уравнении плоскости n·p + d = 0
    pub plane_d: f32,
}

impl Triangle {
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        let normal = (v1 - v0).cross(v2 - v0);
        Self { v0, v1, v2, normal, plane_d: -normal.dot(v0) }
    }

    /// Треугольник i занимает вершины [3i, 3i+3)
    pub fn from_stream(vertices: &[ChunkVertex]) -> Vec<Triangle> {
        vertices
            .chunks_exact(3)
            .map(|tri| Triangle::new(tri[0].position(), tri[1].position(), tri[2].position()))
            .collect()
    }

    /// Параметр t пересечения или None (параллельно, позади, мимо)
    #[inline]
    pub fn intersect(&self, ray: &Ray, parallel_epsilon: f32) -> Option<f32> {
        let n = self.normal;

        let n_dot_rd = n.dot(ray.direction);
        if n_dot_rd.abs() < parallel_epsilon {
            return None;
        }

        let t = -(n.dot(ray.origin) + self.plane_d) / n_dot_rd;
        if t < 0.0 {
            return None;
        }
        let p = ray.at(t);

        let edges = [(self.v0, self.v1), (self.v1, self.v2), (self.v2, self.v0)];
        for (a, b) in edges {
            if n.dot((b - a).cross(p - a)) < 0.0 {
                return None;
            }
        }

        Some(t)
    }
}
