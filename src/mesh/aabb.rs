// ============================================
// AABB - Ограничивающий бокс меша
// ============================================

use ultraviolet::Vec3;

/// Бокс только растёт: расширяется каждой выпущенной вершиной
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn empty() -> Self {
        Self {
            min: Vec3::broadcast(f32::INFINITY),
            max: Vec3::broadcast(f32::NEG_INFINITY),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    #[inline]
    pub fn expand(&mut self, p: Vec3) {
        self.min = self.min.min_by_component(p);
        self.max = self.max.max_by_component(p);
    }

    #[inline]
    pub fn contains(&self, p: Vec3) -> bool {
        p.x >= self.min.x && p.y >= self.min.y && p.z >= self.min.z
            && p.x <= self.max.x && p.y <= self.max.y && p.z <= self.max.z
    }

    /// Центр бокса; у пустого бокса - начало координат
    pub fn center(&self) -> Vec3 {
        if self.is_empty() {
            return Vec3::zero();
        }
        (self.min + self.max) * 0.5
    }

    pub fn size(&self) -> Vec3 {
        if self.is_empty() {
            return Vec3::zero();
        }
        self.max - self.min
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}
