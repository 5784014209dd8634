// ============================================
// Bake Settings - Параметры запекания света
// ============================================

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BakeSettings {
    /// Яркость после сброса (фоновый минимум)
    pub ambient: f32,
    /// Сдвиг начала луча вдоль нормали
    pub normal_offset: f32,
    /// Порог |n·d|, ниже которого луч считается параллельным плоскости
    pub parallel_epsilon: f32,
    /// Лучей на вершину. 1 = жёсткие тени
    pub ray_count: u32,
    /// Полуразмер куба, в котором дрожит цель луча при ray_count > 1
    pub light_radius: f32,
}

impl Default for BakeSettings {
    fn default() -> Self {
        Self {
            ambient: 0.1,
            normal_offset: 0.001,
            parallel_epsilon: 0.00001,
            ray_count: 1,
            light_radius: 0.0,
        }
    }
}

impl BakeSettings {
    /// Мягкие тени включаются только при нескольких лучах и ненулевом радиусе
    #[inline]
    pub fn is_soft(&self) -> bool {
        self.ray_count > 1 && self.light_radius > 0.0
    }
}
