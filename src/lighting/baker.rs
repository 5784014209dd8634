// ============================================
// Light Baker - Запекание света в вершины
// ============================================
// Один теневой луч на вершину к точечному источнику, перебор всех
// треугольников меша. O(вершины * треугольники) на источник.
//
// Параллельно по вершинам (Rayon): треугольники только читаются,
// каждая вершина пишет только свою яркость. Результат не зависит
// от числа потоков и порядка обработки.

use std::time::Instant;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use ultraviolet::Vec3;

use crate::mesh::ChunkVertex;
use super::ray::{Ray, Triangle};
use super::settings::BakeSettings;

/// Точечный источник света
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PointLight {
    pub position: [f32; 3],
    pub strength: f32,
}

impl PointLight {
    pub fn new(position: Vec3, strength: f32) -> Self {
        Self { position: position.into(), strength }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::from(self.position)
    }
}

/// Исход одного теневого луча
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RayOutcome {
    /// Свет дошёл
    Lit,
    /// Источник за поверхностью - геометрию не проверяем
    Backfacing,
    /// Луч упёрся в треугольник раньше источника
    Occluded,
}

/// Счётчики лучей за проход
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RayStats {
    pub lit: usize,
    pub backfacing: usize,
    pub occluded: usize,
}

impl RayStats {
    #[inline]
    fn record(mut self, outcome: RayOutcome) -> Self {
        match outcome {
            RayOutcome::Lit => self.lit += 1,
            RayOutcome::Backfacing => self.backfacing += 1,
            RayOutcome::Occluded => self.occluded += 1,
        }
        self
    }

    #[inline]
    fn merge(self, other: Self) -> Self {
        Self {
            lit: self.lit + other.lit,
            backfacing: self.backfacing + other.backfacing,
            occluded: self.occluded + other.occluded,
        }
    }

    pub fn total(&self) -> usize {
        self.lit + self.backfacing + self.occluded
    }
}

/// Отчёт одного прохода accumulate
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BakeReport {
    pub light: PointLight,
    pub vertex_count: usize,
    pub rays: RayStats,
    pub elapsed_ms: f64,
}

#[derive(Clone, Debug, Default)]
pub struct LightBaker {
    settings: BakeSettings,
}

impl LightBaker {
    pub fn new(settings: BakeSettings) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &BakeSettings {
        &self.settings
    }

    /// Сброс яркости до фонового минимума перед новым запеканием
    pub fn reset_luminance(&self, vertices: &mut [ChunkVertex]) {
        let ambient = self.settings.ambient;
        vertices.par_iter_mut().for_each(|vertex| vertex.luminance = ambient);
    }

    /// Добавить вклад одного источника во все вершины.
    /// `triangles` должны быть построены из того же потока и не меняться.
    pub fn accumulate(
        &self,
        vertices: &mut [ChunkVertex],
        triangles: &[Triangle],
        light: PointLight,
    ) -> BakeReport {
        let start = Instant::now();

        let rays = vertices
            .par_iter_mut()
            .enumerate()
            .map(|(index, vertex)| {
                let mut stats = RayStats::default();
                for sample in 0..self.settings.ray_count {
                    let target = self.sample_target(light.position(), index as u32, sample);
                    let (outcome, contribution) = self.trace(vertex, target, light.strength, triangles);
                    vertex.luminance += contribution;
                    stats = stats.record(outcome);
                }
                stats
            })
            .reduce(RayStats::default, RayStats::merge);

        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        log::debug!(
            "LIGHT :: {} lit, {} backfacing, {} occluded rays",
            rays.lit, rays.backfacing, rays.occluded
        );

        BakeReport { light, vertex_count: vertices.len(), rays, elapsed_ms }
    }

    /// Один теневой луч от вершины к цели. Возвращает исход и вклад в яркость
    pub fn trace(
        &self,
        vertex: &ChunkVertex,
        target: Vec3,
        strength: f32,
        triangles: &[Triangle],
    ) -> (RayOutcome, f32) {
        let position = vertex.position();
        let normal = vertex.normal();

        let ray = Ray::new(
            position + normal * self.settings.normal_offset,
            (target - position).normalized(),
        );
        let light_distance = (target - ray.origin).mag();

        if ray.direction.dot(normal) < 0.0 {
            return (RayOutcome::Backfacing, 0.0);
        }

        // Свои треугольники вершины тоже кандидаты
        let blocked = triangles.iter().any(|tri| {
            tri.intersect(&ray, self.settings.parallel_epsilon)
                .is_some_and(|t| t < light_distance)
        });
        if blocked {
            return (RayOutcome::Occluded, 0.0);
        }

        let contribution = strength / light_distance / self.settings.ray_count as f32;
        (RayOutcome::Lit, contribution)
    }

    /// Цель луча. Для жёстких теней - сам источник,
    /// для мягких - детерминированно смещённая точка в кубе light_radius
    pub fn sample_target(&self, light: Vec3, vertex: u32, sample: u32) -> Vec3 {
        if !self.settings.is_soft() {
            return light;
        }
        let offset = Vec3::new(
            jitter(vertex, sample, 0),
            jitter(vertex, sample, 1),
            jitter(vertex, sample, 2),
        );
        light + offset * self.settings.light_radius
    }
}

/// Детерминированный хэш в [-1, 1]
#[inline]
fn jitter(vertex: u32, sample: u32, axis: u32) -> f32 {
    let n = (vertex as i32).wrapping_mul(374761393)
        .wrapping_add((sample as i32).wrapping_mul(668265263))
        .wrapping_add((axis as i32).wrapping_mul(1274126177));
    let n = (n ^ (n >> 13)).wrapping_mul(1911520717);
    ((n as u32) as f32) / (u32::MAX as f32) * 2.0 - 1.0
}
