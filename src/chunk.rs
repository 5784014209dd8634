// ============================================
// World Chunk - Чанк: сетка + меш + запечённый свет
// ============================================
// Один владелец на всё: сетка, поток вершин, треугольники и бокс
// живут и умирают вместе. Меш строится один раз в конструкторе,
// дальше меняется только яркость вершин.

use ultraviolet::Vec3;

use crate::lighting::{BakeReport, BakeSettings, LightBaker, PointLight, Triangle};
use crate::mesh::{Aabb, ChunkVertex, MeshBuilder, MeshSettings};
use crate::render::{DrawCall, VertexSink};
use crate::voxel::VoxelGrid;

pub const CHUNK_WIDTH: u32 = 32;
pub const CHUNK_HEIGHT: u32 = 16;
pub const CHUNK_DEPTH: u32 = 32;

/// Чанк стандартного размера 32x16x32
pub type DefaultChunk<S> = WorldChunk<S, CHUNK_WIDTH, CHUNK_HEIGHT, CHUNK_DEPTH>;

pub struct WorldChunk<S: VertexSink, const W: u32, const H: u32, const D: u32> {
    grid: VoxelGrid<W, H, D>,
    vertices: Vec<ChunkVertex>,
    /// Снимок геометрии для теневых лучей. Строится вместе с мешем
    triangles: Vec<Triangle>,
    aabb: Aabb,
    light_map_overflow: usize,
    baker: LightBaker,
    sink: S,
}

impl<S: VertexSink, const W: u32, const H: u32, const D: u32> WorldChunk<S, W, H, D> {
    /// Чанк-комната (оболочка, колонны, проём)
    pub fn new(sink: S, mesh: &MeshSettings, bake: BakeSettings) -> Self {
        Self::from_grid(VoxelGrid::generate_room(), sink, mesh, bake)
    }

    /// Построить меш из готовой сетки и залить его в `sink`
    pub fn from_grid(grid: VoxelGrid<W, H, D>, mut sink: S, mesh: &MeshSettings, bake: BakeSettings) -> Self {
        let mesh = MeshBuilder::build(&grid, mesh);
        log::info!("Number of vertices: {}", mesh.vertices.len());

        let triangles = Triangle::from_stream(&mesh.vertices);
        sink.create(&mesh.vertices);

        Self {
            grid,
            vertices: mesh.vertices,
            triangles,
            aabb: mesh.aabb,
            light_map_overflow: mesh.light_map_overflow,
            baker: LightBaker::new(bake),
            sink,
        }
    }

    pub fn grid(&self) -> &VoxelGrid<W, H, D> {
        &self.grid
    }

    pub fn vertices(&self) -> &[ChunkVertex] {
        &self.vertices
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertices.len() as u32
    }

    /// Бокс меша - для расстановки источников света
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    pub fn light_map_overflow(&self) -> usize {
        self.light_map_overflow
    }

    pub fn bake_settings(&self) -> &BakeSettings {
        self.baker.settings()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Отрисовка текущего числа вершин. Шейдер и текстуры привязывает вызывающий
    pub fn draw(&self, target: &mut impl DrawCall) {
        target.draw_vertices(self.vertex_count());
    }

    /// Вся яркость - в фоновый минимум
    pub fn reset_luminance(&mut self) {
        self.baker.reset_luminance(&mut self.vertices);
        self.sink.update(&self.vertices);
    }

    /// Добавить вклад одного источника и перезалить поток
    pub fn accumulate(&mut self, position: Vec3, strength: f32) -> BakeReport {
        let report = self.baker.accumulate(
            &mut self.vertices,
            &self.triangles,
            PointLight::new(position, strength),
        );
        self.sink.update(&self.vertices);

        log::info!("Light Time: {:.2}ms", report.elapsed_ms);
        report
    }

    /// Полное перезапекание: сброс и последовательно все источники
    pub fn bake(&mut self, lights: &[PointLight]) -> Vec<BakeReport> {
        log::info!("Computing lighting..");
        self.reset_luminance();

        let reports = lights
            .iter()
            .map(|light| self.accumulate(light.position(), light.strength))
            .collect();

        log::info!("Lighting completed!");
        reports
    }

    /// Минимальная и максимальная яркость по вершинам
    pub fn luminance_range(&self) -> Option<(f32, f32)> {
        self.vertices.iter().map(|v| v.luminance).fold(None, |range, l| match range {
            None => Some((l, l)),
            Some((lo, hi)) => Some((lo.min(l), hi.max(l))),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{CpuVertexSink, DrawLog};
    use crate::voxel::Voxel;

    const UNIT: MeshSettings = MeshSettings { voxel_size: 1.0 };

    fn single_voxel() -> WorldChunk<CpuVertexSink, 3, 3, 3> {
        let mut grid = VoxelGrid::new();
        grid.set(1, 1, 1, Voxel::SOLID);
        WorldChunk::from_grid(grid, CpuVertexSink::new(), &UNIT, BakeSettings::default())
    }

    #[test]
    fn test_construction_uploads_once() {
        let chunk = single_voxel();
        assert_eq!(chunk.vertex_count(), 36);
        assert_eq!(chunk.triangles().len(), 12);
        assert_eq!(chunk.sink().creates(), 1);
        assert_eq!(chunk.sink().updates(), 0);
        assert_eq!(chunk.sink().vertices(), chunk.vertices());
    }

    #[test]
    fn test_draw_uses_vertex_count() {
        let chunk = single_voxel();
        let mut target = DrawLog::default();
        chunk.draw(&mut target);
        assert_eq!(target.calls, vec![36]);
    }

    #[test]
    fn test_luminance_changes_are_published() {
        let mut chunk = single_voxel();
        chunk.reset_luminance();
        assert_eq!(chunk.sink().updates(), 1);

        chunk.accumulate(Vec3::new(1.0, 50.0, 1.0), 10.0);
        assert_eq!(chunk.sink().updates(), 2);
        assert_eq!(chunk.sink().vertices(), chunk.vertices());
    }

    #[test]
    fn test_bake_resets_then_accumulates() {
        let mut chunk = single_voxel();
        let lights = [
            PointLight::new(Vec3::new(1.0, 50.0, 1.0), 10.0),
            PointLight::new(Vec3::new(50.0, 1.0, 1.0), 10.0),
        ];

        let first = chunk.bake(&lights);
        let snapshot: Vec<f32> = chunk.vertices().iter().map(|v| v.luminance).collect();
        let second = chunk.bake(&lights);
        let again: Vec<f32> = chunk.vertices().iter().map(|v| v.luminance).collect();

        assert_eq!(first.len(), 2);
        assert_eq!(first[0].rays, second[0].rays);
        assert_eq!(snapshot, again);

        let (lo, hi) = chunk.luminance_range().unwrap_or_default();
        assert_eq!(lo, 0.1);
        assert!(hi > 0.1);
    }
}
