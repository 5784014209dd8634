// ============================================
// Mesh Builder - Меш из вокселей с отсечением граней
// ============================================
// Строго последовательный проход: порядок обхода задаёт индексы
// треугольников, состояние курсора карты освещения и бокс.
// Greedy meshing здесь нет - каждая грань это 2 независимых треугольника.

use serde::{Deserialize, Serialize};
use ultraviolet::Vec3;

use crate::voxel::VoxelGrid;
use super::aabb::Aabb;
use super::face::{FaceDir, FaceFrame, FACE_CORNERS};
use super::light_map::LightMapCursor;
use super::vertex::ChunkVertex;

/// Настройки геометрии
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshSettings {
    /// Длина ребра вокселя в мировых единицах
    pub voxel_size: f32,
}

impl Default for MeshSettings {
    fn default() -> Self {
        Self { voxel_size: 8.0 }
    }
}

/// Готовый меш чанка
#[derive(Clone, Debug, Default)]
pub struct ChunkMesh {
    pub vertices: Vec<ChunkVertex>,
    pub aabb: Aabb,
    /// Сколько вершин получили UV за пределами карты освещения
    pub light_map_overflow: usize,
}

impl ChunkMesh {
    pub fn face_count(&self) -> usize {
        self.vertices.len() / 6
    }

    pub fn triangle_count(&self) -> usize {
        self.vertices.len() / 3
    }
}

pub struct MeshBuilder {
    voxel_size: f32,
    cursor: LightMapCursor,
    mesh: ChunkMesh,
}

impl MeshBuilder {
    pub fn new(chunk_width: u32, settings: &MeshSettings) -> Self {
        Self {
            voxel_size: settings.voxel_size,
            cursor: LightMapCursor::for_width(chunk_width),
            mesh: ChunkMesh::default(),
        }
    }

    /// Полный проход по сетке: x -> y -> z
    pub fn build<const W: u32, const H: u32, const D: u32>(
        grid: &VoxelGrid<W, H, D>,
        settings: &MeshSettings,
    ) -> ChunkMesh {
        let mut builder = Self::new(W, settings);
        for [x, y, z] in grid.iter_solid() {
            builder.emit_cube(grid, [x as i32, y as i32, z as i32]);
        }
        builder.finish()
    }

    /// Выпустить все видимые грани вокселя, вернуть число граней
    pub fn emit_cube<const W: u32, const H: u32, const D: u32>(
        &mut self,
        grid: &VoxelGrid<W, H, D>,
        pos: [i32; 3],
    ) -> usize {
        FaceDir::ALL
            .into_iter()
            .filter(|&dir| self.emit_face(grid, pos, dir))
            .count()
    }

    /// Грань пропускается только если сосед внутри сетки И занят.
    /// За границей сетки соседа нет - грань рисуется.
    pub fn emit_face<const W: u32, const H: u32, const D: u32>(
        &mut self,
        grid: &VoxelGrid<W, H, D>,
        pos: [i32; 3],
        dir: FaceDir,
    ) -> bool {
        if grid.is_solid_at(dir.neighbor(pos)) {
            return false;
        }

        let voxel = Vec3::new(pos[0] as f32, pos[1] as f32, pos[2] as f32);
        let frame = FaceFrame::new(voxel, dir, self.voxel_size);

        for (i, j) in FACE_CORNERS {
            self.emit_vertex(&frame, i, j);
        }
        true
    }

    fn emit_vertex(&mut self, frame: &FaceFrame, i: f32, j: f32) {
        let position = frame.corner(i, j);

        if self.cursor.is_overflowed() {
            if self.mesh.light_map_overflow == 0 {
                log::warn!("VOXEL :: Light Map UV exceeded 1.0f!");
            }
            self.mesh.light_map_overflow += 1;
        }
        let (light_uv, cursor) = self.cursor.assign(i, j);
        self.cursor = cursor;

        self.mesh.vertices.push(ChunkVertex {
            position: position.into(),
            normal: frame.normal.into(),
            uv: [if i < 0.0 { 0.0 } else { 1.0 }, if j < 0.0 { 0.0 } else { 1.0 }],
            light_uv,
            luminance: 0.0,
        });
        self.mesh.aabb.expand(position);
    }

    pub fn vertex_count(&self) -> usize {
        self.mesh.vertices.len()
    }

    pub fn aabb(&self) -> &Aabb {
        &self.mesh.aabb
    }

    pub fn finish(self) -> ChunkMesh {
        if self.mesh.light_map_overflow > 0 {
            log::warn!(
                "VOXEL :: {} of {} vertices overlap in the light map",
                self.mesh.light_map_overflow,
                self.mesh.vertices.len()
            );
        }
        self.mesh
    }
}
