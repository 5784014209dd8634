// ============================================
// Lightbake - Воксельный чанк с запечённым светом
// ============================================
// Сетка занятости -> меш с отсечением граней -> яркость по вершинам
// от точечных источников (теневые лучи, перебор треугольников).

pub mod voxel;
pub mod mesh;
pub mod lighting;
pub mod render;
pub mod chunk;
pub mod config;

pub use chunk::{DefaultChunk, WorldChunk, CHUNK_DEPTH, CHUNK_HEIGHT, CHUNK_WIDTH};
pub use config::{ConfigError, LightAnchor, LightDef, SceneConfig};
