// ============================================
// Mesh Module - Генерация меша чанка
// ============================================

mod aabb;
mod builder;
mod face;
mod light_map;
mod vertex;

pub use aabb::Aabb;
pub use builder::{ChunkMesh, MeshBuilder, MeshSettings};
pub use face::{FaceDir, FaceFrame, FACE_CORNERS};
pub use light_map::LightMapCursor;
pub use vertex::ChunkVertex;
