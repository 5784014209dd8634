// ============================================
// Voxel Module - Плотная сетка занятости
// ============================================

mod grid;
mod generation;

pub use grid::{Voxel, VoxelGrid};
pub use generation::GridBox;
