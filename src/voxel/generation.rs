// ============================================
// Grid Generation - Процедурная "комната"
// ============================================
// Пустотелая коробка + четыре колонны + световой проём сверху.
// Порядок важен: проём вырезается последним и всегда побеждает.

use super::grid::{Voxel, VoxelGrid};

/// Целочисленный бокс с включёнными границами
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridBox {
    pub min: [i32; 3],
    pub max: [i32; 3],
}

impl GridBox {
    pub fn new(min: [i32; 3], max: [i32; 3]) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, p: [i32; 3]) -> bool {
        (0..3).all(|i| p[i] >= self.min[i] && p[i] <= self.max[i])
    }
}

impl<const W: u32, const H: u32, const D: u32> VoxelGrid<W, H, D> {
    /// Световой проём: центр по XZ, от середины высоты и выше крыши
    pub fn skylight() -> GridBox {
        let (w, h, d) = (W as i32, H as i32, D as i32);
        GridBox::new(
            [w / 3 + 1, h / 2, d / 3 + 1],
            [2 * w / 3 - 1, h + 2, 2 * d / 3 - 1],
        )
    }

    /// Стоит ли в колонке (x, z) одна из четырёх колонн
    #[inline]
    pub fn is_pillar_column(x: u32, z: u32) -> bool {
        let xs = [W / 3, 2 * W / 3];
        let zs = [D / 3, 2 * D / 3];
        xs.contains(&x) && zs.contains(&z)
    }

    #[inline]
    pub fn is_boundary(x: u32, y: u32, z: u32) -> bool {
        x == 0 || x == W - 1 || y == 0 || y == H - 1 || z == 0 || z == D - 1
    }

    /// Детерминированная генерация: оболочка, колонны, затем проём
    pub fn generate_room() -> Self {
        let mut grid = Self::new();
        let skylight = Self::skylight();

        for x in 0..W {
            for y in 0..H {
                for z in 0..D {
                    let mut solid = Self::is_boundary(x, y, z);
                    solid |= Self::is_pillar_column(x, z);

                    if skylight.contains([x as i32, y as i32, z as i32]) {
                        solid = false;
                    }

                    if solid {
                        grid.set(x, y, z, Voxel::SOLID);
                    }
                }
            }
        }

        log::debug!(
            "VOXEL :: generated {}x{}x{} room, {} solid voxels",
            W, H, D, grid.solid_count()
        );

        grid
    }
}
