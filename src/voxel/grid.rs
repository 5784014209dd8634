// ============================================
// Voxel Grid - Сетка вокселей чанка
// ============================================
// Плотный массив флагов W*H*D с индексом x + y*(W*D) + z*W.
// Хранение - битовый вектор (Vob), один бит на воксель.

use ndshape::{ConstShape, ConstShape3u32};
use vob::Vob;

/// Форма сетки. Оси передаются как (x, z, y): шаги 1, W, W*D
type GridShape<const W: u32, const H: u32, const D: u32> = ConstShape3u32<W, D, H>;

/// Воксель - единственный флаг занятости
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Voxel {
    pub solid: bool,
}

impl Voxel {
    pub const EMPTY: Self = Self { solid: false };
    pub const SOLID: Self = Self { solid: true };

    #[inline]
    pub fn is_solid(self) -> bool {
        self.solid
    }
}

/// Воксельная сетка фиксированного размера
#[derive(Clone, Debug)]
pub struct VoxelGrid<const W: u32, const H: u32, const D: u32> {
    flags: Vob,
}

impl<const W: u32, const H: u32, const D: u32> VoxelGrid<W, H, D> {
    /// Нулевой размер ломает формулу индекса - сборка не пройдёт
    const NON_EMPTY: () = assert!(W > 0 && H > 0 && D > 0, "voxel grid extents must be non-zero");

    pub const WIDTH: u32 = W;
    pub const HEIGHT: u32 = H;
    pub const DEPTH: u32 = D;
    pub const VOLUME: usize = W as usize * H as usize * D as usize;

    /// Пустая сетка (все воксели свободны)
    pub fn new() -> Self {
        let () = Self::NON_EMPTY;

        Self {
            flags: std::iter::repeat(false).take(Self::VOLUME).collect(),
        }
    }

    /// Линейный индекс. Границы не проверяются
    #[inline]
    pub fn index(x: u32, y: u32, z: u32) -> usize {
        GridShape::<W, H, D>::linearize([x, z, y]) as usize
    }

    #[inline]
    pub fn contains(pos: [i32; 3]) -> bool {
        let [x, y, z] = pos;
        x >= 0 && y >= 0 && z >= 0 && (x as u32) < W && (y as u32) < H && (z as u32) < D
    }

    /// Воксель по координатам. Вызывающий гарантирует границы
    #[inline]
    pub fn get(&self, x: u32, y: u32, z: u32) -> Voxel {
        debug_assert!(x < W && y < H && z < D, "voxel ({x}, {y}, {z}) out of bounds");
        Voxel {
            solid: self.flags.get(Self::index(x, y, z)) == Some(true),
        }
    }

    /// Записать воксель. Вызывающий гарантирует границы
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, z: u32, voxel: Voxel) {
        debug_assert!(x < W && y < H && z < D, "voxel ({x}, {y}, {z}) out of bounds");
        self.flags.set(Self::index(x, y, z), voxel.solid);
    }

    /// Проверка с границами: за пределами сетки - None, а не "занято".
    /// Поэтому грани на краю чанка всегда рисуются как внешние стены.
    #[inline]
    pub fn try_get(&self, pos: [i32; 3]) -> Option<Voxel> {
        if !Self::contains(pos) {
            return None;
        }
        let [x, y, z] = pos;
        Some(self.get(x as u32, y as u32, z as u32))
    }

    /// Занят ли сосед (для отсечения граней)
    #[inline]
    pub fn is_solid_at(&self, pos: [i32; 3]) -> bool {
        self.try_get(pos).is_some_and(Voxel::is_solid)
    }

    pub fn solid_count(&self) -> usize {
        self.flags.iter().filter(|&solid| solid).count()
    }

    /// Занятые воксели в порядке обхода x -> y -> z (z во внутреннем цикле)
    pub fn iter_solid(&self) -> impl Iterator<Item = [u32; 3]> + '_ {
        (0..W).flat_map(move |x| {
            (0..H).flat_map(move |y| (0..D).map(move |z| [x, y, z]))
        })
        .filter(move |&[x, y, z]| self.get(x, y, z).is_solid())
    }
}

impl<const W: u32, const H: u32, const D: u32> Default for VoxelGrid<W, H, D> {
    fn default() -> Self {
        Self::new()
    }
}
