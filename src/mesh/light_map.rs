// ============================================
// Light Map Cursor - Упаковка UV карты освещения
// ============================================
// Ячейки 1/(W*W) укладываются слева направо, строка за строкой.
// Курсор - обычное значение: assign() возвращает UV и следующий курсор.

/// Доля ячейки, уходящая на зазор между ячейками
const GAP_FRACTION: f32 = 0.01;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightMapCursor {
    x: f32,
    y: f32,
    cell: f32,
    gap: f32,
}

impl LightMapCursor {
    /// Курсор для чанка шириной `width` вокселей
    pub fn for_width(width: u32) -> Self {
        let cell = 1.0 / width as f32 / width as f32;
        let gap = cell * GAP_FRACTION;
        Self { x: gap, y: gap, cell, gap }
    }

    #[inline]
    pub fn cell_size(&self) -> f32 {
        self.cell
    }

    #[inline]
    pub fn gap(&self) -> f32 {
        self.gap
    }

    #[inline]
    pub fn position(&self) -> [f32; 2] {
        [self.x, self.y]
    }

    /// Текущая ячейка вылезла за низ карты (UV >= 1.0)
    #[inline]
    pub fn is_overflowed(&self) -> bool {
        self.y + self.cell >= 1.0
    }

    /// UV для угла (знаки i, j) и курсор, сдвинутый на одну ячейку
    #[must_use]
    pub fn assign(self, i: f32, j: f32) -> ([f32; 2], Self) {
        let uv = [
            if i < 0.0 { self.x } else { self.x + self.cell },
            if j < 0.0 { self.y } else { self.y + self.cell },
        ];
        (uv, self.advance())
    }

    #[must_use]
    fn advance(mut self) -> Self {
        self.x += self.cell + self.gap;
        if self.x + self.cell >= 1.0 {
            self.x = self.gap;
            self.y += self.cell + self.gap;
        }
        self
    }
}
