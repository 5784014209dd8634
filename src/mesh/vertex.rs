// ============================================
// Chunk Vertex - Структура вершины
// ============================================
// Порядок полей фиксирован: его читает шейдер (locations 0..4)

use bytemuck::{Pod, Zeroable};
use ultraviolet::Vec3;

#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable, Default, PartialEq)]
pub struct ChunkVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    /// UV базового цвета (угол единичного квадрата)
    pub uv: [f32; 2],
    /// UV в карте освещения
    pub light_uv: [f32; 2],
    /// Запечённая яркость, единственное изменяемое поле
    pub luminance: f32,
}

impl ChunkVertex {
    pub const ATTRIBS: [wgpu::VertexAttribute; 5] = wgpu::vertex_attr_array![
        0 => Float32x3,  // position
        1 => Float32x3,  // normal
        2 => Float32x2,  // uv
        3 => Float32x2,  // light_uv
        4 => Float32,    // luminance
    ];

    pub fn desc() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<ChunkVertex>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBS,
        }
    }

    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::from(self.position)
    }

    #[inline]
    pub fn normal(&self) -> Vec3 {
        Vec3::from(self.normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_matches_attributes() {
        assert_eq!(std::mem::size_of::<ChunkVertex>(), 11 * 4);

        let offsets: Vec<u64> = ChunkVertex::ATTRIBS.iter().map(|a| a.offset).collect();
        assert_eq!(offsets, vec![0, 12, 24, 32, 40]);

        let locations: Vec<u32> = ChunkVertex::ATTRIBS.iter().map(|a| a.shader_location).collect();
        assert_eq!(locations, vec![0, 1, 2, 3, 4]);

        assert_eq!(ChunkVertex::desc().array_stride, 44);
    }

    #[test]
    fn test_cast_to_bytes() {
        let vertices = [ChunkVertex { luminance: 0.5, ..Default::default() }; 2];
        let bytes: &[u8] = bytemuck::cast_slice(&vertices);
        assert_eq!(bytes.len(), 88);
        assert_eq!(&bytes[40..44], &0.5f32.to_ne_bytes());
    }
}
