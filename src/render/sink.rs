// ============================================
// Vertex Sink - Куда уходит поток вершин
// ============================================
// Ядро не знает про GPU: оно только отдаёт поток вершин на заливку
// и просит отрисовать N вершин.

use crate::mesh::ChunkVertex;

/// Буфер вершин на стороне рендера
pub trait VertexSink {
    /// Первая заливка после построения меша
    fn create(&mut self, vertices: &[ChunkVertex]);

    /// Перезаливка: поменялась яркость или вырос поток
    fn update(&mut self, vertices: &[ChunkVertex]);
}

/// Вызов отрисовки по числу вершин
pub trait DrawCall {
    fn draw_vertices(&mut self, vertex_count: u32);
}

impl DrawCall for wgpu::RenderPass<'_> {
    fn draw_vertices(&mut self, vertex_count: u32) {
        self.draw(0..vertex_count, 0..1);
    }
}

/// CPU-копия последнего залитого потока. Рендер без GPU и тесты
#[derive(Clone, Debug, Default)]
pub struct CpuVertexSink {
    vertices: Vec<ChunkVertex>,
    creates: usize,
    updates: usize,
}

impl CpuVertexSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertices(&self) -> &[ChunkVertex] {
        &self.vertices
    }

    pub fn creates(&self) -> usize {
        self.creates
    }

    pub fn updates(&self) -> usize {
        self.updates
    }
}

impl VertexSink for CpuVertexSink {
    fn create(&mut self, vertices: &[ChunkVertex]) {
        self.vertices = vertices.to_vec();
        self.creates += 1;
    }

    fn update(&mut self, vertices: &[ChunkVertex]) {
        self.vertices.clear();
        self.vertices.extend_from_slice(vertices);
        self.updates += 1;
    }
}

/// Запоминает все вызовы отрисовки
#[derive(Clone, Debug, Default)]
pub struct DrawLog {
    pub calls: Vec<u32>,
}

impl DrawCall for DrawLog {
    fn draw_vertices(&mut self, vertex_count: u32) {
        self.calls.push(vertex_count);
    }
}
