// ============================================
// GPU Vertex Buffer - Буфер вершин чанка на GPU
// ============================================

use wgpu::util::DeviceExt;

use crate::mesh::ChunkVertex;
use super::sink::VertexSink;

/// Буфер вершин чанка. Пересоздаётся, если поток вырос
pub struct GpuVertexBuffer {
    device: wgpu::Device,
    queue: wgpu::Queue,
    buffer: Option<wgpu::Buffer>,
    capacity: wgpu::BufferAddress,
    vertex_count: u32,
}

impl GpuVertexBuffer {
    pub fn new(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        Self {
            device: device.clone(),
            queue: queue.clone(),
            buffer: None,
            capacity: 0,
            vertex_count: 0,
        }
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn buffer(&self) -> Option<&wgpu::Buffer> {
        self.buffer.as_ref()
    }

    /// Привязать к слоту 0 перед draw
    pub fn bind(&self, pass: &mut wgpu::RenderPass<'_>) {
        if let Some(buffer) = &self.buffer {
            pass.set_vertex_buffer(0, buffer.slice(..));
        }
    }

    fn allocate(&mut self, vertices: &[ChunkVertex]) {
        let contents: &[u8] = bytemuck::cast_slice(vertices);
        let buffer = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Chunk Vertices"),
            contents,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
        });

        self.capacity = contents.len() as wgpu::BufferAddress;
        self.buffer = Some(buffer);
        self.vertex_count = vertices.len() as u32;
    }
}

impl VertexSink for GpuVertexBuffer {
    fn create(&mut self, vertices: &[ChunkVertex]) {
        if vertices.is_empty() {
            return;
        }
        self.allocate(vertices);
        log::debug!("GPU :: vertex buffer created, {} bytes", self.capacity);
    }

    fn update(&mut self, vertices: &[ChunkVertex]) {
        let contents: &[u8] = bytemuck::cast_slice(vertices);

        if vertices.is_empty() {
            self.vertex_count = 0;
            return;
        }

        let fits = contents.len() as wgpu::BufferAddress <= self.capacity;
        if let (Some(buffer), true) = (self.buffer.as_ref(), fits) {
            self.queue.write_buffer(buffer, 0, contents);
            self.vertex_count = vertices.len() as u32;
            return;
        }

        self.allocate(vertices);
        log::debug!("GPU :: vertex buffer grown to {} bytes", self.capacity);
    }
}
