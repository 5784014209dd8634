// ============================================
// Render Module - Стык с рендером
// ============================================

mod gpu_buffer;
mod sink;

pub use gpu_buffer::GpuVertexBuffer;
pub use sink::{CpuVertexSink, DrawCall, DrawLog, VertexSink};
