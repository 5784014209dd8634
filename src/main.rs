// ============================================
// Lightbake Demo - Запекание света в чанке-комнате
// ============================================
// lightbake [scene.json]
// Уровень логов: RUST_LOG=debug

use lightbake::render::{CpuVertexSink, GpuVertexBuffer, VertexSink};
use lightbake::{DefaultChunk, SceneConfig};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match std::env::args().nth(1) {
        Some(path) => match SceneConfig::load(&path) {
            Ok(config) => {
                log::info!("Scene config loaded from {}", path);
                config
            }
            Err(e) => {
                log::error!("{}", e);
                std::process::exit(1);
            }
        },
        None => SceneConfig::default(),
    };

    match pollster::block_on(request_gpu()) {
        Some((device, queue)) => run(GpuVertexBuffer::new(&device, &queue), &config),
        None => {
            log::warn!("GPU :: no adapter found, using CPU vertex buffer");
            run(CpuVertexSink::new(), &config);
        }
    }
}

/// Headless устройство: окно не нужно, только буфер вершин
async fn request_gpu() -> Option<(wgpu::Device, wgpu::Queue)> {
    let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
        backends: wgpu::Backends::all(),
        ..Default::default()
    });

    let adapter = instance
        .request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: None,
            force_fallback_adapter: false,
        })
        .await
        .ok()?;
    log::info!("GPU :: {}", adapter.get_info().name);

    adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: Some("Lightbake Device"),
            ..Default::default()
        })
        .await
        .map_err(|e| log::warn!("GPU :: device request failed: {}", e))
        .ok()
}

fn run<S: VertexSink>(sink: S, config: &SceneConfig) {
    let mut chunk = DefaultChunk::new(sink, &config.mesh, config.bake);

    let lights = config.resolve_lights(chunk.aabb());
    chunk.bake(&lights);
    log_range(&chunk);

    // Повторное запекание с другим набором источников
    let recompute = config.resolve_recompute(chunk.aabb());
    if !recompute.is_empty() {
        chunk.bake(&recompute);
        log_range(&chunk);
    }
}

fn log_range<S: VertexSink>(chunk: &DefaultChunk<S>) {
    if let Some((lo, hi)) = chunk.luminance_range() {
        log::info!("Luminance range: {:.3} .. {:.3}", lo, hi);
    }
}
