// Сценарии целого чанка: сетка -> меш -> запекание

use approx::assert_abs_diff_eq;
use ultraviolet::Vec3;

use lightbake::lighting::{BakeSettings, PointLight};
use lightbake::mesh::{MeshBuilder, MeshSettings};
use lightbake::render::CpuVertexSink;
use lightbake::voxel::{Voxel, VoxelGrid};
use lightbake::{SceneConfig, WorldChunk};

const UNIT: MeshSettings = MeshSettings { voxel_size: 1.0 };

type SmallRoom = WorldChunk<CpuVertexSink, 8, 6, 8>;

fn voxel_at_origin(bake: BakeSettings) -> WorldChunk<CpuVertexSink, 3, 3, 3> {
    let mut grid = VoxelGrid::new();
    grid.set(0, 0, 0, Voxel::SOLID);
    WorldChunk::from_grid(grid, CpuVertexSink::new(), &UNIT, bake)
}

fn luminance<const W: u32, const H: u32, const D: u32>(chunk: &WorldChunk<CpuVertexSink, W, H, D>) -> Vec<f32> {
    chunk.vertices().iter().map(|v| v.luminance).collect()
}

#[test]
fn test_single_voxel_lit_from_front() {
    let mut chunk = voxel_at_origin(BakeSettings::default());
    let light = Vec3::new(0.0, 0.0, 100.0);
    chunk.bake(&[PointLight::new(light, 10.0)]);

    assert_eq!(chunk.vertex_count(), 36);
    for vertex in chunk.vertices() {
        if vertex.normal == [0.0, 0.0, 1.0] {
            let origin = vertex.position() + vertex.normal() * 0.001;
            let expected = 0.1 + 10.0 / (light - origin).mag();
            assert_abs_diff_eq!(vertex.luminance, expected, epsilon = 1e-6);
            assert_abs_diff_eq!(vertex.luminance, 0.2, epsilon = 1e-3);
        } else {
            assert_eq!(vertex.luminance, 0.1, "normal {:?}", vertex.normal);
        }
    }
}

#[test]
fn test_light_behind_surface_gives_ambient_only() {
    let mut chunk = voxel_at_origin(BakeSettings::default());
    chunk.bake(&[PointLight::new(Vec3::new(0.0, -100.0, 0.0), 1000.0)]);

    for vertex in chunk.vertices() {
        if vertex.normal[1] < 0.0 {
            assert!(vertex.luminance > 0.1);
        } else {
            assert_eq!(vertex.luminance, 0.1);
        }
    }
}

#[test]
fn test_room_culls_shared_faces() {
    let grid = VoxelGrid::<8, 6, 8>::generate_room();
    let mesh = MeshBuilder::build(&grid, &UNIT);

    let mut visible = 0;
    for [x, y, z] in grid.iter_solid() {
        let pos = [x as i32, y as i32, z as i32];
        for offset in [[1, 0, 0], [-1, 0, 0], [0, 1, 0], [0, -1, 0], [0, 0, 1], [0, 0, -1]] {
            let neighbor = [pos[0] + offset[0], pos[1] + offset[1], pos[2] + offset[2]];
            if !grid.is_solid_at(neighbor) {
                visible += 1;
            }
        }
    }

    assert_eq!(mesh.vertices.len() % 6, 0);
    assert_eq!(mesh.face_count(), visible);
    assert_eq!(mesh.light_map_overflow, 0);

    // Наружные грани оболочки на месте: низ комнаты виден снизу целиком
    let bottom = mesh
        .vertices
        .chunks_exact(6)
        .filter(|face| face[0].normal == [0.0, -1.0, 0.0] && face[0].position[1] == -0.5)
        .count();
    assert_eq!(bottom, 8 * 8);
}

#[test]
fn test_room_bake_is_thread_count_independent() {
    let bake = |threads: usize| {
        let pool = rayon::ThreadPoolBuilder::new().num_threads(threads).build().unwrap();
        pool.install(|| {
            let mut chunk = SmallRoom::new(CpuVertexSink::new(), &UNIT, BakeSettings::default());
            let lights = SceneConfig::default().resolve_lights(chunk.aabb());
            chunk.bake(&lights);
            luminance(&chunk)
        })
    };

    let single = bake(1);
    let many = bake(4);
    assert_eq!(single.len(), many.len());
    assert!(single.iter().zip(&many).all(|(a, b)| a.to_bits() == b.to_bits()));
}

#[test]
fn test_room_light_order_does_not_matter() {
    let mut chunk = SmallRoom::new(CpuVertexSink::new(), &UNIT, BakeSettings::default());
    let center = chunk.aabb().center();
    let l1 = PointLight::new(center, 10.0);
    let l2 = PointLight::new(center + Vec3::new(0.0, 1000.0, 0.0), 150.0);

    chunk.bake(&[l1, l2]);
    let forward = luminance(&chunk);
    chunk.bake(&[l2, l1]);
    let backward = luminance(&chunk);

    for (a, b) in forward.iter().zip(&backward) {
        assert_abs_diff_eq!(*a, *b, epsilon = 1e-4);
    }
}

#[test]
fn test_room_interior_is_partly_shadowed() {
    let mut chunk = SmallRoom::new(CpuVertexSink::new(), &UNIT, BakeSettings::default());
    let sky = chunk.aabb().center() + Vec3::new(0.0, 1000.0, 0.0);
    let reports = chunk.bake(&[PointLight::new(sky, 150.0)]);

    let rays = reports[0].rays;
    assert_eq!(rays.total(), chunk.vertices().len());
    assert!(rays.lit > 0);
    assert!(rays.occluded > 0);
    assert!(rays.backfacing > 0);
}

// Открытый вопрос: самопересечение на t ~ 0 гасится только сдвигом
// вдоль нормали. Порог не трогаем, фиксируем текущее поведение.

#[test]
fn test_grazing_ray_clears_own_face_with_offset() {
    let mut chunk = voxel_at_origin(BakeSettings::default());
    chunk.bake(&[PointLight::new(Vec3::new(100.0, 0.6, 0.0), 10.0)]);

    let top_lit = chunk
        .vertices()
        .iter()
        .filter(|v| v.normal == [0.0, 1.0, 0.0])
        .all(|v| v.luminance > 0.1);
    assert!(top_lit);
}

#[test]
fn test_zero_offset_self_occludes() {
    let bake = BakeSettings { normal_offset: 0.0, ..Default::default() };
    let mut chunk = voxel_at_origin(bake);
    let reports = chunk.bake(&[PointLight::new(Vec3::new(0.0, 100.0, 0.0), 10.0)]);

    // Начало луча лежит на собственном треугольнике: попадание при t = 0
    assert_eq!(reports[0].rays.lit, 0);
    assert!(chunk
        .vertices()
        .iter()
        .filter(|v| v.normal == [0.0, 1.0, 0.0])
        .all(|v| v.luminance == 0.1));
}
