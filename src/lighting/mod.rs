// ============================================
// Lighting Module - Запекание вершинного света
// ============================================
// Теневые лучи к точечным источникам, яркость складывается по источникам

mod baker;
mod ray;
mod settings;

pub use baker::{BakeReport, LightBaker, PointLight, RayOutcome, RayStats};
pub use ray::{Ray, Triangle};
pub use settings::BakeSettings;
