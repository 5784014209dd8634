// ============================================
// Scene Config - Data-Driven настройки сцены
// ============================================
// JSON: геометрия, параметры запекания и набор источников.
// Все поля необязательны - пропущенные берутся по умолчанию.
// Только чтение: обратно настройки не сохраняются.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use ultraviolet::Vec3;

use crate::lighting::{BakeSettings, PointLight};
use crate::mesh::{Aabb, MeshSettings};

/// Ошибки загрузки настроек
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
    Invalid(String),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e.to_string())
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "failed to read scene config: {e}"),
            ConfigError::Parse(e) => write!(f, "malformed scene config: {e}"),
            ConfigError::Invalid(e) => write!(f, "invalid scene config: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            _ => None,
        }
    }
}

/// Точка отсчёта для позиции источника
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightAnchor {
    /// Мировые координаты как есть
    #[default]
    Origin,
    /// Центр бокса меша
    AabbCenter,
}

/// Описание источника в конфиге
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightDef {
    pub anchor: LightAnchor,
    pub offset: [f32; 3],
    pub strength: f32,
}

impl Default for LightDef {
    fn default() -> Self {
        Self { anchor: LightAnchor::Origin, offset: [0.0; 3], strength: 10.0 }
    }
}

impl LightDef {
    /// Превратить в источник с абсолютной позицией
    pub fn resolve(&self, aabb: &Aabb) -> PointLight {
        let base = match self.anchor {
            LightAnchor::Origin => Vec3::zero(),
            LightAnchor::AabbCenter => aabb.center(),
        };
        PointLight::new(base + Vec3::from(self.offset), self.strength)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub mesh: MeshSettings,
    pub bake: BakeSettings,
    /// Источники основного запекания
    pub lights: Vec<LightDef>,
    /// Источники для повторного запекания ("recompute")
    pub recompute: Vec<LightDef>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            mesh: MeshSettings::default(),
            bake: BakeSettings::default(),
            lights: vec![
                LightDef { anchor: LightAnchor::AabbCenter, offset: [0.0, 0.0, 0.0], strength: 10.0 },
                LightDef { anchor: LightAnchor::AabbCenter, offset: [0.0, 1000.0, 0.0], strength: 150.0 },
            ],
            recompute: vec![
                LightDef { anchor: LightAnchor::Origin, offset: [32.0, 32.0, 32.0], strength: 10.0 },
            ],
        }
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SceneConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.mesh.voxel_size > 0.0) {
            return Err(ConfigError::Invalid(format!("voxel_size must be positive, got {}", self.mesh.voxel_size)));
        }
        if self.bake.normal_offset < 0.0 || self.bake.parallel_epsilon < 0.0 {
            return Err(ConfigError::Invalid("ray epsilons must not be negative".into()));
        }
        if self.bake.ray_count == 0 {
            return Err(ConfigError::Invalid("ray_count must be at least 1".into()));
        }
        if self.bake.light_radius < 0.0 {
            return Err(ConfigError::Invalid(format!("light_radius must not be negative, got {}", self.bake.light_radius)));
        }
        if let Some(light) = self.lights.iter().chain(&self.recompute).find(|l| !l.strength.is_finite()) {
            return Err(ConfigError::Invalid(format!("light strength must be finite, got {}", light.strength)));
        }
        Ok(())
    }

    pub fn resolve_lights(&self, aabb: &Aabb) -> Vec<PointLight> {
        self.lights.iter().map(|l| l.resolve(aabb)).collect()
    }

    pub fn resolve_recompute(&self, aabb: &Aabb) -> Vec<PointLight> {
        self.recompute.iter().map(|l| l.resolve(aabb)).collect()
    }
}
