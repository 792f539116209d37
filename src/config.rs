//! TOML scene description.
//!
//! ```toml
//! [[materials]]
//! albedo = [1.0, 0.0, 0.0]
//!
//! [[transforms]]            # slot 1; slot 0 is always the identity
//! translate = [0.0, -1.5, -1.5]
//! scale = [0.4, 0.4, 0.4]
//!
//! [[models]]
//! path = "assets/cube.obj"
//! material = 0
//! transform = 1
//! ```

use glam::Vec3;
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::geometry::{GeometrySnapshot, Material, Mesh, SceneBuilder, Transform};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MaterialConfig {
    pub albedo: Vec3,
    pub emission: Vec3,
    pub metal: bool,
    /// Marks the material as glass.
    pub refractive_index: Option<f32>,
}

impl Default for MaterialConfig {
    fn default() -> Self {
        Self {
            albedo: Vec3::ONE,
            emission: Vec3::ZERO,
            metal: false,
            refractive_index: None,
        }
    }
}

impl From<&MaterialConfig> for Material {
    fn from(m: &MaterialConfig) -> Self {
        let mut ret = match m.refractive_index {
            Some(ir) => Material::new_dielectric(ir),
            None if m.metal => Material::new_metal(m.albedo),
            None => Material::new_lambertian(m.albedo),
        };
        ret.albedo = m.albedo;
        ret.emission = m.emission;
        ret
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    pub path: PathBuf,
    #[serde(default)]
    pub material: u32,
    #[serde(default)]
    pub transform: u32,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub materials: Vec<MaterialConfig>,
    pub transforms: Vec<Transform>,
    pub models: Vec<ModelConfig>,
    /// Directory relative model paths resolve against.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl SceneConfig {
    pub fn parse(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = Self::parse(&std::fs::read_to_string(path)?)?;
        config.base_dir = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(config)
    }

    pub fn materials(&self) -> Vec<Material> {
        self.materials.iter().map(Material::from).collect()
    }

    /// Imports every model and returns the geometry a BVH is built from.
    pub fn load_geometry(&self) -> Result<GeometrySnapshot> {
        let mut builder = SceneBuilder::new();
        for t in &self.transforms {
            builder.add_transform(t.matrix())?;
        }
        for model in &self.models {
            if model.material as usize >= self.materials.len() {
                return Err(Error::MaterialOutOfRange {
                    model: model.path.display().to_string(),
                    material: model.material,
                    count: self.materials.len(),
                });
            }
            let mesh = Mesh::open(self.base_dir.join(&model.path))?;
            builder.add_mesh(&mesh, model.material, model.transform)?;
        }
        log::info!(
            "loaded {} models: {} vertices, {} triangles",
            self.models.len(),
            builder.vertex_count(),
            builder.triangle_count()
        );
        Ok(builder.finish())
    }
}
