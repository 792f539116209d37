use std::fs;
use std::path::Path;

use crate::bvh::Bvh;
use crate::config::SceneConfig;
use crate::error::Result;
use crate::geometry::Material;

/// A built scene: the BVH plus the material table the shading kernel
/// indexes with each triangle's material id.
#[derive(Debug, Default)]
pub struct Scene {
    pub bvh: Bvh,
    pub materials: Vec<Material>,
}

impl Scene {
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_config(&SceneConfig::open(path)?)
    }

    pub fn from_config(config: &SceneConfig) -> Result<Self> {
        let bvh = Bvh::from_snapshot(config.load_geometry()?)?;
        Ok(Self {
            bvh,
            materials: config.materials(),
        })
    }

    /// Every device buffer, named, in kernel binding order.
    pub fn buffers(&self) -> Vec<(&'static str, &[u8])> {
        let mut ret = self.bvh.buffers().to_vec();
        ret.push(("materials", bytemuck::cast_slice(&self.materials)));
        ret
    }

    /// Dumps each buffer to `<dir>/<name>.bin`, byte for byte.
    pub fn write_buffers(&self, dir: impl AsRef<Path>) -> Result<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;
        for (name, data) in self.buffers() {
            let path = dir.join(format!("{name}.bin"));
            fs::write(&path, data)?;
            log::debug!("wrote {} ({} bytes)", path.display(), data.len());
        }
        Ok(())
    }
}
