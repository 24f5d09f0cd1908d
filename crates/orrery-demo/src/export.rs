//! Writing generated assets to the output directory.

use std::error::Error;
use std::path::{Path, PathBuf};

use orrery_config::OutputConfig;
use orrery_mesh::{IndexedMesh, save_obj, save_obj_quick};
use tracing::info;

use crate::scene::Scene;

/// Write the scene's meshes as OBJ and, if enabled, its textures as PNG.
///
/// Returns the paths written, in order.
pub fn export_scene(scene: &Scene, output: &OutputConfig) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    let dir = output.directory.as_path();
    std::fs::create_dir_all(dir)?;

    let mut written = vec![
        write_mesh(&scene.planet, &dir.join("planet.obj"), output.quick_obj)?,
        write_mesh(&scene.terrain, &dir.join("terrain.obj"), output.quick_obj)?,
    ];

    if output.write_png {
        let path = dir.join("planet_gradient.png");
        scene.planet_gradient.as_bitmap().save_png(&path)?;
        written.push(path);

        let path = dir.join("terrain_gradient.png");
        scene.terrain_gradient.as_bitmap().save_png(&path)?;
        written.push(path);

        for (face, bitmap) in scene.skybox.iter() {
            let path = dir.join(format!("skybox_{}.png", face.short_name()));
            bitmap.save_png(&path)?;
            written.push(path);
        }
    }

    info!(files = written.len(), dir = %dir.display(), "Exported scene");
    Ok(written)
}

fn write_mesh(mesh: &IndexedMesh, path: &Path, quick: bool) -> Result<PathBuf, Box<dyn Error>> {
    if quick {
        save_obj_quick(mesh, path)?;
    } else {
        save_obj(mesh, path)?;
    }
    Ok(path.to_path_buf())
}
