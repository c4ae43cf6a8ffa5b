//! The project writer: turns a resolved configuration into files on disk.

use crate::commands::{Artifact, ArtifactOutcome, CmdMessage, CmdResult};
use crate::compose;
use crate::config::ScaffoldConfig;
use crate::error::Result;

use base64::Engine;
use std::fs;
use std::path::{Path, PathBuf};

pub const MANIFEST_FILENAME: &str = "Project.mint.json";
pub const ICON_FILENAME: &str = "icon.png";
pub const MAKEFILE_FILENAME: &str = "Makefile";

/// Write the project scaffold under `root`.
///
/// The steps run in a fixed order but are independent: a failed step is
/// recorded in the result and the remaining steps still run. There is no
/// rollback, so a partial scaffold is a possible (and reported) outcome.
pub fn run(config: &ScaffoldConfig, root: &Path) -> CmdResult {
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info("Creating the default Mint project!"));

    record(
        &mut result,
        Artifact::Manifest,
        root.join(MANIFEST_FILENAME),
        "The Project.mint.json can't be created.",
        write_manifest(config, root),
    );

    record(
        &mut result,
        Artifact::AssetsDir,
        root.join(&config.properties.assets_dir),
        "The assets dir can't be created.",
        empty_assets_dir(config, root),
    );

    record(
        &mut result,
        Artifact::Icon,
        root.join(ICON_FILENAME),
        "The image can't be created.",
        write_icon(root),
    );

    if config.makefile {
        record(
            &mut result,
            Artifact::Makefile,
            root.join(MAKEFILE_FILENAME),
            "The Makefile can't be created.",
            write_makefile(root),
        );
    }

    if config.base_code {
        record(
            &mut result,
            Artifact::BaseSource,
            base_source_path(config, root),
            "The base code can't be created.",
            write_base_code(config, root),
        );
    }

    result
}

fn record(
    result: &mut CmdResult,
    artifact: Artifact,
    path: PathBuf,
    failure: &str,
    step: Result<()>,
) {
    match step {
        Ok(()) => {
            result.add_message(CmdMessage::success(format!("Created {}", path.display())));
            result.outcomes.push(ArtifactOutcome::ok(artifact, path));
        }
        Err(e) => {
            result.add_message(CmdMessage::error(format!("{} {}", failure, e)));
            result.outcomes.push(ArtifactOutcome::failed(artifact, path, e.to_string()));
        }
    }
}

fn write_manifest(config: &ScaffoldConfig, root: &Path) -> Result<()> {
    let p = &config.properties;
    let content = compose::manifest(
        &p.name,
        &p.author,
        &p.version,
        &p.assets_dir,
        config.template.type_code(),
    )?;
    fs::write(root.join(MANIFEST_FILENAME), content)?;
    Ok(())
}

/// Create the assets directory if absent, empty it if present.
fn empty_assets_dir(config: &ScaffoldConfig, root: &Path) -> Result<()> {
    let path = root.join(&config.properties.assets_dir);
    if path.exists() {
        fs::remove_dir_all(&path)?;
    }
    fs::create_dir_all(&path)?;
    Ok(())
}

fn write_icon(root: &Path) -> Result<()> {
    let bytes = base64::engine::general_purpose::STANDARD.decode(compose::icon_base64())?;
    fs::write(root.join(ICON_FILENAME), bytes)?;
    Ok(())
}

fn write_makefile(root: &Path) -> Result<()> {
    fs::write(root.join(MAKEFILE_FILENAME), compose::makefile())?;
    Ok(())
}

fn base_source_path(config: &ScaffoldConfig, root: &Path) -> PathBuf {
    root.join(&config.properties.name)
        .join(format!("index.{}", config.template.source_ext()))
}

fn write_base_code(config: &ScaffoldConfig, root: &Path) -> Result<()> {
    let path = base_source_path(config, root);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, compose::base_stub())?;
    Ok(())
}
