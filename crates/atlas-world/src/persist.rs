//! Saving and loading worlds as RON.
//!
//! A save file is a [`World`] wrapped in a versioned envelope. Chunks,
//! locations, regions and settlements are written as plain nested records.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::world::World;

/// Version written into every save file.
pub const FORMAT_VERSION: u32 = 1;

/// Errors that can occur when saving or loading a world.
#[derive(Debug, thiserror::Error)]
pub enum PersistError {
    /// Failed to read the save file.
    #[error("failed to read world from {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the save file.
    #[error("failed to write world to {path}: {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid RON for a world.
    #[error("failed to parse world: {0}")]
    ParseError(#[source] ron::error::SpannedError),

    /// The world could not be encoded.
    #[error("failed to serialize world: {0}")]
    SerializeError(#[source] ron::Error),

    /// The file was written by an incompatible format version.
    #[error("unsupported world format version: {0}")]
    UnsupportedVersion(u32),
}

#[derive(Serialize)]
struct WorldFileRef<'a> {
    version: u32,
    world: &'a World,
}

#[derive(Deserialize)]
struct WorldHeader {
    version: u32,
}

#[derive(Deserialize)]
struct WorldFile {
    version: u32,
    world: World,
}

/// Encode a world as a RON string.
pub fn to_ron(world: &World) -> Result<String, PersistError> {
    let pretty = ron::ser::PrettyConfig::new()
        .depth_limit(4)
        .separate_tuple_members(false)
        .enumerate_arrays(false);
    ron::ser::to_string_pretty(
        &WorldFileRef {
            version: FORMAT_VERSION,
            world,
        },
        pretty,
    )
    .map_err(PersistError::SerializeError)
}

/// Decode a world from a RON string and check its format version.
///
/// The file is decoded in one pass. Only when that fails is the header read
/// on its own, so a file from another format version reports
/// [`PersistError::UnsupportedVersion`] rather than a parse error.
pub fn from_ron(contents: &str) -> Result<World, PersistError> {
    match ron::from_str::<WorldFile>(contents) {
        Ok(file) if file.version == FORMAT_VERSION => Ok(file.world),
        Ok(file) => Err(PersistError::UnsupportedVersion(file.version)),
        Err(err) => match ron::from_str::<WorldHeader>(contents) {
            Ok(header) if header.version != FORMAT_VERSION => {
                Err(PersistError::UnsupportedVersion(header.version))
            }
            _ => Err(PersistError::ParseError(err)),
        },
    }
}

/// Write `world` to `path`, creating parent directories.
pub fn save_world(world: &World, path: &Path) -> Result<(), PersistError> {
    let write_error = |source| PersistError::WriteError {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    let serialized = to_ron(world)?;
    std::fs::write(path, serialized).map_err(write_error)?;
    tracing::info!(path = %path.display(), chunks = world.chunks().len(), "saved world");
    Ok(())
}

/// Read a world previously written by [`save_world`].
///
/// Streaming options are not persisted; the loaded world uses the defaults.
pub fn load_world(path: &Path) -> Result<World, PersistError> {
    let contents = std::fs::read_to_string(path).map_err(|source| PersistError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    let world = from_ron(&contents)?;
    tracing::info!(path = %path.display(), chunks = world.chunks().len(), "loaded world");
    Ok(world)
}
