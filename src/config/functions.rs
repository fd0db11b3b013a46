//! Loading and saving of configs as JSON.

use std::fs::{DirBuilder, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::Path;

use super::{Error, NetworkConfig};

impl NetworkConfig {
    /// Loads a config from a JSON string. Missing fields take their default values.
    pub fn load_str(s: &str) -> Result<Self, Error> {
        serde_json::from_str(s).map_err(|source| Error::Parse { path: None, source })
    }

    /// Loads a config from a JSON file. Missing fields take their default values.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();

        let file = File::open(path).map_err(io_error(path))?;
        let reader = BufReader::new(file);
        let config = serde_json::from_reader(reader).map_err(|source| Error::Parse {
            path: Some(path.to_path_buf()),
            source,
        })?;

        log::debug!("loaded network config from {}", path.display());

        Ok(config)
    }

    /// Saves this config to a JSON string.
    pub fn to_string(&self) -> Result<String, Error> {
        serde_json::to_string_pretty(self).map_err(Error::Encode)
    }

    /// Saves this config to a JSON file.
    ///
    /// Recursively creates missing directories if `create_dirs` is `true`.
    pub fn to_file<P: AsRef<Path>>(&self, path: P, create_dirs: bool) -> Result<(), Error> {
        let path = path.as_ref();

        if create_dirs {
            if let Some(parent) = path.parent() {
                DirBuilder::new()
                    .recursive(true)
                    .create(parent)
                    .map_err(io_error(parent))?;
            }
        }

        let file = File::create(path).map_err(io_error(path))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).map_err(Error::Encode)?;

        writer.flush().map_err(io_error(path))?;

        log::debug!("saved network config to {}", path.display());

        Ok(())
    }
}

fn io_error(path: &Path) -> impl FnOnce(io::Error) -> Error + '_ {
    move |source| Error::Io {
        path: path.to_path_buf(),
        source,
    }
}
