use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Failed to read mod.json at {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },
    #[error("Failed to parse mod.json at {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        cause: serde_json::Error,
    },
}

#[cfg(test)]
impl Error {
    pub fn path(&self) -> &Path {
        match self {
            Error::Read { path, .. } | Error::Parse { path, .. } => path,
        }
    }
}

/// The subset of a Geode `mod.json` the notification cares about.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReleaseDescriptor {
    pub name: Option<String>,
    pub description: Option<String>,
    pub id: Option<String>,
    pub version: Option<String>,
    pub geode: Option<String>,
    pub links: Option<Links>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Links {
    pub source: Option<String>,
}

impl ReleaseDescriptor {
    pub fn from_json(path: &Path, content: &str) -> Result<ReleaseDescriptor, Error> {
        serde_json::from_str(content).map_err(|cause| Error::Parse {
            path: path.to_owned(),
            cause,
        })
    }

    pub fn source(&self) -> Option<&str> {
        self.links
            .as_ref()
            .and_then(|links| non_empty(&links.source))
    }

    pub fn id(&self) -> Option<&str> {
        non_empty(&self.id)
    }
}

pub(crate) fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

pub trait DescriptorLoader {
    fn load(&self, path: &Path) -> Result<ReleaseDescriptor, Error>;
}

/// Reads descriptors from disk.
pub struct FsLoader;

impl DescriptorLoader for FsLoader {
    fn load(&self, path: &Path) -> Result<ReleaseDescriptor, Error> {
        log::debug!("reading descriptor at {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|cause| Error::Read {
            path: path.to_owned(),
            cause,
        })?;

        ReleaseDescriptor::from_json(path, &content)
    }
}
