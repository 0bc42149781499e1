use std::{fs, path::Path, path::PathBuf};

use serde::Deserialize;
use thiserror::Error;

use super::config::SessionConfiguration;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read {}: {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),
    #[error("unsupported configuration format: {}", .0.display())]
    UnsupportedFormat(PathBuf),
    #[error("failed to parse yaml configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to parse json configuration: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    pub fn detect(path: &Path) -> Option<Format> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yml" | "yaml" => Some(Format::Yaml),
            "json" => Some(Format::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigurationFile {
    session: SessionConfiguration,
}

/// A parsed session section plus the keys the parser did not recognise.
#[derive(Debug)]
pub struct Loaded {
    pub session: SessionConfiguration,
    pub unknown_keys: Vec<String>,
}

pub fn load_from_path(path: &Path) -> Result<Loaded, LoadError> {
    let format =
        Format::detect(path).ok_or_else(|| LoadError::UnsupportedFormat(path.to_path_buf()))?;
    let content =
        fs::read_to_string(path).map_err(|err| LoadError::Io(path.to_path_buf(), err))?;
    tracing::debug!(path = %path.display(), format = ?format, "loading configuration");
    parse_str(&content, format)
}

pub fn parse_str(content: &str, format: Format) -> Result<Loaded, LoadError> {
    let mut unknown_keys = Vec::new();
    let file: ConfigurationFile = match format {
        Format::Yaml => {
            let de = serde_yaml::Deserializer::from_str(content);
            serde_ignored::deserialize(de, |path| unknown_keys.push(path.to_string()))?
        }
        Format::Json => {
            let mut de = serde_json::Deserializer::from_str(content);
            let file = serde_ignored::deserialize(&mut de, |path| {
                unknown_keys.push(path.to_string())
            })?;
            de.end()?;
            file
        }
    };
    Ok(Loaded {
        session: file.session,
        unknown_keys,
    })
}
