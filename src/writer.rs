use crate::error::ImportResult;
use crate::types::SeedDocument;
use std::fs;
use std::path::Path;

/// Serialization format for seed files
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedFormat {
    Json,
    Yaml,
}

impl SeedFormat {
    /// `.yaml`/`.yml` → YAML, anything else → JSON
    pub fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .as_deref()
        {
            Some("yaml") | Some("yml") => SeedFormat::Yaml,
            _ => SeedFormat::Json,
        }
    }
}

/// Render a seed document as pretty JSON
pub fn to_json(document: &SeedDocument) -> ImportResult<String> {
    Ok(serde_json::to_string_pretty(document)?)
}

/// Write a seed document, picking the format from the file extension
pub fn write_seed(path: &Path, document: &SeedDocument) -> ImportResult<()> {
    let content = match SeedFormat::from_path(path) {
        SeedFormat::Json => to_json(document)?,
        SeedFormat::Yaml => serde_yaml::to_string(document)?,
    };
    fs::write(path, content)?;
    Ok(())
}

/// Read a seed document written by [`write_seed`]
pub fn read_seed(path: &Path) -> ImportResult<SeedDocument> {
    let content = fs::read_to_string(path)?;
    let document = match SeedFormat::from_path(path) {
        SeedFormat::Json => serde_json::from_str(&content)?,
        SeedFormat::Yaml => serde_yaml::from_str(&content)?,
    };
    Ok(document)
}
