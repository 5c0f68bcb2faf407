//! Feature collections written by the catalogue search client.
//!
//! Only the download size of each feature is read; every other key of the
//! response is ignored. A missing `features` array or a feature without
//! `properties.services.download.size` is a parse error.

use serde::Deserialize;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

#[derive(Debug, Deserialize)]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
pub struct Feature {
    pub properties: Properties,
}

#[derive(Debug, Deserialize)]
pub struct Properties {
    pub services: Services,
}

#[derive(Debug, Deserialize)]
pub struct Services {
    pub download: Download,
}

#[derive(Debug, Deserialize)]
pub struct Download {
    pub size: u64,
}

impl Feature {
    pub fn size(&self) -> u64 {
        self.properties.services.download.size
    }
}

impl FeatureCollection {
    /// Sum of the download sizes of all features, in bytes.
    pub fn total_bytes(&self) -> u64 {
        self.features.iter().map(Feature::size).sum()
    }
}

#[derive(Debug)]
pub enum FeatureError {
    Io(std::io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for FeatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeatureError::Io(e) => write!(f, "I/O error: {}", e),
            FeatureError::Json(e) => write!(f, "Failed to parse feature collection: {}", e),
        }
    }
}

impl std::error::Error for FeatureError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FeatureError::Io(e) => Some(e),
            FeatureError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for FeatureError {
    fn from(err: std::io::Error) -> FeatureError {
        FeatureError::Io(err)
    }
}

impl From<serde_json::Error> for FeatureError {
    fn from(err: serde_json::Error) -> FeatureError {
        FeatureError::Json(err)
    }
}

pub fn read_feature_collection<P: AsRef<Path>>(path: P) -> Result<FeatureCollection, FeatureError> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    Ok(serde_json::from_reader(reader)?)
}
