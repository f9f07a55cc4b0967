//! Model artifact persistence
//!
//! A trained model is stored as two JSON files in one directory:
//! `model.json` (the serialized forest) and `metadata.json` (schema,
//! hyperparameters, metrics). The serving process treats both as immutable
//! inputs; replacing them means restarting the process.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::domain::model::METADATA_SCHEMA_VERSION;
use crate::domain::{DomainError, FareModel, ForestRegressor, ModelMetadata};

pub const MODEL_FILE: &str = "model.json";
pub const METADATA_FILE: &str = "metadata.json";

/// Filesystem store for one model's artifacts
#[derive(Debug, Clone)]
pub struct ArtifactStore {
    dir: PathBuf,
}

impl ArtifactStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn model_path(&self) -> PathBuf {
        self.dir.join(MODEL_FILE)
    }

    pub fn metadata_path(&self) -> PathBuf {
        self.dir.join(METADATA_FILE)
    }

    /// Whether both artifact files are present
    pub fn exists(&self) -> bool {
        self.model_path().is_file() && self.metadata_path().is_file()
    }

    /// Persist a trained model
    pub fn save(&self, model: &FareModel) -> Result<(), DomainError> {
        std::fs::create_dir_all(&self.dir).map_err(|e| {
            DomainError::artifact(format!("cannot create {}: {e}", self.dir.display()))
        })?;

        write_json(&self.metadata_path(), model.metadata())?;
        write_json(&self.model_path(), model.forest())?;

        info!(dir = %self.dir.display(), "Model artifacts saved");
        Ok(())
    }

    /// Load a previously persisted model
    ///
    /// Metadata is read first so a layout-version mismatch fails before the
    /// larger forest file is parsed.
    pub fn load(&self) -> Result<FareModel, DomainError> {
        let metadata: ModelMetadata = read_json(&self.metadata_path())?;

        if metadata.schema_version != METADATA_SCHEMA_VERSION {
            return Err(DomainError::artifact(format!(
                "metadata schema version {} is not supported (expected {})",
                metadata.schema_version, METADATA_SCHEMA_VERSION
            )));
        }

        let forest: ForestRegressor = read_json(&self.model_path())?;

        info!(
            dir = %self.dir.display(),
            trained_at = %metadata.trained_at,
            "Model loaded"
        );
        Ok(FareModel::new(forest, metadata))
    }
}

fn write_json<T: serde::Serialize>(path: &Path, value: &T) -> Result<(), DomainError> {
    let file = File::create(path)
        .map_err(|e| DomainError::artifact(format!("cannot create {}: {e}", path.display())))?;
    serde_json::to_writer(BufWriter::new(file), value)
        .map_err(|e| DomainError::artifact(format!("cannot write {}: {e}", path.display())))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, DomainError> {
    let file = File::open(path)
        .map_err(|e| DomainError::artifact(format!("cannot open {}: {e}", path.display())))?;
    serde_json::from_reader(BufReader::new(file))
        .map_err(|e| DomainError::artifact(format!("cannot parse {}: {e}", path.display())))
}
