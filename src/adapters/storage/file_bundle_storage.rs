//! File-based Bundle Storage Adapter
//!
//! Reads input bundles from JSON or YAML files and writes each computed
//! matrix as a pretty-printed JSON file in an output directory.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::domain::promethee::{InputBundle, PreferenceMatrix, PrometheeResult};
use crate::ports::{InputBundleReader, ResultWriter, StorageError};

pub const PREFERENCES_FILE: &str = "preferences.json";
pub const PARTIAL_PREFERENCES_FILE: &str = "partial_preferences.json";
pub const DISCORDANCE_FILE: &str = "discordance.json";
pub const PARTIAL_DISCORDANCE_FILE: &str = "partial_discordance.json";
pub const PREFERENCES_WITH_DISCORDANCE_FILE: &str = "preferences_with_discordance.json";

/// File-based storage for input bundles and results
#[derive(Debug, Clone)]
pub struct FileBundleStorage {
    input_path: PathBuf,
    output_dir: PathBuf,
    write_partials: bool,
}

impl FileBundleStorage {
    /// Create a new file storage
    ///
    /// # Arguments
    /// * `input_path` - The bundle file (`.json`, `.yaml` or `.yml`)
    /// * `output_dir` - The directory results are written to
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileBundleStorage::new("./data/bundle.yaml", "./out");
    /// ```
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(input_path: P, output_dir: Q) -> Self {
        Self {
            input_path: input_path.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
            write_partials: true,
        }
    }

    /// Enable or disable writing the per-criterion matrices
    pub fn with_partial_outputs(mut self, enabled: bool) -> Self {
        self.write_partials = enabled;
        self
    }

    pub fn input_path(&self) -> &Path {
        &self.input_path
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Serialize `value` to `file_name` inside the output directory
    fn write_json<T: Serialize>(&self, file_name: &str, value: &T) -> Result<String, StorageError> {
        let path = self.output_dir.join(file_name);
        let json = serde_json::to_string_pretty(value)
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;
        fs::write(&path, json).map_err(|e| StorageError::IoError(e.to_string()))?;

        debug!(path = %path.display(), "Result file written");
        Ok(path.display().to_string())
    }
}

impl InputBundleReader for FileBundleStorage {
    fn read_bundle(&self) -> Result<InputBundle, StorageError> {
        let path = &self.input_path;
        if !path.exists() {
            return Err(StorageError::NotFound(path.clone()));
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        let content = fs::read_to_string(path).map_err(|e| StorageError::IoError(e.to_string()))?;

        let bundle: InputBundle = match extension.as_str() {
            "json" => serde_json::from_str(&content)
                .map_err(|e| StorageError::DeserializationFailed(e.to_string()))?,
            "yaml" | "yml" => serde_yaml::from_str(&content)
                .map_err(|e| StorageError::DeserializationFailed(e.to_string()))?,
            _ => return Err(StorageError::UnsupportedFormat(path.display().to_string())),
        };

        debug!(path = %path.display(), format = %extension, "Input bundle read");
        Ok(bundle)
    }
}

impl ResultWriter for FileBundleStorage {
    fn write_result(&self, result: &PrometheeResult) -> Result<Vec<String>, StorageError> {
        fs::create_dir_all(&self.output_dir).map_err(|e| StorageError::IoError(e.to_string()))?;

        let non_finite = non_finite_count(&result.preferences);
        if non_finite > 0 {
            warn!(
                pairs = non_finite,
                "Non-finite total preferences (zero denominator) are written as null"
            );
        }

        let mut written = vec![self.write_json(PREFERENCES_FILE, &result.preferences)?];
        if self.write_partials {
            written.push(self.write_json(PARTIAL_PREFERENCES_FILE, &result.partial_preferences)?);
        }

        if let Some(discordance) = &result.discordance {
            written.push(self.write_json(DISCORDANCE_FILE, &discordance.overall)?);
            if self.write_partials {
                written.push(self.write_json(PARTIAL_DISCORDANCE_FILE, &discordance.partial)?);
            }
            written.push(
                self.write_json(PREFERENCES_WITH_DISCORDANCE_FILE, &discordance.preferences)?,
            );
        }

        Ok(written)
    }
}

/// Number of pairs whose value JSON cannot represent.
fn non_finite_count(matrix: &PreferenceMatrix) -> usize {
    matrix.iter().filter(|(_, _, value)| !value.is_finite()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::promethee::PrometheeEngine;
    use tempfile::TempDir;

    const BUNDLE_YAML: &str = r#"
z_function: minimum
criteria:
  - id: g1
    direction: MAX
    weight: 1.0
    function: 3
    thresholds:
      preference: !constant 4.0
alternatives: [a, b]
performance_table:
  a: { g1: 10.0 }
  b: { g1: 7.0 }
"#;

    fn create_storage(file_name: &str, content: &str) -> (FileBundleStorage, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join(file_name);
        fs::write(&input, content).unwrap();
        let storage = FileBundleStorage::new(&input, temp_dir.path().join("out"));
        (storage, temp_dir)
    }

    #[test]
    fn reads_yaml_bundle() {
        let (storage, _temp) = create_storage("bundle.yaml", BUNDLE_YAML);

        let bundle = storage.read_bundle().unwrap();

        assert_eq!(bundle.alternatives.len(), 2);
        assert_eq!(bundle.z_function.label(), "minimum");
    }

    #[test]
    fn reads_json_bundle() {
        let json = r#"{
            "criteria": [{ "id": "g1", "direction": "MIN", "weight": 2.0, "function": 1 }],
            "alternatives": ["a"],
            "performance_table": { "a": { "g1": 1.0 } }
        }"#;
        let (storage, _temp) = create_storage("bundle.json", json);

        let bundle = storage.read_bundle().unwrap();

        assert_eq!(bundle.criteria[0].weight, 2.0);
    }

    #[test]
    fn missing_bundle_returns_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileBundleStorage::new(temp_dir.path().join("absent.json"), temp_dir.path());

        let result = storage.read_bundle();

        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn unknown_extension_is_rejected() {
        let (storage, _temp) = create_storage("bundle.xml", "<bundle/>");

        let result = storage.read_bundle();

        assert!(matches!(result, Err(StorageError::UnsupportedFormat(_))));
    }

    #[test]
    fn malformed_bundle_fails_deserialization() {
        let (storage, _temp) = create_storage("bundle.json", "{ not json");

        let result = storage.read_bundle();

        assert!(matches!(result, Err(StorageError::DeserializationFailed(_))));
    }

    #[test]
    fn writes_preference_files() {
        let (storage, _temp) = create_storage("bundle.yaml", BUNDLE_YAML);
        let inputs = storage.read_bundle().unwrap().validate().unwrap();
        let result = PrometheeEngine::compute(&inputs).unwrap();

        let written = storage.write_result(&result).unwrap();

        assert_eq!(written.len(), 2);
        let content = fs::read_to_string(storage.output_dir().join(PREFERENCES_FILE)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(json[1]["from"], "a");
        assert_eq!(json[1]["to"], "b");
        assert_eq!(json[1]["value"], 0.75);
        assert!(storage.output_dir().join(PARTIAL_PREFERENCES_FILE).exists());
    }

    #[test]
    fn zero_weight_totals_are_written_as_null() {
        let yaml = r#"
criteria:
  - { id: g1, direction: MAX, weight: 0.0, function: 1 }
alternatives: [a, b]
performance_table:
  a: { g1: 1.0 }
  b: { g1: 0.0 }
"#;
        let (storage, _temp) = create_storage("bundle.yaml", yaml);
        let inputs = storage.read_bundle().unwrap().validate().unwrap();
        let result = PrometheeEngine::compute(&inputs).unwrap();
        assert_eq!(non_finite_count(&result.preferences), 4);

        storage.write_result(&result).unwrap();

        let content = fs::read_to_string(storage.output_dir().join(PREFERENCES_FILE)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert!(json[1]["value"].is_null());
    }

    #[test]
    fn writes_discordance_files_when_present() {
        let (storage, _temp) = create_storage("bundle.yaml", BUNDLE_YAML);
        let storage = storage.with_partial_outputs(false);
        let inputs = storage.read_bundle().unwrap().validate().unwrap();
        let result = PrometheeEngine::compute_with_discordance(&inputs).unwrap();

        let written = storage.write_result(&result).unwrap();

        assert_eq!(written.len(), 3);
        assert!(storage.output_dir().join(DISCORDANCE_FILE).exists());
        assert!(storage
            .output_dir()
            .join(PREFERENCES_WITH_DISCORDANCE_FILE)
            .exists());
        assert!(!storage.output_dir().join(PARTIAL_PREFERENCES_FILE).exists());
        assert!(!storage.output_dir().join(PARTIAL_DISCORDANCE_FILE).exists());
    }
}
