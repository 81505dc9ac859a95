use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::config::expand_tilde;
use crate::error::{Error, Result};

/// Description of a virtual machine to create
#[derive(Debug, Clone)]
pub struct VmSpec {
    pub name: String,
    pub cpu: u32,
    pub memory_mb: u32,
    pub disk_gb: u32,
    pub disk_path: String,
    /// Installer ISO to boot from; None boots straight from the disk
    pub iso_path: Option<PathBuf>,
}

impl VmSpec {
    /// Build a spec from already-typed values, rejecting non-positive sizes.
    pub fn new(
        name: impl Into<String>,
        cpu: u32,
        memory_mb: u32,
        disk_gb: u32,
        disk_path: impl Into<String>,
        iso_path: Option<PathBuf>,
    ) -> Result<Self> {
        let spec = Self {
            name: name.into(),
            cpu,
            memory_mb,
            disk_gb,
            disk_path: disk_path.into(),
            iso_path,
        };
        for (key, value) in [
            ("cpu", spec.cpu),
            ("memory_mb", spec.memory_mb),
            ("disk_gb", spec.disk_gb),
        ] {
            if value == 0 {
                return Err(Error::NonPositiveConfigValue {
                    key: key.to_string(),
                });
            }
        }
        Ok(spec)
    }

    /// Build a spec from a parsed JSON config object.
    ///
    /// Every validation failure names the offending key: missing key,
    /// non-numeric value, or non-positive value. Nothing external runs
    /// until this succeeds.
    pub fn from_json(config: &Value) -> Result<Self> {
        let name = required_text(config, "name")?;
        let cpu = required_positive(config, "cpu")?;
        let memory_mb = required_positive(config, "memory_mb")?;
        let disk_gb = required_positive(config, "disk_gb")?;
        let disk_path = required_text(config, "disk_path")?;

        let iso_path = match config.get("iso_path") {
            None | Some(Value::Null) => None,
            Some(value) => {
                let text = value.as_str().ok_or(Error::InvalidConfigValue {
                    key: "iso_path".to_string(),
                    expected: "text",
                })?;
                parse_iso_path(text)
            }
        };

        Ok(Self {
            name,
            cpu,
            memory_mb,
            disk_gb,
            disk_path,
            iso_path,
        })
    }
}

/// Normalize a user-entered ISO path: trim, strip surrounding quotes,
/// expand `~`. Empty input means no ISO.
pub fn parse_iso_path(text: &str) -> Option<PathBuf> {
    let cleaned = text.trim().trim_matches('"').trim_matches('\'');
    if cleaned.is_empty() {
        None
    } else {
        Some(expand_tilde(cleaned))
    }
}

fn required_text(config: &Value, key: &str) -> Result<String> {
    let value = config.get(key).ok_or_else(|| Error::MissingConfigKey {
        key: key.to_string(),
    })?;
    value
        .as_str()
        .map(ToString::to_string)
        .ok_or(Error::InvalidConfigValue {
            key: key.to_string(),
            expected: "text",
        })
}

fn required_positive(config: &Value, key: &str) -> Result<u32> {
    let value = config.get(key).ok_or_else(|| Error::MissingConfigKey {
        key: key.to_string(),
    })?;
    let number = value.as_i64().ok_or(Error::InvalidConfigValue {
        key: key.to_string(),
        expected: "number",
    })?;
    u32::try_from(number)
        .ok()
        .filter(|n| *n > 0)
        .ok_or(Error::NonPositiveConfigValue {
            key: key.to_string(),
        })
}

/// Load and validate a VM spec from a JSON config file.
pub async fn load_config(path: &Path) -> Result<VmSpec> {
    if !path.exists() {
        return Err(Error::ConfigNotFound {
            path: path.to_path_buf(),
        });
    }

    let text = tokio::fs::read_to_string(path).await?;
    let config: Value =
        serde_json::from_str(&text).map_err(|e| Error::InvalidConfigJson {
            message: e.to_string(),
        })?;

    VmSpec::from_json(&config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_config() -> Value {
        json!({
            "name": "vm1",
            "cpu": 2,
            "memory_mb": 2048,
            "disk_gb": 20,
            "disk_path": "./vm1.qcow2",
        })
    }

    #[test]
    fn test_valid_config_without_iso() {
        let spec = VmSpec::from_json(&valid_config()).unwrap();
        assert_eq!(spec.name, "vm1");
        assert_eq!(spec.cpu, 2);
        assert_eq!(spec.memory_mb, 2048);
        assert_eq!(spec.disk_gb, 20);
        assert_eq!(spec.disk_path, "./vm1.qcow2");
        assert!(spec.iso_path.is_none());
    }

    #[test]
    fn test_each_missing_key_is_named() {
        for key in ["name", "cpu", "memory_mb", "disk_gb", "disk_path"] {
            let mut config = valid_config();
            config.as_object_mut().unwrap().remove(key);

            let err = VmSpec::from_json(&config).unwrap_err();
            assert!(
                err.to_string().contains(key),
                "error for missing '{key}' should name it: {err}"
            );
            assert!(matches!(err, Error::MissingConfigKey { .. }));
        }
    }

    #[test]
    fn test_non_numeric_value_rejected() {
        let mut config = valid_config();
        config["cpu"] = json!("two");

        let err = VmSpec::from_json(&config).unwrap_err();
        assert!(matches!(err, Error::InvalidConfigValue { .. }));
        assert!(err.to_string().contains("cpu"));
    }

    #[test]
    fn test_zero_and_negative_values_rejected() {
        for (key, value) in [("cpu", json!(0)), ("memory_mb", json!(-1)), ("disk_gb", json!(0))] {
            let mut config = valid_config();
            config[key] = value;

            let err = VmSpec::from_json(&config).unwrap_err();
            assert!(matches!(err, Error::NonPositiveConfigValue { .. }));
            assert!(err.to_string().contains(key));
            assert!(err.to_string().contains("positive"));
        }
    }

    #[test]
    fn test_iso_path_quotes_stripped() {
        let mut config = valid_config();
        config["iso_path"] = json!("\"/isos/ubuntu.iso\"");

        let spec = VmSpec::from_json(&config).unwrap();
        assert_eq!(spec.iso_path, Some(PathBuf::from("/isos/ubuntu.iso")));
    }

    #[test]
    fn test_empty_iso_path_means_none() {
        let mut config = valid_config();
        config["iso_path"] = json!("  ");

        let spec = VmSpec::from_json(&config).unwrap();
        assert!(spec.iso_path.is_none());
    }

    #[test]
    fn test_new_rejects_zero_cpu() {
        let err = VmSpec::new("vm1", 0, 2048, 20, "./vm1.qcow2", None).unwrap_err();
        assert!(matches!(err, Error::NonPositiveConfigValue { .. }));
        assert!(err.to_string().contains("cpu"));
    }

    #[tokio::test]
    async fn test_load_config_missing_file() {
        let err = load_config(Path::new("/nonexistent/vm.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[tokio::test]
    async fn test_load_config_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vm.json");
        tokio::fs::write(&path, "{not json").await.unwrap();

        let err = load_config(&path).await.unwrap_err();
        assert!(matches!(err, Error::InvalidConfigJson { .. }));
    }

    #[tokio::test]
    async fn test_load_config_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("vm.json");
        tokio::fs::write(&path, valid_config().to_string())
            .await
            .unwrap();

        let spec = load_config(&path).await.unwrap();
        assert_eq!(spec.name, "vm1");
    }
}
