use serde::{Deserialize, Serialize};
use shared::task_eval::DEFAULT_TASK_ID;
use std::fs;
use std::path::Path;
use tracing::info;
use uuid::Uuid;

pub const DEFAULT_QUEUE_URL: &str = "http://localhost:3000";

/// Optional config.yaml surface. Every field falls back to a default, so a
/// missing file is fine; a present but unreadable one is not.
#[derive(Debug, Default, Deserialize, Serialize)]
struct RawConfig {
    queue_url: Option<String>,
    task_id: Option<Uuid>,
}

#[derive(Debug, Eq, PartialEq)]
pub struct TriggerConfig {
    pub queue_url: String,
    pub task_id: Uuid,
}

pub fn read_config() -> Result<TriggerConfig, String> {
    let config_path = if fs::metadata("config.yaml").is_ok() {
        "config.yaml"
    } else {
        "config.yml"
    };

    read_config_at(Path::new(config_path))
}

fn read_config_at(path: &Path) -> Result<TriggerConfig, String> {
    let raw = if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Config file could not be read - {}", e))?;
        serde_yaml::from_str::<RawConfig>(&content)
            .map_err(|e| format!("Failed to parse YAML: {}", e))?
    } else {
        info!("No config file at {:?} - using defaults", path);
        RawConfig::default()
    };

    Ok(TriggerConfig {
        queue_url: raw
            .queue_url
            .unwrap_or_else(|| DEFAULT_QUEUE_URL.to_string()),
        task_id: raw.task_id.unwrap_or(DEFAULT_TASK_ID),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn should_fall_back_to_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = read_config_at(&dir.path().join("config.yaml")).unwrap();

        assert_eq!(DEFAULT_QUEUE_URL, config.queue_url);
        assert_eq!(DEFAULT_TASK_ID, config.task_id);
    }

    #[test]
    fn should_read_configured_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "queue_url: http://queue.internal:8080").unwrap();
        writeln!(file, "task_id: 11111111-2222-3333-4444-555555555555").unwrap();

        let config = read_config_at(&path).unwrap();

        assert_eq!("http://queue.internal:8080", config.queue_url);
        assert_eq!(
            "11111111-2222-3333-4444-555555555555",
            config.task_id.to_string()
        );
    }

    #[test]
    fn should_default_fields_missing_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "queue_url: http://queue.internal:8080\n").unwrap();

        let config = read_config_at(&path).unwrap();

        assert_eq!("http://queue.internal:8080", config.queue_url);
        assert_eq!(DEFAULT_TASK_ID, config.task_id);
    }

    #[test]
    fn should_fail_on_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "task_id: [not, a, uuid\n").unwrap();

        let result = read_config_at(&path);
        assert!(result.is_err());
    }
}
