// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Engine configuration, loadable from JSON.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Settings of the main window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Title bar text.
    pub title: String,
    /// Initial inner width, in logical pixels.
    pub width: u32,
    /// Initial inner height, in logical pixels.
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Ember".to_string(),
            width: 1024,
            height: 768,
        }
    }
}

/// Settings read once at engine start. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// The main window.
    pub window: WindowConfig,
    /// Default `env_logger` filter, overridden by `RUST_LOG`.
    pub log_filter: String,
    /// Drain the asynchronous queue at the end of every frame.
    pub drain_async_each_frame: bool,
    /// Dispatch `AppTick`, `AppUpdated` and `AppRendered` around each frame.
    pub emit_frame_events: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            log_filter: "info".to_string(),
            drain_async_each_frame: true,
            emit_frame_events: true,
        }
    }
}

impl EngineConfig {
    /// Parses a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse engine configuration")
    }

    /// Reads and parses a JSON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read engine configuration '{}'", path.display()))?;
        Self::from_json_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config = EngineConfig::from_json_str(r#"{ "window": { "title": "Demo" } }"#)
            .expect("valid configuration");
        assert_eq!(config.window.title, "Demo");
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.log_filter, "info");
        assert!(config.drain_async_each_frame);
    }

    #[test]
    fn empty_object_is_the_default_configuration() {
        assert_eq!(
            EngineConfig::from_json_str("{}").expect("valid configuration"),
            EngineConfig::default()
        );
    }

    #[test]
    fn malformed_json_is_reported() {
        let error = EngineConfig::from_json_str("{ window: ").unwrap_err();
        assert!(error.to_string().contains("engine configuration"));
    }

    #[test]
    fn configuration_round_trips_through_a_file() {
        let config = EngineConfig {
            log_filter: "ember_core=trace".to_string(),
            emit_frame_events: false,
            ..EngineConfig::default()
        };
        let path = std::env::temp_dir().join(format!("ember-config-{}.json", std::process::id()));
        std::fs::write(&path, serde_json::to_string(&config).expect("serializable"))
            .expect("temp dir is writable");

        let loaded = EngineConfig::load(&path).expect("file is readable");
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_file_names_the_path() {
        let error = EngineConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(error.to_string().contains("/definitely/not/here.json"));
    }
}
