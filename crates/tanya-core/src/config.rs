//! Configuration — YAML config + env var overrides.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Display name the hosts show for the assistant
    #[serde(default = "default_assistant_name")]
    pub assistant_name: String,

    /// Greeting message that seeds every new transcript
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Simulated "agent is composing" latency before a reply lands
    #[serde(default = "default_composing_delay_ms")]
    pub composing_delay_ms: u64,

    /// Broadcast channel depth for engine events
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,
}

fn default_assistant_name() -> String {
    "Shawava".into()
}
fn default_greeting() -> String {
    "Halo! Saya asisten AI Shawava. Saya bisa membantu Anda mengetahui lebih \
     lanjut tentang proyek, pengalaman, dan keahlian saya. Ada yang ingin Anda \
     tanyakan?"
        .into()
}
fn default_composing_delay_ms() -> u64 {
    1500
}
fn default_event_capacity() -> usize {
    256
}

impl EngineConfig {
    /// Load config from a YAML file with env var overrides.
    pub fn load(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config: {}", config_path.display()))?;

        let mut config: EngineConfig =
            serde_yaml::from_str(&content).context("Failed to parse config.yaml")?;

        if let Ok(name) = std::env::var("TANYA_ASSISTANT_NAME") {
            config.assistant_name = name;
        }
        if let Ok(greeting) = std::env::var("TANYA_GREETING") {
            config.greeting = greeting;
        }
        if let Ok(delay) = std::env::var("TANYA_COMPOSING_DELAY_MS") {
            config.composing_delay_ms = delay
                .parse()
                .context("TANYA_COMPOSING_DELAY_MS must be an integer")?;
        }

        if config.greeting.trim().is_empty() {
            anyhow::bail!("greeting must be non-empty (it seeds the transcript)");
        }

        Ok(config)
    }

    /// Load config from the default location (project_root/config.yaml)
    pub fn load_from_dir(project_root: &Path) -> Result<Self> {
        let config_path = project_root.join("config.yaml");
        Self::load(&config_path)
    }

    pub fn composing_delay(&self) -> Duration {
        Duration::from_millis(self.composing_delay_ms)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            assistant_name: default_assistant_name(),
            greeting: default_greeting(),
            composing_delay_ms: default_composing_delay_ms(),
            event_capacity: default_event_capacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_config_defaults() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "assistant_name: Shawava").unwrap();

        let config = EngineConfig::load(tmp.path()).unwrap();
        assert_eq!(config.assistant_name, "Shawava");
        assert_eq!(config.composing_delay_ms, 1500);
        assert_eq!(config.event_capacity, 256);
        assert!(config.greeting.starts_with("Halo!"));
    }

    #[test]
    fn test_load_config_custom_values() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(
            tmp,
            "assistant_name: Demo\ngreeting: Selamat datang!\ncomposing_delay_ms: 200"
        )
        .unwrap();

        let config = EngineConfig::load(tmp.path()).unwrap();
        assert_eq!(config.assistant_name, "Demo");
        assert_eq!(config.greeting, "Selamat datang!");
        assert_eq!(config.composing_delay(), Duration::from_millis(200));
    }

    #[test]
    fn test_blank_greeting_fails() {
        let mut tmp = NamedTempFile::new().unwrap();
        writeln!(tmp, "greeting: \"   \"").unwrap();

        let result = EngineConfig::load(tmp.path());
        assert!(result.is_err());
    }
}
