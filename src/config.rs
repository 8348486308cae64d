use std::path::PathBuf;
use std::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::loader::LoaderStyle;
use crate::motion::sketch::DEFAULT_DELAY;
use crate::theme::ThemeMode;
use crate::transition::DEFAULT_DURATION;

/// Where visitors can reach out. Empty fields hide their action.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactLinks {
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Opened by the floating chat button.
    pub chat_url: Option<String>,
    pub github: Option<String>,
}

impl Default for ContactLinks {
    fn default() -> Self {
        Self {
            email: None,
            phone: None,
            chat_url: None,
            github: Some("https://github.com/moaz-shaker".to_string()),
        }
    }
}

/// Runtime settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub transition_ms: u64,
    pub sketch_delay_ms: u64,
    pub frame_ms: u64,
    /// Artificial delay before deferred content resolves.
    pub load_latency_ms: u64,
    /// Skip enter/exit motion and the Home sketch.
    pub reduced_motion: bool,
    pub spinner: LoaderStyle,
    pub theme: ThemeMode,
    pub contact: ContactLinks,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            transition_ms: DEFAULT_DURATION.as_millis() as u64,
            sketch_delay_ms: DEFAULT_DELAY.as_millis() as u64,
            frame_ms: 16,
            load_latency_ms: 0,
            reduced_motion: false,
            spinner: LoaderStyle::Braille,
            theme: ThemeMode::Light,
            contact: ContactLinks::default(),
        }
    }
}

impl Settings {
    /// Enter/exit duration; zero under reduced motion.
    pub fn transition(&self) -> Duration {
        if self.reduced_motion {
            Duration::ZERO
        } else {
            Duration::from_millis(self.transition_ms)
        }
    }

    /// Delay from Home's mount to the first sketch step. Never shorter than
    /// the enter transition, so drawing only starts once Home has settled.
    pub fn sketch_delay(&self) -> Duration {
        Duration::from_millis(self.sketch_delay_ms).max(self.transition())
    }

    pub fn load_latency(&self) -> Duration {
        Duration::from_millis(self.load_latency_ms)
    }

    /// Frame pulse interval, never below 1 ms.
    pub fn frame_ms(&self) -> u64 {
        self.frame_ms.max(1)
    }

    /// Apply `FOLIO_REDUCED_MOTION` and `FOLIO_THEME` on top of file values.
    fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(v) = var("FOLIO_REDUCED_MOTION") {
            self.reduced_motion = matches!(v.trim(), "1" | "true" | "yes" | "on");
        }
        if let Some(v) = var("FOLIO_THEME") {
            match v.trim() {
                "light" => self.theme = ThemeMode::Light,
                "dark" => self.theme = ThemeMode::Dark,
                "auto" => self.theme = ThemeMode::Auto,
                other => tracing::warn!("ignoring FOLIO_THEME={other:?}"),
            }
        }
    }
}

/// Return the path to the settings file.
pub fn config_file_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("/tmp"))
        .join("folio/config.json")
}

pub fn parse(content: &str) -> Result<Settings, ConfigError> {
    Ok(serde_json::from_str(content)?)
}

fn read(path: &std::path::Path) -> Result<Option<Settings>, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => parse(&content).map(Some),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Load settings from disk and the environment. Never fails: a missing file
/// means defaults, a broken one is logged and replaced by defaults.
pub fn load() -> Settings {
    let path = config_file_path();
    let mut settings = match read(&path) {
        Ok(Some(s)) => {
            tracing::info!("config: loaded {}", path.display());
            s
        }
        Ok(None) => Settings::default(),
        Err(e) => {
            tracing::warn!("config: {} ({e}), using defaults", path.display());
            Settings::default()
        }
    };
    settings.apply_env(|k| std::env::var(k).ok().filter(|v| !v.is_empty()));
    settings
}
