use crate::application::composer::{ComposeOptions, DEFAULT_TITLE};
use crate::domain::layout::LayoutVariant;
use config::builder::{ConfigBuilder, DefaultState};
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "config/dashboard";
const ENV_PREFIX: &str = "STEAM_DASHBOARD";

#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub source: SourceSettings,
    #[serde(default)]
    pub dashboard: DashboardSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServerSettings {
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct NormalSettings {
    pub mean: f64,
    pub std_dev: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ScalarSettings {
    pub value: f64,
    #[serde(default)]
    pub target: Option<f64>,
    pub unit: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SourceSettings {
    pub seed: u64,
    pub matrix_rows: usize,
    pub matrix_columns: usize,
    pub series_length: usize,
    /// First day of the daily series, `YYYY-MM-DD`.
    pub start_date: String,
    pub boiler_efficiency: NormalSettings,
    pub steam_flow: NormalSettings,
    pub fuel_consumption: NormalSettings,
    pub condensate_recovery: ScalarSettings,
    pub steam_per_kg: ScalarSettings,
    pub leak_loss: ScalarSettings,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            seed: 42,
            matrix_rows: 10,
            matrix_columns: 10,
            series_length: 100,
            start_date: "2024-01-01".to_string(),
            boiler_efficiency: NormalSettings {
                mean: 85.0,
                std_dev: 2.0,
            },
            steam_flow: NormalSettings {
                mean: 12.0,
                std_dev: 1.5,
            },
            fuel_consumption: NormalSettings {
                mean: 2.0,
                std_dev: 0.3,
            },
            condensate_recovery: ScalarSettings {
                value: 78.0,
                target: Some(80.0),
                unit: "%".to_string(),
            },
            steam_per_kg: ScalarSettings {
                value: 6.2,
                target: None,
                unit: "kg/kg".to_string(),
            },
            leak_loss: ScalarSettings {
                value: 3.5,
                target: None,
                unit: "%".to_string(),
            },
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DashboardSettings {
    pub title: String,
    pub variant: LayoutVariant,
    pub recolor_mean_delta: bool,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            variant: LayoutVariant::default(),
            recolor_mean_delta: false,
        }
    }
}

impl DashboardSettings {
    pub fn compose_options(&self) -> ComposeOptions {
        ComposeOptions {
            title: self.title.clone(),
            variant: self.variant,
            recolor_mean_delta: self.recolor_mean_delta,
        }
    }
}

fn default_bind_addr() -> String {
    "0.0.0.0:8080".to_string()
}

/// Builder seeded with every default, so file and env sources merge into
/// nested tables key by key instead of replacing them.
fn builder_with_defaults() -> anyhow::Result<ConfigBuilder<DefaultState>> {
    Ok(config::Config::builder().add_source(config::Config::try_from(&AppConfig::default())?))
}

fn env_source() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .separator("__")
        .try_parsing(true)
}

/// Optional `config/dashboard.*` file, overridden by `STEAM_DASHBOARD__SECTION__KEY` variables.
pub fn load_config() -> anyhow::Result<AppConfig> {
    let settings = builder_with_defaults()?
        .add_source(config::File::with_name(CONFIG_FILE).required(false))
        .add_source(env_source())
        .build()?;

    parse_config(settings)
}

pub fn parse_config(settings: config::Config) -> anyhow::Result<AppConfig> {
    Ok(settings.try_deserialize()?)
}
