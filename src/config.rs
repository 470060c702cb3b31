use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use littlespoon_mealplan::SystemClock;
use littlespoon_recipe::NewRecipe;
use serde::Deserialize;
use std::env;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};
use tracing_subscriber::EnvFilter;

const ANCHOR_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub baby: BabyConfig,
    #[serde(default)]
    pub week: WeekConfig,
    #[serde(default)]
    pub plan: PlanConfig,
    /// Extra recipes appended to the built-in catalog at startup
    #[serde(default)]
    pub recipes: Vec<NewRecipe>,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BabyConfig {
    #[serde(default = "default_baby_name")]
    pub name: String,
    #[serde(default = "default_months_old")]
    pub months_old: i32,
}

impl Default for BabyConfig {
    fn default() -> Self {
        Self {
            name: default_baby_name(),
            months_old: default_months_old(),
        }
    }
}

fn default_baby_name() -> String {
    "Leo".to_string()
}

fn default_months_old() -> i32 {
    7
}

#[derive(Debug, Deserialize, Clone)]
pub struct WeekConfig {
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Pins "today" to a fixed `YYYY-MM-DD` date instead of reading the clock
    #[serde(default)]
    pub anchor: Option<String>,
}

impl Default for WeekConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            anchor: None,
        }
    }
}

fn default_timezone() -> String {
    "UTC".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlanConfig {
    /// Fill the week with the first-run demo assignments
    #[serde(default = "default_sample")]
    pub sample: bool,
    #[serde(default)]
    pub favorites: Vec<String>,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            sample: default_sample(),
            favorites: Vec::new(),
        }
    }
}

fn default_sample() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (LITTLESPOON__BABY__MONTHS_OLD, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("baby.name", default_baby_name())?
            .set_default("baby.months_old", default_months_old())?
            .set_default("week.timezone", default_timezone())?
            .set_default("plan.sample", default_sample())?
            .set_default("observability.log_level", default_log_level())?
            .set_default("observability.json", false)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // The file is optional, defaults alone make a usable planner
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("LITTLESPOON")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.baby.months_old < 0 {
            return Err(format!(
                "baby.months_old must not be negative, got {}",
                self.baby.months_old
            ));
        }
        if let Err(e) = EnvFilter::try_new(&self.observability.log_level) {
            return Err(format!(
                "Invalid log level `{}`: {e}",
                self.observability.log_level
            ));
        }
        if let Err(e) = SystemClock::new(&self.week.timezone) {
            return Err(e.to_string());
        }
        self.anchor_date()?;

        Ok(())
    }

    /// The pinned `week.anchor` date, if any.
    pub fn anchor_date(&self) -> Result<Option<Date>, String> {
        let Some(anchor) = self.week.anchor.as_deref() else {
            return Ok(None);
        };

        Date::parse(anchor.trim(), ANCHOR_FORMAT)
            .map(Some)
            .map_err(|e| format!("week.anchor must be YYYY-MM-DD, got `{anchor}`: {e}"))
    }
}
