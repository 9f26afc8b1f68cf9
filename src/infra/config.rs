//! Configuration loading from TOML files
//!
//! Config file is selected via the --config command line argument
//! (default: config/dev.toml); a missing or invalid file falls back to
//! built-in defaults so the facility can run unconfigured.

use crate::domain::types::IdentitySignature;
use crate::services::rates::RateSchedule;
use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Which identity probe implementation the binary wires up
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProbeMode {
    /// Hardware-free probe reporting a configured base region
    Simulated,
    /// External detector service over HTTP
    Http,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FacilityConfig {
    #[serde(default = "default_facility_name")]
    pub name: String,
}

impl Default for FacilityConfig {
    fn default() -> Self {
        Self { name: default_facility_name() }
    }
}

fn default_facility_name() -> String {
    "SMART PARKING SYSTEM".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct RatesConfig {
    #[serde(default = "default_first_hour_fee")]
    pub first_hour_fee: u64,
    #[serde(default = "default_additional_hour_fee")]
    pub additional_hour_fee: u64,
    #[serde(default = "default_currency_prefix")]
    pub currency_prefix: String,
}

impl Default for RatesConfig {
    fn default() -> Self {
        Self {
            first_hour_fee: default_first_hour_fee(),
            additional_hour_fee: default_additional_hour_fee(),
            currency_prefix: default_currency_prefix(),
        }
    }
}

fn default_first_hour_fee() -> u64 {
    50
}

fn default_additional_hour_fee() -> u64 {
    30
}

fn default_currency_prefix() -> String {
    "₹".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProbeConfig {
    #[serde(default = "default_probe_mode")]
    pub mode: ProbeMode,
    #[serde(default = "default_probe_url")]
    pub url: String,
    #[serde(default = "default_sample_timeout_ms")]
    pub sample_timeout_ms: u64,
    /// Base region reported by the simulated probe
    #[serde(default = "default_base_region")]
    pub base_region: [u32; 4],
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            mode: default_probe_mode(),
            url: default_probe_url(),
            sample_timeout_ms: default_sample_timeout_ms(),
            base_region: default_base_region(),
        }
    }
}

fn default_probe_mode() -> ProbeMode {
    ProbeMode::Simulated
}

fn default_probe_url() -> String {
    "http://127.0.0.1:8089/detect".to_string()
}

fn default_sample_timeout_ms() -> u64 {
    5000
}

fn default_base_region() -> [u32; 4] {
    [10, 10, 50, 50]
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct TomlConfig {
    #[serde(default)]
    pub facility: FacilityConfig,
    #[serde(default)]
    pub rates: RatesConfig,
    #[serde(default)]
    pub probe: ProbeConfig,
}

/// Main configuration struct used throughout the application
#[derive(Debug, Clone)]
pub struct Config {
    facility_name: String,
    first_hour_fee: u64,
    additional_hour_fee: u64,
    currency_prefix: String,
    probe_mode: ProbeMode,
    probe_url: String,
    sample_timeout_ms: u64,
    probe_base_region: [u32; 4],
    config_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            facility_name: default_facility_name(),
            first_hour_fee: default_first_hour_fee(),
            additional_hour_fee: default_additional_hour_fee(),
            currency_prefix: default_currency_prefix(),
            probe_mode: default_probe_mode(),
            probe_url: default_probe_url(),
            sample_timeout_ms: default_sample_timeout_ms(),
            probe_base_region: default_base_region(),
            config_file: "default".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let toml_config: TomlConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;

        Ok(Self {
            facility_name: toml_config.facility.name,
            first_hour_fee: toml_config.rates.first_hour_fee,
            additional_hour_fee: toml_config.rates.additional_hour_fee,
            currency_prefix: toml_config.rates.currency_prefix,
            probe_mode: toml_config.probe.mode,
            probe_url: toml_config.probe.url,
            sample_timeout_ms: toml_config.probe.sample_timeout_ms,
            probe_base_region: toml_config.probe.base_region,
            config_file: path.display().to_string(),
        })
    }

    /// Load configuration - tries the TOML file first, falls back to defaults
    pub fn load_from_path(path: &str) -> Self {
        match Self::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Warning: {}. Using defaults.", e);
                Self::default()
            }
        }
    }

    /// Pricing policy built from the configured fees
    pub fn rate_schedule(&self) -> RateSchedule {
        RateSchedule::new(self.first_hour_fee, self.additional_hour_fee)
    }

    /// Base region the simulated probe reports
    pub fn probe_base_signature(&self) -> IdentitySignature {
        let [x, y, width, height] = self.probe_base_region;
        IdentitySignature::new(x, y, width, height)
    }

    // Getters for all config fields
    pub fn facility_name(&self) -> &str {
        &self.facility_name
    }

    pub fn first_hour_fee(&self) -> u64 {
        self.first_hour_fee
    }

    pub fn additional_hour_fee(&self) -> u64 {
        self.additional_hour_fee
    }

    pub fn currency_prefix(&self) -> &str {
        &self.currency_prefix
    }

    pub fn probe_mode(&self) -> ProbeMode {
        self.probe_mode
    }

    pub fn probe_url(&self) -> &str {
        &self.probe_url
    }

    pub fn sample_timeout_ms(&self) -> u64 {
        self.sample_timeout_ms
    }

    pub fn config_file(&self) -> &str {
        &self.config_file
    }
}
