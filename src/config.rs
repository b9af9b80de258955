//! Run configuration, read from TOML.
//!
//! ```toml
//! scenario = "two-column"
//! trials = 1000000
//! seed = 7
//!
//! [two-column]
//! width = 1.0
//! height = 2.0
//! ```
//!
//! Every key is optional. Trial count, output precision and whether the raw
//! count is printed default per scenario.
use serde::Deserialize;
use std::fmt;
use std::path::Path;

use crate::data::{OCTAGON_RADIUS, TWO_COLUMN_HEIGHT, TWO_COLUMN_WIDTH};
use crate::simulation::{Scenario, REMOVED_POINTS};
use crate::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioKind {
  Octagon,
  TwoColumn,
}

impl Default for ScenarioKind {
  fn default() -> Self {
    ScenarioKind::Octagon
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OctagonConfig {
  pub radius: f64,
}

impl Default for OctagonConfig {
  fn default() -> Self {
    OctagonConfig {
      radius: OCTAGON_RADIUS,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TwoColumnConfig {
  pub width: f64,
  pub height: f64,
}

impl Default for TwoColumnConfig {
  fn default() -> Self {
    TwoColumnConfig {
      width: TWO_COLUMN_WIDTH,
      height: TWO_COLUMN_HEIGHT,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "kebab-case")]
pub struct Config {
  pub scenario: ScenarioKind,
  pub trials: Option<usize>,
  /// Seed for the random source. Drawn from entropy when absent.
  pub seed: Option<u64>,
  pub removed: usize,
  /// Decimal places of the printed probability.
  pub precision: Option<usize>,
  /// Print the raw intersection count before the probability.
  pub show_count: Option<bool>,
  pub octagon: OctagonConfig,
  pub two_column: TwoColumnConfig,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      scenario: ScenarioKind::default(),
      trials: None,
      seed: None,
      removed: REMOVED_POINTS,
      precision: None,
      show_count: None,
      octagon: OctagonConfig::default(),
      two_column: TwoColumnConfig::default(),
    }
  }
}

impl Config {
  pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let text = std::fs::read_to_string(path)?;
    Config::from_toml(&text)
  }

  pub fn from_toml(text: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(text)?;
    config.validate()?;
    Ok(config)
  }

  /// Check that the configuration describes a runnable simulation.
  pub fn validate(&self) -> Result<(), Error> {
    if self.trials() == 0 {
      return Err(Error::InvalidTrialCount);
    }
    let points = self.to_scenario().point_set()?;
    if self.removed >= points.len() {
      return Err(Error::InvalidSubsetSize);
    }
    Ok(())
  }

  pub fn to_scenario(&self) -> Scenario {
    match self.scenario {
      ScenarioKind::Octagon => Scenario::Octagon {
        radius: self.octagon.radius,
      },
      ScenarioKind::TwoColumn => Scenario::TwoColumn {
        width: self.two_column.width,
        height: self.two_column.height,
      },
    }
  }

  pub fn trials(&self) -> usize {
    self.trials.unwrap_or(match self.scenario {
      ScenarioKind::Octagon => 100_000,
      ScenarioKind::TwoColumn => 1_000_000,
    })
  }

  pub fn precision(&self) -> usize {
    self.precision.unwrap_or(match self.scenario {
      ScenarioKind::Octagon => 1,
      ScenarioKind::TwoColumn => 10,
    })
  }

  pub fn show_count(&self) -> bool {
    self
      .show_count
      .unwrap_or(self.scenario == ScenarioKind::Octagon)
  }
}

///////////////////////////////////////////////////////////////////////////////
// ConfigError

#[derive(Debug)]
pub enum ConfigError {
  Io(std::io::Error),
  Parse(toml::de::Error),
  Invalid(Error),
}

impl fmt::Display for ConfigError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ConfigError::Io(err) => write!(f, "Cannot read configuration: {}", err),
      ConfigError::Parse(err) => write!(f, "Malformed configuration: {}", err),
      ConfigError::Invalid(err) => write!(f, "Invalid configuration: {}", err),
    }
  }
}

impl std::error::Error for ConfigError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    match self {
      ConfigError::Io(err) => Some(err),
      ConfigError::Parse(err) => Some(err),
      ConfigError::Invalid(err) => Some(err),
    }
  }
}

impl From<std::io::Error> for ConfigError {
  fn from(err: std::io::Error) -> Self {
    ConfigError::Io(err)
  }
}

impl From<toml::de::Error> for ConfigError {
  fn from(err: toml::de::Error) -> Self {
    ConfigError::Parse(err)
  }
}

impl From<Error> for ConfigError {
  fn from(err: Error) -> Self {
    ConfigError::Invalid(err)
  }
}
