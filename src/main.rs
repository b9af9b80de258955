use clap::Parser;
use log::{error, info, LevelFilter};
use rand::SeedableRng;
use std::path::PathBuf;
use std::process::ExitCode;

use nncross::config::{Config, ConfigError, ScenarioKind};
use nncross::simulation::simulate_points;

/// Estimate how often a nearest-neighbor walk through a point set with two
/// points removed crosses itself.
#[derive(Debug, Parser)]
#[command(name = "nncross", version)]
struct Cli {
  /// Read settings from a TOML file. Flags override file values.
  #[arg(long, value_name = "FILE")]
  config: Option<PathBuf>,

  #[arg(long, value_enum)]
  scenario: Option<ScenarioKind>,

  /// Number of trials.
  #[arg(long, short = 'n')]
  trials: Option<usize>,

  /// Seed for a reproducible run.
  #[arg(long)]
  seed: Option<u64>,

  /// Octagon radius.
  #[arg(long)]
  radius: Option<f64>,

  /// Horizontal spacing of the two-column rows.
  #[arg(long)]
  width: Option<f64>,

  /// Vertical distance between the two-column rows.
  #[arg(long)]
  height: Option<f64>,

  /// Points removed before each walk.
  #[arg(long)]
  removed: Option<usize>,

  /// Decimal places of the printed probability.
  #[arg(long)]
  precision: Option<usize>,

  /// Print the raw intersection count.
  #[arg(long, overrides_with = "no_show_count")]
  show_count: bool,

  /// Print only the probability.
  #[arg(long, overrides_with = "show_count")]
  no_show_count: bool,

  /// More log output; repeat for more.
  #[arg(short, long, action = clap::ArgAction::Count)]
  verbose: u8,
}

impl Cli {
  fn into_config(self) -> Result<Config, ConfigError> {
    let mut config = match &self.config {
      Some(path) => Config::from_file(path)?,
      None => Config::default(),
    };
    if let Some(scenario) = self.scenario {
      config.scenario = scenario;
    }
    if self.trials.is_some() {
      config.trials = self.trials;
    }
    if self.seed.is_some() {
      config.seed = self.seed;
    }
    if let Some(radius) = self.radius {
      config.octagon.radius = radius;
    }
    if let Some(width) = self.width {
      config.two_column.width = width;
    }
    if let Some(height) = self.height {
      config.two_column.height = height;
    }
    if let Some(removed) = self.removed {
      config.removed = removed;
    }
    if self.precision.is_some() {
      config.precision = self.precision;
    }
    if self.show_count {
      config.show_count = Some(true);
    } else if self.no_show_count {
      config.show_count = Some(false);
    }
    config.validate()?;
    Ok(config)
  }
}

fn log_level(verbose: u8) -> LevelFilter {
  match verbose {
    0 => LevelFilter::Warn,
    1 => LevelFilter::Info,
    2 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  }
}

fn run(config: &Config) -> Result<(), ConfigError> {
  let seed = config.seed.unwrap_or_else(rand::random);
  info!("Seed {}", seed);
  let mut rng = rand::rngs::SmallRng::seed_from_u64(seed);

  let scenario = config.to_scenario();
  info!("Simulating {} over {} trials", scenario, config.trials());
  let points = scenario.point_set()?;
  let estimate = simulate_points(&points, config.removed, config.trials(), &mut rng)?;

  if config.show_count() {
    println!("{}", estimate.intersections);
  }
  println!(
    "Intersection probability: {:.*}",
    config.precision(),
    estimate.probability()
  );
  Ok(())
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  env_logger::Builder::new()
    .filter_level(log_level(cli.verbose))
    .parse_default_env()
    .init();

  let result = cli.into_config().and_then(|config| run(&config));
  match result {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      error!("{}", err);
      eprintln!("error: {}", err);
      ExitCode::FAILURE
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use claims::{assert_matches, assert_ok};

  #[test]
  fn cli_is_consistent() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
  }

  #[test]
  fn no_arguments_is_octagon() {
    let cli = Cli::parse_from(["nncross"]);
    let config = assert_ok!(cli.into_config());
    assert_eq!(config, Config::default());
  }

  #[test]
  fn flags_override() {
    let cli = Cli::parse_from([
      "nncross",
      "--scenario",
      "two-column",
      "-n",
      "10",
      "--seed",
      "3",
      "--height",
      "4",
      "--show-count",
    ]);
    let config = assert_ok!(cli.into_config());
    assert_eq!(config.scenario, ScenarioKind::TwoColumn);
    assert_eq!(config.trials(), 10);
    assert_eq!(config.seed, Some(3));
    assert_eq!(config.two_column.height, 4.0);
    assert!(config.show_count());
    assert_ok!(run(&config));
  }

  #[test]
  fn count_line_can_be_turned_off() {
    let cli = Cli::parse_from(["nncross", "--no-show-count"]);
    let config = assert_ok!(cli.into_config());
    assert_eq!(config.scenario, ScenarioKind::Octagon);
    assert!(!config.show_count());

    let cli = Cli::parse_from(["nncross", "--no-show-count", "--show-count"]);
    assert!(assert_ok!(cli.into_config()).show_count());
  }

  #[test]
  fn invalid_flags() {
    let cli = Cli::parse_from(["nncross", "--trials", "0"]);
    assert_matches!(cli.into_config(), Err(ConfigError::Invalid(_)));
  }

  #[test]
  fn verbosity() {
    assert_eq!(log_level(0), LevelFilter::Warn);
    assert_eq!(log_level(2), LevelFilter::Debug);
    assert_eq!(log_level(9), LevelFilter::Trace);
  }
}
