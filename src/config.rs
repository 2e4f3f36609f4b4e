use std::{cmp::Ordering, time::Duration};

use color_eyre::eyre::{bail, Result};
use config::{builder::DefaultState, ConfigBuilder, ConfigError, FileFormat};
use serde::Deserialize;

use crate::game::{positive, Tuning};

const CONFIG: &str = include_str!("../.config/config.yaml");

/// How many pixels one terminal cell stands for.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Display {
    pub cell_width: f32,
    pub cell_height: f32,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    pub tick_rate: f64,
    pub frame_rate: f64,
    pub tuning: Tuning,
    pub display: Display,
}

impl Config {
    /// Embedded defaults, overlaid with `config.yaml` or `config.toml` from the config directory.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = crate::utils::get_config_dir();
        let mut builder = Self::defaults()?;

        let config_files = [("config.yaml", FileFormat::Yaml), ("config.toml", FileFormat::Toml)];
        let mut found_config = false;
        for (file, format) in &config_files {
            let path = config_dir.join(file);
            builder = builder.add_source(config::File::from(path.clone()).format(*format).required(false));
            if path.exists() {
                log::info!("Loading configuration from {}", path.display());
                found_config = true
            }
        }
        if !found_config {
            log::info!("No configuration file in {}, using defaults", config_dir.display());
        }

        builder.build()?.try_deserialize()
    }

    /// The embedded `config.yaml`, without any user file.
    pub(crate) fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Ok(config::Config::builder().add_source(config::File::from_str(CONFIG, FileFormat::Yaml)))
    }

    /// Command line rates win over the configured ones.
    pub fn with_rates(self, tick_rate: Option<f64>, frame_rate: Option<f64>) -> Self {
        Self {
            tick_rate: tick_rate.unwrap_or(self.tick_rate),
            frame_rate: frame_rate.unwrap_or(self.frame_rate),
            ..self
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.tuning.validate()?;
        period("tick_rate", self.tick_rate)?;
        period("frame_rate", self.frame_rate)?;
        if !(positive(self.display.cell_width) && positive(self.display.cell_height)) {
            bail!(
                "cell size must be positive, got {}x{}",
                self.display.cell_width,
                self.display.cell_height
            );
        }
        Ok(())
    }
}

/// Time between two events at `rate` per second. Fails unless that is a non-zero `Duration`.
pub fn period(name: &str, rate: f64) -> Result<Duration> {
    if !rate.is_finite() || rate.partial_cmp(&0.0) != Some(Ordering::Greater) {
        bail!("{name} must be a finite positive number, got {rate}");
    }
    match Duration::try_from_secs_f64(rate.recip()) {
        Ok(period) if !period.is_zero() => Ok(period),
        _ => bail!("{name} of {rate} per second is out of range"),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn layered(user: &str) -> Result<Config> {
        let config = Config::defaults()?.add_source(config::File::from_str(user, FileFormat::Yaml)).build()?;
        Ok(config.try_deserialize()?)
    }

    fn embedded() -> Result<Config> {
        Ok(Config::defaults()?.build()?.try_deserialize()?)
    }

    #[test]
    fn test_embedded_defaults() -> Result<()> {
        let config = embedded()?;
        assert_eq!(config.tuning, Tuning::default());
        assert_eq!(config.tick_rate, 60.0);
        assert_eq!(config.frame_rate, 60.0);
        assert_eq!(config.display, Display { cell_width: 8.0, cell_height: 16.0 });
        config.validate()?;
        Ok(())
    }

    #[test]
    fn test_partial_override() -> Result<()> {
        let config = layered("tuning:\n  gravity: 0.5\ndisplay:\n  cell_height: 12.0\n")?;
        assert_eq!(config.tuning.gravity, 0.5);
        assert_eq!(config.tuning.jump_impulse, -8.5);
        assert_eq!(config.display, Display { cell_width: 8.0, cell_height: 12.0 });
        Ok(())
    }

    #[test]
    fn test_rejects_bad_rates() -> Result<()> {
        let config = layered("tick_rate: 0.0\n")?;
        let err = config.validate().unwrap_err();
        assert_eq!(err.to_string(), "tick_rate must be a finite positive number, got 0");
        Ok(())
    }

    #[test]
    fn test_rejects_unrepresentable_rates() -> Result<()> {
        let config = Config { tick_rate: f64::INFINITY, ..embedded()? };
        assert_eq!(config.validate().unwrap_err().to_string(), "tick_rate must be a finite positive number, got inf");

        let config = Config { frame_rate: 1e-300, ..embedded()? };
        let err = config.validate().unwrap_err().to_string();
        assert!(err.starts_with("frame_rate of 0.000"), "{err}");
        assert!(err.ends_with("per second is out of range"), "{err}");

        let config = Config { tick_rate: 1e300, ..embedded()? };
        assert!(config.validate().is_err());

        let config = Config { frame_rate: f64::NAN, ..embedded()? };
        assert!(config.validate().is_err());
        Ok(())
    }

    #[test]
    fn test_with_rates() -> Result<()> {
        let config = embedded()?.with_rates(Some(30.0), None);
        assert_eq!((config.tick_rate, config.frame_rate), (30.0, 60.0));
        Ok(())
    }

    #[test]
    fn test_period() -> Result<()> {
        assert_eq!(period("tick_rate", 4.0)?, Duration::from_millis(250));
        assert_eq!(period("tick_rate", 60.0)?, Duration::from_secs_f64(1.0 / 60.0));
        Ok(())
    }

    #[test]
    fn test_rejects_bad_tuning() -> Result<()> {
        let config = layered("tuning:\n  pipe_width: -1.0\n")?;
        assert!(config.validate().is_err());
        Ok(())
    }

    #[test]
    fn test_rejects_ill_typed_value() {
        assert!(layered("tuning:\n  gravity: heavy\n").is_err());
    }
}
