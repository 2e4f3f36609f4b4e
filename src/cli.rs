use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
    /// Physics ticks per second, overrides the configured rate
    #[arg(short, long, value_name = "FLOAT")]
    pub tick_rate: Option<f64>,

    /// Frames per second, overrides the configured rate
    #[arg(short, long, value_name = "FLOAT")]
    pub frame_rate: Option<f64>,

    /// Seed for the pipe gaps, for reproducible runs
    #[arg(short, long, value_name = "INT")]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::Config;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["flappy-rs"]).unwrap();
        assert_eq!(cli.tick_rate, None);
        assert_eq!(cli.frame_rate, None);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::try_parse_from(["flappy-rs", "-t", "30", "--frame-rate", "24.5", "--seed", "42"]).unwrap();
        assert_eq!(cli.tick_rate, Some(30.0));
        assert_eq!(cli.frame_rate, Some(24.5));
        assert_eq!(cli.seed, Some(42));
    }

    #[test]
    fn test_infinite_rate_fails_validation() {
        let cli = Cli::try_parse_from(["flappy-rs", "--tick-rate", "inf", "--frame-rate", "1e-300"]).unwrap();
        let defaults: Config = Config::defaults().unwrap().build().unwrap().try_deserialize().unwrap();
        let config = defaults.with_rates(cli.tick_rate, cli.frame_rate);
        assert_eq!(config.tick_rate, f64::INFINITY);
        assert_eq!(config.frame_rate, 1e-300);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_bad_seed() {
        assert!(Cli::try_parse_from(["flappy-rs", "--seed", "-1"]).is_err());
    }
}
