use clap::{ArgAction, Args};
use log::LevelFilter;

#[derive(Clone, Debug, Default, Args)]
pub struct Config {
    /// Print more information (repeat for more detail)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}

/// Installs the stderr logger. `RUST_LOG` overrides the verbosity flags.
pub fn init_logging(config: &Config) {
    env_logger::Builder::from_env(
        env_logger::Env::default()
            .default_filter_or(config.log_level().as_str()),
    )
    .target(env_logger::Target::Stderr)
    .format_timestamp(None)
    .init();
}
