//! Logger setup for hosts that do not install their own

use env_logger::Env;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "noteask=info";

/// Install `env_logger` as the `log` backend.
///
/// Fails if a logger is already installed; hosts with their own
/// logger can skip this and still receive every record.
pub fn init() -> Result<(), log::SetLoggerError>
{   env_logger::Builder::from_env(
      Env::default().default_filter_or(DEFAULT_FILTER)
    )
    .format_timestamp_millis()
    .try_init()
}

/// Logger for tests: captured output, everything at debug and above
pub fn init_for_tests()
{   let _ = env_logger::Builder::from_env(
      Env::default().default_filter_or("noteask=debug")
    )
    .is_test(true)
    .try_init();
}
