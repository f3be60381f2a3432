use std::sync::Once;

use env_logger::Builder;
use log::LevelFilter;

static INIT: Once = Once::new();

/// Installs an `env_logger` once per process.
///
/// Other crates log at `Warn`; `level` applies to this crate, where resizes are
/// reported at `Debug`. `RUST_LOG` overrides both.
pub fn initialize_logger(level: LevelFilter) {
  INIT.call_once_force(|_| {
    let mut builder = Builder::new();

    builder
      .filter_level(LevelFilter::Warn)
      .filter_module(env!("CARGO_CRATE_NAME"), level)
      .format_timestamp_millis()
      .parse_default_env();

    // Another logger may already be installed by the host binary.
    let _ = builder.try_init();
  });
}
