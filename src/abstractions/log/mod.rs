/*!

# Overview

Threshold-gated logging for the sort and concrete-value core. The log level describes what _kind_ of message is
logged, and the numeric threshold is a verbosity level describing how chatty the logger is.

```
use symkind::log::*;

// Only messages logged at threshold 1 or lower are emitted.
set_global_logging_threshold(1);

warning!(2, "user sort Color is opaque"); // Not emitted
info!(1, "built kind SWord8");            // Emitted
debug!("sampled a list of length 17");    // Emitted, threshold defaults to 0
```

## Threshold

The global logging threshold is a single number shared by every level. Higher values mean more verbose logging. A
message logged "at" threshold `t` is emitted only if `t` is at most the global threshold, so threshold 0 is always
emitted. The threshold lives in an atomic and can be changed from any thread at any time.

The crate itself logs sparingly:

| threshold | what                                                      |
|:----------|:----------------------------------------------------------|
| 4         | user-sort builder decisions (enumerated vs. opaque, why)  |
| 4         | rejected user-sort names                                  |
| 4         | random generation details (sampled sequence lengths)      |

None of these are emitted at the default threshold of 3.

## Levels

Available levels are: Critical, Error, Warning, Info, Debug, Trace, each with a macro of the same name. Every macro
accepts a leading threshold followed by `format!`-style arguments, or just a message literal:

```ignore
level!(threshold, "format string", args...);
level!("message"); // threshold 0
```

## Subscriber Installation

The logging macros install a `tracing` subscriber on first use, so no explicit initialization is required. If the
host application has already installed its own global subscriber, ours is silently not installed and events flow to
the application's subscriber instead (where the `threshold` field is just another field).

*/
mod formatter;
mod threshold_filter;
mod macros;

use std::sync::atomic::{AtomicU8, Ordering};

use once_cell::sync::Lazy;
use tracing_subscriber::{
  fmt,
  layer::SubscriberExt,
  Registry
};

use threshold_filter::ThresholdFilterLayer;
use formatter::ThresholdHidingFormatter;
pub use macros::*;

// The macros expand to `$crate::log::tracing::event!` so that downstream crates need not depend on `tracing`.
#[doc(hidden)]
pub use tracing;

/// Used for implicit initialization.
static INIT_LOGGER: Lazy<()> = Lazy::new(|| {
  let subscriber = Registry::default()
      .with(ThresholdFilterLayer)
      .with(
        fmt::layer()
            .fmt_fields(ThresholdHidingFormatter)
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr),
      );

  // Another subscriber already being installed is not an error for a library.
  let _ = tracing::subscriber::set_global_default(subscriber);
});

/// This does not need to be called directly. Installs the subscriber if it hasn't been already.
pub fn init_logger() {
  Lazy::force(&INIT_LOGGER);
}

/// The global threshold until [`set_global_logging_threshold`] is called.
pub const DEFAULT_LOGGING_THRESHOLD: u8 = 3;

static GLOBAL_LOGGING_THRESHOLD: AtomicU8 = AtomicU8::new(DEFAULT_LOGGING_THRESHOLD);

/// Sets the global threshold. Messages logged at a higher threshold are dropped.
pub fn set_global_logging_threshold(new_threshold: u8) {
  GLOBAL_LOGGING_THRESHOLD.store(new_threshold, Ordering::SeqCst);
}

/// Retrieves the global threshold.
pub fn get_global_logging_threshold() -> u8 {
  GLOBAL_LOGGING_THRESHOLD.load(Ordering::SeqCst)
}


#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn threshold_round_trips() {
    let previous = get_global_logging_threshold();

    set_global_logging_threshold(5);
    assert_eq!(get_global_logging_threshold(), 5);

    // Exercise every macro form with the subscriber installed.
    info!(2, "kind {} has width {}", "SWord8", 8);
    debug!(6, "NOT logged: above threshold");
    warning!(0, "user sort {} is opaque", "Shape");
    warning!("no arguments, threshold 0");
    critical!(1, "constructor {} does not round-trip", "Circle");
    error!(7, "NOT logged either");
    trace!(5, "sampled {} elements", 42);

    set_global_logging_threshold(previous);
  }
}
