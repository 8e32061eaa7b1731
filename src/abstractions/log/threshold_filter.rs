use std::fmt::Debug;
use tracing::{
  field::{Field, Visit},
  Event,
  Subscriber
};
use tracing_subscriber::{
  Layer,
  layer::Context,
  registry::LookupSpan
};

use super::get_global_logging_threshold;

/// A layer that only lets through events whose `threshold` field is at most the global logging threshold.
pub(crate) struct ThresholdFilterLayer;

impl<S> Layer<S> for ThresholdFilterLayer
where
    S: Subscriber + for<'lookup> LookupSpan<'lookup>,
{
  fn event_enabled(&self, event: &Event<'_>, _ctx: Context<'_, S>) -> bool {
    let mut visitor = ThresholdVisitor { threshold: None };
    event.record(&mut visitor);

    match visitor.threshold {
      Some(threshold) => threshold <= get_global_logging_threshold(),
      // Events from outside the logging macros carry no threshold and are always emitted.
      None => true,
    }
  }
}

/// Extracts the `threshold` field from an event.
struct ThresholdVisitor {
  threshold: Option<u8>,
}

impl Visit for ThresholdVisitor {
  fn record_i64(&mut self, field: &Field, value: i64) {
    if field.name() == "threshold" {
      match u8::try_from(value) {
        Ok(threshold) => self.threshold = Some(threshold),
        Err(_) => panic!("invalid threshold value supplied to the logger: {}", value),
      }
    }
  }

  fn record_u64(&mut self, field: &Field, value: u64) {
    if field.name() == "threshold" {
      match u8::try_from(value) {
        Ok(threshold) => self.threshold = Some(threshold),
        Err(_) => panic!("invalid threshold value supplied to the logger: {}", value),
      }
    }
  }

  fn record_debug(&mut self, field: &Field, value: &dyn Debug) {
    if field.name() == "threshold" {
      panic!("invalid threshold value supplied to the logger: {:?}", value);
    }
  }

}
