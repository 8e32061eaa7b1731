/*!

Errors raised by the kind and concrete-value core. Every one of them is a logic error in the caller: a well-typed
caller never triggers them, so they are reported immediately and never retried.

*/

use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

use crate::core::kind::Kind;

pub enum KindError {
  /// A user sort with a reserved name, a literal for a kind that has no integral literals, or an unparsable kind
  /// name.
  ConstructionError(String),
  /// The operation is not defined for values of this kind, e.g. the bit width of an unbounded integer or an
  /// element-wise map over a list.
  UnsupportedOperation {
    operation: &'static str,
    kind     : Kind
  },
  /// A binary operation was given operands of incompatible kinds or value variants.
  MismatchedKind {
    operation: &'static str,
    left     : Kind,
    right    : Kind
  },
  /// No random distribution is defined for the kind.
  UnsupportedRandomGeneration(Kind),
}

impl Display for KindError {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {

      KindError::ConstructionError(message) => {
        write!(f, "construction error: {}", message)
      }

      KindError::UnsupportedOperation { operation, kind } => {
        write!(f, "unsupported operation: {} is not defined for kind {}", operation, kind)
      }

      KindError::MismatchedKind { operation, left, right } => {
        write!(f, "mismatched kinds: {} applied to {} and {}", operation, left, right)
      }

      KindError::UnsupportedRandomGeneration(kind) => {
        write!(f, "unsupported random generation: no random values are defined for kind {}", kind)
      }

    } // end match on `KindError`
  }
}

impl Debug for KindError {
  fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
    Display::fmt(self, f)
  }
}

impl Error for KindError {}
