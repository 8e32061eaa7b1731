/*!

Sorts and concrete values for a symbolic, SMT-backed computation engine.

See the [`core`](crate::core) module for an overview.

*/

pub mod abstractions;
pub mod core;

// We re-export abstractions that are meant to be used publicly.
pub use abstractions::{
  log,
  IString
};

pub use crate::core::{
  concrete::{
    cw_false,
    cw_true,
    lift::{lift_cw, lift_cw2, map_cw, map_cw2, BinaryLift, BinaryMap, UnaryLift, UnaryMap},
    random::{random_cw, random_cw_val, random_cw_with, RandomConfig},
    show_cw,
    show_generalized,
    AlgReal,
    CWVal,
    ExtCW,
    GeneralizedCW,
    CW
  },
  format::{FormatStyle, Formattable},
  kind::{
    has_kind::{HasKind, KindOf},
    user_sort::{Constructor, UserSortBuilder},
    Kind,
    KindError,
    UserSort,
    UserSortShape,
    RESERVED_KIND_PREFIXES
  }
};
