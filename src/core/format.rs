/*!

Concrete words and generalized values are rendered either bare (`10`) or annotated with their kind (`10 :: Word16`),
depending on whether the reader can already see the kind from context. This module provides a unified API for both.

*/


use std::fmt::Display;

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum FormatStyle {
  #[default]
  Default, // The value alone
  Typed,   // The value followed by ` :: <kind>`
}

impl FormatStyle {
  /// The style for the `show_kind` flag of the `show_*` functions.
  pub fn from_show_kind(show_kind: bool) -> FormatStyle {
    if show_kind { FormatStyle::Typed } else { FormatStyle::Default }
  }
}

pub trait Formattable {
  /// Writes a text representation of `self` according to the given `FormatStyle`.
  fn repr(&self, style: FormatStyle) -> String;
}

impl Display for dyn Formattable {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", Formattable::repr(self, FormatStyle::Default))
  }
}
