/*!

Generalized values: the results of optimization queries.

An optimum need not be a plain constant. It can be unbounded (`oo`), infinitesimally close to a bound (`3 - epsilon`),
or only known to lie in an interval (`[0 .. oo]`). An [`ExtCW`] is an expression tree over these. A
[`GeneralizedCW`] is either an ordinary [`CW`] or such an expression.

The trees are not simplified. They are produced by the optimizer-result reader and only ever rendered, so rendering
preserves their shape, with two exceptions: `-1 * oo` is shown as `-oo` and `-1 * epsilon` as `-epsilon`.

## Kinds

The kind of an expression is the kind of its leftmost operand: addition and multiplication are assumed to be over a
single kind. An interval has the kind of its lower bound.

*/

use std::fmt::{Display, Formatter};

use num_bigint::BigInt;
use num_rational::BigRational;

use crate::core::{
  concrete::{cw::show_cw, AlgReal, CWVal, CW},
  format::{FormatStyle, Formattable},
  kind::{has_kind::HasKind, Kind}
};

/// An extended value: a constant, or an expression over infinity, epsilon, and intervals.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum ExtCW {
  Infinite(Kind),
  Epsilon(Kind),
  Interval(Box<ExtCW>, Box<ExtCW>),
  /// A plain constant inside a larger expression. Never the top of a [`GeneralizedCW`].
  Bounded(CW),
  Sum(Box<ExtCW>, Box<ExtCW>),
  Product(Box<ExtCW>, Box<ExtCW>),
}

/// An optimization result.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum GeneralizedCW {
  Extended(ExtCW),
  Regular(CW),
}

impl ExtCW {
  pub fn interval(lower: ExtCW, upper: ExtCW) -> ExtCW {
    ExtCW::Interval(Box::new(lower), Box::new(upper))
  }

  pub fn sum(left: ExtCW, right: ExtCW) -> ExtCW {
    ExtCW::Sum(Box::new(left), Box::new(right))
  }

  pub fn product(left: ExtCW, right: ExtCW) -> ExtCW {
    ExtCW::Product(Box::new(left), Box::new(right))
  }

  /// Is this the constant `-1` of an integer or real kind?
  fn is_minus_one(&self) -> bool {
    match self {
      ExtCW::Bounded(CW { kind: Kind::Integer, value: CWVal::Integer(v) }) => *v == BigInt::from(-1),
      ExtCW::Bounded(CW { kind: Kind::Real, value: CWVal::AlgReal(AlgReal::Exact(r)) }) => {
        *r == BigRational::from_integer(BigInt::from(-1))
      }
      _ => false,
    }
  }

  fn render(&self, nested: bool, show_kind: bool) -> String {
    let annotate = |is_interval: bool, kind: Kind, rendered: String| -> String {
      match (show_kind, is_interval) {
        (false, _)    => rendered,
        (true, true)  => format!("{} :: [{}]", rendered, kind.base_name()),
        (true, false) => format!("{} :: {}", rendered, kind.base_name()),
      }
    };
    let parenthesize = |rendered: String| -> String {
      if nested { format!("({})", rendered) } else { rendered }
    };

    match self {

      ExtCW::Infinite(kind) => annotate(false, kind.clone(), "oo".to_string()),

      ExtCW::Epsilon(kind) => annotate(false, kind.clone(), "epsilon".to_string()),

      ExtCW::Interval(lower, upper) => {
        let rendered = format!("[{} .. {}]", lower.render(false, false), upper.render(false, false));
        annotate(true, lower.kind(), rendered)
      }

      ExtCW::Bounded(cw) => show_cw(show_kind, cw),

      // Negated infinity and epsilon are recognized before the generic product rule.
      ExtCW::Product(left, right) if left.is_minus_one() && matches!(**right, ExtCW::Infinite(_)) => {
        annotate(false, self.kind(), "-oo".to_string())
      }

      ExtCW::Product(left, right) if left.is_minus_one() && matches!(**right, ExtCW::Epsilon(_)) => {
        annotate(false, self.kind(), "-epsilon".to_string())
      }

      ExtCW::Sum(left, right) => {
        let left_rendered  = left.render(true, false);
        let right_rendered = right.render(true, false);
        let rendered = match right_rendered.strip_prefix('-') {
          Some(negated) => format!("{} - {}", left_rendered, negated),
          None          => format!("{} + {}", left_rendered, right_rendered),
        };
        parenthesize(annotate(false, left.kind(), rendered))
      }

      ExtCW::Product(left, right) => {
        let rendered = format!("{} * {}", left.render(true, false), right.render(true, false));
        parenthesize(annotate(false, left.kind(), rendered))
      }

    }
  }
}

impl GeneralizedCW {
  /// Wraps an extended value, unwrapping a top-level `Bounded` into `Regular`.
  pub fn from_ext(value: ExtCW) -> GeneralizedCW {
    match value {
      ExtCW::Bounded(cw) => GeneralizedCW::Regular(cw),
      other              => GeneralizedCW::Extended(other),
    }
  }

  pub fn is_regular(&self) -> bool {
    matches!(self, GeneralizedCW::Regular(_))
  }
}

impl From<CW> for GeneralizedCW {
  fn from(cw: CW) -> Self {
    GeneralizedCW::Regular(cw)
  }
}

impl HasKind for ExtCW {
  fn kind(&self) -> Kind {
    match self {
      ExtCW::Infinite(kind)
      | ExtCW::Epsilon(kind)     => kind.clone(),
      ExtCW::Interval(lower, _)  => lower.kind(),
      ExtCW::Bounded(cw)         => cw.kind.clone(),
      ExtCW::Sum(left, _)
      | ExtCW::Product(left, _)  => left.kind(),
    }
  }
}

impl HasKind for GeneralizedCW {
  fn kind(&self) -> Kind {
    match self {
      GeneralizedCW::Extended(value) => value.kind(),
      GeneralizedCW::Regular(cw)     => cw.kind.clone(),
    }
  }
}

impl Formattable for ExtCW {
  fn repr(&self, style: FormatStyle) -> String {
    self.render(false, style == FormatStyle::Typed)
  }
}

impl Formattable for GeneralizedCW {
  fn repr(&self, style: FormatStyle) -> String {
    match self {
      GeneralizedCW::Extended(value) => value.repr(style),
      GeneralizedCW::Regular(cw)     => cw.repr(style),
    }
  }
}

impl Display for ExtCW {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.repr(FormatStyle::Default))
  }
}

impl Display for GeneralizedCW {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.repr(FormatStyle::Default))
  }
}

/// Renders a generalized value, optionally suffixed with its kind.
pub fn show_generalized(show_kind: bool, value: &GeneralizedCW) -> String {
  value.repr(FormatStyle::from_show_kind(show_kind))
}


#[cfg(test)]
mod tests {
  use super::*;

  fn integer(v: i64) -> ExtCW {
    ExtCW::Bounded(CW::new(Kind::Integer, CWVal::Integer(BigInt::from(v))))
  }

  fn real(v: i64) -> ExtCW {
    ExtCW::Bounded(CW::new(Kind::Real, CWVal::AlgReal(AlgReal::from_integer(BigInt::from(v)))))
  }

  fn oo() -> ExtCW {
    ExtCW::Infinite(Kind::Integer)
  }

  fn epsilon() -> ExtCW {
    ExtCW::Epsilon(Kind::Integer)
  }

  fn show(show_kind: bool, value: ExtCW) -> String {
    show_generalized(show_kind, &GeneralizedCW::from_ext(value))
  }

  #[test]
  fn atoms() {
    assert_eq!(show(false, oo()), "oo");
    assert_eq!(show(true, oo()), "oo :: Integer");
    assert_eq!(show(false, epsilon()), "epsilon");
  }

  #[test]
  fn negated_infinity_and_epsilon() {
    assert_eq!(show(false, ExtCW::product(integer(-1), oo())), "-oo");
    assert_eq!(show(false, ExtCW::product(integer(-1), epsilon())), "-epsilon");
    assert_eq!(show(true, ExtCW::product(real(-1), ExtCW::Infinite(Kind::Real))), "-oo :: Real");
    assert_eq!(show(false, ExtCW::product(real(-1), ExtCW::Epsilon(Kind::Real))), "-epsilon");
    // Only -1 triggers the rewrite.
    assert_eq!(show(false, ExtCW::product(integer(-2), oo())), "-2 * oo");
  }

  #[test]
  fn sums_fold_negatives_into_subtraction() {
    assert_eq!(show(false, ExtCW::sum(integer(3), epsilon())), "3 + epsilon");
    assert_eq!(show(false, ExtCW::sum(integer(3), ExtCW::product(integer(-1), epsilon()))), "3 - epsilon");
    assert_eq!(show(false, ExtCW::sum(integer(3), integer(-2))), "3 - 2");
    assert_eq!(show(true, ExtCW::sum(integer(3), epsilon())), "3 + epsilon :: Integer");
  }

  #[test]
  fn nested_operations_are_parenthesized() {
    assert_eq!(show(false, ExtCW::product(integer(2), ExtCW::sum(oo(), integer(1)))), "2 * (oo + 1)");
    assert_eq!(show(false, ExtCW::sum(ExtCW::product(integer(2), oo()), integer(1))), "(2 * oo) + 1");
  }

  #[test]
  fn intervals() {
    let interval = ExtCW::interval(integer(0), oo());
    assert_eq!(show(false, interval.clone()), "[0 .. oo]");
    assert_eq!(show(true, interval), "[0 .. oo] :: [Integer]");

    let open_below = ExtCW::interval(ExtCW::product(integer(-1), oo()), ExtCW::sum(integer(5), epsilon()));
    assert_eq!(show(false, open_below), "[-oo .. 5 + epsilon]");
  }

  #[test]
  fn bounded_values_are_regular_at_the_top() {
    let value = GeneralizedCW::from_ext(integer(7));
    assert!(value.is_regular());
    assert_eq!(show_generalized(true, &value), "7 :: Integer");
    assert!(!GeneralizedCW::from_ext(oo()).is_regular());
  }

  #[test]
  fn kinds_come_from_the_left() {
    assert_eq!(ExtCW::sum(real(1), oo()).kind(), Kind::Real);
    assert_eq!(ExtCW::interval(integer(0), ExtCW::Infinite(Kind::Real)).kind(), Kind::Integer);
    assert_eq!(GeneralizedCW::from_ext(ExtCW::Epsilon(Kind::Double)).kind(), Kind::Double);
  }
}
