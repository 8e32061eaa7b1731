/*!

Generic per-variant transformations of concrete words.

Each helper takes a *handler*: a value implementing one of the traits below with one method per [`CWVal`] variant.
Dispatch is total, with no fallback case, so adding a variant forces every handler to say what it does with it.

| helper      | handler       | result             | fails with                                            |
|:------------|:--------------|:-------------------|:------------------------------------------------------|
| `lift_cw`   | `UnaryLift`   | anything           | never                                                 |
| `lift_cw2`  | `BinaryLift`  | anything           | `MismatchedKind` if the variants differ               |
| `map_cw`    | `UnaryMap`    | normalized `CW`    | `UnsupportedOperation` on lists                       |
| `map_cw2`   | `BinaryMap`   | normalized `CW`    | `MismatchedKind` on differing kinds/variants or lists |

Maps rewrap their result with the input's kind and normalize it, so a handler doing plain integer arithmetic gets
wrap-around for free on bit-vectors.

*/

use num_bigint::BigInt;

use crate::core::{
  concrete::{AlgReal, CWVal, CW},
  kind::KindError
};

/// Produces a value of any type from a concrete value.
pub trait UnaryLift {
  type Output;

  fn alg_real(&mut self, value: &AlgReal) -> Self::Output;
  fn integer(&mut self, value: &BigInt) -> Self::Output;
  fn float(&mut self, value: f32) -> Self::Output;
  fn double(&mut self, value: f64) -> Self::Output;
  fn char(&mut self, value: char) -> Self::Output;
  fn string(&mut self, value: &str) -> Self::Output;
  fn list(&mut self, values: &[CWVal]) -> Self::Output;
  fn user_sort(&mut self, index: Option<usize>, name: &str) -> Self::Output;
}

/// Produces a value of any type from two concrete values of the same variant.
pub trait BinaryLift {
  type Output;

  fn alg_real(&mut self, left: &AlgReal, right: &AlgReal) -> Self::Output;
  fn integer(&mut self, left: &BigInt, right: &BigInt) -> Self::Output;
  fn float(&mut self, left: f32, right: f32) -> Self::Output;
  fn double(&mut self, left: f64, right: f64) -> Self::Output;
  fn char(&mut self, left: char, right: char) -> Self::Output;
  fn string(&mut self, left: &str, right: &str) -> Self::Output;
  fn list(&mut self, left: &[CWVal], right: &[CWVal]) -> Self::Output;
  fn user_sort(&mut self, left: (Option<usize>, &str), right: (Option<usize>, &str)) -> Self::Output;
}

/// Transforms a scalar concrete value into another of the same variant.
pub trait UnaryMap {
  fn alg_real(&mut self, value: AlgReal) -> AlgReal;
  fn integer(&mut self, value: BigInt) -> BigInt;
  fn float(&mut self, value: f32) -> f32;
  fn double(&mut self, value: f64) -> f64;
  fn char(&mut self, value: char) -> char;
  fn string(&mut self, value: String) -> String;
  fn user_sort(&mut self, index: Option<usize>, name: String) -> (Option<usize>, String);
}

/// Combines two scalar concrete values of the same variant into a third.
pub trait BinaryMap {
  fn alg_real(&mut self, left: AlgReal, right: AlgReal) -> AlgReal;
  fn integer(&mut self, left: BigInt, right: BigInt) -> BigInt;
  fn float(&mut self, left: f32, right: f32) -> f32;
  fn double(&mut self, left: f64, right: f64) -> f64;
  fn char(&mut self, left: char, right: char) -> char;
  fn string(&mut self, left: String, right: String) -> String;
  fn user_sort(&mut self, left: (Option<usize>, String), right: (Option<usize>, String)) -> (Option<usize>, String);
}

pub fn lift_cw<L: UnaryLift + ?Sized>(lift: &mut L, cw: &CW) -> L::Output {
  match &cw.value {
    CWVal::AlgReal(value)        => lift.alg_real(value),
    CWVal::Integer(value)        => lift.integer(value),
    CWVal::Float(value)          => lift.float(*value),
    CWVal::Double(value)         => lift.double(*value),
    CWVal::Char(value)           => lift.char(*value),
    CWVal::String(value)         => lift.string(value),
    CWVal::List(values)          => lift.list(values),
    CWVal::UserSort(index, name) => lift.user_sort(*index, name),
  }
}

pub fn lift_cw2<L: BinaryLift + ?Sized>(lift: &mut L, left: &CW, right: &CW) -> Result<L::Output, KindError> {
  let output = match (&left.value, &right.value) {
    (CWVal::AlgReal(a),       CWVal::AlgReal(b))       => lift.alg_real(a, b),
    (CWVal::Integer(a),       CWVal::Integer(b))       => lift.integer(a, b),
    (CWVal::Float(a),         CWVal::Float(b))         => lift.float(*a, *b),
    (CWVal::Double(a),        CWVal::Double(b))        => lift.double(*a, *b),
    (CWVal::Char(a),          CWVal::Char(b))          => lift.char(*a, *b),
    (CWVal::String(a),        CWVal::String(b))        => lift.string(a, b),
    (CWVal::List(a),          CWVal::List(b))          => lift.list(a, b),
    (CWVal::UserSort(ai, an), CWVal::UserSort(bi, bn)) => lift.user_sort((*ai, an.as_str()), (*bi, bn.as_str())),
    _ => return Err(mismatch("binary lift", left, right)),
  };
  Ok(output)
}

pub fn map_cw<M: UnaryMap + ?Sized>(map: &mut M, cw: &CW) -> Result<CW, KindError> {
  let value = match cw.value.clone() {
    CWVal::AlgReal(value)        => CWVal::AlgReal(map.alg_real(value)),
    CWVal::Integer(value)        => CWVal::Integer(map.integer(value)),
    CWVal::Float(value)          => CWVal::Float(map.float(value)),
    CWVal::Double(value)         => CWVal::Double(map.double(value)),
    CWVal::Char(value)           => CWVal::Char(map.char(value)),
    CWVal::String(value)         => CWVal::String(map.string(value)),
    CWVal::UserSort(index, name) => {
      let (index, name) = map.user_sort(index, name);
      CWVal::UserSort(index, name)
    }
    CWVal::List(_) => {
      return Err(
        KindError::UnsupportedOperation {
          operation: "element-wise map",
          kind     : cw.kind.clone(),
        }
      );
    }
  };
  Ok(CW::new(cw.kind.clone(), value))
}

pub fn map_cw2<M: BinaryMap + ?Sized>(map: &mut M, left: &CW, right: &CW) -> Result<CW, KindError> {
  if !left.same_kind(right) {
    return Err(mismatch("binary map", left, right));
  }

  let value = match (left.value.clone(), right.value.clone()) {
    (CWVal::AlgReal(a),       CWVal::AlgReal(b))       => CWVal::AlgReal(map.alg_real(a, b)),
    (CWVal::Integer(a),       CWVal::Integer(b))       => CWVal::Integer(map.integer(a, b)),
    (CWVal::Float(a),         CWVal::Float(b))         => CWVal::Float(map.float(a, b)),
    (CWVal::Double(a),        CWVal::Double(b))        => CWVal::Double(map.double(a, b)),
    (CWVal::Char(a),          CWVal::Char(b))          => CWVal::Char(map.char(a, b)),
    (CWVal::String(a),        CWVal::String(b))        => CWVal::String(map.string(a, b)),
    (CWVal::UserSort(ai, an), CWVal::UserSort(bi, bn)) => {
      let (index, name) = map.user_sort((ai, an), (bi, bn));
      CWVal::UserSort(index, name)
    }
    // Lists are deliberately not combinable here, even with each other.
    _ => return Err(mismatch("binary map", left, right)),
  };
  Ok(CW::new(left.kind.clone(), value))
}

fn mismatch(operation: &'static str, left: &CW, right: &CW) -> KindError {
  crate::log::trace!(
    4,
    "{} rejected {} value against {} value",
    operation,
    left.value.variant_name(),
    right.value.variant_name()
  );
  KindError::MismatchedKind {
    operation,
    left : left.kind.clone(),
    right: right.kind.clone(),
  }
}
