/*!

A [`Kind`] is the logical sort of a value the engine manipulates: a boolean, a sized bit-vector, an unbounded integer,
a real, a float or double, a character, a string, a list of some other kind, or a user-defined sort.

Every `Kind` has two names:

 - its *display name* (`SBool`, `SWord8`, `SInt16`, `SInteger`, `[SWord8]`, `Color`, …), produced by `Display` and
   parsed back by `FromStr` for the built-in kinds, and
 - its *wire name* (`Bool`, `(_ BitVec 8)`, `(Seq Int)`, …), the sort as it is written in a solver query, produced
   by [`Kind::smt_sort`].

User sorts are identified by name. A user `Kind` wraps a [`UserSort`], whose fields are private: the only way to
obtain one is through the [`UserSortBuilder`](user_sort::UserSortBuilder), which refuses names that would collide
with the built-in display names above.

## Lifecycle and Ownership

`Kind`s are plain immutable values. They are built once per logical type and thereafter cloned, compared, and hashed
structurally. User-sort and constructor names are interned, so cloning and comparing a `Kind` is cheap even for user
sorts.

## See Also...

 - [`HasKind`](has_kind::HasKind) and [`KindOf`](has_kind::KindOf) map values and Rust types to their `Kind`.
 - A [`CW`](crate::core::concrete::CW) pairs a `Kind` with a concrete value of that kind.

*/

pub mod has_kind;
pub mod user_sort;
pub(crate) mod kind_error;

use std::{
  fmt::{Display, Formatter},
  str::FromStr
};

use crate::abstractions::IString;
pub use kind_error::KindError;

/// The logical sort of a value.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum Kind {
  Bool,
  BitVector {
    signed: bool,
    width : usize
  },
  /// Unbounded (mathematical) integers.
  Integer,
  /// Algebraic reals.
  Real,
  /// IEEE-754 single precision.
  Float,
  /// IEEE-754 double precision.
  Double,
  Char,
  String,
  List(Box<Kind>),
  UserSort(UserSort),
}

/// A user-defined sort, as frozen by [`UserSortBuilder`](user_sort::UserSortBuilder). It cannot be assembled by
/// hand, so a user sort's name never parses as a built-in kind.
///
/// ```compile_fail
/// use symkind::{IString, Kind, UserSort, UserSortShape};
///
/// let forged = Kind::UserSort(UserSort { name: IString::from("SWord8"), shape: UserSortShape::Opaque(String::new()) });
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct UserSort {
  name : IString,
  shape: UserSortShape,
}

impl UserSort {
  pub fn name(&self) -> &IString {
    &self.name
  }

  pub fn shape(&self) -> &UserSortShape {
    &self.shape
  }
}

/// What is known about a user-defined sort.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum UserSortShape {
  /// Uninterpreted. The string says why the sort is not an enumeration.
  Opaque(String),
  /// A finite enumeration. Constructor names are in declaration order.
  Enumerated(Vec<IString>),
}

/// The display-name prefixes reserved for built-in kinds. `SInt` also covers `SInteger`; both are listed because both
/// are names in their own right.
pub const RESERVED_KIND_PREFIXES: [&str; 10] = [
  "SBool", "SWord", "SInt", "SInteger", "SReal", "SFloat", "SDouble", "SString", "SChar", "["
];

impl Kind {
  /// An unsigned bit-vector of the given width.
  pub fn word(width: usize) -> Kind {
    Kind::BitVector { signed: false, width }
  }

  /// A signed bit-vector of the given width.
  pub fn int(width: usize) -> Kind {
    Kind::BitVector { signed: true, width }
  }

  pub fn list(element: Kind) -> Kind {
    Kind::List(Box::new(element))
  }

  /// The sort as written in a solver query.
  pub fn smt_sort(&self) -> String {
    match self {
      Kind::Bool                        => "Bool".to_string(),
      Kind::BitVector { width, .. }     => format!("(_ BitVec {})", width),
      Kind::Integer                     => "Int".to_string(),
      Kind::Real                        => "Real".to_string(),
      Kind::Float                       => "(_ FloatingPoint 8 24)".to_string(),
      Kind::Double                      => "(_ FloatingPoint 11 53)".to_string(),
      Kind::String                      => "String".to_string(),
      Kind::Char                        => "(_ BitVec 8)".to_string(),
      Kind::List(element)               => format!("(Seq {})", element.smt_sort()),
      Kind::UserSort(sort)              => sort.name.to_string(),
    }
  }

  /// The display name without the leading `S` of the built-in kinds: `Word16`, `[Word8]`, `Bool`. User sorts keep
  /// their name unmodified. This is the name used in ` :: <kind>` suffixes.
  pub fn base_name(&self) -> String {
    match self {
      Kind::List(element)         => format!("[{}]", element.base_name()),
      Kind::UserSort(sort)        => sort.name.to_string(),
      builtin                     => {
        let name = builtin.to_string();
        match name.strip_prefix('S') {
          Some(stripped) => stripped.to_string(),
          None           => name,
        }
      }
    }
  }

  /// The default signedness of the kind. This is only a default: it does not imply that signedness is meaningful for
  /// the kind.
  pub fn has_sign(&self) -> bool {
    match self {
      Kind::Bool                     => false,
      Kind::BitVector { signed, .. } => *signed,
      Kind::Integer
      | Kind::Real
      | Kind::Float
      | Kind::Double                 => true,
      _                              => false,
    }
  }

  /// The width of a bit-vector kind. Only bit-vectors have a width in this model; every other kind, including those
  /// with a natural machine width such as `Bool`, `Float`, or `Char`, is an error.
  pub fn bit_width(&self) -> Result<usize, KindError> {
    match self {
      Kind::BitVector { width, .. } => Ok(*width),
      other => Err(
        KindError::UnsupportedOperation {
          operation: "bit width",
          kind     : other.clone(),
        }
      )
    }
  }

  /// Does the kind have finitely many inhabitants of a fixed size?
  pub fn is_bounded(&self) -> bool {
    matches!(self, Kind::Bool | Kind::BitVector { .. } | Kind::Char)
  }
}

impl Display for Kind {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    match self {
      Kind::Bool                                    => write!(f, "SBool"),
      Kind::BitVector { signed: false, width }      => write!(f, "SWord{}", width),
      Kind::BitVector { signed: true, width }       => write!(f, "SInt{}", width),
      Kind::Integer                                 => write!(f, "SInteger"),
      Kind::Real                                    => write!(f, "SReal"),
      Kind::Float                                   => write!(f, "SFloat"),
      Kind::Double                                  => write!(f, "SDouble"),
      Kind::String                                  => write!(f, "SString"),
      Kind::Char                                    => write!(f, "SChar"),
      Kind::List(element)                           => write!(f, "[{}]", element),
      Kind::UserSort(sort)                          => write!(f, "{}", sort.name),
    }
  }
}

/// Parses the display name of a built-in kind. User sorts cannot be recovered from their name alone, so any name
/// that is not a built-in display name is an error.
impl FromStr for Kind {
  type Err = KindError;

  fn from_str(name: &str) -> Result<Self, Self::Err> {
    let unknown = || KindError::ConstructionError(format!("{:?} is not the name of a built-in kind", name));

    if let Some(inner) = name.strip_prefix('[') {
      let element = inner.strip_suffix(']').ok_or_else(unknown)?;
      return Ok(Kind::list(element.parse()?));
    }

    let parse_width = |digits: &str| -> Result<usize, KindError> {
      if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(unknown());
      }
      digits.parse::<usize>().map_err(|_| unknown())
    };

    match name {
      "SBool"    => Ok(Kind::Bool),
      "SInteger" => Ok(Kind::Integer),
      "SReal"    => Ok(Kind::Real),
      "SFloat"   => Ok(Kind::Float),
      "SDouble"  => Ok(Kind::Double),
      "SString"  => Ok(Kind::String),
      "SChar"    => Ok(Kind::Char),
      _ => {
        if let Some(digits) = name.strip_prefix("SWord") {
          Ok(Kind::word(parse_width(digits)?))
        } else if let Some(digits) = name.strip_prefix("SInt") {
          Ok(Kind::int(parse_width(digits)?))
        } else {
          Err(unknown())
        }
      }
    }
  }
}
