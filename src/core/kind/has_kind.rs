/*!

The kind capability: a mapping from values, and from Rust types, to their [`Kind`].

 - [`HasKind`] is implemented by anything that *has* a kind at run time: a `Kind` itself, a concrete word, a
   generalized value, and every Rust type that also implements [`KindOf`]. All of the kind predicates are provided
   methods defined in terms of [`HasKind::kind`].
 - [`KindOf`] is the static counterpart, answering "what is the kind of values of this type" without needing a
   value. It is what makes `Vec<T>` work even when the vector is empty.

User-defined types implement both traits by returning the `Kind` frozen by a
[`UserSortBuilder`](crate::core::kind::user_sort::UserSortBuilder):

```
use once_cell::sync::Lazy;
use symkind::{HasKind, Kind, KindOf, UserSortBuilder};

#[derive(Debug)]
enum Color { Red, Green }

impl std::fmt::Display for Color {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{:?}", self)
  }
}

impl std::str::FromStr for Color {
  type Err = ();
  fn from_str(s: &str) -> Result<Self, ()> {
    match s { "Red" => Ok(Color::Red), "Green" => Ok(Color::Green), _ => Err(()) }
  }
}

static COLOR_KIND: Lazy<Kind> = Lazy::new(|| {
  UserSortBuilder::new("Color")
      .constructor("Red", 0)
      .constructor("Green", 0)
      .build::<Color>()
      .expect("Color is not a reserved name")
});

impl KindOf for Color {
  fn kind_of() -> Kind { COLOR_KIND.clone() }
}

impl HasKind for Color {
  fn kind(&self) -> Kind { Color::kind_of() }
}

assert!(Color::Red.is_user_sort());
assert_eq!(Color::kind_of().smt_sort(), "Color");
```

*/

use num_bigint::BigInt;

use crate::core::{
  concrete::AlgReal,
  kind::{Kind, KindError}
};

/// A value with a kind.
pub trait HasKind {
  fn kind(&self) -> Kind;

  fn is_boolean(&self) -> bool {
    matches!(self.kind(), Kind::Bool)
  }

  fn is_bit_vector(&self) -> bool {
    matches!(self.kind(), Kind::BitVector { .. })
  }

  /// Is this an unbounded integer? Bit-vectors are not.
  fn is_integer(&self) -> bool {
    matches!(self.kind(), Kind::Integer)
  }

  fn is_real(&self) -> bool {
    matches!(self.kind(), Kind::Real)
  }

  fn is_float(&self) -> bool {
    matches!(self.kind(), Kind::Float)
  }

  fn is_double(&self) -> bool {
    matches!(self.kind(), Kind::Double)
  }

  fn is_char(&self) -> bool {
    matches!(self.kind(), Kind::Char)
  }

  fn is_string(&self) -> bool {
    matches!(self.kind(), Kind::String)
  }

  fn is_list(&self) -> bool {
    matches!(self.kind(), Kind::List(_))
  }

  /// Is this an opaque or enumerated user sort?
  fn is_user_sort(&self) -> bool {
    matches!(self.kind(), Kind::UserSort(_))
  }

  /// See [`Kind::has_sign`].
  fn has_sign(&self) -> bool {
    self.kind().has_sign()
  }

  /// See [`Kind::bit_width`].
  fn int_size_of(&self) -> Result<usize, KindError> {
    self.kind().bit_width()
  }
}

/// A type whose values all have the same kind.
pub trait KindOf {
  fn kind_of() -> Kind;
}

impl HasKind for Kind {
  fn kind(&self) -> Kind {
    self.clone()
  }
}

/// Implements `KindOf` and `HasKind` for types whose kind is a constant expression.
macro_rules! implement_kind_of {
  ($($type:ty => $kind:expr),+ $(,)?) => {
    $(
      impl KindOf for $type {
        fn kind_of() -> Kind {
          $kind
        }
      }

      impl HasKind for $type {
        fn kind(&self) -> Kind {
          <$type as KindOf>::kind_of()
        }
      }
    )+
  };
}

implement_kind_of!(
  bool    => Kind::Bool,
  u8      => Kind::word(8),
  u16     => Kind::word(16),
  u32     => Kind::word(32),
  u64     => Kind::word(64),
  u128    => Kind::word(128),
  i8      => Kind::int(8),
  i16     => Kind::int(16),
  i32     => Kind::int(32),
  i64     => Kind::int(64),
  i128    => Kind::int(128),
  BigInt  => Kind::Integer,
  AlgReal => Kind::Real,
  f32     => Kind::Float,
  f64     => Kind::Double,
  char    => Kind::Char,
  String  => Kind::String,
);

impl<T: KindOf> KindOf for Vec<T> {
  fn kind_of() -> Kind {
    Kind::list(T::kind_of())
  }
}

impl<T: KindOf> HasKind for Vec<T> {
  fn kind(&self) -> Kind {
    Self::kind_of()
  }
}
