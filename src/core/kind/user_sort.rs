/*!

Construction of user-defined sorts.

A user type is described to the builder by its unqualified name and its constructors, in declaration order, each with
the number of fields it carries. The builder decides whether the type is a finite enumeration or an opaque
(uninterpreted) sort and freezes the answer in a [`UserSort`]. This is the only place user-sort names are
validated, so it should run once per user type and the resulting `Kind` should be kept, not rebuilt.

## Deciding Enumerations

A type is an enumeration only if it has at least one constructor, every constructor is nullary, and every constructor
name survives a trip through the type's own textual parser and printer unchanged. A single constructor that fails
the round trip makes the *whole* sort opaque.

The round-trip requirement is fragile: it depends on the type's `Display` agreeing with its `FromStr`. It is kept
because downstream code relies on enumeration constructors being addressable by their printed name.

*/

use std::{
  fmt::Display,
  str::FromStr
};

use crate::{
  abstractions::IString,
  core::kind::{
    Kind,
    KindError,
    UserSort,
    UserSortShape,
    RESERVED_KIND_PREFIXES
  },
  log::{debug, info}
};

/// Builder decisions are only logged when the global threshold is raised above its default.
const BUILDER_LOG_THRESHOLD: u8 = 4;

/// A constructor of a user type.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Constructor {
  /// For nullary constructors, this is also the exact printed form of the value.
  pub name       : IString,
  pub field_count: usize,
}

/// Collects the structural description of a user type and builds its `Kind`.
#[derive(Clone, Debug)]
pub struct UserSortBuilder {
  name        : IString,
  constructors: Vec<Constructor>,
}

impl UserSortBuilder {
  pub fn new(name: &str) -> Self {
    UserSortBuilder {
      name        : IString::from(name),
      constructors: Vec::new(),
    }
  }

  /// Appends a constructor. Constructors must be given in declaration order.
  pub fn constructor(mut self, name: &str, field_count: usize) -> Self {
    self.constructors.push(
      Constructor {
        name: IString::from(name),
        field_count,
      }
    );
    self
  }

  /// Builds the kind, using `T`'s `FromStr` and `Display` for the enumeration round trip.
  pub fn build<T: FromStr + Display>(self) -> Result<Kind, KindError> {
    self.build_with(|text| text.parse::<T>().ok().map(|value| value.to_string()))
  }

  /// Builds the kind. `reprint` parses a constructor's text and prints the result, returning `None` if the text does
  /// not parse.
  pub fn build_with<F>(self, reprint: F) -> Result<Kind, KindError>
    where F: Fn(&str) -> Option<String>
  {
    if let Some(prefix) = RESERVED_KIND_PREFIXES.iter().find(|prefix| self.name.starts_with(*prefix)) {
      info!(BUILDER_LOG_THRESHOLD, "rejected user sort name {}: reserved prefix {}", self.name, prefix);
      return Err(
        KindError::ConstructionError(
          format!("user sort name {} collides with the reserved sort name prefix {}", self.name, prefix)
        )
      );
    }

    let shape = self.shape(reprint);
    match &shape {
      UserSortShape::Enumerated(names) => {
        debug!(BUILDER_LOG_THRESHOLD, "user sort {} is an enumeration of {} constructors", self.name, names.len())
      }
      UserSortShape::Opaque(reason) => debug!(BUILDER_LOG_THRESHOLD, "user sort {} is opaque: {}", self.name, reason),
    }

    Ok(Kind::UserSort(UserSort { name: self.name, shape }))
  }

  fn shape<F>(&self, reprint: F) -> UserSortShape
    where F: Fn(&str) -> Option<String>
  {
    let is_enumeration = !self.constructors.is_empty()
        && self.constructors.iter().all(|constructor| constructor.field_count == 0);

    if !is_enumeration {
      return UserSortShape::Opaque(format!("{} is not a finite non-empty enumeration", self.name));
    }

    for constructor in self.constructors.iter() {
      let text = &*constructor.name;
      if reprint(text).as_deref() != Some(text) {
        return UserSortShape::Opaque(
          format!("{}: constructor {} is not nullary", self.name, constructor.name)
        );
      }
    }

    UserSortShape::Enumerated(
      self.constructors.iter().map(|constructor| constructor.name.clone()).collect()
    )
  }
}


#[cfg(test)]
mod tests {
  use std::fmt::Formatter;
  use super::*;
  use crate::log::DEFAULT_LOGGING_THRESHOLD;

  #[derive(Debug, PartialEq)]
  enum Direction { North, South, East }

  impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
      write!(f, "{:?}", self)
    }
  }

  impl FromStr for Direction {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
      match s {
        "North" => Ok(Direction::North),
        "South" => Ok(Direction::South),
        "East"  => Ok(Direction::East),
        _       => Err(()),
      }
    }
  }

  /// Parses anything and always prints the constant `shouty`, so no constructor name round-trips.
  struct Shouty;

  impl Display for Shouty {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
      write!(f, "shouty")
    }
  }

  impl FromStr for Shouty {
    type Err = ();

    fn from_str(_: &str) -> Result<Self, Self::Err> {
      Ok(Shouty)
    }
  }

  #[test]
  fn enumeration_keeps_declaration_order() {
    let kind = UserSortBuilder::new("Direction")
        .constructor("South", 0)
        .constructor("North", 0)
        .constructor("East", 0)
        .build::<Direction>()
        .unwrap();

    let expected: Vec<IString> = ["South", "North", "East"].iter().map(|s| IString::from(*s)).collect();
    assert_eq!(kind, Kind::UserSort(UserSort { name: IString::from("Direction"), shape: UserSortShape::Enumerated(expected) }));
  }

  #[test]
  fn fields_make_a_sort_opaque() {
    let kind = UserSortBuilder::new("Shape")
        .constructor("Point", 0)
        .constructor("Circle", 1)
        .build_with(|text| Some(text.to_string()))
        .unwrap();

    match kind {
      Kind::UserSort(UserSort { shape: UserSortShape::Opaque(reason), .. }) => {
        assert_eq!(reason, "Shape is not a finite non-empty enumeration");
      }
      other => panic!("expected an opaque sort, got {:?}", other),
    }
  }

  #[test]
  fn no_constructors_is_opaque() {
    let kind = UserSortBuilder::new("Void").build_with(|text| Some(text.to_string())).unwrap();
    assert!(matches!(kind, Kind::UserSort(UserSort { shape: UserSortShape::Opaque(_), .. })));
  }

  #[test]
  fn failed_round_trip_names_the_constructor() {
    let kind = UserSortBuilder::new("Loud")
        .constructor("Quiet", 0)
        .build::<Shouty>()
        .unwrap();

    match kind {
      Kind::UserSort(UserSort { shape: UserSortShape::Opaque(reason), .. }) => {
        assert!(reason.contains("Quiet"), "{}", reason);
        assert!(reason.contains("not nullary"), "{}", reason);
      }
      other => panic!("expected an opaque sort, got {:?}", other),
    }
  }

  #[test]
  fn one_bad_constructor_spoils_the_enumeration() {
    let kind = UserSortBuilder::new("Direction")
        .constructor("North", 0)
        .constructor("West", 0)
        .build::<Direction>()
        .unwrap();
    assert!(matches!(kind, Kind::UserSort(UserSort { shape: UserSortShape::Opaque(ref reason), .. }) if reason.contains("West")));
  }

  #[test]
  fn reserved_names_are_rejected() {
    for name in ["SBool", "SWord8", "SInt", "SInteger", "SReal", "SFloat", "SDouble", "SString", "SChar", "[Foo]",
                 "SIntX", "SWordy"] {
      let result = UserSortBuilder::new(name).constructor("A", 0).build_with(|text| Some(text.to_string()));
      assert!(matches!(result, Err(KindError::ConstructionError(_))), "{} was accepted", name);
    }

    // Names that merely contain a reserved prefix somewhere else are fine.
    assert!(UserSortBuilder::new("MySInt").build_with(|_| None).is_ok());
    assert!(UserSortBuilder::new("Sx").build_with(|_| None).is_ok());
  }

  #[test]
  fn builder_decisions_are_quiet_by_default() {
    assert!(BUILDER_LOG_THRESHOLD > DEFAULT_LOGGING_THRESHOLD);
  }
}
