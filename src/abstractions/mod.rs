/*!

Types/type aliases that abstract over the implementing backing type, plus small utilities shared across the crate.

User-sort names and enumeration constructor names are interned: they are compared and hashed constantly (every `Kind`
equality check walks them) but created only once per user type. The backing implementation is chosen here so the rest
of the crate only ever names `IString`.

*/

pub mod log;
mod string_join;

// Interned string.
pub use string_cache::DefaultAtom as IString;

// Join sequences with a separator
pub use string_join::{join_iter, join_string};
