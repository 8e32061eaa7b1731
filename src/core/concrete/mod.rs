/*!

Concrete values: what a symbolic computation becomes once it resolves to a constant.

 - [`CWVal`] holds one constant per family of kinds, with solver-model-consistent equality and ordering.
 - [`CW`] pairs a `CWVal` with its [`Kind`](crate::core::kind::Kind) and keeps fixed-width integers normalized.
 - [`lift`] dispatches generic transformations on the value variant.
 - [`ExtCW`]/[`GeneralizedCW`] extend `CW` with infinity, epsilon, and intervals for optimization results.
 - [`random`] samples values of a given kind.

*/

mod alg_real;
mod cw_val;
pub(crate) mod cw;
pub mod lift;
pub mod generalized;
pub mod random;

pub use alg_real::AlgReal;
pub use cw_val::CWVal;
pub use cw::{cw_false, cw_true, show_cw, CW};
pub use generalized::{show_generalized, ExtCW, GeneralizedCW};
