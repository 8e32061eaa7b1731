/*!

The sort ("kind") and concrete-value model.

Every value the engine manipulates carries a [`Kind`](kind::Kind). Symbolic terms are built and type-checked against
kinds elsewhere; once a term resolves to a constant, through model extraction, constant folding, or random sampling,
it is represented here as a [`CW`](concrete::CW).

|                      | type                   | module                 |
|:---------------------|:-----------------------|:-----------------------|
| logical sort         | `Kind`                 | `kind`                 |
| kind of a value/type | `HasKind`, `KindOf`    | `kind::has_kind`       |
| user sorts           | `UserSortBuilder`      | `kind::user_sort`      |
| constant payload     | `CWVal`, `AlgReal`     | `concrete`             |
| constant with kind   | `CW`                   | `concrete`             |
| generic transforms   | `lift_cw`, `map_cw`, … | `concrete::lift`       |
| optimization results | `GeneralizedCW`        | `concrete::generalized`|
| sampling             | `random_cw`            | `concrete::random`     |

Everything here except random sampling is a pure function of immutable data.

*/

pub mod kind;
pub mod concrete;
pub mod format;
