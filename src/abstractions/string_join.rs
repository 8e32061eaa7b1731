use std::iter::once;
use std::fmt::Display;

/**
Interleave a separator between the items of an iterator, which doesn't exist in the stdlib. (C.f. `Vec::join(…)`)

The separator is computed from the item that follows it, which lets callers vary the separator by position.

```ignore
let iter = ["SWord8", "SInt16"].iter().cloned();
let joined = join_iter(iter, |_| ", ").collect::<String>();
// "SWord8, SInt16"
```
 */
pub fn join_iter<T>(mut iter: impl Iterator<Item = T>, sep: impl Fn(&T) -> T)
                    -> impl Iterator<Item = T>
{
  iter
      .next()
      .into_iter()
      .chain(iter.flat_map(move |s| once(sep(&s)).chain(once(s))))
}

/// Renders each item with `Display` and joins the results with `sep`.
pub fn join_string<T: Display>(iter: impl Iterator<Item = T>, sep: &str) -> String {
  join_iter(iter.map(|item| item.to_string()), |_| sep.to_string()).collect::<String>()
}
