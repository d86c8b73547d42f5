//! The merge primitive shared by every composite resolution mode.

use super::value::{Loaded, MergedArguments};

/// Merges `secondary` into `primary`, with `secondary` winning on key
/// collisions.
///
/// - A `secondary` that was not found leaves `primary` untouched, absent or
///   not.
/// - An empty or absent `primary` yields `secondary` as is.
/// - Otherwise every key of `secondary` is written over `primary`.
///
/// Neither input is modified in place; both are taken by value and the
/// result owns whatever it kept.
pub fn combine(
    primary: Loaded<MergedArguments>,
    secondary: Loaded<MergedArguments>,
) -> Loaded<MergedArguments> {
    let Loaded::Found(secondary) = secondary else {
        return primary;
    };

    match primary {
        Loaded::Found(mut merged) if !merged.is_empty() => {
            merged.overlay(secondary);
            Loaded::Found(merged)
        }
        _ => Loaded::Found(secondary),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::ArgValue;
    use serde_json::json;

    fn args(pairs: &[(&str, serde_json::Value)]) -> MergedArguments {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), ArgValue::Json(value.clone())))
            .collect()
    }

    #[test]
    fn test_absent_secondary_keeps_primary() {
        let primary = Loaded::Found(args(&[("a", json!(1))]));
        assert_eq!(combine(primary.clone(), Loaded::NotFound), primary);
        assert_eq!(
            combine(Loaded::NotFound, Loaded::NotFound),
            Loaded::NotFound
        );
    }

    #[test]
    fn test_empty_primary_yields_secondary() {
        let secondary = args(&[("b", json!(2))]);
        assert_eq!(
            combine(Loaded::Found(MergedArguments::new()), Loaded::Found(secondary.clone())),
            Loaded::Found(secondary.clone())
        );
        assert_eq!(
            combine(Loaded::NotFound, Loaded::Found(secondary.clone())),
            Loaded::Found(secondary)
        );
    }

    #[test]
    fn test_empty_secondary_keeps_primary_contents() {
        let primary = args(&[("a", json!(1))]);
        assert_eq!(
            combine(Loaded::Found(primary.clone()), Loaded::Found(MergedArguments::new())),
            Loaded::Found(primary)
        );
    }

    #[test]
    fn test_secondary_wins_collisions() {
        let primary = args(&[("a", json!(1)), ("b", json!(2))]);
        let secondary = args(&[("b", json!(20)), ("c", json!(30))]);

        let merged = combine(Loaded::Found(primary), Loaded::Found(secondary));
        assert_eq!(
            merged,
            Loaded::Found(args(&[("a", json!(1)), ("b", json!(20)), ("c", json!(30))]))
        );
    }

    #[test]
    fn test_combine_is_idempotent() {
        let primary = args(&[("a", json!(1))]);
        let secondary = args(&[("a", json!(2)), ("b", json!(3))]);

        let once = combine(Loaded::Found(primary), Loaded::Found(secondary.clone()));
        let twice = combine(once.clone(), Loaded::Found(secondary));
        assert_eq!(once, twice);
    }
}
