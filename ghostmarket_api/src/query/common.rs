//! Shared query infrastructure: the [`Query`] trait, the [`Params`] pair list,
//! and the ordered [`merge`] of endpoint defaults with caller overrides.

/// Ordered query parameters as key/value pairs. Order is preserved all the way
/// into the serialized query string.
pub type Params = Vec<(String, String)>;

/// Trait implemented by all query builders.
pub trait Query {
    /// Returns the set parameters as ordered key/value pairs, in struct field
    /// order. Unset (`None`) fields are omitted entirely, which makes them
    /// inherit the endpoint's default during [`merge`].
    fn params(&self) -> Params;
}

/// Ordered shallow merge of endpoint defaults with caller overrides.
///
/// For each default key, an override with the same key replaces the value in
/// place; override keys that do not appear in the defaults are appended
/// afterwards in their own order. Duplicate override keys keep the first match
/// for replacement and are otherwise appended as-is.
pub fn merge(defaults: Params, overrides: Params) -> Params {
    let mut used = vec![false; overrides.len()];
    let mut out = Vec::with_capacity(defaults.len() + overrides.len());
    for (key, value) in defaults {
        match overrides.iter().position(|(k, _)| *k == key) {
            Some(i) => {
                used[i] = true;
                out.push(overrides[i].clone());
            }
            None => out.push((key, value)),
        }
    }
    for (i, pair) in overrides.into_iter().enumerate() {
        if !used[i] {
            out.push(pair);
        }
    }
    out
}

/// Builds a [`Params`] list from string literals.
pub(crate) fn pairs(items: &[(&str, &str)]) -> Params {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Pushes `key=value` when the value is set.
pub(crate) fn push_opt<T: ToString>(params: &mut Params, key: &str, value: &Option<T>) {
    if let Some(value) = value {
        params.push((key.to_string(), value.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_override_wins_in_place() {
        let merged = merge(
            pairs(&[("limit", "50"), ("offset", "0"), ("order_by", "id")]),
            pairs(&[("offset", "10")]),
        );
        assert_eq!(
            merged,
            pairs(&[("limit", "50"), ("offset", "10"), ("order_by", "id")])
        );
    }

    #[test]
    fn merge_appends_new_keys_after_defaults() {
        let merged = merge(
            pairs(&[("limit", "50")]),
            pairs(&[("chain", "n3"), ("maker", "0xabc")]),
        );
        assert_eq!(
            merged,
            pairs(&[("limit", "50"), ("chain", "n3"), ("maker", "0xabc")])
        );
    }

    #[test]
    fn merge_with_empty_sides() {
        assert_eq!(merge(vec![], pairs(&[("a", "1")])), pairs(&[("a", "1")]));
        assert_eq!(merge(pairs(&[("a", "1")]), vec![]), pairs(&[("a", "1")]));
        assert!(merge(vec![], vec![]).is_empty());
    }
}
