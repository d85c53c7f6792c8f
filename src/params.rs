//! Parameter declaration and query-payload construction.
//!
//! Endpoint methods declare their parameters as an explicit ordered list of
//! named entries ([`Params`]), then hand the list to [`build_payload`] (query
//! shaping) and [`fill_path`] (path-template substitution). Both functions
//! are pure: same input, same output, no side effects.
//!
//! Shaping rules applied by [`build_payload`]:
//!
//! - list values become one comma-separated string, input order preserved,
//!   no padding (`["bitcoin", "eth"]` → `"bitcoin,eth"`)
//! - an entry named `self` (the call-receiver key, possible in extension
//!   maps mirrored from other-language bindings) is never sent
//! - entries declared path-embedded are consumed by [`fill_path`] and never
//!   appear in the query output
//! - a trailing-underscore alias (`type_`) is renamed to its wire name
//!   (`type`); the alias form is how callers spell wire names that collide
//!   with Rust keywords in extension entries
//! - entries left at the [`ParamValue::Unset`] sentinel (and empty lists,
//!   the unset form of a list-typed parameter) are omitted; entries with a
//!   concrete value always surface, including defaulted booleans

use crate::error::CoinGeckoError;

/// The call-receiver key: never sent over the wire.
const RECEIVER_KEY: &str = "self";

/// A single declared parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    List(Vec<String>),
    /// Declared but not supplied by the caller.
    Unset,
}

impl ParamValue {
    /// Wire representation, or `None` for unset values.
    fn to_wire(&self) -> Option<String> {
        match self {
            ParamValue::Str(s) => Some(s.clone()),
            ParamValue::Int(v) => Some(v.to_string()),
            ParamValue::Float(v) => Some(v.to_string()),
            ParamValue::Bool(v) => Some(v.to_string()),
            ParamValue::List(items) if items.is_empty() => None,
            ParamValue::List(items) => Some(items.join(",")),
            ParamValue::Unset => None,
        }
    }

    /// Whether the value counts as missing for [`Params::require`].
    fn is_missing(&self) -> bool {
        match self {
            ParamValue::Str(s) => s.is_empty(),
            ParamValue::List(items) => items.is_empty(),
            ParamValue::Unset => true,
            _ => false,
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Str(value.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(value.into())
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::Int(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::List(value)
    }
}

impl From<&[String]> for ParamValue {
    fn from(value: &[String]) -> Self {
        ParamValue::List(value.to_vec())
    }
}

impl From<&[&str]> for ParamValue {
    fn from(value: &[&str]) -> Self {
        ParamValue::List(value.iter().map(|s| s.to_string()).collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    name: String,
    value: ParamValue,
    in_path: bool,
}

/// Ordered set of parameters declared by one endpoint call.
///
/// Transient: built per call, consumed by [`build_payload`]/[`fill_path`],
/// discarded when the request completes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params {
    entries: Vec<Entry>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a query parameter with a concrete value.
    pub fn set(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.entries.push(Entry {
            name: name.into(),
            value: value.into(),
            in_path: false,
        });
        self
    }

    /// Declare an optional query parameter; `None` records the unset
    /// sentinel, which [`build_payload`] omits from the output.
    pub fn set_opt<V: Into<ParamValue>>(self, name: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.set(name, value),
            None => self.set(name, ParamValue::Unset),
        }
    }

    /// Declare a path-embedded parameter, consumed by [`fill_path`] and never
    /// sent as a query parameter.
    pub fn path(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.push(Entry {
            name: name.into(),
            value: ParamValue::Str(value.into()),
            in_path: true,
        });
        self
    }

    /// Append every entry of `extra` after the declared set.
    pub fn extend(mut self, extra: &Params) -> Self {
        self.entries.extend(extra.entries.iter().cloned());
        self
    }

    /// Fail fast when a required parameter is unset or empty.
    pub fn require(&self, name: &str) -> Result<(), CoinGeckoError> {
        let supplied = self
            .entries
            .iter()
            .any(|e| e.name == name && !e.value.is_missing());
        if supplied {
            Ok(())
        } else {
            Err(CoinGeckoError::MissingArgument(name.to_string()))
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

/// Build the wire query payload from the declared parameter set, with
/// extension parameters appended after the declared entries.
pub fn build_payload(locals: &Params, extra: Option<&Params>) -> Vec<(String, String)> {
    let entries = locals
        .entries
        .iter()
        .chain(extra.into_iter().flat_map(|p| p.entries.iter()));

    let mut pairs = Vec::new();
    for entry in entries {
        if entry.in_path || entry.name == RECEIVER_KEY {
            continue;
        }
        if let Some(value) = entry.value.to_wire() {
            pairs.push((wire_name(&entry.name), value));
        }
    }
    pairs
}

/// Substitute `{name}` segments of a path template from path-declared
/// parameters.
///
/// A template variable with no matching path entry is a caller bug and fails
/// before any network call. Text outside braces is copied through verbatim.
pub fn fill_path(template: &str, params: &Params) -> Result<String, CoinGeckoError> {
    let mut path = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        path.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            // Unmatched brace: treat the remainder as literal text.
            path.push('{');
            path.push_str(after);
            return Ok(path);
        };
        let name = &after[..close];
        let value = params
            .entries
            .iter()
            .find(|e| e.in_path && e.name == name)
            .map(|e| &e.value)
            .filter(|v| !v.is_missing())
            .and_then(ParamValue::to_wire)
            .ok_or_else(|| CoinGeckoError::MissingArgument(name.to_string()))?;
        path.push_str(&value);
        rest = &after[close + 1..];
    }
    path.push_str(rest);
    Ok(path)
}

/// Trim the reserved-word-avoiding alias from a parameter name.
fn wire_name(name: &str) -> String {
    name.strip_suffix('_').unwrap_or(name).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_joined_in_input_order_without_padding() {
        let params = Params::new().set("ids", ["eth", "dot"].as_slice());
        let payload = build_payload(&params, None);
        assert_eq!(payload, vec![("ids".to_string(), "eth,dot".to_string())]);
    }

    #[test]
    fn test_receiver_entry_never_sent() {
        let params = Params::new().set("vs_currencies", "usd");
        let extra = Params::new().set("self", "receiver").set("x_cg_demo", "1");
        let payload = build_payload(&params, Some(&extra));
        assert_eq!(
            payload,
            vec![
                ("vs_currencies".to_string(), "usd".to_string()),
                ("x_cg_demo".to_string(), "1".to_string()),
            ]
        );
    }

    #[test]
    fn test_path_entry_excluded_from_query() {
        let params = Params::new().path("id", "bitcoin").set("vs_currency", "usd");
        let payload = build_payload(&params, None);
        assert!(payload.iter().all(|(name, _)| name != "id"));
        assert_eq!(payload.len(), 1);
    }

    #[test]
    fn test_build_payload_is_idempotent() {
        let params = Params::new()
            .path("id", "bitcoin")
            .set("ids", ["bitcoin", "eth"].as_slice())
            .set("sparkline", false)
            .set_opt("precision", None::<String>);
        assert_eq!(build_payload(&params, None), build_payload(&params, None));
    }

    #[test]
    fn test_trailing_underscore_alias_renamed() {
        let params = Params::new().set("from_", 1_392_577_232_u64).set("type_", "fiat");
        let payload = build_payload(&params, None);
        assert_eq!(
            payload,
            vec![
                ("from".to_string(), "1392577232".to_string()),
                ("type".to_string(), "fiat".to_string()),
            ]
        );
    }

    #[test]
    fn test_unset_omitted_and_defaults_surface() {
        let params = Params::new()
            .set("include_market_cap", false)
            .set_opt("precision", None::<String>)
            .set("interval", ParamValue::Unset);
        let payload = build_payload(&params, None);
        assert_eq!(
            payload,
            vec![("include_market_cap".to_string(), "false".to_string())]
        );
    }

    #[test]
    fn test_empty_list_is_unset() {
        let params = Params::new().set("ids", Vec::<String>::new());
        assert!(build_payload(&params, None).is_empty());
    }

    #[test]
    fn test_declaration_order_preserved() {
        let params = Params::new()
            .set("vs_currency", "usd")
            .set("days", 30_u32)
            .set("interval", "daily");
        let names: Vec<_> = build_payload(&params, None)
            .into_iter()
            .map(|(name, _)| name)
            .collect();
        assert_eq!(names, ["vs_currency", "days", "interval"]);
    }

    #[test]
    fn test_require_set_entry() {
        let params = Params::new().set("ids", ["bitcoin"].as_slice());
        assert!(params.require("ids").is_ok());
    }

    #[test]
    fn test_require_fails_for_empty_list() {
        let params = Params::new().set("ids", Vec::<String>::new());
        let err = params.require("ids").unwrap_err();
        assert!(matches!(err, CoinGeckoError::MissingArgument(name) if name == "ids"));
    }

    #[test]
    fn test_require_fails_for_undeclared_entry() {
        let params = Params::new();
        assert!(params.require("vs_currency").is_err());
    }

    #[test]
    fn test_fill_path_substitutes_path_entries() {
        let params = Params::new().path("id", "bitcoin");
        let path = fill_path("coins/{id}/market_chart/range", &params).unwrap();
        assert_eq!(path, "coins/bitcoin/market_chart/range");
    }

    #[test]
    fn test_fill_path_missing_entry_fails() {
        let err = fill_path("coins/{id}", &Params::new()).unwrap_err();
        assert!(matches!(err, CoinGeckoError::MissingArgument(name) if name == "id"));
    }

    #[test]
    fn test_fill_path_ignores_query_entry_with_same_name() {
        // Only path-declared entries fill templates.
        let params = Params::new().set("id", "bitcoin");
        assert!(fill_path("coins/{id}", &params).is_err());
    }

    #[test]
    fn test_fill_path_without_variables() {
        let path = fill_path("simple/price", &Params::new()).unwrap();
        assert_eq!(path, "simple/price");
    }
}
