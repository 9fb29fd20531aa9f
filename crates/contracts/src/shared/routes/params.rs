use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Values substituted into a path template, keyed by placeholder name
/// (without the leading `:`).
///
/// Keeps insertion order. Inserting a key twice replaces the first value in
/// place instead of adding a second entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
    entries: Vec<(String, String)>,
}

impl RouteParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`RouteParams::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl ToString) {
        let key = key.into();
        let value = value.to_string();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Builds parameters from a typed route struct.
    ///
    /// The value must serialize to a flat object. `null` fields are skipped,
    /// strings/numbers/booleans are stringified, anything nested is rejected.
    pub fn from_serializable<T: Serialize + ?Sized>(value: &T) -> anyhow::Result<Self> {
        let json = serde_json::to_value(value).context("route parameters are not serializable")?;
        let Value::Object(map) = json else {
            bail!("route parameters must serialize to an object, got {json}");
        };

        let mut params = Self::new();
        for (key, value) in map {
            match value {
                Value::Null => {}
                Value::String(s) => params.insert(key, s),
                Value::Number(n) => params.insert(key, n),
                Value::Bool(b) => params.insert(key, b),
                other => bail!("route parameter `{key}` must be a scalar value, got {other}"),
            }
        }
        Ok(params)
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for RouteParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

/// Parameters of routes scoped to a single company.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyRoute {
    pub company: String,
}

/// Parameters of routes that may or may not be scoped to a company.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionalCompanyRoute {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_existing_key() {
        let mut params = RouteParams::new().with("company", "acme").with("tab", 2);
        params.insert("company", "globex");

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("company"), Some("globex"));
        assert_eq!(params.get("tab"), Some("2"));
        assert_eq!(
            params.iter().map(|(k, _)| k).collect::<Vec<_>>(),
            vec!["company", "tab"]
        );
    }

    #[test]
    fn test_from_iterator() {
        let params: RouteParams = [("id", 7), ("page", 3)].into_iter().collect();
        assert_eq!(params.get("id"), Some("7"));
        assert_eq!(params.get("page"), Some("3"));
        assert!(!params.contains_key("missing"));
    }

    #[test]
    fn test_from_typed_route() {
        let params = RouteParams::from_serializable(&CompanyRoute {
            company: "acme".to_string(),
        })
        .unwrap();
        assert_eq!(params.get("company"), Some("acme"));

        let empty = RouteParams::from_serializable(&OptionalCompanyRoute::default()).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_from_serializable_stringifies_scalars_and_skips_null() {
        let value = serde_json::json!({ "id": 42, "active": true, "name": "x", "gone": null });
        let params = RouteParams::from_serializable(&value).unwrap();

        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.get("active"), Some("true"));
        assert_eq!(params.get("name"), Some("x"));
        assert!(!params.contains_key("gone"));
    }

    #[test]
    fn test_from_serializable_rejects_non_objects() {
        assert!(RouteParams::from_serializable(&"plain").is_err());
        assert!(RouteParams::from_serializable(&serde_json::json!({ "nested": { "a": 1 } })).is_err());
    }
}
