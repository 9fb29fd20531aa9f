use super::params::RouteParams;
use anyhow::bail;
use serde::Serialize;
use std::fmt;

/// Prefix of a named placeholder inside a path template (`/companies/:company`).
pub const PLACEHOLDER_MARKER: char = ':';

/// Named path templates of the application.
///
/// The string values are what the router mounts and what links point to,
/// so they must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paths {
    Base,
    NotFound,

    CompanyList,
    NewCompany,
    EditCompany,

    DocumentList,
    NewDocument,

    Controls,
    ControlsBusinessServices,
    ControlsStakeholders,
    ControlsStakeholderGroups,
    ControlsTags,
}

impl Paths {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Paths::Base => "/",
            Paths::NotFound => "/not-found",

            Paths::CompanyList => "/companies",
            Paths::NewCompany => "/companies/~new",
            Paths::EditCompany => "/companies/:company",

            Paths::DocumentList => "/documents",
            Paths::NewDocument => "/documents/~new",

            Paths::Controls => "/controls",
            Paths::ControlsBusinessServices => "/controls/business-services",
            Paths::ControlsStakeholders => "/controls/stakeholders",
            Paths::ControlsStakeholderGroups => "/controls/stakeholder-groups",
            Paths::ControlsTags => "/controls/tags",
        }
    }

    pub fn all() -> Vec<Paths> {
        vec![
            Paths::Base,
            Paths::NotFound,
            Paths::CompanyList,
            Paths::NewCompany,
            Paths::EditCompany,
            Paths::DocumentList,
            Paths::NewDocument,
            Paths::Controls,
            Paths::ControlsBusinessServices,
            Paths::ControlsStakeholders,
            Paths::ControlsStakeholderGroups,
            Paths::ControlsTags,
        ]
    }

    /// Reverse lookup by the exact template string.
    pub fn from_path(path: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.as_str() == path)
    }

    pub fn placeholders(&self) -> Vec<&'static str> {
        placeholder_names(self.as_str())
    }

    pub fn format(&self, params: &RouteParams) -> String {
        format_path(self, params)
    }
}

impl AsRef<str> for Paths {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Paths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_placeholder_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Names of all `:name` tokens in `template`, in order of appearance.
pub fn placeholder_names(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(pos) = rest.find(PLACEHOLDER_MARKER) {
        let after = &rest[pos + PLACEHOLDER_MARKER.len_utf8()..];
        let len = after
            .find(|c: char| !is_placeholder_char(c))
            .unwrap_or(after.len());
        if len > 0 {
            names.push(&after[..len]);
        }
        rest = &after[len..];
    }
    names
}

/// Substitutes `:key` markers in `template` with the values from `params`.
///
/// Every occurrence is replaced. Keys that do not appear in the template are
/// ignored, markers without a matching key are left as is, and there is no
/// way to escape a literal `:`.
///
/// A key matches a marker only when it covers the whole placeholder token,
/// so `{id}` leaves `:identifier` untouched and `{id, idType}` fills
/// `/items/:id/:idType` regardless of insertion order. Keys are tried
/// longest first. Substituted text is never scanned again.
pub fn format_path(template: impl AsRef<str>, params: &RouteParams) -> String {
    let template = template.as_ref();

    let mut keys: Vec<(&str, &str)> = params.iter().filter(|(k, _)| !k.is_empty()).collect();
    // stable: equal lengths keep insertion order
    keys.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    let mut url = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(pos) = rest.find(PLACEHOLDER_MARKER) {
        url.push_str(&rest[..pos]);
        let after = &rest[pos + PLACEHOLDER_MARKER.len_utf8()..];
        let token_matches = |key: &str| {
            after.starts_with(key)
                && !after[key.len()..].starts_with(is_placeholder_char)
        };
        match keys.iter().find(|(key, _)| token_matches(*key)) {
            Some((key, value)) => {
                url.push_str(value);
                rest = &after[key.len()..];
            }
            None => {
                url.push(PLACEHOLDER_MARKER);
                rest = after;
            }
        }
    }
    url.push_str(rest);
    url
}

/// Placeholder names of `template` that `params` has no exact key for.
///
/// Every name reported here is left literally in the output of [`format_path`].
pub fn unresolved_placeholders(template: impl AsRef<str>, params: &RouteParams) -> Vec<String> {
    placeholder_names(template.as_ref())
        .into_iter()
        .filter(|name| !params.contains_key(name))
        .map(str::to_string)
        .collect()
}

/// Strict variant of [`format_path`]: fails instead of producing a URL with
/// leftover markers.
pub fn try_format_path(template: impl AsRef<str>, params: &RouteParams) -> anyhow::Result<String> {
    let template = template.as_ref();
    let unresolved = unresolved_placeholders(template, params);
    if !unresolved.is_empty() {
        bail!(
            "path `{template}` has unresolved placeholders: {}",
            unresolved.join(", ")
        );
    }
    Ok(format_path(template, params))
}

/// Formats `path` from a typed route struct such as [`super::CompanyRoute`].
pub fn format_route<T: Serialize + ?Sized>(path: Paths, route: &T) -> anyhow::Result<String> {
    let params = RouteParams::from_serializable(route)?;
    try_format_path(path, &params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::routes::CompanyRoute;

    #[test]
    fn test_path_values_are_stable() {
        assert_eq!(Paths::Base.as_str(), "/");
        assert_eq!(Paths::NotFound.as_str(), "/not-found");
        assert_eq!(Paths::CompanyList.as_str(), "/companies");
        assert_eq!(Paths::NewCompany.as_str(), "/companies/~new");
        assert_eq!(Paths::DocumentList.as_str(), "/documents");
        assert_eq!(Paths::NewDocument.as_str(), "/documents/~new");
        assert_eq!(Paths::ControlsTags.to_string(), "/controls/tags");
    }

    #[test]
    fn test_from_path_round_trips_every_entry() {
        for path in Paths::all() {
            assert_eq!(Paths::from_path(path.as_str()), Some(path));
        }
        assert_eq!(Paths::from_path("/companies/acme"), None);
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(Paths::EditCompany.placeholders(), vec!["company"]);
        assert!(Paths::NewCompany.placeholders().is_empty());
        assert_eq!(
            placeholder_names("/a/:first/b/:second_2.json"),
            vec!["first", "second_2"]
        );
        assert!(placeholder_names("/a/:/b").is_empty());
    }

    #[test]
    fn test_format_without_placeholders_is_unchanged() {
        assert_eq!(
            format_path(Paths::NewCompany, &RouteParams::new()),
            "/companies/~new"
        );
    }

    #[test]
    fn test_format_substitutes_values() {
        let params = RouteParams::new().with("company", "acme");
        assert_eq!(Paths::EditCompany.format(&params), "/companies/acme");
    }

    #[test]
    fn test_format_replaces_every_occurrence() {
        let params = RouteParams::new().with("id", 5);
        assert_eq!(format_path("/a/:id/b/:id", &params), "/a/5/b/5");
    }

    #[test]
    fn test_longest_key_wins_regardless_of_order() {
        let expected = "/items/7/sku";

        let short_first = RouteParams::new().with("id", "7").with("idType", "sku");
        assert_eq!(format_path("/items/:id/:idType", &short_first), expected);

        let long_first = RouteParams::new().with("idType", "sku").with("id", "7");
        assert_eq!(format_path("/items/:id/:idType", &long_first), expected);
    }

    #[test]
    fn test_unknown_keys_are_noops() {
        let params = RouteParams::new().with("company", "acme").with("tab", "x");
        assert_eq!(format_path(Paths::DocumentList, &params), "/documents");
    }

    #[test]
    fn test_missing_keys_leave_marker() {
        let params = RouteParams::new().with("other", "x");
        assert_eq!(
            format_path(Paths::EditCompany, &params),
            "/companies/:company"
        );
    }

    #[test]
    fn test_substituted_values_are_not_rescanned() {
        let params = RouteParams::new().with("a", ":b").with("b", "oops");
        assert_eq!(format_path("/x/:a", &params), "/x/:b");
    }

    #[test]
    fn test_shorter_key_does_not_consume_longer_marker() {
        let params = RouteParams::new().with("id", "7");
        assert_eq!(
            format_path("/items/:identifier/:id", &params),
            "/items/:identifier/7"
        );
        assert_eq!(
            unresolved_placeholders("/items/:identifier/:id", &params),
            vec!["identifier".to_string()]
        );
        assert!(try_format_path("/items/:identifier", &params).is_err());
    }

    #[test]
    fn test_marker_followed_by_separator_is_replaced() {
        let params = RouteParams::new().with("id", "7");
        assert_eq!(format_path("/files/:id.json", &params), "/files/7.json");
        assert_eq!(format_path("/files/:id-:id", &params), "/files/7-7");
    }

    #[test]
    fn test_try_format_path() {
        assert!(try_format_path(Paths::EditCompany, &RouteParams::new()).is_err());
        assert_eq!(
            try_format_path(Paths::EditCompany, &RouteParams::new().with("company", 12)).unwrap(),
            "/companies/12"
        );
    }

    #[test]
    fn test_format_route() {
        let route = CompanyRoute {
            company: "acme".to_string(),
        };
        assert_eq!(
            format_route(Paths::EditCompany, &route).unwrap(),
            "/companies/acme"
        );
    }
}
