//! The resolved style record.
//!
//! An [`EffectiveStyle`] is a flat property → value map. Property names are
//! normalized from CSS kebab-case to camelCase on every write and lookup
//! (`font-size` and `fontSize` address the same slot), so downstream
//! consumers and the JSON output share one naming convention.
//!
//! Cascade application is value-oriented: [`EffectiveStyle::apply`] returns
//! a new record rather than mutating in place, which keeps rule folding in
//! the cascade a pure left fold.

use std::collections::BTreeMap;

/// A resolved set of style properties for one element.
///
/// Backed by a `BTreeMap` so iteration (and therefore serialization and
/// test output) is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EffectiveStyle {
    props: BTreeMap<String, String>,
}

impl EffectiveStyle {
    /// An empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a property by either kebab-case or camelCase name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.props.get(&normalize_property(name)).map(String::as_str)
    }

    /// Look up a property, falling back to `default` when absent.
    #[must_use]
    pub fn get_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.get(name).unwrap_or(default)
    }

    /// Return a new record with `name` set to `value`.
    ///
    /// The receiving record is left untouched. Later applications of the
    /// same property shadow earlier ones, which is what gives the cascade
    /// its last-match-wins behavior.
    #[must_use]
    pub fn apply(&self, name: &str, value: &str) -> Self {
        let mut next = self.clone();
        next.set(name, value);
        next
    }

    /// Set a property in place. Used when seeding defaults; the cascade
    /// itself goes through [`apply`](Self::apply).
    pub fn set(&mut self, name: &str, value: &str) {
        let _ = self
            .props
            .insert(normalize_property(name), value.trim().to_string());
    }

}

/// Normalize a CSS property name to camelCase.
///
/// `"font-size"` → `"fontSize"`, `"border-top-width"` →
/// `"borderTopWidth"`. Names without hyphens pass through unchanged, so
/// already-normalized names are stable under re-normalization.
#[must_use]
pub fn normalize_property(name: &str) -> String {
    let name = name.trim();
    if !name.contains('-') {
        return name.to_string();
    }
    let mut out = String::with_capacity(name.len());
    let mut upper_next = false;
    for ch in name.chars() {
        if ch == '-' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_kebab_case() {
        assert_eq!(normalize_property("font-size"), "fontSize");
        assert_eq!(normalize_property("border-top-width"), "borderTopWidth");
        assert_eq!(normalize_property("color"), "color");
        assert_eq!(normalize_property("fontSize"), "fontSize");
    }

    #[test]
    fn apply_returns_new_record() {
        let base = EffectiveStyle::new();
        let derived = base.apply("font-size", "12px");
        assert!(base.get("fontSize").is_none());
        assert_eq!(derived.get("fontSize"), Some("12px"));
        assert_eq!(derived.get("font-size"), Some("12px"));
    }

    #[test]
    fn later_application_shadows_earlier() {
        let style = EffectiveStyle::new()
            .apply("color", "red")
            .apply("color", "blue");
        assert_eq!(style.get("color"), Some("blue"));
    }
}
