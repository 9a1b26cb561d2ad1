//! Translation tables with a fixed key schema.

use std::collections::HashMap;

use crate::error::LocaleError;

/// Every key a table must define, with the placeholder tokens its value has
/// to contain.
pub const REQUIRED_KEYS: &[(&str, &[&str])] = &[
    ("role_description", &[]),
    ("empty_note", &[]),
    ("selection_note", &[]),
    ("drop_note", &[]),
    ("sort_number", &["{number}"]),
    ("selected_count", &["{count}", "{items}"]),
    ("dropped_count", &["{count}", "{items}"]),
    ("item_singular", &[]),
    ("item_plural", &[]),
];

/// A validated set of announcement templates for one language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleTable {
    /// Spoken description of a container's role.
    pub role_description: String,
    /// Status text for a container without items.
    pub empty_note: String,
    /// Instructions for selecting items in a container.
    pub selection_note: String,
    /// Instructions for dropping the selection into a container.
    pub drop_note: String,
    /// Label for an item's position in selection order. Contains `{number}`.
    pub sort_number: String,
    /// Selection count. Contains `{count}` and `{items}`.
    pub selected_count: String,
    /// Drop confirmation. Contains `{count}` and `{items}`.
    pub dropped_count: String,
    /// Noun used when the count is one.
    pub item_singular: String,
    /// Noun used for every other count.
    pub item_plural: String,
}

impl LocaleTable {
    /// Build a table from raw key/value pairs, validating the schema.
    ///
    /// Fails on the first missing key, blank value or missing placeholder,
    /// checked in [`REQUIRED_KEYS`] order, and then on any unknown key.
    pub fn from_map<I, K, V>(code: &str, entries: I) -> Result<Self, LocaleError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut map: HashMap<String, String> = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        for (key, placeholders) in REQUIRED_KEYS {
            let Some(value) = map.get(*key) else {
                return Err(LocaleError::MissingKey {
                    code: code.to_string(),
                    key: *key,
                });
            };
            if value.trim().is_empty() {
                return Err(LocaleError::EmptyValue {
                    code: code.to_string(),
                    key: *key,
                });
            }
            if let Some(placeholder) = placeholders.iter().find(|p| !value.contains(**p)) {
                return Err(LocaleError::MissingPlaceholder {
                    code: code.to_string(),
                    key: *key,
                    placeholder: *placeholder,
                });
            }
        }

        let mut unknown: Vec<&String> = map
            .keys()
            .filter(|k| !REQUIRED_KEYS.iter().any(|(known, _)| *known == k.as_str()))
            .collect();
        unknown.sort();
        if let Some(key) = unknown.first() {
            return Err(LocaleError::UnknownKey {
                code: code.to_string(),
                key: (*key).clone(),
            });
        }

        let mut take = |key: &str| map.remove(key).unwrap_or_default();
        Ok(Self {
            role_description: take("role_description"),
            empty_note: take("empty_note"),
            selection_note: take("selection_note"),
            drop_note: take("drop_note"),
            sort_number: take("sort_number"),
            selected_count: take("selected_count"),
            dropped_count: take("dropped_count"),
            item_singular: take("item_singular"),
            item_plural: take("item_plural"),
        })
    }

    /// Build a table from a flat JSON object of strings.
    pub fn from_json(code: &str, json: &str) -> Result<Self, LocaleError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| LocaleError::Json {
                code: code.to_string(),
                message: e.to_string(),
            })?;
        let serde_json::Value::Object(object) = value else {
            return Err(LocaleError::Json {
                code: code.to_string(),
                message: "expected an object at the top level".to_string(),
            });
        };

        let mut entries = Vec::with_capacity(object.len());
        for (key, value) in object {
            match value {
                serde_json::Value::String(s) => entries.push((key, s)),
                _ => {
                    return Err(LocaleError::NotAString {
                        code: code.to_string(),
                        key,
                    });
                }
            }
        }
        Self::from_map(code, entries)
    }

    /// Noun matching `count`.
    pub fn noun(&self, count: usize) -> &str {
        if count == 1 {
            &self.item_singular
        } else {
            &self.item_plural
        }
    }

    /// "N items selected" style text.
    pub fn selected_count(&self, count: usize) -> String {
        let count_text = count.to_string();
        interpolate(
            &self.selected_count,
            &[("count", count_text.as_str()), ("items", self.noun(count))],
        )
    }

    /// Drop confirmation text.
    pub fn dropped_count(&self, count: usize) -> String {
        let count_text = count.to_string();
        interpolate(
            &self.dropped_count,
            &[("count", count_text.as_str()), ("items", self.noun(count))],
        )
    }

    /// Label for the `number`th item in selection order (1-based).
    pub fn sort_number(&self, number: usize) -> String {
        let number_text = number.to_string();
        interpolate(&self.sort_number, &[("number", number_text.as_str())])
    }
}

/// Replace `{name}` tokens in `template`.
///
/// Substitution is single-pass: text inserted for one token is never
/// rescanned, and tokens without an argument are left intact.
pub fn interpolate(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let Some(end) = tail.find('}') else {
            out.push_str(tail);
            return out;
        };
        let name = &tail[1..end];
        match args.iter().find(|(k, _)| *k == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&tail[..=end]),
        }
        rest = &tail[end + 1..];
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolate_leaves_unknown_tokens() {
        assert_eq!(interpolate("{a} and {b}", &[("a", "x")]), "x and {b}");
    }

    #[test]
    fn interpolate_is_single_pass() {
        assert_eq!(interpolate("{a}", &[("a", "{a}")]), "{a}");
    }

    #[test]
    fn interpolate_unterminated_brace() {
        assert_eq!(interpolate("3 {items", &[("items", "x")]), "3 {items");
    }
}
