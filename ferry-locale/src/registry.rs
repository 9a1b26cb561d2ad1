//! Registry of translation tables keyed by normalized language code.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::builtin::{DEFAULT_LOCALE, english};
use crate::error::LocaleError;
use crate::negotiate::negotiate;
use crate::table::LocaleTable;

static CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z]{1,8}(-[a-z0-9]{1,8})*$").expect("language code pattern is valid")
});

/// Normalize a language code: trim and lower-case, then check its shape.
pub fn normalize_code(code: &str) -> Result<String, LocaleError> {
    let code = code.trim().to_lowercase();
    if code.is_empty() {
        return Err(LocaleError::EmptyCode);
    }
    if !CODE_PATTERN.is_match(&code) {
        return Err(LocaleError::MalformedCode(code));
    }
    Ok(code)
}

/// Translation tables available to an instance.
///
/// Always contains the built-in English table under [`DEFAULT_LOCALE`].
/// Registration validates the whole table before inserting it, so a failed
/// call leaves the registry exactly as it was.
#[derive(Debug, Clone)]
pub struct Locales {
    tables: BTreeMap<String, LocaleTable>,
    default_key: String,
}

impl Default for Locales {
    fn default() -> Self {
        let mut tables = BTreeMap::new();
        tables.insert(DEFAULT_LOCALE.to_string(), english());
        Self {
            tables,
            default_key: DEFAULT_LOCALE.to_string(),
        }
    }
}

impl Locales {
    /// Create a registry holding only the built-in table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) a table from raw key/value pairs.
    pub fn register<I, K, V>(&mut self, code: &str, entries: I) -> Result<(), LocaleError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let code = normalize_code(code).inspect_err(|e| log::warn!("{}", e))?;
        let table = LocaleTable::from_map(&code, entries).inspect_err(|e| log::warn!("{}", e))?;
        self.insert(code, table);
        Ok(())
    }

    /// Register (or replace) a table from a flat JSON object.
    pub fn register_json(&mut self, code: &str, json: &str) -> Result<(), LocaleError> {
        let code = normalize_code(code).inspect_err(|e| log::warn!("{}", e))?;
        let table = LocaleTable::from_json(&code, json).inspect_err(|e| log::warn!("{}", e))?;
        self.insert(code, table);
        Ok(())
    }

    /// Register an already-built table.
    pub fn register_table(&mut self, code: &str, table: LocaleTable) -> Result<(), LocaleError> {
        let code = normalize_code(code).inspect_err(|e| log::warn!("{}", e))?;
        let as_map = [
            ("role_description", table.role_description),
            ("empty_note", table.empty_note),
            ("selection_note", table.selection_note),
            ("drop_note", table.drop_note),
            ("sort_number", table.sort_number),
            ("selected_count", table.selected_count),
            ("dropped_count", table.dropped_count),
            ("item_singular", table.item_singular),
            ("item_plural", table.item_plural),
        ];
        let table = LocaleTable::from_map(&code, as_map).inspect_err(|e| log::warn!("{}", e))?;
        self.insert(code, table);
        Ok(())
    }

    fn insert(&mut self, code: String, table: LocaleTable) {
        log::debug!("Registered locale table '{}'", code);
        self.tables.insert(code, table);
    }

    /// Look up a table by code (case-insensitive).
    pub fn get(&self, code: &str) -> Option<&LocaleTable> {
        self.tables.get(&code.trim().to_lowercase())
    }

    /// Check whether a code is registered.
    pub fn contains(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    /// All registered codes, sorted.
    pub fn codes(&self) -> Vec<&str> {
        self.tables.keys().map(String::as_str).collect()
    }

    /// Number of registered tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Always false: the default table cannot be removed.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Key of the fallback table.
    pub fn default_key(&self) -> &str {
        &self.default_key
    }

    /// The fallback table.
    pub fn default_table(&self) -> &LocaleTable {
        self.tables
            .get(&self.default_key)
            .unwrap_or_else(|| unreachable!("default locale table is always registered"))
    }

    /// Negotiate the best registered key for a ranked list of wanted tags.
    pub fn negotiate<W: AsRef<str>>(&self, wanted: &[W]) -> &str {
        let available = self.codes();
        negotiate(wanted, &available, &self.default_key)
    }

    /// Negotiate using the caller precedence: element tag, then document tag,
    /// then platform tag. Blank entries are discarded.
    pub fn resolve(
        &self,
        element: Option<&str>,
        document: Option<&str>,
        platform: Option<&str>,
    ) -> &str {
        let wanted: Vec<String> = [element, document, platform]
            .into_iter()
            .flatten()
            .map(|tag| tag.trim().to_lowercase())
            .filter(|tag| !tag.is_empty())
            .collect();
        self.negotiate(&wanted)
    }

    /// The table for a key returned by [`Locales::negotiate`], or the default.
    pub fn table(&self, key: &str) -> &LocaleTable {
        self.get(key).unwrap_or_else(|| self.default_table())
    }
}
