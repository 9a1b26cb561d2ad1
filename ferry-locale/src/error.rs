//! Locale table registration errors.

use thiserror::Error;

/// Errors raised while validating or registering a locale table.
///
/// All of these are configuration errors: they are reported synchronously
/// and leave the registry untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// The language code was empty or whitespace.
    #[error("Locale code is empty")]
    EmptyCode,

    /// The language code is not shaped like a language tag.
    #[error("Locale code '{0}' is not a valid language tag")]
    MalformedCode(String),

    /// A required key is absent.
    #[error("Locale '{code}' is missing required key '{key}'")]
    MissingKey {
        /// Normalized language code.
        code: String,
        /// The missing key.
        key: &'static str,
    },

    /// The table carries a key outside the fixed schema.
    #[error("Locale '{code}' has unknown key '{key}'")]
    UnknownKey {
        /// Normalized language code.
        code: String,
        /// The unexpected key.
        key: String,
    },

    /// A value is empty or only whitespace.
    #[error("Locale '{code}' has an empty value for '{key}'")]
    EmptyValue {
        /// Normalized language code.
        code: String,
        /// The key whose value is blank.
        key: &'static str,
    },

    /// A value is not a string (JSON registration only).
    #[error("Locale '{code}' has a non-string value for '{key}'")]
    NotAString {
        /// Normalized language code.
        code: String,
        /// The key whose value has the wrong type.
        key: String,
    },

    /// A template lacks one of its placeholder tokens.
    #[error("Locale '{code}' template '{key}' is missing placeholder '{placeholder}'")]
    MissingPlaceholder {
        /// Normalized language code.
        code: String,
        /// The template key.
        key: &'static str,
        /// The placeholder token that must appear, e.g. `{count}`.
        placeholder: &'static str,
    },

    /// The JSON payload could not be parsed or is not an object.
    #[error("Locale '{code}' is not a JSON object: {message}")]
    Json {
        /// Normalized language code.
        code: String,
        /// Parser message.
        message: String,
    },
}
