//! Configuration errors.

use ferry_locale::LocaleError;
use thiserror::Error;

/// Errors raised synchronously while setting up an instance.
///
/// These are never retried: the caller fixes the input and builds again.
/// Conditions an end user can trigger at runtime (selecting a disabled item,
/// dropping without a target, ...) are not errors and are absorbed silently.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The host could not resolve the root scope reference.
    #[error("Root scope '{0}' could not be resolved")]
    UnresolvedScope(String),

    /// The builder was not given a host.
    #[error("No host was provided for scope '{0}'")]
    MissingHost(String),

    /// A container was declared without a role.
    #[error("Container '{0}' has no role")]
    ContainerMissingRole(String),

    /// A container was declared without a label reference.
    #[error("Container '{0}' has no label reference")]
    ContainerMissingLabel(String),

    /// A draggable item was declared without a role.
    #[error("Item '{0}' has no role")]
    ItemMissingRole(String),

    /// Two containers share a key.
    #[error("Container key '{0}' is used more than once")]
    DuplicateContainer(String),

    /// Two items share a key.
    #[error("Item key '{0}' is used more than once")]
    DuplicateItem(String),

    /// A mutation referenced a container that is not registered.
    #[error("Unknown container '{0}'")]
    UnknownContainer(String),

    /// A mutation referenced an item that is not registered.
    #[error("Unknown item '{0}'")]
    UnknownItem(String),

    /// Platform patches were configured after an instance was created.
    #[error("Platform patches must be configured before the first instance is created")]
    PatchesLocked,

    /// A locale table failed validation.
    #[error(transparent)]
    Locale(#[from] LocaleError),
}
