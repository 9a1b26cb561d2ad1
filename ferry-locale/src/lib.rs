pub mod builtin;
pub mod error;
pub mod negotiate;
pub mod registry;
pub mod table;

pub use builtin::{DEFAULT_LOCALE, english};
pub use error::LocaleError;
pub use negotiate::{negotiate, subcodes};
pub use registry::{Locales, normalize_code};
pub use table::{LocaleTable, REQUIRED_KEYS, interpolate};
