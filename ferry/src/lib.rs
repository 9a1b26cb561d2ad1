pub mod announce;
pub mod arbiter;
pub mod clock;
pub mod config;
mod engine;
pub mod error;
pub mod focus;
pub mod geometry;
pub mod host;
pub mod input;
pub mod instance;
pub mod registry;
pub mod selection;
pub mod transfer;

pub use config::{FerryConfig, PlatformPatches, configure_platform_patches, platform_patches};
pub use engine::Mutation;
pub use error::ConfigError;
pub use instance::{Ferry, FerryBuilder, FerryEvent, InstanceId};

pub use ferry_locale as locale;

pub mod prelude {
    pub use crate::announce::Channel;
    pub use crate::arbiter::Arbiter;
    pub use crate::clock::{Clock, ManualClock, SystemClock};
    pub use crate::config::{FerryConfig, PlatformPatches};
    pub use crate::engine::Mutation;
    pub use crate::error::ConfigError;
    pub use crate::focus::Direction;
    pub use crate::geometry::Rect;
    pub use crate::host::memory::MemoryHost;
    pub use crate::host::{Host, ScrollAlign};
    pub use crate::input::{Input, Key, Modifiers};
    pub use crate::instance::{Ferry, FerryEvent};
    pub use crate::registry::{
        ContainerId, ContainerRole, ContainerSpec, ItemId, ItemRole, ItemSpec, ModePolicy, SelectionMode,
    };
    pub use crate::selection::{Multimode, SelectionModifiers, TransferOrder};

    pub use ferry_locale::{LocaleError, Locales};
}
