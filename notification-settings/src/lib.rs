mod backend;
mod category;
mod settings;
mod store;

pub use backend::{BackendError, MemoryBackend, SettingsBackend};
pub use category::{NotificationCategory, CATEGORIES, DEFAULT_ENABLED_TYPES};
pub use settings::{EnabledTypes, LoadError, NotificationSettings};
pub use store::{HydrateOutcome, NotificationSettingsStore, Phase, SaveError, STORAGE_KEY};
