//! The notification settings store, which owns the current settings and keeps them in sync with
//! storage.

use std::rc::Rc;

use log::{debug, warn};
use thiserror::Error;

use crate::backend::{BackendError, SettingsBackend};
use crate::settings::{EnabledTypes, LoadError, NotificationSettings};

/// Storage key used to save notification settings.
pub const STORAGE_KEY: &str = "ldc-notification-settings";

/// Errors from writing the settings back to storage.
#[derive(Debug, Error)]
pub enum SaveError {
    /// The settings couldn't be serialized.
    #[error("Unable to serialize notification settings: {0}")]
    Serialize(#[from] serde_json::Error),
    /// The backend rejected the write.
    #[error(transparent)]
    Backend(#[from] BackendError),
}

/// Where the store is in its one-time load.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Storage hasn't been read yet. Accessors return the defaults and mutations are ignored.
    #[default]
    Uninitialized,
    /// Storage has been read and the settings reflect it.
    Ready,
}

/// What happened during [`NotificationSettingsStore::hydrate`].
#[derive(Debug)]
pub enum HydrateOutcome {
    /// A stored record was merged over the defaults.
    Loaded,
    /// Nothing was stored, so the defaults stand.
    Empty,
    /// The stored record couldn't be parsed and was ignored.
    Discarded(LoadError),
    /// Storage couldn't be read, so the defaults stand.
    Unreadable(BackendError),
    /// The store was already hydrated; nothing was read.
    AlreadyReady,
}

/// Owns the current [`NotificationSettings`] and writes every change through to a
/// [`SettingsBackend`].
///
/// The store starts out [`Phase::Uninitialized`] holding the compiled-in defaults, so anything
/// rendered before [`hydrate`](Self::hydrate) runs doesn't depend on what's in storage.
#[derive(Debug)]
pub struct NotificationSettingsStore<B> {
    backend: B,
    key: &'static str,
    settings: Rc<NotificationSettings>,
    phase: Phase,
}

impl<B: SettingsBackend> NotificationSettingsStore<B> {
    /// Creates a store which keeps its record at [`STORAGE_KEY`].
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, STORAGE_KEY)
    }

    /// Creates a store which keeps its record at `key`.
    pub fn with_key(backend: B, key: &'static str) -> Self {
        Self {
            backend,
            key,
            settings: Rc::new(NotificationSettings::default()),
            phase: Phase::Uninitialized,
        }
    }

    /// Reads the stored record and merges it over the defaults. Only the first call does
    /// anything; later calls return [`HydrateOutcome::AlreadyReady`].
    ///
    /// Never fails: unreadable storage and unparseable records are logged and the defaults are
    /// kept.
    pub fn hydrate(&mut self) -> HydrateOutcome {
        if self.phase == Phase::Ready {
            return HydrateOutcome::AlreadyReady;
        }
        self.phase = Phase::Ready;

        let raw = match self.backend.read(self.key) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => {
                debug!("No stored notification settings, using defaults");
                return HydrateOutcome::Empty;
            }
            Err(e) => {
                warn!("Failed to read notification settings: {}", e);
                return HydrateOutcome::Unreadable(e);
            }
        };
        match NotificationSettings::from_json_str(&raw) {
            Ok(settings) => {
                self.settings = Rc::new(settings);
                HydrateOutcome::Loaded
            }
            Err(e) => {
                warn!("Failed to parse notification settings: {}", e);
                HydrateOutcome::Discarded(e)
            }
        }
    }

    /// Current load phase.
    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the one-time load has run.
    #[inline]
    pub fn ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    /// The full current record.
    #[inline]
    pub fn settings(&self) -> &Rc<NotificationSettings> {
        &self.settings
    }

    /// Whether system notifications are switched off.
    pub fn is_muted(&self) -> bool {
        self.settings.is_muted()
    }

    /// Whether notification sounds are on.
    pub fn sound_enabled(&self) -> bool {
        self.settings.sound_enabled()
    }

    /// The enabled categories.
    pub fn enabled_types(&self) -> &EnabledTypes {
        self.settings.enabled_types()
    }

    /// Whether the category with the given id produces notifications.
    pub fn is_type_enabled(&self, id: &str) -> bool {
        self.settings.is_type_enabled(id)
    }

    /// Flips the system notifications switch. Returns whether the settings changed.
    pub fn toggle_mute(&mut self) -> bool {
        self.update("toggle_mute", |settings| {
            settings.system_notifications = !settings.system_notifications;
            true
        })
    }

    /// Sets whether notification sounds are on. Returns whether the settings changed.
    pub fn set_sound_enabled(&mut self, enabled: bool) -> bool {
        self.update("set_sound_enabled", |settings| {
            let changed = settings.notification_sound != enabled;
            settings.notification_sound = enabled;
            changed
        })
    }

    /// Enables the category if it's disabled and vice versa. Ids that don't match a known
    /// category are accepted. Returns whether the settings changed.
    pub fn toggle_type(&mut self, id: &str) -> bool {
        self.update("toggle_type", |settings| {
            settings.enabled_types.toggle(id);
            true
        })
    }

    /// Applies `change` and saves the result, even if `change` reports nothing changed.
    fn update(
        &mut self,
        action: &str,
        change: impl FnOnce(&mut NotificationSettings) -> bool,
    ) -> bool {
        if self.phase != Phase::Ready {
            warn!("Ignoring {} before notification settings were loaded", action);
            return false;
        }
        let changed = change(Rc::make_mut(&mut self.settings));
        self.save();
        changed
    }

    /// Saves the current settings. Failures are logged; the in-memory settings are kept either
    /// way.
    fn save(&self) {
        if let Err(e) = self.try_save() {
            warn!("Unable to save notification settings: {}", e);
        }
    }

    fn try_save(&self) -> Result<(), SaveError> {
        let serialized = serde_json::to_string(&*self.settings)?;
        self.backend.write(self.key, &serialized)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use log::{Level, LevelFilter, Log, Metadata, Record};
    use serde_json::json;

    use super::*;
    use crate::backend::MemoryBackend;
    use crate::category::DEFAULT_ENABLED_TYPES;

    fn hydrated(backend: &MemoryBackend) -> NotificationSettingsStore<MemoryBackend> {
        let mut store = NotificationSettingsStore::new(backend.clone());
        store.hydrate();
        store
    }

    /// Parses whatever is currently stored.
    fn stored(backend: &MemoryBackend) -> NotificationSettings {
        let raw = backend.get(STORAGE_KEY).expect("settings were written");
        NotificationSettings::from_json_str(&raw).expect("stored settings parse")
    }

    /// Backend whose reads or writes always fail.
    #[derive(Default)]
    struct FailingBackend {
        inner: MemoryBackend,
        fail_reads: bool,
        write_attempts: Cell<usize>,
    }

    impl SettingsBackend for FailingBackend {
        fn read(&self, key: &str) -> Result<Option<String>, BackendError> {
            if self.fail_reads {
                Err(BackendError::Unavailable("disabled".into()))
            } else {
                self.inner.read(key)
            }
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), BackendError> {
            self.write_attempts.set(self.write_attempts.get() + 1);
            Err(BackendError::Js("QuotaExceededError".into()))
        }
    }

    thread_local! {
        /// Warnings logged by the current test thread.
        static WARNINGS: Cell<usize> = Cell::new(0);
    }

    /// Logger which counts warnings per thread, so tests running in parallel don't see each
    /// other's output.
    struct WarningCounter;

    impl Log for WarningCounter {
        fn enabled(&self, metadata: &Metadata) -> bool {
            metadata.level() <= Level::Warn
        }

        fn log(&self, record: &Record) {
            if record.level() == Level::Warn {
                WARNINGS.with(|count| count.set(count.get() + 1));
            }
        }

        fn flush(&self) {}
    }

    static WARNING_COUNTER: WarningCounter = WarningCounter;

    /// Installs the counting logger (once per process) and returns this thread's warning count.
    fn warnings_so_far() -> usize {
        if log::set_logger(&WARNING_COUNTER).is_ok() {
            log::set_max_level(LevelFilter::Warn);
        }
        WARNINGS.with(Cell::get)
    }

    #[test]
    fn fresh_profile_uses_defaults() {
        let backend = MemoryBackend::new();
        let mut store = NotificationSettingsStore::new(backend.clone());
        assert!(matches!(store.hydrate(), HydrateOutcome::Empty));
        assert!(store.ready());
        assert!(!store.is_muted());
        assert!(!store.sound_enabled());
        assert_eq!(
            store.enabled_types().iter().collect::<Vec<_>>(),
            DEFAULT_ENABLED_TYPES
        );
        // Loading doesn't write anything.
        assert_eq!(backend.get(STORAGE_KEY), None);
    }

    #[test]
    fn defaults_before_hydration() {
        let backend = MemoryBackend::with_entry(
            STORAGE_KEY,
            r#"{"systemNotifications": false, "notificationSound": true, "enabledTypes": []}"#,
        );
        let store = NotificationSettingsStore::new(backend);
        assert_eq!(store.phase(), Phase::Uninitialized);
        assert!(!store.ready());
        assert_eq!(**store.settings(), NotificationSettings::default());
        assert!(!store.is_muted());
        assert!(!store.sound_enabled());
        assert_eq!(store.enabled_types(), &EnabledTypes::default());
    }

    #[test]
    fn partial_record_keeps_defaults_for_missing_fields() {
        let backend = MemoryBackend::with_entry(STORAGE_KEY, r#"{"systemNotifications": false}"#);
        let mut store = NotificationSettingsStore::new(backend);
        assert!(matches!(store.hydrate(), HydrateOutcome::Loaded));
        assert!(store.is_muted());
        assert!(!store.sound_enabled());
        assert_eq!(store.enabled_types(), &EnabledTypes::default());
    }

    #[test]
    fn malformed_record_falls_back_to_defaults() {
        for raw in ["{oops", "[1, 2]", "42", r#"{"notificationSound": 1}"#] {
            let backend = MemoryBackend::with_entry(STORAGE_KEY, raw);
            let mut store = NotificationSettingsStore::new(backend.clone());
            assert!(
                matches!(store.hydrate(), HydrateOutcome::Discarded(_)),
                "{raw} should be discarded"
            );
            assert!(store.ready());
            assert_eq!(**store.settings(), NotificationSettings::default());
            // The bad value is left alone until the next mutation replaces it.
            assert_eq!(backend.get(STORAGE_KEY).as_deref(), Some(raw));
        }
    }

    #[test]
    fn malformed_record_is_logged_once() {
        let backend = MemoryBackend::with_entry(STORAGE_KEY, "{oops");
        let mut store = NotificationSettingsStore::new(backend);

        let before = warnings_so_far();
        assert!(matches!(store.hydrate(), HydrateOutcome::Discarded(_)));
        assert_eq!(warnings_so_far() - before, 1);

        assert!(matches!(store.hydrate(), HydrateOutcome::AlreadyReady));
        assert_eq!(warnings_so_far() - before, 1);
        assert_eq!(**store.settings(), NotificationSettings::default());
    }

    #[test]
    fn empty_string_counts_as_nothing_stored() {
        let backend = MemoryBackend::with_entry(STORAGE_KEY, "");
        let mut store = NotificationSettingsStore::new(backend);
        assert!(matches!(store.hydrate(), HydrateOutcome::Empty));
        assert_eq!(**store.settings(), NotificationSettings::default());
    }

    #[test]
    fn unreadable_storage_falls_back_to_defaults() {
        let backend = FailingBackend {
            fail_reads: true,
            ..Default::default()
        };
        let mut store = NotificationSettingsStore::new(backend);
        assert!(matches!(
            store.hydrate(),
            HydrateOutcome::Unreadable(BackendError::Unavailable(_))
        ));
        assert!(store.ready());
        assert_eq!(**store.settings(), NotificationSettings::default());
    }

    #[test]
    fn hydrate_runs_once() {
        let backend = MemoryBackend::with_entry(STORAGE_KEY, r#"{"systemNotifications": false}"#);
        let mut store = NotificationSettingsStore::new(backend);
        assert!(matches!(store.hydrate(), HydrateOutcome::Loaded));
        assert!(store.toggle_mute());
        assert!(matches!(store.hydrate(), HydrateOutcome::AlreadyReady));
        // The second call didn't reload the stale value over the in-memory one.
        assert!(!store.is_muted());
    }

    #[test]
    fn mutations_before_hydration_are_ignored() {
        let backend = MemoryBackend::with_entry(STORAGE_KEY, r#"{"enabledTypes": ["payment"]}"#);
        let mut store = NotificationSettingsStore::new(backend.clone());
        assert!(!store.toggle_mute());
        assert!(!store.set_sound_enabled(true));
        assert!(!store.toggle_type("payment"));
        assert_eq!(**store.settings(), NotificationSettings::default());
        assert_eq!(
            backend.get(STORAGE_KEY).as_deref(),
            Some(r#"{"enabledTypes": ["payment"]}"#)
        );
    }

    #[test]
    fn toggle_mute_is_an_involution() {
        let backend = MemoryBackend::new();
        let mut store = hydrated(&backend);
        let original = store.settings().clone();

        assert!(store.toggle_mute());
        assert!(store.is_muted());
        assert_eq!(stored(&backend), **store.settings());

        assert!(store.toggle_mute());
        assert!(!store.is_muted());
        assert_eq!(store.settings(), &original);
        assert_eq!(stored(&backend), *original);
    }

    #[test]
    fn toggle_payment_on_defaults() {
        let backend = MemoryBackend::new();
        let mut store = hydrated(&backend);

        assert!(store.toggle_type("payment"));
        assert!(!store.is_type_enabled("payment"));
        assert_eq!(
            store.enabled_types().iter().collect::<Vec<_>>(),
            ["transfer", "community", "red_envelope_receive", "distribute", "receive"]
        );
        assert_eq!(stored(&backend).enabled_types, *store.enabled_types());
    }

    #[test]
    fn toggle_type_is_an_involution() {
        for id in ["transfer", "unknown_id"] {
            let backend = MemoryBackend::new();
            let mut store = hydrated(&backend);
            let original = store.enabled_types().clone();

            store.toggle_type(id);
            assert_ne!(store.enabled_types(), &original);
            assert_eq!(stored(&backend).enabled_types, *store.enabled_types());

            store.toggle_type(id);
            assert_eq!(store.enabled_types(), &original);
            assert_eq!(stored(&backend).enabled_types, original);
        }
    }

    #[test]
    fn unknown_ids_are_stored_verbatim() {
        let backend = MemoryBackend::new();
        let mut store = hydrated(&backend);

        store.toggle_type("unknown_id");
        assert!(store.is_type_enabled("unknown_id"));
        let raw: serde_json::Value =
            serde_json::from_str(&backend.get(STORAGE_KEY).unwrap()).unwrap();
        assert_eq!(raw["enabledTypes"].as_array().unwrap().len(), 7);
        assert_eq!(raw["enabledTypes"][6], "unknown_id");

        store.toggle_type("unknown_id");
        assert!(!store.is_type_enabled("unknown_id"));
        assert!(!stored(&backend).is_type_enabled("unknown_id"));
    }

    #[test]
    fn set_sound_enabled_writes_through() {
        let backend = MemoryBackend::new();
        let mut store = hydrated(&backend);

        assert!(store.set_sound_enabled(true));
        assert!(store.sound_enabled());
        assert!(stored(&backend).notification_sound);

        // Setting the same value still writes but reports no change.
        assert!(!store.set_sound_enabled(true));
        assert!(stored(&backend).notification_sound);

        assert!(store.set_sound_enabled(false));
        assert!(!stored(&backend).notification_sound);
    }

    #[test]
    fn unknown_keys_survive_mutation() {
        let backend = MemoryBackend::with_entry(
            STORAGE_KEY,
            json!({ "systemNotifications": true, "digest": "weekly" }).to_string(),
        );
        let mut store = hydrated(&backend);

        store.toggle_mute();
        let raw: serde_json::Value =
            serde_json::from_str(&backend.get(STORAGE_KEY).unwrap()).unwrap();
        assert_eq!(
            raw,
            json!({
                "systemNotifications": false,
                "notificationSound": false,
                "enabledTypes": DEFAULT_ENABLED_TYPES,
                "digest": "weekly",
            })
        );
    }

    #[test]
    fn failed_write_keeps_in_memory_change() {
        let mut store = NotificationSettingsStore::new(FailingBackend::default());
        store.hydrate();

        assert!(store.toggle_mute());
        assert!(store.is_muted());
        assert!(store.toggle_type("payment"));
        assert!(!store.is_type_enabled("payment"));
        assert_eq!(store.backend.write_attempts.get(), 2);
    }

    #[test]
    fn custom_key() {
        let backend = MemoryBackend::new();
        let mut store = NotificationSettingsStore::with_key(backend.clone(), "other-key");
        store.hydrate();
        store.toggle_mute();
        assert!(backend.get("other-key").is_some());
        assert_eq!(backend.get(STORAGE_KEY), None);
    }
}
