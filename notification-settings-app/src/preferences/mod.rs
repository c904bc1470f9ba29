//! Notification preferences, persisted in local storage.
use notification_settings::EnabledTypes;
use yew::{hook, use_context, AttrValue};

pub use crate::preferences::manager::NotificationSettingsManager;
use crate::preferences::manager::{NotificationSettingsDispatcher, NotificationSettingsSnapshot};

mod manager;
mod storage;

/// Gets the current notification settings and the means to change them.
#[hook]
pub fn use_notification_settings() -> NotificationSettingsHandle {
    let snapshot = use_context::<NotificationSettingsSnapshot>().expect(
        "use_notification_settings can only be used from within a child of \
        NotificationSettingsManager.",
    );
    let dispatcher = use_context::<NotificationSettingsDispatcher>().expect(
        "use_notification_settings can only be used from within a child of \
        NotificationSettingsManager.",
    );
    NotificationSettingsHandle {
        snapshot,
        dispatcher,
    }
}

/// Read accessors and actions for notification settings.
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationSettingsHandle {
    snapshot: NotificationSettingsSnapshot,
    dispatcher: NotificationSettingsDispatcher,
}

impl NotificationSettingsHandle {
    /// Whether local storage has been read yet.
    pub fn ready(&self) -> bool {
        self.snapshot.ready
    }

    /// Whether system notifications are switched off.
    pub fn is_muted(&self) -> bool {
        self.snapshot.settings.is_muted()
    }

    /// Whether notification sounds are on.
    pub fn sound_enabled(&self) -> bool {
        self.snapshot.settings.sound_enabled()
    }

    /// The enabled categories.
    pub fn enabled_types(&self) -> &EnabledTypes {
        self.snapshot.settings.enabled_types()
    }

    /// Whether the given category produces notifications.
    pub fn is_type_enabled(&self, id: &str) -> bool {
        self.snapshot.settings.is_type_enabled(id)
    }

    /// Flips the system notifications switch.
    pub fn toggle_mute(&self) {
        self.dispatcher.toggle_mute();
    }

    /// Sets whether notification sounds are on.
    pub fn set_sound_enabled(&self, enabled: bool) {
        self.dispatcher.set_sound_enabled(enabled);
    }

    /// Enables the category if it's disabled and vice versa.
    pub fn toggle_type(&self, id: impl Into<AttrValue>) {
        self.dispatcher.toggle_type(id);
    }
}
