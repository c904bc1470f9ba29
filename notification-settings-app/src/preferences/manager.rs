//! Notification settings manager provides the component which owns the settings store and the
//! contexts used to read and update it.

use std::rc::Rc;

use log::debug;
use notification_settings::{HydrateOutcome, NotificationSettings, NotificationSettingsStore};
use yew::{html, AttrValue, Callback, Component, Context, ContextProvider, Html, Properties};

use crate::preferences::storage::BrowserLocalStorage;

#[derive(PartialEq, Properties)]
pub struct Props {
    /// Children to render within the context of the NotificationSettingsManager.
    pub children: Html,
}

pub enum Msg {
    /// Performs the one-time load from local storage.
    Hydrate,
    /// Flips the system notifications switch.
    ToggleMute,
    /// Sets whether notification sounds are on.
    SetSoundEnabled {
        /// The new value.
        enabled: bool,
    },
    /// Enables or disables one category.
    ToggleType {
        /// Category id. Need not be a known category.
        id: AttrValue,
    },
}

/// Settings as seen by consumers: the current record plus whether it has been loaded yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationSettingsSnapshot {
    /// Current settings. Always the defaults until `ready`.
    pub settings: Rc<NotificationSettings>,
    /// Whether local storage has been read. Until it has, consumers should render a neutral
    /// presentation rather than one that depends on the stored settings.
    pub ready: bool,
}

pub struct NotificationSettingsManager {
    /// Store holding the current settings.
    store: NotificationSettingsStore<BrowserLocalStorage>,
    /// Settings dispatcher for this instance.
    dispatcher: NotificationSettingsDispatcher,
}

impl Component for NotificationSettingsManager {
    type Message = Msg;
    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        // Storage isn't touched here. The first render always uses the defaults; the stored
        // settings are applied once that render has happened.
        Self {
            store: NotificationSettingsStore::new(BrowserLocalStorage),
            dispatcher: NotificationSettingsDispatcher::new(ctx.link().callback(|msg: Msg| msg)),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Hydrate => match self.store.hydrate() {
                HydrateOutcome::AlreadyReady => false,
                outcome => {
                    debug!("Notification settings hydrated: {:?}", outcome);
                    true
                }
            },
            Msg::ToggleMute => self.store.toggle_mute(),
            Msg::SetSoundEnabled { enabled } => self.store.set_sound_enabled(enabled),
            Msg::ToggleType { id } => self.store.toggle_type(&id),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let snapshot = NotificationSettingsSnapshot {
            settings: Rc::clone(self.store.settings()),
            ready: self.store.ready(),
        };
        html! {
            // This context provider will never change for the life of the manager.
            <ContextProvider<NotificationSettingsDispatcher> context={self.dispatcher.clone()}>
            // This context will change whenever the settings change.
            <ContextProvider<NotificationSettingsSnapshot> context={snapshot}>
                {ctx.props().children.clone()}
            </ContextProvider<NotificationSettingsSnapshot>>
            </ContextProvider<NotificationSettingsDispatcher>>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            ctx.link().send_message(Msg::Hydrate);
        }
    }
}

/// Dispatcher which can be used to update notification settings.
#[derive(Clone, Debug, PartialEq)]
pub struct NotificationSettingsDispatcher {
    /// Sends messages to the manager. Compares by reference, so the dispatcher never changes.
    send: Callback<Msg>,
}

impl NotificationSettingsDispatcher {
    fn new(send: Callback<Msg>) -> Self {
        Self { send }
    }

    /// Flips the system notifications switch.
    pub fn toggle_mute(&self) {
        self.send.emit(Msg::ToggleMute);
    }

    /// Sets whether notification sounds are on.
    pub fn set_sound_enabled(&self, enabled: bool) {
        self.send.emit(Msg::SetSoundEnabled { enabled });
    }

    /// Enables the category if it's disabled and vice versa.
    pub fn toggle_type(&self, id: impl Into<AttrValue>) {
        self.send.emit(Msg::ToggleType { id: id.into() });
    }
}
