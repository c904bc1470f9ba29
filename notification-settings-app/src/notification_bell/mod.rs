use yew::{classes, function_component, html, use_callback, Classes, Html, Properties};

use crate::inputs::button::Button;
use crate::material::{keyed_material_icon, material_icon, NOTIFICATIONS, NOTIFICATIONS_OFF};
use crate::preferences::use_notification_settings;

#[derive(Debug, PartialEq, Properties)]
pub struct Props {
    /// Extra classes to apply to the bell button.
    #[prop_or_default]
    pub class: Classes,
}

/// Header button which mutes and unmutes notifications.
#[function_component]
pub fn NotificationBell(Props { class }: &Props) -> Html {
    let settings = use_notification_settings();
    let toggle_mute = use_callback(settings.clone(), |(), settings| {
        settings.toggle_mute();
    });
    let class = classes!("NotificationBell", class.clone());

    // Until settings are loaded, draw a plain bell that does nothing, so the first render never
    // depends on what's in storage.
    if !settings.ready() {
        return html! {
            <Button {class} title={PLACEHOLDER_LABEL}>
                {material_icon(NOTIFICATIONS)}
                <span class="sr-only">{PLACEHOLDER_LABEL}</span>
            </Button>
        };
    }

    let muted = settings.is_muted();
    let label = toggle_label(muted);
    html! {
        <Button {class} title={label} onclick={toggle_mute}>
            if muted {
                {keyed_material_icon("muted", NOTIFICATIONS_OFF)}
            } else {
                {keyed_material_icon("active", NOTIFICATIONS)}
            }
            <span class="sr-only">{label}</span>
        </Button>
    }
}

/// Label for the bell before settings are loaded.
const PLACEHOLDER_LABEL: &str = "通知";

/// Label describing what clicking the bell will do.
fn toggle_label(muted: bool) -> &'static str {
    if muted {
        "开启通知"
    } else {
        "关闭通知"
    }
}
