//! The notification settings page.

use notification_settings::{NotificationCategory, CATEGORIES};
use yew::{classes, function_component, html, use_callback, Callback, Html, MouseEvent};

use crate::inputs::toggle::{MaterialCheckbox, MaterialSwitch};
use crate::material::{material_icon, NOTIFICATIONS, VOLUME_UP};
use crate::preferences::{use_notification_settings, NotificationSettingsHandle};

/// Full page: breadcrumb, general switches and the category filter.
#[function_component]
pub fn NotificationSettingsPage() -> Html {
    html! {
        <div class="NotificationSettingsPage">
            <nav class="breadcrumb">
                <a href="/settings">{"设置"}</a>
                <span class="breadcrumb-separator">{material_icon("chevron_right")}</span>
                <span class="breadcrumb-current">{"通知设置"}</span>
            </nav>
            <GeneralNotificationSection />
            <div class="divider" />
            <FilterNotificationSection />
        </div>
    }
}

/// System notification and sound switches.
#[function_component]
fn GeneralNotificationSection() -> Html {
    let settings = use_notification_settings();
    let muted = settings.is_muted();

    let toggle_mute = use_callback(settings.clone(), |_, settings| {
        settings.toggle_mute();
    });
    let set_sound = use_callback(settings.clone(), |enabled, settings| {
        settings.set_sound_enabled(enabled);
    });

    html! {
        <section class="general">
            <div class="section-header">
                <h2>{"通用设置"}</h2>
                <p>{"控制全局通知开关和音效"}</p>
            </div>
            <div class="cards">
                <div class={classes!("card", (!muted).then_some("active"))}>
                    <div class="card-top">
                        <div class="card-icon">{material_icon(NOTIFICATIONS)}</div>
                        // Shown as on until storage is read, matching the defaults.
                        <MaterialSwitch id="system-notifications"
                            checked={!settings.ready() || !muted}
                            onchange={toggle_mute} />
                    </div>
                    <label for="system-notifications">{"系统通知"}</label>
                    <p>{system_notifications_caption(muted)}</p>
                </div>
                <div class="card disabled">
                    <div class="card-top">
                        <div class="card-icon">{material_icon(VOLUME_UP)}</div>
                        <MaterialSwitch id="notification-sound"
                            checked={settings.sound_enabled()}
                            onchange={set_sound}
                            disabled=true />
                    </div>
                    <label for="notification-sound">{"通知音效"}</label>
                    <p>{"接收通知时播放提示音"}</p>
                </div>
            </div>
        </section>
    }
}

/// Caption under the system notifications switch.
fn system_notifications_caption(muted: bool) -> &'static str {
    if muted {
        "使用网页弹窗即时通知消息"
    } else {
        "使用系统弹窗即时通知消息"
    }
}

/// Checklist of categories to receive notifications for.
#[function_component]
fn FilterNotificationSection() -> Html {
    let settings = use_notification_settings();

    // The list depends entirely on stored settings, so nothing is drawn until they're loaded.
    if !settings.ready() {
        return html! {};
    }

    html! {
        <section class="filter">
            <div class="section-header">
                <div class="title-row">
                    <h2>{"过滤类别"}</h2>
                    <span class="badge">
                        {selected_summary(settings.enabled_types().len(), CATEGORIES.len())}
                    </span>
                </div>
                <p>{"选择您希望接收通知的交易类型"}</p>
            </div>
            <div class="category-grid">
                {for CATEGORIES.iter().map(|category| category_row(category, &settings))}
            </div>
        </section>
    }
}

/// One clickable row in the category list.
fn category_row(
    category: &'static NotificationCategory,
    settings: &NotificationSettingsHandle,
) -> Html {
    let checked = settings.is_type_enabled(category.id);
    let onclick = {
        let settings = settings.clone();
        Callback::from(move |_: MouseEvent| settings.toggle_type(category.id))
    };
    // The row is the only click target. Nothing inside it may be a <label> bound to the
    // checkbox: the label's forwarded click would bubble here a second time and undo the toggle.
    html! {
        <div key={category.id} class={classes!("category", checked.then_some("checked"))}
            role="checkbox" aria-checked={if checked { "true" } else { "false" }} {onclick}>
            <MaterialCheckbox {checked} />
            <div class="category-text">
                <span class="category-label">{category.label}</span>
                <p>{category.description}</p>
            </div>
        </div>
    }
}

/// Text for the selected-count badge. Ids that aren't known categories still count, so this can
/// exceed the total.
fn selected_summary(enabled: usize, total: usize) -> String {
    format!("已选 {}/{}", enabled, total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_counts_every_enabled_id() {
        assert_eq!(selected_summary(6, 6), "已选 6/6");
        assert_eq!(selected_summary(0, 6), "已选 0/6");
        assert_eq!(selected_summary(7, 6), "已选 7/6");
    }

    #[test]
    fn caption_follows_mute_state() {
        assert_ne!(
            system_notifications_caption(true),
            system_notifications_caption(false)
        );
    }
}
