use yew::{html, AttrValue, Html};

/// Icon shown for notifications that are switched on.
pub const NOTIFICATIONS: &str = "notifications";
/// Icon shown for notifications that are muted.
pub const NOTIFICATIONS_OFF: &str = "notifications_off";
/// Icon for the sound setting.
pub const VOLUME_UP: &str = "volume_up";

/// Displays a material icon.
pub fn material_icon(name: impl Into<AttrValue>) -> Html {
    html! {
        <span class="material-icons">{name.into()}</span>
    }
}

/// Displays a material icon with a key, so that swapping to a different key replaces the element
/// instead of patching it, which restarts any CSS entry animation.
pub fn keyed_material_icon(key: &'static str, name: impl Into<AttrValue>) -> Html {
    html! {
        <span key={key} class="material-icons keyed-icon">{name.into()}</span>
    }
}
