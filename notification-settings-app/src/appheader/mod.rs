use yew::{function_component, html, Html};

use crate::notification_bell::NotificationBell;

/// Displays the App header: the title on the left and account controls on the right.
#[function_component]
pub fn AppHeader() -> Html {
    html! {
        <div class="AppHeader">
            <div class="app-title">{"LDC"}</div>
            <div class="flex-section">
                <NotificationBell />
            </div>
        </div>
    }
}
