use yew::{function_component, html, Html};

use crate::appheader::AppHeader;
use crate::preferences::NotificationSettingsManager;
use crate::settings_page::NotificationSettingsPage;

/// Root component.
#[function_component]
pub fn App() -> Html {
    html! {
        <NotificationSettingsManager>
            <div class="App">
                <AppHeader />
                <div class="appbody">
                    <NotificationSettingsPage />
                </div>
            </div>
        </NotificationSettingsManager>
    }
}
