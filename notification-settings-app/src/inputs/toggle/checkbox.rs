use yew::{function_component, html, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Whether the checkbox is currently checked.
    pub checked: bool,
}

/// Displays a checkbox using a material icon in place of the default display type.
///
/// The checkbox has no click handler of its own; clicks bubble to whatever row it sits in.
#[function_component]
pub fn MaterialCheckbox(&Props { checked }: &Props) -> Html {
    html! {
        <div class="MaterialToggle checkbox">
            <input type="checkbox" tabindex="-1" {checked} />
            <span class="hidden-input-display material-icons">
                if checked {
                    {"check_box"}
                } else {
                    {"check_box_outline_blank"}
                }
            </span>
        </div>
    }
}
