use yew::{classes, function_component, html, use_callback, AttrValue, Callback, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct Props {
    /// Whether the switch is on.
    pub checked: bool,
    /// Called with the requested new state when the switch is clicked.
    pub onchange: Callback<bool>,
    /// Whether the switch is greyed out and ignores clicks.
    #[prop_or_default]
    pub disabled: bool,
    /// Element id, so a label can point at the switch.
    #[prop_or_default]
    pub id: Option<AttrValue>,
}

/// On/off switch drawn with the material toggle icons.
#[function_component]
pub fn MaterialSwitch(
    &Props {
        checked,
        ref onchange,
        disabled,
        ref id,
    }: &Props,
) -> Html {
    let onclick = use_callback((checked, onchange.clone()), |_, (checked, onchange)| {
        onchange.emit(!*checked)
    });
    let class = classes!("MaterialToggle", "switch", checked.then_some("on"));

    html! {
        <button type="button" role="switch" id={id.clone()} {class} {onclick} {disabled}
            aria-checked={if checked { "true" } else { "false" }}>
            <span class="material-icons">
                if checked {
                    {"toggle_on"}
                } else {
                    {"toggle_off"}
                }
            </span>
        </button>
    }
}
