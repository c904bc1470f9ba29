use yew::{
    classes, function_component, html, use_callback, AttrValue, Callback, Classes, Html, Properties,
};

#[derive(Debug, PartialEq, Properties)]
pub struct Props {
    /// Contents of the button.
    #[prop_or_default]
    pub children: Html,

    /// Callback to activate when the button is clicked. A button without a callback still
    /// renders normally but does nothing when clicked.
    #[prop_or_default]
    pub onclick: Option<Callback<()>>,

    /// Whether the button is disabled.
    #[prop_or_default]
    pub disabled: bool,

    /// Hover text for the button.
    #[prop_or_default]
    pub title: Option<AttrValue>,

    /// Extra classes to apply to the button.
    #[prop_or_default]
    pub class: Classes,
}

/// Simple button, usually wrapping a material icon.
#[function_component]
pub fn Button(
    Props {
        children,
        onclick,
        disabled,
        title,
        class,
    }: &Props,
) -> Html {
    let class = classes!("Button", class.clone());
    let onclick = use_callback(onclick.clone(), |_, onclick| {
        if let Some(onclick) = onclick {
            onclick.emit(())
        }
    });

    html! {
        <button type="button" {class} {onclick} disabled={*disabled} title={title.clone()}>
            { children.clone() }
        </button>
    }
}
