//! Accent-colored checkbox used by the customization flow.

use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ThemeCheckboxProps {
    pub checked: bool,
    pub on_change: Callback<bool>,
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

#[function_component(ThemeCheckbox)]
pub(crate) fn theme_checkbox(props: &ThemeCheckboxProps) -> Html {
    let onchange = {
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                on_change.emit(input.checked());
            }
        })
    };

    html! {
        <label class={classes!("theme-checkbox", if props.checked { Some("checked") } else { None })}>
            <span class="box">{if props.checked { "✓" } else { "" }}</span>
            {if let Some(label) = &props.label {
                html! { <span class="label">{label}</span> }
            } else { html! {} }}
            <input type="checkbox" class="hidden" checked={props.checked} {onchange} />
        </label>
    }
}
