//! Minimal routed screen shell for sections without content yet.

use crate::components::navigation::Navigation;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PlaceholderProps {
    pub title: AttrValue,
    pub body: AttrValue,
}

#[function_component(PlaceholderPage)]
pub(crate) fn placeholder_page(props: &PlaceholderProps) -> Html {
    html! {
        <div class="page">
            <Navigation />
            <main class="page-main">
                <h1>{&props.title}</h1>
                <p class="muted">{&props.body}</p>
            </main>
        </div>
    }
}
