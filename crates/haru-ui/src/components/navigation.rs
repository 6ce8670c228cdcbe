//! Top header and mobile bottom bar rendering the reorderable menu.

use crate::app::{AuthCtx, MenuCtx, Route, route_for_path};
use crate::components::settings::SettingsModal;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(Navigation)]
pub(crate) fn navigation() -> Html {
    let auth = use_context::<AuthCtx>();
    let menu = use_context::<MenuCtx>();
    let navigator = use_navigator();
    let route = use_route::<Route>();
    let settings_open = use_state(|| false);

    let (Some(auth), Some(menu)) = (auth, menu) else {
        return html! {};
    };

    let open_settings = {
        let settings_open = settings_open.clone();
        Callback::from(move |_| settings_open.set(true))
    };
    let close_settings = {
        let settings_open = settings_open.clone();
        Callback::from(move |()| settings_open.set(false))
    };
    let on_auth_click = {
        let auth = auth.clone();
        Callback::from(move |_| {
            if auth.session.is_some() {
                auth.logout.emit(());
            } else if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };
    let finish_editing = {
        let set_edit_mode = menu.set_edit_mode.clone();
        Callback::from(move |_| set_edit_mode.emit(false))
    };

    let desktop_items = menu.items.iter().enumerate().map(|(index, item)| {
        if menu.edit_mode {
            edit_entry(&menu, index, item.label)
        } else {
            nav_entry(item.path, item.label, route.as_ref())
        }
    });
    let mobile_items = menu
        .items
        .iter()
        .map(|item| nav_entry(item.path, item.label, route.as_ref()));

    html! {
        <>
            <header class="top-header">
                <Link<Route> to={Route::Home} classes="logo">
                    <img src="/logo.png" alt="Haru" />
                </Link<Route>>
                <nav class="desktop-nav">
                    {for desktop_items}
                    {if menu.edit_mode {
                        html! { <button class="ghost" onclick={finish_editing}>{"완료"}</button> }
                    } else { html! {} }}
                </nav>
                <div class="header-actions">
                    <button
                        class="ghost"
                        onclick={on_auth_click}
                        title={if auth.session.is_some() { "로그아웃" } else { "로그인" }}
                    >
                        {if auth.session.is_some() { "로그아웃" } else { "로그인" }}
                    </button>
                    <button class="ghost" onclick={open_settings} aria-label="설정">{"⚙"}</button>
                </div>
            </header>
            <nav class="bottom-nav">
                {for mobile_items}
            </nav>
            {if *settings_open {
                html! { <SettingsModal on_close={close_settings} /> }
            } else { html! {} }}
        </>
    }
}

fn nav_entry(path: &'static str, label: &'static str, active: Option<&Route>) -> Html {
    let Some(target) = route_for_path(path) else {
        return html! {};
    };
    let classes = classes!(
        "nav-item",
        if active == Some(&target) { Some("active") } else { None }
    );
    html! {
        <Link<Route> to={target} classes={classes}>{label}</Link<Route>>
    }
}

/// Edit-mode rendering: inert label plus reorder controls.
fn edit_entry(menu: &MenuCtx, index: usize, label: &'static str) -> Html {
    let move_left = {
        let move_item = menu.move_item.clone();
        Callback::from(move |_| {
            if index > 0 {
                move_item.emit((index, index - 1));
            }
        })
    };
    let last = menu.items.len().saturating_sub(1);
    let move_right = {
        let move_item = menu.move_item.clone();
        Callback::from(move |_| {
            if index < last {
                move_item.emit((index, index + 1));
            }
        })
    };
    html! {
        <div class="nav-item editing">
            <button class="ghost" onclick={move_left} disabled={index == 0} aria-label="왼쪽으로 이동">{"◀"}</button>
            <span>{label}</span>
            <button class="ghost" onclick={move_right} disabled={index == last} aria-label="오른쪽으로 이동">{"▶"}</button>
        </div>
    }
}
