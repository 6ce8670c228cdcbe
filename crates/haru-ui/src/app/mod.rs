//! Root application wiring: shared contexts, routing, and theme lifecycle.

use crate::app::preferences::{
    clear_session, has_redirected, load_default_page, load_menu, load_session, load_theme,
    mark_redirected, persist_menu_order, persist_session,
};
use crate::app::style::apply_theme;
use crate::components::pages::find_password::FindPasswordPage;
use crate::components::pages::home::HomePage;
use crate::components::pages::join::JoinPage;
use crate::components::pages::login::LoginPage;
use crate::components::pages::placeholder::PlaceholderPage;
use crate::components::pages::posts::PostsPage;
use crate::components::pages::profile::ProfilePage;
use crate::core::auth::Session;
use crate::core::menu::{self, MenuItem};
use crate::core::redirect::redirect_target;
use crate::core::theme::ThemeId;
use yew::prelude::*;
use yew_router::prelude::*;

pub(crate) mod preferences;
pub(crate) mod routes;
pub(crate) mod style;

pub(crate) use routes::{Route, route_for_path};

/// Theme selection shared with every screen.
///
/// `set_theme` is the sole write path for the active theme; every emit
/// funnels through the resolution engine so a reload reproduces the same
/// visual state from persisted data alone.
#[derive(Clone, PartialEq)]
pub(crate) struct ThemeCtx {
    pub theme: ThemeId,
    pub set_theme: Callback<ThemeId>,
}

/// Session state shared with every screen.
#[derive(Clone, PartialEq)]
pub(crate) struct AuthCtx {
    pub session: Option<Session>,
    pub login: Callback<String>,
    pub logout: Callback<()>,
}

/// Navigation menu state shared with the header and settings surfaces.
#[derive(Clone, PartialEq)]
pub(crate) struct MenuCtx {
    pub items: Vec<MenuItem>,
    pub edit_mode: bool,
    pub set_edit_mode: Callback<bool>,
    pub move_item: Callback<(usize, usize)>,
}

#[function_component(HaruApp)]
pub(crate) fn haru_app() -> Html {
    let theme = use_state(load_theme);
    let session = use_state(load_session);
    let menu_items = use_state(load_menu);
    let edit_mode = use_state(|| false);

    {
        let theme = *theme;
        use_effect_with_deps(
            move |_| {
                apply_theme(theme);
                || ()
            },
            theme,
        );
    }

    let set_theme = {
        let theme = theme.clone();
        Callback::from(move |next: ThemeId| theme.set(next))
    };
    let login = {
        let session = session.clone();
        Callback::from(move |email: String| {
            let next = Session { email };
            persist_session(&next);
            session.set(Some(next));
        })
    };
    let logout = {
        let session = session.clone();
        Callback::from(move |()| {
            clear_session();
            session.set(None);
        })
    };
    let set_edit_mode = {
        let edit_mode = edit_mode.clone();
        Callback::from(move |value: bool| edit_mode.set(value))
    };
    let move_item = {
        let menu_items = menu_items.clone();
        Callback::from(move |(from, to): (usize, usize)| {
            let mut items = (*menu_items).clone();
            menu::move_item(&mut items, from, to);
            persist_menu_order(&items);
            menu_items.set(items);
        })
    };

    let theme_ctx = ThemeCtx {
        theme: *theme,
        set_theme,
    };
    let auth_ctx = AuthCtx {
        session: (*session).clone(),
        login,
        logout,
    };
    let menu_ctx = MenuCtx {
        items: (*menu_items).clone(),
        edit_mode: *edit_mode,
        set_edit_mode,
        move_item,
    };

    html! {
        <ContextProvider<ThemeCtx> context={theme_ctx}>
            <ContextProvider<AuthCtx> context={auth_ctx}>
                <ContextProvider<MenuCtx> context={menu_ctx}>
                    <BrowserRouter>
                        <DefaultPageRedirect />
                        <Switch<Route> render={switch} />
                    </BrowserRouter>
                </ContextProvider<MenuCtx>>
            </ContextProvider<AuthCtx>>
        </ContextProvider<ThemeCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Posts => html! { <PostsPage /> },
        Route::Todo => html! {
            <PlaceholderPage title="투두" body="투두 페이지입니다." />
        },
        Route::Community => html! {
            <PlaceholderPage title="커뮤니티" body="커뮤니티 페이지입니다." />
        },
        Route::Profile => html! { <ProfilePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Join => html! { <JoinPage /> },
        Route::FindPassword => html! { <FindPasswordPage /> },
        Route::NotFound => html! {
            <PlaceholderPage title="404" body="요청하신 페이지를 찾을 수 없습니다." />
        },
    }
}

/// Session-scoped one-shot redirect from `/` to the configured default page.
#[function_component(DefaultPageRedirect)]
fn default_page_redirect() -> Html {
    let navigator = use_navigator();
    let route = use_route::<Route>();
    use_effect_with_deps(
        move |route| {
            if matches!(route, Some(Route::Home)) {
                let already = has_redirected();
                let default_page = load_default_page();
                if let Some(path) = redirect_target("/", already, default_page.as_deref()) {
                    mark_redirected();
                    if let (Some(navigator), Some(target)) = (navigator, route_for_path(path)) {
                        navigator.replace(&target);
                    }
                } else if !already {
                    mark_redirected();
                }
            }
            || ()
        },
        route,
    );
    html! {}
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<HaruApp>::with_root(root).render();
    } else {
        yew::Renderer::<HaruApp>::new().render();
    }
}
