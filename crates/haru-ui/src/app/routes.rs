//! Routing definitions for the Haru UI.
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub(crate) enum Route {
    #[at("/")]
    Home,
    #[at("/posts")]
    Posts,
    #[at("/todo")]
    Todo,
    #[at("/community")]
    Community,
    #[at("/profile")]
    Profile,
    #[at("/login")]
    Login,
    #[at("/join")]
    Join,
    #[at("/find-password")]
    FindPassword,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Map a menu/redirect path to its route.
pub(crate) fn route_for_path(path: &str) -> Option<Route> {
    match path {
        "/" => Some(Route::Home),
        "/posts" => Some(Route::Posts),
        "/todo" => Some(Route::Todo),
        "/community" => Some(Route::Community),
        "/profile" => Some(Route::Profile),
        "/login" => Some(Route::Login),
        "/join" => Some(Route::Join),
        "/find-password" => Some(Route::FindPassword),
        _ => None,
    }
}
