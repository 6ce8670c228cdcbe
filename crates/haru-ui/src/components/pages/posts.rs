use crate::components::navigation::Navigation;
use yew::prelude::*;

#[function_component(PostsPage)]
pub(crate) fn posts_page() -> Html {
    html! {
        <div class="page">
            <Navigation />
            <main class="page-main">
                <h1>{"포스트"}</h1>
                <p class="muted">{"포스트 페이지입니다."}</p>
            </main>
        </div>
    }
}
