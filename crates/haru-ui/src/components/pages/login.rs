//! Sign-in screen with a fake email/password flow.

use crate::app::{AuthCtx, Route};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub(crate) fn login_page() -> Html {
    let auth = use_context::<AuthCtx>();
    let navigator = use_navigator();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let show_password = use_state(|| false);

    let on_email = field_setter(&email);
    let on_password = field_setter(&password);
    let toggle_show = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };
    let onsubmit = {
        let email = email.clone();
        let password = password.clone();
        let login = auth.map(|auth| auth.login);
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if email.is_empty() || password.is_empty() {
                return;
            }
            if let Some(login) = &login {
                login.emit((*email).clone());
            }
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Home);
            }
        })
    };

    html! {
        <div class="auth-page">
            <div class="auth-card card">
                <Link<Route> to={Route::Home} classes="auth-logo">
                    <img src="/logo.png" alt="Haru" />
                    <h1>{"환영합니다"}</h1>
                    <p class="muted">{"하루에 로그인하여 일상을 기록하세요"}</p>
                </Link<Route>>
                <form {onsubmit}>
                    <label class="stack">
                        <span>{"이메일"}</span>
                        <input
                            type="email"
                            value={(*email).clone()}
                            oninput={on_email}
                            placeholder="example@email.com"
                            required=true
                        />
                    </label>
                    <label class="stack">
                        <span>{"비밀번호"}</span>
                        <div class="password-field">
                            <input
                                type={if *show_password { "text" } else { "password" }}
                                value={(*password).clone()}
                                oninput={on_password}
                                placeholder="••••••••"
                                required=true
                            />
                            <button type="button" class="ghost" onclick={toggle_show}>
                                {if *show_password { "숨기기" } else { "표시" }}
                            </button>
                        </div>
                    </label>
                    <div class="auth-links">
                        <Link<Route> to={Route::FindPassword}>{"비밀번호 찾기"}</Link<Route>>
                    </div>
                    <button type="submit" class="solid">{"로그인"}</button>
                </form>
                <p class="muted auth-footer">
                    {"계정이 없으신가요? "}
                    <Link<Route> to={Route::Join}>{"회원가입"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}

pub(crate) fn field_setter(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            state.set(input.value());
        }
    })
}
