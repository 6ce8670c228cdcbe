//! Account registration screen.

use crate::app::Route;
use crate::components::pages::login::field_setter;
use gloo::dialogs::alert;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(JoinPage)]
pub(crate) fn join_page() -> Html {
    let navigator = use_navigator();
    let email = use_state(String::new);
    let nickname = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let show_password = use_state(|| false);

    let on_email = field_setter(&email);
    let on_nickname = field_setter(&nickname);
    let on_password = field_setter(&password);
    let on_confirm = field_setter(&confirm);
    let toggle_show = {
        let show_password = show_password.clone();
        Callback::from(move |_: MouseEvent| show_password.set(!*show_password))
    };
    let onsubmit = {
        let password = password.clone();
        let confirm = confirm.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *password != *confirm {
                alert("비밀번호가 일치하지 않습니다.");
                return;
            }
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    let password_type = if *show_password { "text" } else { "password" };

    html! {
        <div class="auth-page">
            <div class="auth-card card">
                <Link<Route> to={Route::Home} classes="auth-logo">
                    <img src="/logo.png" alt="Haru" />
                    <h1>{"회원가입"}</h1>
                    <p class="muted">{"하루와 함께 일상을 기록해보세요"}</p>
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
                        <span>{"닉네임"}</span>
                        <input
                            type="text"
                            value={(*nickname).clone()}
                            oninput={on_nickname}
                            placeholder="닉네임 입력"
                            required=true
                        />
                    </label>
                    <label class="stack">
                        <span>{"비밀번호"}</span>
                        <div class="password-field">
                            <input
                                type={password_type}
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
                    <label class="stack">
                        <span>{"비밀번호 확인"}</span>
                        <input
                            type={password_type}
                            value={(*confirm).clone()}
                            oninput={on_confirm}
                            placeholder="••••••••"
                            required=true
                        />
                    </label>
                    <button type="submit" class="solid">{"회원가입"}</button>
                </form>
                <p class="muted auth-footer">
                    {"이미 계정이 있으신가요? "}
                    <Link<Route> to={Route::Login}>{"로그인"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}
