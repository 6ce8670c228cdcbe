//! Password-recovery screen: request form and confirmation state.

use crate::app::Route;
use crate::components::pages::login::field_setter;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(FindPasswordPage)]
pub(crate) fn find_password_page() -> Html {
    let email = use_state(String::new);
    let submitted = use_state(|| false);

    let on_email = field_setter(&email);
    let onsubmit = {
        let email = email.clone();
        let submitted = submitted.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if !email.is_empty() {
                submitted.set(true);
            }
        })
    };
    let retry = {
        let submitted = submitted.clone();
        Callback::from(move |_: MouseEvent| submitted.set(false))
    };

    let body = if *submitted {
        html! {
            <div class="stack centered">
                <h3>{"이메일을 확인하세요"}</h3>
                <p class="muted">
                    <strong>{(*email).clone()}</strong>
                    <br />
                    {"위 주소로 비밀번호 재설정 링크를 전송했습니다."}
                </p>
                <p class="muted small">
                    {"이메일이 오지 않나요?"}
                    <br />
                    {"스팸 메일함을 확인하거나 다시 시도해주세요."}
                </p>
                <button class="ghost" onclick={retry}>{"다른 이메일로 시도하기"}</button>
            </div>
        }
    } else {
        html! {
            <form {onsubmit}>
                <p class="notice muted">{"입력하신 이메일로 비밀번호 재설정 링크를 보내드립니다."}</p>
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
                <button type="submit" class="solid">{"재설정 링크 전송"}</button>
            </form>
        }
    };

    html! {
        <div class="auth-page">
            <div class="auth-card card">
                <Link<Route> to={Route::Home} classes="auth-logo">
                    <img src="/logo.png" alt="Haru" />
                    <h1>{"비밀번호 찾기"}</h1>
                    <p class="muted">
                        {if *submitted { "이메일을 확인해주세요" } else { "가입하신 이메일 주소를 입력하세요" }}
                    </p>
                </Link<Route>>
                {body}
                <p class="muted auth-footer">
                    {"비밀번호가 기억나셨나요? "}
                    <Link<Route> to={Route::Login}>{"로그인"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}
