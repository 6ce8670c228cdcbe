//! Full-screen password change overlay with live rule feedback.

use crate::app::ThemeCtx;
use crate::app::preferences::load_custom_settings;
use crate::components::pages::login::field_setter;
use crate::core::auth::{PasswordRules, validate_password_change};
use crate::core::theme::{ThemeId, screen_background};
use gloo::dialogs::alert;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct PasswordChangeProps {
    pub on_close: Callback<()>,
    pub on_save: Callback<(String, String)>,
}

#[function_component(PasswordChangeScreen)]
pub(crate) fn password_change_screen(props: &PasswordChangeProps) -> Html {
    let theme = use_context::<ThemeCtx>().map_or(ThemeId::Default, |ctx| ctx.theme);
    let current = use_state(String::new);
    let new = use_state(String::new);
    let confirm = use_state(String::new);

    let on_current = field_setter(&current);
    let on_new = field_setter(&new);
    let on_confirm = field_setter(&confirm);
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let save = {
        let current = current.clone();
        let new = new.clone();
        let confirm = confirm.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| {
            match validate_password_change(&current, &new, &confirm) {
                Ok(()) => on_save.emit(((*current).clone(), (*new).clone())),
                Err(error) => alert(error.message()),
            }
        })
    };

    let rules = PasswordRules::check(&new);
    let matches = !new.is_empty() && *new == *confirm;
    let submittable = !current.is_empty() && rules.satisfied() && matches;

    let style = screen_background(theme, load_custom_settings().as_ref())
        .map(|background| format!("background: {background}"));

    html! {
        <div class="screen-overlay" {style}>
            <div class="screen-header accent">
                <button class="ghost" onclick={close.clone()} aria-label="뒤로">{"←"}</button>
                <h2>{"비밀번호 변경"}</h2>
                <div class="spacer" />
            </div>
            <div class="screen-body">
                <div class="card notice">
                    <h3>{"보안 안내"}</h3>
                    <p class="muted">
                        {"안전한 계정 보호를 위해 정기적으로 비밀번호를 변경해주세요. \
                          타인에게 비밀번호를 공유하지 마세요."}
                    </p>
                </div>
                <label class="stack">
                    <span>{"현재 비밀번호"}<em class="required">{"*"}</em></span>
                    <input
                        type="password"
                        value={(*current).clone()}
                        oninput={on_current}
                        placeholder="현재 비밀번호를 입력하세요"
                    />
                </label>
                <label class="stack">
                    <span>{"새 비밀번호"}<em class="required">{"*"}</em></span>
                    <input
                        type="password"
                        value={(*new).clone()}
                        oninput={on_new}
                        placeholder="새 비밀번호를 입력하세요"
                    />
                </label>
                {if new.is_empty() { html! {} } else {
                    html! {
                        <div class="card rules">
                            <p>{"비밀번호 조건:"}</p>
                            {rule_item(rules.min_length, "8자 이상")}
                            {rule_item(rules.upper, "대문자 포함")}
                            {rule_item(rules.lower, "소문자 포함")}
                            {rule_item(rules.digit, "숫자 포함")}
                            {rule_item(rules.special, "특수문자 포함 (선택사항)")}
                        </div>
                    }
                }}
                <label class="stack">
                    <span>{"새 비밀번호 확인"}<em class="required">{"*"}</em></span>
                    <input
                        type="password"
                        value={(*confirm).clone()}
                        oninput={on_confirm}
                        placeholder="새 비밀번호를 다시 입력하세요"
                    />
                </label>
                {if confirm.is_empty() { html! {} } else {
                    html! {
                        <p class={if matches { "match-ok" } else { "match-bad" }}>
                            {if matches { "비밀번호가 일치합니다" } else { "비밀번호가 일치하지 않습니다" }}
                        </p>
                    }
                }}
                <div class="actions">
                    <button class="ghost" onclick={close}>{"취소"}</button>
                    <button class="solid" onclick={save} disabled={!submittable}>{"변경하기"}</button>
                </div>
            </div>
        </div>
    }
}

fn rule_item(ok: bool, label: &'static str) -> Html {
    html! {
        <div class={classes!("rule", if ok { Some("ok") } else { None })}>
            <span>{if ok { "✔" } else { "✘" }}</span>
            <span>{label}</span>
        </div>
    }
}
