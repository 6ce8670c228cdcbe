//! Full-screen profile edit overlay.

use crate::app::ThemeCtx;
use crate::app::preferences::load_custom_settings;
use crate::components::pages::login::field_setter;
use crate::components::pages::profile::Profile;
use crate::core::theme::{ThemeId, screen_background};
use gloo::dialogs::alert;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ProfileEditProps {
    pub profile: Profile,
    pub on_close: Callback<()>,
    pub on_save: Callback<Profile>,
}

#[function_component(ProfileEditScreen)]
pub(crate) fn profile_edit_screen(props: &ProfileEditProps) -> Html {
    let theme = use_context::<ThemeCtx>().map_or(ThemeId::Default, |ctx| ctx.theme);
    let name = use_state(|| props.profile.name.clone());
    let email = use_state(|| props.profile.email.clone());
    let phone = use_state(|| props.profile.phone.clone());
    let birth_date = use_state(|| props.profile.birth_date.clone());
    let bio = use_state(|| props.profile.bio.clone());

    let on_name = field_setter(&name);
    let on_email = field_setter(&email);
    let on_phone = field_setter(&phone);
    let on_birth = field_setter(&birth_date);
    let on_bio = {
        let bio = bio.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                bio.set(area.value());
            }
        })
    };
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let save = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let birth_date = birth_date.clone();
        let bio = bio.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| {
            if name.trim().is_empty() {
                alert("이름을 입력해주세요");
                return;
            }
            if email.trim().is_empty() {
                alert("이메일을 입력해주세요");
                return;
            }
            if !email.contains('@') {
                alert("올바른 이메일 형식을 입력해주세요");
                return;
            }
            on_save.emit(Profile {
                name: (*name).clone(),
                email: (*email).clone(),
                phone: (*phone).clone(),
                birth_date: (*birth_date).clone(),
                bio: (*bio).clone(),
            });
        })
    };

    let style = screen_background(theme, load_custom_settings().as_ref())
        .map(|background| format!("background: {background}"));

    html! {
        <div class="screen-overlay" {style}>
            <div class="screen-header accent">
                <button class="ghost" onclick={close.clone()} aria-label="뒤로">{"←"}</button>
                <h2>{"프로필 수정"}</h2>
                <div class="spacer" />
            </div>
            <div class="screen-body">
                <label class="stack">
                    <span>{"이름"}<em class="required">{"*"}</em></span>
                    <input
                        type="text"
                        value={(*name).clone()}
                        oninput={on_name}
                        placeholder="이름을 입력하세요"
                        maxlength="20"
                    />
                    <span class="muted small">{format!("{}/20자", name.chars().count())}</span>
                </label>
                <label class="stack">
                    <span>{"이메일"}<em class="required">{"*"}</em></span>
                    <input
                        type="email"
                        value={(*email).clone()}
                        oninput={on_email}
                        placeholder="email@example.com"
                    />
                </label>
                <label class="stack">
                    <span>{"전화번호"}</span>
                    <input
                        type="tel"
                        value={(*phone).clone()}
                        oninput={on_phone}
                        placeholder="010-0000-0000"
                    />
                </label>
                <label class="stack">
                    <span>{"생년월일"}</span>
                    <input type="date" value={(*birth_date).clone()} oninput={on_birth} />
                </label>
                <label class="stack">
                    <span>{"소개"}</span>
                    <textarea
                        value={(*bio).clone()}
                        oninput={on_bio}
                        placeholder="자신을 소개해주세요..."
                        rows="4"
                        maxlength="200"
                    />
                    <span class="muted small">{format!("{}/200자", bio.chars().count())}</span>
                </label>
                <div class="actions">
                    <button class="ghost" onclick={close}>{"취소"}</button>
                    <button class="solid" onclick={save}>{"저장"}</button>
                </div>
            </div>
        </div>
    }
}
