//! Profile screen: account summary, settings lists, and the edit modals.

use crate::app::{AuthCtx, Route};
use crate::components::navigation::Navigation;
use crate::components::pages::password_change::PasswordChangeScreen;
use crate::components::pages::profile_edit::ProfileEditScreen;
use crate::core::auth::Session;
use gloo::dialogs::alert;
use yew::prelude::*;
use yew_router::prelude::*;

/// Editable account fields shown on the profile screens.
#[derive(Clone, PartialEq)]
pub(crate) struct Profile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: String,
    pub bio: String,
}

impl Profile {
    fn for_session(session: Option<&Session>) -> Self {
        Self {
            name: session
                .map_or("사용자", Session::display_name)
                .to_string(),
            email: session.map(|s| s.email.clone()).unwrap_or_default(),
            phone: "010-1234-5678".to_string(),
            birth_date: "1990-01-01".to_string(),
            bio: "안녕하세요! 하루와 함께 일상을 기록하고 있어요.".to_string(),
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum ActiveModal {
    None,
    EditProfile,
    ChangePassword,
}

#[function_component(ProfilePage)]
pub(crate) fn profile_page() -> Html {
    let auth = use_context::<AuthCtx>();
    let navigator = use_navigator();
    let session = auth.as_ref().and_then(|auth| auth.session.clone());
    let profile = use_state(|| Profile::for_session(session.as_ref()));
    let modal = use_state(|| ActiveModal::None);

    let open_edit = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| modal.set(ActiveModal::EditProfile))
    };
    let open_password = {
        let modal = modal.clone();
        Callback::from(move |_: MouseEvent| modal.set(ActiveModal::ChangePassword))
    };
    let close_modal = {
        let modal = modal.clone();
        Callback::from(move |()| modal.set(ActiveModal::None))
    };
    let on_logout = {
        let logout = auth.map(|auth| auth.logout);
        Callback::from(move |_: MouseEvent| {
            if let Some(logout) = &logout {
                logout.emit(());
            }
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };
    let on_save_profile = {
        let profile = profile.clone();
        let modal = modal.clone();
        Callback::from(move |updated: Profile| {
            profile.set(updated);
            modal.set(ActiveModal::None);
            alert("프로필이 저장되었습니다.");
        })
    };
    let on_save_password = {
        let modal = modal.clone();
        Callback::from(move |(_current, _new): (String, String)| {
            modal.set(ActiveModal::None);
            alert("비밀번호가 변경되었습니다.");
        })
    };

    html! {
        <div class="page">
            <Navigation />
            <main class="page-main narrow">
                <div class="profile-header card accent">
                    <div class="avatar">{"👤"}</div>
                    <div>
                        <h1>{format!("{}님", profile.name)}</h1>
                        <p>{profile.email.clone()}</p>
                    </div>
                </div>

                <div class="stats-grid">
                    {stat_card("작성한 일기", 42)}
                    {stat_card("연속 작성일", 7)}
                    {stat_card("교환일기", 3)}
                </div>

                <div class="card section-list">
                    <h3>{"계정"}</h3>
                    <button class="settings-entry" onclick={open_edit}>{"프로필 수정"}</button>
                    <button class="settings-entry" onclick={open_password}>{"비밀번호 변경"}</button>
                </div>

                <div class="card section-list">
                    <h3>{"설정"}</h3>
                    <button class="settings-entry">{"알림 설정"}</button>
                    <button class="settings-entry">{"프라이버시 설정"}</button>
                    <button class="settings-entry">{"데이터 내보내기"}</button>
                </div>

                <button class="ghost logout" onclick={on_logout}>{"로그아웃"}</button>
                <p class="muted footer">{"© 2025 하루. All rights reserved."}</p>
            </main>

            {match *modal {
                ActiveModal::EditProfile => html! {
                    <ProfileEditScreen
                        profile={(*profile).clone()}
                        on_close={close_modal.clone()}
                        on_save={on_save_profile}
                    />
                },
                ActiveModal::ChangePassword => html! {
                    <PasswordChangeScreen
                        on_close={close_modal}
                        on_save={on_save_password}
                    />
                },
                ActiveModal::None => html! {},
            }}
        </div>
    }
}

fn stat_card(label: &'static str, value: u32) -> Html {
    html! {
        <div class="card stat">
            <div class="stat-value">{value}</div>
            <p class="muted">{label}</p>
        </div>
    }
}
