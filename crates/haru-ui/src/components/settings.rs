//! Settings modal: theme selection, menu editing, and default landing page.

use crate::app::MenuCtx;
use crate::app::preferences::{load_default_page, persist_default_page};
use crate::components::theme_settings::{CustomThemeEditor, ThemeSettings};
use web_sys::HtmlSelectElement;
use yew::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum View {
    Main,
    Theme,
    Custom,
}

#[derive(Properties, PartialEq)]
pub(crate) struct SettingsModalProps {
    pub on_close: Callback<()>,
}

#[function_component(SettingsModal)]
pub(crate) fn settings_modal(props: &SettingsModalProps) -> Html {
    let menu = use_context::<MenuCtx>();
    let view = use_state(|| View::Main);

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let show_theme = {
        let view = view.clone();
        Callback::from(move |_: MouseEvent| view.set(View::Theme))
    };
    let back_to_main = {
        let view = view.clone();
        Callback::from(move |()| view.set(View::Main))
    };
    let show_custom = {
        let view = view.clone();
        Callback::from(move |()| view.set(View::Custom))
    };
    let back_to_theme = {
        let view = view.clone();
        Callback::from(move |()| view.set(View::Theme))
    };
    let start_menu_edit = {
        let on_close = props.on_close.clone();
        let set_edit_mode = menu.map(|menu| menu.set_edit_mode);
        Callback::from(move |_: MouseEvent| {
            if let Some(set_edit_mode) = &set_edit_mode {
                set_edit_mode.emit(true);
            }
            on_close.emit(());
        })
    };
    let on_default_page = Callback::from(|e: Event| {
        if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
            persist_default_page(&select.value());
        }
    });
    let default_page = load_default_page().unwrap_or_else(|| "home".to_string());

    let body = match *view {
        View::Main => html! {
            <>
                <div class="modal-header">
                    <h2>{"설정"}</h2>
                    <button class="ghost" onclick={close.clone()} aria-label="닫기">{"✕"}</button>
                </div>
                <div class="settings-list">
                    <button class="settings-entry" onclick={show_theme}>
                        <span>{"테마 설정"}</span>
                        <span class="muted">{"›"}</span>
                    </button>
                    <button class="settings-entry" onclick={start_menu_edit}>
                        <span>{"메뉴 편집"}</span>
                        <span class="muted">{"›"}</span>
                    </button>
                    <label class="settings-entry">
                        <span>{"기본 페이지"}</span>
                        <select onchange={on_default_page} value={default_page}>
                            <option value="home">{"홈"}</option>
                            <option value="posts">{"포스트"}</option>
                            <option value="todo">{"투두"}</option>
                            <option value="community">{"커뮤니티"}</option>
                        </select>
                    </label>
                </div>
            </>
        },
        View::Theme => html! {
            <ThemeSettings
                on_back={back_to_main}
                on_close={props.on_close.clone()}
                on_customize={show_custom}
            />
        },
        View::Custom => html! {
            <CustomThemeEditor on_back={back_to_theme} />
        },
    };

    html! {
        <div class="modal-overlay" role="dialog" aria-modal="true">
            <div class="modal card">
                {body}
            </div>
        </div>
    }
}
