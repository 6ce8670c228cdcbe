//! Theme selection list and the custom-theme customization flow.

use crate::app::ThemeCtx;
use crate::app::preferences::{
    clear_custom_settings, load_custom_settings, persist_auto_color, persist_custom_settings,
};
use crate::app::style::apply_theme;
use crate::components::theme_checkbox::ThemeCheckbox;
use crate::core::theme::{CustomThemeSettings, GradientSettings, ThemeId};
use crate::core::tokens::ColorName;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

const THEME_OPTIONS: [(ThemeId, &str, &str); 4] = [
    (ThemeId::Default, "기본 테마", "따뜻한 오렌지 색상의 기본 테마"),
    (ThemeId::Light, "라이트 모드", "밝고 깔끔한 화이트 테마"),
    (ThemeId::Dark, "다크 모드", "눈이 편한 다크 테마"),
    (ThemeId::Custom, "개인 설정", "나만의 색상으로 꾸미기"),
];

#[derive(Properties, PartialEq)]
pub(crate) struct ThemeSettingsProps {
    pub on_back: Callback<()>,
    pub on_close: Callback<()>,
    pub on_customize: Callback<()>,
}

#[function_component(ThemeSettings)]
pub(crate) fn theme_settings(props: &ThemeSettingsProps) -> Html {
    let theme_ctx = use_context::<ThemeCtx>();
    let Some(theme_ctx) = theme_ctx else {
        return html! {};
    };

    let options = THEME_OPTIONS.iter().map(|&(option, label, description)| {
        let selected = theme_ctx.theme == option;
        let onclick = {
            let set_theme = theme_ctx.set_theme.clone();
            let on_customize = props.on_customize.clone();
            Callback::from(move |_| {
                if option == ThemeId::Custom {
                    on_customize.emit(());
                } else {
                    set_theme.emit(option);
                }
            })
        };
        html! {
            <button
                class={classes!("theme-option", if selected { Some("selected") } else { None })}
                {onclick}
            >
                <div class="stack">
                    <strong>{label}</strong>
                    <span class="muted">{description}</span>
                </div>
                {if option == ThemeId::Custom {
                    html! { <span class="muted">{"›"}</span> }
                } else if selected {
                    html! { <span class="check">{"✓"}</span> }
                } else { html! {} }}
            </button>
        }
    });

    let back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_| on_back.emit(()))
    };
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <>
            <div class="modal-header">
                <button class="ghost" onclick={back} aria-label="뒤로">{"←"}</button>
                <h2>{"테마 설정"}</h2>
                <button class="ghost" onclick={close} aria-label="닫기">{"✕"}</button>
            </div>
            <div class="theme-options">
                {for options}
            </div>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct CustomThemeEditorProps {
    pub on_back: Callback<()>,
}

/// Customization flow entry point.
///
/// The palette row drives the simplified tier (`customThemeColor`) and
/// discards any manual record, since a manual record always wins; the
/// detail form writes a full manual record.
#[function_component(CustomThemeEditor)]
pub(crate) fn custom_theme_editor(props: &CustomThemeEditorProps) -> Html {
    let theme_ctx = use_context::<ThemeCtx>();
    let initial = use_memo(|_| load_custom_settings().unwrap_or_default(), ());
    let base_color = use_state(|| {
        initial
            .base_color
            .clone()
            .unwrap_or_else(|| "#ff8800".to_string())
    });
    let gradient_enabled = use_state(|| {
        initial
            .gradient
            .as_ref()
            .is_some_and(|gradient| gradient.enabled)
    });
    let gradient_dir = use_state(|| {
        initial
            .gradient
            .as_ref()
            .map_or_else(|| "to bottom".to_string(), |gradient| gradient.dir.clone())
    });
    let gradient_start = use_state(|| {
        initial
            .gradient
            .as_ref()
            .map_or_else(|| "#ffffff".to_string(), |gradient| gradient.start.clone())
    });
    let gradient_end = use_state(|| {
        initial
            .gradient
            .as_ref()
            .map_or_else(|| "#ff8800".to_string(), |gradient| gradient.end.clone())
    });
    let text_palette = use_state(|| initial.text_palette().to_string());

    let Some(theme_ctx) = theme_ctx else {
        return html! {};
    };

    let palette_row = ColorName::all().into_iter().map(|color| {
        let set_theme = theme_ctx.set_theme.clone();
        let onclick = Callback::from(move |_| {
            clear_custom_settings();
            persist_auto_color(color);
            set_theme.emit(ThemeId::Custom);
            // The identifier may already be `custom`; re-apply explicitly so
            // the new record takes effect without a state transition.
            apply_theme(ThemeId::Custom);
        });
        html! {
            <button
                class="palette-swatch"
                title={color.as_str()}
                data-color={color.as_str()}
                {onclick}
            />
        }
    });

    let on_base = input_setter(&base_color);
    let on_start = input_setter(&gradient_start);
    let on_end = input_setter(&gradient_end);
    let on_gradient_toggle = {
        let gradient_enabled = gradient_enabled.clone();
        Callback::from(move |checked: bool| gradient_enabled.set(checked))
    };
    let on_dir = {
        let gradient_dir = gradient_dir.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                gradient_dir.set(select.value());
            }
        })
    };
    let on_palette = {
        let text_palette = text_palette.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                text_palette.set(select.value());
            }
        })
    };

    let save = {
        let base_color = base_color.clone();
        let gradient_enabled = gradient_enabled.clone();
        let gradient_dir = gradient_dir.clone();
        let gradient_start = gradient_start.clone();
        let gradient_end = gradient_end.clone();
        let text_palette = text_palette.clone();
        let text = initial.text.clone();
        let set_theme = theme_ctx.set_theme.clone();
        Callback::from(move |_| {
            let settings = CustomThemeSettings {
                base_color: Some((*base_color).clone()).filter(|color| !color.is_empty()),
                gradient: Some(GradientSettings {
                    enabled: *gradient_enabled,
                    dir: (*gradient_dir).clone(),
                    start: (*gradient_start).clone(),
                    start_pos: 0.0,
                    end: (*gradient_end).clone(),
                    end_pos: 100.0,
                }),
                text: text.clone(),
                text_color_name: Some((*text_palette).clone()),
            };
            persist_custom_settings(&settings);
            set_theme.emit(ThemeId::Custom);
            apply_theme(ThemeId::Custom);
        })
    };
    let back = {
        let on_back = props.on_back.clone();
        Callback::from(move |_| on_back.emit(()))
    };

    html! {
        <>
            <div class="modal-header">
                <button class="ghost" onclick={back} aria-label="뒤로">{"←"}</button>
                <h2>{"개인 설정"}</h2>
                <div class="spacer" />
            </div>
            <div class="custom-editor">
                <section>
                    <h3>{"간단 색상"}</h3>
                    <p class="muted">{"팔레트에서 색상을 고르면 바로 적용됩니다."}</p>
                    <div class="palette-row">
                        {for palette_row}
                    </div>
                </section>
                <section>
                    <h3>{"상세 설정"}</h3>
                    <label class="stack">
                        <span>{"기본 색상"}</span>
                        <input type="color" value={(*base_color).clone()} oninput={on_base} />
                    </label>
                    <ThemeCheckbox
                        checked={*gradient_enabled}
                        on_change={on_gradient_toggle}
                        label="그라데이션 배경 사용"
                    />
                    {if *gradient_enabled {
                        html! {
                            <div class="gradient-fields">
                                <label class="stack">
                                    <span>{"방향"}</span>
                                    <select onchange={on_dir} value={(*gradient_dir).clone()}>
                                        <option value="to bottom">{"위에서 아래"}</option>
                                        <option value="to right">{"왼쪽에서 오른쪽"}</option>
                                        <option value="to bottom right">{"대각선"}</option>
                                    </select>
                                </label>
                                <label class="stack">
                                    <span>{"시작 색상"}</span>
                                    <input type="color" value={(*gradient_start).clone()} oninput={on_start} />
                                </label>
                                <label class="stack">
                                    <span>{"끝 색상"}</span>
                                    <input type="color" value={(*gradient_end).clone()} oninput={on_end} />
                                </label>
                            </div>
                        }
                    } else { html! {} }}
                    <label class="stack">
                        <span>{"보조 텍스트 팔레트"}</span>
                        <select onchange={on_palette} value={(*text_palette).clone()}>
                            {for ColorName::all().into_iter().map(|color| html! {
                                <option value={color.as_str()}>{color.as_str()}</option>
                            })}
                        </select>
                    </label>
                    <button class="solid" onclick={save}>{"적용"}</button>
                </section>
            </div>
        </>
    }
}

fn input_setter(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
            state.set(input.value());
        }
    })
}
