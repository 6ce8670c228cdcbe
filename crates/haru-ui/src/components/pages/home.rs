//! Landing screen showcasing the active theme.

use crate::app::MenuCtx;
use crate::components::navigation::Navigation;
use yew::prelude::*;

#[function_component(HomePage)]
pub(crate) fn home_page() -> Html {
    let edit_mode = use_context::<MenuCtx>().is_some_and(|menu| menu.edit_mode);

    html! {
        <div class="page">
            <Navigation />
            <main class="page-main">
                {if edit_mode {
                    html! {
                        <div class="card">
                            <h1>{"메뉴 편집"}</h1>
                            <p class="muted">{"상단 메뉴의 화살표로 순서를 바꾼 뒤 완료를 누르세요."}</p>
                        </div>
                    }
                } else {
                    html! {
                        <>
                            <div class="card">
                                <h1>{"환영합니다!"}</h1>
                                <p class="muted">{"현재 적용된 테마의 스타일을 확인해보세요."}</p>
                                <div class="card secondary">
                                    <h2>{"보조 섹션"}</h2>
                                    <p class="muted">{"이 박스는 메인 박스와 구분되는 보조 배경색을 가집니다."}</p>
                                </div>
                                <div class="actions">
                                    <button class="solid">{"Primary Button"}</button>
                                    <button class="ghost">{"Secondary Button"}</button>
                                </div>
                            </div>
                            <div class="feature-grid">
                                {for (1..=3).map(|n| html! {
                                    <div class="card">
                                        <div class="badge">{n}</div>
                                        <h3>{format!("Feature {n}")}</h3>
                                        <p class="muted">{"테마 시스템이 적용된 카드 컴포넌트입니다."}</p>
                                    </div>
                                })}
                            </div>
                        </>
                    }
                }}
            </main>
        </div>
    }
}
