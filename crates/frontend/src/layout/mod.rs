use crate::domain::a002_assistant_chat::ui::widget::ChatWidget;
use leptos::prelude::*;
use leptos_router::components::A;

/// Application shell: top bar, routed page content and the floating chat widget.
///
/// ```text
/// +------------------------------------------+
/// |  TopBar: brand | Generate | Verify        |
/// +------------------------------------------+
/// |              page content                |
/// |                                 [chat]   |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header class="app-header">
                <span class="app-header__brand">"Certificate Studio"</span>
                <nav class="app-header__nav">
                    <A href="/">"Generate"</A>
                    <A href="/verify">"Verify"</A>
                </nav>
            </header>

            <main class="app-main">
                {children()}
            </main>

            <ChatWidget />
        </div>
    }
}
