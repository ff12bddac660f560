use crate::routes::routes::AppRoutes;
use crate::shared::api_utils::AppConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Resolved once; every page and the chat widget read it from context.
    provide_context(AppConfig::from_window());

    view! {
        <AppRoutes />
    }
}
