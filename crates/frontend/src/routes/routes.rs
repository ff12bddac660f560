use crate::domain::a001_certificate::ui::generator::CertificateGenerator;
use crate::domain::a001_certificate::ui::verify::CertificateVerify;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--not-found">
            <h1>"Page not found"</h1>
            <a href="/">"Back to the generator"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=CertificateGenerator />
                    <Route path=path!("/verify") view=CertificateVerify />
                    // legacy link of the standalone verify page
                    <Route path=path!("/newverify.html") view=CertificateVerify />
                </Routes>
            </Shell>
        </Router>
    }
}
