//! Certificate Verification - View Component

use super::model::verify_certificate;
use super::view_model::CertificateVerifyVm;
use crate::shared::api_utils::AppConfig;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::{Badge, Button, Input};
use crate::shared::icons::icon;
use contracts::domain::a001_certificate::CertificateSummary;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_verify_certificate::{VerificationOutcome, VerifyCertificate};
use leptos::prelude::*;
use leptos_router::components::A;

fn render_outcome(outcome: VerificationOutcome) -> AnyView {
    match outcome {
        VerificationOutcome::Valid(CertificateSummary {
            name,
            course,
            date,
            cert_type,
        }) => view! {
            <div class="verify-result verify-result--valid">
                <Badge variant="success">{icon("check")}" Valid Certificate"</Badge>
                <dl class="verify-result__fields">
                    <dt>"Name:"</dt><dd>{name}</dd>
                    <dt>"Course:"</dt><dd>{course}</dd>
                    <dt>"Date:"</dt><dd>{date}</dd>
                    {cert_type.map(|t| view! { <dt>"Type:"</dt><dd>{t}</dd> })}
                </dl>
            </div>
        }
        .into_any(),
        VerificationOutcome::Invalid => view! {
            <div class="verify-result verify-result--invalid">
                <Badge variant="error">"Invalid Certificate"</Badge>
            </div>
        }
        .into_any(),
        VerificationOutcome::Error(message) => view! {
            <div class="verify-result verify-result--error">
                <span class="verify-result__error">{format!("Error: {}", message)}</span>
            </div>
        }
        .into_any(),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CertificateVerify() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig context not found");
    let vm = CertificateVerifyVm::new();

    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let cert_id = vm.cert_id.get_untracked();
        let url = config.api_url(VerifyCertificate::endpoint());

        wasm_bindgen_futures::spawn_local(async move {
            match verify_certificate(&url, cert_id).await {
                Ok(outcome) => {
                    vm.error.set(None);
                    vm.outcome.set(Some(outcome));
                }
                Err(err) => {
                    log::error!("Certificate verification failed: {}", err);
                    vm.error.set(Some(err.user_message()));
                }
            }
        });
    };

    view! {
        <div class="page page--verify">
            <PageHeader
                title=VerifyCertificate::display_name()
                subtitle="Enter the certificate ID printed at the bottom of the certificate."
            >
                <A href="/">"Back to generator"</A>
            </PageHeader>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <form class="verify form" on:submit=handle_submit>
                <Input
                    id="certId"
                    label="Certificate ID"
                    value=vm.cert_id
                    placeholder="CERT-XXXXXXXX"
                    on_input=Callback::new(move |v: String| vm.cert_id.set(v))
                />
                <Button button_type="submit">
                    {icon("search")}
                    " Verify"
                </Button>
            </form>

            <div id="verifyResult">
                {move || vm.outcome.get().map(render_outcome)}
            </div>
        </div>
    }
}
