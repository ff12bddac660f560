//! Certificate Generator - View Component
//!
//! Form on the left, live preview on the right

use super::model::{generate_certificate, submit_feedback, SubmitFeedback};
use super::view_model::CertificateGeneratorVm;
use crate::shared::api_utils::AppConfig;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::ui::file_input::selected_file;
use crate::shared::components::ui::{Button, FileInput, Input, Select};
use crate::shared::download::{download_bytes, PDF_MIME};
use crate::shared::icons::icon;
use contracts::domain::a001_certificate::{CertType, POSITION_TYPES};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_generate_certificate::GenerateCertificate;
use leptos::prelude::*;
use leptos_router::components::A;

/// How long the success banner stays up
const NOTICE_TIMEOUT_MS: u32 = 4000;

const NOTICE_TEXT: &str = "Certificate generated and downloaded.";

fn display(visible: bool) -> &'static str {
    if visible {
        "display: block;"
    } else {
        "display: none;"
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CertificateGenerator() -> impl IntoView {
    let config = use_context::<AppConfig>().expect("AppConfig context not found");
    let vm = CertificateGeneratorVm::new();
    let logo_ref = NodeRef::<leptos::html::Input>::new();
    let signature_ref = NodeRef::<leptos::html::Input>::new();

    let cert_type_options: Vec<(String, String)> = CertType::all()
        .iter()
        .map(|t| (t.as_str().to_string(), t.as_str().to_string()))
        .collect();
    let position_options: Vec<(String, String)> = POSITION_TYPES
        .iter()
        .map(|p| (p.to_string(), p.to_string()))
        .collect();

    // No in-flight guard: every submit issues its own request
    let handle_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let request = vm.snapshot();
        let logo = selected_file(logo_ref);
        let signature = selected_file(signature_ref);
        let url = config.api_url(GenerateCertificate::endpoint());

        vm.error.set(None);
        vm.notice.update(|n| n.clear());
        vm.in_flight.update(|n| *n += 1);

        wasm_bindgen_futures::spawn_local(async move {
            let result = generate_certificate(&url, &request, logo, signature).await;
            vm.in_flight.update(|n| *n = n.saturating_sub(1));

            match submit_feedback(result) {
                SubmitFeedback::Download { bytes, filename } => {
                    match download_bytes(&bytes, PDF_MIME, filename) {
                        Ok(()) => {
                            let mut ticket = 0;
                            vm.notice.update(|n| ticket = n.show(NOTICE_TEXT));
                            gloo_timers::future::TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
                            vm.notice.update(|n| n.expire(ticket));
                        }
                        Err(e) => {
                            log::error!("Certificate download failed: {}", e);
                            vm.error.set(Some(format!("Error saving certificate: {}", e)));
                        }
                    }
                }
                SubmitFeedback::Error(message) => vm.error.set(Some(message)),
            }
        });
    };

    view! {
        <div class="page page--generator">
            <PageHeader
                title=GenerateCertificate::display_name()
                subtitle="Fill in the details and watch the preview update as you type."
            >
                <A href="/verify">{icon("search")}" Verify a certificate"</A>
            </PageHeader>

            {move || vm.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
            {move || vm.notice.with(|n| n.text().map(str::to_string)).map(|n| view! { <div class="alert alert--success">{icon("check")}" "{n}</div> })}

            <div class="generator">
                <form class="generator__form form" on:submit=handle_submit>
                    <Select
                        id="certType"
                        label="Certificate Type"
                        value=vm.cert_type
                        options=cert_type_options
                        on_change=Callback::new(move |v: String| vm.on_cert_type(v))
                    />

                    <div id="customTitleDiv" style=move || display(vm.preview.with(|p| p.show_custom_title))>
                        <Input
                            id="customTitle"
                            label="Custom Title"
                            value=vm.custom_title
                            placeholder="Enter a custom certificate title"
                            on_input=Callback::new(move |v: String| vm.on_custom_title(v))
                        />
                    </div>

                    <Input
                        id="name"
                        label="Recipient Name"
                        value=vm.name
                        on_input=Callback::new(move |v: String| vm.on_name(v))
                    />
                    <Input
                        id="course"
                        label="Course / Event"
                        value=vm.course
                        on_input=Callback::new(move |v: String| vm.on_course(v))
                    />
                    <Input
                        id="date"
                        label="Date"
                        input_type="date"
                        value=vm.date
                        on_input=Callback::new(move |v: String| vm.on_date(v))
                    />

                    <div id="achievementFields" style=move || display(vm.preview.with(|p| p.show_achievement_fields))>
                        <Select
                            id="positionType"
                            label="Position Type"
                            value=vm.position_type
                            options=position_options
                            empty_option="Select..."
                            on_change=Callback::new(move |v: String| vm.on_position_type(v))
                        />
                        <Input
                            id="positionValue"
                            label="Position Value"
                            value=vm.position_value
                            placeholder="e.g. 1st"
                            on_input=Callback::new(move |v: String| vm.on_position_value(v))
                        />
                    </div>

                    <FileInput
                        id="logo"
                        label="Logo"
                        accept="image/*"
                        input_ref=logo_ref
                        on_select=Callback::new(move |url: String| vm.on_logo(url))
                    />
                    <FileInput
                        id="signature"
                        label="Signature"
                        accept="image/*"
                        input_ref=signature_ref
                        on_select=Callback::new(move |url: String| vm.on_signature(url))
                    />

                    <Button button_type="submit">
                        {icon("download")}
                        {move || if vm.in_flight.get() > 0 { " Generating..." } else { " Generate Certificate" }}
                    </Button>
                </form>

                <div class="generator__preview certificate-preview">
                    <img
                        id="previewLogo"
                        class="certificate-preview__logo"
                        alt="Logo"
                        src=move || vm.preview.with(|p| p.logo_url.clone().unwrap_or_default())
                        style=move || display(vm.preview.with(|p| p.logo_url.is_some()))
                    />
                    <h2 id="previewTitle" class="certificate-preview__title">
                        {move || vm.preview.with(|p| p.title.clone())}
                    </h2>
                    <p class="certificate-preview__caption">"This certificate is presented to"</p>
                    <h3 id="previewName" class="certificate-preview__name">
                        {move || vm.preview.with(|p| p.name.clone())}
                    </h3>
                    <p id="previewDetails" class="certificate-preview__details">
                        {move || vm.preview.with(|p| p.details.clone())}
                    </p>
                    <p id="previewAchievement" class="certificate-preview__achievement">
                        {move || vm.preview.with(|p| p.achievement.clone())}
                    </p>
                    <p id="previewDate" class="certificate-preview__date">
                        {move || vm.preview.with(|p| p.date.clone())}
                    </p>
                    <img
                        id="previewSignature"
                        class="certificate-preview__signature"
                        alt="Signature"
                        src=move || vm.preview.with(|p| p.signature_url.clone().unwrap_or_default())
                        style=move || display(vm.preview.with(|p| p.signature_url.is_some()))
                    />
                </div>
            </div>
        </div>
    }
}
