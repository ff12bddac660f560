use crate::shared::download::object_url_for_file;
use leptos::html;
use leptos::prelude::*;

/// Labelled file picker.
///
/// Only the first selected file is used: an object URL for it is reported
/// through `on_select`. Clearing the selection reports nothing. The element is
/// exposed through `input_ref` so a form can read the chosen file on submit.
#[component]
pub fn FileInput(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
    /// e.g. "image/*"
    #[prop(optional, into)]
    accept: MaybeProp<String>,
    input_ref: NodeRef<html::Input>,
    on_select: Callback<String>,
) -> impl IntoView {
    let input_id = move || id.get().unwrap_or_default();
    let input_accept = move || accept.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=input_id>
                    {l}
                </label>
            })}
            <input
                id=input_id
                class="form__input form__input--file"
                type="file"
                accept=input_accept
                node_ref=input_ref
                on:change=move |ev| {
                    let input: web_sys::HtmlInputElement = event_target(&ev);
                    let Some(file) = input.files().and_then(|files| files.get(0)) else {
                        return;
                    };
                    match object_url_for_file(&file) {
                        Ok(url) => on_select.run(url),
                        Err(e) => log::error!("{}", e),
                    }
                }
            />
        </div>
    }
}

/// First file currently selected in a file input, if any
pub fn selected_file(node_ref: NodeRef<html::Input>) -> Option<web_sys::File> {
    node_ref
        .get_untracked()
        .and_then(|input| input.files())
        .and_then(|files| files.get(0))
}
