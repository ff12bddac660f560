use leptos::prelude::*;

/// Labelled `<select>` over a fixed list of `(value, label)` options
#[component]
pub fn Select(
    #[prop(optional, into)]
    label: MaybeProp<String>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    options: Vec<(String, String)>,
    /// Adds a leading empty option with this text
    #[prop(optional, into)]
    empty_option: Option<String>,
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    let empty = empty_option.map(|text| {
        view! {
            <option value="" selected=move || value.get().is_empty()>
                {text}
            </option>
        }
    });

    let options = options
        .into_iter()
        .map(|(val, label)| {
            let val_clone = val.clone();
            let is_selected = move || value.get() == val_clone;
            view! {
                <option value=val selected=is_selected>
                    {label}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class="form__select"
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {empty}
                {options}
            </select>
        </div>
    }
}
