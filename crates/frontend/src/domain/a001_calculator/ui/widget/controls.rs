use leptos::prelude::*;

/// Select with flat (value, label) options
#[component]
pub fn OptionSelect(
    /// Options: Vec of (value, label) tuples
    options: Vec<(String, String)>,
    /// Currently selected value
    value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <select
            class=move || format!("calc-select {}", additional_class())
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            {options
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
                .collect_view()}
        </select>
    }
}

/// Кнопка действия с переводимой надписью
#[component]
pub fn ActionButton(
    label: Signal<String>,
    on_click: Callback<()>,
    #[prop(optional, into)]
    class: MaybeProp<String>,
) -> impl IntoView {
    let additional_class = move || class.get().unwrap_or_default();

    view! {
        <button
            type="button"
            class=move || format!("calc-button {}", additional_class())
            on:click=move |_| on_click.run(())
        >
            {move || label.get()}
        </button>
    }
}
