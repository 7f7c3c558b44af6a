use super::controls::{ActionButton, OptionSelect};
use super::row::LineItemRow;
use super::state::{CalculatorEvent, CatalogStatus};
use super::view_model::CalculatorViewModel;
use crate::shared::config::WidgetConfig;
use leptos::prelude::*;

#[component]
pub fn CalculatorWidget(config: WidgetConfig) -> impl IntoView {
    let vm = CalculatorViewModel::new(config);
    vm.load();

    let status = Memo::new(move |_| vm.state.with(|s| s.status));

    view! {
        <div class="calculator">
            {move || match status.get() {
                CatalogStatus::Loading => {
                    view! { <div class="calc-notice">{move || vm.t("loading")}</div> }.into_any()
                }
                CatalogStatus::Failed => {
                    view! { <div class="calc-notice calc-notice--error">{move || vm.t("loadError")}</div> }
                        .into_any()
                }
                CatalogStatus::Ready => view! { <CalculatorBody vm=vm /> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn CalculatorBody(vm: CalculatorViewModel) -> impl IntoView {
    let label = move |key: &'static str| Signal::derive(move || vm.t(key));
    let row_keys = move || vm.state.with(|s| s.items.iter().map(|i| i.key).collect::<Vec<_>>());

    view! {
        <div class="controls">
            <OptionSelect
                options=vm.language_options()
                value=Signal::derive(move || vm.state.with(|s| s.language.clone()))
                on_change=Callback::new(move |code: String| vm.dispatch(CalculatorEvent::LanguageChanged(code)))
                class="calc-select--language"
            />
            <OptionSelect
                options=vm.currency_options()
                value=Signal::derive(move || vm.state.with(|s| s.currency.clone()))
                on_change=Callback::new(move |code: String| vm.dispatch(CalculatorEvent::CurrencyChanged(code)))
                class="calc-select--currency"
            />
        </div>

        <table class="calc-table">
            <thead>
                <tr>
                    <th>{move || vm.t("service")}</th>
                    <th>{move || vm.t("quantity")}</th>
                    <th>{move || vm.t("unitPrice")}</th>
                    <th>{move || vm.t("total")}</th>
                    <th class="select-col">
                        <input
                            type="checkbox"
                            title=move || vm.t("selectAll")
                            prop:checked=move || vm.state.with(|s| s.all_selected())
                            on:change=move |ev| {
                                vm.dispatch(CalculatorEvent::SelectAllToggled(event_target_checked(&ev)))
                            }
                        />
                    </th>
                    <th></th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=row_keys
                    key=|key| *key
                    children=move |key| view! { <LineItemRow vm=vm row_key=key /> }
                />
            </tbody>
        </table>

        <div class="calc-actions">
            <ActionButton
                label=label("addItem")
                on_click=Callback::new(move |_| vm.dispatch(CalculatorEvent::ItemAdded))
                class="add-btn"
            />
            <ActionButton
                label=label("removeSelected")
                on_click=Callback::new(move |_| vm.dispatch(CalculatorEvent::SelectedRemoved))
                class="remove-selected-btn"
            />
            <ActionButton
                label=label("clearAll")
                on_click=Callback::new(move |_| vm.dispatch(CalculatorEvent::ClearedAll))
                class="clear-all-btn"
            />
        </div>

        {move || vm.state.with(|s| s.error.clone()).map(|e| view! { <div class="error">{e}</div> })}

        <div class="grand-total">{move || vm.grand_total_label()}</div>

        <div class="calc-send">
            <input
                type="email"
                class="calc-email"
                placeholder=move || vm.t("emailPlaceholder")
                prop:value=move || vm.email.get()
                on:input=move |ev| vm.email.set(event_target_value(&ev))
            />
            <ActionButton
                label=label("send")
                on_click=Callback::new(move |_| vm.send_command())
                class="send-btn"
            />
            <ActionButton
                label=label("export")
                on_click=Callback::new(move |_| vm.export_csv_command())
                class="export-btn"
            />
        </div>
    }
}
