use super::state::{CalculatorEvent, RowPhase};
use super::view_model::CalculatorViewModel;
use crate::shared::number_format::format_money;
use leptos::prelude::*;
use uuid::Uuid;

/// Одна строка калькулятора
#[component]
pub fn LineItemRow(vm: CalculatorViewModel, row_key: Uuid) -> impl IntoView {
    let item = Memo::new(move |_| vm.state.with(|s| s.item(row_key).cloned()));
    let categories = vm.state.with_untracked(|s| s.catalog.categories.clone());
    let initial_quantity = item.get_untracked().map(|i| i.quantity).unwrap_or_default();

    // Entering: фокус на поле количества
    let qty_ref = NodeRef::<leptos::html::Input>::new();
    Effect::new(move |_| {
        if let Some(input) = qty_ref.get() {
            if item.get_untracked().map(|i| i.phase) == Some(RowPhase::Entering) {
                if let Err(e) = input.focus() {
                    log::error!("focus failed: {:?}", e);
                }
            }
        }
    });

    let row_class = move || match item.get().map(|i| i.phase) {
        Some(RowPhase::Entering) => "calc-row calc-row--entering",
        Some(RowPhase::Exiting) => "calc-row calc-row--exiting",
        _ => "calc-row",
    };
    let current_service = move || item.get().and_then(|i| i.service_id);

    view! {
        <tr class=row_class>
            <td data-label-service=move || vm.t("service")>
                <select
                    class="calc-row__service"
                    on:change=move |ev| {
                        vm.dispatch(CalculatorEvent::ServiceChanged {
                            key: row_key,
                            service_id: event_target_value(&ev),
                        })
                    }
                >
                    {categories
                        .into_iter()
                        .map(|category| {
                            view! {
                                <optgroup label=category.name>
                                    {category
                                        .services
                                        .into_iter()
                                        .map(|service| {
                                            let id = service.id;
                                            view! {
                                                <option
                                                    value=id.to_string()
                                                    selected=move || current_service() == Some(id)
                                                >
                                                    {service.name}
                                                </option>
                                            }
                                        })
                                        .collect_view()}
                                </optgroup>
                            }
                        })
                        .collect_view()}
                </select>
            </td>
            <td data-label-qty=move || vm.t("quantity")>
                <input
                    node_ref=qty_ref
                    type="number"
                    min="0"
                    class="calc-row__qty"
                    prop:value=initial_quantity
                    on:input=move |ev| {
                        vm.dispatch(CalculatorEvent::QuantityChanged {
                            key: row_key,
                            value: event_target_value(&ev),
                        })
                    }
                />
            </td>
            <td data-label-price=move || vm.t("unitPrice")>
                <span class="price">
                    {move || {
                        let service_id = current_service();
                        vm.state.with(|s| s.unit_price_label(service_id))
                    }}
                </span>
            </td>
            <td data-label-total=move || vm.t("total")>
                <span class="item-total">
                    {move || item.get().map(|i| format_money(i.total)).unwrap_or_default()}
                </span>
            </td>
            <td class="select-col">
                <input
                    type="checkbox"
                    prop:checked=move || item.get().map(|i| i.selected).unwrap_or(false)
                    on:change=move |ev| {
                        vm.dispatch(CalculatorEvent::SelectionToggled {
                            key: row_key,
                            selected: event_target_checked(&ev),
                        })
                    }
                />
            </td>
            <td>
                <button
                    type="button"
                    class="remove-btn"
                    title=move || vm.t("remove")
                    on:click=move |_| vm.dispatch(CalculatorEvent::ItemRemoved(row_key))
                >
                    "x"
                </button>
            </td>
        </tr>
    }
}
