//! Сборка CSV и запроса на отправку расчета
//!
//! CSV cells are joined as is, without quoting: a service name containing a comma
//! shifts the columns of its line.

use contracts::domain::a001_calculator::catalog::ServiceDto;
use contracts::domain::a001_calculator::send::{CalculationItemDto, SendCalculationRequest};

use super::state::{CalculatorState, LineItem};
use crate::shared::number_format::{format_money, format_number, parse_float_or_zero};

pub const CSV_HEADERS: [&str; 4] = ["service", "quantity", "unit_price", "total"];
pub const CSV_MIME: &str = "text/csv";

/// Live rows with a service that still resolves in the catalog
fn priced_rows(state: &CalculatorState) -> impl Iterator<Item = (&LineItem, &ServiceDto)> {
    state.live_items().filter_map(|item| {
        item.service_id
            .and_then(|id| state.catalog.find_service(id))
            .map(|service| (item, service))
    })
}

pub fn build_csv(state: &CalculatorState) -> String {
    let mut lines = vec![CSV_HEADERS.join(",")];
    for (item, service) in priced_rows(state) {
        let quantity = parse_float_or_zero(&item.quantity);
        let total = quantity * parse_float_or_zero(&service.price);
        lines.push(
            [
                service.name.clone(),
                format_number(quantity),
                service.price.clone(),
                format_money(total),
            ]
            .join(","),
        );
    }
    lines.join("\n")
}

/// Grand total here is re-summed from the serialized row totals, not taken from `state.grand_total`
pub fn build_send_request(state: &CalculatorState, email: &str) -> SendCalculationRequest {
    let calculation_items: Vec<CalculationItemDto> = priced_rows(state)
        .map(|(item, service)| {
            let quantity = parse_float_or_zero(&item.quantity);
            let total = quantity * parse_float_or_zero(&service.price);
            CalculationItemDto {
                service_id: service.id,
                quantity: if quantity == 0.0 { 0.0 } else { quantity },
                price_per_unit: service.price.clone(),
                item_total_price: format_money(total),
            }
        })
        .collect();

    let grand_total: f64 = calculation_items
        .iter()
        .map(|i| parse_float_or_zero(&i.item_total_price))
        .fold(0.0, |acc, v| acc + v);

    SendCalculationRequest {
        user_email: email.trim().to_string(),
        language_code: state.language.clone(),
        calculation_items,
        grand_total_price: format_money(grand_total),
    }
}
