//! Пересчет строк и общей суммы
//!
//! Row totals are stored unrounded; rounding to 2 decimals happens only when a
//! value is displayed, so the grand total is the sum of raw products.

use super::state::CalculatorState;
use crate::shared::i18n::translate;
use crate::shared::number_format::parse_float_or_zero;

impl CalculatorState {
    /// Full pass over all rows; runs after every event
    pub fn recompute(&mut self) {
        self.error = None;
        let mut grand_total = 0.0;

        for item in self.items.iter_mut() {
            if !item.is_live() {
                continue;
            }
            let quantity = parse_float_or_zero(&item.quantity);
            if quantity < 0.0 {
                self.error = Some(translate(&self.language, "negativeQuantity"));
            }

            let unit_price = item
                .service_id
                .and_then(|id| self.catalog.find_service(id))
                .map(|s| parse_float_or_zero(&s.price))
                .unwrap_or(0.0);

            item.unit_price = unit_price;
            item.total = quantity * unit_price;
            grand_total += item.total;
        }

        self.grand_total = grand_total;
    }

    /// Unit price as sent by the backend, "0" for an unknown service
    pub fn unit_price_label(&self, service_id: Option<i64>) -> String {
        service_id
            .and_then(|id| self.catalog.find_service(id))
            .map(|s| match s.unit_id.and_then(|u| self.catalog.find_unit(u)) {
                Some(unit) => match unit.abbreviation.as_deref().filter(|a| !a.is_empty()) {
                    Some(abbr) => format!("{} / {}", s.price, abbr),
                    None => format!("{} / {}", s.price, unit.name),
                },
                None => s.price.clone(),
            })
            .unwrap_or_else(|| "0".to_string())
    }

    pub fn currency_label(&self) -> String {
        self.catalog
            .find_currency(&self.currency)
            .map(|c| c.label().to_string())
            .unwrap_or_else(|| self.currency.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::super::state::tests::{catalog, loaded, settle};
    use super::super::state::{CalculatorEvent, RowPhase};
    use crate::shared::number_format::format_money;
    use serde_json::json;

    fn set_qty(state: &mut super::CalculatorState, index: usize, value: &str) {
        let key = state.items[index].key;
        state.apply(CalculatorEvent::QuantityChanged { key, value: value.to_string() });
    }

    fn set_service(state: &mut super::CalculatorState, index: usize, service_id: &str) {
        let key = state.items[index].key;
        state.apply(CalculatorEvent::ServiceChanged { key, service_id: service_id.to_string() });
    }

    #[test]
    fn test_grand_total_matches_unrounded_products() {
        let mut state = loaded();
        for _ in 0..2 {
            let scheduled = state.apply(CalculatorEvent::ItemAdded);
            settle(&mut state, scheduled);
        }
        set_service(&mut state, 0, "2");
        set_qty(&mut state, 0, "0.05");
        set_service(&mut state, 1, "2");
        set_qty(&mut state, 1, "0.05");
        set_service(&mut state, 2, "3");
        set_qty(&mut state, 2, "1.5");

        let expected: f64 = [0.05 * 0.10, 0.05 * 0.10, 1.5 * 12.35].iter().sum();
        assert_eq!(state.grand_total, expected);
        assert_eq!(state.items[0].total, 0.05 * 0.10);

        let removed = state.items[1].key;
        state.apply(CalculatorEvent::ItemRemoved(removed));
        assert_eq!(state.grand_total, 0.05 * 0.10 + 1.5 * 12.35);
    }

    #[test]
    fn test_rounding_happens_only_for_display() {
        let mut state = loaded();
        for _ in 0..2 {
            let scheduled = state.apply(CalculatorEvent::ItemAdded);
            settle(&mut state, scheduled);
        }
        // 3 * 0.005 округленные по отдельности дали бы 0.03
        for i in 0..3 {
            set_service(&mut state, i, "2");
            set_qty(&mut state, i, "0.05");
        }
        assert_eq!(format_money(state.items[0].total), "0.01");
        assert_eq!(format_money(state.grand_total), "0.02");
    }

    #[test]
    fn test_negative_quantity_is_flagged_not_clamped() {
        let mut state = loaded();
        let scheduled = state.apply(CalculatorEvent::ItemAdded);
        settle(&mut state, scheduled);
        set_qty(&mut state, 0, "-1");
        set_qty(&mut state, 1, "3");

        assert_eq!(state.error.as_deref(), Some("Quantity cannot be negative"));
        assert_eq!(state.items.len(), 2);
        assert_eq!(state.items[0].quantity, "-1");
        assert_eq!(state.items[0].total, -1.0);
        assert_eq!(state.items[1].total, 3.0);

        // сообщение пересчитывается на каждом проходе
        state.apply(CalculatorEvent::LanguageChanged("pl".to_string()));
        assert_eq!(state.error.as_deref(), Some("Liczba nie może być ujemna"));

        set_qty(&mut state, 0, "1");
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_unparseable_quantity_counts_as_zero() {
        let mut state = loaded();
        set_qty(&mut state, 0, "abc");
        assert_eq!(state.items[0].total, 0.0);
        assert_eq!(state.error, None);
        set_qty(&mut state, 0, "2pcs");
        assert_eq!(state.items[0].total, 2.0);
    }

    #[test]
    fn test_unknown_service_prices_at_zero() {
        let mut state = loaded();
        set_qty(&mut state, 0, "5");
        set_service(&mut state, 0, "999");
        assert_eq!(state.items[0].service_id, Some(999));
        assert_eq!(state.items[0].unit_price, 0.0);
        assert_eq!(state.items[0].total, 0.0);
        assert_eq!(state.error, None);
        assert_eq!(state.unit_price_label(Some(999)), "0");

        set_service(&mut state, 0, "");
        assert_eq!(state.items[0].service_id, None);
        assert_eq!(state.grand_total, 0.0);
    }

    #[test]
    fn test_exiting_rows_are_not_priced() {
        let mut state = loaded();
        set_qty(&mut state, 0, "7");
        let key = state.items[0].key;
        state.apply(CalculatorEvent::ItemRemoved(key));
        assert_eq!(state.items[0].phase, RowPhase::Exiting);
        assert_eq!(state.grand_total, 0.0);
    }

    #[test]
    fn test_labels() {
        let mut state = loaded();
        state.catalog.units_of_measurement = serde_json::from_value(json!([
            { "id": 1, "name": "hour", "abbreviation": "h" },
            { "id": 2, "name": "month", "abbreviation": "" }
        ]))
        .unwrap();
        assert_eq!(state.unit_price_label(Some(1)), "1.00 / h");
        assert_eq!(state.unit_price_label(Some(3)), "12.35 / month");
        assert_eq!(state.unit_price_label(None), "0");

        assert_eq!(state.currency_label(), "$");
        state.apply(CalculatorEvent::CurrencyChanged("EUR".to_string()));
        assert_eq!(state.currency_label(), "EUR");
        assert_eq!(catalog().currencies.len(), 2);
    }
}
