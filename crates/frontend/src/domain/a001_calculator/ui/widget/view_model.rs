use super::export::{build_csv, build_send_request, CSV_MIME};
use super::model;
use super::state::{CalculatorEvent, CalculatorState, Schedule};
use crate::shared::config::WidgetConfig;
use crate::shared::error::WidgetError;
use crate::shared::export::download_text;
use crate::shared::i18n::translate;
use crate::shared::locale::browser_languages;
use crate::shared::number_format::format_money;
use contracts::domain::a001_calculator::send::SendCalculationResponse;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// ViewModel виджета: единственная точка изменения состояния
///
/// `Copy`, so every closure in the view gets its own handle. Each widget
/// instance owns its own signals; nothing is global.
#[derive(Clone, Copy)]
pub struct CalculatorViewModel {
    pub state: RwSignal<CalculatorState>,
    pub email: RwSignal<String>,
    config: StoredValue<WidgetConfig>,
}

impl CalculatorViewModel {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            state: RwSignal::new(CalculatorState::new(config.currency_by_lang.clone())),
            email: RwSignal::new(String::new()),
            config: StoredValue::new(config),
        }
    }

    /// Apply an event and arm the timers it asks for
    pub fn dispatch(&self, event: CalculatorEvent) {
        let scheduled = self.state.try_update(|s| s.apply(event)).unwrap_or_default();
        for next in scheduled {
            self.schedule(next);
        }
    }

    fn schedule(&self, next: Schedule) {
        let vm = *self;
        let (delay, event) = match next {
            Schedule::Settle(key) => (
                self.config.with_value(|c| c.enter_delay_ms),
                CalculatorEvent::ItemSettled(key),
            ),
            Schedule::Exit { keys, reseed } => (
                self.config.with_value(|c| c.exit_delay_ms),
                CalculatorEvent::ExitFinished { keys, reseed },
            ),
        };
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            vm.dispatch(event);
        });
    }

    /// Load catalog from server once, at mount
    pub fn load(&self) {
        let vm = *self;
        let api_base = self.config.with_value(|c| c.api_base.clone());
        spawn_local(async move {
            match model::fetch_calculator_data(&api_base).await {
                Ok(data) => vm.dispatch(CalculatorEvent::CatalogLoaded {
                    data,
                    browser_languages: browser_languages(),
                }),
                Err(e) => {
                    log::error!("Failed to load calculator data: {}", e);
                    vm.dispatch(CalculatorEvent::CatalogFailed);
                }
            }
        });
    }

    /// Reactive translation for the current language
    pub fn t(&self, key: &'static str) -> String {
        self.state.with(|s| translate(&s.language, key))
    }

    fn t_untracked(&self, key: &'static str) -> String {
        self.state.with_untracked(|s| translate(&s.language, key))
    }

    pub fn grand_total_label(&self) -> String {
        self.state.with(|s| {
            format!(
                "{}: {} {}",
                translate(&s.language, "grandTotal"),
                format_money(s.grand_total),
                s.currency_label()
            )
        })
    }

    pub fn language_options(&self) -> Vec<(String, String)> {
        self.state.with_untracked(|s| {
            s.catalog
                .languages
                .iter()
                .map(|l| (l.id.clone(), l.name.clone()))
                .collect()
        })
    }

    pub fn currency_options(&self) -> Vec<(String, String)> {
        self.state.with_untracked(|s| {
            s.catalog
                .currencies
                .iter()
                .map(|c| (c.key().to_string(), c.label().to_string()))
                .collect()
        })
    }

    pub fn export_csv_command(&self) {
        let csv = self.state.with_untracked(build_csv);
        let filename = self.config.with_value(|c| c.csv_filename.clone());
        match download_text(&csv, &filename, CSV_MIME) {
            Ok(()) => log::info!("Exported {} as CSV", filename),
            Err(e) => log::error!("CSV export failed: {}", e),
        }
    }

    /// Send current calculation by email; every click is an independent request
    pub fn send_command(&self) {
        let email = self.email.get_untracked();
        let request = self.state.with_untracked(|s| build_send_request(s, &email));
        let ok_label = self.t_untracked("sendOk");
        let error_label = self.t_untracked("sendError");
        let api_base = self.config.with_value(|c| c.api_base.clone());

        spawn_local(async move {
            let outcome = model::send_calculation(&api_base, &request).await;
            match &outcome {
                Ok(response) => log::info!("Calculation sent, status={:?}", response.status),
                Err(e) => log::error!("Failed to send calculation: {}", e),
            }
            notify(&send_notice(outcome, ok_label, error_label));
        });
    }
}

/// Текст уведомления после отправки: сообщение сервера, иначе общий ответ
fn send_notice(
    outcome: Result<SendCalculationResponse, WidgetError>,
    ok_label: String,
    error_label: String,
) -> String {
    match outcome {
        Ok(response) => response.message.filter(|m| !m.is_empty()).unwrap_or(ok_label),
        Err(_) => error_label,
    }
}

fn notify(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::error!("alert failed: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn notice(outcome: Result<SendCalculationResponse, WidgetError>) -> String {
        send_notice(outcome, "Ok".to_string(), "Error".to_string())
    }

    #[test]
    fn test_server_message_wins() {
        let response = SendCalculationResponse {
            status: Some("error".to_string()),
            message: Some("Invalid email address.".to_string()),
        };
        assert_eq!(notice(Ok(response)), "Invalid email address.");
    }

    #[test]
    fn test_missing_or_empty_message_uses_ok_label() {
        assert_eq!(notice(Ok(SendCalculationResponse::default())), "Ok");
        let empty = SendCalculationResponse {
            status: Some("success".to_string()),
            message: Some(String::new()),
        };
        assert_eq!(notice(Ok(empty)), "Ok");
    }

    #[test]
    fn test_failure_uses_error_label() {
        assert_eq!(notice(Err(WidgetError::Request("HTTP 502".to_string()))), "Error");
        assert_eq!(notice(Err(WidgetError::Parse("expected value".to_string()))), "Error");
    }
}
