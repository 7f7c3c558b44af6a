use contracts::domain::a001_calculator::catalog::CalculatorData;
use contracts::domain::a001_calculator::send::{SendCalculationRequest, SendCalculationResponse};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::shared::error::WidgetError;

/// Загрузить справочники калькулятора
pub async fn fetch_calculator_data(api_base: &str) -> Result<CalculatorData, WidgetError> {
    let url = api_url(api_base, "/calculator-data");

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await?;

    if !response.ok() {
        return Err(WidgetError::Request(format!("HTTP {}", response.status())));
    }

    let data: CalculatorData = response.json().await?;
    Ok(data)
}

/// Отправить расчет на email
///
/// The body is parsed even for error statuses: validation failures come back as
/// `{"status": "error", "message": ...}`.
pub async fn send_calculation(
    api_base: &str,
    request: &SendCalculationRequest,
) -> Result<SendCalculationResponse, WidgetError> {
    let url = api_url(api_base, "/send-calculation");

    let response = Request::post(&url)
        .json(request)?
        .send()
        .await?;

    log::debug!("send-calculation responded with HTTP {}", response.status());

    let data: SendCalculationResponse = response.json().await?;
    Ok(data)
}
