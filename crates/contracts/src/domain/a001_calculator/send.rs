use serde::{Deserialize, Serialize};

/// Тело `POST /send-calculation`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendCalculationRequest {
    pub user_email: String,
    pub language_code: String,
    pub calculation_items: Vec<CalculationItemDto>,
    /// Sum of `item_total_price` values, 2 decimals
    pub grand_total_price: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationItemDto {
    pub service_id: i64,
    pub quantity: f64,
    pub price_per_unit: String,
    pub item_total_price: String,
}

/// Ответ бэкенда; оба поля опциональны
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SendCalculationResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
