use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const DEFAULT_LANGUAGE: &str = "en";
pub const DEFAULT_CURRENCY: &str = "USD";

/// Ответ `GET /calculator-data`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorData {
    #[serde(default)]
    pub settings: CalculatorSettings,
    #[serde(default)]
    pub languages: Vec<LanguageDto>,
    #[serde(default)]
    pub currencies: Vec<CurrencyDto>,
    #[serde(default)]
    pub units_of_measurement: Vec<UnitDto>,
    #[serde(default)]
    pub categories: Vec<CategoryDto>,
    /// Not sent by every backend version; empty map means "use local config"
    #[serde(default)]
    pub currency_by_lang: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorSettings {
    pub default_language_id: Option<String>,
    pub default_currency_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageDto {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyDto {
    pub id: String,
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(default)]
    pub name: String,
}

impl CurrencyDto {
    /// Код валюты: `code`, если бэкенд его прислал, иначе `id`
    pub fn key(&self) -> &str {
        match self.code.as_deref() {
            Some(code) if !code.is_empty() => code,
            _ => &self.id,
        }
    }

    pub fn label(&self) -> &str {
        match self.symbol.as_deref() {
            Some(symbol) if !symbol.is_empty() => symbol,
            _ => self.key(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDto {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub services: Vec<ServiceDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceDto {
    pub id: i64,
    pub name: String,
    /// Decimal string as rendered by the backend, e.g. "12.50"
    pub price: String,
    #[serde(default)]
    pub unit_id: Option<i64>,
}

impl CalculatorData {
    pub fn default_language(&self) -> &str {
        self.settings
            .default_language_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .unwrap_or(DEFAULT_LANGUAGE)
    }

    pub fn default_currency(&self) -> &str {
        self.settings
            .default_currency_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .unwrap_or(DEFAULT_CURRENCY)
    }

    /// Services in display order: category by category
    pub fn services(&self) -> impl Iterator<Item = &ServiceDto> {
        self.categories.iter().flat_map(|c| c.services.iter())
    }

    pub fn first_service(&self) -> Option<&ServiceDto> {
        self.services().next()
    }

    pub fn find_service(&self, id: i64) -> Option<&ServiceDto> {
        self.services().find(|s| s.id == id)
    }

    pub fn find_currency(&self, key: &str) -> Option<&CurrencyDto> {
        self.currencies.iter().find(|c| c.key() == key)
    }

    pub fn find_unit(&self, id: i64) -> Option<&UnitDto> {
        self.units_of_measurement.iter().find(|u| u.id == id)
    }

    pub fn has_language(&self, id: &str) -> bool {
        self.languages.iter().any(|l| l.id == id)
    }
}
