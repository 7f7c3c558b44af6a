//! Выбор начального языка и валюты
//!
//! Language and currency use different fallbacks: the currency is looked up by the
//! raw browser code even when the language itself falls back to the server default.

use contracts::domain::a001_calculator::catalog::CalculatorData;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLocale {
    pub language: String,
    pub currency: String,
}

/// Two-letter, lower-cased code of the top browser preference
pub fn browser_code(preferences: &[String]) -> Option<String> {
    let top = preferences.first()?;
    let code: String = top.chars().take(2).collect::<String>().to_lowercase();
    if code.is_empty() {
        None
    } else {
        Some(code)
    }
}

pub fn resolve_locale(
    preferences: &[String],
    data: &CalculatorData,
    currency_by_lang: &HashMap<String, String>,
) -> ResolvedLocale {
    let default_language = data.default_language().to_string();
    let default_currency = data.default_currency().to_string();

    let Some(code) = browser_code(preferences) else {
        return ResolvedLocale {
            language: default_language,
            currency: default_currency,
        };
    };

    let language = if data.has_language(&code) {
        code.clone()
    } else {
        default_language
    };

    let currency = currency_by_lang
        .get(&code)
        .filter(|mapped| data.find_currency(mapped).is_some())
        .cloned()
        .unwrap_or(default_currency);

    ResolvedLocale { language, currency }
}

/// Языковые предпочтения браузера: `navigator.languages`, затем `navigator.language`
pub fn browser_languages() -> Vec<String> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    let navigator = window.navigator();
    let list: Vec<String> = navigator
        .languages()
        .iter()
        .filter_map(|v| v.as_string())
        .collect();
    if !list.is_empty() {
        return list;
    }
    navigator.language().into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog(languages: &[&str], currencies: &[&str]) -> CalculatorData {
        serde_json::from_value(json!({
            "settings": { "default_language_id": "en", "default_currency_id": "USD" },
            "languages": languages.iter().map(|id| json!({ "id": id, "name": id })).collect::<Vec<_>>(),
            "currencies": currencies.iter().map(|c| json!({ "id": c, "code": c, "symbol": c, "name": c })).collect::<Vec<_>>(),
            "categories": []
        }))
        .unwrap()
    }

    fn map(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn prefs(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_ukrainian_browser_gets_uk_and_pln() {
        let data = catalog(&["en", "uk"], &["USD", "PLN"]);
        let resolved = resolve_locale(&prefs(&["uk"]), &data, &map(&[("uk", "PLN"), ("en", "USD")]));
        assert_eq!(resolved.language, "uk");
        assert_eq!(resolved.currency, "PLN");
    }

    #[test]
    fn test_unknown_browser_language_uses_defaults() {
        let data = catalog(&["en", "uk"], &["USD", "PLN"]);
        let resolved = resolve_locale(&prefs(&["fr"]), &data, &map(&[("uk", "PLN"), ("en", "USD")]));
        assert_eq!(resolved.language, "en");
        assert_eq!(resolved.currency, "USD");
    }

    #[test]
    fn test_currency_follows_browser_even_when_language_falls_back() {
        let data = catalog(&["en"], &["USD", "PLN"]);
        let resolved = resolve_locale(&prefs(&["uk-UA", "en"]), &data, &map(&[("uk", "PLN")]));
        assert_eq!(resolved.language, "en");
        assert_eq!(resolved.currency, "PLN");
    }

    #[test]
    fn test_mapped_currency_unknown_to_server() {
        let data = catalog(&["en", "pl"], &["USD"]);
        let resolved = resolve_locale(&prefs(&["PL-pl"]), &data, &map(&[("pl", "PLN")]));
        assert_eq!(resolved.language, "pl");
        assert_eq!(resolved.currency, "USD");
    }

    #[test]
    fn test_no_browser_language() {
        let data = catalog(&["en", "uk"], &["USD", "PLN"]);
        let resolved = resolve_locale(&[], &data, &map(&[("uk", "PLN")]));
        assert_eq!(
            resolved,
            ResolvedLocale {
                language: "en".to_string(),
                currency: "USD".to_string()
            }
        );
        assert_eq!(browser_code(&prefs(&[""])), None);
    }
}
