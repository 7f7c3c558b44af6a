//! Таблица переводов виджета
//!
//! Lookup is a pure function of the language code and the static table below.
//! A new language is one more entry in `TRANSLATIONS`.

use once_cell::sync::Lazy;
use std::collections::HashMap;

type Table = HashMap<&'static str, &'static str>;

const EN: &[(&str, &str)] = &[
    ("service", "Service"),
    ("quantity", "Qty"),
    ("unitPrice", "Unit price"),
    ("total", "Total"),
    ("addItem", "Add item"),
    ("removeSelected", "Remove selected"),
    ("selectAll", "Select all"),
    ("clearAll", "Clear all"),
    ("remove", "Remove"),
    ("grandTotal", "Grand total"),
    ("send", "Send email"),
    ("export", "Export CSV"),
    ("emailPlaceholder", "your@email"),
    ("negativeQuantity", "Quantity cannot be negative"),
    ("sendOk", "Ok"),
    ("sendError", "Error"),
    ("loadError", "Calculator is unavailable"),
    ("loading", "Loading..."),
];

const RU: &[(&str, &str)] = &[
    ("service", "Услуга"),
    ("quantity", "Кол-во"),
    ("unitPrice", "Цена"),
    ("total", "Итог"),
    ("addItem", "Добавить"),
    ("removeSelected", "Удалить выбранное"),
    ("selectAll", "Выбрать все"),
    ("clearAll", "Очистить все"),
    ("remove", "Удалить"),
    ("grandTotal", "Общая сумма"),
    ("send", "Отправить"),
    ("export", "CSV"),
    ("emailPlaceholder", "email"),
    ("negativeQuantity", "Количество не может быть отрицательным"),
    ("sendOk", "Готово"),
    ("sendError", "Ошибка"),
    ("loadError", "Калькулятор недоступен"),
    ("loading", "Загрузка..."),
];

const PL: &[(&str, &str)] = &[
    ("service", "Usługa"),
    ("quantity", "Liczba"),
    ("unitPrice", "Cena jednostkowa"),
    ("total", "Suma"),
    ("addItem", "Dodaj pozycję"),
    ("removeSelected", "Usuń zaznaczone"),
    ("selectAll", "Zaznacz wszystko"),
    ("clearAll", "Wyczyść wszystko"),
    ("remove", "Usuń"),
    ("grandTotal", "Suma całkowita"),
    ("send", "Wyślij"),
    ("export", "Eksportuj CSV"),
    ("emailPlaceholder", "twój email"),
    ("negativeQuantity", "Liczba nie może być ujemna"),
    ("sendOk", "Ok"),
    ("sendError", "Błąd"),
    ("loadError", "Kalkulator jest niedostępny"),
    ("loading", "Ładowanie..."),
];

const UK: &[(&str, &str)] = &[
    ("service", "Послуга"),
    ("quantity", "Кількість"),
    ("unitPrice", "Ціна за одиницю"),
    ("total", "Всього"),
    ("addItem", "Додати"),
    ("removeSelected", "Видалити обране"),
    ("selectAll", "Обрати все"),
    ("clearAll", "Очистити все"),
    ("remove", "Видалити"),
    ("grandTotal", "Загальна сума"),
    ("send", "Відправити"),
    ("export", "CSV"),
    ("emailPlaceholder", "твій email"),
    ("negativeQuantity", "Кількість не може бути від'ємною"),
    ("sendOk", "Готово"),
    ("sendError", "Помилка"),
    ("loadError", "Калькулятор недоступний"),
    ("loading", "Завантаження..."),
];

static TRANSLATIONS: Lazy<HashMap<&'static str, Table>> = Lazy::new(|| {
    [("en", EN), ("ru", RU), ("pl", PL), ("uk", UK)]
        .into_iter()
        .map(|(code, rows)| (code, rows.iter().copied().collect()))
        .collect()
});

/// Перевод ключа; неизвестный язык или ключ возвращает сам ключ
pub fn translate(language: &str, key: &str) -> String {
    TRANSLATIONS
        .get(language)
        .and_then(|table| table.get(key))
        .map(|s| s.to_string())
        .unwrap_or_else(|| key.to_string())
}

pub fn is_supported(language: &str) -> bool {
    TRANSLATIONS.contains_key(language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_known_keys() {
        assert_eq!(translate("en", "addItem"), "Add item");
        assert_eq!(translate("pl", "grandTotal"), "Suma całkowita");
        assert_eq!(translate("uk", "service"), "Послуга");
        assert_eq!(translate("ru", "selectAll"), "Выбрать все");
    }

    #[test]
    fn test_unknown_language_or_key_returns_key() {
        assert_eq!(translate("fr", "addItem"), "addItem");
        assert_eq!(translate("en", "noSuchKey"), "noSuchKey");
        assert_eq!(translate("", ""), "");
    }

    #[test]
    fn test_every_language_has_the_english_keys() {
        for code in ["ru", "pl", "uk"] {
            assert!(is_supported(code));
            for (key, _) in EN {
                assert_ne!(translate(code, key), *key, "{} is missing {}", code, key);
            }
        }
    }
}
