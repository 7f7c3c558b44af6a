use contracts::domain::a001_calculator::catalog::{CalculatorData, DEFAULT_CURRENCY, DEFAULT_LANGUAGE};
use std::collections::HashMap;
use uuid::Uuid;

use crate::shared::locale::resolve_locale;

/// Фаза строки калькулятора
///
/// A removed row is detached from `CalculatorState::items`, so it has no phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowPhase {
    Entering,
    Active,
    Exiting,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub key: Uuid,
    pub service_id: Option<i64>,
    /// Raw text of the quantity input
    pub quantity: String,
    pub selected: bool,
    pub phase: RowPhase,
    pub unit_price: f64,
    pub total: f64,
}

impl LineItem {
    fn new(service_id: Option<i64>) -> Self {
        Self {
            key: Uuid::new_v4(),
            service_id,
            quantity: "0".to_string(),
            selected: false,
            phase: RowPhase::Entering,
            unit_price: 0.0,
            total: 0.0,
        }
    }

    /// Entering and Active rows are priced, Exiting ones are not
    pub fn is_live(&self) -> bool {
        self.phase != RowPhase::Exiting
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// Состояние одного экземпляра виджета
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    pub status: CatalogStatus,
    pub language: String,
    pub currency: String,
    pub catalog: CalculatorData,
    /// Local fallback for `CalculatorData::currency_by_lang`
    pub currency_by_lang: HashMap<String, String>,
    pub items: Vec<LineItem>,
    pub grand_total: f64,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CalculatorEvent {
    CatalogLoaded {
        data: CalculatorData,
        browser_languages: Vec<String>,
    },
    CatalogFailed,
    LanguageChanged(String),
    CurrencyChanged(String),
    ItemAdded,
    QuantityChanged { key: Uuid, value: String },
    /// `service_id` is the raw `<select>` value
    ServiceChanged { key: Uuid, service_id: String },
    SelectionToggled { key: Uuid, selected: bool },
    SelectAllToggled(bool),
    ItemRemoved(Uuid),
    SelectedRemoved,
    ClearedAll,
    ItemSettled(Uuid),
    ExitFinished { keys: Vec<Uuid>, reseed: bool },
}

/// Отложенные действия, которые планирует view model
#[derive(Debug, Clone, PartialEq)]
pub enum Schedule {
    /// Feed `ItemSettled(key)` back after the enter delay
    Settle(Uuid),
    /// Feed `ExitFinished { keys, reseed }` back after the exit delay
    Exit { keys: Vec<Uuid>, reseed: bool },
}

impl CalculatorState {
    pub fn new(currency_by_lang: HashMap<String, String>) -> Self {
        Self {
            status: CatalogStatus::Loading,
            language: DEFAULT_LANGUAGE.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            catalog: CalculatorData::default(),
            currency_by_lang,
            items: Vec::new(),
            grand_total: 0.0,
            error: None,
        }
    }

    pub fn item(&self, key: Uuid) -> Option<&LineItem> {
        self.items.iter().find(|i| i.key == key)
    }

    fn item_mut(&mut self, key: Uuid) -> Option<&mut LineItem> {
        self.items.iter_mut().find(|i| i.key == key)
    }

    pub fn live_items(&self) -> impl Iterator<Item = &LineItem> {
        self.items.iter().filter(|i| i.is_live())
    }

    /// Master checkbox: checked when every live row is selected
    pub fn all_selected(&self) -> bool {
        let mut live = self.live_items().peekable();
        live.peek().is_some() && live.all(|i| i.selected)
    }

    /// Apply one event; the returned timers must be scheduled by the caller
    pub fn apply(&mut self, event: CalculatorEvent) -> Vec<Schedule> {
        let mut scheduled = Vec::new();
        match event {
            CalculatorEvent::CatalogLoaded {
                data,
                browser_languages,
            } => {
                let currency_map = if data.currency_by_lang.is_empty() {
                    self.currency_by_lang.clone()
                } else {
                    data.currency_by_lang.clone()
                };
                let locale = resolve_locale(&browser_languages, &data, &currency_map);
                log::info!(
                    "Calculator catalog ready: {} categories, language={}, currency={}",
                    data.categories.len(),
                    locale.language,
                    locale.currency
                );
                self.catalog = data;
                self.language = locale.language;
                self.currency = locale.currency;
                self.status = CatalogStatus::Ready;
                self.items.clear();
                scheduled.push(self.add_item());
            }
            CalculatorEvent::CatalogFailed => {
                self.status = CatalogStatus::Failed;
            }
            CalculatorEvent::LanguageChanged(language) => {
                self.language = language;
            }
            CalculatorEvent::CurrencyChanged(currency) => {
                self.currency = currency;
            }
            CalculatorEvent::ItemAdded => {
                scheduled.push(self.add_item());
            }
            CalculatorEvent::QuantityChanged { key, value } => {
                if let Some(item) = self.item_mut(key) {
                    item.quantity = value;
                }
            }
            CalculatorEvent::ServiceChanged { key, service_id } => {
                if let Some(item) = self.item_mut(key) {
                    item.service_id = service_id.trim().parse().ok();
                }
            }
            CalculatorEvent::SelectionToggled { key, selected } => {
                if let Some(item) = self.item_mut(key) {
                    item.selected = selected;
                }
            }
            CalculatorEvent::SelectAllToggled(selected) => {
                for item in self.items.iter_mut().filter(|i| i.phase == RowPhase::Active) {
                    item.selected = selected;
                }
            }
            CalculatorEvent::ItemRemoved(key) => {
                let keys = self.begin_exit(|i| i.key == key);
                if !keys.is_empty() {
                    scheduled.push(Schedule::Exit { keys, reseed: false });
                }
            }
            CalculatorEvent::SelectedRemoved => {
                let keys = self.begin_exit(|i| i.selected);
                if !keys.is_empty() {
                    scheduled.push(Schedule::Exit { keys, reseed: false });
                }
            }
            CalculatorEvent::ClearedAll => {
                let keys = self.begin_exit(|_| true);
                // на пустом списке сразу добавляем новую строку
                scheduled.push(Schedule::Exit { keys, reseed: true });
            }
            CalculatorEvent::ItemSettled(key) => {
                if let Some(item) = self.item_mut(key) {
                    if item.phase == RowPhase::Entering {
                        item.phase = RowPhase::Active;
                    }
                }
            }
            CalculatorEvent::ExitFinished { keys, reseed } => {
                self.items
                    .retain(|i| !(i.phase == RowPhase::Exiting && keys.contains(&i.key)));
                // повторный "очистить все" до окончания выхода не добавляет вторую строку
                if reseed && !self.items.iter().any(LineItem::is_live) {
                    scheduled.push(self.add_item());
                }
            }
        }
        self.recompute();
        scheduled
    }

    fn add_item(&mut self) -> Schedule {
        let item = LineItem::new(self.catalog.first_service().map(|s| s.id));
        let key = item.key;
        log::debug!("Calculator row {} entering", key);
        self.items.push(item);
        Schedule::Settle(key)
    }

    /// Moves matching live rows to Exiting and returns their keys
    fn begin_exit(&mut self, predicate: impl Fn(&LineItem) -> bool) -> Vec<Uuid> {
        self.items
            .iter_mut()
            .filter(|i| i.is_live() && predicate(i))
            .map(|i| {
                i.phase = RowPhase::Exiting;
                i.selected = false;
                i.key
            })
            .collect()
    }
}
