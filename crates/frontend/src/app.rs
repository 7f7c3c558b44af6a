use crate::domain::a001_calculator::ui::widget::CalculatorWidget;
use crate::shared::config::WidgetConfig;
use leptos::prelude::*;

#[component]
pub fn App(config: WidgetConfig) -> impl IntoView {
    view! {
        <CalculatorWidget config=config />
    }
}
