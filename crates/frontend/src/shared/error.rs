use thiserror::Error;

/// Ошибки виджета калькулятора
#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("Invalid widget config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Failed to parse response: {0}")]
    Parse(String),

    #[error("DOM error: {0}")]
    Dom(String),
}

impl From<gloo_net::Error> for WidgetError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => WidgetError::Parse(e.to_string()),
            other => WidgetError::Request(other.to_string()),
        }
    }
}

impl WidgetError {
    /// JsValue из web_sys не реализует Display
    pub fn dom(value: impl std::fmt::Debug) -> Self {
        WidgetError::Dom(format!("{:?}", value))
    }
}
