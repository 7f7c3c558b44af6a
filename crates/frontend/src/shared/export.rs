/// Скачивание сформированного текста как файла через Blob
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::error::WidgetError;

/// Инициирует скачивание текстового файла
pub fn download_text(content: &str, filename: &str, mime: &str) -> Result<(), WidgetError> {
    let blob = create_blob(content, mime)?;
    download_blob(&blob, filename)
}

/// Создает Blob объект с содержимым файла
fn create_blob(content: &str, mime: &str) -> Result<Blob, WidgetError> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_str_sequence_and_options(&array, &properties).map_err(WidgetError::dom)
}

/// Инициирует скачивание Blob через браузер
fn download_blob(blob: &Blob, filename: &str) -> Result<(), WidgetError> {
    let window = web_sys::window().ok_or(WidgetError::Dom("No window object".to_string()))?;
    let document = window
        .document()
        .ok_or(WidgetError::Dom("No document object".to_string()))?;
    let body = document
        .body()
        .ok_or(WidgetError::Dom("No body element".to_string()))?;

    let url = Url::create_object_url_with_blob(blob).map_err(WidgetError::dom)?;

    // Временная ссылка для скачивания
    let anchor = document
        .create_element("a")
        .map_err(WidgetError::dom)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(WidgetError::dom)?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(WidgetError::dom)?;

    body.append_child(&anchor).map_err(WidgetError::dom)?;
    anchor.click();
    body.remove_child(&anchor).map_err(WidgetError::dom)?;

    Url::revoke_object_url(&url).map_err(WidgetError::dom)?;

    Ok(())
}
