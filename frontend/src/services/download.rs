//! Browser download trigger: blob -> object URL -> temporary anchor click.

use gloo_file::{Blob, ObjectUrl};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlAnchorElement;

use common::export::ExportFile;

pub fn download_export(file: &ExportFile) -> Result<(), JsValue> {
    save_bytes(file.content.as_bytes(), file.mime, &file.file_name)
}

/// Hands `bytes` to the browser as a file named `file_name`. The object URL
/// is revoked when this returns.
pub fn save_bytes(bytes: &[u8], mime: &str, file_name: &str) -> Result<(), JsValue> {
    let blob = Blob::new_with_options(bytes, Some(mime));
    let url = ObjectUrl::from(blob);

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("document is not available"))?;
    let body = document
        .body()
        .ok_or_else(|| JsValue::from_str("document has no body"))?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    body.append_child(&anchor)?;
    anchor.click();
    body.remove_child(&anchor)?;
    Ok(())
}
