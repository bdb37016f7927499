use gloo::file::{Blob, ObjectUrl};
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

/// Hand `bytes` to the browser as a file download named `file_name`.
pub fn save_bytes(bytes: &[u8], file_name: &str, mime_type: &str) -> Result<(), String> {
    let blob = Blob::new_with_options(bytes, Some(mime_type));
    let url = ObjectUrl::from(blob);

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or("No document available")?;
    let body = document.body().ok_or("No document body")?;
    let link = document
        .create_element("a")
        .map_err(|e| format!("{:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| "Created element is not an anchor".to_string())?;

    link.set_href(&url);
    link.set_download(file_name);
    body.append_child(&link).map_err(|e| format!("{:?}", e))?;
    link.click();
    link.remove();
    Ok(())
}
