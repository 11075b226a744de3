//! Image preview wiring for file inputs.
//!
//! Reading is asynchronous and single-shot: selecting a file kicks off a
//! read whose completion callback writes the data URL into the preview
//! region. A new selection does not cancel a read already in flight; the
//! last read to complete wins the preview.

#[cfg(feature = "hydrate")]
use wasm_bindgen::{JsCast, closure::Closure};

#[cfg(feature = "hydrate")]
use crate::util::region::Region;

/// Mirror the input's selected image into the preview region, or clear and
/// hide the preview when nothing is selected.
#[cfg(feature = "hydrate")]
pub fn preview_image(input: &web_sys::HtmlInputElement, preview_id: &str) {
    let Some(file) = input.files().and_then(|files| files.item(0)) else {
        let region = Region::by_id(preview_id);
        region.set_source("");
        region.conceal();
        return;
    };

    let Ok(reader) = web_sys::FileReader::new() else {
        return;
    };
    let preview_id = preview_id.to_owned();
    let reader_for_cb = reader.clone();
    let on_loadend = Closure::once(move |_ev: web_sys::Event| {
        let Some(url) = reader_for_cb.result().ok().and_then(|v| v.as_string()) else {
            return;
        };
        let region = Region::by_id(&preview_id);
        region.set_source(&url);
        region.reveal();
    });
    reader.set_onloadend(Some(on_loadend.as_ref().unchecked_ref()));
    on_loadend.forget();

    if reader.read_as_data_url(&file).is_err() {
        log::error!("file preview read failed to start");
    }
}
