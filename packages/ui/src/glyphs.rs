//! Soft integration with a host-page icon library.
//!
//! Pages may load `lucide` and mark placeholders with `data-lucide="..."`.
//! Those placeholders are only turned into SVGs when `lucide.createIcons()`
//! runs, so it has to be called again whenever the client replaces markup.
//! Missing library or a failing call are ignored.

/// Re-run `window.lucide.createIcons()` if the page has it.
#[cfg(target_arch = "wasm32")]
pub fn refresh() {
    use js_sys::{Function, Reflect};
    use wasm_bindgen::{JsCast, JsValue};

    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(lucide) = Reflect::get(&JsValue::from(window), &JsValue::from_str("lucide")) else {
        return;
    };
    if lucide.is_undefined() || lucide.is_null() {
        return;
    }
    let Ok(create) = Reflect::get(&lucide, &JsValue::from_str("createIcons")) else {
        return;
    };
    if let Some(create) = create.dyn_ref::<Function>() {
        if let Err(e) = create.call0(&lucide) {
            tracing::debug!("lucide.createIcons failed: {:?}", e);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn refresh() {}
