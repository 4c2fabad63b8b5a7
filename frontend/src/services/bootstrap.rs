//! Bindings to the Bootstrap tooltip and modal widgets loaded by the host page.

use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

/// Elements the tooltip widget is attached to
pub const TOOLTIP_SELECTOR: &str = "[data-bs-toggle=\"tooltip\"]";

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Tooltip;

    #[wasm_bindgen(static_method_of = Tooltip, js_namespace = bootstrap, js_name = getOrCreateInstance, catch)]
    fn get_or_create_instance(element: &Element) -> Result<Tooltip, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = bootstrap)]
    type Modal;

    #[wasm_bindgen(static_method_of = Modal, js_namespace = bootstrap, js_name = getOrCreateInstance, catch)]
    fn get_or_create_instance(element: &Element) -> Result<Modal, JsValue>;

    #[wasm_bindgen(method, catch)]
    fn show(this: &Modal) -> Result<(), JsValue>;
}

/// Attach tooltips to every tooltip-marked element currently in the document.
///
/// Uses `getOrCreateInstance`, so elements that already have a tooltip keep it.
/// Returns the number of elements that got a tooltip.
pub fn init_tooltips(document: &Document) -> usize {
    let elements = match document.query_selector_all(TOOLTIP_SELECTOR) {
        Ok(elements) => elements,
        Err(e) => {
            log::error!("❌ Could not query tooltip elements: {:?}", e);
            return 0;
        }
    };

    let mut initialized = 0;
    for i in 0..elements.length() {
        let Some(element) = elements.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        match Tooltip::get_or_create_instance(&element) {
            Ok(_) => initialized += 1,
            Err(e) => {
                log::warn!("⚠️ Bootstrap tooltip unavailable: {:?}", e);
                break;
            }
        }
    }
    initialized
}

/// Open the Bootstrap modal rooted at `element`
pub fn show_modal(element: &Element) -> Result<(), JsValue> {
    Modal::get_or_create_instance(element)?.show()
}
