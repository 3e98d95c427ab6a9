use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlElement};

use crate::toggle::{ControlRole, DisplayTarget, Mode, VisibilityToggler};

/// Get document helper
pub fn get_document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Look up an element by id, failing with a message naming the id
fn html_element(doc: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    doc.get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("element #{id} not found")))?
        .dyn_into::<HtmlElement>()
        .map_err(|_| JsValue::from_str(&format!("element #{id} is not an HTML element")))
}

/// Page element controlled through its inline `display` style
pub struct HtmlControl(HtmlElement);

impl DisplayTarget for HtmlControl {
    fn set_display(&self, value: &str) {
        let _ = self.0.style().set_property("display", value);
    }
}

impl VisibilityToggler<HtmlControl> {
    /// Toggler for the `num-iters` controls of `doc`
    pub fn from_document(doc: &Document) -> Result<Self, JsValue> {
        let [input, label, line_break] =
            ControlRole::ALL.map(|role| html_element(doc, role.element_id()).map(HtmlControl));
        Ok(Self::new(input?, label?, line_break?))
    }
}

/// Wire the `1D` and `2D` selectors to the toggler
///
/// The listeners live as long as the page.
pub fn bind_mode_selectors(
    doc: &Document,
    toggler: &Rc<VisibilityToggler<HtmlControl>>,
) -> Result<(), JsValue> {
    for mode in [Mode::OneDimensional, Mode::TwoDimensional] {
        let selector = html_element(doc, mode.selector_id())?;
        let toggler = Rc::clone(toggler);
        let on_click = Closure::wrap(Box::new(move |_: web_sys::Event| {
            toggler.on_mode_selected(mode);
        }) as Box<dyn FnMut(_)>);
        selector.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())?;
        on_click.forget();
    }
    Ok(())
}

/// Replace the rows of a results table
pub fn set_board_html(table_id: &str, rows: &str) -> Result<(), JsValue> {
    let doc = get_document().ok_or_else(|| JsValue::from_str("no document"))?;
    html_element(&doc, table_id)?.set_inner_html(rows);
    Ok(())
}
