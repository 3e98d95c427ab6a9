//! Browser front end for the apoptotic automata search
//!
//! Wires the page's mode selectors and exposes the evolution to JS.

pub mod dom;
pub mod toggle;

use std::cell::RefCell;
use std::rc::Rc;

use aca_core::colour::palette;
use aca_core::{Evolution, EvolutionConfig};
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;

use crate::dom::HtmlControl;
pub use toggle::{ControlRole, DisplayTarget, Mode, Visibility, VisibilityToggler};

thread_local! {
    /// Toggler bound at start; its last click picks the evolution dimension
    static TOGGLER: RefCell<Option<Rc<VisibilityToggler<HtmlControl>>>> = const { RefCell::new(None) };
}

fn selected_mode() -> Option<Mode> {
    TOGGLER.with(|t| t.borrow().as_ref().and_then(|toggler| toggler.mode()))
}

/// A clicked mode selector overrides the dimension in the config
fn apply_selected_mode(config: &mut EvolutionConfig, mode: Option<Mode>) {
    if let Some(mode) = mode {
        config.dimension = mode.into();
    }
}

#[wasm_bindgen(start)]
pub fn main_js() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let document = dom::get_document().ok_or_else(|| JsValue::from_str("no document"))?;
    let toggler = Rc::new(VisibilityToggler::from_document(&document)?);
    dom::bind_mode_selectors(&document, &toggler)?;
    TOGGLER.with(|t| *t.borrow_mut() = Some(toggler));
    tracing::info!("Mode selectors bound");
    Ok(())
}

/// Run an evolution described by a JSON config and return the fittest board
/// as HTML table rows
///
/// Once a `1D`/`2D` selector has been clicked, its mode replaces the
/// config's `dimension`.
#[wasm_bindgen]
pub fn evolve(config_json: &str) -> Result<String, JsValue> {
    let to_js = |e: aca_core::Error| JsValue::from_str(&e.to_string());

    let mut config = EvolutionConfig::from_json(config_json).map_err(to_js)?;
    apply_selected_mode(&mut config, selected_mode());
    tracing::debug!(dimension = ?config.dimension, "Evolving");
    let mut evolution = Evolution::new(config, StdRng::from_entropy()).map_err(to_js)?;
    evolution.run().map_err(to_js)?;

    let num_states = evolution.config().num_states;
    let colours = palette(num_states, evolution.rng_mut());
    let best = evolution
        .best()
        .ok_or_else(|| JsValue::from_str("population is empty"))?;
    best.to_html_table(&colours).map_err(to_js)
}

/// `evolve`, placing the result into the table with id `table_id`
#[wasm_bindgen]
pub fn evolve_into(config_json: &str, table_id: &str) -> Result<(), JsValue> {
    let rows = evolve(config_json)?;
    dom::set_board_html(table_id, &rows)
}
