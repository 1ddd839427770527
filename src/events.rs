use crate::constants::UNAVAILABLE_NOTICE;
use crate::core::{BlendState, SwitchError};
use crate::dom;
use crate::ui::View;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone)]
pub struct Wiring {
    pub document: web::Document,
    pub state: Rc<RefCell<BlendState>>,
    pub view: Rc<RefCell<View>>,
}

pub fn wire_all(w: &Wiring) {
    wire_tabs(w);
    wire_sliders(w);
    wire_resize(w);
}

/// Recompute synchronously and push the result to the view.
fn refresh(w: &Wiring) {
    let state = w.state.borrow();
    let blend = state.derived();
    w.view
        .borrow_mut()
        .apply(&w.document, state.weights(), &blend);
}

pub fn handle_tab_click(w: &Wiring, product_id: &str) {
    let result = w.state.borrow_mut().select_product(product_id).map(|_| ());
    match result {
        Ok(()) => {
            w.view
                .borrow_mut()
                .sync_product(&w.document, &w.state.borrow());
            refresh(w);
        }
        Err(e @ SwitchError::Unavailable { .. }) => {
            log::warn!("[tabs] {e}");
            if let Some(window) = web::window() {
                _ = window.alert_with_message(UNAVAILABLE_NOTICE);
            }
        }
        Err(e) => log::warn!("[tabs] {e}"),
    }
}

fn wire_tabs(w: &Wiring) {
    let tabs: Vec<(&'static str, web::Element)> = w.view.borrow().tabs.clone();
    for (id, el) in tabs {
        let w = w.clone();
        dom::add_listener(el.as_ref(), "click", move |_: web::MouseEvent| {
            handle_tab_click(&w, id);
        });
    }
}

pub fn handle_slider_input(w: &Wiring, slot: usize, raw: &str) {
    // Range inputs report integers; anything else leaves the slot unchanged.
    let Ok(value) = raw.trim().parse::<u32>() else {
        log::debug!("[slider] ignoring non-integer value {raw:?} for slot {slot}");
        return;
    };
    w.state.borrow_mut().set_weight(slot, value);
    refresh(w);
}

fn wire_sliders(w: &Wiring) {
    let inputs: Vec<web::HtmlInputElement> =
        w.view.borrow().rows.iter().map(|r| r.input.clone()).collect();
    for (slot, input) in inputs.into_iter().enumerate() {
        let w = w.clone();
        let source = input.clone();
        dom::add_listener(input.as_ref(), "input", move |_: web::Event| {
            handle_slider_input(&w, slot, &source.value());
        });
    }
}

fn wire_resize(w: &Wiring) {
    if let Some(window) = web::window() {
        let view = w.view.clone();
        dom::add_listener(window.as_ref(), "resize", move |_: web::Event| {
            view.borrow().resize();
        });
    }
}
