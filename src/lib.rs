#![cfg(target_arch = "wasm32")]
use crate::core::{Blend, BlendState, Catalog, Profile, Weights};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod charts;
mod constants;
pub mod core;
mod dom;
mod events;
mod frame;
mod layout;
mod ui;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("blend-lab starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    // Guard against a second start() from hot reload.
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let catalog = Catalog::builtin()?;
    log::info!(
        "[catalog] products={} ({})",
        catalog.products().len(),
        catalog
            .products()
            .iter()
            .map(|p| p.id)
            .collect::<Vec<_>>()
            .join(", ")
    );
    let state = BlendState::new(catalog)?;
    let view = ui::View::build(&document, &state)?;

    let wiring = events::Wiring {
        document,
        state: Rc::new(RefCell::new(state)),
        view: Rc::new(RefCell::new(view)),
    };
    events::wire_all(&wiring);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext::new(wiring.view.clone())));
    frame::start_loop(frame_ctx);
    Ok(())
}

fn set(target: &js_sys::Object, key: &str, value: &JsValue) -> Result<(), JsValue> {
    js_sys::Reflect::set(target, &JsValue::from_str(key), value).map(|_| ())
}

fn profile_to_js(profile: &Profile) -> Result<js_sys::Array, JsValue> {
    let out = js_sys::Array::new();
    for entry in profile {
        let obj = js_sys::Object::new();
        set(&obj, "label", &JsValue::from_str(entry.label))?;
        set(&obj, "key", &JsValue::from_str(entry.key))?;
        set(&obj, "value", &JsValue::from_f64(entry.value))?;
        if let Some(full) = entry.full_mark {
            set(&obj, "fullMark", &JsValue::from_f64(full))?;
        }
        out.push(&obj);
    }
    Ok(out)
}

/// Compute a blend for an external chart engine:
/// `{ color, health: [{label, key, value, fullMark}], flavor: [{label, key, value}] }`.
///
/// Unknown products are an error; unavailable ones yield the neutral fallbacks.
#[wasm_bindgen]
pub fn blend_snapshot(product_id: &str, w0: u32, w1: u32, w2: u32) -> Result<JsValue, JsValue> {
    let blend = Catalog::with_builtin(|catalog| {
        catalog
            .product(product_id)
            .map(|product| Blend::compute(&catalog.slots(product), &Weights::new(w0, w1, w2)))
    })
    .map_err(|e| JsValue::from_str(&e.to_string()))?
    .ok_or_else(|| JsValue::from_str(&format!("unknown product `{product_id}`")))?;

    let obj = js_sys::Object::new();
    set(&obj, "color", &JsValue::from_str(&blend.liquid.to_css()))?;
    set(&obj, "health", &profile_to_js(&blend.health)?)?;
    set(&obj, "flavor", &profile_to_js(&blend.flavor)?)?;
    Ok(obj.into())
}
