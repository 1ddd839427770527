use crate::ui::View;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Long pauses (background tab) should not turn into one giant step.
const MAX_FRAME_DT_SEC: f32 = 0.1;

pub struct FrameContext {
    pub view: Rc<RefCell<View>>,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn new(view: Rc<RefCell<View>>) -> Self {
        Self {
            view,
            last_instant: Instant::now(),
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32().min(MAX_FRAME_DT_SEC);
        self.last_instant = now;
        self.view.borrow_mut().animate(dt_sec);
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx_tick.borrow_mut().frame();
        if let (Some(w), Some(cb)) = (web::window(), tick_clone.borrow().as_ref()) {
            _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
        }
    }) as Box<dyn FnMut()>));
    let started = match (web::window(), tick.borrow().as_ref()) {
        (Some(w), Some(cb)) => w.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok(),
        _ => false,
    };
    if !started {
        log::error!("[frame] requestAnimationFrame unavailable; charts will not animate");
    }
}
