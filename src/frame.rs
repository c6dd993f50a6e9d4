use crate::core::{ModelStage, ScrollPathAnimator, TweenedPose};
use crate::stage;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type FlightAnimator = Rc<RefCell<ScrollPathAnimator<TweenedPose>>>;

pub struct FrameContext {
    pub animator: FlightAnimator,
    pub last_instant: Instant,
    pub render_failed: bool,
}

impl FrameContext {
    pub fn new(animator: FlightAnimator) -> Self {
        Self {
            animator,
            last_instant: Instant::now(),
            render_failed: false,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let pose = {
            let mut animator = self.animator.borrow_mut();
            let model = animator.stage_mut();
            model.has_model().then(|| model.advance(dt_sec))
        };
        if let Some(pose) = pose {
            if let Err(e) = stage::apply_pose(&pose) {
                log::error!("[flight] set pose failed: {:?}", e);
            }
        }
        if let Err(e) = stage::render(dt_sec) {
            // Log once; the stage keeps failing the same way every frame.
            if !self.render_failed {
                log::error!("render error: {:?}", e);
                self.render_failed = true;
            }
        }
    }
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    let Some(w) = web::window() else {
        return;
    };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
