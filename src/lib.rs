#![cfg(target_arch = "wasm32")]
use crate::core::{
    load_first, normalized_scale, scroll_progress, ScrollPathAnimator, TweenedPose,
    MODEL_CANDIDATES,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod frame;
mod page;
mod slider;
mod stage;
mod timers;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("skyline-web starting");

    let document = dom::window_document().ok_or_else(|| JsValue::from_str("no document"))?;
    if document.ready_state() == "loading" {
        dom::add_once_listener(&document, "DOMContentLoaded", boot)
            .map_err(|e| JsValue::from_str(&format!("{:?}", e)))?;
    } else {
        boot();
    }
    Ok(())
}

fn boot() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    if let Err(e) = page::wire_menu_toggle(&document) {
        log::warn!("[page] menu toggle not wired: {}", e);
    }
    match page::duplicate_logo_track(&document) {
        Ok(n) => log::info!("[page] duplicated {} logos", n),
        Err(e) => log::warn!("[page] logo marquee skipped: {}", e),
    }

    // Each slider stands alone: one with broken markup must not stop the other.
    for selectors in [constants::SERVICES_SLIDER, constants::WHAT_WE_DO_SLIDER] {
        if let Err(e) = slider::mount(&window, &document, &selectors) {
            log::error!("[carousel:{}] not mounted: {}", selectors.name, e);
        }
    }

    if !stage::is_available() {
        log::warn!(
            "[flight] no `{}` on the page; flight disabled",
            constants::STAGE_GLOBAL
        );
        return Ok(());
    }
    let animator: frame::FlightAnimator =
        Rc::new(RefCell::new(ScrollPathAnimator::new(TweenedPose::new())));
    wire_scroll(&window, animator.clone())?;
    frame::start_loop(Rc::new(RefCell::new(frame::FrameContext::new(
        animator.clone(),
    ))));
    spawn_local(load_model(animator));
    Ok(())
}

fn wire_scroll(window: &web::Window, animator: frame::FlightAnimator) -> anyhow::Result<()> {
    let win = window.clone();
    dom::add_listener(window, "scroll", move |_| {
        let Some(root) = win.document().and_then(|d| d.document_element()) else {
            return;
        };
        let mut top = f64::from(root.scroll_top());
        if top == 0.0 {
            top = win.page_y_offset().unwrap_or(0.0);
        }
        let progress = scroll_progress(
            top,
            f64::from(root.scroll_height()),
            f64::from(root.client_height()),
        );
        animator.borrow_mut().on_scroll(progress);
    })
}

async fn load_model(animator: frame::FlightAnimator) {
    let loaded = load_first(&MODEL_CANDIDATES, |source| {
        stage::load_model(source.to_string())
    })
    .await;
    let Some(loaded) = loaded else {
        // Scroll and entrance stay no-ops without a model.
        return;
    };
    match stage::bounding_size().and_then(|size| stage::set_scale(normalized_scale(size))) {
        Ok(()) => {}
        Err(e) => log::warn!("[flight] {} left unscaled: {:?}", loaded.source, e),
    }
    let mut animator = animator.borrow_mut();
    animator.stage_mut().set_model_loaded();
    animator.on_model_ready();
}
