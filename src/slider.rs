use crate::core::{
    Carousel, CarouselConfig, SlideAxis, SlideSurface, TimerHandle, WheelOutcome,
    DOT_ACTIVE_CLASS,
};
use crate::dom;
use crate::timers::BrowserTimers;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Where one slider lives in the markup.
#[derive(Clone, Copy, Debug)]
pub struct SliderSelectors {
    pub name: &'static str,
    /// Element that receives wheel input.
    pub container: &'static str,
    /// Element whose transform moves the slides.
    pub track: &'static str,
    pub slide: &'static str,
    pub dots: &'static str,
    pub dot_class: &'static str,
    pub axis: SlideAxis,
}

pub type PageCarousel = Carousel<DomSlides, BrowserTimers>;
pub type WebCarousel = Rc<RefCell<PageCarousel>>;

type DotSink = Rc<RefCell<Option<Box<dyn FnMut(usize)>>>>;

/// Slide track and pagination dots of one slider.
pub struct DomSlides {
    document: web::Document,
    track: web::HtmlElement,
    dots_container: web::Element,
    dot_class: &'static str,
    slide_count: usize,
    dots: Vec<web::Element>,
    dot_listeners: Vec<Closure<dyn FnMut()>>,
    on_dot: DotSink,
}

impl DomSlides {
    fn new(
        document: web::Document,
        track: web::HtmlElement,
        dots_container: web::Element,
        dot_class: &'static str,
        slide_count: usize,
    ) -> Self {
        Self {
            document,
            track,
            dots_container,
            dot_class,
            slide_count,
            dots: Vec::new(),
            dot_listeners: Vec::new(),
            on_dot: Rc::new(RefCell::new(None)),
        }
    }

    fn create_dot(&self, index: usize) -> anyhow::Result<(web::Element, Closure<dyn FnMut()>)> {
        let dot = self
            .document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        _ = dot.class_list().add_1(self.dot_class);
        let on_dot = self.on_dot.clone();
        let listener = Closure::wrap(Box::new(move || {
            if let Some(f) = on_dot.borrow_mut().as_mut() {
                f(index);
            }
        }) as Box<dyn FnMut()>);
        dot.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        self.dots_container
            .append_child(&dot)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok((dot, listener))
    }
}

impl SlideSurface for DomSlides {
    fn slide_count(&self) -> usize {
        self.slide_count
    }

    fn show_offset(&mut self, offset_percent: f32, axis: SlideAxis) {
        let transform = match axis {
            SlideAxis::Vertical => format!("translateY(-{}%)", offset_percent),
            SlideAxis::Horizontal => format!("translateX(-{}%)", offset_percent),
        };
        _ = self.track.style().set_property("transform", &transform);
    }

    fn rebuild_dots(&mut self, count: usize) {
        self.dots_container.set_inner_html("");
        self.dots.clear();
        self.dot_listeners.clear();
        for i in 0..count {
            match self.create_dot(i) {
                Ok((dot, listener)) => {
                    self.dots.push(dot);
                    self.dot_listeners.push(listener);
                }
                Err(e) => log::error!("[carousel] dot {} not created: {:?}", i, e),
            }
        }
    }

    fn set_dot_active(&mut self, index: usize, active: bool) {
        if let Some(dot) = self.dots.get(index) {
            _ = dot
                .class_list()
                .toggle_with_force(DOT_ACTIVE_CLASS, active);
        }
    }
}

fn with_carousel(cell: &RefCell<PageCarousel>, f: impl FnOnce(&mut PageCarousel)) {
    match cell.try_borrow_mut() {
        Ok(mut carousel) => f(&mut carousel),
        Err(_) => log::warn!("[carousel] re-entrant event dropped"),
    }
}

fn with_weak(weak: &Weak<RefCell<PageCarousel>>, f: impl FnOnce(&mut PageCarousel)) {
    if let Some(cell) = weak.upgrade() {
        with_carousel(&cell, f);
    }
}

/// Discover one slider in the document, wire its input and start it.
///
/// Missing markup aborts only this slider.
pub fn mount(
    window: &web::Window,
    document: &web::Document,
    selectors: &SliderSelectors,
) -> anyhow::Result<WebCarousel> {
    let container = dom::query(document, selectors.container)?;
    let track = dom::query_html(document, selectors.track)?;
    let dots_container = dom::query(document, selectors.dots)?;
    let slide_count = dom::query_all(document, selectors.slide).len();

    let surface = DomSlides::new(
        document.clone(),
        track,
        dots_container,
        selectors.dot_class,
        slide_count,
    );
    let dot_sink = surface.on_dot.clone();
    let timers = BrowserTimers::new(window.clone());
    let timer_sink = timers.sink();
    let config = CarouselConfig {
        axis: selectors.axis,
        ..CarouselConfig::default()
    };
    let carousel: WebCarousel = Rc::new(RefCell::new(Carousel::new(
        selectors.name,
        surface,
        timers,
        config,
    )?));

    let weak = Rc::downgrade(&carousel);
    *timer_sink.borrow_mut() = Some(Box::new(move |handle: TimerHandle| {
        with_weak(&weak, |c| c.on_timer(handle));
    }));
    let weak = Rc::downgrade(&carousel);
    *dot_sink.borrow_mut() = Some(Box::new(move |index: usize| {
        with_weak(&weak, |c| c.click_dot(index));
    }));

    let wheel_target = carousel.clone();
    dom::add_blocking_listener(&container, "wheel", move |ev: web::Event| {
        ev.prevent_default();
        let delta_y = ev
            .dyn_ref::<web::WheelEvent>()
            .map(|w| w.delta_y())
            .unwrap_or(0.0);
        with_carousel(&wheel_target, |c| {
            if c.wheel(delta_y) == WheelOutcome::Swallowed {
                log::debug!("[carousel:{}] wheel swallowed", c.name());
            }
        });
    })?;

    carousel.borrow_mut().start();
    Ok(carousel)
}
