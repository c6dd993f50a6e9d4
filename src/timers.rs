use crate::core::{TimerHandle, TimerHost, TimerKind};
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Late-bound receiver for fired timers; set once the owner exists.
pub type TimerSink = Rc<RefCell<Option<Box<dyn FnMut(TimerHandle)>>>>;

struct Pending {
    js_id: i32,
    kind: TimerKind,
    _callback: Closure<dyn FnMut()>,
}

/// `setTimeout`/`setInterval` backed [`TimerHost`].
///
/// Callbacks stay owned here until cancelled (or, for one-shots, until the
/// next schedule/cancel after they fired), so nothing is leaked to JS.
pub struct BrowserTimers {
    window: web::Window,
    sink: TimerSink,
    pending: FnvHashMap<TimerHandle, Pending>,
    fired: Rc<RefCell<Vec<TimerHandle>>>,
    next_id: u32,
}

impl BrowserTimers {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            sink: Rc::new(RefCell::new(None)),
            pending: FnvHashMap::default(),
            fired: Rc::new(RefCell::new(Vec::new())),
            next_id: 1,
        }
    }

    pub fn sink(&self) -> TimerSink {
        self.sink.clone()
    }

    fn prune_fired(&mut self) {
        for handle in self.fired.borrow_mut().drain(..) {
            self.pending.remove(&handle);
        }
    }

    fn clear(&self, pending: &Pending) {
        match pending.kind {
            TimerKind::Settle => self.window.clear_timeout_with_handle(pending.js_id),
            TimerKind::Autoplay => self.window.clear_interval_with_handle(pending.js_id),
        }
    }
}

impl TimerHost for BrowserTimers {
    fn schedule(&mut self, kind: TimerKind, delay: Duration) -> Option<TimerHandle> {
        self.prune_fired();
        let handle = TimerHandle(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);

        let sink = self.sink.clone();
        let fired = self.fired.clone();
        let callback = Closure::wrap(Box::new(move || {
            if let Some(f) = sink.borrow_mut().as_mut() {
                f(handle);
            }
            if kind == TimerKind::Settle {
                fired.borrow_mut().push(handle);
            }
        }) as Box<dyn FnMut()>);

        let ms = delay.as_millis().min(i32::MAX as u128) as i32;
        let f = callback.as_ref().unchecked_ref();
        let js_id = match kind {
            TimerKind::Settle => self
                .window
                .set_timeout_with_callback_and_timeout_and_arguments_0(f, ms),
            TimerKind::Autoplay => self
                .window
                .set_interval_with_callback_and_timeout_and_arguments_0(f, ms),
        };
        match js_id {
            Ok(js_id) => {
                self.pending.insert(
                    handle,
                    Pending {
                        js_id,
                        kind,
                        _callback: callback,
                    },
                );
                Some(handle)
            }
            Err(e) => {
                log::error!("[timers] {:?} timer rejected: {:?}", kind, e);
                None
            }
        }
    }

    fn cancel(&mut self, handle: TimerHandle) {
        self.prune_fired();
        if let Some(pending) = self.pending.remove(&handle) {
            self.clear(&pending);
        }
    }
}

impl Drop for BrowserTimers {
    fn drop(&mut self) {
        for pending in self.pending.values() {
            self.clear(pending);
        }
    }
}
