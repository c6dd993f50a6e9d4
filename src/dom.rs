use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// A component could not find an element it needs to exist.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error("missing element `{selector}`")]
    MissingElement { selector: String },
    #[error("element `{selector}` is not an HtmlElement")]
    NotHtml { selector: String },
}

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn query(document: &web::Document, selector: &str) -> Result<web::Element, SetupError> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .ok_or_else(|| SetupError::MissingElement {
            selector: selector.to_string(),
        })
}

pub fn query_html(
    document: &web::Document,
    selector: &str,
) -> Result<web::HtmlElement, SetupError> {
    query(document, selector)?
        .dyn_into::<web::HtmlElement>()
        .map_err(|_| SetupError::NotHtml {
            selector: selector.to_string(),
        })
}

/// All elements matching `selector`, in document order.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

/// Attach a listener for the lifetime of the page.
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) -> anyhow::Result<()> {
    let closure =
        Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(web::Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    closure.forget();
    Ok(())
}

/// Like [`add_listener`] but registered non-passive so the handler may call
/// `prevent_default` on wheel/touch events.
pub fn add_blocking_listener(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(web::Event) + 'static,
) -> anyhow::Result<()> {
    let closure =
        Closure::wrap(Box::new(move |ev: web::Event| handler(ev)) as Box<dyn FnMut(web::Event)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(false);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            closure.as_ref().unchecked_ref(),
            &opts,
        )
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    closure.forget();
    Ok(())
}

/// Run `handler` once when `event` next fires on `target`.
pub fn add_once_listener(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnOnce() + 'static,
) -> anyhow::Result<()> {
    let callback = Closure::once_into_js(handler);
    let opts = web::AddEventListenerOptions::new();
    opts.set_once(true);
    target
        .add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.unchecked_ref(),
            &opts,
        )
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}
