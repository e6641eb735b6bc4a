use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::js_sys::{Array, Function, Object, Reflect};
use web_sys::{Element, HtmlElement};

use crate::dom;
use crate::error::Result;
use crate::utils::debounce::{BrowserScheduler, Debouncer};
use crate::utils::scroll::{resolve_offset, scroll_to_element};
use crate::utils::viewport::is_in_viewport;

// Rest parameters have no wasm-bindgen signature, so a module snippet gathers
// them. Being a static snippet rather than `new Function`, it works under a
// CSP without 'unsafe-eval'; it does need a module-capable wasm-bindgen target.
#[wasm_bindgen(inline_js = "export function gather_args(forward) { return function (...args) { forward(args); }; }")]
extern "C" {
    fn gather_args(forward: &JsValue) -> Function;
}

pub const GLOBAL_NAME: &str = "landingPageUtils";

/// Publishes `debounce`, `isInViewport` and `scrollToElement` on
/// `window.landingPageUtils` for other scripts on the page.
pub fn publish() -> Result<()> {
    let utils = Object::new();

    let debounce = Closure::<dyn Fn(Function, u32) -> JsValue>::new(|func: Function, wait_ms: u32| {
        debounce_js(func, wait_ms)
    });
    Reflect::set(&utils, &"debounce".into(), &debounce.into_js_value())?;

    let in_viewport = Closure::<dyn Fn(Element) -> bool>::new(|element: Element| {
        is_in_viewport(&element).unwrap_or_else(|err| {
            log::warn!("isInViewport failed: {err}");
            false
        })
    });
    Reflect::set(&utils, &"isInViewport".into(), &in_viewport.into_js_value())?;

    let scroll_to = Closure::<dyn Fn(HtmlElement, JsValue)>::new(
        |element: HtmlElement, offset: JsValue| {
            let offset = resolve_offset(offset.is_undefined(), offset.as_f64());
            if let Err(err) = scroll_to_element(&element, offset) {
                log::warn!("scrollToElement failed: {err}");
            }
        },
    );
    Reflect::set(&utils, &"scrollToElement".into(), &scroll_to.into_js_value())?;

    Reflect::set(dom::window()?.as_ref(), &GLOBAL_NAME.into(), &utils)?;
    log::debug!("Published window.{GLOBAL_NAME}");
    Ok(())
}

/// Wraps a JS function so bursts of calls reach it once, with the last arguments.
fn debounce_js(func: Function, wait_ms: u32) -> JsValue {
    let debouncer = Rc::new(Debouncer::new(BrowserScheduler, wait_ms, move |args: Array| {
        if let Err(err) = func.apply(&JsValue::NULL, &args) {
            log::warn!("Debounced function threw: {:?}", err);
        }
    }));

    let forward = Closure::<dyn Fn(Array)>::new(move |args: Array| debouncer.call(args));
    gather_args(&forward.into_js_value()).into()
}
