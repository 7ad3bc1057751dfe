use crate::constants::{PRELOADER_DONE_DELAY_MS, PRELOADER_TICK_MS, TOAST_DURATION_MS};
use crate::core::lifecycle::{preloader_step, AppLifecycle, PRELOADER_TARGET};
use crate::dom;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[inline]
pub fn hide(document: &web::Document, element_id: &str) {
    if let Some(el) = document.get_element_by_id(element_id) {
        _ = el.class_list().add_1("hidden");
        // fallback for environments without CSS class
        _ = el.set_attribute("style", "display:none");
    }
}

/// Append a transient toast to `#toast-root` (or the body when the page
/// has no dedicated container). Removed automatically.
pub fn show_toast(document: &web::Document, message: &str, kind: ToastKind) {
    let Ok(el) = document.create_element("div") else {
        return;
    };
    let accent = match kind {
        ToastKind::Success => "rgba(0,198,255,0.2)",
        ToastKind::Error => "rgba(239,68,68,0.2)",
    };
    _ = el.set_attribute("class", "toast");
    _ = el.set_attribute(
        "style",
        &format!("box-shadow:0 0 0 1px {accent} inset, 0 20px 60px rgba(0,0,0,0.6)"),
    );
    el.set_text_content(Some(message));

    let attached = match document.get_element_by_id("toast-root") {
        Some(root) => root.append_child(&el).is_ok(),
        None => document
            .body()
            .map(|b| b.append_child(&el).is_ok())
            .unwrap_or(false),
    };
    if !attached {
        return;
    }
    if let Some(window) = web::window() {
        dom::set_timeout(&window, TOAST_DURATION_MS, move || el.remove());
    }
}

/// Drive the intro preloader: `#preloader-count` counts up in random jumps,
/// `#preloader-bar` tracks it, and the `#preloader` container hides once
/// the counter lands on 100. Skipped entirely when the intro already ran
/// this page load.
pub fn run_preloader(document: &web::Document, lifecycle: Rc<RefCell<AppLifecycle>>) {
    // Pages without an intro never start the interval.
    if document.get_element_by_id("preloader").is_none() {
        return;
    }
    if !lifecycle.borrow().intro_pending() {
        hide(document, "preloader");
        return;
    }
    let Some(window) = web::window() else {
        return;
    };

    let count = Rc::new(Cell::new(0_u32));
    let interval_id = Rc::new(Cell::new(0_i32));
    let tick = {
        let count = count.clone();
        let interval_id = interval_id.clone();
        let document = document.clone();
        Closure::wrap(Box::new(move || {
            let next = preloader_step(count.get(), &mut rand::thread_rng());
            count.set(next);
            if let Some(el) = document.get_element_by_id("preloader-count") {
                el.set_text_content(Some(&format!("{next}%")));
            }
            if let Some(bar) = document
                .get_element_by_id("preloader-bar")
                .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
            {
                _ = bar.style().set_property("width", &format!("{next}%"));
            }
            if next >= PRELOADER_TARGET {
                if let Some(window) = web::window() {
                    window.clear_interval_with_handle(interval_id.get());
                    let document = document.clone();
                    let lifecycle = lifecycle.clone();
                    dom::set_timeout(&window, PRELOADER_DONE_DELAY_MS, move || {
                        hide(&document, "preloader");
                        lifecycle.borrow_mut().mark_intro_done();
                        log::info!("[intro] preloader finished");
                    });
                }
            }
        }) as Box<dyn FnMut()>)
    };
    if let Ok(id) = window.set_interval_with_callback_and_timeout_and_arguments_0(
        tick.as_ref().unchecked_ref(),
        PRELOADER_TICK_MS,
    ) {
        interval_id.set(id);
    }
    tick.forget();
}
