use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure =
            wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Wire a form's submit event, suppressing the native page reload.
pub fn add_submit_listener(
    document: &web::Document,
    form_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(form_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            handler();
        }) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> Option<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok())
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{e:?}"))?
        .ok_or_else(|| anyhow::anyhow!("no 2d context"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{e:?}"))
}

/// Match the backing store to the CSS box at devicePixelRatio and map the
/// drawing space back to CSS pixels. Returns the logical size.
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) -> (f32, f32) {
    let Some(window) = web::window() else {
        return (0.0, 0.0);
    };
    let dpr = window.device_pixel_ratio();
    let rect = canvas.get_bounding_client_rect();
    let (w, h) = (rect.width(), rect.height());
    canvas.set_width(((w * dpr) as u32).max(1));
    canvas.set_height(((h * dpr) as u32).max(1));
    _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
    (w as f32, h as f32)
}

/// React to edits of a text input with its current value.
pub fn add_input_listener(
    document: &web::Document,
    id: &str,
    mut handler: impl FnMut(String) + 'static,
) {
    if let Some(el) = document.get_element_by_id(id) {
        if let Ok(input) = el.clone().dyn_into::<web::HtmlInputElement>() {
            let closure = wasm_bindgen::closure::Closure::wrap(
                Box::new(move || handler(input.value())) as Box<dyn FnMut()>,
            );
            let _ = el.add_event_listener_with_callback("input", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }
}

/// Current value of an input or textarea element, empty string when absent.
pub fn input_value(document: &web::Document, id: &str) -> String {
    let Some(el) = document.get_element_by_id(id) else {
        return String::new();
    };
    if let Some(input) = el.dyn_ref::<web::HtmlInputElement>() {
        return input.value();
    }
    if let Some(area) = el.dyn_ref::<web::HtmlTextAreaElement>() {
        return area.value();
    }
    String::new()
}

pub fn input_checked(document: &web::Document, id: &str) -> bool {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
        .map(|input| input.checked())
        .unwrap_or(false)
}

pub fn set_disabled(document: &web::Document, id: &str, disabled: bool) {
    if let Some(el) = document.get_element_by_id(id) {
        if disabled {
            _ = el.set_attribute("disabled", "disabled");
        } else {
            _ = el.remove_attribute("disabled");
        }
    }
}

/// One-shot timeout; the closure cleans itself up after firing.
pub fn set_timeout(window: &web::Window, delay_ms: i32, handler: impl FnOnce() + 'static) {
    let cell = std::rc::Rc::new(std::cell::RefCell::new(Some(handler)));
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || {
        if let Some(f) = cell.borrow_mut().take() {
            f();
        }
    }) as Box<dyn FnMut()>);
    _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        delay_ms,
    );
    closure.forget();
}
