use crate::constants::C_TRAIL;
use crate::core::trail::TrailQueue;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// One overlay per page, however many times init is called.
static INSTALLED: AtomicBool = AtomicBool::new(false);

const OVERLAY_STYLE: &str =
    "position:fixed;inset:0;width:100%;height:100%;pointer-events:none;z-index:99999";

/// Handle to the installed comet-trail overlay.
pub struct TrailOverlay {
    canvas: web::HtmlCanvasElement,
    raf_id: Rc<Cell<i32>>,
    cancelled: Rc<Cell<bool>>,
    move_cb: Closure<dyn FnMut(web::PointerEvent)>,
    resize_cb: Closure<dyn FnMut()>,
    _tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl TrailOverlay {
    /// Tear the overlay down completely: loop stopped, listeners removed,
    /// canvas detached. A later `install()` may succeed again.
    pub fn uninstall(self) {
        self.cancelled.set(true);
        if let Some(window) = web::window() {
            _ = window.cancel_animation_frame(self.raf_id.get());
            _ = window.remove_event_listener_with_callback(
                "resize",
                self.resize_cb.as_ref().unchecked_ref(),
            );
            if let Some(document) = window.document() {
                _ = document.remove_event_listener_with_callback(
                    "pointermove",
                    self.move_cb.as_ref().unchecked_ref(),
                );
            }
        }
        self.canvas.remove();
        INSTALLED.store(false, Ordering::SeqCst);
        log::info!("[trail] overlay removed");
    }

    /// Keep the overlay alive for the page's lifetime.
    pub fn run_forever(self) {
        std::mem::forget(self);
    }
}

fn viewport_size(window: &web::Window) -> (f64, f64) {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    (w, h)
}

/// Install the full-viewport cursor trail. Returns `None` when an overlay
/// is already installed.
pub fn install() -> anyhow::Result<Option<TrailOverlay>> {
    if INSTALLED.swap(true, Ordering::SeqCst) {
        return Ok(None);
    }
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let body = document.body().ok_or_else(|| anyhow::anyhow!("no body"))?;

    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{e:?}"))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    _ = canvas.set_attribute("style", OVERLAY_STYLE);
    body.append_child(&canvas)
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;

    let (w, h) = viewport_size(&window);
    canvas.set_width(w as u32);
    canvas.set_height(h as u32);
    let ctx = crate::dom::context_2d(&canvas)?;

    let queue = Rc::new(RefCell::new(TrailQueue::new()));

    let move_cb = {
        let queue = queue.clone();
        Closure::wrap(Box::new(move |ev: web::PointerEvent| {
            queue
                .borrow_mut()
                .push(ev.client_x() as f32, ev.client_y() as f32);
        }) as Box<dyn FnMut(_)>)
    };
    _ = document.add_event_listener_with_callback("pointermove", move_cb.as_ref().unchecked_ref());

    let resize_cb = {
        let canvas = canvas.clone();
        Closure::wrap(Box::new(move || {
            if let Some(window) = web::window() {
                let (w, h) = viewport_size(&window);
                canvas.set_width(w as u32);
                canvas.set_height(h as u32);
            }
        }) as Box<dyn FnMut()>)
    };
    _ = window.add_event_listener_with_callback("resize", resize_cb.as_ref().unchecked_ref());

    let raf_id = Rc::new(Cell::new(0));
    let cancelled = Rc::new(Cell::new(false));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    {
        let tick_inner = tick.clone();
        let raf_id = raf_id.clone();
        let cancelled = cancelled.clone();
        let canvas = canvas.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if cancelled.get() {
                return;
            }
            ctx.clear_rect(0.0, 0.0, f64::from(canvas.width()), f64::from(canvas.height()));
            let mut q = queue.borrow_mut();
            q.age_points();
            ctx.set_line_cap("round");
            ctx.set_line_join("round");
            for seg in q.segments() {
                ctx.begin_path();
                ctx.move_to(f64::from(seg.x1), f64::from(seg.y1));
                ctx.line_to(f64::from(seg.x2), f64::from(seg.y2));
                ctx.set_stroke_style_str(&format!("rgba({C_TRAIL},{})", seg.alpha));
                ctx.set_line_width(f64::from(seg.width));
                ctx.stroke();
            }
            if let Some(head) = q.head() {
                let (hx, hy) = (f64::from(head.x), f64::from(head.y));
                if let Ok(g) = ctx.create_radial_gradient(hx, hy, 0.0, hx, hy, 10.0) {
                    _ = g.add_color_stop(0.0, &format!("rgba({C_TRAIL},0.9)"));
                    _ = g.add_color_stop(0.4, &format!("rgba({C_TRAIL},0.4)"));
                    _ = g.add_color_stop(1.0, &format!("rgba({C_TRAIL},0)"));
                    ctx.begin_path();
                    _ = ctx.arc(hx, hy, 10.0, 0.0, std::f64::consts::TAU);
                    ctx.set_fill_style_canvas_gradient(&g);
                    ctx.fill();
                }
            }
            drop(q);
            if let Some(window) = web::window() {
                if let Ok(id) = window.request_animation_frame(
                    tick_inner.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                ) {
                    raf_id.set(id);
                }
            }
        }) as Box<dyn FnMut()>));
    }
    if let Ok(id) =
        window.request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
    {
        raf_id.set(id);
    }

    log::info!("[trail] overlay installed");
    Ok(Some(TrailOverlay {
        canvas,
        raf_id,
        cancelled,
        move_cb,
        resize_cb,
        _tick: tick,
    }))
}
