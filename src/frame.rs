use crate::constants::{TIME_STEP, VIEW_PRELOAD_MARGIN};
use crate::core::{FrameClock, SceneKind, SceneState};
use crate::dom;
use crate::render;
use glam::Vec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pointer position in viewport space, shared between the event wiring and
/// the background molecule field. `None` while the pointer is off-page.
pub type SharedPointer = Rc<RefCell<Option<Vec2>>>;

/// Per-canvas animation driver.
///
/// Owns the resize/visibility observers and the rAF loop. The loop keeps
/// scheduling frames even while the canvas is off-screen; the [`FrameClock`]
/// gates the actual simulation and draw, so scrolling back resumes the scene
/// exactly where it paused.
pub struct Scheduler {
    raf_id: Rc<Cell<i32>>,
    cancelled: Rc<Cell<bool>>,
    resize_obs: web::ResizeObserver,
    view_obs: web::IntersectionObserver,
    _resize_cb: Closure<dyn FnMut()>,
    _view_cb: Closure<dyn FnMut(js_sys::Array)>,
    _tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl Scheduler {
    /// Stop the loop and disconnect the observers. No callbacks fire after
    /// this returns.
    pub fn cancel(&self) {
        self.cancelled.set(true);
        if let Some(w) = web::window() {
            _ = w.cancel_animation_frame(self.raf_id.get());
        }
        self.resize_obs.disconnect();
        self.view_obs.disconnect();
    }

    /// Leak the scheduler so the animation runs for the page's lifetime.
    pub fn run_forever(self) {
        std::mem::forget(self);
    }
}

/// Attach a scene to a canvas and start its animation loop.
///
/// The scene is constructed lazily on the first rendered frame and rebuilt
/// whenever the logical width changes (height changes keep the state; they
/// only affect bounds). `pointer` is consulted by the molecule field only.
pub fn mount_scene(
    canvas: web::HtmlCanvasElement,
    kind: SceneKind,
    seed: u64,
    pointer: Option<SharedPointer>,
) -> anyhow::Result<Scheduler> {
    let ctx = dom::context_2d(&canvas)?;
    let clock = Rc::new(RefCell::new(FrameClock::new(TIME_STEP)));
    let scene: Rc<RefCell<Option<SceneState>>> = Rc::new(RefCell::new(None));

    let (w, h) = dom::sync_canvas_backing_size(&canvas, &ctx);
    clock.borrow_mut().set_size(w, h);

    // Resizing refreshes the backing store but never resets the clock.
    let resize_cb = {
        let canvas = canvas.clone();
        let ctx = ctx.clone();
        let clock = clock.clone();
        Closure::wrap(Box::new(move || {
            let (w, h) = dom::sync_canvas_backing_size(&canvas, &ctx);
            clock.borrow_mut().set_size(w, h);
        }) as Box<dyn FnMut()>)
    };
    let resize_obs = web::ResizeObserver::new(resize_cb.as_ref().unchecked_ref())
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    resize_obs.observe(&canvas);

    // The pre-entry margin starts the simulation just before the canvas
    // scrolls into view, so it is already moving when it appears.
    let view_cb = {
        let clock = clock.clone();
        Closure::wrap(Box::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                if let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() {
                    clock.borrow_mut().set_visible(entry.is_intersecting());
                }
            }
        }) as Box<dyn FnMut(js_sys::Array)>)
    };
    let opts = web::IntersectionObserverInit::new();
    opts.set_root_margin(VIEW_PRELOAD_MARGIN);
    let view_obs =
        web::IntersectionObserver::new_with_options(view_cb.as_ref().unchecked_ref(), &opts)
            .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    view_obs.observe(&canvas);

    let raf_id = Rc::new(Cell::new(0));
    let cancelled = Rc::new(Cell::new(false));
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    {
        let tick_inner = tick.clone();
        let raf_id = raf_id.clone();
        let cancelled = cancelled.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if cancelled.get() {
                return;
            }
            let stepped = clock.borrow_mut().tick();
            if let Some(t) = stepped {
                let (w, h) = clock.borrow().size();
                let mut slot = scene.borrow_mut();
                if slot.as_ref().map_or(true, |s| s.needs_rebuild(w)) {
                    *slot = Some(SceneState::new(kind, w, h, seed));
                }
                if let Some(state) = slot.as_mut() {
                    let ptr = pointer.as_ref().and_then(|p| *p.borrow());
                    state.advance(w, h, t as f32, ptr);
                    render::draw_scene(&ctx, state, f64::from(w), f64::from(h), t);
                }
            }
            if let Some(window) = web::window() {
                if let Ok(id) = window.request_animation_frame(
                    tick_inner.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                ) {
                    raf_id.set(id);
                }
            }
        }) as Box<dyn FnMut()>));
    }
    if let Some(window) = web::window() {
        if let Ok(id) = window
            .request_animation_frame(tick.borrow().as_ref().unwrap().as_ref().unchecked_ref())
        {
            raf_id.set(id);
        }
    }

    Ok(Scheduler {
        raf_id,
        cancelled,
        resize_obs,
        view_obs,
        _resize_cb: resize_cb,
        _view_cb: view_cb,
        _tick: tick,
    })
}
