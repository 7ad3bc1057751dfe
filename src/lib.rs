#![cfg(target_arch = "wasm32")]
use crate::core::SceneKind;
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod constants;
mod core;
mod cursor;
mod dom;
mod forms;
mod frame;
mod overlay;
mod predict;
mod render;
mod storage;

use constants::SCENE_SEED;

/// Section canvases wired up when present; pages only carry a subset.
const SCENE_CANVASES: &[(&str, SceneKind)] = &[
    ("aggregation-canvas", SceneKind::Aggregation),
    ("scan-canvas", SceneKind::ToxicityScan),
    ("membrane-canvas", SceneKind::Membrane),
    ("radar-canvas", SceneKind::RiskRadar),
    ("helix-canvas", SceneKind::DataHelix),
    ("rain-canvas", SceneKind::ReportRain),
    ("mesh-canvas", SceneKind::NeuralMesh),
    ("input-canvas", SceneKind::NanoInput),
    ("expert-canvas", SceneKind::ExpertFlow),
];

/// Track the pointer in viewport space for the background molecule field.
fn wire_pointer_tracking(window: &web::Window) -> frame::SharedPointer {
    let pointer: frame::SharedPointer = Rc::new(RefCell::new(None));

    let move_pointer = pointer.clone();
    let move_cb = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        *move_pointer.borrow_mut() = Some(Vec2::new(ev.client_x() as f32, ev.client_y() as f32));
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pointermove", move_cb.as_ref().unchecked_ref());
    move_cb.forget();

    let leave_pointer = pointer.clone();
    let leave_cb = Closure::wrap(Box::new(move |_: web::PointerEvent| {
        *leave_pointer.borrow_mut() = None;
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("pointerleave", leave_cb.as_ref().unchecked_ref());
    leave_cb.forget();

    pointer
}

fn mount_scenes(document: &web::Document, pointer: frame::SharedPointer) {
    let mut mounted = 0;
    if let Some(canvas) = dom::canvas_by_id(document, "bg-canvas") {
        match frame::mount_scene(canvas, SceneKind::MoleculeField, SCENE_SEED, Some(pointer)) {
            Ok(s) => {
                s.run_forever();
                mounted += 1;
            }
            Err(e) => log::error!("[scenes] bg-canvas failed: {e}"),
        }
    }
    for &(id, kind) in SCENE_CANVASES {
        if let Some(canvas) = dom::canvas_by_id(document, id) {
            match frame::mount_scene(canvas, kind, SCENE_SEED, None) {
                Ok(s) => {
                    s.run_forever();
                    mounted += 1;
                }
                Err(e) => log::error!("[scenes] {id} failed: {e}"),
            }
        }
    }
    log::info!("[scenes] mounted {mounted} canvases");
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("nanoviz-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }

    // Theme before anything paints, so the first frame has the right palette
    let theme = storage::load_theme();
    storage::apply_theme(&document, theme);
    dom::add_click_listener(&document, "theme-toggle", || {
        if let Some(document) = dom::window_document() {
            storage::toggle_theme(&document);
        }
    });

    let lifecycle = Rc::new(RefCell::new(core::AppLifecycle::new()));
    overlay::run_preloader(&document, lifecycle);

    match cursor::install()? {
        Some(trail) => trail.run_forever(),
        None => log::warn!("[trail] already installed"),
    }

    let pointer = wire_pointer_tracking(&window);
    mount_scenes(&document, pointer);

    forms::wire_login(&document);
    forms::wire_signup(&document);
    forms::wire_forgot_password(&document);
    forms::wire_contact(&document);
    forms::wire_demo(&document);

    Ok(())
}
