use crate::constants::*;
use crate::core::forms::{password_strength, strength_label};
use crate::core::predict::{PredictionRequest, Verdict};
use crate::dom;
use crate::overlay::{self, ToastKind};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Validate then simulate a round trip: the submit control is disabled for
/// the latency window and re-submission is ignored while pending.
///
/// `on_submit` validates against the live DOM and returns the success toast
/// text, or an error toast text that aborts the submission.
fn wire_mock_form(
    document: &web::Document,
    form_id: &'static str,
    submit_id: &'static str,
    latency_ms: i32,
    on_submit: impl Fn(&web::Document) -> Result<String, String> + 'static,
) {
    let pending = Rc::new(Cell::new(false));
    dom::add_submit_listener(document, form_id, move || {
        let Some(document) = dom::window_document() else {
            return;
        };
        if pending.get() {
            return;
        }
        let message = match on_submit(&document) {
            Ok(m) => m,
            Err(e) => {
                overlay::show_toast(&document, &e, ToastKind::Error);
                return;
            }
        };
        pending.set(true);
        dom::set_disabled(&document, submit_id, true);
        log::info!("[forms] {form_id} submitted");
        let pending = pending.clone();
        if let Some(window) = web::window() {
            dom::set_timeout(&window, latency_ms, move || {
                if let Some(document) = dom::window_document() {
                    dom::set_disabled(&document, submit_id, false);
                    overlay::show_toast(&document, &message, ToastKind::Success);
                }
                pending.set(false);
            });
        } else {
            pending.set(false);
        }
    });
}

fn require_filled(document: &web::Document, ids: &[&str]) -> Result<(), String> {
    for id in ids {
        if dom::input_value(document, id).trim().is_empty() {
            return Err("Please fill in all fields.".to_string());
        }
    }
    Ok(())
}

pub fn wire_login(document: &web::Document) {
    wire_mock_form(document, "login-form", "login-submit", LOGIN_LATENCY_MS, |doc| {
        require_filled(doc, &["login-email", "login-password"])?;
        Ok("Backend not connected yet. Simulated login successful!".to_string())
    });

    // OAuth buttons share one pending flag so only one flow runs at a time.
    let oauth_pending = Rc::new(Cell::new(false));
    for id in ["login-google", "login-github"] {
        let pending = oauth_pending.clone();
        dom::add_click_listener(document, id, move || {
            if pending.get() {
                return;
            }
            pending.set(true);
            let pending = pending.clone();
            if let Some(window) = web::window() {
                dom::set_timeout(&window, LOGIN_LATENCY_MS, move || {
                    if let Some(document) = dom::window_document() {
                        overlay::show_toast(
                            &document,
                            "Backend not connected yet. Simulated login successful!",
                            ToastKind::Success,
                        );
                    }
                    pending.set(false);
                });
            } else {
                pending.set(false);
            }
        });
    }
}

pub fn wire_signup(document: &web::Document) {
    wire_mock_form(document, "signup-form", "signup-submit", SIGNUP_LATENCY_MS, |doc| {
        if !dom::input_checked(doc, "signup-terms") {
            return Err("Please agree to the Terms & Conditions.".to_string());
        }
        require_filled(doc, &["signup-name", "signup-email", "signup-password"])?;
        Ok("Account created! Welcome to Nanoviz.".to_string())
    });

    // Live strength meter under the password field
    dom::add_input_listener(document, "signup-password", |pw| {
        let Some(document) = dom::window_document() else {
            return;
        };
        let score = password_strength(&pw);
        if let Some(el) = document.get_element_by_id("password-strength") {
            el.set_text_content(Some(strength_label(score)));
            _ = el.set_attribute("data-score", &score.to_string());
        }
    });
}

pub fn wire_forgot_password(document: &web::Document) {
    wire_mock_form(document, "forgot-form", "forgot-submit", FORGOT_LATENCY_MS, |doc| {
        let email = dom::input_value(doc, "forgot-email");
        if email.trim().is_empty() {
            return Err("Please fill in all fields.".to_string());
        }
        Ok(format!("Reset link sent to {email}"))
    });
}

pub fn wire_contact(document: &web::Document) {
    wire_mock_form(document, "contact-form", "contact-submit", CONTACT_LATENCY_MS, |doc| {
        require_filled(doc, &["contact-name", "contact-email", "contact-message"])?;
        Ok("Message sent! We'll get back to you shortly.".to_string())
    });
}

fn demo_request(document: &web::Document) -> PredictionRequest {
    let defaults = PredictionRequest::default();
    let num = |id: &str, fallback: f64| {
        dom::input_value(document, id)
            .trim()
            .parse::<f64>()
            .unwrap_or(fallback)
    };
    let text = |id: &str, fallback: &str| {
        let v = dom::input_value(document, id);
        if v.trim().is_empty() {
            fallback.to_string()
        } else {
            v
        }
    };
    PredictionRequest {
        nanoparticle_type: text("demo-type", &defaults.nanoparticle_type),
        size: num("demo-size", defaults.size),
        zeta_potential: num("demo-zeta", defaults.zeta_potential),
        surface_area: num("demo-surface", defaults.surface_area),
        dosage: num("demo-dosage", defaults.dosage),
        exposure_time: num("demo-exposure", defaults.exposure_time),
        coating: text("demo-coating", &defaults.coating),
    }
}

/// Wire the live-demo widget: read the parameter inputs, call the
/// prediction client and render the outcome into `#demo-result`.
pub fn wire_demo(document: &web::Document) {
    let pending = Rc::new(Cell::new(false));
    dom::add_click_listener(document, "demo-run", move || {
        let Some(document) = dom::window_document() else {
            return;
        };
        if pending.get() {
            return;
        }
        pending.set(true);
        dom::set_disabled(&document, "demo-run", true);
        let req = demo_request(&document);
        let pending = pending.clone();
        spawn_local(async move {
            let result = crate::predict::predict(&req).await;
            if let Some(document) = dom::window_document() {
                if let Some(el) = document.get_element_by_id("demo-result") {
                    let (verdict, accent) = match result.prediction {
                        Verdict::Toxic => ("TOXIC", C_DANGER),
                        Verdict::NonToxic => ("NON-TOXIC", C_ACCENT),
                    };
                    let factors = result
                        .top_risk_factors
                        .iter()
                        .map(|f| format!("<li>{f}</li>"))
                        .collect::<String>();
                    let simulated_note = if result.simulated {
                        "<p class='demo-simulated'>API offline; showing a simulated \
                         prediction based on input heuristics.</p>"
                    } else {
                        ""
                    };
                    el.set_inner_html(&format!(
                        "<div class='demo-verdict' style='color: rgb({accent})'>{verdict}</div>\
                         <div class='demo-confidence'>Confidence: {:.1}%</div>\
                         <div class='demo-aggregation'>Aggregation risk: {}</div>\
                         <div class='demo-cytotox'>Cytotoxicity score: {:.3}</div>\
                         <ul class='demo-factors'>{factors}</ul>{simulated_note}",
                        result.confidence * 100.0,
                        result.aggregation_risk,
                        result.cytotoxicity_score,
                    ));
                }
                dom::set_disabled(&document, "demo-run", false);
            }
            pending.set(false);
        });
    });
}
