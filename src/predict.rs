use crate::constants::PREDICT_ENDPOINT;
use crate::core::predict::{heuristic_prediction, PredictionRequest, PredictionResult};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Run a prediction, falling back to the local heuristic when the model
/// API is unreachable or returns garbage. The fallback result carries
/// `simulated: true` so the UI can disclose it.
pub async fn predict(req: &PredictionRequest) -> PredictionResult {
    match fetch_prediction(req).await {
        Ok(result) => result,
        Err(e) => {
            log::warn!("[demo] prediction API unavailable, using heuristic: {e}");
            heuristic_prediction(req, &mut rand::thread_rng())
        }
    }
}

async fn fetch_prediction(req: &PredictionRequest) -> anyhow::Result<PredictionResult> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let body = serde_json::to_string(req)?;

    let init = web::RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(&body));
    let headers = web::Headers::new().map_err(|e| anyhow::anyhow!("{e:?}"))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    init.set_headers(&headers);

    let request = web::Request::new_with_str_and_init(PREDICT_ENDPOINT, &init)
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| anyhow::anyhow!("fetch failed: {e:?}"))?;
    let resp: web::Response = resp_value
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    if !resp.ok() {
        anyhow::bail!("prediction API returned status {}", resp.status());
    }
    let text = JsFuture::from(resp.text().map_err(|e| anyhow::anyhow!("{e:?}"))?)
        .await
        .map_err(|e| anyhow::anyhow!("{e:?}"))?;
    let text = text
        .as_string()
        .ok_or_else(|| anyhow::anyhow!("non-string response body"))?;
    Ok(serde_json::from_str(&text)?)
}
