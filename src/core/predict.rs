use rand::Rng;
use serde::{Deserialize, Serialize};

/// Body POSTed to the prediction endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionRequest {
    pub nanoparticle_type: String,
    pub size: f64,
    pub zeta_potential: f64,
    pub surface_area: f64,
    pub dosage: f64,
    pub exposure_time: f64,
    pub coating: String,
}

impl Default for PredictionRequest {
    fn default() -> Self {
        Self {
            nanoparticle_type: "Gold (Au)".to_string(),
            size: 50.0,
            zeta_potential: -25.4,
            surface_area: 120.3,
            dosage: 100.0,
            exposure_time: 24.0,
            coating: "PEG".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Verdict {
    #[serde(rename = "TOXIC")]
    Toxic,
    #[serde(rename = "NON-TOXIC")]
    NonToxic,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PredictionResult {
    pub prediction: Verdict,
    pub confidence: f64,
    pub aggregation_risk: String,
    pub cytotoxicity_score: f64,
    pub top_risk_factors: Vec<String>,
    /// True when the result came from the local heuristic rather than the
    /// model API; the UI must disclose this.
    #[serde(default)]
    pub simulated: bool,
}

/// Classification rule used when the model API is unreachable.
#[inline]
pub fn is_toxic(size: f64, zeta_potential: f64, dosage: f64) -> bool {
    size < 20.0 || zeta_potential > 10.0 || dosage > 200.0
}

/// Deterministic-in-verdict fallback: the verdict depends only on the
/// inputs, confidence and score are jittered within the verdict's band.
pub fn heuristic_prediction<R: Rng>(req: &PredictionRequest, rng: &mut R) -> PredictionResult {
    let toxic = is_toxic(req.size, req.zeta_potential, req.dosage);
    let (verdict, confidence, score, risk, factors) = if toxic {
        (
            Verdict::Toxic,
            0.82 + rng.gen::<f64>() * 0.13,
            0.65 + rng.gen::<f64>() * 0.3,
            "HIGH",
            vec![
                "Small particle size (<20nm)".to_string(),
                "High positive charge".to_string(),
                "High dosage".to_string(),
            ],
        )
    } else {
        (
            Verdict::NonToxic,
            0.87 + rng.gen::<f64>() * 0.11,
            0.12 + rng.gen::<f64>() * 0.2,
            "LOW",
            vec![
                "Stable PEG coating".to_string(),
                "Moderate size".to_string(),
                "Low surface charge".to_string(),
            ],
        )
    };
    PredictionResult {
        prediction: verdict,
        confidence,
        aggregation_risk: risk.to_string(),
        cytotoxicity_score: score,
        top_risk_factors: factors,
        simulated: true,
    }
}
