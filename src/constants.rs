// Palette and timing constants shared by the canvas renderers and the UI
// glue. Colors are "r,g,b" fragments spliced into rgba() strings.

// Brand palette
pub const C_ACCENT: &str = "0,198,255"; // electric cyan-blue
pub const C_BLUE: &str = "37,99,235"; // deep cobalt
pub const C_ACCENT2: &str = "0,120,200"; // mid blue
pub const C_DANGER: &str = "239,68,68"; // toxic red
pub const C_NEUTRAL: &str = "150,160,180"; // unevaluated grey
pub const C_TEXT: &str = "200,220,255";
pub const C_TRAIL: &str = "0,255,157"; // comet green

// Animation time advances by a fixed step per rendered frame
pub const TIME_STEP: f64 = 0.012;

// Scenes start simulating slightly before they scroll into view
pub const VIEW_PRELOAD_MARGIN: &str = "100px";

// Page-level seed for scene construction; each kind derives its own stream
pub const SCENE_SEED: u64 = 42;

// Prediction API lives on its own host; the heuristic fallback covers it
// being unreachable (CORS, downtime, offline).
pub const PREDICT_API_BASE: &str = "https://nanoviz-api.up.railway.app";
pub const PREDICT_ENDPOINT: &str = "https://nanoviz-api.up.railway.app/predict";

// UI timings (ms)
pub const TOAST_DURATION_MS: i32 = 3_800;
pub const PRELOADER_TICK_MS: i32 = 35;
pub const PRELOADER_DONE_DELAY_MS: i32 = 400;
pub const LOGIN_LATENCY_MS: i32 = 1_500;
pub const SIGNUP_LATENCY_MS: i32 = 1_800;
pub const FORGOT_LATENCY_MS: i32 = 1_500;
pub const CONTACT_LATENCY_MS: i32 = 1_400;
