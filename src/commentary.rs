//! Game-over commentary client
//!
//! Asks an external text-generation endpoint for a one-line roast of the
//! finished run. Strictly fire-and-forget: the game-over screen is fully
//! usable before (and without) a response, and every failure path falls
//! back to a static line.

use rand::Rng;
use serde::Deserialize;

/// Static lines shown when no commentary service is reachable
pub const FALLBACK_LINES: [&str; 4] = [
    "Gravity is a harsh mistress.",
    "My grandmother jumps better.",
    "Sir Isaac Newton would be disappointed.",
    "Up is down, down is up, and you are game over.",
];

/// Pick a fallback line uniformly at random.
pub fn fallback_line<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    FALLBACK_LINES[rng.random_range(0..FALLBACK_LINES.len())]
}

/// The roast prompt for a finished run
pub fn build_prompt(score: u64) -> String {
    format!(
        "I just died in a gravity flip game with a score of {score}. \
         Give me a sarcastic, short (1 sentence) roast about my performance."
    )
}

/// JSON envelope the endpoint expects
pub fn request_body(score: u64) -> String {
    serde_json::json!({
        "contents": [{ "parts": [{ "text": build_prompt(score) }] }]
    })
    .to_string()
}

pub fn endpoint_url(api_key: &str) -> String {
    format!(
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash:generateContent?key={api_key}"
    )
}

// Response shape - only the path we read
#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

/// Pull the first candidate's text out of a response body.
pub fn extract_comment(body: &str) -> Option<String> {
    let response: GenerateResponse = serde_json::from_str(body).ok()?;
    let text = response
        .candidates
        .into_iter()
        .next()?
        .content
        .parts
        .into_iter()
        .next()?
        .text;
    if text.trim().is_empty() { None } else { Some(text) }
}

/// Request a comment for the finished run and hand the result (or a
/// fallback line) to `on_comment`. Never blocks the caller.
#[cfg(target_arch = "wasm32")]
pub fn fetch_comment(api_key: &str, score: u64, on_comment: impl FnOnce(String) + 'static) {
    if api_key.is_empty() {
        on_comment(fallback_line(&mut rand::rng()).to_string());
        return;
    }

    let url = endpoint_url(api_key);
    let body = request_body(score);
    wasm_bindgen_futures::spawn_local(async move {
        let comment = match request_once(&url, &body).await {
            Ok(Some(text)) => text,
            Ok(None) => {
                log::warn!("Commentary response had no text");
                fallback_line(&mut rand::rng()).to_string()
            }
            Err(err) => {
                log::warn!("Commentary request failed: {err:?}");
                fallback_line(&mut rand::rng()).to_string()
            }
        };
        on_comment(comment);
    });
}

#[cfg(target_arch = "wasm32")]
async fn request_once(url: &str, body: &str) -> Result<Option<String>, wasm_bindgen::JsValue> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;

    let init = web_sys::RequestInit::new();
    init.set_method("POST");
    init.set_body(&JsValue::from_str(body));

    let request = web_sys::Request::new_with_str_and_init(url, &init)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let response = JsFuture::from(window.fetch_with_request(&request)).await?;
    let response: web_sys::Response = response.dyn_into()?;
    let text = JsFuture::from(response.text()?).await?;

    Ok(text.as_string().and_then(|t| extract_comment(&t)))
}
