use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

use super::error::NetworkError;
use super::types::{Relationship, parse_relationships};

/// Fetch the relationships between the visible patterns from `url`.
pub async fn fetch_relationships(url: &str) -> Result<Vec<Relationship>, NetworkError> {
	let window = web_sys::window().ok_or(NetworkError::NoWindow)?;
	let response: Response = JsFuture::from(window.fetch_with_str(url))
		.await?
		.dyn_into()?;
	if !response.ok() {
		return Err(NetworkError::Status(response.status()));
	}
	let body = JsFuture::from(response.text()?).await?;
	let body = body
		.as_string()
		.ok_or_else(|| NetworkError::Js("response body is not text".into()))?;
	parse_relationships(&body)
}
