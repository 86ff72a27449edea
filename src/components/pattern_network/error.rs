use thiserror::Error;
use wasm_bindgen::JsValue;

/// Everything that can go wrong while drawing the network or loading its
/// relationships. None of these are fatal to the host page.
#[derive(Debug, Error)]
pub enum NetworkError {
	/// The canvas is not mounted or has no 2d context.
	#[error("drawing surface is not available")]
	SurfaceUnavailable,
	/// Not running in a browser window.
	#[error("no browser window")]
	NoWindow,
	/// A browser API rejected, with the stringified `JsValue`.
	#[error("javascript error: {0}")]
	Js(String),
	/// The relationship service answered with a non-2xx status.
	#[error("relationship request failed with status {0}")]
	Status(u16),
	/// The relationship payload was not valid JSON of the expected shape.
	#[error("malformed relationship payload: {0}")]
	Decode(#[from] serde_json::Error),
}

impl From<JsValue> for NetworkError {
	fn from(value: JsValue) -> Self {
		Self::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
	}
}
