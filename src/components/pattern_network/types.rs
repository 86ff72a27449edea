//! Pattern and relationship records as delivered by the catalogue.

use serde::Deserialize;

use super::error::NetworkError;

/// A reusable code pattern as reported by the pattern catalogue.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Pattern {
	/// Opaque identifier, matched against relationship endpoints.
	pub id: String,
	/// Display name.
	pub name: String,
	/// Quality score in `[0, 1]`.
	pub quality: f64,
	/// How often the pattern is used; drives the node radius.
	pub usage: f64,
	/// Category label, e.g. `auth`.
	pub category: String,
	/// Implementation language, when known.
	#[serde(default)]
	pub language: Option<String>,
}

/// Tag of a relationship between two patterns. The set is open, so unknown
/// tags survive as [`RelationshipKind::Other`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum RelationshipKind {
	/// `modified_from`
	ModifiedFrom,
	/// `same_language`
	SameLanguage,
	/// `same_type`
	SameType,
	/// Any other tag, kept verbatim.
	Other(String),
}

impl From<String> for RelationshipKind {
	fn from(tag: String) -> Self {
		match tag.as_str() {
			"modified_from" => Self::ModifiedFrom,
			"same_language" => Self::SameLanguage,
			"same_type" => Self::SameType,
			_ => Self::Other(tag),
		}
	}
}

impl From<&str> for RelationshipKind {
	fn from(tag: &str) -> Self {
		tag.to_owned().into()
	}
}

/// A typed, weighted link between two pattern ids.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Relationship {
	/// Id of the originating pattern.
	pub source: String,
	/// Id of the related pattern.
	pub target: String,
	/// Relationship tag, `type` on the wire.
	#[serde(rename = "type")]
	pub kind: RelationshipKind,
	/// Strength in roughly `[0, 1]`; modulates edge opacity.
	#[serde(default)]
	pub weight: f64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RelationshipPayload {
	Bare(Vec<Relationship>),
	Wrapped { relationships: Vec<Relationship> },
}

/// Decode a relationship payload, either a bare array of edges or an object
/// carrying them under `relationships`.
pub fn parse_relationships(body: &str) -> Result<Vec<Relationship>, NetworkError> {
	let payload: RelationshipPayload = serde_json::from_str(body)?;
	Ok(match payload {
		RelationshipPayload::Bare(edges) => edges,
		RelationshipPayload::Wrapped { relationships } => relationships,
	})
}
