//! Colours for nodes, labels and edges.

use super::types::RelationshipKind;

/// Colours the network paints with. Resolved once by the host page and handed
/// to the component, never read back from the live stylesheet.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
	/// Canvas fill behind everything else.
	pub background: String,
	/// Placeholder edges and edges of unknown kind.
	pub border: String,
	/// Node outlines and names.
	pub foreground: String,
	/// Language labels.
	pub muted: String,
	/// Fill for high-quality patterns.
	pub success: String,
	/// Fill for middling patterns.
	pub warning: String,
	/// Fill for low-quality patterns.
	pub danger: String,
}

impl Default for Theme {
	fn default() -> Self {
		Self {
			background: "#1a1a2e".into(),
			border: "#3f3f5a".into(),
			foreground: "#e5e7eb".into(),
			muted: "#9ca3af".into(),
			success: "#22c55e".into(),
			warning: "#f97316".into(),
			danger: "#ef4444".into(),
		}
	}
}

/// Colour bucket for a quality score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QualityBand {
	/// Quality above 0.8.
	Success,
	/// Quality above 0.6.
	Warning,
	/// Everything else.
	Danger,
}

impl QualityBand {
	/// Bucket a quality score. Out-of-range scores are not clamped.
	pub fn of(quality: f64) -> Self {
		if quality > 0.8 {
			Self::Success
		} else if quality > 0.6 {
			Self::Warning
		} else {
			Self::Danger
		}
	}

	/// Class used by the hover summary.
	pub fn css_class(self) -> &'static str {
		match self {
			Self::Success => "quality-success",
			Self::Warning => "quality-warning",
			Self::Danger => "quality-danger",
		}
	}
}

/// Stroke for a relationship edge.
#[derive(Clone, Debug, PartialEq)]
pub struct EdgeStyle {
	/// CSS colour.
	pub color: String,
	/// Line width in pixels.
	pub width: f64,
}

impl Theme {
	/// Fill for a node of the given quality.
	pub fn quality_color(&self, quality: f64) -> &str {
		match QualityBand::of(quality) {
			QualityBand::Success => &self.success,
			QualityBand::Warning => &self.warning,
			QualityBand::Danger => &self.danger,
		}
	}

	/// Fixed style per known kind; unknown kinds use [`Theme::border`] at width 1.
	pub fn edge_style(&self, kind: &RelationshipKind) -> EdgeStyle {
		let (color, width) = match kind {
			RelationshipKind::ModifiedFrom => (MODIFIED_FROM_COLOR, 2.0),
			RelationshipKind::SameLanguage => (SAME_LANGUAGE_COLOR, 1.5),
			RelationshipKind::SameType => (SAME_TYPE_COLOR, 1.0),
			RelationshipKind::Other(_) => (self.border.as_str(), 1.0),
		};
		EdgeStyle {
			color: color.into(),
			width,
		}
	}
}

/// Stroke for `modified_from` edges.
pub const MODIFIED_FROM_COLOR: &str = "#a855f7";
/// Stroke for `same_language` edges.
pub const SAME_LANGUAGE_COLOR: &str = "#3b82f6";
/// Stroke for `same_type` edges.
pub const SAME_TYPE_COLOR: &str = "#14b8a6";
