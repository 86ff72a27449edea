//! Painting a laid-out network onto a 2D surface.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use super::state::{EdgeOrigin, LayoutNode, NetworkState, quality_label, truncate_label};
use super::theme::Theme;

const NODE_STROKE_WIDTH: f64 = 2.0;
const LABEL_LINE_HEIGHT: f64 = 14.0;
const NAME_FONT: &str = "11px sans-serif";
const LANGUAGE_FONT: &str = "10px sans-serif";
const QUALITY_FONT: &str = "bold 10px sans-serif";
const PLACEHOLDER_DASH: (f64, f64) = (4.0, 4.0);

/// Drawing primitives the network needs from a 2D surface.
pub trait Surface {
	/// Wipe the surface and fill it with `background`.
	fn clear(&mut self, width: f64, height: f64, background: &str);
	/// Opacity for everything drawn after this call.
	fn set_alpha(&mut self, alpha: f64);
	/// Dash subsequent lines.
	fn set_dashed(&mut self, dashed: bool);
	/// Stroke a straight line.
	fn line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, width: f64);
	/// Fill a circle and stroke its outline.
	fn circle(&mut self, center: (f64, f64), radius: f64, fill: &str, stroke: &str, stroke_width: f64);
	/// Centred text with its baseline at `at`.
	fn text(&mut self, text: &str, at: (f64, f64), color: &str, font: &str);
}

impl Surface for CanvasRenderingContext2d {
	fn clear(&mut self, width: f64, height: f64, background: &str) {
		self.clear_rect(0.0, 0.0, width, height);
		self.set_fill_style_str(background);
		self.fill_rect(0.0, 0.0, width, height);
	}

	fn set_alpha(&mut self, alpha: f64) {
		self.set_global_alpha(alpha);
	}

	fn set_dashed(&mut self, dashed: bool) {
		let pattern = if dashed {
			js_sys::Array::of2(
				&JsValue::from_f64(PLACEHOLDER_DASH.0),
				&JsValue::from_f64(PLACEHOLDER_DASH.1),
			)
		} else {
			js_sys::Array::new()
		};
		let _ = self.set_line_dash(&pattern);
	}

	fn line(&mut self, from: (f64, f64), to: (f64, f64), color: &str, width: f64) {
		self.set_stroke_style_str(color);
		self.set_line_width(width);
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
	}

	fn circle(&mut self, center: (f64, f64), radius: f64, fill: &str, stroke: &str, stroke_width: f64) {
		self.begin_path();
		let _ = self.arc(center.0, center.1, radius, 0.0, 2.0 * PI);
		self.set_fill_style_str(fill);
		self.fill();
		self.set_stroke_style_str(stroke);
		self.set_line_width(stroke_width);
		self.stroke();
	}

	fn text(&mut self, text: &str, at: (f64, f64), color: &str, font: &str) {
		self.set_fill_style_str(color);
		self.set_font(font);
		self.set_text_align("center");
		let _ = self.fill_text(text, at.0, at.1);
	}
}

/// Clear the surface and repaint the whole network.
pub fn render<S: Surface + ?Sized>(state: &NetworkState, theme: &Theme, surface: &mut S) {
	surface.clear(state.width, state.height, &theme.background);
	draw_edges(state, theme, surface);
	draw_nodes(state, theme, surface);
}

fn draw_edges<S: Surface + ?Sized>(state: &NetworkState, theme: &Theme, surface: &mut S) {
	for edge in &state.edges {
		let (from, to) = (&state.nodes[edge.source], &state.nodes[edge.target]);
		let (color, width) = match &edge.origin {
			EdgeOrigin::Relationship(kind) => {
				let style = theme.edge_style(kind);
				(style.color, style.width)
			}
			EdgeOrigin::SharedLanguage | EdgeOrigin::SharedCategory => (theme.border.clone(), 1.0),
		};
		surface.set_dashed(edge.origin.is_placeholder());
		surface.set_alpha(edge.opacity);
		surface.line((from.x, from.y), (to.x, to.y), &color, width);
	}
	surface.set_dashed(false);
	surface.set_alpha(1.0);
}

fn draw_nodes<S: Surface + ?Sized>(state: &NetworkState, theme: &Theme, surface: &mut S) {
	for node in &state.nodes {
		let quality_color = theme.quality_color(node.pattern.quality);
		surface.circle(
			(node.x, node.y),
			node.radius,
			quality_color,
			&theme.foreground,
			NODE_STROKE_WIDTH,
		);
		draw_labels(node, theme, quality_color, surface);
	}
}

fn draw_labels<S: Surface + ?Sized>(node: &LayoutNode, theme: &Theme, quality_color: &str, surface: &mut S) {
	let mut y = node.y + node.radius + LABEL_LINE_HEIGHT;
	surface.text(
		&truncate_label(&node.pattern.name),
		(node.x, y),
		&theme.foreground,
		NAME_FONT,
	);
	if let Some(language) = &node.pattern.language {
		y += LABEL_LINE_HEIGHT;
		surface.text(language, (node.x, y), &theme.muted, LANGUAGE_FONT);
	}
	y += LABEL_LINE_HEIGHT;
	surface.text(
		&quality_label(node.pattern.quality),
		(node.x, y),
		quality_color,
		QUALITY_FONT,
	);
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::pattern_network::config::NetworkConfig;
	use crate::components::pattern_network::theme::MODIFIED_FROM_COLOR;
	use crate::components::pattern_network::types::{Pattern, Relationship};

	#[derive(Debug, PartialEq)]
	enum Op {
		Clear,
		Line { color: String, width: f64, alpha: f64, dashed: bool },
		Circle { radius: f64, fill: String, stroke: String },
		Text { text: String, y: f64, color: String },
	}

	#[derive(Default)]
	struct Recorder {
		ops: Vec<Op>,
		alpha: f64,
		dashed: bool,
	}

	impl Surface for Recorder {
		fn clear(&mut self, _: f64, _: f64, _: &str) {
			self.ops.push(Op::Clear);
		}
		fn set_alpha(&mut self, alpha: f64) {
			self.alpha = alpha;
		}
		fn set_dashed(&mut self, dashed: bool) {
			self.dashed = dashed;
		}
		fn line(&mut self, _: (f64, f64), _: (f64, f64), color: &str, width: f64) {
			self.ops.push(Op::Line {
				color: color.into(),
				width,
				alpha: self.alpha,
				dashed: self.dashed,
			});
		}
		fn circle(&mut self, _: (f64, f64), radius: f64, fill: &str, stroke: &str, _: f64) {
			self.ops.push(Op::Circle {
				radius,
				fill: fill.into(),
				stroke: stroke.into(),
			});
		}
		fn text(&mut self, text: &str, at: (f64, f64), color: &str, _: &str) {
			self.ops.push(Op::Text {
				text: text.into(),
				y: at.1,
				color: color.into(),
			});
		}
	}

	impl Recorder {
		fn lines(&self) -> Vec<&Op> {
			self.ops.iter().filter(|op| matches!(op, Op::Line { .. })).collect()
		}

		fn texts(&self) -> Vec<&str> {
			self.ops
				.iter()
				.filter_map(|op| match op {
					Op::Text { text, .. } => Some(text.as_str()),
					_ => None,
				})
				.collect()
		}
	}

	fn example() -> (Vec<Pattern>, Vec<Relationship>) {
		let patterns = vec![
			Pattern {
				id: "a".into(),
				name: "Auth Handler".into(),
				quality: 0.92,
				usage: 80.0,
				category: "auth".into(),
				language: None,
			},
			Pattern {
				id: "b".into(),
				name: "Auth Handler Alt Impl Long Name".into(),
				quality: 0.55,
				usage: 10.0,
				category: "auth".into(),
				language: None,
			},
		];
		let relationships = vec![Relationship {
			source: "a".into(),
			target: "b".into(),
			kind: "modified_from".into(),
			weight: 0.9,
		}];
		(patterns, relationships)
	}

	#[test]
	fn paints_the_example_scenario() {
		let (patterns, relationships) = example();
		let theme = Theme::default();
		let state = NetworkState::new(&patterns, &relationships, 800.0, 400.0, &NetworkConfig::default());
		let mut surface = Recorder::default();
		render(&state, &theme, &mut surface);

		assert_eq!(surface.ops[0], Op::Clear);
		assert_eq!(
			surface.lines(),
			vec![&Op::Line {
				color: MODIFIED_FROM_COLOR.into(),
				width: 2.0,
				alpha: 0.45,
				dashed: false,
			}]
		);
		assert_eq!(surface.alpha, 1.0);

		let circles: Vec<_> = surface
			.ops
			.iter()
			.filter_map(|op| match op {
				Op::Circle { fill, stroke, .. } => Some((fill.as_str(), stroke.as_str())),
				_ => None,
			})
			.collect();
		assert_eq!(
			circles,
			vec![
				(theme.success.as_str(), theme.foreground.as_str()),
				(theme.danger.as_str(), theme.foreground.as_str()),
			]
		);
		assert_eq!(surface.texts(), vec!["Auth Handler", "92%", "Auth Handler...", "55%"]);
	}

	#[test]
	fn language_line_pushes_quality_down() {
		let theme = Theme::default();
		let patterns = vec![Pattern {
			id: "r".into(),
			name: "Retry".into(),
			quality: 0.7,
			usage: 0.0,
			category: "resilience".into(),
			language: Some("rust".into()),
		}];
		let state = NetworkState::new(&patterns, &[], 800.0, 400.0, &NetworkConfig::default());
		let mut surface = Recorder::default();
		render(&state, &theme, &mut surface);

		let texts: Vec<_> = surface
			.ops
			.iter()
			.filter_map(|op| match op {
				Op::Text { text, y, color } => Some((text.as_str(), *y, color.as_str())),
				_ => None,
			})
			.collect();
		// Node at y=50 with radius 8.
		assert_eq!(
			texts,
			vec![
				("Retry", 72.0, theme.foreground.as_str()),
				("rust", 86.0, theme.muted.as_str()),
				("70%", 100.0, theme.warning.as_str()),
			]
		);
	}

	#[test]
	fn placeholder_edges_are_dashed() {
		let theme = Theme::default();
		let patterns: Vec<_> = ["a", "b"]
			.iter()
			.map(|id| Pattern {
				id: (*id).into(),
				name: id.to_uppercase(),
				quality: 0.9,
				usage: 0.0,
				category: (*id).into(),
				language: Some("go".into()),
			})
			.collect();
		let state = NetworkState::new(&patterns, &[], 800.0, 400.0, &NetworkConfig::default());
		let mut surface = Recorder::default();
		render(&state, &theme, &mut surface);
		assert_eq!(
			surface.lines(),
			vec![&Op::Line {
				color: theme.border.clone(),
				width: 1.0,
				alpha: 0.4,
				dashed: true,
			}]
		);
		assert!(!surface.dashed);
	}

	#[test]
	fn empty_network_only_clears() {
		let state = NetworkState::new(&[], &[], 800.0, 400.0, &NetworkConfig::default());
		let mut surface = Recorder::default();
		render(&state, &Theme::default(), &mut surface);
		assert_eq!(surface.ops, vec![Op::Clear]);
		assert_eq!((state.node_count(), state.edge_count()), (0, 0));
	}
}
