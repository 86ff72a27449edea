//! Grid layout, edge resolution and hit-testing for the pattern network.

use std::collections::HashMap;

use super::config::{FallbackEdges, NetworkConfig};
use super::types::{Pattern, Relationship, RelationshipKind};

pub(crate) const MAX_NODES: usize = 20;
pub(crate) const GRID_COLUMNS: usize = 5;
pub(crate) const GRID_ROWS: usize = 4;
pub(crate) const LEFT_MARGIN: f64 = 50.0;
pub(crate) const TOP_MARGIN: f64 = 50.0;
pub(crate) const BASE_RADIUS: f64 = 8.0;
pub(crate) const USAGE_RADIUS_SCALE: f64 = 12.0;
pub(crate) const LABEL_MAX_CHARS: usize = 15;
pub(crate) const LABEL_KEEP_CHARS: usize = 12;

pub(crate) const SHARED_LANGUAGE_OPACITY: f64 = 0.4;
pub(crate) const SHARED_CATEGORY_OPACITY: f64 = 0.2;
pub(crate) const MIN_EDGE_OPACITY: f64 = 0.2;
const CATEGORY_DRAW_THRESHOLD: f64 = 0.8;

/// A pattern placed on the grid. Rebuilt on every input change.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutNode {
	/// The pattern this node stands for.
	pub pattern: Pattern,
	/// Horizontal centre, in canvas pixels.
	pub x: f64,
	/// Vertical centre, in canvas pixels.
	pub y: f64,
	/// Radius, in canvas pixels.
	pub radius: f64,
}

/// Why two nodes are connected.
#[derive(Clone, Debug, PartialEq)]
pub enum EdgeOrigin {
	/// A relationship reported by the relationship service.
	Relationship(RelationshipKind),
	/// Placeholder: both patterns share a language.
	SharedLanguage,
	/// Placeholder: both patterns share a category.
	SharedCategory,
}

impl EdgeOrigin {
	/// Whether the edge was guessed rather than reported.
	pub fn is_placeholder(&self) -> bool {
		!matches!(self, Self::Relationship(_))
	}
}

/// An edge between two visible nodes, by index into [`NetworkState::nodes`].
#[derive(Clone, Debug, PartialEq)]
#[allow(missing_docs)]
pub struct LayoutEdge {
	pub source: usize,
	pub target: usize,
	pub origin: EdgeOrigin,
	pub opacity: f64,
}

/// One laid-out frame of the network, sized to the canvas it is drawn on.
#[allow(missing_docs)]
pub struct NetworkState {
	pub nodes: Vec<LayoutNode>,
	pub edges: Vec<LayoutEdge>,
	pub width: f64,
	pub height: f64,
}

impl NetworkState {
	/// Place the first twenty patterns and resolve their edges. Live
	/// relationships win; without any, placeholder edges are guessed.
	pub fn new(
		patterns: &[Pattern],
		relationships: &[Relationship],
		width: f64,
		height: f64,
		config: &NetworkConfig,
	) -> Self {
		let nodes: Vec<LayoutNode> = patterns
			.iter()
			.take(MAX_NODES)
			.enumerate()
			.map(|(i, pattern)| {
				let (x, y) = grid_position(i, width, height);
				LayoutNode {
					pattern: pattern.clone(),
					x,
					y,
					radius: node_radius(pattern.usage, config.max_radius),
				}
			})
			.collect();

		let edges = if relationships.is_empty() {
			fallback_edges(&nodes, config.fallback)
		} else {
			relationship_edges(&nodes, relationships)
		};

		Self {
			nodes,
			edges,
			width,
			height,
		}
	}

	/// Index of the first node, in layout order, whose circle contains the
	/// point. Overlapping nodes resolve to the earlier one.
	pub fn node_at(&self, x: f64, y: f64) -> Option<usize> {
		self.nodes.iter().position(|node| {
			let (dx, dy) = (node.x - x, node.y - y);
			(dx * dx + dy * dy).sqrt() <= node.radius
		})
	}

	/// The pattern under the point, see [`NetworkState::node_at`].
	pub fn pattern_at(&self, x: f64, y: f64) -> Option<&Pattern> {
		self.node_at(x, y).map(|idx| &self.nodes[idx].pattern)
	}

	#[allow(missing_docs)]
	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	#[allow(missing_docs)]
	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}
}

/// Ids of the patterns that make it onto the grid, in order.
pub fn visible_ids(patterns: &[Pattern]) -> Vec<String> {
	patterns.iter().take(MAX_NODES).map(|p| p.id.clone()).collect()
}

/// Centre of the node at `index` on the five-column grid.
pub fn grid_position(index: usize, width: f64, height: f64) -> (f64, f64) {
	let (col, row) = (index % GRID_COLUMNS, index / GRID_COLUMNS);
	(
		LEFT_MARGIN + col as f64 * (width / GRID_COLUMNS as f64),
		TOP_MARGIN + row as f64 * (height / GRID_ROWS as f64),
	)
}

/// `8 + usage / 100 * 12`, capped at `max_radius`.
pub fn node_radius(usage: f64, max_radius: f64) -> f64 {
	let radius = BASE_RADIUS + usage.max(0.0) / 100.0 * USAGE_RADIUS_SCALE;
	radius.min(max_radius.max(BASE_RADIUS))
}

/// Half the weight, never below 0.2.
pub fn edge_opacity(weight: f64) -> f64 {
	(weight * 0.5).max(MIN_EDGE_OPACITY)
}

/// Names over fifteen characters keep their first twelve and an ellipsis.
pub fn truncate_label(name: &str) -> String {
	if name.chars().count() > LABEL_MAX_CHARS {
		let kept: String = name.chars().take(LABEL_KEEP_CHARS).collect();
		format!("{}...", kept)
	} else {
		name.to_owned()
	}
}

/// Quality as a rounded percentage, e.g. `92%`.
pub fn quality_label(quality: f64) -> String {
	// `+ 0.0` turns a rounded -0 into 0.
	format!("{}%", (quality * 100.0).round() + 0.0)
}

fn relationship_edges(nodes: &[LayoutNode], relationships: &[Relationship]) -> Vec<LayoutEdge> {
	let id_to_idx: HashMap<&str, usize> = nodes
		.iter()
		.enumerate()
		.map(|(i, node)| (node.pattern.id.as_str(), i))
		.collect();

	relationships
		.iter()
		.filter_map(|rel| {
			let source = *id_to_idx.get(rel.source.as_str())?;
			let target = *id_to_idx.get(rel.target.as_str())?;
			Some(LayoutEdge {
				source,
				target,
				origin: EdgeOrigin::Relationship(rel.kind.clone()),
				opacity: edge_opacity(rel.weight),
			})
		})
		.collect()
}

fn fallback_edges(nodes: &[LayoutNode], policy: FallbackEdges) -> Vec<LayoutEdge> {
	let mut edges = Vec::new();
	for (i, a) in nodes.iter().enumerate() {
		for (j, b) in nodes.iter().enumerate().skip(i + 1) {
			let (a, b) = (&a.pattern, &b.pattern);
			if a.language.is_some() && a.language == b.language {
				edges.push(LayoutEdge {
					source: i,
					target: j,
					origin: EdgeOrigin::SharedLanguage,
					opacity: SHARED_LANGUAGE_OPACITY,
				});
			}
			if a.category == b.category && admits_category_pair(policy, i, j) {
				edges.push(LayoutEdge {
					source: i,
					target: j,
					origin: EdgeOrigin::SharedCategory,
					opacity: SHARED_CATEGORY_OPACITY,
				});
			}
		}
	}
	edges
}

fn admits_category_pair(policy: FallbackEdges, i: usize, j: usize) -> bool {
	match policy {
		FallbackEdges::Seeded { seed } => pair_draw(seed, i, j) > CATEGORY_DRAW_THRESHOLD,
		FallbackEdges::Always => true,
		FallbackEdges::Never => false,
	}
}

/// Deterministic draw in `[0, 1)` for a node pair.
fn pair_draw(seed: u64, i: usize, j: usize) -> f64 {
	let pair = (i * MAX_NODES + j) as u64;
	let key = seed
		.wrapping_mul((MAX_NODES * MAX_NODES) as u64)
		.wrapping_add(pair);
	let x = key.wrapping_add(1).wrapping_mul(9301).wrapping_add(49297) % 233280;
	x as f64 / 233280.0
}
