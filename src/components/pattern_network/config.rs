//! Tunables for the pattern network widget.

use std::time::Duration;

/// How often relationships are refetched.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(60);
/// Default radius ceiling, reached at a usage of about 267.
pub const DEFAULT_MAX_RADIUS: f64 = 40.0;

/// How the placeholder graph links patterns of the same category while no
/// relationship data has arrived.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FallbackEdges {
	/// Keep a pair when a draw keyed on `seed` and the pair exceeds 0.8.
	Seeded {
		/// Draw seed; the same seed always picks the same pairs.
		seed: u64,
	},
	/// Link every same-category pair.
	Always,
	/// Only link patterns sharing a language.
	Never,
}

impl Default for FallbackEdges {
	fn default() -> Self {
		Self::Seeded { seed: 0 }
	}
}

/// Component configuration.
#[derive(Clone, Debug, PartialEq)]
pub struct NetworkConfig {
	/// Base URL of the relationship service. Without one nothing is polled.
	pub relationships_endpoint: Option<String>,
	/// Delay between relationship refetches.
	pub poll_interval: Duration,
	/// Placeholder policy for same-category pairs.
	pub fallback: FallbackEdges,
	/// Radius ceiling, so large usage counts cannot swallow the canvas.
	pub max_radius: f64,
}

impl Default for NetworkConfig {
	fn default() -> Self {
		Self {
			relationships_endpoint: option_env!("PATTERN_API_URL")
				.map(|base| format!("{}/patterns/relationships", base.trim_end_matches('/'))),
			poll_interval: DEFAULT_POLL_INTERVAL,
			fallback: FallbackEdges::default(),
			max_radius: DEFAULT_MAX_RADIUS,
		}
	}
}

impl NetworkConfig {
	/// Poll relationships from `endpoint`.
	pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
		self.relationships_endpoint = Some(endpoint.into());
		self
	}

	/// `<endpoint>?pattern_ids=a,b,c`, or `None` without an endpoint or ids.
	pub fn relationships_url<S: AsRef<str>>(&self, ids: &[S]) -> Option<String> {
		let endpoint = self.relationships_endpoint.as_ref()?;
		if ids.is_empty() {
			return None;
		}
		let joined = ids.iter().map(AsRef::as_ref).collect::<Vec<_>>().join(",");
		Some(format!("{}?pattern_ids={}", endpoint, joined))
	}
}
