//! Relationship data keyed by the visible pattern ids it was fetched for.

use super::types::Relationship;

/// Polled relationships together with the id list they belong to.
///
/// Changing the key drops the held relationships, and responses requested for
/// any other key are discarded, so edges for patterns that are no longer on
/// the grid never suppress the placeholder edges.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RelationshipFeed {
	ids: Vec<String>,
	relationships: Vec<Relationship>,
}

impl RelationshipFeed {
	/// Ids the current relationships were fetched for.
	pub fn ids(&self) -> &[String] {
		&self.ids
	}

	/// Relationships for [`RelationshipFeed::ids`].
	pub fn relationships(&self) -> &[Relationship] {
		&self.relationships
	}

	/// Switch to a new id list. Returns `true` when held relationships were
	/// dropped.
	pub fn rekey(&mut self, ids: Vec<String>) -> bool {
		if self.ids == ids {
			return false;
		}
		self.ids = ids;
		let dropped = !self.relationships.is_empty();
		self.relationships.clear();
		dropped
	}

	/// Take a response requested for `ids`. Returns `true` when the held
	/// relationships changed; stale or identical responses are ignored.
	pub fn accept(&mut self, ids: &[String], fetched: Vec<Relationship>) -> bool {
		if self.ids != ids || self.relationships == fetched {
			return false;
		}
		self.relationships = fetched;
		true
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::components::pattern_network::config::NetworkConfig;
	use crate::components::pattern_network::state::NetworkState;
	use crate::components::pattern_network::types::Pattern;

	fn ids(ids: &[&str]) -> Vec<String> {
		ids.iter().map(|id| (*id).to_owned()).collect()
	}

	fn rel(source: &str, target: &str) -> Relationship {
		Relationship {
			source: source.into(),
			target: target.into(),
			kind: "same_type".into(),
			weight: 0.6,
		}
	}

	fn pattern(id: &str) -> Pattern {
		Pattern {
			id: id.into(),
			name: id.to_uppercase(),
			quality: 0.9,
			usage: 10.0,
			category: id.into(),
			language: Some("rust".into()),
		}
	}

	#[test]
	fn rekey_drops_relationships_for_the_old_ids() {
		let mut feed = RelationshipFeed::default();
		assert!(!feed.rekey(ids(&["old1", "old2"])));
		assert!(feed.accept(&ids(&["old1", "old2"]), vec![rel("old1", "old2")]));

		assert!(feed.rekey(ids(&["x", "y"])));
		assert!(feed.relationships().is_empty());
		assert_eq!(feed.ids(), ids(&["x", "y"]).as_slice());

		// With the stale edges gone the shared-language placeholder is back.
		let patterns = vec![pattern("x"), pattern("y")];
		let state = NetworkState::new(&patterns, feed.relationships(), 800.0, 400.0, &NetworkConfig::default());
		assert_eq!(state.edge_count(), 1);
		assert!(state.edges[0].origin.is_placeholder());
	}

	#[test]
	fn same_ids_keep_relationships() {
		let mut feed = RelationshipFeed::default();
		feed.rekey(ids(&["a", "b"]));
		feed.accept(&ids(&["a", "b"]), vec![rel("a", "b")]);
		assert!(!feed.rekey(ids(&["a", "b"])));
		assert_eq!(feed.relationships(), &[rel("a", "b")]);
	}

	#[test]
	fn late_response_for_previous_ids_is_discarded() {
		let mut feed = RelationshipFeed::default();
		feed.rekey(ids(&["old1", "old2"]));
		feed.rekey(ids(&["x", "y"]));
		assert!(feed.accept(&ids(&["x", "y"]), vec![rel("x", "y")]));

		assert!(!feed.accept(&ids(&["old1", "old2"]), vec![rel("old1", "old2")]));
		assert_eq!(feed.relationships(), &[rel("x", "y")]);
	}

	#[test]
	fn identical_response_reports_no_change() {
		let mut feed = RelationshipFeed::default();
		feed.rekey(ids(&["a", "b"]));
		assert!(feed.accept(&ids(&["a", "b"]), vec![rel("a", "b")]));
		assert!(!feed.accept(&ids(&["a", "b"]), vec![rel("a", "b")]));
		assert!(feed.accept(&ids(&["a", "b"]), Vec::new()));
		assert!(feed.relationships().is_empty());
	}
}
