//! Ancestor-chain inheritance resolution
//!
//! Fills a descendant's empty inheritable regions from an ordered ancestor
//! chain. The nearest ancestor with content for a region wins; farther
//! ancestors are never consulted for that region again.

use crate::contents::Contents;

/// Merge inheritable content from an ordered ancestor chain
///
/// `ancestors` is ordered nearest first. For each inheritable region still
/// empty in `contents`, the first ancestor with a non-empty bucket supplies
/// its blocks (by reference copy); once a region is filled, later ancestors
/// cannot override it. A chain exhausted without content leaves the region
/// empty, which is not an error.
pub fn inherit_from_ancestors(contents: &mut Contents, ancestors: &[&Contents]) {
	for ancestor in ancestors {
		if contents
			.regions()
			.iter()
			.all(|r| !r.inherited() || !contents.region_is_empty(r.key()))
		{
			// Every inheritable region is filled, the rest of the chain
			// cannot contribute anything.
			break;
		}
		contents.inherit_regions(ancestor);
	}
}
