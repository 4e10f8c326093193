//! Multi-owner batched fetch orchestration
//!
//! Builds one [`Contents`] per owner by issuing exactly one store query per
//! block kind across the whole owner set. Query count is O(kinds), never
//! O(owners × kinds).

use std::collections::HashMap;

use tracing::debug;

use crate::contents::Contents;
use crate::error::ContentResult;
use crate::store::{ContentOwner, ContentStore, OwnerId};

/// Fetch every content block for a set of owners, one query per kind
///
/// Returns one aggregator per owner, keyed by owner id, each populated with
/// the owner's blocks grouped by region and ordered by ordering key (ties
/// keep the store's row order). An empty owner set returns an empty map
/// without touching the store; an empty kind list returns one empty
/// aggregator per owner. Rows the store returns for owners outside the
/// requested set are discarded.
pub async fn fetch_contents<S>(
	store: &S,
	owners: &[&dyn ContentOwner],
	kinds: &[&str],
) -> ContentResult<HashMap<OwnerId, Contents>>
where
	S: ContentStore + ?Sized,
{
	if owners.is_empty() {
		return Ok(HashMap::new());
	}

	let mut result: HashMap<OwnerId, Contents> = owners
		.iter()
		.map(|owner| (owner.owner_id(), Contents::for_owner(*owner)))
		.collect();
	let owner_ids: Vec<OwnerId> = owners.iter().map(|owner| owner.owner_id()).collect();

	for kind in kinds {
		debug!(kind = %kind, owner_count = owner_ids.len(), "fetching content blocks");
		let rows = store.fetch_by_kind_and_owners(kind, &owner_ids).await?;
		for item in rows {
			match result.get_mut(&item.owner_id()) {
				Some(contents) => contents.add(item),
				None => {
					debug!(
						owner = %item.owner_id(),
						kind = %kind,
						"discarding block for owner outside the requested set"
					);
				}
			}
		}
	}

	Ok(result)
}
