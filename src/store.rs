//! External collaborator contracts
//!
//! The aggregation core does not own persistence. It consumes three
//! contracts: content blocks ([`ContentItem`]), the owners they belong to
//! ([`ContentOwner`]) and the store that fetches them in batches
//! ([`ContentStore`]). Implementations live with the application's data
//! layer; the core only reads through these traits.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ContentResult;
use crate::regions::Region;

/// Identifier of a content owner (page, article, ...)
pub type OwnerId = Uuid;

/// One content block belonging to one owner, placed in one region
///
/// Blocks are created and destroyed entirely by the external store; the
/// core treats them as opaque, shared, read-only records. `kind` is the
/// concrete block type tag; `kind_lineage` lists ancestor type tags,
/// nearest first, so the renderer can dispatch subclass-aware without
/// runtime reflection.
pub trait ContentItem: fmt::Debug + Send + Sync {
	/// The owner this block belongs to
	fn owner_id(&self) -> OwnerId;

	/// The key of the region this block is placed in
	fn region(&self) -> &str;

	/// Sort key within the region, ascending
	fn ordering(&self) -> i32;

	/// Concrete block type tag
	fn kind(&self) -> &str;

	/// Ancestor type tags, nearest first
	fn kind_lineage(&self) -> &[&str] {
		&[]
	}

	/// Downcast access for render functions
	fn as_any(&self) -> &dyn Any;
}

/// An entity content blocks attach to
///
/// The region list must be stable for the duration of one aggregation pass.
pub trait ContentOwner {
	/// Identifier used to match blocks to this owner
	fn owner_id(&self) -> OwnerId;

	/// Ordered region descriptors for this owner
	fn regions(&self) -> &[Region];
}

/// Batched access to stored content blocks
///
/// One call returns every block of one kind across a whole owner set; the
/// orchestrator relies on this to issue one query per kind instead of one
/// per owner. Implementations must not silently drop rows; returning rows
/// for owners outside the requested set is tolerated (the orchestrator
/// discards them).
#[async_trait]
pub trait ContentStore: Send + Sync {
	/// Fetch all blocks of `kind` belonging to any owner in `owners`
	async fn fetch_by_kind_and_owners(
		&self,
		kind: &str,
		owners: &[OwnerId],
	) -> ContentResult<Vec<Arc<dyn ContentItem>>>;
}
