//! # blockcms
//!
//! A content aggregation and rendering core in the spirit of FeinCMS and
//! django-content-editor: owners (pages, articles, ...) hold an ordered,
//! heterogeneous collection of typed content blocks grouped into named
//! regions; this crate fetches, groups, merges and renders that collection.
//!
//! ## Features
//!
//! - **Region descriptors**: ordered, optionally inheritable placement slots,
//!   validated at setup time
//! - **Contents aggregator**: groups an owner's blocks by region, preserves
//!   ordering, tolerates blocks pointing at removed regions
//! - **Batched fetching**: one store query per block kind across all owners,
//!   never one per owner
//! - **Region inheritance**: empty inheritable regions are filled from the
//!   nearest ancestor with content
//! - **Type-dispatching renderer**: an explicit registry from block kind to
//!   render function, with lineage-aware lookup and a safe fallback
//!
//! ## Architecture
//!
//! ```text
//! blockcms
//! ├── regions   - Region/Template descriptors, template registry
//! ├── contents  - per-owner aggregator (grouping, ordering, inheritance)
//! ├── store     - external collaborator contracts (items, owners, store)
//! ├── fetch     - multi-owner batched fetch orchestration
//! ├── inherit   - ancestor-chain inheritance resolution
//! └── render    - kind-dispatching renderer registry
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use blockcms::prelude::*;
//!
//! // Describe the owner's regions once, at setup time
//! let regions = vec![
//!     Region::new("main", "Main content")?,
//!     Region::new("sidebar", "Sidebar")?.inheritable(),
//! ];
//!
//! // Fetch every block for a set of owners, one query per kind
//! let mut contents = fetch_contents(&store, &[&page], &["richtext", "image"]).await?;
//!
//! // Fill empty inheritable regions from the page's ancestors
//! let page_contents = contents.get_mut(&page.owner_id()).unwrap();
//! inherit_from_ancestors(page_contents, &[&parent_contents, &root_contents]);
//!
//! // Render a region with a process-wide renderer configuration
//! let html = renderer.render_region(page_contents.get("main"))?;
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::broken_intra_doc_links)]

// Module declarations
pub mod contents;
pub mod fetch;
pub mod inherit;
pub mod regions;
pub mod render;
pub mod store;

// Prelude for convenient imports
pub mod prelude {
	//! Convenient re-exports of commonly used items

	// Descriptors
	pub use crate::regions::{Region, Template, TemplateRegistry};

	// Aggregation
	pub use crate::contents::Contents;

	// Store contracts
	pub use crate::store::{ContentItem, ContentOwner, ContentStore, OwnerId};

	// Orchestration
	pub use crate::fetch::fetch_contents;
	pub use crate::inherit::inherit_from_ancestors;

	// Rendering
	pub use crate::render::ContentRenderer;

	// Errors
	pub use crate::error::{ContentError, ContentResult};
}

/// Content aggregation error types
pub mod error {
	use thiserror::Error;

	/// Errors raised by descriptor validation, fetching and rendering
	#[derive(Error, Debug)]
	pub enum ContentError {
		/// A region descriptor was constructed without a key
		#[error("Region descriptor is missing a key")]
		EmptyRegionKey,

		/// A template descriptor was constructed without a key
		#[error("Template descriptor is missing a key")]
		EmptyTemplateKey,

		/// Two regions in one template share a key
		#[error("Duplicate region key `{key}` in template `{template}`")]
		DuplicateRegion {
			/// The template carrying the colliding regions
			template: String,
			/// The region key declared more than once
			key: String,
		},

		/// A template key was registered twice
		#[error("Template already registered: {0}")]
		DuplicateTemplate(String),

		/// No template registered under the requested key
		#[error("Template not found: {0}")]
		TemplateNotFound(String),

		/// The content store adapter failed
		#[error("Content store error: {0}")]
		Store(String),

		/// A registered render function failed
		#[error("Render error: {0}")]
		Render(String),
	}

	/// Result type for content aggregation operations
	pub type ContentResult<T> = Result<T, ContentError>;
}
