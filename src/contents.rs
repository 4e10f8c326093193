//! Per-owner content aggregation
//!
//! [`Contents`] groups one owner's content blocks by region, keeps each
//! region's blocks in ordering-key order and absorbs blocks whose region
//! was renamed or removed instead of failing. After population it is read
//! by the renderer and by inheritance merging.

use std::collections::HashMap;
use std::sync::Arc;

use crate::regions::Region;
use crate::store::{ContentItem, ContentOwner};

/// Aggregated content blocks for a single owner, grouped by region
///
/// Every added block lives in exactly one place: the bucket of its declared
/// region, or the unknown-region overflow list. Iteration and `len` cover
/// declared regions only; overflow blocks are reachable through
/// [`Contents::unknown_region_contents`].
#[derive(Debug)]
pub struct Contents {
	regions: Vec<Region>,
	buckets: HashMap<String, Vec<Arc<dyn ContentItem>>>,
	unknown_region_contents: Vec<Arc<dyn ContentItem>>,
}

impl Contents {
	/// Create an empty aggregator over the given region list
	pub fn new(regions: Vec<Region>) -> Self {
		Self {
			regions,
			buckets: HashMap::new(),
			unknown_region_contents: Vec::new(),
		}
	}

	/// Create an empty aggregator for one owner
	pub fn for_owner(owner: &dyn ContentOwner) -> Self {
		Self::new(owner.regions().to_vec())
	}

	/// Insert one block
	///
	/// The block lands in its region's bucket at the position given by its
	/// ordering key; equal keys keep insertion order, so repeated passes
	/// over unchanged store data are reproducible. A block whose region is
	/// not declared goes to the overflow list; stale region data must not
	/// break rendering.
	pub fn add(&mut self, item: Arc<dyn ContentItem>) {
		if self.regions.iter().any(|r| r.key() == item.region()) {
			let bucket = self.buckets.entry(item.region().to_string()).or_default();
			let pos = bucket.partition_point(|existing| existing.ordering() <= item.ordering());
			bucket.insert(pos, item);
		} else {
			self.unknown_region_contents.push(item);
		}
	}

	/// The ordered blocks of one region, empty if none
	pub fn get(&self, region_key: &str) -> &[Arc<dyn ContentItem>] {
		self.buckets
			.get(region_key)
			.map(Vec::as_slice)
			.unwrap_or(&[])
	}

	/// Whether a region currently holds no blocks
	pub fn region_is_empty(&self, region_key: &str) -> bool {
		self.get(region_key).is_empty()
	}

	/// All blocks in declared regions, region-declaration order first,
	/// ordering-key order within each region
	pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn ContentItem>> {
		self.regions.iter().flat_map(|r| self.get(r.key()).iter())
	}

	/// Total block count across declared regions (overflow excluded)
	pub fn len(&self) -> usize {
		self.regions.iter().map(|r| self.get(r.key()).len()).sum()
	}

	/// Whether no declared region holds any block
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// The region descriptors this aggregator was built over
	pub fn regions(&self) -> &[Region] {
		&self.regions
	}

	/// Blocks whose region key matches no declared region
	pub fn unknown_region_contents(&self) -> &[Arc<dyn ContentItem>] {
		&self.unknown_region_contents
	}

	/// Every block of one kind across declared regions, in iteration order
	///
	/// Matches the concrete kind tag or any tag in the block's lineage.
	pub fn all_of_kind(&self, kind: &str) -> Vec<Arc<dyn ContentItem>> {
		self.iter()
			.filter(|item| item.kind() == kind || item.kind_lineage().contains(&kind))
			.cloned()
			.collect()
	}

	/// Fill empty inheritable regions from another aggregator
	///
	/// For each region flagged inherited whose bucket here is empty, the
	/// source's bucket is reference-copied in (blocks stay shared, never
	/// duplicated). Non-inheritable and already-populated regions are left
	/// untouched, which makes repeated application with the same source a
	/// no-op.
	pub fn inherit_regions(&mut self, source: &Contents) {
		for region in &self.regions {
			if !region.inherited() {
				continue;
			}
			if self.buckets.get(region.key()).is_some_and(|b| !b.is_empty()) {
				continue;
			}
			let incoming = source.get(region.key());
			if incoming.is_empty() {
				continue;
			}
			self.buckets
				.insert(region.key().to_string(), incoming.to_vec());
		}
	}
}

impl<'a> IntoIterator for &'a Contents {
	type Item = &'a Arc<dyn ContentItem>;
	type IntoIter = Box<dyn Iterator<Item = &'a Arc<dyn ContentItem>> + 'a>;

	fn into_iter(self) -> Self::IntoIter {
		Box::new(self.iter())
	}
}
