//! Kind-dispatching content renderer
//!
//! An explicit registry mapping block kind tags to render functions.
//! Dispatch tries the block's concrete kind, then walks its lineage nearest
//! first, then falls back to a deterministic textual representation so an
//! unregistered kind degrades instead of failing. Build one
//! [`ContentRenderer`] at process start and pass it by reference; the
//! registry is read-only afterwards, so concurrent reads are safe.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::warn;

use crate::error::ContentResult;
use crate::store::ContentItem;

type RenderFn = Box<dyn Fn(&dyn ContentItem) -> ContentResult<String> + Send + Sync>;

/// Registry of render functions, one per block kind
///
/// Render functions receive the block and return markup; each function owns
/// the escaping of the values it interpolates. The registry itself only
/// escapes its fallback output.
#[derive(Default)]
pub struct ContentRenderer {
	renderers: HashMap<String, RenderFn>,
}

impl ContentRenderer {
	/// Create an empty renderer configuration
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a render function for one kind tag
	///
	/// Re-registering a kind replaces the previous function.
	pub fn register<F>(&mut self, kind: impl Into<String>, render_fn: F)
	where
		F: Fn(&dyn ContentItem) -> ContentResult<String> + Send + Sync + 'static,
	{
		self.renderers.insert(kind.into(), Box::new(render_fn));
	}

	/// Render one block
	///
	/// Resolves the render function by exact kind, then by the block's
	/// lineage nearest first. With no match at all, returns the escaped
	/// fallback representation instead of an error.
	pub fn render(&self, item: &dyn ContentItem) -> ContentResult<String> {
		match self.resolve(item) {
			Some(render_fn) => render_fn(item),
			None => {
				warn!(kind = item.kind(), "no render function registered, using fallback");
				Ok(fallback(item))
			}
		}
	}

	/// Render a region's blocks and concatenate the outputs in list order
	pub fn render_region(&self, items: &[Arc<dyn ContentItem>]) -> ContentResult<String> {
		let mut output = String::new();
		for item in items {
			output.push_str(&self.render(item.as_ref())?);
		}
		Ok(output)
	}

	fn resolve(&self, item: &dyn ContentItem) -> Option<&RenderFn> {
		if let Some(render_fn) = self.renderers.get(item.kind()) {
			return Some(render_fn);
		}
		item.kind_lineage()
			.iter()
			.find_map(|ancestor| self.renderers.get(*ancestor))
	}
}

impl std::fmt::Debug for ContentRenderer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let mut kinds: Vec<&str> = self.renderers.keys().map(String::as_str).collect();
		kinds.sort_unstable();
		f.debug_struct("ContentRenderer").field("kinds", &kinds).finish()
	}
}

fn fallback(item: &dyn ContentItem) -> String {
	format!(
		"[unrendered {}: {}]",
		escape(item.kind()),
		escape(&format!("{item:?}"))
	)
}

fn escape(input: &str) -> String {
	input
		.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
}
