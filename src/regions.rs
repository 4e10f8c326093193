//! Region and template descriptors
//!
//! Static per-owner configuration: the ordered list of named regions a
//! template exposes, each optionally flagged inheritable. Descriptors are
//! validated when they are built, so a malformed configuration fails at
//! setup time instead of in a request path.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::error::{ContentError, ContentResult};

/// A named placement slot on a content owner
///
/// Regions are immutable after construction; aggregators reference them by
/// value and never mutate them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Region {
	key: String,
	title: String,
	#[serde(default)]
	inherited: bool,
	#[serde(default)]
	extra: HashMap<String, JsonValue>,
}

impl Region {
	/// Create a region with the given key and display title
	///
	/// Fails if `key` is empty; an unkeyed region is a programming mistake,
	/// not runtime data variance.
	pub fn new(key: impl Into<String>, title: impl Into<String>) -> ContentResult<Self> {
		let key = key.into();
		if key.is_empty() {
			return Err(ContentError::EmptyRegionKey);
		}
		Ok(Self {
			key,
			title: title.into(),
			inherited: false,
			extra: HashMap::new(),
		})
	}

	/// Flag this region as inheritable from ancestor owners
	pub fn inheritable(mut self) -> Self {
		self.inherited = true;
		self
	}

	/// Attach an open-ended extension attribute
	pub fn with_extra(mut self, key: impl Into<String>, value: JsonValue) -> Self {
		self.extra.insert(key.into(), value);
		self
	}

	/// The unique region key
	pub fn key(&self) -> &str {
		&self.key
	}

	/// The human-readable title
	pub fn title(&self) -> &str {
		&self.title
	}

	/// Whether empty instances of this region inherit ancestor content
	pub fn inherited(&self) -> bool {
		self.inherited
	}

	/// Extension attributes
	pub fn extra(&self) -> &HashMap<String, JsonValue> {
		&self.extra
	}
}

/// A template descriptor: a key, a title and an ordered region list
///
/// Owners select one template; the template's regions drive aggregation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Template {
	key: String,
	title: String,
	regions: Vec<Region>,
	#[serde(default)]
	preview_image: Option<String>,
	#[serde(default)]
	singleton: bool,
	#[serde(default)]
	child_template: Option<String>,
	#[serde(default)]
	extra: HashMap<String, JsonValue>,
}

impl Template {
	/// Create a template over an ordered region list
	///
	/// Fails if the key is empty or two regions share a key.
	pub fn new(
		key: impl Into<String>,
		title: impl Into<String>,
		regions: Vec<Region>,
	) -> ContentResult<Self> {
		let key = key.into();
		if key.is_empty() {
			return Err(ContentError::EmptyTemplateKey);
		}
		let mut seen = HashSet::new();
		for region in &regions {
			if !seen.insert(region.key()) {
				return Err(ContentError::DuplicateRegion {
					template: key,
					key: region.key().to_string(),
				});
			}
		}
		Ok(Self {
			key,
			title: title.into(),
			regions,
			preview_image: None,
			singleton: false,
			child_template: None,
			extra: HashMap::new(),
		})
	}

	/// Attach a preview image shown when selecting templates
	pub fn with_preview_image(mut self, path: impl Into<String>) -> Self {
		self.preview_image = Some(path.into());
		self
	}

	/// Allow at most one owner to use this template
	pub fn singleton(mut self) -> Self {
		self.singleton = true;
		self
	}

	/// Suggest a template for children of owners using this one
	pub fn with_child_template(mut self, key: impl Into<String>) -> Self {
		self.child_template = Some(key.into());
		self
	}

	/// Attach an open-ended extension attribute
	pub fn with_extra(mut self, key: impl Into<String>, value: JsonValue) -> Self {
		self.extra.insert(key.into(), value);
		self
	}

	/// The unique template key
	pub fn key(&self) -> &str {
		&self.key
	}

	/// The human-readable title
	pub fn title(&self) -> &str {
		&self.title
	}

	/// The ordered region list
	pub fn regions(&self) -> &[Region] {
		&self.regions
	}

	/// Look up one region by key
	pub fn region(&self, key: &str) -> Option<&Region> {
		self.regions.iter().find(|r| r.key() == key)
	}

	/// Preview image path, if any
	pub fn preview_image(&self) -> Option<&str> {
		self.preview_image.as_deref()
	}

	/// Whether this template may be used by at most one owner
	pub fn is_singleton(&self) -> bool {
		self.singleton
	}

	/// Suggested template key for child owners
	pub fn child_template(&self) -> Option<&str> {
		self.child_template.as_deref()
	}

	/// Extension attributes
	pub fn extra(&self) -> &HashMap<String, JsonValue> {
		&self.extra
	}
}

/// Registry of available templates
///
/// Built once at setup time; registration order is preserved so template
/// choices are listed the way they were declared.
#[derive(Debug, Default)]
pub struct TemplateRegistry {
	templates: Vec<Template>,
}

impl TemplateRegistry {
	/// Create an empty registry
	pub fn new() -> Self {
		Self::default()
	}

	/// Register a template, rejecting duplicate keys
	pub fn register(&mut self, template: Template) -> ContentResult<()> {
		if self.templates.iter().any(|t| t.key() == template.key()) {
			return Err(ContentError::DuplicateTemplate(template.key().to_string()));
		}
		self.templates.push(template);
		Ok(())
	}

	/// Look up a template by key
	pub fn get(&self, key: &str) -> ContentResult<&Template> {
		self.templates
			.iter()
			.find(|t| t.key() == key)
			.ok_or_else(|| ContentError::TemplateNotFound(key.to_string()))
	}

	/// `(key, title)` pairs in registration order
	pub fn choices(&self) -> impl Iterator<Item = (&str, &str)> {
		self.templates.iter().map(|t| (t.key(), t.title()))
	}

	/// Number of registered templates
	pub fn len(&self) -> usize {
		self.templates.len()
	}

	/// Whether no templates are registered
	pub fn is_empty(&self) -> bool {
		self.templates.is_empty()
	}
}
