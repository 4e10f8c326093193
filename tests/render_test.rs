//! Renderer dispatch: exact kind, lineage walk, deterministic fallback

use std::any::Any;
use std::sync::Arc;

use blockcms::prelude::*;
use rstest::rstest;
use uuid::Uuid;

#[derive(Debug)]
struct TextItem {
	owner: OwnerId,
	ordering: i32,
	text: String,
}

impl TextItem {
	fn new(ordering: i32, text: &str) -> Arc<dyn ContentItem> {
		Arc::new(Self {
			owner: Uuid::new_v4(),
			ordering,
			text: text.to_string(),
		})
	}
}

impl ContentItem for TextItem {
	fn owner_id(&self) -> OwnerId {
		self.owner
	}

	fn region(&self) -> &str {
		"main"
	}

	fn ordering(&self) -> i32 {
		self.ordering
	}

	fn kind(&self) -> &str {
		"text"
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

// A specialized kind declaring "text" as its ancestor
#[derive(Debug)]
struct SpecialTextItem {
	owner: OwnerId,
	text: String,
}

impl ContentItem for SpecialTextItem {
	fn owner_id(&self) -> OwnerId {
		self.owner
	}

	fn region(&self) -> &str {
		"main"
	}

	fn ordering(&self) -> i32 {
		1
	}

	fn kind(&self) -> &str {
		"special_text"
	}

	fn kind_lineage(&self) -> &[&str] {
		&["text"]
	}

	fn as_any(&self) -> &dyn Any {
		self
	}
}

fn text_renderer() -> ContentRenderer {
	let mut renderer = ContentRenderer::new();
	renderer.register("text", |item: &dyn ContentItem| {
		let text = item
			.as_any()
			.downcast_ref::<TextItem>()
			.map(|t| t.text.as_str())
			.or_else(|| {
				item.as_any()
					.downcast_ref::<SpecialTextItem>()
					.map(|t| t.text.as_str())
			})
			.unwrap_or("");
		Ok(format!("<p>{text}</p>"))
	});
	renderer
}

#[rstest]
fn test_exact_kind_match() {
	// Arrange
	let renderer = text_renderer();
	let item = TextItem::new(1, "hello");

	// Act & Assert
	assert_eq!(renderer.render(item.as_ref()).unwrap(), "<p>hello</p>");
}

#[rstest]
fn test_lineage_walk_reaches_ancestor_registration() {
	// Arrange - no function registered for "special_text" itself
	let renderer = text_renderer();
	let item = SpecialTextItem {
		owner: Uuid::new_v4(),
		text: "subclassed".to_string(),
	};

	// Act & Assert - the "text" function handles it, not the fallback
	assert_eq!(renderer.render(&item).unwrap(), "<p>subclassed</p>");
}

#[rstest]
fn test_unregistered_kind_falls_back_deterministically() {
	// Arrange - empty registry
	let renderer = ContentRenderer::new();
	let item = TextItem::new(1, "plain");

	// Act
	let first = renderer.render(item.as_ref()).unwrap();
	let second = renderer.render(item.as_ref()).unwrap();

	// Assert - identifies the kind, stable across calls
	assert!(first.starts_with("[unrendered text:"));
	assert!(first.contains("plain"));
	assert_eq!(first, second);
}

#[rstest]
fn test_fallback_escapes_markup() {
	// Arrange
	let renderer = ContentRenderer::new();
	let item = TextItem::new(1, "<script>alert(1)</script>");

	// Act
	let output = renderer.render(item.as_ref()).unwrap();

	// Assert
	assert!(!output.contains("<script>"));
	assert!(output.contains("&lt;script&gt;"));
}

#[rstest]
fn test_reregistering_a_kind_replaces_the_function() {
	// Arrange
	let mut renderer = text_renderer();
	renderer.register("text", |_item: &dyn ContentItem| Ok("<hr>".to_string()));

	// Act & Assert - last write wins
	let item = TextItem::new(1, "ignored");
	assert_eq!(renderer.render(item.as_ref()).unwrap(), "<hr>");
}

#[rstest]
fn test_render_region_concatenates_in_list_order() {
	// Arrange
	let renderer = text_renderer();
	let items = vec![TextItem::new(1, "one"), TextItem::new(2, "two")];

	// Act
	let output = renderer.render_region(&items).unwrap();

	// Assert
	assert_eq!(output, "<p>one</p><p>two</p>");
}

#[rstest]
fn test_render_region_on_empty_list_is_empty() {
	let renderer = text_renderer();

	assert_eq!(renderer.render_region(&[]).unwrap(), "");
}

#[rstest]
fn test_render_function_errors_propagate() {
	// Arrange
	let mut renderer = ContentRenderer::new();
	renderer.register("text", |_item: &dyn ContentItem| {
		Err(ContentError::Render("template missing".to_string()))
	});
	let items = vec![TextItem::new(1, "boom")];

	// Act & Assert
	assert!(matches!(
		renderer.render_region(&items),
		Err(ContentError::Render(_))
	));
}
