//! The page layout as a declarative tree, and its HTML rendering.
//!
//! The tree is built and rendered once at startup. Uses `quick-xml`'s writer
//! for generation, so text and attribute values are escaped on the way out.

use std::io::Cursor;

use ghg_chart::component::{TAB_CONTENT_ID, TABS_ID, WORLD_MAP_ID};
use ghg_core::Tab;
use quick_xml::{
  Writer,
  events::{BytesEnd, BytesStart, BytesText, Event},
};
use strum::IntoEnumIterator;

use crate::error::{Error, Result};

pub const PAGE_TITLE: &str = "Greenhouse Gas Emissions Analysis";
pub const MAP_HEADING: &str = "Global Greenhouse Gas Emissions";
pub const PLOTLY_SRC: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
pub const SCRIPT_PATH: &str = "/assets/dashboard.js";

const DARK_GREEN: &str = "#013220";
const PANEL_SHADOW: &str = "0px 4px 6px rgba(0, 0, 0, 0.1)";

/// Trusted, quote-free CSS for the tab selector and dropdowns.
const CSS: &str = "\
.tabs{display:flex;margin-bottom:20px}\
.tab{flex:1;padding:10px;border:1px solid #d6d6d6;background:#f9f9f9;cursor:pointer}\
.tab.selected{background:#ffffff;border-top:2px solid #013220}\
.dropdown{width:100%;min-height:120px;margin-bottom:20px}";

/// Elements written as `<tag/>` with no closing tag.
const VOID: &[&str] = &["meta", "link", "br", "hr", "img", "input"];

// ─── Tree ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
  Element(Element),
  /// Escaped on output.
  Text(String),
  /// Written verbatim; only for compile-time constants.
  Raw(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Element {
  pub tag:      &'static str,
  pub attrs:    Vec<(&'static str, String)>,
  /// CSS declarations, rendered into the `style` attribute.
  pub style:    Vec<(&'static str, &'static str)>,
  pub children: Vec<Node>,
}

impl Element {
  pub fn new(tag: &'static str) -> Self {
    Self {
      tag,
      attrs: Vec::new(),
      style: Vec::new(),
      children: Vec::new(),
    }
  }

  pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
    self.attrs.push((name, value.into()));
    self
  }

  pub fn id(self, id: &str) -> Self { self.attr("id", id) }

  pub fn class(self, class: &str) -> Self { self.attr("class", class) }

  pub fn style(mut self, decls: &[(&'static str, &'static str)]) -> Self {
    self.style.extend_from_slice(decls);
    self
  }

  pub fn child(mut self, node: impl Into<Node>) -> Self {
    self.children.push(node.into());
    self
  }

  pub fn text(self, text: impl Into<String>) -> Self {
    self.child(Node::Text(text.into()))
  }

  /// First element in this subtree (self included) with the given id.
  #[cfg(test)]
  fn find(&self, id: &str) -> Option<&Element> {
    if self.attrs.iter().any(|(k, v)| *k == "id" && v == id) {
      return Some(self);
    }
    self.children.iter().find_map(|c| match c {
      Node::Element(el) => el.find(id),
      _ => None,
    })
  }

  fn style_attr(&self) -> String {
    self
      .style
      .iter()
      .map(|(prop, value)| format!("{prop}: {value}"))
      .collect::<Vec<_>>()
      .join("; ")
  }
}

impl From<Element> for Node {
  fn from(el: Element) -> Self { Node::Element(el) }
}

// ─── Dashboard ───────────────────────────────────────────────────────────────

fn tab_selector() -> Element {
  let default = Tab::default();
  Tab::iter().fold(
    Element::new("div")
      .id(TABS_ID)
      .class("tabs")
      .attr("data-value", default.id()),
    |tabs, tab| {
      let class = if tab == default { "tab selected" } else { "tab" };
      tabs.child(
        Element::new("button")
          .class(class)
          .attr("type", "button")
          .attr("data-tab", tab.id())
          .text(tab.label()),
      )
    },
  )
}

fn panel(width: &'static str) -> Element {
  Element::new("div").style(&[
    ("width", width),
    ("display", "inline-block"),
    ("background-color", "#ffffff"),
    ("padding", "20px"),
    ("border-radius", "10px"),
    ("box-shadow", PANEL_SHADOW),
  ])
}

/// The dashboard body: header, tabbed pie panel, map panel, footer.
pub fn dashboard(footer: &str) -> Element {
  let header = Element::new("div")
    .style(&[("background-color", "#f4f4f4")])
    .child(Element::new("h1").text(PAGE_TITLE).style(&[
      ("text-align", "center"),
      ("color", "#ffffff"),
      ("background-color", DARK_GREEN),
      ("padding", "20px"),
      ("margin-bottom", "30px"),
    ]));

  let left = panel("48%")
    .child(tab_selector())
    .child(Element::new("div").id(TAB_CONTENT_ID));

  let right = panel("65%")
    .style(&[("vertical-align", "top"), ("margin-left", "2%")])
    .child(
      Element::new("h3")
        .text(MAP_HEADING)
        .style(&[("text-align", "center"), ("margin-bottom", "20px")]),
    )
    .child(
      Element::new("div")
        .id(WORLD_MAP_ID)
        .class("graph")
        .style(&[("height", "550px"), ("width", "100%")]),
    );

  let body = Element::new("div")
    .style(&[("display", "flex"), ("justify-content", "center")])
    .child(left)
    .child(right);

  let footer = Element::new("div").text(footer).style(&[
    ("text-align", "center"),
    ("color", "#ffffff"),
    ("background-color", DARK_GREEN),
    ("padding", "10px"),
    ("margin-top", "30px"),
    ("font-size", "14px"),
  ]);

  Element::new("div")
    .style(&[
      ("font-family", "Arial, sans-serif"),
      ("background-color", "#f4f4f4"),
    ])
    .child(header)
    .child(body)
    .child(footer)
}

/// Wrap `body` in a full HTML document that loads Plotly and the client
/// script.
pub fn document(body: Element) -> Element {
  let head = Element::new("head")
    .child(Element::new("meta").attr("charset", "utf-8"))
    .child(
      Element::new("meta")
        .attr("name", "viewport")
        .attr("content", "width=device-width, initial-scale=1"),
    )
    .child(Element::new("title").text(PAGE_TITLE))
    .child(Element::new("script").attr("src", PLOTLY_SRC))
    .child(Element::new("style").child(Node::Raw(CSS)));

  Element::new("html").attr("lang", "en").child(head).child(
    Element::new("body")
      .style(&[("margin", "0")])
      .child(body)
      .child(Element::new("script").attr("src", SCRIPT_PATH)),
  )
}

/// Render the complete page.
pub fn render_page(footer: &str) -> Result<Vec<u8>> {
  render(&document(dashboard(footer)))
}

// ─── Rendering ───────────────────────────────────────────────────────────────

/// Render `root` as an HTML5 document.
pub fn render(root: &Element) -> Result<Vec<u8>> {
  let mut w = Writer::new(Cursor::new(Vec::new()));
  write(&mut w, Event::DocType(BytesText::from_escaped("html")))?;
  write_element(&mut w, root)?;
  Ok(w.into_inner().into_inner())
}

fn write(w: &mut Writer<Cursor<Vec<u8>>>, event: Event<'_>) -> Result<()> {
  w.write_event(event).map_err(|e| Error::Render(e.to_string()))
}

fn write_element(w: &mut Writer<Cursor<Vec<u8>>>, el: &Element) -> Result<()> {
  let mut start = BytesStart::new(el.tag);
  for (name, value) in &el.attrs {
    start.push_attribute((*name, value.as_str()));
  }
  if !el.style.is_empty() {
    start.push_attribute(("style", el.style_attr().as_str()));
  }

  if VOID.contains(&el.tag) {
    return write(w, Event::Empty(start));
  }

  write(w, Event::Start(start))?;
  for child in &el.children {
    match child {
      Node::Element(inner) => write_element(w, inner)?,
      Node::Text(text) => write(w, Event::Text(BytesText::new(text)))?,
      Node::Raw(raw) => write(w, Event::Text(BytesText::from_escaped(*raw)))?,
    }
  }
  write(w, Event::End(BytesEnd::new(el.tag)))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn page(footer: &str) -> String {
    String::from_utf8(render_page(footer).unwrap()).unwrap()
  }

  #[test]
  fn dashboard_has_every_control_target() {
    let root = dashboard("footer");
    assert!(root.find(TABS_ID).is_some());
    assert!(root.find(TAB_CONTENT_ID).is_some());
    assert!(root.find(WORLD_MAP_ID).is_some());
    assert!(root.find("nope").is_none());
  }

  #[test]
  fn tab_selector_defaults_to_country() {
    let tabs = tab_selector();
    assert!(tabs.attrs.contains(&("data-value", "country".to_string())));
    assert_eq!(tabs.children.len(), 2);
    let Node::Element(first) = &tabs.children[0] else {
      panic!("expected a button");
    };
    assert!(first.attrs.contains(&("class", "tab selected".to_string())));
    assert_eq!(first.children, [Node::Text("By Country".into())]);
  }

  #[test]
  fn page_is_a_full_document() {
    let html = page("footer text");
    assert!(html.starts_with("<!DOCTYPE"));
    assert!(html.contains("<title>Greenhouse Gas Emissions Analysis</title>"));
    assert!(html.contains(PLOTLY_SRC));
    assert!(html.contains(&format!("<script src=\"{SCRIPT_PATH}\"></script>")));
    assert!(html.contains("<meta charset=\"utf-8\"/>"));
    assert!(html.contains("id=\"ghg-world-map\""));
    assert!(html.contains("<div id=\"tab-content\"></div>"));
    assert!(html.contains("footer text"));
    assert!(html.ends_with("</html>"));
  }

  #[test]
  fn styles_render_as_declarations() {
    let html = page("f");
    assert!(html.contains("style=\"height: 550px; width: 100%\""));
    assert!(html.contains("background-color: #013220"));
  }

  #[test]
  fn footer_text_is_escaped() {
    let html = page("<b>bold</b> & co");
    assert!(html.contains("&lt;b&gt;bold&lt;/b&gt; &amp; co"));
    assert!(!html.contains("<b>bold</b>"));
  }

  #[test]
  fn css_is_written_verbatim() {
    let html = page("f");
    assert!(html.contains(".tab.selected{"));
  }
}
