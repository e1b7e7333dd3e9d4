//! Plotly figure types.
//!
//! Only the attributes the dashboard sets are modelled. Optional layout
//! sections are omitted from the JSON when unset so Plotly applies its own
//! defaults.

use serde::Serialize;

// ─── Figure ──────────────────────────────────────────────────────────────────

/// A complete figure: traces plus layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
  pub data:   Vec<Trace>,
  pub layout: Layout,
}

impl Figure {
  pub fn title(&self) -> Option<&str> {
    self.layout.title.as_ref().map(|t| t.text.as_str())
  }
}

/// One trace, tagged with Plotly's `type` attribute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
  Pie(PieTrace),
  Choropleth(ChoroplethTrace),
}

// ─── Traces ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieTrace {
  pub labels:        Vec<String>,
  pub values:        Vec<f64>,
  /// Fraction of the radius cut out of the middle.
  pub hole:          f64,
  pub hovertemplate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChoroplethTrace {
  /// Location codes, interpreted according to `locationmode`.
  pub locations:     Vec<String>,
  pub locationmode:  String,
  /// Colour value per location.
  pub z:             Vec<f64>,
  pub hovertext:     Vec<String>,
  /// Extra per-location values referenced from `hovertemplate`.
  pub customdata:    Vec<[f64; 2]>,
  pub hovertemplate: String,
  pub coloraxis:     String,
}

// ─── Layout ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title:     Option<Title>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub geo:       Option<Geo>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub coloraxis: Option<ColorAxis>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub margin:    Option<Margin>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
  pub text: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub font: Option<Font>,
}

impl Title {
  pub fn new(text: impl Into<String>) -> Self {
    Self {
      text: text.into(),
      font: None,
    }
  }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Font {
  pub size: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Geo {
  pub showframe:      bool,
  pub showcoastlines: bool,
  pub projection:     Projection,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
  #[serde(rename = "type")]
  pub kind: String,
}

/// A shared colour axis; traces refer to it by name (`"coloraxis"`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorAxis {
  /// `(position in [0, 1], CSS colour)` stops.
  pub colorscale: Vec<(f64, String)>,
  pub colorbar:   ColorBar,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBar {
  pub title:     Title,
  pub thickness: u32,
  pub len:       f64,
  pub tickfont:  Font,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Margin {
  pub r: u32,
  pub t: u32,
  pub l: u32,
  pub b: u32,
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn trace_is_tagged_with_type() {
    let trace = Trace::Pie(PieTrace {
      labels:        vec!["A".into()],
      values:        vec![100.0],
      hole:          0.3,
      hovertemplate: "%{label}".into(),
    });
    let v = serde_json::to_value(&trace).unwrap();
    assert_eq!(v["type"], "pie");
    assert_eq!(v["labels"], json!(["A"]));
    assert_eq!(v["hole"], json!(0.3));
  }

  #[test]
  fn unset_layout_sections_are_omitted() {
    let layout = Layout {
      title: Some(Title::new("Hello")),
      ..Layout::default()
    };
    let v = serde_json::to_value(&layout).unwrap();
    assert_eq!(v, json!({ "title": { "text": "Hello" } }));
  }

  #[test]
  fn projection_kind_serialises_as_type() {
    let geo = Geo {
      showframe:      false,
      showcoastlines: true,
      projection:     Projection {
        kind: "natural earth".into(),
      },
    };
    let v = serde_json::to_value(&geo).unwrap();
    assert_eq!(v["projection"]["type"], "natural earth");
  }

  #[test]
  fn colorscale_stops_serialise_as_pairs() {
    let axis = ColorAxis {
      colorscale: vec![(0.0, "yellow".into()), (1.0, "red".into())],
      colorbar:   ColorBar {
        title:     Title::new("t"),
        thickness: 8,
        len:       0.35,
        tickfont:  Font { size: 8 },
      },
    };
    let v = serde_json::to_value(&axis).unwrap();
    assert_eq!(v["colorscale"], json!([[0.0, "yellow"], [1.0, "red"]]));
  }
}
