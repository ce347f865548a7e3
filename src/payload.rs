//! Payload shaping for the tooltip content.

use std::sync::Arc;

use iced::Color;
use indexmap::IndexMap;

/// The value carried by one payload entry.
#[derive(Debug, Clone, PartialEq)]
pub enum PayloadValue {
    /// A single numeric reading.
    Number(f64),
    /// A preformatted textual reading.
    Text(String),
    /// A low/high pair, e.g. a band or an error range.
    Range(f64, f64),
}

impl PayloadValue {
    /// Default textual rendering used by the built-in content.
    pub fn display(&self) -> String {
        match self {
            Self::Number(value) => trim_number(*value),
            Self::Text(text) => text.clone(),
            Self::Range(low, high) => {
                format!("{} – {}", trim_number(*low), trim_number(*high))
            }
        }
    }
}

impl From<f64> for PayloadValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for PayloadValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_owned())
    }
}

impl From<String> for PayloadValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Format a number without trailing fractional noise.
fn trim_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// One data series' reading at the annotated point.
#[derive(Debug, Clone, PartialEq)]
pub struct PayloadEntry {
    /// Display name of the series.
    pub name: String,
    /// The reading itself; `None` stands for a missing sample.
    pub value: Option<PayloadValue>,
    /// Unit suffix appended after the value.
    pub unit: Option<String>,
    /// Identifier of the producing series; the default dedup key.
    pub data_key: Option<String>,
    /// Series color picked up by the built-in content.
    pub color: Option<Color>,
    /// Render the value without the name/separator prefix.
    pub hide_name: bool,
}

impl PayloadEntry {
    /// Create an entry with a value.
    pub fn new(name: impl Into<String>, value: impl Into<PayloadValue>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
            unit: None,
            data_key: None,
            color: None,
            hide_name: false,
        }
    }

    /// Create an entry whose sample is missing.
    pub fn missing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            unit: None,
            data_key: None,
            color: None,
            hide_name: false,
        }
    }

    /// Set the unit suffix.
    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Set the series identifier used by the default dedup key.
    pub fn with_data_key(mut self, key: impl Into<String>) -> Self {
        self.data_key = Some(key.into());
        self
    }

    /// Set the series color.
    pub fn with_color(mut self, color: impl Into<Color>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Render only the value, without the name prefix.
    pub fn without_name(mut self) -> Self {
        self.hide_name = true;
        self
    }
}

/// Extracts the dedup key for an entry.
///
/// Entries whose extractor returns `None` share a single bucket.
pub type KeyExtractor = Arc<dyn Fn(&PayloadEntry) -> Option<String> + Send + Sync>;

/// Policy selecting at most one displayed entry per key.
#[derive(Clone, Default)]
pub enum DedupRule {
    /// Keep every entry.
    #[default]
    Off,
    /// Keep the first entry per `data_key`.
    ByDataKey,
    /// Keep the first entry per caller-extracted key.
    ByKey(KeyExtractor),
}

/// Derive the displayed entry set from the raw payload.
///
/// `filter_null` drops entries whose sample is missing; the dedup rule then
/// keeps the first occurrence per key. Both steps preserve source order.
pub fn displayed_payload(
    payload: &[PayloadEntry],
    filter_null: bool,
    dedup: &DedupRule,
) -> Vec<PayloadEntry> {
    let filtered = payload
        .iter()
        .filter(|entry| !filter_null || entry.value.is_some())
        .cloned();

    match dedup {
        DedupRule::Off => filtered.collect(),
        DedupRule::ByDataKey => dedup_by(filtered, |entry| entry.data_key.clone()),
        DedupRule::ByKey(key) => dedup_by(filtered, |entry| key(entry)),
    }
}

fn dedup_by(
    entries: impl Iterator<Item = PayloadEntry>,
    key: impl Fn(&PayloadEntry) -> Option<String>,
) -> Vec<PayloadEntry> {
    let mut first_per_key: IndexMap<Option<String>, PayloadEntry> = IndexMap::new();
    for entry in entries {
        first_per_key.entry(key(&entry)).or_insert(entry);
    }
    first_per_key.into_values().collect()
}
