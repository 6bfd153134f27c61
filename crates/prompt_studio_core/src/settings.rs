//! Sparse settings maps and their values.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::BTreeMap;

/// Sentinel the UI uses for "no selection" on single-select fields.
///
/// The normalizer does not treat it specially; callers map it to an absent
/// value before building a request.
pub const AUTO: &str = "Auto";

/// A single setting value.
///
/// Single-select and free-text fields carry `Text`; multi-select fields
/// carry `List`. Numbers and booleans in request files are read as their
/// text form, so `slideCount = 10` and `slideCount = "10"` are the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_more::From)]
#[serde(untagged)]
pub enum SettingValue {
    /// Categorical choice or free text
    Text(String),
    /// Multi-select choices, in selection order
    List(Vec<String>),
}

impl SettingValue {
    /// The text payload, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            SettingValue::Text(text) => Some(text),
            SettingValue::List(_) => None,
        }
    }

    /// The list payload, if this is a list value.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            SettingValue::Text(_) => None,
            SettingValue::List(items) => Some(items),
        }
    }

    /// True for the empty string. Empty lists are a genuine selection.
    pub fn is_empty_text(&self) -> bool {
        matches!(self, SettingValue::Text(text) if text.is_empty())
    }
}

/// Scalars accepted on the wire.
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Flag(bool),
}

impl From<Scalar> for String {
    fn from(scalar: Scalar) -> Self {
        match scalar {
            Scalar::Text(text) => text,
            Scalar::Integer(n) => n.to_string(),
            Scalar::Float(x) => x.to_string(),
            Scalar::Flag(b) => b.to_string(),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSettingValue {
    Scalar(Scalar),
    List(Vec<Scalar>),
}

impl<'de> Deserialize<'de> for SettingValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Ok(match RawSettingValue::deserialize(deserializer)? {
            RawSettingValue::Scalar(scalar) => SettingValue::Text(scalar.into()),
            RawSettingValue::List(items) => {
                SettingValue::List(items.into_iter().map(String::from).collect())
            }
        })
    }
}

impl From<&str> for SettingValue {
    fn from(text: &str) -> Self {
        SettingValue::Text(text.to_string())
    }
}

impl std::fmt::Display for SettingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingValue::Text(text) => write!(f, "{}", text),
            SettingValue::List(items) => write!(f, "{}", items.join(",")),
        }
    }
}

/// Field name to value mapping.
///
/// A missing key is *absent*; a key mapped to `None` is an explicit null.
/// Both, plus the empty string, count as blank.
///
/// # Examples
///
/// ```
/// use prompt_studio_core::Settings;
///
/// let settings = Settings::new()
///     .with("tone", "")
///     .with("platform", "TikTok")
///     .with_null("action");
///
/// assert!(settings.is_blank("tone"));
/// assert!(settings.is_blank("action"));
/// assert!(settings.is_blank("missing"));
/// assert_eq!(settings.text("platform"), Some("TikTok"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Settings(BTreeMap<String, Option<SettingValue>>);

impl Settings {
    /// Create an empty settings map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a concrete value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<SettingValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder-style insert of an explicit null.
    pub fn with_null(mut self, key: impl Into<String>) -> Self {
        self.0.insert(key.into(), None);
        self
    }

    /// Insert a concrete value, replacing any previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<SettingValue>) {
        self.0.insert(key.into(), Some(value.into()));
    }

    /// Insert a raw entry, which may be an explicit null.
    pub fn insert_raw(&mut self, key: impl Into<String>, value: Option<SettingValue>) {
        self.0.insert(key.into(), value);
    }

    /// Raw entry lookup: `None` when absent, `Some(None)` when null.
    pub fn get(&self, key: &str) -> Option<&Option<SettingValue>> {
        self.0.get(key)
    }

    /// Concrete value lookup, flattening absent and null.
    pub fn value(&self, key: &str) -> Option<&SettingValue> {
        self.0.get(key).and_then(Option::as_ref)
    }

    /// Text value lookup. Empty strings are returned as-is.
    pub fn text(&self, key: &str) -> Option<&str> {
        self.value(key).and_then(SettingValue::as_text)
    }

    /// Text value lookup that also drops empty strings.
    pub fn non_empty_text(&self, key: &str) -> Option<&str> {
        self.text(key).filter(|text| !text.is_empty())
    }

    /// Value rendered as text: lists are comma-joined, empty strings dropped.
    pub fn display(&self, key: &str) -> Option<Cow<'_, str>> {
        match self.value(key)? {
            SettingValue::Text(text) if text.is_empty() => None,
            SettingValue::Text(text) => Some(Cow::Borrowed(text.as_str())),
            list @ SettingValue::List(_) => Some(Cow::Owned(list.to_string())),
        }
    }

    /// List value lookup.
    pub fn list(&self, key: &str) -> Option<&[String]> {
        self.value(key).and_then(SettingValue::as_list)
    }

    /// Whether the key is present at all, null included.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// True when the key is absent, null, or the empty string.
    pub fn is_blank(&self, key: &str) -> bool {
        match self.0.get(key) {
            None | Some(None) => true,
            Some(Some(value)) => value.is_empty_text(),
        }
    }

    /// Number of keys, nulls included.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no keys are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Option<SettingValue>)> {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for Settings
where
    K: Into<String>,
    V: Into<SettingValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), Some(v.into())))
                .collect(),
        )
    }
}

/// Whether the designers module should describe an image or generate one.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Produce a prompt for another tool
    #[default]
    Prompt,
    /// Ask the target model to generate the image directly
    Image,
}

impl OutputMode {
    /// Read the mode from an `outputMode` setting. Only the exact value
    /// `"image"` selects image generation.
    pub fn from_setting(value: Option<&str>) -> Self {
        match value {
            Some("image") => OutputMode::Image,
            _ => OutputMode::Prompt,
        }
    }
}
