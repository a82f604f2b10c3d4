use serde::Serialize;

/// One characteristic as returned by a provider: a dotted namespaced key plus
/// its typed value.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Characteristic {
    pub key: String,
    pub value: CharacteristicValue,
}

impl Characteristic {
    pub fn new(key: impl Into<String>, value: CharacteristicValue) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// Rectangle in sensor coordinates, e.g. an active array size.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RectValue {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectValue {
    pub fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Compact `[l,t][r,b]` form.
    pub fn short_string(&self) -> String {
        format!("[{},{}][{},{}]", self.left, self.top, self.right, self.bottom)
    }
}

/// Inclusive numeric range.
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RangeValue {
    pub lo: f64,
    pub hi: f64,
}

impl RangeValue {
    pub fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }
}

/// The closed set of value shapes a characteristic can carry.
///
/// Providers classify raw platform values into these variants once, so the
/// formatter's dispatch is an explicit match with an `Opaque` fallback arm
/// instead of a chain of runtime type tests.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum CharacteristicValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    IntArray(Vec<i64>),
    FloatArray(Vec<f64>),
    BoolArray(Vec<bool>),
    StrArray(Vec<String>),
    Rect(RectValue),
    Range(RangeValue),
    RangeArray(Vec<RangeValue>),
    /// Full platform rendering, type-name prefix included,
    /// e.g. `BlackLevelPattern([64, 64, 64, 64])`.
    BlackLevelPattern(String),
    /// Full platform rendering, e.g. `StreamConfiguration(...)`.
    StreamConfigurations(String),
    /// Human description per mandatory stream combination.
    MandatoryStreamCombinations(Vec<String>),
    /// Supported dynamic-range profile codes.
    DynamicRangeProfiles(Vec<i64>),
    /// Capability not available on this platform; a normal branch, not an error.
    Unsupported,
    /// Anything we could not classify; rendered via its default string form.
    Opaque(String),
}
