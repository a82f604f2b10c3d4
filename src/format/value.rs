use std::fmt::Display;

use crate::hardware::CharacteristicValue;

/// Rendered in place of capability-gated values the platform cannot supply.
pub const UNSUPPORTED_MARKER: &str = "unsupported";

/// Format one characteristic value for display.
///
/// Ranges render as `lo..hi`, rectangles in their compact short form, arrays
/// comma-joined with no enclosing brackets, and the platform-specific
/// structured types with their type-name prefixes stripped. Everything
/// unrecognized falls through to its default string form.
pub fn format_value(value: &CharacteristicValue) -> String {
    match value {
        CharacteristicValue::Range(range) => format!("{}..{}", range.lo, range.hi),
        CharacteristicValue::RangeArray(ranges) => join(
            ranges
                .iter()
                .map(|range| format!("{}..{}", range.lo, range.hi)),
        ),
        CharacteristicValue::Rect(rect) => rect.short_string(),
        CharacteristicValue::IntArray(items) => join(items.iter()),
        CharacteristicValue::FloatArray(items) => join(items.iter()),
        CharacteristicValue::BoolArray(items) => join(items.iter()),
        CharacteristicValue::StrArray(items) => join(items.iter()),
        CharacteristicValue::BlackLevelPattern(raw) => strip_type_name(raw, "BlackLevelPattern"),
        CharacteristicValue::StreamConfigurations(raw) => {
            strip_type_name(raw, "StreamConfiguration")
        }
        CharacteristicValue::MandatoryStreamCombinations(descriptions) => {
            join(descriptions.iter())
        }
        CharacteristicValue::DynamicRangeProfiles(profiles) => join(profiles.iter()),
        CharacteristicValue::Bool(b) => b.to_string(),
        CharacteristicValue::Int(i) => i.to_string(),
        CharacteristicValue::Float(f) => f.to_string(),
        CharacteristicValue::Str(s) => s.clone(),
        CharacteristicValue::Unsupported => UNSUPPORTED_MARKER.to_string(),
        CharacteristicValue::Opaque(raw) => raw.clone(),
    }
}

fn join<I, T>(items: I) -> String
where
    I: Iterator<Item = T>,
    T: Display,
{
    items
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Strip a `TypeName(...)` wrapper, keeping only the inner text.
fn strip_type_name(raw: &str, type_name: &str) -> String {
    raw.strip_prefix(type_name)
        .map(|rest| {
            rest.strip_prefix('(')
                .and_then(|inner| inner.strip_suffix(')'))
                .unwrap_or(rest)
        })
        .unwrap_or(raw)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::{RangeValue, RectValue};

    #[test]
    fn range_renders_lo_dot_dot_hi() {
        let value = CharacteristicValue::Range(RangeValue::new(15.0, 30.0));
        assert_eq!(format_value(&value), "15..30");
    }

    #[test]
    fn fractional_range_keeps_decimals() {
        let value = CharacteristicValue::Range(RangeValue::new(0.5, 8.0));
        assert_eq!(format_value(&value), "0.5..8");
    }

    #[test]
    fn range_array_joins_ranges() {
        let value = CharacteristicValue::RangeArray(vec![
            RangeValue::new(15.0, 30.0),
            RangeValue::new(30.0, 30.0),
        ]);
        assert_eq!(format_value(&value), "15..30, 30..30");
    }

    #[test]
    fn rect_uses_short_form() {
        let value = CharacteristicValue::Rect(RectValue::new(0, 0, 4000, 3000));
        assert_eq!(format_value(&value), "[0,0][4000,3000]");
    }

    #[test]
    fn arrays_are_comma_joined_without_brackets() {
        assert_eq!(
            format_value(&CharacteristicValue::IntArray(vec![0, 1, 2])),
            "0, 1, 2"
        );
        assert_eq!(
            format_value(&CharacteristicValue::BoolArray(vec![true, false])),
            "true, false"
        );
    }

    #[test]
    fn black_level_pattern_strips_type_name() {
        let value =
            CharacteristicValue::BlackLevelPattern("BlackLevelPattern([64, 64, 64, 64])".into());
        assert_eq!(format_value(&value), "[64, 64, 64, 64]");
    }

    #[test]
    fn stream_configurations_strip_type_name() {
        let value =
            CharacteristicValue::StreamConfigurations("StreamConfiguration(640x480)".into());
        assert_eq!(format_value(&value), "640x480");
    }

    #[test]
    fn unsupported_renders_marker() {
        assert_eq!(format_value(&CharacteristicValue::Unsupported), "unsupported");
    }
}
