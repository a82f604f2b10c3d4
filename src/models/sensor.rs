use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Prefix the platform uses on sensor type strings, e.g.
/// `android.sensor.ambient_temperature`.
pub const SENSOR_TYPE_PREFIX: &str = "android.sensor.";

/// Reported confidence of a sensor reading.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum Accuracy {
    High,
    Medium,
    Low,
    Unreliable,
    NoContact,
    Unknown,
}

impl Accuracy {
    pub fn label(&self) -> &'static str {
        match self {
            Accuracy::High => "high",
            Accuracy::Medium => "medium",
            Accuracy::Low => "low",
            Accuracy::Unreliable => "unreliable",
            Accuracy::NoContact => "untrusted",
            Accuracy::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ReportingMode {
    Continuous,
    OnChange,
    OneShot,
    SpecialTrigger,
}

impl ReportingMode {
    pub fn label(&self) -> &'static str {
        match self {
            ReportingMode::Continuous => "continuous",
            ReportingMode::OnChange => "on change",
            ReportingMode::OneShot => "one shot",
            ReportingMode::SpecialTrigger => "special trigger",
        }
    }
}

/// Direct report channel kinds a sensor may support.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DirectChannelType {
    MemoryFile,
    HardwareBuffer,
}

impl DirectChannelType {
    pub fn label(&self) -> &'static str {
        match self {
            DirectChannelType::MemoryFile => "1 (MemoryFile)",
            DirectChannelType::HardwareBuffer => "2 (HardwareBuffer)",
        }
    }
}

/// Static description of one hardware sensor, fetched once per list visit.
///
/// Capability-gated fields are `Option`s; `None` renders as "unsupported"
/// rather than being treated as an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SensorDescriptor {
    pub id: Option<i32>,
    pub name: String,
    pub vendor: String,
    pub type_code: i32,
    pub string_type: String,
    pub version: i32,
    pub min_delay_us: i32,
    pub max_delay_us: i32,
    pub max_range: f32,
    pub resolution: f32,
    pub power_ma: f32,
    pub is_dynamic: Option<bool>,
    pub is_wake_up: bool,
    pub reporting_mode: ReportingMode,
    pub highest_direct_report_rate: Option<i32>,
    pub additional_info_supported: Option<bool>,
    pub fifo_max_event_count: u32,
    pub fifo_reserved_event_count: u32,
    pub direct_channel_types: Option<Vec<DirectChannelType>>,
}

impl SensorDescriptor {
    /// Human label derived from the type string:
    /// `android.sensor.ambient_temperature` becomes `Ambient Temperature`.
    pub fn kind_label(&self) -> String {
        let stripped = self
            .string_type
            .strip_prefix(SENSOR_TYPE_PREFIX)
            .unwrap_or(&self.string_type);
        stripped
            .split('_')
            .filter(|word| !word.is_empty())
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One axis of a live reading, already paired with its display label and
/// unit suffix.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SampleValue {
    pub label: String,
    pub value: f64,
    pub unit_suffix: String,
}

impl SampleValue {
    pub fn line(&self) -> String {
        format!("{}: {}{}", self.label, self.value, self.unit_suffix)
    }
}

/// One snapshot of a sensor's multi-axis reading plus accuracy.
///
/// Two instances live per detail session: the always-latest `current` and the
/// pause-frozen `displayed` (see the relay module).
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LiveSensorSample {
    pub values: Vec<SampleValue>,
    pub accuracy: Accuracy,
    pub timestamp: DateTime<Utc>,
}

impl LiveSensorSample {
    /// Axis lines followed by the trailing accuracy line.
    pub fn lines(&self) -> Vec<String> {
        let mut lines: Vec<String> = self.values.iter().map(SampleValue::line).collect();
        lines.push(format!("Accuracy: {}", self.accuracy.label()));
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_label_strips_prefix_and_titlecases() {
        let sensor = SensorDescriptor {
            id: None,
            name: "x".into(),
            vendor: "x".into(),
            type_code: 13,
            string_type: "android.sensor.ambient_temperature".into(),
            version: 1,
            min_delay_us: 0,
            max_delay_us: 0,
            max_range: 0.0,
            resolution: 0.0,
            power_ma: 0.0,
            is_dynamic: None,
            is_wake_up: false,
            reporting_mode: ReportingMode::Continuous,
            highest_direct_report_rate: None,
            additional_info_supported: None,
            fifo_max_event_count: 0,
            fifo_reserved_event_count: 0,
            direct_channel_types: None,
        };
        assert_eq!(sensor.kind_label(), "Ambient Temperature");
    }

    #[test]
    fn sample_lines_end_with_accuracy() {
        let sample = LiveSensorSample {
            values: vec![SampleValue {
                label: "Pressure".into(),
                value: 1013.2,
                unit_suffix: "hPa (mbar)".into(),
            }],
            accuracy: Accuracy::Medium,
            timestamp: Utc::now(),
        };
        assert_eq!(
            sample.lines(),
            vec!["Pressure: 1013.2hPa (mbar)", "Accuracy: medium"]
        );
    }
}
