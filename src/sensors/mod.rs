//! Sensor presentation builders: list rows and the six detail sections.

pub mod kinds;

use crate::format::UNSUPPORTED_MARKER;
use crate::models::{PresentationRecord, RecordAction, SensorDescriptor};
use crate::relay::RelayView;

use kinds::{SensorKind, SiUnit};

/// One list row per sensor: the humanized kind as headline, the hardware
/// name as the single data line.
pub fn records(sensors: &[SensorDescriptor]) -> Vec<PresentationRecord> {
    sensors
        .iter()
        .enumerate()
        .map(|(slot, sensor)| PresentationRecord {
            headline: sensor.kind_label(),
            icon: Some(SensorKind::from_type_code(sensor.type_code).glyph()),
            data_lines: vec![sensor.name.clone()],
            action: Some(RecordAction::OpenSensor(slot)),
        })
        .collect()
}

/// The detail sections for one sensor, with the live pause-gated sample on
/// top. Capability-gated fields render the unsupported marker.
pub fn detail_records(sensor: &SensorDescriptor, view: &RelayView) -> Vec<PresentationRecord> {
    let mut records = Vec::with_capacity(6);

    let live_lines = match &view.displayed {
        Some(sample) => sample.lines(),
        None => vec!["No data available".to_string()],
    };
    let live_icon = if view.displayed.is_none() {
        "…"
    } else if !view.paused {
        "▶"
    } else {
        "⏸"
    };
    records.push(PresentationRecord {
        headline: "Real-Time Data".to_string(),
        icon: Some(live_icon),
        data_lines: live_lines,
        action: Some(RecordAction::TogglePause),
    });

    records.push(PresentationRecord::section(
        "Details",
        vec![
            format!("ID: {}", opt_display(sensor.id)),
            format!("Name: {}", sensor.name),
            format!("Vendor: {}", sensor.vendor),
            format!("Type: {}", sensor.type_code),
            format!("Version: {}", sensor.version),
        ],
    ));

    let unit = SensorKind::from_type_code(sensor.type_code).unit();
    records.push(PresentationRecord::section(
        "Parameters",
        vec![
            format!(
                "Delay: {}..{}{}",
                sensor.min_delay_us,
                sensor.max_delay_us,
                SiUnit::Time.complete_suffix()
            ),
            format!("Max Range: {}{}", sensor.max_range, unit.complete_suffix()),
            format!("Resolution: {}{}", sensor.resolution, unit.complete_suffix()),
            format!("Power: {}{}", sensor.power_ma, SiUnit::Power.complete_suffix()),
        ],
    ));

    records.push(PresentationRecord::section(
        "Other Information",
        vec![
            format!("Dynamic Sensor: {}", opt_display(sensor.is_dynamic)),
            format!("Wake-Up Sensor: {}", sensor.is_wake_up),
            format!("Reporting Mode: {}", sensor.reporting_mode.label()),
            format!(
                "Highest Direct Report Rate Level: {}",
                opt_display(sensor.highest_direct_report_rate)
            ),
            format!(
                "Additional Info API: {}",
                match sensor.additional_info_supported {
                    Some(true) => "supported",
                    _ => UNSUPPORTED_MARKER,
                }
            ),
        ],
    ));

    records.push(PresentationRecord::section(
        "FIFO",
        vec![
            format!("Max Event Count: {}", sensor.fifo_max_event_count),
            format!("Reserved Event Count: {}", sensor.fifo_reserved_event_count),
        ],
    ));

    let supported = match &sensor.direct_channel_types {
        Some(types) if !types.is_empty() => types
            .iter()
            .map(|t| t.label())
            .collect::<Vec<_>>()
            .join(", "),
        Some(_) => "none".to_string(),
        None => UNSUPPORTED_MARKER.to_string(),
    };
    records.push(PresentationRecord::section(
        "Direct Channel Type",
        vec![format!("Supported: {supported}")],
    ));

    records
}

fn opt_display<T: std::fmt::Display>(value: Option<T>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => UNSUPPORTED_MARKER.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::{HardwareProvider, SyntheticProvider};
    use crate::models::{Accuracy, LiveSensorSample, SampleValue};
    use chrono::Utc;

    fn view_with_sample(paused: bool) -> RelayView {
        RelayView {
            displayed: Some(LiveSensorSample {
                values: vec![SampleValue {
                    label: "Illuminance".into(),
                    value: 320.0,
                    unit_suffix: "lx".into(),
                }],
                accuracy: Accuracy::High,
                timestamp: Utc::now(),
            }),
            paused,
            has_data: true,
        }
    }

    #[test]
    fn list_rows_use_kind_headline_and_name_line() {
        let provider = SyntheticProvider::new();
        let sensors = provider.sensors().unwrap();
        let rows = records(&sensors);
        assert_eq!(rows[0].headline, "Accelerometer");
        assert_eq!(rows[0].data_lines, vec!["Synthetic 3-axis accelerometer"]);
        assert_eq!(rows[3].action, Some(RecordAction::OpenSensor(3)));
    }

    #[test]
    fn detail_has_six_sections_in_order() {
        let provider = SyntheticProvider::new();
        let sensors = provider.sensors().unwrap();
        let details = detail_records(&sensors[0], &RelayView::default());
        let headlines: Vec<&str> = details.iter().map(|r| r.headline.as_str()).collect();
        assert_eq!(
            headlines,
            vec![
                "Real-Time Data",
                "Details",
                "Parameters",
                "Other Information",
                "FIFO",
                "Direct Channel Type"
            ]
        );
    }

    #[test]
    fn empty_view_shows_placeholder_and_waiting_icon() {
        let provider = SyntheticProvider::new();
        let sensors = provider.sensors().unwrap();
        let details = detail_records(&sensors[0], &RelayView::default());
        assert_eq!(details[0].data_lines, vec!["No data available"]);
        assert_eq!(details[0].icon, Some("…"));
    }

    #[test]
    fn live_icon_tracks_pause_state() {
        let provider = SyntheticProvider::new();
        let sensors = provider.sensors().unwrap();
        assert_eq!(
            detail_records(&sensors[0], &view_with_sample(false))[0].icon,
            Some("▶")
        );
        assert_eq!(
            detail_records(&sensors[0], &view_with_sample(true))[0].icon,
            Some("⏸")
        );
    }

    #[test]
    fn capability_gaps_render_unsupported() {
        let provider = HostSensor::descriptor();
        let details = detail_records(&provider, &RelayView::default());
        let other = &details[3];
        assert!(other.data_lines[0].ends_with("unsupported"));
        assert!(other.data_lines[3].ends_with("unsupported"));
        let direct = &details[5];
        assert_eq!(direct.data_lines, vec!["Supported: unsupported"]);
    }

    #[test]
    fn empty_direct_channel_list_renders_none() {
        let provider = SyntheticProvider::new();
        let sensors = provider.sensors().unwrap();
        // The synthetic gyroscope supports no direct channel kinds.
        let details = detail_records(&sensors[1], &RelayView::default());
        assert_eq!(details[5].data_lines, vec!["Supported: none"]);
    }

    #[test]
    fn parameter_lines_carry_unit_suffixes() {
        let provider = SyntheticProvider::new();
        let sensors = provider.sensors().unwrap();
        let details = detail_records(&sensors[3], &RelayView::default());
        let parameters = &details[2];
        assert_eq!(parameters.data_lines[0], "Delay: 5000..200000μs");
        assert_eq!(parameters.data_lines[1], "Max Range: 1100hPa (mbar)");
        assert_eq!(parameters.data_lines[3], "Power: 0.1mA");
    }

    struct HostSensor;

    impl HostSensor {
        fn descriptor() -> SensorDescriptor {
            use crate::models::ReportingMode;
            SensorDescriptor {
                id: None,
                name: "coretemp Package".into(),
                vendor: "host".into(),
                type_code: kinds::TYPE_AMBIENT_TEMPERATURE,
                string_type: "android.sensor.ambient_temperature".into(),
                version: 1,
                min_delay_us: 0,
                max_delay_us: 0,
                max_range: 150.0,
                resolution: 1.0,
                power_ma: 0.0,
                is_dynamic: None,
                is_wake_up: false,
                reporting_mode: ReportingMode::Continuous,
                highest_direct_report_rate: None,
                additional_info_supported: None,
                fifo_max_event_count: 0,
                fifo_reserved_event_count: 0,
                direct_channel_types: None,
            }
        }
    }
}
