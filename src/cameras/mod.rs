//! Camera presentation builders: list rows and per-section detail records.

use crate::format::build_sections;
use crate::hardware::Characteristic;
use crate::models::{CameraDescriptor, PresentationRecord, RecordAction};

/// One list row per camera: type line always, physical-ids line only for
/// logical cameras.
pub fn records(cameras: &[CameraDescriptor]) -> Vec<PresentationRecord> {
    cameras
        .iter()
        .map(|camera| {
            let mut data_lines = vec![format!("Type: {}", camera.type_label())];
            if camera.is_logical() {
                let ids: Vec<&str> = camera.physical_ids.iter().map(String::as_str).collect();
                data_lines.push(format!("Physical IDs: {}", ids.join(", ")));
            }
            PresentationRecord {
                headline: camera.headline(),
                icon: Some(camera.facing.glyph()),
                data_lines,
                action: Some(RecordAction::OpenCamera(camera.id.clone())),
            }
        })
        .collect()
}

/// One detail record per formatted key section.
pub fn detail_records(characteristics: &[Characteristic]) -> Vec<PresentationRecord> {
    build_sections(characteristics)
        .into_iter()
        .map(|section| PresentationRecord::section(section.section, section.entries))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::{CharacteristicValue, HardwareProvider, SyntheticProvider};
    use crate::models::CameraFacing;
    use std::collections::BTreeSet;

    #[test]
    fn logical_camera_row_lists_physical_ids_and_physical_does_not() {
        let cameras = vec![
            CameraDescriptor {
                id: "0".into(),
                facing: CameraFacing::Back,
                physical_ids: BTreeSet::from(["2".to_string(), "3".to_string()]),
            },
            CameraDescriptor {
                id: "1".into(),
                facing: CameraFacing::Front,
                physical_ids: BTreeSet::new(),
            },
        ];
        let rows = records(&cameras);
        assert_eq!(rows[0].data_lines[0], "Type: logical");
        assert_eq!(rows[0].data_lines[1], "Physical IDs: 2, 3");
        assert_eq!(rows[1].data_lines, vec!["Type: physical"]);
        assert!(!rows[1].data_lines.iter().any(|l| l.contains("Physical IDs")));
    }

    #[test]
    fn row_action_opens_the_camera() {
        let provider = SyntheticProvider::new();
        let rows = records(&provider.cameras().unwrap());
        assert_eq!(rows[0].action, Some(RecordAction::OpenCamera("0".into())));
    }

    #[test]
    fn detail_records_carry_section_headlines() {
        let characteristics = vec![
            Characteristic::new("android.lens.facing", CharacteristicValue::Int(1)),
            Characteristic::new("android.lens.distortion", CharacteristicValue::Int(0)),
            Characteristic::new("android.sensor.orientation", CharacteristicValue::Int(90)),
        ];
        let details = detail_records(&characteristics);
        assert_eq!(details.len(), 2);
        assert_eq!(details[0].headline, "Lens");
        assert_eq!(details[0].data_lines.len(), 2);
        assert_eq!(details[1].headline, "Sensor");
        assert!(details[1].action.is_none());
    }
}
