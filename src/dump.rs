//! Non-interactive `--dump` mode: the full inventory as JSON on stdout.

use anyhow::Result;
use serde::Serialize;
use std::io::Write;

use crate::format::{build_sections, KeySection};
use crate::hardware::HardwareProvider;
use crate::models::{CameraDescriptor, SensorDescriptor};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Inventory {
    cameras: Vec<CameraDump>,
    sensors: Vec<SensorDescriptor>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CameraDump {
    #[serde(flatten)]
    descriptor: CameraDescriptor,
    sections: Vec<KeySection>,
}

pub fn write_inventory(provider: &dyn HardwareProvider, out: &mut dyn Write) -> Result<()> {
    let cameras = provider
        .cameras()?
        .into_iter()
        .map(|descriptor| {
            let characteristics = provider.camera_characteristics(&descriptor.id)?;
            Ok(CameraDump {
                descriptor,
                sections: build_sections(&characteristics),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    let inventory = Inventory {
        cameras,
        sensors: provider.sensors()?,
    };
    serde_json::to_writer_pretty(&mut *out, &inventory)?;
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::SyntheticProvider;

    #[test]
    fn inventory_serializes_cameras_and_sensors() {
        let provider = SyntheticProvider::new();
        let mut buffer = Vec::new();
        write_inventory(&provider, &mut buffer).unwrap();
        let json: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(json["cameras"].as_array().unwrap().len(), 2);
        assert_eq!(json["cameras"][0]["physicalIds"], serde_json::json!(["2", "3"]));
        assert_eq!(json["sensors"].as_array().unwrap().len(), 6);
        assert!(json["cameras"][0]["sections"]
            .as_array()
            .unwrap()
            .iter()
            .any(|section| section["section"] == "Lens"));
    }
}
