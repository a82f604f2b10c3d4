//! Host-machine provider: thermal components and load channels through
//! sysinfo, video capture devices through `/dev`.

use anyhow::Result;
use chrono::Utc;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;
use sysinfo::{Components, System};
use tokio::sync::mpsc;
use tokio::time::{Duration, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::models::{
    Accuracy, CameraDescriptor, CameraFacing, ReportingMode, SensorDescriptor,
};
use crate::relay::{SensorEvent, TaggedEvent};
use crate::sensors::kinds::TYPE_AMBIENT_TEMPERATURE;

use super::{Characteristic, CharacteristicValue, HardwareProvider, SamplerFuture};

const ENABLE_LOGS: bool = true;

use crate::log_warn;

const SAMPLE_INTERVAL_MS: u64 = 500;

// Host-only channels outside the platform type-code space; they render
// through the generic fallback kind.
pub const HOST_TYPE_MEMORY_LOAD: i32 = 0x1_0000;
pub const HOST_TYPE_CPU_LOAD: i32 = 0x1_0001;

pub struct HostProvider;

impl HostProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HostProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl HardwareProvider for HostProvider {
    fn cameras(&self) -> Result<Vec<CameraDescriptor>> {
        let mut cameras = Vec::new();
        let entries = match fs::read_dir("/dev") {
            Ok(entries) => entries,
            // No /dev on this platform; an empty list, not an error.
            Err(_) => return Ok(cameras),
        };
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().into_owned();
            if let Some(index) = name.strip_prefix("video") {
                if !index.is_empty() && index.chars().all(|c| c.is_ascii_digit()) {
                    cameras.push(CameraDescriptor {
                        id: index.to_string(),
                        facing: CameraFacing::External,
                        physical_ids: BTreeSet::new(),
                    });
                }
            }
        }
        cameras.sort_by_key(|camera| camera.id.parse::<u32>().unwrap_or(u32::MAX));
        Ok(cameras)
    }

    fn camera_characteristics(&self, camera_id: &str) -> Result<Vec<Characteristic>> {
        let sys_name = Path::new("/sys/class/video4linux")
            .join(format!("video{camera_id}"))
            .join("name");
        let device_name = match fs::read_to_string(&sys_name) {
            Ok(name) => CharacteristicValue::Str(name.trim().to_string()),
            Err(_) => CharacteristicValue::Unsupported,
        };
        Ok(vec![
            Characteristic::new("android.info.deviceName", device_name),
            Characteristic::new(
                "android.info.devicePath",
                CharacteristicValue::Str(format!("/dev/video{camera_id}")),
            ),
            Characteristic::new(
                "android.info.index",
                CharacteristicValue::Int(camera_id.parse::<i64>().unwrap_or(-1)),
            ),
        ])
    }

    fn sensors(&self) -> Result<Vec<SensorDescriptor>> {
        let components = Components::new_with_refreshed_list();
        let mut sensors: Vec<SensorDescriptor> = components
            .iter()
            .enumerate()
            .map(|(index, component)| SensorDescriptor {
                id: Some(index as i32),
                name: component.label().to_string(),
                vendor: "host".to_string(),
                type_code: TYPE_AMBIENT_TEMPERATURE,
                string_type: "android.sensor.ambient_temperature".to_string(),
                version: 1,
                min_delay_us: (SAMPLE_INTERVAL_MS * 1000) as i32,
                max_delay_us: (SAMPLE_INTERVAL_MS * 1000) as i32,
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
            })
            .collect();

        let next_id = sensors.len() as i32;
        sensors.push(host_channel(
            next_id,
            "Memory load",
            HOST_TYPE_MEMORY_LOAD,
            "android.sensor.memory_load",
        ));
        sensors.push(host_channel(
            next_id + 1,
            "CPU load",
            HOST_TYPE_CPU_LOAD,
            "android.sensor.cpu_load",
        ));
        Ok(sensors)
    }

    fn sampler(
        &self,
        slot: usize,
        sensor: &SensorDescriptor,
        tx: mpsc::UnboundedSender<TaggedEvent>,
        cancel: CancellationToken,
    ) -> SamplerFuture {
        let type_code = sensor.type_code;
        let label = sensor.name.clone();
        Box::pin(async move {
            let mut ticker = tokio::time::interval(Duration::from_millis(SAMPLE_INTERVAL_MS));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut source = HostSource::new(type_code);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        match source.read(&label) {
                            Some(value) => {
                                let event = SensorEvent::Reading {
                                    values: vec![value],
                                    accuracy: Accuracy::High,
                                    timestamp: Utc::now(),
                                };
                                if tx.send(TaggedEvent { slot, event }).is_err() {
                                    break;
                                }
                            }
                            None => {
                                log_warn!("host sensor {label} produced no reading");
                            }
                        }
                    }
                    _ = cancel.cancelled() => break,
                }
            }
        })
    }
}

fn host_channel(id: i32, name: &str, type_code: i32, string_type: &str) -> SensorDescriptor {
    SensorDescriptor {
        id: Some(id),
        name: name.to_string(),
        vendor: "host".to_string(),
        type_code,
        string_type: string_type.to_string(),
        version: 1,
        min_delay_us: (SAMPLE_INTERVAL_MS * 1000) as i32,
        max_delay_us: (SAMPLE_INTERVAL_MS * 1000) as i32,
        max_range: 100.0,
        resolution: 0.1,
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

/// Per-sampler handle onto the sysinfo refresh APIs.
enum HostSource {
    Thermal(Components),
    Memory(System),
    Cpu(System),
}

impl HostSource {
    fn new(type_code: i32) -> Self {
        match type_code {
            HOST_TYPE_MEMORY_LOAD => HostSource::Memory(System::new()),
            HOST_TYPE_CPU_LOAD => HostSource::Cpu(System::new()),
            _ => HostSource::Thermal(Components::new_with_refreshed_list()),
        }
    }

    fn read(&mut self, label: &str) -> Option<f64> {
        match self {
            HostSource::Thermal(components) => {
                for component in components.list_mut() {
                    if component.label() == label {
                        component.refresh();
                        return Some(component.temperature() as f64);
                    }
                }
                None
            }
            HostSource::Memory(system) => {
                system.refresh_memory();
                let total = system.total_memory();
                if total == 0 {
                    return None;
                }
                Some(system.used_memory() as f64 / total as f64 * 100.0)
            }
            HostSource::Cpu(system) => {
                system.refresh_cpu_usage();
                Some(system.global_cpu_usage() as f64)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_sensor_list_ends_with_load_channels() {
        let provider = HostProvider::new();
        let sensors = provider.sensors().unwrap();
        assert!(sensors.len() >= 2);
        let tail: Vec<i32> = sensors
            .iter()
            .rev()
            .take(2)
            .map(|s| s.type_code)
            .collect();
        assert!(tail.contains(&HOST_TYPE_MEMORY_LOAD));
        assert!(tail.contains(&HOST_TYPE_CPU_LOAD));
    }

    #[test]
    fn load_channels_use_generic_kind_labels() {
        let sensor = host_channel(0, "Memory load", HOST_TYPE_MEMORY_LOAD, "android.sensor.memory_load");
        assert_eq!(sensor.kind_label(), "Memory Load");
    }

    #[test]
    fn characteristics_cover_missing_sysfs_gracefully() {
        let provider = HostProvider::new();
        let characteristics = provider.camera_characteristics("99").unwrap();
        assert_eq!(characteristics.len(), 3);
        assert_eq!(characteristics[0].key, "android.info.deviceName");
    }
}
