//! Simulated device: a fixed camera/sensor inventory with live jittered
//! samples. Backs `--synthetic` and the tests, and doubles as the reference
//! for what a fully featured platform reports.

use anyhow::{bail, Result};
use chrono::Utc;
use rand::Rng;
use std::collections::BTreeSet;
use tokio::sync::mpsc;
use tokio::time::{Duration, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::models::{
    Accuracy, CameraDescriptor, CameraFacing, DirectChannelType, ReportingMode, SensorDescriptor,
};
use crate::relay::{SensorEvent, TaggedEvent};
use crate::sensors::kinds::{
    TYPE_ACCELEROMETER, TYPE_GYROSCOPE, TYPE_HEART_RATE, TYPE_LIGHT, TYPE_PRESSURE,
    TYPE_STEP_COUNTER,
};

use super::{
    Characteristic, CharacteristicValue, HardwareProvider, RangeValue, RectValue, SamplerFuture,
};

const SAMPLE_INTERVAL_MS: u64 = 100;

/// Roughly one accuracy-change event per this many readings.
const ACCURACY_CHANGE_ODDS: u32 = 24;

pub struct SyntheticProvider;

impl SyntheticProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for SyntheticProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl HardwareProvider for SyntheticProvider {
    fn cameras(&self) -> Result<Vec<CameraDescriptor>> {
        Ok(vec![
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
        ])
    }

    fn camera_characteristics(&self, camera_id: &str) -> Result<Vec<Characteristic>> {
        match camera_id {
            "0" => Ok(back_camera_characteristics()),
            "1" => Ok(front_camera_characteristics()),
            other => bail!("unknown camera id {other}"),
        }
    }

    fn sensors(&self) -> Result<Vec<SensorDescriptor>> {
        Ok(vec![
            sensor(
                0,
                "Synthetic 3-axis accelerometer",
                TYPE_ACCELEROMETER,
                "android.sensor.accelerometer",
                39.2,
                0.0012,
                0.23,
            ),
            sensor(
                1,
                "Synthetic gyroscope",
                TYPE_GYROSCOPE,
                "android.sensor.gyroscope",
                34.9,
                0.001,
                0.45,
            ),
            sensor(
                2,
                "Synthetic ambient light",
                TYPE_LIGHT,
                "android.sensor.light",
                60000.0,
                1.0,
                0.05,
            ),
            sensor(
                3,
                "Synthetic barometer",
                TYPE_PRESSURE,
                "android.sensor.pressure",
                1100.0,
                0.005,
                0.1,
            ),
            sensor(
                4,
                "Synthetic step counter",
                TYPE_STEP_COUNTER,
                "android.sensor.step_counter",
                1e6,
                1.0,
                0.0,
            ),
            sensor(
                5,
                "Synthetic heart rate",
                TYPE_HEART_RATE,
                "android.sensor.heart_rate",
                250.0,
                1.0,
                0.8,
            ),
        ])
    }

    fn sampler(
        &self,
        slot: usize,
        sensor: &SensorDescriptor,
        tx: mpsc::UnboundedSender<TaggedEvent>,
        cancel: CancellationToken,
    ) -> SamplerFuture {
        let type_code = sensor.type_code;
        Box::pin(async move {
            let mut ticker = tokio::time::interval(Duration::from_millis(SAMPLE_INTERVAL_MS));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut tick: u64 = 0;
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        tick += 1;
                        let event = next_event(type_code, tick);
                        if tx.send(TaggedEvent { slot, event }).is_err() {
                            break;
                        }
                    }
                    _ = cancel.cancelled() => break,
                }
            }
        })
    }
}

fn next_event(type_code: i32, tick: u64) -> SensorEvent {
    let mut rng = rand::thread_rng();
    if rng.gen_ratio(1, ACCURACY_CHANGE_ODDS) {
        let accuracy = match rng.gen_range(0..3) {
            0 => Accuracy::Medium,
            1 => Accuracy::Low,
            _ => Accuracy::High,
        };
        return SensorEvent::AccuracyChanged(accuracy);
    }
    let mut jitter = |base: f64, spread: f64| base + rng.gen_range(-spread..spread);
    let values = match type_code {
        TYPE_ACCELEROMETER => vec![jitter(0.0, 0.08), jitter(0.0, 0.08), jitter(9.81, 0.05)],
        TYPE_GYROSCOPE => vec![jitter(0.0, 0.02), jitter(0.0, 0.02), jitter(0.0, 0.02)],
        TYPE_LIGHT => vec![jitter(320.0, 25.0)],
        TYPE_PRESSURE => vec![jitter(1013.25, 0.4)],
        TYPE_STEP_COUNTER => vec![(tick / 10) as f64],
        TYPE_HEART_RATE => vec![jitter(72.0, 3.0)],
        _ => vec![jitter(0.0, 1.0)],
    };
    SensorEvent::Reading {
        values,
        accuracy: Accuracy::High,
        timestamp: Utc::now(),
    }
}

fn sensor(
    id: i32,
    name: &str,
    type_code: i32,
    string_type: &str,
    max_range: f32,
    resolution: f32,
    power_ma: f32,
) -> SensorDescriptor {
    SensorDescriptor {
        id: Some(id),
        name: name.to_string(),
        vendor: "Synthetics Inc.".to_string(),
        type_code,
        string_type: string_type.to_string(),
        version: 2,
        min_delay_us: 5000,
        max_delay_us: 200_000,
        max_range,
        resolution,
        power_ma,
        is_dynamic: Some(false),
        is_wake_up: false,
        reporting_mode: if type_code == TYPE_STEP_COUNTER {
            ReportingMode::OnChange
        } else {
            ReportingMode::Continuous
        },
        highest_direct_report_rate: Some(3),
        additional_info_supported: Some(type_code == TYPE_ACCELEROMETER),
        fifo_max_event_count: 3000,
        fifo_reserved_event_count: 300,
        direct_channel_types: if type_code == TYPE_ACCELEROMETER {
            Some(vec![
                DirectChannelType::MemoryFile,
                DirectChannelType::HardwareBuffer,
            ])
        } else {
            Some(Vec::new())
        },
    }
}

fn back_camera_characteristics() -> Vec<Characteristic> {
    vec![
        Characteristic::new(
            "android.colorCorrection.availableAberrationModes",
            CharacteristicValue::IntArray(vec![0, 1, 2]),
        ),
        Characteristic::new(
            "android.control.aeAvailableTargetFpsRanges",
            CharacteristicValue::RangeArray(vec![
                RangeValue::new(15.0, 30.0),
                RangeValue::new(30.0, 30.0),
            ]),
        ),
        Characteristic::new(
            "android.control.aeCompensationRange",
            CharacteristicValue::Range(RangeValue::new(-12.0, 12.0)),
        ),
        Characteristic::new(
            "android.control.availableSceneModes",
            CharacteristicValue::IntArray(vec![0, 1, 3]),
        ),
        Characteristic::new(
            "android.flash.info.available",
            CharacteristicValue::Bool(true),
        ),
        Characteristic::new(
            "android.jpeg.availableThumbnailSizes",
            CharacteristicValue::StrArray(vec!["176x144".into(), "320x240".into()]),
        ),
        Characteristic::new("android.lens.facing", CharacteristicValue::Int(1)),
        Characteristic::new(
            "android.lens.info.availableFocalLengths",
            CharacteristicValue::FloatArray(vec![4.38, 6.9]),
        ),
        Characteristic::new(
            "android.lens.info.availableOpticalStabilization",
            CharacteristicValue::BoolArray(vec![false, true]),
        ),
        Characteristic::new(
            "android.scaler.availableMaxDigitalZoom",
            CharacteristicValue::Float(8.0),
        ),
        Characteristic::new(
            "android.scaler.streamConfigurationMap",
            CharacteristicValue::StreamConfigurations(
                "StreamConfiguration(4000x3000/30fps, 1920x1080/60fps, 1280x720/120fps)".into(),
            ),
        ),
        Characteristic::new(
            "android.scaler.mandatoryStreamCombinations",
            CharacteristicValue::MandatoryStreamCombinations(vec![
                "PRIV 1920x1080 + JPEG maximum".into(),
                "YUV 1280x720 + YUV 1280x720".into(),
            ]),
        ),
        Characteristic::new(
            "android.sensor.blackLevelPattern",
            CharacteristicValue::BlackLevelPattern("BlackLevelPattern([64, 64, 64, 64])".into()),
        ),
        Characteristic::new(
            "android.sensor.info.activeArraySize",
            CharacteristicValue::Rect(RectValue::new(0, 0, 4000, 3000)),
        ),
        Characteristic::new(
            "android.sensor.info.sensitivityRange",
            CharacteristicValue::Range(RangeValue::new(100.0, 3200.0)),
        ),
        Characteristic::new(
            "android.sensor.info.physicalSize",
            CharacteristicValue::Str("5.64x4.23".into()),
        ),
        Characteristic::new("android.sensor.orientation", CharacteristicValue::Int(90)),
        Characteristic::new(
            "android.request.availableCapabilities",
            CharacteristicValue::IntArray(vec![0, 1, 2, 11]),
        ),
        Characteristic::new(
            "android.request.recommendedTenBitDynamicRangeProfile",
            CharacteristicValue::DynamicRangeProfiles(vec![1, 2, 4]),
        ),
        // An unprintable platform object reference; the formatter renders it
        // as "unknown".
        Characteristic::new(
            "android.request.characteristicKeysNeedingPermission",
            CharacteristicValue::Opaque("[I@2f1a9bd".into()),
        ),
        // An object dump well past the display limit; dropped entirely.
        Characteristic::new(
            "android.request.availableRequestKeys",
            CharacteristicValue::Opaque("CaptureRequest.Key(".repeat(32)),
        ),
        Characteristic::new("android.sync.maxLatency", CharacteristicValue::Int(0)),
        Characteristic::new(
            "android.distortionCorrection.availableModes",
            CharacteristicValue::Unsupported,
        ),
    ]
}

fn front_camera_characteristics() -> Vec<Characteristic> {
    vec![
        Characteristic::new("android.lens.facing", CharacteristicValue::Int(0)),
        Characteristic::new(
            "android.lens.info.availableFocalLengths",
            CharacteristicValue::FloatArray(vec![3.3]),
        ),
        Characteristic::new(
            "android.sensor.info.activeArraySize",
            CharacteristicValue::Rect(RectValue::new(0, 0, 3264, 2448)),
        ),
        Characteristic::new(
            "android.sensor.info.sensitivityRange",
            CharacteristicValue::Range(RangeValue::new(100.0, 1600.0)),
        ),
        Characteristic::new("android.flash.info.available", CharacteristicValue::Bool(false)),
        Characteristic::new("android.sync.maxLatency", CharacteristicValue::Int(4)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::build_sections;

    #[test]
    fn inventory_has_one_logical_and_one_physical_camera() {
        let provider = SyntheticProvider::new();
        let cameras = provider.cameras().unwrap();
        assert_eq!(cameras.len(), 2);
        assert!(cameras[0].is_logical());
        assert!(!cameras[1].is_logical());
    }

    #[test]
    fn unknown_camera_id_is_an_error() {
        let provider = SyntheticProvider::new();
        assert!(provider.camera_characteristics("9").is_err());
    }

    #[test]
    fn back_camera_sections_filter_unreadable_values() {
        let provider = SyntheticProvider::new();
        let sections = build_sections(&provider.camera_characteristics("0").unwrap());
        let all_entries: Vec<&String> =
            sections.iter().flat_map(|s| s.entries.iter()).collect();
        // The oversized request-key dump is gone entirely.
        assert!(!all_entries.iter().any(|e| e.contains("CaptureRequest")));
        // The object reference collapsed to the unknown marker.
        assert!(all_entries
            .iter()
            .any(|e| e.as_str() == "Characteristic Keys Needing Permission: unknown"));
        // The capability gap renders as unsupported rather than failing.
        assert!(all_entries
            .iter()
            .any(|e| e.as_str() == "Available Modes: unsupported"));
    }
}
