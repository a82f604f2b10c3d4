//! Sensor event relay: bridges asynchronous hardware sample events into
//! display state with a user-controllable pause gate.
//!
//! Samplers produce [`TaggedEvent`]s onto an unbounded channel; a single
//! consumer task applies them to a [`SensorRelay`] and publishes the resulting
//! [`RelayView`] over a watch channel the renderer reads each frame. The
//! state machine itself is synchronous so the pause semantics are testable
//! without a runtime.

mod controller;

pub use controller::RelayController;

use chrono::{DateTime, Utc};
use tokio::sync::{mpsc, watch};
use tokio_util::sync::CancellationToken;

use crate::models::{Accuracy, LiveSensorSample, SampleValue, SensorDescriptor};
use crate::sensors::kinds::SensorKind;

const ENABLE_LOGS: bool = true;

use crate::log_info;

/// One event from a sampler.
#[derive(Debug, Clone, PartialEq)]
pub enum SensorEvent {
    Reading {
        values: Vec<f64>,
        accuracy: Accuracy,
        timestamp: DateTime<Utc>,
    },
    AccuracyChanged(Accuracy),
}

/// A sensor event tagged with the slot of the sensor that produced it, so the
/// consumer can ignore events for sensors not currently being viewed.
#[derive(Debug, Clone, PartialEq)]
pub struct TaggedEvent {
    pub slot: usize,
    pub event: SensorEvent,
}

/// Commands from the UI to the relay consumer.
#[derive(Debug, Clone)]
pub enum RelayCommand {
    /// A sensor detail session begins: reset buffers, start paused.
    Select {
        slot: usize,
        sensor: Box<SensorDescriptor>,
    },
    TogglePause,
    /// Leaving the detail screen; drop the selection.
    Clear,
}

/// Snapshot of relay state published to the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct RelayView {
    pub displayed: Option<LiveSensorSample>,
    pub paused: bool,
    pub has_data: bool,
}

impl Default for RelayView {
    fn default() -> Self {
        Self {
            displayed: None,
            paused: true,
            has_data: false,
        }
    }
}

/// The pause-gated sample buffer pair.
///
/// `current` always tracks the latest event for the selected sensor;
/// `displayed` follows it exactly while unpaused and freezes while paused.
#[derive(Debug)]
pub struct SensorRelay {
    selected: Option<(usize, SensorDescriptor)>,
    current: Option<LiveSensorSample>,
    displayed: Option<LiveSensorSample>,
    paused: bool,
}

impl Default for SensorRelay {
    fn default() -> Self {
        Self::new()
    }
}

impl SensorRelay {
    pub fn new() -> Self {
        Self {
            selected: None,
            current: None,
            displayed: None,
            paused: true,
        }
    }

    /// Begin a detail session for one sensor. Buffers reset and updates start
    /// paused until the user opts in.
    pub fn select(&mut self, slot: usize, sensor: SensorDescriptor) {
        self.selected = Some((slot, sensor));
        self.current = None;
        self.displayed = None;
        self.paused = true;
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.current = None;
        self.displayed = None;
        self.paused = true;
    }

    /// Apply one hardware event. Events for other slots are ignored; an
    /// accuracy change before any reading has arrived has nothing to update.
    pub fn apply(&mut self, event: TaggedEvent) {
        let Some((slot, sensor)) = &self.selected else {
            return;
        };
        if event.slot != *slot {
            return;
        }
        match event.event {
            SensorEvent::Reading {
                values,
                accuracy,
                timestamp,
            } => {
                self.current = Some(build_sample(sensor, &values, accuracy, timestamp));
            }
            SensorEvent::AccuracyChanged(accuracy) => match &mut self.current {
                Some(current) => current.accuracy = accuracy,
                None => return,
            },
        }
        if !self.paused {
            self.displayed = self.current.clone();
        }
    }

    /// Flip the pause gate. A no-op until the first reading arrives; on
    /// unpausing, snap to the latest reading instead of waiting for the next
    /// event.
    pub fn toggle_pause(&mut self) {
        if self.current.is_none() {
            return;
        }
        self.paused = !self.paused;
        if !self.paused {
            self.displayed = self.current.clone();
        }
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn current(&self) -> Option<&LiveSensorSample> {
        self.current.as_ref()
    }

    pub fn displayed(&self) -> Option<&LiveSensorSample> {
        self.displayed.as_ref()
    }

    pub fn view(&self) -> RelayView {
        RelayView {
            displayed: self.displayed.clone(),
            paused: self.paused,
            has_data: self.current.is_some(),
        }
    }
}

/// Pair raw axis values with the sensor kind's labels and unit; axes beyond
/// the known labels fall back to `Data [i]` with no unit.
fn build_sample(
    sensor: &SensorDescriptor,
    values: &[f64],
    accuracy: Accuracy,
    timestamp: DateTime<Utc>,
) -> LiveSensorSample {
    let kind = SensorKind::from_type_code(sensor.type_code);
    let labels = kind.axis_labels();
    let values = values
        .iter()
        .enumerate()
        .map(|(index, &value)| match labels.get(index) {
            Some(label) => SampleValue {
                label: (*label).to_string(),
                value,
                unit_suffix: kind.unit().complete_suffix(),
            },
            None => SampleValue {
                label: format!("Data [{index}]"),
                value,
                unit_suffix: String::new(),
            },
        })
        .collect();
    LiveSensorSample {
        values,
        accuracy,
        timestamp,
    }
}

/// Consumer loop: single owner of the relay state machine.
pub async fn relay_loop(
    mut events: mpsc::UnboundedReceiver<TaggedEvent>,
    mut commands: mpsc::UnboundedReceiver<RelayCommand>,
    view_tx: watch::Sender<RelayView>,
    cancel: CancellationToken,
) {
    let mut relay = SensorRelay::new();
    loop {
        tokio::select! {
            Some(event) = events.recv() => {
                relay.apply(event);
                let _ = view_tx.send(relay.view());
            }
            Some(command) = commands.recv() => {
                match command {
                    RelayCommand::Select { slot, sensor } => relay.select(slot, *sensor),
                    RelayCommand::TogglePause => relay.toggle_pause(),
                    RelayCommand::Clear => relay.clear(),
                }
                let _ = view_tx.send(relay.view());
            }
            _ = cancel.cancelled() => {
                log_info!("sensor relay shutting down");
                break;
            }
            else => break,
        }
    }
}
