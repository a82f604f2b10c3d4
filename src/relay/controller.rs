use anyhow::{Context, Result};
use tokio::runtime::Handle;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::hardware::HardwareProvider;
use crate::models::SensorDescriptor;

use super::{relay_loop, RelayCommand, RelayView, TaggedEvent};

const ENABLE_LOGS: bool = true;

use crate::log_info;

/// Owns the relay consumer task and the per-visit sampler tasks.
///
/// Sampler registration follows the screen lifecycle: entering the sensor
/// list cancels every previously registered sampler and spawns fresh ones, so
/// a sensor never has two live sampling loops delivering duplicate events.
pub struct RelayController {
    runtime: Handle,
    event_tx: mpsc::UnboundedSender<TaggedEvent>,
    cmd_tx: mpsc::UnboundedSender<RelayCommand>,
    view_rx: watch::Receiver<RelayView>,
    relay_handle: Option<JoinHandle<()>>,
    relay_cancel: CancellationToken,
    sampler_handles: Vec<JoinHandle<()>>,
    sampler_cancel: Option<CancellationToken>,
}

impl RelayController {
    pub fn new(runtime: Handle) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (view_tx, view_rx) = watch::channel(RelayView::default());
        let relay_cancel = CancellationToken::new();
        let relay_handle =
            runtime.spawn(relay_loop(event_rx, cmd_rx, view_tx, relay_cancel.clone()));
        Self {
            runtime,
            event_tx,
            cmd_tx,
            view_rx,
            relay_handle: Some(relay_handle),
            relay_cancel,
            sampler_handles: Vec::new(),
            sampler_cancel: None,
        }
    }

    /// Replace all registered samplers with fresh ones for the given sensor
    /// list. Called once per sensor-list visit.
    pub fn register_samplers(
        &mut self,
        provider: &dyn HardwareProvider,
        sensors: &[SensorDescriptor],
    ) {
        self.stop_samplers();
        let cancel = CancellationToken::new();
        for (slot, sensor) in sensors.iter().enumerate() {
            let fut = provider.sampler(slot, sensor, self.event_tx.clone(), cancel.child_token());
            self.sampler_handles.push(self.runtime.spawn(fut));
        }
        self.sampler_cancel = Some(cancel);
        log_info!("registered {} sensor samplers", sensors.len());
    }

    fn stop_samplers(&mut self) {
        if let Some(cancel) = self.sampler_cancel.take() {
            cancel.cancel();
        }
        // Cancelled tasks exit on their next tick; nothing to wait on.
        self.sampler_handles.clear();
    }

    pub fn select(&self, slot: usize, sensor: SensorDescriptor) {
        let _ = self.cmd_tx.send(RelayCommand::Select {
            slot,
            sensor: Box::new(sensor),
        });
    }

    pub fn toggle_pause(&self) {
        let _ = self.cmd_tx.send(RelayCommand::TogglePause);
    }

    pub fn clear_selection(&self) {
        let _ = self.cmd_tx.send(RelayCommand::Clear);
    }

    /// Latest published relay state.
    pub fn view(&self) -> RelayView {
        self.view_rx.borrow().clone()
    }

    /// Cancel everything and join the consumer task.
    pub async fn shutdown(&mut self) -> Result<()> {
        self.stop_samplers();
        self.relay_cancel.cancel();
        if let Some(handle) = self.relay_handle.take() {
            handle.await.context("relay task failed to join")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::SyntheticProvider;
    use crate::models::Accuracy;
    use crate::relay::SensorEvent;
    use chrono::Utc;
    use std::time::Duration;

    async fn wait_for<F>(controller: &mut RelayController, mut predicate: F) -> RelayView
    where
        F: FnMut(&RelayView) -> bool,
    {
        tokio::time::timeout(Duration::from_secs(5), async {
            loop {
                {
                    let view = controller.view_rx.borrow();
                    if predicate(&view) {
                        return view.clone();
                    }
                }
                controller
                    .view_rx
                    .changed()
                    .await
                    .expect("relay view channel closed");
            }
        })
        .await
        .expect("relay view never matched")
    }

    #[tokio::test]
    async fn relay_task_applies_pause_gate_end_to_end() {
        let mut controller = RelayController::new(Handle::current());
        let provider = SyntheticProvider::new();
        let sensors = provider.sensors().unwrap();

        controller.select(0, sensors[0].clone());
        let event_tx = controller.event_tx.clone();
        event_tx
            .send(TaggedEvent {
                slot: 0,
                event: SensorEvent::Reading {
                    values: vec![1.0, 2.0, 3.0],
                    accuracy: Accuracy::High,
                    timestamp: Utc::now(),
                },
            })
            .unwrap();

        // Paused by default: data arrives but nothing is displayed.
        let view = wait_for(&mut controller, |v| v.has_data).await;
        assert!(view.paused);
        assert!(view.displayed.is_none());

        controller.toggle_pause();
        let view = wait_for(&mut controller, |v| !v.paused).await;
        assert_eq!(view.displayed.unwrap().values[0].value, 1.0);

        controller.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn reregistering_samplers_replaces_previous_set() {
        let mut controller = RelayController::new(Handle::current());
        let provider = SyntheticProvider::new();
        let sensors = provider.sensors().unwrap();

        controller.register_samplers(&provider, &sensors);
        let first_cancel = controller.sampler_cancel.clone().unwrap();
        controller.register_samplers(&provider, &sensors);
        assert!(first_cancel.is_cancelled());
        assert_eq!(controller.sampler_handles.len(), sensors.len());

        controller.shutdown().await.unwrap();
    }
}
