use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::Backend;
use ratatui::widgets::ListState;
use ratatui::Terminal;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Handle;

use crate::hardware::HardwareProvider;
use crate::models::{PresentationRecord, RecordAction};
use crate::relay::RelayController;
use crate::{cameras, sensors};

use super::router::{Route, Session};
use super::{input, render};

const ENABLE_LOGS: bool = true;

use crate::{log_error, log_info};

const POLL_INTERVAL_MS: u64 = 100;

pub struct App {
    pub provider: Arc<dyn HardwareProvider>,
    runtime: Handle,
    pub relay: RelayController,
    pub route: Route,
    pub session: Session,
    pub camera_count: usize,
    pub sensor_count: usize,
    pub records: Vec<PresentationRecord>,
    pub list_state: ListState,
    /// Set when a hardware query fails; shown in the status bar instead of
    /// tearing the screen down.
    pub status_error: Option<String>,
    sensors_cache: Vec<crate::models::SensorDescriptor>,
    should_quit: bool,
}

impl App {
    pub fn new(provider: Arc<dyn HardwareProvider>, runtime: Handle) -> Self {
        let relay = RelayController::new(runtime.clone());
        let mut app = Self {
            provider,
            runtime,
            relay,
            route: Route::Overview,
            session: Session::default(),
            camera_count: 0,
            sensor_count: 0,
            records: Vec::new(),
            list_state: ListState::default(),
            status_error: None,
            sensors_cache: Vec::new(),
            should_quit: false,
        };
        app.navigate(Route::Overview);
        app
    }

    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        while !self.should_quit {
            if self.route == Route::SensorDetail {
                self.refresh_sensor_detail();
            }
            terminal.draw(|frame| render::draw(frame, self))?;
            if event::poll(Duration::from_millis(POLL_INTERVAL_MS))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        input::handle_key(self, key);
                    }
                }
            }
        }
        Ok(())
    }

    /// Move to a screen and recompute its records from live queries. Entering
    /// the sensor list is the single point where samplers are re-registered.
    pub fn navigate(&mut self, route: Route) {
        self.status_error = None;
        match route {
            Route::Overview => {
                self.camera_count = self.query(|p| Ok(p.cameras()?.len())).unwrap_or(0);
                self.sensor_count = self.query(|p| Ok(p.sensors()?.len())).unwrap_or(0);
                self.records = Vec::new();
            }
            Route::Cameras => {
                let cameras = self.query(|p| p.cameras()).unwrap_or_default();
                self.records = cameras::records(&cameras);
            }
            Route::CameraDetail => {
                let selected = self.session.selected_camera.clone();
                self.records = match selected {
                    Some(id) => {
                        let characteristics =
                            self.query(|p| p.camera_characteristics(&id)).unwrap_or_default();
                        cameras::detail_records(&characteristics)
                    }
                    // No selection renders nothing rather than failing.
                    None => Vec::new(),
                };
            }
            Route::Sensors => {
                self.sensors_cache = self.query(|p| p.sensors()).unwrap_or_default();
                self.relay.clear_selection();
                let provider = Arc::clone(&self.provider);
                self.relay
                    .register_samplers(provider.as_ref(), &self.sensors_cache);
                self.records = sensors::records(&self.sensors_cache);
            }
            Route::SensorDetail => {
                if let Some(slot) = self.session.selected_sensor {
                    if let Some(sensor) = self.sensors_cache.get(slot) {
                        self.relay.select(slot, sensor.clone());
                    }
                }
                self.refresh_sensor_detail();
            }
        }
        self.route = route;
        self.list_state = ListState::default();
        if !self.records.is_empty() {
            self.list_state.select(Some(0));
        }
        log_info!("navigated to {:?}", route);
    }

    fn refresh_sensor_detail(&mut self) {
        let Some(sensor) = self
            .session
            .selected_sensor
            .and_then(|slot| self.sensors_cache.get(slot))
        else {
            self.records = Vec::new();
            return;
        };
        let view = self.relay.view();
        let selected = self.list_state.selected();
        self.records = sensors::detail_records(sensor, &view);
        // Keep the cursor where it was across live refreshes.
        if let Some(index) = selected {
            self.list_state.select(Some(index.min(self.records.len().saturating_sub(1))));
        }
    }

    fn query<T>(&mut self, f: impl FnOnce(&dyn HardwareProvider) -> Result<T>) -> Option<T> {
        match f(self.provider.as_ref()) {
            Ok(value) => Some(value),
            Err(err) => {
                log_error!("hardware query failed: {err:?}");
                self.status_error = Some(err.to_string());
                None
            }
        }
    }

    pub fn back(&mut self) {
        if self.route == Route::SensorDetail {
            self.relay.clear_selection();
        }
        if let Some(parent) = self.route.parent() {
            self.navigate(parent);
        }
    }

    pub fn move_cursor(&mut self, delta: i64) {
        if self.records.is_empty() {
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as i64;
        let last = self.records.len() as i64 - 1;
        let next = (current + delta).clamp(0, last);
        self.list_state.select(Some(next as usize));
    }

    pub fn activate_selected(&mut self) {
        let Some(record) = self
            .list_state
            .selected()
            .and_then(|index| self.records.get(index))
        else {
            return;
        };
        match record.action.clone() {
            Some(RecordAction::OpenCamera(id)) => {
                self.session.selected_camera = Some(id);
                self.navigate(Route::CameraDetail);
            }
            Some(RecordAction::OpenSensor(slot)) => {
                self.session.selected_sensor = Some(slot);
                self.navigate(Route::SensorDetail);
            }
            Some(RecordAction::TogglePause) => self.relay.toggle_pause(),
            None => {}
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.route == Route::SensorDetail {
            self.relay.toggle_pause();
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Tear down relay and sampler tasks; called after the terminal is
    /// restored.
    pub fn shutdown(&mut self) {
        let result = self.runtime.block_on(self.relay.shutdown());
        if let Err(err) = result {
            log_error!("relay shutdown failed: {err:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::SyntheticProvider;

    fn app(runtime: &tokio::runtime::Runtime) -> App {
        App::new(Arc::new(SyntheticProvider::new()), runtime.handle().clone())
    }

    #[test]
    fn overview_counts_both_categories() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = app(&runtime);
        app.navigate(Route::Overview);
        assert_eq!(app.camera_count, 2);
        assert_eq!(app.sensor_count, 6);
        app.shutdown();
    }

    #[test]
    fn activating_a_camera_row_opens_its_detail() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = app(&runtime);
        app.navigate(Route::Cameras);
        assert_eq!(app.records.len(), 2);
        app.activate_selected();
        assert_eq!(app.route, Route::CameraDetail);
        assert_eq!(app.session.selected_camera.as_deref(), Some("0"));
        assert!(!app.records.is_empty());
        app.shutdown();
    }

    #[test]
    fn back_walks_up_to_overview() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = app(&runtime);
        app.navigate(Route::Sensors);
        app.session.selected_sensor = Some(0);
        app.navigate(Route::SensorDetail);
        app.back();
        assert_eq!(app.route, Route::Sensors);
        app.back();
        assert_eq!(app.route, Route::Overview);
        app.shutdown();
    }

    #[test]
    fn cursor_clamps_to_record_range() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = app(&runtime);
        app.navigate(Route::Cameras);
        app.move_cursor(10);
        assert_eq!(app.list_state.selected(), Some(1));
        app.move_cursor(-10);
        assert_eq!(app.list_state.selected(), Some(0));
        app.shutdown();
    }

    #[test]
    fn sensor_detail_renders_six_sections_without_samples() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut app = app(&runtime);
        app.navigate(Route::Sensors);
        app.session.selected_sensor = Some(2);
        app.navigate(Route::SensorDetail);
        assert_eq!(app.records.len(), 6);
        assert_eq!(app.records[0].headline, "Real-Time Data");
        app.shutdown();
    }
}
