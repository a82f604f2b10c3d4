/// The five named screens. Selection state travels in [`Session`], never in
/// the route itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Overview,
    Cameras,
    CameraDetail,
    Sensors,
    SensorDetail,
}

impl Route {
    pub fn title(&self) -> &'static str {
        match self {
            Route::Overview => "Overview",
            Route::Cameras => "Cameras",
            Route::CameraDetail => "Camera Detail",
            Route::Sensors => "Sensors",
            Route::SensorDetail => "Sensor Detail",
        }
    }

    /// Where Esc/Backspace goes from this screen.
    pub fn parent(&self) -> Option<Route> {
        match self {
            Route::Overview => None,
            Route::Cameras | Route::Sensors => Some(Route::Overview),
            Route::CameraDetail => Some(Route::Cameras),
            Route::SensorDetail => Some(Route::Sensors),
        }
    }
}

/// Per-session view model owned by the navigation layer; replaces the
/// cross-screen mutable globals of observer-style designs.
#[derive(Debug, Default)]
pub struct Session {
    pub selected_camera: Option<String>,
    pub selected_sensor: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_screens_back_out_to_their_lists() {
        assert_eq!(Route::CameraDetail.parent(), Some(Route::Cameras));
        assert_eq!(Route::SensorDetail.parent(), Some(Route::Sensors));
        assert_eq!(Route::Overview.parent(), None);
    }
}
