/// The single reusable row abstraction: camera rows, sensor rows, and detail
/// sections all render through this.
#[derive(Debug, Clone, PartialEq)]
pub struct PresentationRecord {
    pub headline: String,
    pub icon: Option<&'static str>,
    pub data_lines: Vec<String>,
    pub action: Option<RecordAction>,
}

impl PresentationRecord {
    /// A plain section record with no icon and no action.
    pub fn section(headline: impl Into<String>, data_lines: Vec<String>) -> Self {
        Self {
            headline: headline.into(),
            icon: None,
            data_lines,
            action: None,
        }
    }
}

/// What activating a record does. Carried as data so the renderer stays
/// decoupled from navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordAction {
    OpenCamera(String),
    OpenSensor(usize),
    TogglePause,
}
