pub mod camera;
pub mod record;
pub mod sensor;

pub use camera::{CameraDescriptor, CameraFacing};
pub use record::{PresentationRecord, RecordAction};
pub use sensor::{
    Accuracy, DirectChannelType, LiveSensorSample, ReportingMode, SampleValue, SensorDescriptor,
};
