//! Sensor kind metadata: per-axis display labels, SI units and list glyphs,
//! keyed by the platform sensor type code.

// Platform sensor type codes.
pub const TYPE_ACCELEROMETER: i32 = 1;
pub const TYPE_MAGNETIC_FIELD: i32 = 2;
pub const TYPE_ORIENTATION: i32 = 3;
pub const TYPE_GYROSCOPE: i32 = 4;
pub const TYPE_LIGHT: i32 = 5;
pub const TYPE_PRESSURE: i32 = 6;
pub const TYPE_TEMPERATURE: i32 = 7;
pub const TYPE_PROXIMITY: i32 = 8;
pub const TYPE_GRAVITY: i32 = 9;
pub const TYPE_LINEAR_ACCELERATION: i32 = 10;
pub const TYPE_ROTATION_VECTOR: i32 = 11;
pub const TYPE_RELATIVE_HUMIDITY: i32 = 12;
pub const TYPE_AMBIENT_TEMPERATURE: i32 = 13;
pub const TYPE_MAGNETIC_FIELD_UNCALIBRATED: i32 = 14;
pub const TYPE_GAME_ROTATION_VECTOR: i32 = 15;
pub const TYPE_GYROSCOPE_UNCALIBRATED: i32 = 16;
pub const TYPE_SIGNIFICANT_MOTION: i32 = 17;
pub const TYPE_STEP_DETECTOR: i32 = 18;
pub const TYPE_STEP_COUNTER: i32 = 19;
pub const TYPE_GEOMAGNETIC_ROTATION_VECTOR: i32 = 20;
pub const TYPE_HEART_RATE: i32 = 21;
pub const TYPE_HEART_BEAT: i32 = 31;
pub const TYPE_ACCELEROMETER_UNCALIBRATED: i32 = 35;

/// SI unit rendered after a sample value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SiUnit {
    None,
    Acceleration,
    AngularVelocity,
    StepCount,
    MagneticFluxDensity,
    Angle,
    Length,
    Temperature,
    Illuminance,
    Pressure,
    Humidity,
    Confidence,
    HeartRate,
    Time,
    Power,
}

impl SiUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            SiUnit::None => "",
            SiUnit::Acceleration => "m/s²",
            SiUnit::AngularVelocity => "rad/s",
            SiUnit::StepCount => "steps",
            SiUnit::MagneticFluxDensity => "μT",
            SiUnit::Angle => "°",
            SiUnit::Length => "cm",
            SiUnit::Temperature => "°C",
            SiUnit::Illuminance => "lx",
            SiUnit::Pressure => "hPa (mbar)",
            SiUnit::Humidity => "%",
            SiUnit::Confidence => "%",
            SiUnit::HeartRate => "bpm",
            SiUnit::Time => "μs",
            SiUnit::Power => "mA",
        }
    }

    fn delimiter(&self) -> &'static str {
        match self {
            SiUnit::StepCount => " ",
            _ => "",
        }
    }

    /// Delimiter plus symbol, ready to append to a value.
    pub fn complete_suffix(&self) -> String {
        format!("{}{}", self.delimiter(), self.symbol())
    }
}

/// Recognized sensor kinds; anything unrecognized falls back to `Generic`,
/// which labels axes `Data [i]` with no unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorKind {
    Accelerometer,
    AccelerometerUncalibrated,
    Gravity,
    Gyroscope,
    GyroscopeUncalibrated,
    LinearAcceleration,
    RotationVector,
    SignificantMotion,
    StepCounter,
    StepDetector,
    GameRotationVector,
    GeomagneticRotationVector,
    MagneticField,
    MagneticFieldUncalibrated,
    Orientation,
    Proximity,
    AmbientTemperature,
    Light,
    Pressure,
    RelativeHumidity,
    Temperature,
    HeartBeat,
    HeartRate,
    Generic,
}

impl SensorKind {
    pub fn from_type_code(code: i32) -> Self {
        match code {
            TYPE_ACCELEROMETER => SensorKind::Accelerometer,
            TYPE_ACCELEROMETER_UNCALIBRATED => SensorKind::AccelerometerUncalibrated,
            TYPE_GRAVITY => SensorKind::Gravity,
            TYPE_GYROSCOPE => SensorKind::Gyroscope,
            TYPE_GYROSCOPE_UNCALIBRATED => SensorKind::GyroscopeUncalibrated,
            TYPE_LINEAR_ACCELERATION => SensorKind::LinearAcceleration,
            TYPE_ROTATION_VECTOR => SensorKind::RotationVector,
            TYPE_SIGNIFICANT_MOTION => SensorKind::SignificantMotion,
            TYPE_STEP_COUNTER => SensorKind::StepCounter,
            TYPE_STEP_DETECTOR => SensorKind::StepDetector,
            TYPE_GAME_ROTATION_VECTOR => SensorKind::GameRotationVector,
            TYPE_GEOMAGNETIC_ROTATION_VECTOR => SensorKind::GeomagneticRotationVector,
            TYPE_MAGNETIC_FIELD => SensorKind::MagneticField,
            TYPE_MAGNETIC_FIELD_UNCALIBRATED => SensorKind::MagneticFieldUncalibrated,
            TYPE_ORIENTATION => SensorKind::Orientation,
            TYPE_PROXIMITY => SensorKind::Proximity,
            TYPE_AMBIENT_TEMPERATURE => SensorKind::AmbientTemperature,
            TYPE_LIGHT => SensorKind::Light,
            TYPE_PRESSURE => SensorKind::Pressure,
            TYPE_RELATIVE_HUMIDITY => SensorKind::RelativeHumidity,
            TYPE_TEMPERATURE => SensorKind::Temperature,
            TYPE_HEART_BEAT => SensorKind::HeartBeat,
            TYPE_HEART_RATE => SensorKind::HeartRate,
            _ => SensorKind::Generic,
        }
    }

    pub fn axis_labels(&self) -> &'static [&'static str] {
        match self {
            SensorKind::Accelerometer => &[
                "X (incl. gravity)",
                "Y (incl. gravity)",
                "Z (incl. gravity)",
            ],
            SensorKind::AccelerometerUncalibrated => &[
                "X (no bias)",
                "Y (no bias)",
                "Z (no bias)",
                "X Bias",
                "Y Bias",
                "Z Bias",
            ],
            SensorKind::Gravity => &["X Force", "Y Force", "Z Force"],
            SensorKind::Gyroscope => &["X Rate", "Y Rate", "Z Rate"],
            SensorKind::GyroscopeUncalibrated => &[
                "X (no drift)",
                "Y (no drift)",
                "Z (no drift)",
                "X Drift",
                "Y Drift",
                "Z Drift",
            ],
            SensorKind::LinearAcceleration => &[
                "X (excl. gravity)",
                "Y (excl. gravity)",
                "Z (excl. gravity)",
            ],
            SensorKind::RotationVector => &[
                "X * sin(θ/2)",
                "Y * sin(θ/2)",
                "Z * sin(θ/2)",
                "Scalar * cos(θ/2)",
            ],
            SensorKind::GameRotationVector | SensorKind::GeomagneticRotationVector => {
                &["X * sin(θ/2)", "Y * sin(θ/2)", "Z * sin(θ/2)"]
            }
            SensorKind::MagneticField => &["X Strength", "Y Strength", "Z Strength"],
            SensorKind::MagneticFieldUncalibrated => &[
                "X (no iron bias)",
                "Y (no iron bias)",
                "Z (no iron bias)",
                "X Iron Bias",
                "Y Iron Bias",
                "Z Iron Bias",
            ],
            SensorKind::Orientation => &["Azimuth (Z)", "Pitch (X)", "Roll (Y)"],
            SensorKind::Proximity => &["Distance"],
            SensorKind::AmbientTemperature => &["Air Temperature"],
            SensorKind::Light => &["Illuminance"],
            SensorKind::Pressure => &["Pressure"],
            SensorKind::RelativeHumidity => &["Humidity"],
            SensorKind::Temperature => &["Device Temperature"],
            SensorKind::StepCounter => &["Steps since reboot"],
            SensorKind::HeartBeat => &["Heart Beat Confidence"],
            SensorKind::HeartRate => &["Heart Rate"],
            SensorKind::SignificantMotion | SensorKind::StepDetector | SensorKind::Generic => &[],
        }
    }

    pub fn unit(&self) -> SiUnit {
        match self {
            SensorKind::Accelerometer
            | SensorKind::AccelerometerUncalibrated
            | SensorKind::Gravity
            | SensorKind::LinearAcceleration => SiUnit::Acceleration,
            SensorKind::Gyroscope | SensorKind::GyroscopeUncalibrated => SiUnit::AngularVelocity,
            SensorKind::MagneticField | SensorKind::MagneticFieldUncalibrated => {
                SiUnit::MagneticFluxDensity
            }
            SensorKind::Orientation => SiUnit::Angle,
            SensorKind::Proximity => SiUnit::Length,
            SensorKind::AmbientTemperature | SensorKind::Temperature => SiUnit::Temperature,
            SensorKind::Light => SiUnit::Illuminance,
            SensorKind::Pressure => SiUnit::Pressure,
            SensorKind::RelativeHumidity => SiUnit::Humidity,
            SensorKind::StepCounter => SiUnit::StepCount,
            SensorKind::HeartBeat => SiUnit::Confidence,
            SensorKind::HeartRate => SiUnit::HeartRate,
            SensorKind::RotationVector
            | SensorKind::GameRotationVector
            | SensorKind::GeomagneticRotationVector
            | SensorKind::SignificantMotion
            | SensorKind::StepDetector
            | SensorKind::Generic => SiUnit::None,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            SensorKind::Accelerometer | SensorKind::AccelerometerUncalibrated => "⇶",
            SensorKind::Gravity => "⇓",
            SensorKind::Gyroscope | SensorKind::GyroscopeUncalibrated => "⟳",
            SensorKind::LinearAcceleration => "→",
            SensorKind::RotationVector
            | SensorKind::GameRotationVector
            | SensorKind::GeomagneticRotationVector => "↻",
            SensorKind::MagneticField | SensorKind::MagneticFieldUncalibrated => "⌖",
            SensorKind::Orientation => "∠",
            SensorKind::Proximity => "↔",
            SensorKind::AmbientTemperature | SensorKind::Temperature => "℃",
            SensorKind::Light => "☀",
            SensorKind::Pressure => "⇊",
            SensorKind::RelativeHumidity => "☂",
            SensorKind::StepCounter | SensorKind::StepDetector => "⚑",
            SensorKind::HeartBeat | SensorKind::HeartRate => "♥",
            SensorKind::SignificantMotion => "✦",
            SensorKind::Generic => "◦",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_type_codes_fall_back_to_generic() {
        let kind = SensorKind::from_type_code(65536);
        assert_eq!(kind, SensorKind::Generic);
        assert!(kind.axis_labels().is_empty());
        assert_eq!(kind.unit(), SiUnit::None);
    }

    #[test]
    fn step_count_suffix_is_space_delimited() {
        assert_eq!(SiUnit::StepCount.complete_suffix(), " steps");
        assert_eq!(SiUnit::Pressure.complete_suffix(), "hPa (mbar)");
    }
}
