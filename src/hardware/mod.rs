//! Hardware query adapter: the seam between platform introspection and the
//! rest of the app.
//!
//! Everything above this module consumes [`CameraDescriptor`]s,
//! [`SensorDescriptor`]s and [`Characteristic`]s; where those come from is a
//! provider concern. `HostProvider` reads the running machine through sysinfo
//! and `/dev`, `SyntheticProvider` is a deterministic simulated device used by
//! `--synthetic` and the tests.

pub mod host;
pub mod synthetic;
mod value;

pub use host::HostProvider;
pub use synthetic::SyntheticProvider;
pub use value::{Characteristic, CharacteristicValue, RangeValue, RectValue};

use anyhow::Result;
use std::future::Future;
use std::pin::Pin;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::models::{CameraDescriptor, SensorDescriptor};
use crate::relay::TaggedEvent;

/// Future driving one sensor's sampling loop until its token is cancelled.
pub type SamplerFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Platform hardware introspection. Implementations are queried fresh on each
/// screen visit; nothing is cached here.
pub trait HardwareProvider: Send + Sync {
    fn cameras(&self) -> Result<Vec<CameraDescriptor>>;

    fn camera_characteristics(&self, camera_id: &str) -> Result<Vec<Characteristic>>;

    fn sensors(&self) -> Result<Vec<SensorDescriptor>>;

    /// Build the sampling loop for one sensor. Events are tagged with `slot`
    /// (the sensor's index in the current list) so the relay can filter for
    /// the sensor being viewed.
    fn sampler(
        &self,
        slot: usize,
        sensor: &SensorDescriptor,
        tx: mpsc::UnboundedSender<TaggedEvent>,
        cancel: CancellationToken,
    ) -> SamplerFuture;
}
