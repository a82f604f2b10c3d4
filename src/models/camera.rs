use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Which way a camera points. `Unknown` covers facings the platform reports
/// that we do not recognize.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum CameraFacing {
    Front,
    Back,
    External,
    Unknown,
}

impl CameraFacing {
    pub fn headline_prefix(&self) -> &'static str {
        match self {
            CameraFacing::Front => "Front Camera",
            CameraFacing::Back => "Back Camera",
            CameraFacing::External => "External Camera",
            CameraFacing::Unknown => "Unknown Camera",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            CameraFacing::Front => "◉",
            CameraFacing::Back => "▣",
            CameraFacing::External => "⊕",
            CameraFacing::Unknown => "◌",
        }
    }
}

/// One enumerated camera. Recomputed on every list visit, never persisted.
///
/// A camera is *logical* when it aggregates physical camera ids; the ids are
/// kept sorted so the rendered `Physical IDs` line is stable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CameraDescriptor {
    pub id: String,
    pub facing: CameraFacing,
    pub physical_ids: BTreeSet<String>,
}

impl CameraDescriptor {
    pub fn is_logical(&self) -> bool {
        !self.physical_ids.is_empty()
    }

    pub fn type_label(&self) -> &'static str {
        if self.is_logical() {
            "logical"
        } else {
            "physical"
        }
    }

    pub fn headline(&self) -> String {
        format!("{} {}", self.facing.headline_prefix(), self.id)
    }
}
