//! Project status labels.
//!
//! The admin dashboard stores human labels ("In Progress"); the persistence
//! layer stores normalized tokens ("InProgress"). Matching is exact.

use serde::{Deserialize, Serialize};

/// Normalized project status token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectStatus {
    Planning,
    InProgress,
    Completed,
    OnHold,
    Archived,
}

impl ProjectStatus {
    pub const ALL: [Self; 5] = [
        Self::Planning,
        Self::InProgress,
        Self::Completed,
        Self::OnHold,
        Self::Archived,
    ];

    /// Human-readable label shown in the dashboard.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Planning => "Planning",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::OnHold => "On Hold",
            Self::Archived => "Archived",
        }
    }

    /// Normalized token stored by the persistence layer.
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Planning => "Planning",
            Self::InProgress => "InProgress",
            Self::Completed => "Completed",
            Self::OnHold => "OnHold",
            Self::Archived => "Archived",
        }
    }
}

/// Map a human label to its status token.
///
/// Case-sensitive; unknown, empty or absent labels map to `None`.
pub fn map_status(label: Option<&str>) -> Option<ProjectStatus> {
    let label = label?;
    ProjectStatus::ALL
        .into_iter()
        .find(|status| status.label() == label)
}
