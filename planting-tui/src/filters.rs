//! List filters and text search.

use crate::data::{EventType, PlantingLocation, Priority};

/// Upper end of the distance slider, in kilometres.
pub const MAX_DISTANCE_KM: u16 = 100;
/// Slider step for one key press.
const DISTANCE_STEP_KM: u16 = 5;
/// Smallest allowed gap between the two slider thumbs.
const MIN_DISTANCE_GAP_KM: u16 = 2;

/// Rows of the filter panel, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    Planting,
    Maintenance,
    MinDistance,
    MaxDistance,
    OnlyVerified,
    OpenForVolunteering,
    HighestPriority,
}

impl FilterField {
    pub const ALL: [FilterField; 7] = [
        FilterField::Planting,
        FilterField::Maintenance,
        FilterField::MinDistance,
        FilterField::MaxDistance,
        FilterField::OnlyVerified,
        FilterField::OpenForVolunteering,
        FilterField::HighestPriority,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FilterField::Planting => "Planting events",
            FilterField::Maintenance => "Maintaining events",
            FilterField::MinDistance => "Distance from (km)",
            FilterField::MaxDistance => "Distance to (km)",
            FilterField::OnlyVerified => "Only verified",
            FilterField::OpenForVolunteering => "Open for volunteering",
            FilterField::HighestPriority => "Highest priority",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters {
    pub planting: bool,
    pub maintenance: bool,
    /// Inclusive distance frame, `min < max`.
    pub distance: (u16, u16),
    pub only_verified: bool,
    pub open_for_volunteering: bool,
    pub highest_priority: bool,
    /// Case-insensitive search over name and location.
    pub query: String,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            planting: true,
            maintenance: true,
            distance: (0, MAX_DISTANCE_KM),
            only_verified: false,
            open_for_volunteering: false,
            highest_priority: false,
            query: String::new(),
        }
    }
}

impl Filters {
    /// Flip a switch. At least one event type always stays on; range fields
    /// are left alone.
    pub fn toggle(&mut self, field: FilterField) {
        match field {
            FilterField::Planting if self.maintenance => self.planting = !self.planting,
            FilterField::Maintenance if self.planting => self.maintenance = !self.maintenance,
            FilterField::Planting | FilterField::Maintenance => {}
            FilterField::OnlyVerified => self.only_verified = !self.only_verified,
            FilterField::OpenForVolunteering => {
                self.open_for_volunteering = !self.open_for_volunteering
            }
            FilterField::HighestPriority => self.highest_priority = !self.highest_priority,
            FilterField::MinDistance | FilterField::MaxDistance => {}
        }
    }

    /// Move one slider thumb a step. The thumbs never cross or come closer
    /// than the minimum gap.
    pub fn nudge(&mut self, field: FilterField, up: bool) {
        let (min, max) = self.distance;
        let step = |value: u16| {
            if up {
                value.saturating_add(DISTANCE_STEP_KM)
            } else {
                value.saturating_sub(DISTANCE_STEP_KM)
            }
        };
        self.distance = match field {
            FilterField::MinDistance => (step(min).min(max - MIN_DISTANCE_GAP_KM), max),
            FilterField::MaxDistance => (
                min,
                step(max).clamp(min + MIN_DISTANCE_GAP_KM, MAX_DISTANCE_KM),
            ),
            _ => return,
        };
    }

    pub fn is_on(&self, field: FilterField) -> bool {
        match field {
            FilterField::Planting => self.planting,
            FilterField::Maintenance => self.maintenance,
            FilterField::OnlyVerified => self.only_verified,
            FilterField::OpenForVolunteering => self.open_for_volunteering,
            FilterField::HighestPriority => self.highest_priority,
            FilterField::MinDistance | FilterField::MaxDistance => false,
        }
    }

    pub fn matches(&self, location: &PlantingLocation) -> bool {
        let event = match location.event_type {
            EventType::Planting => self.planting,
            EventType::Maintenance => self.maintenance,
        };
        let (min, max) = self.distance;
        event
            && (min..=max).contains(&location.distance_km)
            && (!self.only_verified || location.verified)
            && (!self.open_for_volunteering || location.open_for_volunteering)
            && (!self.highest_priority || location.priority == Priority::High)
            && self.matches_query(location)
    }

    fn matches_query(&self, location: &PlantingLocation) -> bool {
        let query = self.query.trim().to_lowercase();
        query.is_empty()
            || location.name.to_lowercase().contains(&query)
            || location.location.to_lowercase().contains(&query)
    }
}
