//! Hard-coded sample data.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    Planting,
    Maintenance,
}

impl EventType {
    pub fn label(self) -> &'static str {
        match self {
            EventType::Planting => "planting",
            EventType::Maintenance => "maintenance",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    Unknown,
    Government,
    Private,
}

impl Ownership {
    pub const ALL: [Ownership; 3] = [Ownership::Unknown, Ownership::Government, Ownership::Private];

    pub fn label(self) -> &'static str {
        match self {
            Ownership::Unknown => "Unknown",
            Ownership::Government => "Government",
            Ownership::Private => "Self",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlantingLocation {
    pub name: &'static str,
    pub location: &'static str,
    /// Distance from the user, in kilometres.
    pub distance_km: u16,
    pub event_type: EventType,
    pub ownership: Ownership,
    pub priority: Priority,
    pub verified: bool,
    pub open_for_volunteering: bool,
    pub location_types: &'static [&'static str],
    pub plants_allowed: &'static [&'static str],
    pub participants: &'static [&'static str],
}

pub fn sample_locations() -> Vec<PlantingLocation> {
    vec![
        PlantingLocation {
            name: "Community strip behind the enclave",
            location: "Swapna Enclave, Semapur, New Delhi, India, 203302",
            distance_km: 4,
            event_type: EventType::Planting,
            ownership: Ownership::Government,
            priority: Priority::Low,
            verified: true,
            open_for_volunteering: true,
            location_types: &["roadside", "shaded"],
            plants_allowed: &["neem", "peepal", "jamun"],
            participants: &["asha", "ravi", "meera"],
        },
        PlantingLocation {
            name: "School boundary wall",
            location: "Sector 12, Dwarka, New Delhi, India, 110075",
            distance_km: 12,
            event_type: EventType::Planting,
            ownership: Ownership::Government,
            priority: Priority::High,
            verified: true,
            open_for_volunteering: true,
            location_types: &["school", "sunny"],
            plants_allowed: &["ashoka", "gulmohar"],
            participants: &["ravi"],
        },
        PlantingLocation {
            name: "Canal bank saplings",
            location: "Yamuna Canal Road, Sonipat, Haryana, India, 131001",
            distance_km: 46,
            event_type: EventType::Maintenance,
            ownership: Ownership::Unknown,
            priority: Priority::Medium,
            verified: false,
            open_for_volunteering: true,
            location_types: &["riverbank"],
            plants_allowed: &["arjun", "bamboo"],
            participants: &["meera", "kabir", "asha", "dev"],
        },
        PlantingLocation {
            name: "Rooftop orchard",
            location: "Lajpat Nagar II, New Delhi, India, 110024",
            distance_km: 8,
            event_type: EventType::Maintenance,
            ownership: Ownership::Private,
            priority: Priority::Low,
            verified: true,
            open_for_volunteering: false,
            location_types: &["rooftop"],
            plants_allowed: &["guava", "lemon"],
            participants: &[],
        },
        PlantingLocation {
            name: "Park perimeter",
            location: "Lodhi Colony, New Delhi, India, 110003",
            distance_km: 23,
            event_type: EventType::Planting,
            ownership: Ownership::Government,
            priority: Priority::Medium,
            verified: false,
            open_for_volunteering: true,
            location_types: &["park", "shaded"],
            plants_allowed: &["kadam", "neem"],
            participants: &["dev", "kabir"],
        },
    ]
}
