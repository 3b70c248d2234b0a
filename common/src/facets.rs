//! Facet enumerations for study spaces and their display metadata.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NoiseLevel {
    Silent,
    Quiet,
    Moderate,
    Lively,
    Mixed,
}

impl NoiseLevel {
    pub const ALL: [NoiseLevel; 5] = [Self::Silent, Self::Quiet, Self::Moderate, Self::Lively, Self::Mixed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Silent => "silent",
            Self::Quiet => "quiet",
            Self::Moderate => "moderate",
            Self::Lively => "lively",
            Self::Mixed => "mixed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Silent => "Silent",
            Self::Quiet => "Quiet",
            Self::Moderate => "Moderate",
            Self::Lively => "Lively",
            Self::Mixed => "Mixed",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Silent => "🔇",
            Self::Quiet => "🔈",
            Self::Moderate => "🔉",
            Self::Lively => "🔊",
            Self::Mixed => "🎚️",
        }
    }

    pub fn description(&self) -> Option<&'static str> {
        Some(match self {
            Self::Silent => "Strictly quiet, no talking allowed",
            Self::Quiet => "Quiet environment, low whispers only",
            Self::Moderate => "Some background noise and conversations",
            Self::Lively => "Active and energetic atmosphere",
            Self::Mixed => "Different noise zones available",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BestFor {
    Solo,
    Group,
}

impl BestFor {
    pub const ALL: [BestFor; 2] = [Self::Solo, Self::Group];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solo => "solo",
            Self::Group => "group",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Solo => "Solo Study",
            Self::Group => "Group Work",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Solo => "👤",
            Self::Group => "👥",
        }
    }

    pub fn description(&self) -> Option<&'static str> {
        Some(match self {
            Self::Solo => "Individual focused work",
            Self::Group => "Collaborative projects and discussions",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Amenity {
    Computers,
    Printer,
    Whiteboard,
    Microwave,
    Cafe,
    Lounge,
    Outlets,
}

impl Amenity {
    pub const ALL: [Amenity; 7] = [
        Self::Computers,
        Self::Printer,
        Self::Whiteboard,
        Self::Microwave,
        Self::Cafe,
        Self::Lounge,
        Self::Outlets,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Computers => "computers",
            Self::Printer => "printer",
            Self::Whiteboard => "whiteboard",
            Self::Microwave => "microwave",
            Self::Cafe => "cafe",
            Self::Lounge => "lounge",
            Self::Outlets => "outlets",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Computers => "Computers",
            Self::Printer => "Printer",
            Self::Whiteboard => "Whiteboard",
            Self::Microwave => "Microwave",
            Self::Cafe => "Café",
            Self::Lounge => "Lounge Seating",
            Self::Outlets => "Power Outlets",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Computers => "💻",
            Self::Printer => "🖨️",
            Self::Whiteboard => "📋",
            Self::Microwave => "🍽️",
            Self::Cafe => "☕",
            Self::Lounge => "🛋️",
            Self::Outlets => "🔌",
        }
    }

    pub fn description(&self) -> Option<&'static str> {
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BookableRoom {
    StudyRoom,
    ConferenceRoom,
    Booth,
    MovementStudio,
    CreationStudio,
    /// Explicit "no reservable room" marker.
    #[serde(rename = "none")]
    WalkInOnly,
}

impl BookableRoom {
    pub const ALL: [BookableRoom; 6] = [
        Self::StudyRoom,
        Self::ConferenceRoom,
        Self::Booth,
        Self::MovementStudio,
        Self::CreationStudio,
        Self::WalkInOnly,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::StudyRoom => "studyRoom",
            Self::ConferenceRoom => "conferenceRoom",
            Self::Booth => "booth",
            Self::MovementStudio => "movementStudio",
            Self::CreationStudio => "creationStudio",
            Self::WalkInOnly => "none",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::StudyRoom => "Study Room",
            Self::ConferenceRoom => "Conference Room",
            Self::Booth => "Phone Booth",
            Self::MovementStudio => "Movement Studio",
            Self::CreationStudio => "Creation Studio",
            Self::WalkInOnly => "Walk-in Only",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::StudyRoom => "📖",
            Self::ConferenceRoom => "🏢",
            Self::Booth => "🎧",
            Self::MovementStudio => "💃",
            Self::CreationStudio => "🛠️",
            Self::WalkInOnly => "🚶",
        }
    }

    pub fn description(&self) -> Option<&'static str> {
        Some(match self {
            Self::StudyRoom => "2-9 people, group study",
            Self::ConferenceRoom => "6-20 people, formal meetings",
            Self::Booth => "1-2 people, video calls/interviews",
            Self::MovementStudio => "Dance rehearsals etc.",
            Self::CreationStudio => "Maker space",
            Self::WalkInOnly => "No reservation needed",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnclosedLevel {
    Open,
    Semi,
    Enclosed,
    Mixed,
}

impl EnclosedLevel {
    pub const ALL: [EnclosedLevel; 4] = [Self::Open, Self::Semi, Self::Enclosed, Self::Mixed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Semi => "semi",
            Self::Enclosed => "enclosed",
            Self::Mixed => "mixed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Semi => "Semi-Private",
            Self::Enclosed => "Private Room",
            Self::Mixed => "Mixed",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Open => "🌐",
            Self::Semi => "🔳",
            Self::Enclosed => "🚪",
            Self::Mixed => "🔀",
        }
    }

    pub fn description(&self) -> Option<&'static str> {
        Some(match self {
            Self::Open => "No walls or barriers",
            Self::Semi => "Partitions or cubicles",
            Self::Enclosed => "Enclosed room with door",
            Self::Mixed => "Various privacy levels available",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFacetValue {
    pub facet: &'static str,
    pub value: String,
}

impl Display for UnknownFacetValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown {} value: {:?}", self.facet, self.value)
    }
}

impl std::error::Error for UnknownFacetValue {}

fn parse_wire<T: Copy>(all: &[T], as_str: fn(&T) -> &'static str, facet: &'static str, s: &str) -> Result<T, UnknownFacetValue> {
    all.iter()
        .find(|v| as_str(v) == s)
        .copied()
        .ok_or_else(|| UnknownFacetValue { facet, value: s.to_string() })
}

impl FromStr for NoiseLevel {
    type Err = UnknownFacetValue;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wire(&Self::ALL, Self::as_str, "noise", s)
    }
}

impl FromStr for BestFor {
    type Err = UnknownFacetValue;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wire(&Self::ALL, Self::as_str, "bestFor", s)
    }
}

impl FromStr for Amenity {
    type Err = UnknownFacetValue;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wire(&Self::ALL, Self::as_str, "amenity", s)
    }
}

impl FromStr for BookableRoom {
    type Err = UnknownFacetValue;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wire(&Self::ALL, Self::as_str, "bookableRoom", s)
    }
}

impl FromStr for EnclosedLevel {
    type Err = UnknownFacetValue;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_wire(&Self::ALL, Self::as_str, "enclosed", s)
    }
}

/// How a facet's selected values are matched against a space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// The space's single value must be one of the selected values.
    Membership,
    /// The space's value set must share at least one value with the selection.
    AnyMatch,
    /// The space's value set must contain every selected value.
    AllMatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Facet {
    Building,
    Noise,
    BestFor,
    Amenities,
    BookableRooms,
    Enclosed,
}

impl Facet {
    pub const ALL: [Facet; 6] = [
        Self::Building,
        Self::Noise,
        Self::BestFor,
        Self::Amenities,
        Self::BookableRooms,
        Self::Enclosed,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Building => "Building",
            Self::Noise => "Noise Level",
            Self::BestFor => "Best For",
            Self::Amenities => "Amenities",
            Self::BookableRooms => "Bookable Rooms",
            Self::Enclosed => "Privacy",
        }
    }

    pub fn match_mode(&self) -> MatchMode {
        match self {
            Self::Building | Self::Noise | Self::Enclosed => MatchMode::Membership,
            Self::BestFor | Self::BookableRooms => MatchMode::AnyMatch,
            Self::Amenities => MatchMode::AllMatch,
        }
    }

    /// Short hint shown next to the facet title.
    pub fn hint(&self) -> Option<&'static str> {
        match self.match_mode() {
            MatchMode::AllMatch => Some("must have all"),
            _ => None,
        }
    }
}
