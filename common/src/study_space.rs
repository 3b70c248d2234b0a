//! Study space catalog records.

use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::facets::{Amenity, BestFor, BookableRoom, EnclosedLevel, NoiseLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpaceId(pub u32);

impl Display for SpaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for SpaceId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u32>().map(SpaceId)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySpace {
    pub id: SpaceId,
    pub building_id: String,
    pub name: String,
    pub location: String,
    pub noise: NoiseLevel,
    pub best_for: Vec<BestFor>,
    pub amenities: Vec<Amenity>,
    pub bookable_rooms: Vec<BookableRoom>,
    pub enclosed: EnclosedLevel,
    #[serde(default)]
    pub photos: Vec<String>,
    pub dimensions: StudySpaceDimensions,
}

/// Free-text descriptions of a space, one per review dimension.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySpaceDimensions {
    pub environment: String,
    pub space_sound: String,
    pub facilities: String,
    pub convenience: String,
    pub accessibility: String,
}

impl StudySpaceDimensions {
    pub fn entries(&self) -> [(&'static str, &str); 5] {
        [
            ("Environment", self.environment.as_str()),
            ("Space & Sound", self.space_sound.as_str()),
            ("Facilities", self.facilities.as_str()),
            ("Convenience", self.convenience.as_str()),
            ("Accessibility", self.accessibility.as_str()),
        ]
    }
}

impl StudySpace {
    /// True when the space is explicitly marked as having no reservable room.
    pub fn is_walk_in_only(&self) -> bool {
        self.bookable_rooms.contains(&BookableRoom::WalkInOnly)
    }
}
