//! Builders shared by unit tests.

use crate::facets::{Amenity, BestFor, BookableRoom, EnclosedLevel, NoiseLevel};
use crate::review::Review;
use crate::study_space::{SpaceId, StudySpace, StudySpaceDimensions};

pub(crate) struct SpaceBuilder(StudySpace);

pub(crate) fn space(id: u32) -> SpaceBuilder {
    SpaceBuilder(StudySpace {
        id: SpaceId(id),
        building_id: "hatcher".to_string(),
        name: format!("Space {id}"),
        location: format!("Floor {id}"),
        noise: NoiseLevel::Quiet,
        best_for: vec![BestFor::Solo],
        amenities: vec![Amenity::Outlets],
        bookable_rooms: vec![BookableRoom::WalkInOnly],
        enclosed: EnclosedLevel::Open,
        photos: vec![],
        dimensions: StudySpaceDimensions::default(),
    })
}

impl SpaceBuilder {
    pub(crate) fn building(mut self, building_id: &str) -> Self {
        self.0.building_id = building_id.to_string();
        self
    }

    pub(crate) fn noise(mut self, noise: NoiseLevel) -> Self {
        self.0.noise = noise;
        self
    }

    pub(crate) fn best_for(mut self, values: &[BestFor]) -> Self {
        self.0.best_for = values.to_vec();
        self
    }

    pub(crate) fn amenities(mut self, values: &[Amenity]) -> Self {
        self.0.amenities = values.to_vec();
        self
    }

    pub(crate) fn rooms(mut self, values: &[BookableRoom]) -> Self {
        self.0.bookable_rooms = values.to_vec();
        self
    }

    pub(crate) fn enclosed(mut self, enclosed: EnclosedLevel) -> Self {
        self.0.enclosed = enclosed;
        self
    }

    pub(crate) fn build(self) -> StudySpace {
        self.0
    }
}

pub(crate) fn review(rating: u8) -> Review {
    Review {
        id: format!("r-{rating}"),
        rating,
        created_at: "2025-01-01T00:00:00Z".to_string(),
        ..Review::default()
    }
}
