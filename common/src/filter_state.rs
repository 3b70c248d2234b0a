//! Facet selections of a browsing session.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::facets::{Amenity, BestFor, BookableRoom, EnclosedLevel, Facet, NoiseLevel};

/// Selected values per facet. An empty set places no constraint on its facet.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterState {
    pub buildings: BTreeSet<String>,
    pub noise: BTreeSet<NoiseLevel>,
    pub best_for: BTreeSet<BestFor>,
    pub amenities: BTreeSet<Amenity>,
    pub bookable_rooms: BTreeSet<BookableRoom>,
    pub enclosed: BTreeSet<EnclosedLevel>,
}

/// One selectable value of one facet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FacetValue {
    Building(String),
    Noise(NoiseLevel),
    BestFor(BestFor),
    Amenity(Amenity),
    BookableRoom(BookableRoom),
    Enclosed(EnclosedLevel),
}

impl FacetValue {
    pub fn facet(&self) -> Facet {
        match self {
            Self::Building(_) => Facet::Building,
            Self::Noise(_) => Facet::Noise,
            Self::BestFor(_) => Facet::BestFor,
            Self::Amenity(_) => Facet::Amenities,
            Self::BookableRoom(_) => Facet::BookableRooms,
            Self::Enclosed(_) => Facet::Enclosed,
        }
    }

    /// Every selectable value of a facet, in display order. Building values
    /// come from the catalog and are not listed here.
    pub fn options(facet: Facet) -> Vec<FacetValue> {
        match facet {
            Facet::Building => Vec::new(),
            Facet::Noise => NoiseLevel::ALL.into_iter().map(Self::Noise).collect(),
            Facet::BestFor => BestFor::ALL.into_iter().map(Self::BestFor).collect(),
            Facet::Amenities => Amenity::ALL.into_iter().map(Self::Amenity).collect(),
            Facet::BookableRooms => BookableRoom::ALL.into_iter().map(Self::BookableRoom).collect(),
            Facet::Enclosed => EnclosedLevel::ALL.into_iter().map(Self::Enclosed).collect(),
        }
    }

    pub fn label(&self) -> String {
        match self {
            Self::Building(id) => id.clone(),
            Self::Noise(v) => format!("{} {}", v.icon(), v.label()),
            Self::BestFor(v) => format!("{} {}", v.icon(), v.label()),
            Self::Amenity(v) => format!("{} {}", v.icon(), v.label()),
            Self::BookableRoom(v) => format!("{} {}", v.icon(), v.label()),
            Self::Enclosed(v) => format!("{} {}", v.icon(), v.label()),
        }
    }

    pub fn description(&self) -> Option<&'static str> {
        match self {
            Self::Building(_) => None,
            Self::Noise(v) => v.description(),
            Self::BestFor(v) => v.description(),
            Self::Amenity(v) => v.description(),
            Self::BookableRoom(v) => v.description(),
            Self::Enclosed(v) => v.description(),
        }
    }
}

fn toggle_in<T: Ord>(set: &mut BTreeSet<T>, value: T) {
    if !set.remove(&value) {
        set.insert(value);
    }
}

impl FilterState {
    /// Adds the value if absent, removes it if present. Facets never
    /// exclude each other's values.
    pub fn toggle(&mut self, value: FacetValue) {
        match value {
            FacetValue::Building(v) => toggle_in(&mut self.buildings, v),
            FacetValue::Noise(v) => toggle_in(&mut self.noise, v),
            FacetValue::BestFor(v) => toggle_in(&mut self.best_for, v),
            FacetValue::Amenity(v) => toggle_in(&mut self.amenities, v),
            FacetValue::BookableRoom(v) => toggle_in(&mut self.bookable_rooms, v),
            FacetValue::Enclosed(v) => toggle_in(&mut self.enclosed, v),
        }
    }

    pub fn is_selected(&self, value: &FacetValue) -> bool {
        match value {
            FacetValue::Building(v) => self.buildings.contains(v),
            FacetValue::Noise(v) => self.noise.contains(v),
            FacetValue::BestFor(v) => self.best_for.contains(v),
            FacetValue::Amenity(v) => self.amenities.contains(v),
            FacetValue::BookableRoom(v) => self.bookable_rooms.contains(v),
            FacetValue::Enclosed(v) => self.enclosed.contains(v),
        }
    }

    pub fn clear_all(&mut self) {
        *self = Self::default();
    }

    pub fn clear_facet(&mut self, facet: Facet) {
        match facet {
            Facet::Building => self.buildings.clear(),
            Facet::Noise => self.noise.clear(),
            Facet::BestFor => self.best_for.clear(),
            Facet::Amenities => self.amenities.clear(),
            Facet::BookableRooms => self.bookable_rooms.clear(),
            Facet::Enclosed => self.enclosed.clear(),
        }
    }

    pub fn selected_count(&self, facet: Facet) -> usize {
        match facet {
            Facet::Building => self.buildings.len(),
            Facet::Noise => self.noise.len(),
            Facet::BestFor => self.best_for.len(),
            Facet::Amenities => self.amenities.len(),
            Facet::BookableRooms => self.bookable_rooms.len(),
            Facet::Enclosed => self.enclosed.len(),
        }
    }

    /// Total number of selected values across all facets.
    pub fn active_count(&self) -> usize {
        Facet::ALL.iter().map(|f| self.selected_count(*f)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.active_count() == 0
    }

    /// Every selected value, facet by facet in display order.
    pub fn selected_values(&self) -> Vec<FacetValue> {
        let mut values = Vec::with_capacity(self.active_count());
        values.extend(self.buildings.iter().cloned().map(FacetValue::Building));
        values.extend(self.noise.iter().copied().map(FacetValue::Noise));
        values.extend(self.best_for.iter().copied().map(FacetValue::BestFor));
        values.extend(self.amenities.iter().copied().map(FacetValue::Amenity));
        values.extend(self.bookable_rooms.iter().copied().map(FacetValue::BookableRoom));
        values.extend(self.enclosed.iter().copied().map(FacetValue::Enclosed));
        values
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_set_xor() {
        let mut state = FilterState::default();
        state.toggle(FacetValue::Noise(NoiseLevel::Quiet));
        state.toggle(FacetValue::Noise(NoiseLevel::Lively));
        assert!(state.is_selected(&FacetValue::Noise(NoiseLevel::Quiet)));
        assert_eq!(state.noise.len(), 2, "single-valued facets still allow several selections");

        state.toggle(FacetValue::Noise(NoiseLevel::Quiet));
        assert!(!state.is_selected(&FacetValue::Noise(NoiseLevel::Quiet)));
        assert_eq!(state.active_count(), 1);
    }

    #[test]
    fn clear_all_and_clear_facet() {
        let mut state = FilterState::default();
        state.toggle(FacetValue::Building("hatcher".to_string()));
        state.toggle(FacetValue::Amenity(Amenity::Printer));
        state.toggle(FacetValue::Amenity(Amenity::Outlets));
        assert_eq!(state.active_count(), 3);

        state.clear_facet(Facet::Amenities);
        assert_eq!(state.selected_count(Facet::Amenities), 0);
        assert_eq!(state.selected_count(Facet::Building), 1);

        state.clear_all();
        assert!(state.is_empty());
        assert_eq!(state, FilterState::default());
    }

    #[test]
    fn selected_values_toggle_back_out() {
        let mut state = FilterState::default();
        state.toggle(FacetValue::Enclosed(EnclosedLevel::Open));
        state.toggle(FacetValue::Building("hatcher".to_string()));
        state.toggle(FacetValue::Amenity(Amenity::Cafe));

        let values = state.selected_values();
        assert_eq!(values[0], FacetValue::Building("hatcher".to_string()));
        assert_eq!(values.len(), 3);
        for value in values {
            state.toggle(value);
        }
        assert!(state.is_empty());
    }

    #[test]
    fn options_cover_each_enumeration() {
        assert_eq!(FacetValue::options(Facet::Noise).len(), 5);
        assert_eq!(FacetValue::options(Facet::Amenities).len(), 7);
        assert_eq!(FacetValue::options(Facet::BookableRooms).len(), 6);
        assert!(FacetValue::options(Facet::Building).is_empty());
        for facet in Facet::ALL {
            assert!(FacetValue::options(facet).iter().all(|v| v.facet() == facet));
        }
    }

    #[test]
    fn partial_json_fills_missing_facets() {
        let state: FilterState = serde_json::from_str(r#"{"amenities":["outlets"]}"#).unwrap();
        assert_eq!(state.amenities.len(), 1);
        assert!(state.noise.is_empty());
    }
}
