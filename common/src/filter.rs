//! Facet filter engine: narrows a list of spaces to those matching every
//! active facet selection.

use std::collections::BTreeSet;

use crate::filter_state::FilterState;
use crate::study_space::StudySpace;

fn membership<T: Ord>(selected: &BTreeSet<T>, value: &T) -> bool {
    selected.is_empty() || selected.contains(value)
}

fn any_match<T: Ord>(selected: &BTreeSet<T>, values: &[T]) -> bool {
    selected.is_empty() || values.iter().any(|v| selected.contains(v))
}

fn all_match<T: Ord>(selected: &BTreeSet<T>, values: &[T]) -> bool {
    selected.iter().all(|s| values.contains(s))
}

/// True when `space` satisfies all six facet predicates of `state`.
///
/// An empty `bookable_rooms` list on the space shares no value with any
/// selection, so it only passes when the bookable-rooms facet is unconstrained.
/// Selecting the walk-in marker matches spaces that list it explicitly.
pub fn matches(space: &StudySpace, state: &FilterState) -> bool {
    membership(&state.buildings, &space.building_id)
        && membership(&state.noise, &space.noise)
        && any_match(&state.best_for, &space.best_for)
        && all_match(&state.amenities, &space.amenities)
        && any_match(&state.bookable_rooms, &space.bookable_rooms)
        && membership(&state.enclosed, &space.enclosed)
}

/// Returns the spaces matching `state`, in input order.
pub fn filter_spaces<'a, I>(spaces: I, state: &FilterState) -> Vec<&'a StudySpace>
where
    I: IntoIterator<Item = &'a StudySpace>,
{
    spaces.into_iter().filter(|space| matches(space, state)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::{Amenity, BestFor, BookableRoom, EnclosedLevel, NoiseLevel};
    use crate::filter_state::FacetValue;
    use crate::test_support::space;
    use proptest::prelude::*;

    fn ids(spaces: &[&StudySpace]) -> Vec<u32> {
        spaces.iter().map(|s| s.id.0).collect()
    }

    fn state_with(values: impl IntoIterator<Item = FacetValue>) -> FilterState {
        let mut state = FilterState::default();
        for value in values {
            state.toggle(value);
        }
        state
    }

    #[test]
    fn quiet_with_outlets_and_printer() {
        let catalog = vec![
            space(1).noise(NoiseLevel::Quiet).amenities(&[Amenity::Outlets, Amenity::Printer]).build(),
            space(2).noise(NoiseLevel::Quiet).amenities(&[Amenity::Outlets]).build(),
            space(3).noise(NoiseLevel::Lively).amenities(&[Amenity::Outlets, Amenity::Printer]).build(),
        ];
        let state = state_with([
            FacetValue::Noise(NoiseLevel::Quiet),
            FacetValue::Amenity(Amenity::Outlets),
            FacetValue::Amenity(Amenity::Printer),
        ]);
        assert_eq!(ids(&filter_spaces(&catalog, &state)), vec![1]);
    }

    #[test]
    fn empty_state_keeps_everything() {
        let catalog = vec![space(1).build(), space(2).noise(NoiseLevel::Mixed).build()];
        assert_eq!(ids(&filter_spaces(&catalog, &FilterState::default())), vec![1, 2]);
    }

    #[test]
    fn amenities_require_every_selected_value() {
        let catalog = vec![
            space(1).amenities(&[Amenity::Cafe, Amenity::Lounge, Amenity::Outlets]).build(),
            space(2).amenities(&[Amenity::Cafe, Amenity::Outlets]).build(),
        ];
        let state = state_with([FacetValue::Amenity(Amenity::Cafe), FacetValue::Amenity(Amenity::Lounge)]);
        assert_eq!(ids(&filter_spaces(&catalog, &state)), vec![1]);
    }

    #[test]
    fn best_for_and_rooms_are_disjunctive() {
        let catalog = vec![
            space(1).best_for(&[BestFor::Solo]).rooms(&[BookableRoom::Booth]).build(),
            space(2).best_for(&[BestFor::Group]).rooms(&[BookableRoom::StudyRoom]).build(),
            space(3).best_for(&[BestFor::Solo, BestFor::Group]).rooms(&[BookableRoom::WalkInOnly]).build(),
        ];
        let state = state_with([FacetValue::BestFor(BestFor::Group), FacetValue::BestFor(BestFor::Solo)]);
        assert_eq!(ids(&filter_spaces(&catalog, &state)), vec![1, 2, 3]);

        let state = state_with([
            FacetValue::BookableRoom(BookableRoom::Booth),
            FacetValue::BookableRoom(BookableRoom::StudyRoom),
        ]);
        assert_eq!(ids(&filter_spaces(&catalog, &state)), vec![1, 2]);
    }

    #[test]
    fn walk_in_selection_needs_explicit_marker() {
        let catalog = vec![
            space(1).rooms(&[BookableRoom::WalkInOnly]).build(),
            space(2).rooms(&[]).build(),
            space(3).rooms(&[BookableRoom::StudyRoom]).build(),
        ];
        let state = state_with([FacetValue::BookableRoom(BookableRoom::WalkInOnly)]);
        assert_eq!(ids(&filter_spaces(&catalog, &state)), vec![1]);

        let state = state_with([FacetValue::BookableRoom(BookableRoom::StudyRoom)]);
        assert_eq!(ids(&filter_spaces(&catalog, &state)), vec![3]);
    }

    #[test]
    fn multiple_values_in_single_valued_facet_are_ored() {
        let catalog = vec![
            space(1).enclosed(EnclosedLevel::Open).build(),
            space(2).enclosed(EnclosedLevel::Semi).build(),
            space(3).enclosed(EnclosedLevel::Enclosed).build(),
        ];
        let state = state_with([FacetValue::Enclosed(EnclosedLevel::Open), FacetValue::Enclosed(EnclosedLevel::Enclosed)]);
        assert_eq!(ids(&filter_spaces(&catalog, &state)), vec![1, 3]);
    }

    #[test]
    fn unknown_building_selection_yields_no_matches() {
        let catalog = vec![space(1).building("hatcher").build(), space(2).building("ross").build()];
        let state = state_with([FacetValue::Building("demolished".to_string())]);
        assert!(filter_spaces(&catalog, &state).is_empty());

        let state = state_with([FacetValue::Building("demolished".to_string()), FacetValue::Building("ross".to_string())]);
        assert_eq!(ids(&filter_spaces(&catalog, &state)), vec![2]);
    }

    #[test]
    fn facets_are_anded() {
        let catalog = vec![
            space(1).building("ross").noise(NoiseLevel::Lively).build(),
            space(2).building("ross").noise(NoiseLevel::Quiet).build(),
            space(3).building("union").noise(NoiseLevel::Lively).build(),
        ];
        let state = state_with([FacetValue::Building("ross".to_string()), FacetValue::Noise(NoiseLevel::Lively)]);
        assert_eq!(ids(&filter_spaces(&catalog, &state)), vec![1]);
    }

    fn arb_space() -> impl Strategy<Value = StudySpace> {
        (
            0..4usize,
            0..NoiseLevel::ALL.len(),
            prop::collection::vec(0..BestFor::ALL.len(), 1..3),
            prop::collection::vec(0..Amenity::ALL.len(), 0..5),
            prop::collection::vec(0..BookableRoom::ALL.len(), 1..3),
            0..EnclosedLevel::ALL.len(),
        )
            .prop_map(|(b, n, bf, am, br, en)| {
                space(0)
                    .building(["hatcher", "ross", "union", "ggbl"][b])
                    .noise(NoiseLevel::ALL[n])
                    .best_for(&bf.into_iter().map(|i| BestFor::ALL[i]).collect::<Vec<_>>())
                    .amenities(&am.into_iter().map(|i| Amenity::ALL[i]).collect::<Vec<_>>())
                    .rooms(&br.into_iter().map(|i| BookableRoom::ALL[i]).collect::<Vec<_>>())
                    .enclosed(EnclosedLevel::ALL[en])
                    .build()
            })
    }

    fn arb_catalog() -> impl Strategy<Value = Vec<StudySpace>> {
        prop::collection::vec(arb_space(), 0..24).prop_map(|mut spaces| {
            for (i, s) in spaces.iter_mut().enumerate() {
                s.id.0 = i as u32 + 1;
            }
            spaces
        })
    }

    fn arb_state() -> impl Strategy<Value = FilterState> {
        let values = prop_oneof![
            (0..4usize).prop_map(|i| FacetValue::Building(["hatcher", "ross", "union", "ggbl"][i].to_string())),
            (0..NoiseLevel::ALL.len()).prop_map(|i| FacetValue::Noise(NoiseLevel::ALL[i])),
            (0..BestFor::ALL.len()).prop_map(|i| FacetValue::BestFor(BestFor::ALL[i])),
            (0..Amenity::ALL.len()).prop_map(|i| FacetValue::Amenity(Amenity::ALL[i])),
            (0..BookableRoom::ALL.len()).prop_map(|i| FacetValue::BookableRoom(BookableRoom::ALL[i])),
            (0..EnclosedLevel::ALL.len()).prop_map(|i| FacetValue::Enclosed(EnclosedLevel::ALL[i])),
        ];
        prop::collection::vec(values, 0..6).prop_map(|values| state_with(values))
    }

    proptest! {
        #[test]
        fn result_is_ordered_subset(catalog in arb_catalog(), state in arb_state()) {
            let result = ids(&filter_spaces(&catalog, &state));
            let all = catalog.iter().map(|s| s.id.0).collect::<Vec<_>>();
            let mut cursor = all.iter();
            for id in &result {
                prop_assert!(cursor.any(|x| x == id), "{id} missing or out of order");
            }
        }

        #[test]
        fn every_kept_space_matches_and_every_dropped_does_not(catalog in arb_catalog(), state in arb_state()) {
            let kept = ids(&filter_spaces(&catalog, &state));
            for space in &catalog {
                prop_assert_eq!(kept.contains(&space.id.0), matches(space, &state));
            }
        }

        #[test]
        fn missing_one_amenity_excludes(catalog in arb_catalog(), extra in 0..Amenity::ALL.len()) {
            let amenity = Amenity::ALL[extra];
            let state = state_with([FacetValue::Amenity(amenity)]);
            for space in filter_spaces(&catalog, &state) {
                prop_assert!(space.amenities.contains(&amenity));
            }
        }

        #[test]
        fn empty_state_is_identity(catalog in arb_catalog()) {
            let result = filter_spaces(&catalog, &FilterState::default());
            prop_assert_eq!(result.len(), catalog.len());
        }
    }
}
