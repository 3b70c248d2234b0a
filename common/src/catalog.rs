//! Bundled, read-only catalog of buildings and study spaces.

use std::collections::BTreeSet;
use std::sync::LazyLock;

use crate::building::{Building, Campus};
use crate::study_space::{SpaceId, StudySpace};

const BUILDINGS_JSON: &str = include_str!("../data/buildings.json");
const STUDY_AREAS_JSON: &str = include_str!("../data/study_areas.json");

static BUNDLED: LazyLock<Result<Catalog, CatalogError>> = LazyLock::new(|| {
    let catalog = Catalog::from_json(BUILDINGS_JSON, STUDY_AREAS_JSON)?;
    for issue in catalog.validate() {
        if issue.is_advisory() {
            tracing::debug!("catalog: {issue}");
        } else {
            tracing::warn!("catalog: {issue}");
        }
    }
    Ok(catalog)
});

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse {file}: {message}")]
    Parse { file: &'static str, message: String },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogIssue {
    #[error("space {0} has no bestFor values")]
    EmptyBestFor(SpaceId),
    #[error("space {0} has no bookableRooms values")]
    EmptyBookableRooms(SpaceId),
    #[error("space {space} references unknown building {building_id:?}")]
    UnknownBuilding { space: SpaceId, building_id: String },
    #[error("space id {0} appears more than once")]
    DuplicateSpaceId(SpaceId),
    #[error("building {building_id:?} declares {declared} areas but has {actual}")]
    AreaCountMismatch { building_id: String, declared: u32, actual: u32 },
}

impl CatalogIssue {
    /// Area counts are advisory; everything else breaks a data invariant.
    pub fn is_advisory(&self) -> bool {
        matches!(self, Self::AreaCountMismatch { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Catalog {
    buildings: Vec<Building>,
    spaces: Vec<StudySpace>,
}

impl Catalog {
    pub fn new(buildings: Vec<Building>, spaces: Vec<StudySpace>) -> Self {
        Self { buildings, spaces }
    }

    pub fn from_json(buildings_json: &str, spaces_json: &str) -> Result<Self, CatalogError> {
        let buildings = serde_json::from_str(buildings_json)
            .map_err(|e| CatalogError::Parse { file: "buildings.json", message: e.to_string() })?;
        let spaces = serde_json::from_str(spaces_json)
            .map_err(|e| CatalogError::Parse { file: "study_areas.json", message: e.to_string() })?;
        Ok(Self::new(buildings, spaces))
    }

    /// The catalog shipped with the application, parsed once.
    pub fn bundled() -> Result<&'static Catalog, CatalogError> {
        BUNDLED.as_ref().map_err(|e| e.clone())
    }

    pub fn buildings(&self) -> &[Building] {
        &self.buildings
    }

    /// All spaces in catalog order.
    pub fn spaces(&self) -> &[StudySpace] {
        &self.spaces
    }

    pub fn building(&self, id: &str) -> Option<&Building> {
        self.buildings.iter().find(|b| b.id == id)
    }

    pub fn space(&self, id: SpaceId) -> Option<&StudySpace> {
        self.spaces.iter().find(|s| s.id == id)
    }

    pub fn buildings_on_campus(&self, campus: Campus) -> Vec<&Building> {
        self.buildings.iter().filter(|b| b.campus == campus).collect()
    }

    pub fn spaces_in_building(&self, building_id: &str) -> Vec<&StudySpace> {
        self.spaces.iter().filter(|s| s.building_id == building_id).collect()
    }

    pub fn spaces_on_campus(&self, campus: Campus) -> Vec<&StudySpace> {
        let building_ids = self.buildings_on_campus(campus).into_iter().map(|b| b.id.as_str()).collect::<BTreeSet<_>>();
        self.spaces.iter().filter(|s| building_ids.contains(s.building_id.as_str())).collect()
    }

    pub fn declared_area_count(&self, campus: Campus) -> u32 {
        self.buildings_on_campus(campus).iter().map(|b| b.area_count).sum()
    }

    pub fn validate(&self) -> Vec<CatalogIssue> {
        let mut issues = Vec::new();
        let mut seen = BTreeSet::new();
        for space in &self.spaces {
            if !seen.insert(space.id) {
                issues.push(CatalogIssue::DuplicateSpaceId(space.id));
            }
            if space.best_for.is_empty() {
                issues.push(CatalogIssue::EmptyBestFor(space.id));
            }
            if space.bookable_rooms.is_empty() {
                issues.push(CatalogIssue::EmptyBookableRooms(space.id));
            }
            if self.building(&space.building_id).is_none() {
                issues.push(CatalogIssue::UnknownBuilding { space: space.id, building_id: space.building_id.clone() });
            }
        }
        for building in &self.buildings {
            let actual = self.spaces_in_building(&building.id).len() as u32;
            if actual != building.area_count {
                issues.push(CatalogIssue::AreaCountMismatch {
                    building_id: building.id.clone(),
                    declared: building.area_count,
                    actual,
                });
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::space;

    fn building(id: &str, campus: Campus, area_count: u32) -> Building {
        Building {
            id: id.to_string(),
            name: id.to_string(),
            short_name: id.to_string(),
            campus,
            address: String::new(),
            building_type: "Library".to_string(),
            image: String::new(),
            description: String::new(),
            area_count,
        }
    }

    #[test]
    fn bundled_catalog_parses_and_keeps_invariants() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.buildings().len(), 15);
        assert_eq!(catalog.spaces().len(), 30);
        let ids = catalog.spaces().iter().map(|s| s.id.0).collect::<Vec<_>>();
        assert!(ids.windows(2).all(|w| w[0] < w[1]), "catalog order is ascending id");
        assert_eq!(catalog.validate(), vec![]);
    }

    #[test]
    fn bundled_campus_queries() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.buildings_on_campus(Campus::North).len(), 3);
        assert_eq!(catalog.spaces_on_campus(Campus::North).len(), 7);
        assert_eq!(catalog.declared_area_count(Campus::Central), 23);
        assert_eq!(catalog.spaces_in_building("shapiro").len(), 5);
        assert_eq!(catalog.space(SpaceId(3)).map(|s| s.building_id.as_str()), Some("fishbowl"));
        assert!(catalog.building("does-not-exist").is_none());
    }

    #[test]
    fn validate_reports_broken_invariants() {
        let mut empty = space(2).building("lib").build();
        empty.best_for.clear();
        empty.bookable_rooms.clear();
        let catalog = Catalog::new(
            vec![building("lib", Campus::Central, 3)],
            vec![space(1).building("lib").build(), empty, space(1).building("gone").build()],
        );
        let issues = catalog.validate();
        assert!(issues.contains(&CatalogIssue::EmptyBestFor(SpaceId(2))));
        assert!(issues.contains(&CatalogIssue::EmptyBookableRooms(SpaceId(2))));
        assert!(issues.contains(&CatalogIssue::DuplicateSpaceId(SpaceId(1))));
        assert!(issues.contains(&CatalogIssue::UnknownBuilding { space: SpaceId(1), building_id: "gone".to_string() }));
        let advisory = issues.iter().filter(|i| i.is_advisory()).collect::<Vec<_>>();
        assert_eq!(advisory, vec![&CatalogIssue::AreaCountMismatch { building_id: "lib".to_string(), declared: 3, actual: 2 }]);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Catalog::from_json("[]", "{not json").unwrap_err();
        assert!(matches!(err, CatalogError::Parse { file: "study_areas.json", .. }));
    }
}
