//! Saved spaces of a signed-in user.

use serde::{Deserialize, Serialize};

use crate::serde_util::{opt_string_or_number, string_or_number};
use crate::study_space::SpaceId;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Favorite {
    #[serde(default, deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub user_id: Option<String>,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub space_id: Option<String>,
    /// Joined space row, present when the API expands the relation.
    #[serde(default)]
    pub study_spaces: Option<FavoriteSpaceRef>,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FavoriteSpaceRef {
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub id: Option<String>,
}

/// Request body of `POST /api/users/{userId}/favorites`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFavorite {
    pub space_id: String,
}

impl Favorite {
    /// The embedded space id wins over the flat `space_id` column.
    pub fn resolved_space_id(&self) -> Option<&str> {
        self.study_spaces
            .as_ref()
            .and_then(|s| s.id.as_deref())
            .filter(|id| !id.is_empty())
            .or(self.space_id.as_deref())
    }

    /// The catalog id this favorite points at, if it is a catalog space.
    pub fn catalog_id(&self) -> Option<SpaceId> {
        self.resolved_space_id().and_then(|id| id.parse().ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_embedded_then_flat_space_id() {
        let json = r#"[
            {"id": 1, "user_id": "u", "space_id": "4", "study_spaces": {"id": 9}, "created_at": ""},
            {"id": 2, "user_id": "u", "space_id": 11, "created_at": ""},
            {"id": 3, "user_id": "u", "space_id": "custom-nook", "created_at": ""}
        ]"#;
        let favorites: Vec<Favorite> = serde_json::from_str(json).unwrap();
        assert_eq!(favorites[0].resolved_space_id(), Some("9"));
        assert_eq!(favorites[1].catalog_id(), Some(SpaceId(11)));
        assert_eq!(favorites[2].resolved_space_id(), Some("custom-nook"));
        assert_eq!(favorites[2].catalog_id(), None);
    }

    #[test]
    fn new_favorite_uses_camel_case_body() {
        let body = serde_json::to_value(NewFavorite { space_id: "3".to_string() }).unwrap();
        assert_eq!(body, serde_json::json!({"spaceId": "3"}));
    }
}
