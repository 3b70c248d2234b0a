//! Campus buildings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Campus {
    Central,
    North,
}

impl Campus {
    pub const ALL: [Campus; 2] = [Self::Central, Self::North];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Central => "central",
            Self::North => "north",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Central => "Central Campus",
            Self::North => "North Campus",
        }
    }
}

impl std::fmt::Display for Campus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Campus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "central" => Ok(Self::Central),
            "north" => Ok(Self::North),
            other => Err(format!("unknown campus: {other:?}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Building {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub campus: Campus,
    pub address: String,
    #[serde(rename = "type")]
    pub building_type: String,
    pub image: String,
    pub description: String,
    /// Declared number of study areas; advisory only.
    pub area_count: u32,
}
