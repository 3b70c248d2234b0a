use std::{fmt::Display, str::FromStr};

/// Tab of the campus page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CampusView {
    #[default]
    Buildings,
    Areas,
}

impl CampusView {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Buildings => "buildings",
            Self::Areas => "areas",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Buildings => "Browse by Building",
            Self::Areas => "Browse All Areas",
        }
    }
}

impl Display for CampusView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CampusView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "buildings" => Ok(Self::Buildings),
            "areas" => Ok(Self::Areas),
            other => Err(format!("unknown campus view: {other:?}")),
        }
    }
}
