//! Subject description supplied alongside the birth time.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const fn is_male(self) -> bool {
        matches!(self, Self::Male)
    }

    /// Chinese label (男/女).
    pub const fn name(self) -> &'static str {
        match self {
            Self::Male => "男",
            Self::Female => "女",
        }
    }
}

/// Who the chart is for. The birth time travels separately as a
/// [`SolarDateTime`](crate::SolarDateTime).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthInfo {
    pub name: String,
    pub gender: Gender,
    pub birth_place: String,
}

impl BirthInfo {
    pub fn new(name: impl Into<String>, gender: Gender, birth_place: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            gender,
            birth_place: birth_place.into(),
        }
    }
}
