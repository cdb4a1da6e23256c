//! People (cast and crew) entities.

use serde::{Deserialize, Serialize};

use crate::list::Identified;
use crate::movie::Movie;

/// Full person details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub biography: String,
    #[serde(default)]
    pub also_known_as: Vec<String>,
    pub birthday: Option<String>,
    pub place_of_birth: Option<String>,
    pub profile_path: Option<String>,
    #[serde(default)]
    pub known_for_department: String,
    #[serde(default)]
    pub popularity: f64,
    pub gender: Option<u8>,
    pub imdb_id: Option<String>,
    #[serde(default)]
    pub adult: bool,
}

impl Identified for Person {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Movie credits of a person; only the cast side is surfaced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonCredits {
    #[serde(default)]
    pub cast: Vec<Movie>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn person_tolerates_null_optionals() {
        let person: Person = serde_json::from_str(
            r#"{
                "id": 819,
                "name": "Edward Norton",
                "birthday": "1969-08-18",
                "place_of_birth": null,
                "profile_path": null,
                "imdb_id": null,
                "gender": 2
            }"#,
        )
        .unwrap();
        assert_eq!(person.id, 819);
        assert!(person.place_of_birth.is_none());
        assert_eq!(person.gender, Some(2));
    }

    #[test]
    fn person_credits_default_to_empty_cast() {
        let credits: PersonCredits = serde_json::from_str(r#"{}"#).unwrap();
        assert!(credits.cast.is_empty());
    }
}
