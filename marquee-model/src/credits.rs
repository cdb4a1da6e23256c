//! Cast credits attached to a movie.

use serde::{Deserialize, Serialize};

use crate::list::Identified;

/// One cast entry of a movie's credits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CastMember {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub original_name: String,
    #[serde(default)]
    pub character: String,
    pub profile_path: Option<String>,
    #[serde(default)]
    pub known_for_department: String,
    #[serde(default)]
    pub popularity: f64,
    pub gender: Option<u8>,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub cast_id: u64,
    #[serde(default)]
    pub credit_id: String,
    #[serde(default)]
    pub adult: bool,
}

impl Identified for CastMember {
    fn id(&self) -> u64 {
        self.id
    }
}

/// Credits response for a single movie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credits {
    pub id: u64,
    #[serde(default)]
    pub cast: Vec<CastMember>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credits_deserialize_with_null_profile() {
        let json = r#"{
            "id": 550,
            "cast": [{
                "adult": false,
                "gender": 2,
                "id": 819,
                "known_for_department": "Acting",
                "name": "Edward Norton",
                "original_name": "Edward Norton",
                "popularity": 26.99,
                "profile_path": null,
                "cast_id": 4,
                "character": "The Narrator",
                "credit_id": "52fe4250c3a36847f80149f3",
                "order": 0
            }]
        }"#;

        let credits: Credits = serde_json::from_str(json).unwrap();
        assert_eq!(credits.id, 550);
        assert_eq!(credits.cast.len(), 1);
        assert_eq!(credits.cast[0].character, "The Narrator");
        assert!(credits.cast[0].profile_path.is_none());
    }
}
