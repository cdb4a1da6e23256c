//! Authenticated account profile.

use serde::{Deserialize, Serialize};

/// Gravatar half of the avatar union.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GravatarAvatar {
    #[serde(default)]
    pub hash: String,
}

/// Catalog-hosted half of the avatar union.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TmdbAvatar {
    pub avatar_path: Option<String>,
}

/// Avatar sources attached to an account.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Avatar {
    #[serde(default)]
    pub gravatar: GravatarAvatar,
    #[serde(default)]
    pub tmdb: TmdbAvatar,
}

/// The account profile returned once a session is established.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: u64,
    pub username: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub avatar: Avatar,
    #[serde(default)]
    pub iso_639_1: String,
    #[serde(default)]
    pub iso_3166_1: String,
    #[serde(default)]
    pub include_adult: bool,
}

impl Account {
    /// Display name, falling back to the username when unset.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.username
        } else {
            &self.name
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_deserializes_nested_avatar() {
        let account: Account = serde_json::from_str(
            r#"{
                "id": 548,
                "username": "travisbell",
                "name": "Travis Bell",
                "iso_639_1": "en",
                "iso_3166_1": "CA",
                "include_adult": false,
                "avatar": {
                    "gravatar": { "hash": "c9e9fc152ee756a900db85757c29815d" },
                    "tmdb": { "avatar_path": null }
                }
            }"#,
        )
        .unwrap();
        assert_eq!(account.id, 548);
        assert_eq!(account.display_name(), "Travis Bell");
        assert!(account.avatar.tmdb.avatar_path.is_none());
    }

    #[test]
    fn display_name_falls_back_to_username() {
        let account: Account =
            serde_json::from_str(r#"{"id": 1, "username": "guest"}"#).unwrap();
        assert_eq!(account.display_name(), "guest");
    }
}
