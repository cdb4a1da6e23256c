//! Core data model definitions shared across Marquee crates.

pub mod account;
pub mod auth;
pub mod credits;
pub mod image;
pub mod list;
pub mod movie;
pub mod person;
pub mod request;
pub mod video;

// Intentionally curated re-exports for downstream consumers.
pub use account::{Account, Avatar, GravatarAvatar, TmdbAvatar};
pub use auth::{GuestSessionCreated, RequestToken, SessionCreated, SessionStatus};
pub use credits::{CastMember, Credits};
pub use image::{BackdropSize, ImageUrls, PosterSize, ProfileSize};
pub use list::{Identified, Page};
pub use movie::{Genre, GenreList, Movie, MovieDetails, Section};
pub use person::{Person, PersonCredits};
pub use request::{DiscoverRequest, ListRequest, MediaStateRequest, SearchRequest};
pub use video::{Video, VideoList};
