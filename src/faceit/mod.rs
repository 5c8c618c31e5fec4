//! FACEIT's Data API.

pub use self::{
	api::{ApiError, FaceitApi},
	models::{GameProfile, MatchHistory, MatchResults, MatchSummary, Page, Player, PlayerId, PlayerStats},
};

pub mod api;
mod models;
