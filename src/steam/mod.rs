//! Steam's Web API.
//!
//! We only need a single endpoint from it: resolving vanity names.

pub use self::{
	api::ApiError,
	vanity::{VanityUrlApi, VanityUrlResponse},
};

pub mod api;
mod vanity;
