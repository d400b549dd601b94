pub mod location;
pub mod auth;
pub mod filter;

pub use location::{Location, HistoryResponse};
pub use auth::Credentials;
pub use filter::{LocationFilter, LocationQuery, CurrentLocationQuery};
