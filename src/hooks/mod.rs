pub mod use_auth;
pub mod use_locations;
pub mod use_filtered_locations;

pub use use_auth::{use_auth, AuthProvider, AuthState, UseAuthHandle};
pub use use_locations::{use_locations, LocationsState, UseLocationsHandle};
pub use use_filtered_locations::{
    distinct_devices, distinct_users, filter_locations, latest_for_user, use_filtered_locations,
};
