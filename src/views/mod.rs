pub mod all_locations;
pub mod current_location;

pub use all_locations::AllLocationsView;
pub use current_location::CurrentLocationView;
