pub mod app;
pub mod protected_route;
pub mod login_screen;
pub mod header;
pub mod filter_bar;
pub mod error_banner;
pub mod map;
pub mod location_details;
pub mod location_list;
pub mod location_panels;

pub use app::{App, Route};
pub use protected_route::ProtectedRoute;
pub use login_screen::LoginScreen;
pub use header::Header;
pub use filter_bar::FilterBar;
pub use error_banner::ErrorBanner;
pub use map::MapContainer;
pub use location_details::LocationDetails;
pub use location_list::LocationList;
pub use location_panels::LocationPanels;
