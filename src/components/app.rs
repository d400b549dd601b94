// ============================================================================
// APP - Router + AuthProvider
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;
use crate::hooks::AuthProvider;
use crate::views::{AllLocationsView, CurrentLocationView};
use super::{LoginScreen, ProtectedRoute};

#[derive(Debug, Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    AllLocations,
    /// `?user=<tracker_id>`
    #[at("/current")]
    CurrentLocation,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::AllLocations => html! {
            <ProtectedRoute>
                <AllLocationsView />
            </ProtectedRoute>
        },
        Route::CurrentLocation => html! {
            <ProtectedRoute>
                <CurrentLocationView />
            </ProtectedRoute>
        },
        Route::Login => html! { <LoginScreen /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::AllLocations} /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <AuthProvider>
                <Switch<Route> render={switch} />
            </AuthProvider>
        </BrowserRouter>
    }
}
