// ============================================================================
// CURRENT LOCATION VIEW - Último ping de un usuario (?user=...)
// ============================================================================

use yew::prelude::*;
use yew_router::prelude::*;
use crate::components::{ErrorBanner, FilterBar, Header, LocationDetails, MapContainer, Route};
use crate::hooks::{distinct_users, latest_for_user, use_auth, use_locations};
use crate::models::{CurrentLocationQuery, LocationFilter, LocationQuery};

#[function_component(CurrentLocationView)]
pub fn current_location_view() -> Html {
    let client = use_auth().and_then(|auth| auth.state.client());
    let navigator = use_navigator();
    let selected_user = use_location()
        .and_then(|location| location.query::<CurrentLocationQuery>().ok())
        .and_then(|query| query.user)
        .filter(|user| !user.is_empty());

    let handle = use_locations(client, LocationQuery::All);
    let state = &*handle.state;

    let users = distinct_users(&state.locations);
    let latest = selected_user
        .as_deref()
        .and_then(|user| latest_for_user(&state.locations, user));

    // La selección vive en la URL para sobrevivir a un reload
    let on_filter = Callback::from(move |next: LocationFilter| {
        if let Some(navigator) = &navigator {
            let query = CurrentLocationQuery { user: next.user };
            if let Err(e) = navigator.push_with_query(&Route::CurrentLocation, &query) {
                log::error!("❌ Error actualizando la URL: {:?}", e);
            }
        }
    });

    let filter = LocationFilter {
        user: selected_user.clone(),
        device: None,
    };

    let body = match (&selected_user, latest) {
        _ if state.loading => html! {
            <div class="loading">{"Cargando ubicaciones..."}</div>
        },
        (None, _) => html! {
            <div class="empty-state">{"Selecciona un usuario para ver su ubicación actual"}</div>
        },
        (Some(user), None) => html! {
            <div class="empty-state">{format!("No hay ubicaciones para {}", user)}</div>
        },
        (Some(_), Some(location)) => html! {
            <div class="panels">
                <MapContainer locations={vec![location.clone()]} />
                <LocationDetails location={location} />
            </div>
        },
    };

    html! {
        <div class="app-container">
            <Header />
            <main class="view current-location">
                <div class="toolbar">
                    <FilterBar
                        users={users}
                        filter={filter}
                        on_change={on_filter}
                        show_devices={false}
                    />
                </div>
                <ErrorBanner message={state.error.clone()} />
                {body}
            </main>
        </div>
    }
}
