use std::rc::Rc;
use yew::prelude::*;
use crate::models::Location;
use super::{ErrorBanner, LocationList, MapContainer};

#[derive(Properties, PartialEq)]
pub struct LocationPanelsProps {
    pub loading: bool,
    pub error: Option<String>,
    pub locations: Rc<Vec<Location>>,
}

/// Banner de error + mapa y lista. Un fallo no vacía los paneles:
/// se siguen pintando las últimas ubicaciones recibidas.
#[function_component(LocationPanels)]
pub fn location_panels(props: &LocationPanelsProps) -> Html {
    html! {
        <>
            <ErrorBanner message={props.error.clone()} />
            if props.loading {
                <div class="loading">{"Cargando ubicaciones..."}</div>
            } else {
                <div class="panels">
                    <MapContainer locations={(*props.locations).clone()} />
                    <LocationList locations={(*props.locations).clone()} />
                </div>
            }
        </>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::hooks::use_locations::LocationsAction;
    use crate::hooks::LocationsState;
    use crate::models::location::fixtures::ping;
    use crate::utils::MAP_CONTAINER_ID;
    use chrono::Utc;
    use yew::ServerRenderer;

    async fn render(state: &LocationsState) -> String {
        let loading = state.loading;
        let error = state.error.clone();
        let locations = (*state.locations).clone();
        ServerRenderer::<LocationPanels>::with_props(move || LocationPanelsProps {
            loading,
            error,
            locations: Rc::new(locations),
        })
        .render()
        .await
    }

    fn loaded(locations: Vec<Location>) -> Rc<LocationsState> {
        Rc::new(LocationsState::default()).reduce(LocationsAction::Loaded {
            seq: 1,
            locations,
            at: Utc::now(),
        })
    }

    #[tokio::test]
    async fn empty_backend_list_shows_both_empty_states() {
        let html = render(&loaded(Vec::new())).await;

        assert!(html.contains("No hay ubicaciones para mostrar en el mapa"));
        assert!(html.contains("list-empty"));
        assert!(!html.contains(MAP_CONTAINER_ID));
        assert!(!html.contains("error-banner"));
    }

    #[tokio::test]
    async fn failed_refresh_keeps_map_and_list_and_shows_banner() {
        let state = loaded(vec![
            ping("alice", Some("phone"), "2024-05-01T10:00:00"),
            ping("bob", None, "2024-05-01T10:05:00"),
        ])
        .reduce(LocationsAction::Failed {
            seq: 2,
            message: "No se pudieron cargar las ubicaciones".into(),
        });

        let html = render(&state).await;

        assert!(html.contains("error-banner"));
        assert!(html.contains("No se pudieron cargar las ubicaciones"));
        assert!(html.contains(MAP_CONTAINER_ID));
        assert_eq!(html.matches("class=\"location-item\"").count(), 2);
        assert!(!html.contains("map-empty"));
    }

    #[tokio::test]
    async fn spinner_until_first_response() {
        let html = render(&LocationsState::default()).await;

        assert!(html.contains("Cargando ubicaciones..."));
        assert!(!html.contains("map-panel"));
    }
}
