// ============================================================================
// ALL LOCATIONS VIEW - Mapa + lista de la lista filtrada
// ============================================================================

use chrono::NaiveDate;
use yew::prelude::*;
use crate::components::{FilterBar, Header, LocationPanels};
use crate::hooks::{
    distinct_devices, distinct_users, use_auth, use_filtered_locations, use_locations,
};
use crate::models::{LocationFilter, LocationQuery};

/// Qué ruta de historial consultar: dispositivo (si se pidió su historial),
/// si no la fecha elegida, si no todo.
pub fn build_query(date: Option<NaiveDate>, device: Option<&str>, device_history: bool) -> LocationQuery {
    match (device_history, device, date) {
        (true, Some(device), _) => LocationQuery::ByDevice(device.to_string()),
        (_, _, Some(date)) => LocationQuery::ByDate(date),
        _ => LocationQuery::All,
    }
}

#[function_component(AllLocationsView)]
pub fn all_locations_view() -> Html {
    let client = use_auth().and_then(|auth| auth.state.client());
    let filter = use_state(LocationFilter::default);
    let date = use_state(|| None::<NaiveDate>);
    let device_history = use_state(|| false);

    let query = build_query(*date, filter.device.as_deref(), *device_history);
    let handle = use_locations(client, query.clone());
    let state = &*handle.state;
    let filtered = use_filtered_locations(state.locations.clone(), &filter);

    let users = distinct_users(&state.locations);
    let devices = distinct_devices(&state.locations, filter.user.as_deref());

    let on_filter = {
        let filter = filter.clone();
        let device_history = device_history.clone();
        Callback::from(move |next: LocationFilter| {
            if next.device.is_none() {
                device_history.set(false);
            }
            filter.set(next);
        })
    };

    let on_date = {
        let date = date.clone();
        Callback::from(move |next: Option<NaiveDate>| date.set(next))
    };

    let on_device_history = {
        let device_history = device_history.clone();
        Callback::from(move |enabled: bool| device_history.set(enabled))
    };

    let on_refresh = handle.refresh.reform(|_: MouseEvent| ());

    html! {
        <div class="app-container">
            <Header />
            <main class="view all-locations">
                <div class="toolbar">
                    <FilterBar
                        users={users}
                        devices={devices}
                        filter={(*filter).clone()}
                        on_change={on_filter}
                        date={*date}
                        on_date_change={on_date}
                        device_history={*device_history}
                        on_device_history={on_device_history}
                    />
                    <div class="refresh-status">
                        <span class="query-label">{query.describe()}</span>
                        if let Some(at) = state.last_refresh {
                            <span class="last-refresh">
                                {format!("Actualizado {}", at.format("%H:%M:%S"))}
                            </span>
                        }
                        <button class="btn-refresh" onclick={on_refresh}>{"🔄"}</button>
                    </div>
                </div>

                <LocationPanels
                    loading={state.loading}
                    error={state.error.clone()}
                    locations={filtered}
                />
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_defaults_to_full_history() {
        assert_eq!(build_query(None, None, false), LocationQuery::All);
        assert_eq!(build_query(None, Some("phone"), false), LocationQuery::All);
    }

    #[test]
    fn date_selects_history_by_date() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(build_query(Some(day), Some("phone"), false), LocationQuery::ByDate(day));
    }

    #[test]
    fn device_history_takes_precedence_when_device_selected() {
        let day = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert_eq!(
            build_query(Some(day), Some("phone"), true),
            LocationQuery::ByDevice("phone".into())
        );
        assert_eq!(build_query(Some(day), None, true), LocationQuery::ByDate(day));
    }
}
