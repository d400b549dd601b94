// ============================================================================
// USE LOCATIONS - Pipeline de refresco (fetch al montar + cada 10 s)
// ============================================================================
// Cada respuesta reemplaza la lista entera (sin merge). Las peticiones
// solapadas no se cancelan; las respuestas llevan número de secuencia y las
// que llegan después de una más nueva se descartan.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;
use yew::prelude::*;
use crate::config::CONFIG;
use crate::models::{Location, LocationQuery};
use crate::services::ApiClient;

#[derive(Debug, Clone, PartialEq)]
pub struct LocationsState {
    /// Compartida con el filtro y los paneles sin copiar la lista
    pub locations: Rc<Vec<Location>>,
    /// Solo true hasta la primera respuesta (éxito o error)
    pub loading: bool,
    pub error: Option<String>,
    pub last_refresh: Option<DateTime<Utc>>,
    last_applied_seq: u64,
}

impl Default for LocationsState {
    fn default() -> Self {
        Self {
            locations: Rc::default(),
            loading: true,
            error: None,
            last_refresh: None,
            last_applied_seq: 0,
        }
    }
}

pub enum LocationsAction {
    /// Nueva consulta: vacía la lista y descarta todo lo emitido hasta `floor`
    Reset { floor: u64 },
    Loaded {
        seq: u64,
        locations: Vec<Location>,
        at: DateTime<Utc>,
    },
    Failed { seq: u64, message: String },
}

impl Reducible for LocationsState {
    type Action = LocationsAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            LocationsAction::Reset { floor } => Rc::new(LocationsState {
                last_applied_seq: floor,
                ..LocationsState::default()
            }),
            LocationsAction::Loaded { seq, locations, at } => {
                if seq <= self.last_applied_seq {
                    log::debug!("⏭️ Respuesta #{} descartada (ya aplicada #{})", seq, self.last_applied_seq);
                    return self;
                }
                Rc::new(LocationsState {
                    locations: Rc::new(locations),
                    loading: false,
                    error: None,
                    last_refresh: Some(at),
                    last_applied_seq: seq,
                })
            }
            LocationsAction::Failed { seq, message } => {
                if seq <= self.last_applied_seq {
                    return self;
                }
                // La lista anterior se conserva
                Rc::new(LocationsState {
                    loading: false,
                    error: Some(message),
                    ..(*self).clone()
                })
            }
        }
    }
}

pub struct UseLocationsHandle {
    pub state: UseReducerHandle<LocationsState>,
    /// Fuerza un fetch fuera de intervalo
    pub refresh: Callback<()>,
}

fn next_seq(counter: &Rc<RefCell<u64>>) -> u64 {
    let mut counter = counter.borrow_mut();
    *counter += 1;
    *counter
}

fn spawn_fetch(
    client: ApiClient,
    query: LocationQuery,
    seq: u64,
    dispatcher: UseReducerDispatcher<LocationsState>,
) {
    wasm_bindgen_futures::spawn_local(async move {
        match client.fetch(&query).await {
            Ok(locations) => {
                if CONFIG.is_logging_enabled() {
                    log::debug!("🔄 #{} {}: {} ubicaciones", seq, query.describe(), locations.len());
                }
                dispatcher.dispatch(LocationsAction::Loaded {
                    seq,
                    locations,
                    at: Utc::now(),
                });
            }
            Err(e) => {
                log::error!("❌ #{} {}: {}", seq, query.describe(), e);
                dispatcher.dispatch(LocationsAction::Failed {
                    seq,
                    message: e.user_message(),
                });
            }
        }
    });
}

#[hook]
pub fn use_locations(client: Option<ApiClient>, query: LocationQuery) -> UseLocationsHandle {
    let state = use_reducer(LocationsState::default);
    let seq_counter = use_mut_ref(|| 0_u64);
    let interval_handle = use_mut_ref(|| None::<Interval>);

    // Fetch inmediato + intervalo; se reinicia si cambian credenciales o consulta
    {
        let dispatcher = state.dispatcher();
        let seq_counter = seq_counter.clone();
        let interval_handle = interval_handle.clone();

        use_effect_with((client.clone(), query.clone()), move |(client_opt, query)| {
            dispatcher.dispatch(LocationsAction::Reset {
                floor: *seq_counter.borrow(),
            });
            *interval_handle.borrow_mut() = None;

            if let Some(client) = client_opt.clone() {
                log::info!(
                    "⏰ Refresco de {} cada {} segundos",
                    query.describe(),
                    CONFIG.refresh_interval_ms / 1000
                );

                spawn_fetch(client.clone(), query.clone(), next_seq(&seq_counter), dispatcher.clone());

                let query = query.clone();
                let seq_counter = seq_counter.clone();
                let interval = Interval::new(CONFIG.refresh_interval_ms, move || {
                    spawn_fetch(client.clone(), query.clone(), next_seq(&seq_counter), dispatcher.clone());
                });
                *interval_handle.borrow_mut() = Some(interval);
            }

            move || {
                // Drop del Interval = cancelación
                *interval_handle.borrow_mut() = None;
            }
        });
    }

    let refresh = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_| {
            if let Some(client) = client.clone() {
                spawn_fetch(client, query.clone(), next_seq(&seq_counter), dispatcher.clone());
            }
        })
    };

    UseLocationsHandle { state, refresh }
}
