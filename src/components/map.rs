use wasm_bindgen::prelude::*;
use yew::prelude::*;
use crate::config::CONFIG;
use crate::models::Location;
use crate::utils::map_ffi::{destroy_location_map, set_marker_click_handler};
use crate::utils::MAP_CONTAINER_ID;
use crate::viewmodels::MapViewModel;
use super::LocationDetails;

#[derive(Properties, PartialEq)]
pub struct MapContainerProps {
    pub locations: Vec<Location>,
}

/// Mapa con un marcador por ubicación; click = selección + overlay de detalle
#[function_component(MapContainer)]
pub fn map_container(props: &MapContainerProps) -> Html {
    // Se guarda el registro clicado, no su índice
    let selected = use_state(|| None::<Location>);
    let shown = use_mut_ref(Vec::<Location>::new);
    let click_handler = use_mut_ref(|| None::<Closure<dyn FnMut(u32)>>);
    let is_empty = props.locations.is_empty();

    // El contenedor solo existe con ubicaciones: init/destroy siguen a is_empty
    {
        let setter = selected.setter();
        let shown = shown.clone();
        use_effect_with(is_empty, move |empty| {
            let active = !*empty;
            if active {
                MapViewModel::initialize_map(MAP_CONTAINER_ID, &CONFIG.map_config);

                let handler = Closure::wrap(Box::new(move |index: u32| {
                    log::debug!("📍 Marcador {} seleccionado", index);
                    setter.set(shown.borrow().get(index as usize).cloned());
                }) as Box<dyn FnMut(u32)>);
                set_marker_click_handler(&handler);
                *click_handler.borrow_mut() = Some(handler);
            }

            move || {
                if active {
                    destroy_location_map();
                }
                *click_handler.borrow_mut() = None;
            }
        });
    }

    // Actualizar marcadores cuando cambia la lista
    {
        use_effect_with(props.locations.clone(), move |locations| {
            *shown.borrow_mut() = locations.clone();
            if !locations.is_empty() {
                MapViewModel::update_map_markers(locations, &CONFIG.map_config);
            }
            || ()
        });
    }

    let current = MapViewModel::selected_index(&props.locations, (*selected).as_ref());

    {
        let selected = selected.clone();
        use_effect_with(current, move |current| {
            MapViewModel::highlight(*current);
            if current.is_none() && selected.is_some() {
                selected.set(None);
            }
            || ()
        });
    }

    if is_empty {
        return html! {
            <div class="map-panel">
                <div class="empty-state map-empty">{"No hay ubicaciones para mostrar en el mapa"}</div>
            </div>
        };
    }

    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_| selected.set(None))
    };

    html! {
        <div class="map-panel">
            <div id={MAP_CONTAINER_ID} class="map"></div>
            if let Some(location) = current.and_then(|i| props.locations.get(i)) {
                <LocationDetails location={location.clone()} on_close={on_close} />
            }
        </div>
    }
}
