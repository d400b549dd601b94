use yew::prelude::*;
use crate::config::CONFIG;
use crate::models::Location;

/// Primeras `limit` entradas, en el orden del backend. Límite solo visual.
pub fn visible_entries(locations: &[Location], limit: usize) -> &[Location] {
    &locations[..locations.len().min(limit)]
}

#[derive(Properties, PartialEq)]
pub struct LocationListProps {
    pub locations: Vec<Location>,
    #[prop_or(CONFIG.list_limit)]
    pub limit: usize,
}

#[function_component(LocationList)]
pub fn location_list(props: &LocationListProps) -> Html {
    if props.locations.is_empty() {
        return html! {
            <div class="location-list">
                <div class="empty-state list-empty">{"No hay ubicaciones"}</div>
            </div>
        };
    }

    let entries = visible_entries(&props.locations, props.limit);

    html! {
        <div class="location-list">
            <div class="list-header">
                {format!("Mostrando {} de {}", entries.len(), props.locations.len())}
            </div>
            <ul class="list-scroll">
                { for entries.iter().map(|loc| html! {
                    <li class="location-item">
                        <span class="item-user">{loc.tracker_label().to_string()}</span>
                        <span class="item-device">{loc.device_label().to_string()}</span>
                        <span class="item-coords">
                            {format!("{:.5}, {:.5}", loc.latitude, loc.longitude)}
                        </span>
                        <span class="item-time">{loc.formatted_timestamp()}</span>
                        if let Some(battery) = loc.battery {
                            <span class="item-battery">{format!("🔋 {}%", battery)}</span>
                        }
                    </li>
                }) }
            </ul>
        </div>
    }
}
