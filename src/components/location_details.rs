use yew::prelude::*;
use crate::models::Location;

#[derive(Properties, PartialEq)]
pub struct LocationDetailsProps {
    pub location: Location,
    /// Sin callback no hay botón de cerrar (tarjeta fija)
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
}

fn detail_row(label: &'static str, value: Option<String>) -> Html {
    match value {
        Some(value) => html! {
            <div class="detail-section">
                <div class="detail-label">{label}</div>
                <div class="detail-value">{value}</div>
            </div>
        },
        None => html! {},
    }
}

#[function_component(LocationDetails)]
pub fn location_details(props: &LocationDetailsProps) -> Html {
    let loc = &props.location;

    html! {
        <div class="location-details">
            <div class="details-header">
                <h2>{format!("📍 {}", loc.tracker_label())}</h2>
                if let Some(on_close) = props.on_close.clone() {
                    <button class="btn-close" onclick={on_close.reform(|_: MouseEvent| ())}>{"✕"}</button>
                }
            </div>
            <div class="details-body">
                {detail_row("Dispositivo", Some(loc.device_label().to_string()))}
                {detail_row("Fecha", Some(loc.formatted_timestamp()))}
                {detail_row("Coordenadas", Some(format!("{:.6}, {:.6}", loc.latitude, loc.longitude)))}
                {detail_row("Altitud", loc.altitude.map(|a| format!("{:.0} m", a)))}
                {detail_row("Precisión", loc.accuracy.map(|a| format!("± {:.0} m", a)))}
                {detail_row("Batería", loc.battery.map(|b| format!("{}%", b)))}
                {detail_row("Conexión", loc.connection_label().map(str::to_string))}
            </div>
        </div>
    }
}
