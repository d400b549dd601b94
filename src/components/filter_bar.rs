use chrono::NaiveDate;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;
use crate::models::LocationFilter;

/// Valor de un <select>: "" significa "todos"
pub fn selection_from_value(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

pub fn date_from_value(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

/// Cambiar de usuario borra el dispositivo elegido
pub fn with_user(filter: &LocationFilter, user: Option<String>) -> LocationFilter {
    if filter.user == user {
        return filter.clone();
    }
    LocationFilter { user, device: None }
}

#[derive(Properties, PartialEq)]
pub struct FilterBarProps {
    pub users: Vec<String>,
    #[prop_or_default]
    pub devices: Vec<String>,
    pub filter: LocationFilter,
    pub on_change: Callback<LocationFilter>,
    #[prop_or(true)]
    pub show_devices: bool,
    /// Sin callback no se muestra el selector de fecha
    #[prop_or_default]
    pub date: Option<NaiveDate>,
    #[prop_or_default]
    pub on_date_change: Option<Callback<Option<NaiveDate>>>,
    #[prop_or_default]
    pub device_history: bool,
    #[prop_or_default]
    pub on_device_history: Option<Callback<bool>>,
}

#[function_component(FilterBar)]
pub fn filter_bar(props: &FilterBarProps) -> Html {
    let on_user = {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            on_change.emit(with_user(&filter, selection_from_value(&value)));
        })
    };

    let on_device = {
        let filter = props.filter.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: Event| {
            let value = e.target_unchecked_into::<HtmlSelectElement>().value();
            on_change.emit(LocationFilter {
                user: filter.user.clone(),
                device: selection_from_value(&value),
            });
        })
    };

    let selected_user = props.filter.user.clone().unwrap_or_default();
    let selected_device = props.filter.device.clone().unwrap_or_default();

    html! {
        <div class="filter-bar">
            <label class="filter">
                <span>{"Usuario"}</span>
                <select onchange={on_user}>
                    <option value="" selected={selected_user.is_empty()}>{"Todos"}</option>
                    { for props.users.iter().map(|user| html! {
                        <option value={user.clone()} selected={*user == selected_user}>{user.clone()}</option>
                    }) }
                </select>
            </label>

            if props.show_devices {
                <label class="filter">
                    <span>{"Dispositivo"}</span>
                    <select onchange={on_device}>
                        <option value="" selected={selected_device.is_empty()}>{"Todos"}</option>
                        { for props.devices.iter().map(|device| html! {
                            <option value={device.clone()} selected={*device == selected_device}>{device.clone()}</option>
                        }) }
                    </select>
                </label>
            }

            if let Some(on_date_change) = props.on_date_change.clone() {
                <label class="filter">
                    <span>{"Fecha"}</span>
                    <input
                        type="date"
                        value={props.date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()}
                        onchange={Callback::from(move |e: Event| {
                            let value = e.target_unchecked_into::<HtmlInputElement>().value();
                            on_date_change.emit(date_from_value(&value));
                        })}
                    />
                </label>
            }

            if let Some(on_device_history) = props.on_device_history.clone() {
                <label class="filter filter-toggle">
                    <input
                        type="checkbox"
                        checked={props.device_history}
                        disabled={props.filter.device.is_none()}
                        onchange={Callback::from(move |e: Event| {
                            on_device_history.emit(e.target_unchecked_into::<HtmlInputElement>().checked());
                        })}
                    />
                    <span>{"Historial del dispositivo"}</span>
                </label>
            }
        </div>
    }
}
