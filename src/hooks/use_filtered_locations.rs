// ============================================================================
// FILTER LAYER - Vista filtrada derivada de la lista completa
// ============================================================================
// Funciones puras: la lista filtrada es siempre f(lista, selección).
// Nunca se modifican los registros recibidos.
// ============================================================================

use std::collections::BTreeSet;
use std::rc::Rc;
use yew::prelude::*;
use crate::models::{Location, LocationFilter};

/// Registros cuyo tracker_id/device_id coinciden exactamente con la selección.
/// Un campo de filtro en `None` no restringe. Conserva el orden del backend.
pub fn filter_locations(locations: &[Location], filter: &LocationFilter) -> Vec<Location> {
    locations
        .iter()
        .filter(|loc| matches_filter(loc, filter))
        .cloned()
        .collect()
}

fn matches_filter(location: &Location, filter: &LocationFilter) -> bool {
    let user_ok = match &filter.user {
        Some(user) => location.tracker_id.as_deref() == Some(user.as_str()),
        None => true,
    };
    let device_ok = match &filter.device {
        Some(device) => location.device_id.as_deref() == Some(device.as_str()),
        None => true,
    };
    user_ok && device_ok
}

/// Registro más reciente (timestamp máximo) del usuario.
/// Empate: gana el que aparece más tarde en la lista.
pub fn latest_for_user(locations: &[Location], user: &str) -> Option<Location> {
    locations
        .iter()
        .filter(|loc| loc.tracker_id.as_deref() == Some(user))
        .fold(None::<&Location>, |best, loc| match best {
            Some(b) if b.timestamp > loc.timestamp => Some(b),
            _ => Some(loc),
        })
        .cloned()
}

/// Trackers presentes en la lista, ordenados
pub fn distinct_users(locations: &[Location]) -> Vec<String> {
    locations
        .iter()
        .filter_map(|loc| loc.tracker_id.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Dispositivos presentes, opcionalmente solo los del usuario dado
pub fn distinct_devices(locations: &[Location], user: Option<&str>) -> Vec<String> {
    locations
        .iter()
        .filter(|loc| user.map_or(true, |u| loc.tracker_id.as_deref() == Some(u)))
        .filter_map(|loc| loc.device_id.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Recalcula la lista filtrada solo cuando cambia la lista o la selección.
/// Las dependencias guardan el `Rc`, no una copia de la lista.
#[hook]
pub fn use_filtered_locations(locations: Rc<Vec<Location>>, filter: &LocationFilter) -> Rc<Vec<Location>> {
    use_memo((locations, filter.clone()), |(locations, filter)| {
        filter_locations(locations, filter)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::location::fixtures::ping;

    fn sample() -> Vec<Location> {
        vec![
            ping("alice", Some("phone"), "2024-05-01T10:00:00"),
            ping("bob", Some("tablet"), "2024-05-01T10:05:00"),
            ping("alice", Some("watch"), "2024-05-01T10:10:00"),
            ping("bob", None, "2024-05-01T09:00:00"),
            ping("alice", Some("phone"), "2024-05-01T09:30:00"),
        ]
    }

    #[test]
    fn empty_filter_returns_everything_in_order() {
        let all = sample();
        assert_eq!(filter_locations(&all, &LocationFilter::default()), all);
    }

    #[test]
    fn selecting_alice_yields_only_alice() {
        let filtered = filter_locations(&sample(), &LocationFilter::for_user("alice"));
        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|l| l.tracker_id.as_deref() == Some("alice")));
    }

    #[test]
    fn user_and_device_filters_combine() {
        let filter = LocationFilter {
            user: Some("alice".into()),
            device: Some("phone".into()),
        };
        let filtered = filter_locations(&sample(), &filter);
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|l| l.device_id.as_deref() == Some("phone")));
    }

    #[test]
    fn device_filter_excludes_records_without_device() {
        let filter = LocationFilter {
            user: None,
            device: Some("tablet".into()),
        };
        let filtered = filter_locations(&sample(), &filter);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].tracker_label(), "bob");
    }

    #[test]
    fn filter_matches_set_definition_for_every_selection() {
        let all = sample();
        let users = [None, Some("alice"), Some("bob"), Some("carol")];
        let devices = [None, Some("phone"), Some("tablet"), Some("watch")];
        for u in users {
            for d in devices {
                let filter = LocationFilter {
                    user: u.map(str::to_string),
                    device: d.map(str::to_string),
                };
                let expected: Vec<_> = all
                    .iter()
                    .filter(|r| u.map_or(true, |u| r.tracker_id.as_deref() == Some(u)))
                    .filter(|r| d.map_or(true, |d| r.device_id.as_deref() == Some(d)))
                    .cloned()
                    .collect();
                assert_eq!(filter_locations(&all, &filter), expected, "u={:?} d={:?}", u, d);
            }
        }
    }

    #[test]
    fn latest_for_user_picks_max_timestamp_not_last_element() {
        let latest = latest_for_user(&sample(), "alice").unwrap();
        assert_eq!(latest.formatted_timestamp(), "2024-05-01 10:10:00");
        assert_eq!(latest.device_label(), "watch");
    }

    #[test]
    fn latest_for_unknown_user_is_none() {
        assert!(latest_for_user(&sample(), "carol").is_none());
        assert!(latest_for_user(&[], "alice").is_none());
    }

    #[test]
    fn latest_tie_goes_to_later_element() {
        let list = vec![
            ping("alice", Some("first"), "2024-05-01T10:00:00"),
            ping("alice", Some("second"), "2024-05-01T10:00:00"),
        ];
        assert_eq!(latest_for_user(&list, "alice").unwrap().device_label(), "second");
    }

    #[test]
    fn distinct_users_and_devices_are_sorted() {
        let all = sample();
        assert_eq!(distinct_users(&all), vec!["alice", "bob"]);
        assert_eq!(distinct_devices(&all, None), vec!["phone", "tablet", "watch"]);
        assert_eq!(distinct_devices(&all, Some("alice")), vec!["phone", "watch"]);
    }
}
