use yew::prelude::*;
use yew_router::prelude::*;
use crate::hooks::use_auth;
use super::Route;

#[function_component(Header)]
pub fn header() -> Html {
    let auth = use_auth();
    let route = use_route::<Route>();

    let username = auth
        .as_ref()
        .and_then(|a| a.state.username().map(str::to_string))
        .unwrap_or_default();

    let on_logout = {
        let logout = auth.as_ref().map(|a| a.logout.clone());
        Callback::from(move |_: MouseEvent| {
            if let Some(logout) = &logout {
                logout.emit(());
            }
        })
    };

    let nav_class = |target: Route| {
        if route.as_ref() == Some(&target) {
            classes!("nav-link", "active")
        } else {
            classes!("nav-link")
        }
    };

    html! {
        <header class="app-header">
            <div class="app-title">{"📍 Location Dashboard"}</div>
            <nav class="app-nav">
                <Link<Route> to={Route::AllLocations} classes={nav_class(Route::AllLocations)}>
                    {"Todas las ubicaciones"}
                </Link<Route>>
                <Link<Route> to={Route::CurrentLocation} classes={nav_class(Route::CurrentLocation)}>
                    {"Ubicación actual"}
                </Link<Route>>
            </nav>
            <div class="app-user">
                <span class="username">{username}</span>
                <button class="btn-logout" onclick={on_logout}>{"Cerrar sesión"}</button>
            </div>
        </header>
    }
}
