use yew::prelude::*;
use yew_router::prelude::*;
use crate::hooks::{use_auth, AuthState};
use super::Route;

/// A dónde redirigir una vista protegida (None = se puede mostrar)
pub fn redirect_target(auth: Option<&AuthState>) -> Option<Route> {
    match auth {
        Some(state) if state.is_authenticated() => None,
        _ => Some(Route::Login),
    }
}

#[derive(Properties, PartialEq)]
pub struct ProtectedRouteProps {
    pub children: Children,
}

#[function_component(ProtectedRoute)]
pub fn protected_route(props: &ProtectedRouteProps) -> Html {
    let auth = use_auth();

    match redirect_target(auth.as_ref().map(|a| &*a.state)) {
        Some(route) => html! { <Redirect<Route> to={route} /> },
        None => html! { <>{props.children.clone()}</> },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;
    use crate::hooks::use_auth::AuthAction;
    use crate::models::Credentials;

    #[test]
    fn unauthenticated_or_missing_provider_redirects_to_login() {
        assert_eq!(redirect_target(None), Some(Route::Login));
        assert_eq!(redirect_target(Some(&AuthState::default())), Some(Route::Login));
    }

    #[test]
    fn logout_makes_protected_views_redirect() {
        let state = Rc::new(AuthState::default())
            .reduce(AuthAction::Login(Credentials::new("alice", "secret")));
        assert_eq!(redirect_target(Some(&state)), None);

        let state = state.reduce(AuthAction::Logout);
        assert_eq!(redirect_target(Some(&state)), Some(Route::Login));
    }
}
