// ============================================================================
// AUTH CONTEXT - Credenciales de la sesión compartidas vía ContextProvider
// ============================================================================
// Dos estados: sin credenciales / con credenciales. El login acepta lo que
// se escriba; el backend confirma (o no) en la siguiente llamada.
// ============================================================================

use std::rc::Rc;
use yew::prelude::*;
use crate::models::Credentials;
use crate::services::{clear_credentials, load_credentials, store_credentials, ApiClient};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub credentials: Option<Credentials>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.credentials.is_some()
    }

    pub fn username(&self) -> Option<&str> {
        self.credentials.as_ref().map(|c| c.username.as_str())
    }

    /// Cliente con las credenciales actuales (None sin sesión)
    pub fn client(&self) -> Option<ApiClient> {
        self.credentials.clone().map(ApiClient::new)
    }
}

pub enum AuthAction {
    Login(Credentials),
    Logout,
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::Login(credentials) => Rc::new(AuthState {
                credentials: Some(credentials),
            }),
            AuthAction::Logout => {
                if self.credentials.is_none() {
                    return self;
                }
                Rc::new(AuthState { credentials: None })
            }
        }
    }
}

#[derive(Clone, PartialEq)]
pub struct UseAuthHandle {
    pub state: UseReducerHandle<AuthState>,
    pub login: Callback<Credentials>,
    pub logout: Callback<()>,
}

/// Provider que envuelve el router y expone la sesión
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    // Lectura síncrona: ProtectedRoute decide en el primer render
    let state = use_reducer(|| {
        let credentials = load_credentials();
        if let Some(ref creds) = credentials {
            log::info!("✅ Credenciales encontradas en storage: {}", creds.username);
        }
        AuthState { credentials }
    });

    let login = {
        let state = state.clone();
        Callback::from(move |credentials: Credentials| {
            if let Err(e) = store_credentials(&credentials) {
                log::error!("❌ No se pudieron guardar las credenciales: {}", e);
            }
            log::info!("🔐 Login: {}", credentials.username);
            state.dispatch(AuthAction::Login(credentials));
        })
    };

    let logout = {
        let state = state.clone();
        Callback::from(move |_| {
            clear_credentials();
            log::info!("👋 Logout");
            state.dispatch(AuthAction::Logout);
        })
    };

    let handle = UseAuthHandle { state, login, logout };

    html! {
        <ContextProvider<UseAuthHandle> context={handle}>
            {props.children.clone()}
        </ContextProvider<UseAuthHandle>>
    }
}

#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// `None` fuera de un `AuthProvider`; se trata como sin sesión
#[hook]
pub fn use_auth() -> Option<UseAuthHandle> {
    use_context::<UseAuthHandle>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_then_logout_returns_to_unauthenticated() {
        let state = Rc::new(AuthState::default());
        assert!(!state.is_authenticated());

        let state = state.reduce(AuthAction::Login(Credentials::new("alice", "secret")));
        assert!(state.is_authenticated());
        assert_eq!(state.username(), Some("alice"));
        assert!(state.client().is_some());

        let state = state.reduce(AuthAction::Logout);
        assert!(!state.is_authenticated());
        assert!(state.client().is_none());
    }

    #[test]
    fn login_accepts_any_credentials() {
        let state = Rc::new(AuthState::default()).reduce(AuthAction::Login(Credentials::new("x", "")));
        assert!(state.is_authenticated());
    }

    #[test]
    fn logout_when_already_logged_out_keeps_same_state() {
        let state = Rc::new(AuthState::default());
        let next = state.clone().reduce(AuthAction::Logout);
        assert!(Rc::ptr_eq(&state, &next));
    }
}
