use yew::prelude::*;
use yew_router::prelude::*;
use web_sys::HtmlInputElement;
use crate::hooks::use_auth;
use crate::models::Credentials;
use super::Route;

/// Valida el formulario; el backend decide si las credenciales sirven
pub fn validate_login(username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Por favor, completa todos los campos");
    }
    Ok(Credentials::new(username, password))
}

#[function_component(LoginScreen)]
pub fn login_screen() -> Html {
    let auth = use_auth();
    let username_ref = use_node_ref();
    let password_ref = use_node_ref();
    let form_error = use_state(|| None::<&'static str>);

    let on_submit = {
        let username_ref = username_ref.clone();
        let password_ref = password_ref.clone();
        let form_error = form_error.clone();
        let on_login = auth.as_ref().map(|a| a.login.clone());

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            if let (Some(username_input), Some(password_input)) = (
                username_ref.cast::<HtmlInputElement>(),
                password_ref.cast::<HtmlInputElement>(),
            ) {
                match validate_login(&username_input.value(), &password_input.value()) {
                    Ok(credentials) => {
                        form_error.set(None);
                        if let Some(on_login) = &on_login {
                            on_login.emit(credentials);
                        }
                    }
                    Err(msg) => form_error.set(Some(msg)),
                }
            }
        })
    };

    if auth.as_ref().map_or(false, |a| a.state.is_authenticated()) {
        return html! { <Redirect<Route> to={Route::AllLocations} /> };
    }

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="logo-icon">{"📍"}</div>
                    <h1>{"Location Dashboard"}</h1>
                    <p>{"Historial de ubicaciones"}</p>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="username">{"Usuario"}</label>
                        <input
                            type="text"
                            id="username"
                            name="username"
                            autocomplete="username"
                            ref={username_ref}
                            required=true
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Contraseña"}</label>
                        <input
                            type="password"
                            id="password"
                            name="password"
                            autocomplete="current-password"
                            ref={password_ref}
                            required=true
                        />
                    </div>

                    if let Some(msg) = *form_error {
                        <div class="form-error">{msg}</div>
                    }

                    <button type="submit" class="btn-login">{"Iniciar sesión"}</button>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_rejected() {
        assert!(validate_login("", "secret").is_err());
        assert!(validate_login("   ", "secret").is_err());
        assert!(validate_login("alice", "").is_err());
    }

    #[test]
    fn username_is_trimmed_password_is_not() {
        let creds = validate_login("  alice ", " pw ").unwrap();
        assert_eq!(creds.username, "alice");
        assert_eq!(creds.password, " pw ");
    }
}
