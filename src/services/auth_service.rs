use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;
use crate::models::Credentials;
use crate::utils::{load_from_storage, remove_from_storage, save_to_storage, STORAGE_KEY_CREDENTIALS};

/// Cabecera `Authorization` para las llamadas al backend
pub fn basic_auth_header(credentials: &Credentials) -> String {
    let raw = format!("{}:{}", credentials.username, credentials.password);
    format!("Basic {}", B64.encode(raw))
}

pub fn load_credentials() -> Option<Credentials> {
    load_from_storage::<Credentials>(STORAGE_KEY_CREDENTIALS)
}

pub fn store_credentials(credentials: &Credentials) -> Result<(), String> {
    save_to_storage(STORAGE_KEY_CREDENTIALS, credentials)
}

pub fn clear_credentials() {
    remove_from_storage(STORAGE_KEY_CREDENTIALS);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_header_encodes_username_and_password() {
        let header = basic_auth_header(&Credentials::new("alice", "secret"));
        assert_eq!(header, "Basic YWxpY2U6c2VjcmV0");
    }

    #[test]
    fn basic_header_keeps_colons_in_password() {
        let header = basic_auth_header(&Credentials::new("bob", "a:b"));
        let encoded = header.trim_start_matches("Basic ");
        assert_eq!(B64.decode(encoded).unwrap(), b"bob:a:b");
    }
}
