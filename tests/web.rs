//! Tests de navegador: `wasm-pack test --headless --firefox`
#![cfg(target_arch = "wasm32")]

use location_dashboard::models::Credentials;
use location_dashboard::services::{clear_credentials, load_credentials, store_credentials};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn credentials_round_trip_through_local_storage() {
    clear_credentials();
    assert!(load_credentials().is_none());

    let creds = Credentials::new("alice", "secret");
    store_credentials(&creds).expect("localStorage available");
    assert_eq!(load_credentials(), Some(creds));
}

#[wasm_bindgen_test]
fn logout_clears_stored_credentials() {
    store_credentials(&Credentials::new("bob", "pw")).expect("localStorage available");
    clear_credentials();
    assert!(load_credentials().is_none());
}
