use std::env;
use std::fs;
use std::path::Path;

fn main() {
    // Variables de entorno desde .env (si existe) -> option_env! en config.rs
    let env_file = Path::new(".env");

    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // El entorno del proceso tiene prioridad sobre .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Using default dashboard settings (see .env.example).");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
    for key in [
        "BACKEND_URL",
        "REFRESH_INTERVAL_MS",
        "LIST_LIMIT",
        "ENABLE_LOGGING",
        "DEFAULT_MAP_CENTER_LAT",
        "DEFAULT_MAP_CENTER_LNG",
        "DEFAULT_MAP_ZOOM",
    ] {
        println!("cargo:rerun-if-env-changed={}", key);
    }
}
