use std::env;
use std::fs;
use std::path::Path;

// Variables que lee `AppConfig::from_env()` vía option_env!
const CONFIG_KEYS: &[&str] = &[
    "BACKEND_URL",
    "AUTH_TOKEN_KEY",
    "NOTIFICATION_TTL_MS",
    "ENABLE_LOGGING",
];

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    for key in CONFIG_KEYS {
        println!("cargo:rerun-if-env-changed={}", key);
    }

    // Cargar variables de entorno desde .env si existe
    let env_file = Path::new(".env");
    if !env_file.exists() {
        return;
    }
    println!("cargo:rerun-if-changed=.env");

    let Ok(contents) = fs::read_to_string(env_file) else {
        println!("cargo:warning=.env exists but could not be read; using defaults");
        return;
    };

    for line in contents.lines() {
        // Ignorar comentarios y líneas vacías
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if !CONFIG_KEYS.contains(&key) {
            continue;
        }

        // El entorno real tiene prioridad sobre el .env
        if env::var(key).is_err() {
            println!("cargo:rustc-env={}={}", key, value.trim().trim_matches('"'));
        }
    }
}
