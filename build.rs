use std::env;
use std::path::PathBuf;

fn main() {
    for var in ["SPELLCAT_DEFAULT_DATA_DIR", "SPELLCAT_DEFAULT_DICT_DIR"] {
        println!("cargo:rerun-if-env-changed={var}");

        if let Ok(raw) = env::var(var) {
            let candidate = PathBuf::from(raw);
            let canonical = candidate.canonicalize().unwrap_or(candidate);

            println!("cargo:rustc-env={var}={}", canonical.display());
        }
    }
}
