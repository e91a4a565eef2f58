//! Build script for my-first-app
//!
//! The persistent store migrations are embedded with `sqlx::migrate!`, so the
//! crate has to be rebuilt whenever a migration file is added or edited.

use std::fs;
use std::path::Path;

fn main() {
    println!("cargo:rerun-if-changed=migrations");

    let migrations_dir = Path::new("migrations");
    if !migrations_dir.exists() {
        println!("cargo:warning=migrations directory not found, the persistent store will be empty");
        return;
    }

    // Track every migration individually so renames are picked up too
    if let Ok(entries) = fs::read_dir(migrations_dir) {
        for entry in entries.flatten() {
            let path = entry.path();
            if path.extension().map(|ext| ext == "sql").unwrap_or(false) {
                println!("cargo:rerun-if-changed={}", path.display());
            }
        }
    }
}
