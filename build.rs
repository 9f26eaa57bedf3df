use std::time::{SystemTime, UNIX_EPOCH};

// Records the build time as `HH:MM:SS` (UTC) for the compile-time PCG seed.
// `MAZEGEN_BUILD_TIME` pins it for reproducible builds.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=MAZEGEN_BUILD_TIME");

    let stamp = match std::env::var("MAZEGEN_BUILD_TIME") {
        Ok(value) if !value.is_empty() => value,
        _ => {
            let secs = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_secs())
                .unwrap_or(0);
            let of_day = secs % 86_400;
            format!(
                "{:02}:{:02}:{:02}",
                of_day / 3600,
                (of_day / 60) % 60,
                of_day % 60
            )
        }
    };
    println!("cargo:rustc-env=MAZEGEN_BUILD_TIME={stamp}");
}
