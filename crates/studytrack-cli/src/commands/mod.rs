pub mod config;
pub mod home;
pub mod nav;
pub mod profile;
pub mod progress;
pub mod study;

/// Print any serializable view as pretty JSON on stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> Result<(), Box<dyn std::error::Error>> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
