/// Centralized error mapping for commands.
///
/// Single upgrade path for future error enhancements (e.g. error codes).
pub fn map_err(err: anyhow::Error) -> String {
    err.to_string()
}
