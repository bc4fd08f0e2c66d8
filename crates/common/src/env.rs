//! Environment helpers
//!
//! Presence probes for configuration variables reported by the
//! diagnostics endpoint. Values are reported, never validated.

/// Render presence of an environment variable as a status flag.
pub fn presence(var: &str) -> String {
    match std::env::var(var) {
        Ok(v) if !v.is_empty() => "✅ Set".to_string(),
        _ => "❌ Not Set".to_string(),
    }
}
