//! Animation declaration builder

/// Join every animation name with the shared duration and timing function.
///
/// `"scale-up fade-in"`, `"200"`, `"ease-out"` becomes
/// `"scale-up 200ms ease-out, fade-in 200ms ease-out"`.
pub fn build_animation_value(names: &str, duration_ms: &str, timing_function: &str) -> String {
    names
        .split_whitespace()
        .map(|name| format!("{name} {duration_ms}ms {timing_function}"))
        .collect::<Vec<_>>()
        .join(", ")
}
