//! Display name allocation for joining clients.
//!
//! A requested name is used as-is when free. Otherwise numeric suffixes
//! `1..=99` are probed, and past that a time-derived suffix is used.

/// Base name substituted for an empty request
pub const DEFAULT_BASE_NAME: &str = "Guest";

/// Highest numeric suffix probed before falling back
pub const MAX_NUMERIC_SUFFIX: u32 = 99;

/// The fallback suffix is seeded with `now_millis % FALLBACK_MODULUS`
pub const FALLBACK_MODULUS: i64 = 9999;

/// Derive a display name that `is_taken` does not report as in use.
///
/// Must be called while the caller holds exclusive access to whatever
/// `is_taken` inspects, up to the insertion of the returned name.
///
/// # Arguments
///
/// * `requested` - The name the client asked for (may be empty)
/// * `is_taken` - Returns `true` if a name is already registered
/// * `now_millis` - Current time, used to seed the fallback suffix
pub fn assign_name(requested: &str, is_taken: impl Fn(&str) -> bool, now_millis: i64) -> String {
    let base = if requested.is_empty() {
        DEFAULT_BASE_NAME
    } else {
        requested
    };

    if !is_taken(base) {
        return base.to_string();
    }

    for suffix in 1..=MAX_NUMERIC_SUFFIX {
        let candidate = format!("{}{}", base, suffix);
        if !is_taken(&candidate) {
            return candidate;
        }
    }

    // Each probe that fails is a distinct registered name, so this ends
    // after at most registry-size + 1 probes.
    let mut suffix = now_millis.rem_euclid(FALLBACK_MODULUS);
    loop {
        let candidate = format!("{}_{}", base, suffix);
        if !is_taken(&candidate) {
            return candidate;
        }
        suffix += 1;
    }
}
