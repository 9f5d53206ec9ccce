//! # Environment Variable Utilities
//!
//! Helpers for reading environment variables with numeric parsing and
//! fallback defaults, used by the configuration loaders.
//!
//! # Examples
//! ```rust,no_run
//! use whitecrop::config::env::{read_u32, read_u64};
//!
//! let port = read_u32("PORT", 8000);
//! let retention = read_u64("RETENTION_SECS", 180);
//! ```

/// Reads a `u32` from an environment variable, returning the default when
/// the variable is missing or unparsable.
pub fn read_u32(name: &str, default: u32) -> u32 {
    read_u32_from(|k| std::env::var(k).ok(), name, default)
}

/// Reads a `u32` using a custom provider function.
///
/// Useful for testing without touching the process environment.
///
/// # Example
/// ```rust
/// use whitecrop::config::env::read_u32_from;
///
/// assert_eq!(read_u32_from(|_| Some(" 42 ".into()), "X", 7), 42);
/// assert_eq!(read_u32_from(|_| None, "X", 7), 7);
/// ```
pub fn read_u32_from<F>(provider: F, name: &str, default: u32) -> u32
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .and_then(|s| s.trim().parse::<u32>().ok())
        .unwrap_or(default)
}

/// Reads a `u64` from an environment variable, returning the default when
/// the variable is missing or unparsable.
pub fn read_u64(name: &str, default: u64) -> u64 {
    read_u64_from(|k| std::env::var(k).ok(), name, default)
}

/// Reads a `u64` using a custom provider function.
pub fn read_u64_from<F>(provider: F, name: &str, default: u64) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    provider(name)
        .and_then(|s| s.trim().parse::<u64>().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_u32_parses_valid_numbers() {
        assert_eq!(read_u32_from(|_| Some("42".into()), "X", 10), 42);
        assert_eq!(read_u32_from(|_| Some("  8000\n".into()), "X", 10), 8000);
    }

    #[test]
    fn read_u32_falls_back_on_invalid_or_missing() {
        assert_eq!(read_u32_from(|_| Some("nope".into()), "X", 99), 99);
        assert_eq!(read_u32_from(|_| Some("-1".into()), "X", 99), 99);
        assert_eq!(read_u32_from(|_| None, "X", 77), 77);
    }

    #[test]
    fn read_u64_parses_and_falls_back() {
        assert_eq!(read_u64_from(|_| Some("180".into()), "X", 1), 180);
        assert_eq!(read_u64_from(|_| Some("xyz".into()), "X", 60), 60);
        assert_eq!(read_u64_from(|_| None, "X", 30), 30);
    }
}
