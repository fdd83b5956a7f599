//! Idle-input detection
//!
//! Every tool treats an empty or whitespace-only input as "nothing to do":
//! no output and no error.

/// Returns `true` when `input` carries nothing for a tool to work on
#[inline]
#[must_use]
pub fn is_idle(input: &str) -> bool {
    input.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::is_idle;

    #[test]
    fn test_idle_inputs() {
        assert!(is_idle(""));
        assert!(is_idle("   "));
        assert!(is_idle("\n\t \r\n"));
    }

    #[test]
    fn test_non_idle_inputs() {
        assert!(!is_idle("a"));
        assert!(!is_idle("  <root/>  "));
    }
}
