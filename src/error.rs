//! Error types for steam-bbcode.
//!
//! Rule application itself never fails: every input produces some HTML.
//! The only error is the input-size guard enforced by the options-based
//! entry points.

/// Error type for conversion operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Input exceeded `Options::max_input_len`.
    #[error("input too large: {len} bytes exceeds limit of {max} bytes")]
    InputTooLarge {
        /// Length of the rejected input in bytes.
        len: usize,
        /// Configured limit in bytes.
        max: usize,
    },
}

/// Result type alias for conversion operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_too_large_message_names_both_sizes() {
        let err = Error::InputTooLarge { len: 2048, max: 1024 };
        assert_eq!(
            err.to_string(),
            "input too large: 2048 bytes exceeds limit of 1024 bytes"
        );
    }
}
