//! Configuration options for conversion.
//!
//! The rule tables are fixed; options only govern the guards around them.

/// Default input cap. 1 MiB of BBCode is far beyond any Steam news post.
pub const DEFAULT_MAX_INPUT_LEN: usize = 1_048_576;

/// Configuration options for [`parse_with_options`](crate::parse_with_options).
///
/// # Example
///
/// ```rust
/// use steam_bbcode::Options;
///
/// // Use defaults
/// let options = Options::default();
/// assert_eq!(options.max_input_len, Some(1_048_576));
///
/// // Disable the size guard
/// let options = Options {
///     max_input_len: None,
///     ..Options::default()
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Maximum accepted input length in bytes.
    ///
    /// Longer input is rejected with [`Error::InputTooLarge`](crate::Error)
    /// before any rule runs. `None` disables the check.
    ///
    /// Default: `Some(1_048_576)`
    pub max_input_len: Option<usize>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            max_input_len: Some(DEFAULT_MAX_INPUT_LEN),
        }
    }
}

impl Options {
    /// Checks `len` against `max_input_len`.
    pub(crate) fn check_len(&self, len: usize) -> crate::Result<()> {
        match self.max_input_len {
            Some(max) if len > max => Err(crate::Error::InputTooLarge { len, max }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn test_default_cap() {
        let opts = Options::default();
        assert_eq!(opts.max_input_len, Some(DEFAULT_MAX_INPUT_LEN));
    }

    #[test]
    fn test_check_len_at_limit_is_accepted() {
        let opts = Options {
            max_input_len: Some(10),
        };
        assert!(opts.check_len(10).is_ok());
        assert_eq!(
            opts.check_len(11),
            Err(Error::InputTooLarge { len: 11, max: 10 })
        );
    }

    #[test]
    fn test_no_cap_accepts_anything() {
        let opts = Options {
            max_input_len: None,
        };
        assert!(opts.check_len(usize::MAX).is_ok());
    }
}
