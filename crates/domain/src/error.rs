//! Domain error types.

/// Error returned when a string does not name a recognized time unit.
///
/// Raised by the [`FromStr`](std::str::FromStr) impl on
/// [`TimeUnit`](crate::time_unit::TimeUnit); the boolean predicate
/// reports the same condition as a plain `false`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown time unit {input:?}, expected one of: year, month, day, hour")]
pub struct InvalidTimeUnit {
    /// The rejected token, verbatim.
    pub input: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_rejected_input_in_message() {
        let err = InvalidTimeUnit {
            input: "fortnight".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown time unit \"fortnight\", expected one of: year, month, day, hour"
        );
    }

    #[test]
    fn should_keep_rejected_input_verbatim() {
        let err = InvalidTimeUnit {
            input: " day".to_string(),
        };
        assert_eq!(err.input, " day");
    }
}
