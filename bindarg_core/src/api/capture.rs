use thiserror::Error;

use crate::model::Nargs;
use crate::token::InvalidToken;

/// Behaviour to capture string values into a typed field.
///
/// We use this at the bottom of the binding graph so the compiler can maintain each field's type.
#[doc(hidden)]
pub trait Capturable {
    /// Declare that the flag has been specified.
    fn matched(&mut self);

    /// Capture a value into this field.
    fn capture(&mut self, token: &str) -> Result<(), InvalidCapture>;

    /// Get the `Nargs` for this implementation.
    fn nargs(&self) -> Nargs;
}

/// Why the values of a flag could not be captured into its field.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidCapture {
    /// A value could not be converted via [`std::str::FromStr`].
    #[error("cannot convert '{token}' to {type_name}: {reason}.")]
    InvalidConversion {
        /// The offending value.
        token: String,
        /// The target type.
        type_name: &'static str,
        /// The conversion error, as displayed by the target type.
        reason: String,
    },

    /// A value broke the single word rule.
    #[error("invalid token '{token}': {source}.")]
    InvalidToken {
        /// The offending value.
        token: String,
        /// The rule which was broken.
        source: InvalidToken,
    },

    /// Fewer values were provided than the field accepts.
    #[error("too few values provided (provided={provided}, expected={expected}).")]
    TooFewValues {
        /// The number of values provided.
        provided: usize,
        /// The minimum number of values.
        expected: usize,
    },

    /// More values were provided than the field accepts.
    #[error("too many values provided (provided={provided}, expected={expected}).")]
    TooManyValues {
        /// The number of values provided.
        provided: usize,
        /// The maximum number of values.
        expected: usize,
    },
}

/// Capture all of a flag's `values` into `capturable`, checking them against its `Nargs` first.
///
/// Nothing is captured when the number of values is out of bounds.
pub fn capture_values(
    mut capturable: impl Capturable,
    values: &[String],
) -> Result<(), InvalidCapture> {
    let (lower, upper) = capturable.nargs().bounds();

    if values.len() < lower {
        return Err(InvalidCapture::TooFewValues {
            provided: values.len(),
            expected: lower,
        });
    }

    if let Some(upper) = upper {
        if values.len() > upper {
            return Err(InvalidCapture::TooManyValues {
                provided: values.len(),
                expected: upper,
            });
        }
    }

    capturable.matched();

    for value in values {
        capturable.capture(value)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::RefCell;

    struct Recorder<'a> {
        nargs: Nargs,
        matched: &'a RefCell<bool>,
        captured: &'a RefCell<Vec<String>>,
    }

    impl<'a> Capturable for Recorder<'a> {
        fn matched(&mut self) {
            self.matched.replace(true);
        }

        fn capture(&mut self, token: &str) -> Result<(), InvalidCapture> {
            if token == "bad" {
                return Err(InvalidCapture::InvalidConversion {
                    token: token.to_string(),
                    type_name: "Recorder",
                    reason: "bad value".to_string(),
                });
            }

            self.captured.borrow_mut().push(token.to_string());
            Ok(())
        }

        fn nargs(&self) -> Nargs {
            self.nargs
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[rstest]
    #[case(Nargs::Precisely(0), vec![])]
    #[case(Nargs::Precisely(1), vec!["a"])]
    #[case(Nargs::Precisely(2), vec!["a", "b"])]
    #[case(Nargs::Any, vec![])]
    #[case(Nargs::Any, vec!["a", "b", "c"])]
    #[case(Nargs::AtLeastOne, vec!["a"])]
    #[case(Nargs::AtLeastOne, vec!["a", "b"])]
    fn capture_within_bounds(#[case] nargs: Nargs, #[case] values: Vec<&str>) {
        // Setup
        let matched = RefCell::new(false);
        let captured = RefCell::new(Vec::default());
        let recorder = Recorder {
            nargs,
            matched: &matched,
            captured: &captured,
        };

        // Execute
        capture_values(recorder, &strings(&values)).unwrap();

        // Verify
        assert!(*matched.borrow());
        assert_eq!(*captured.borrow(), strings(&values));
    }

    #[rstest]
    #[case(Nargs::Precisely(1), vec![], InvalidCapture::TooFewValues { provided: 0, expected: 1 })]
    #[case(Nargs::Precisely(2), vec!["a"], InvalidCapture::TooFewValues { provided: 1, expected: 2 })]
    #[case(Nargs::AtLeastOne, vec![], InvalidCapture::TooFewValues { provided: 0, expected: 1 })]
    #[case(Nargs::Precisely(0), vec!["a"], InvalidCapture::TooManyValues { provided: 1, expected: 0 })]
    #[case(Nargs::Precisely(1), vec!["a", "b"], InvalidCapture::TooManyValues { provided: 2, expected: 1 })]
    fn capture_out_of_bounds(
        #[case] nargs: Nargs,
        #[case] values: Vec<&str>,
        #[case] expected: InvalidCapture,
    ) {
        // Setup
        let matched = RefCell::new(false);
        let captured = RefCell::new(Vec::default());
        let recorder = Recorder {
            nargs,
            matched: &matched,
            captured: &captured,
        };

        // Execute
        let error = capture_values(recorder, &strings(&values)).unwrap_err();

        // Verify
        assert_eq!(error, expected);
        assert!(!*matched.borrow());
        assert!(captured.borrow().is_empty());
    }

    #[test]
    fn capture_stops_at_first_error() {
        // Setup
        let matched = RefCell::new(false);
        let captured = RefCell::new(Vec::default());
        let recorder = Recorder {
            nargs: Nargs::Any,
            matched: &matched,
            captured: &captured,
        };

        // Execute
        let error = capture_values(recorder, &strings(&["a", "bad", "c"])).unwrap_err();

        // Verify
        assert_matches!(error, InvalidCapture::InvalidConversion { .. });
        assert_eq!(*captured.borrow(), strings(&["a"]));
    }
}
