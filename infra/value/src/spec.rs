use crate::encoding::TextEncoding;
use crate::error::ValueError;
use crate::pattern;
use std::fmt;

/// Inclusive bounds of an integer record kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntSpec {
    pub name: &'static str,
    pub min: i32,
    pub max: i32,
}

impl IntSpec {
    #[must_use]
    pub const fn new(name: &'static str, min: i32, max: i32) -> Self {
        Self { name, min, max }
    }

    /// Accepts every `i32`.
    #[must_use]
    pub const fn unbounded(name: &'static str) -> Self {
        Self::new(name, i32::MIN, i32::MAX)
    }

    #[must_use]
    pub const fn contains(&self, value: i32) -> bool {
        self.min <= value && value <= self.max
    }

    /// # Errors
    /// Returns [`ValueError::OutOfRange`] if `value` lies outside `[min, max]`, or
    /// [`ValueError::InvariantViolation`] if the bounds themselves are inverted.
    pub fn check(&self, value: i32) -> Result<(), ValueError> {
        if self.min > self.max {
            return Err(ValueError::InvariantViolation {
                message: format!("min {} is greater than max {}", self.min, self.max).into(),
                context: Some(self.name.into()),
            });
        }
        if !self.contains(value) {
            return Err(ValueError::OutOfRange {
                message: format!("{value} is outside [{}, {}]", self.min, self.max).into(),
                context: Some(self.name.into()),
            });
        }
        Ok(())
    }
}

/// Maximum byte length of a string once encoded with `encoding`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedLimit {
    pub encoding: TextEncoding,
    pub max_bytes: usize,
}

/// Constraints of a string record kind.
///
/// Built with `const` builder calls so a kind declares everything in one expression:
///
/// ```rust
/// use wodi_value::{StrSpec, TextEncoding};
///
/// const TITLE: StrSpec = StrSpec::new("GameTitle").max_encoded_len(TextEncoding::ShiftJis, 128);
/// assert!(!TITLE.allow_empty);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrSpec {
    pub name: &'static str,
    pub allow_empty: bool,
    pub allow_newline: bool,
    /// Violations fail construction.
    pub required_pattern: Option<&'static str>,
    /// Violations are only reported, see [`AdvisoryMismatch`].
    pub advisory_pattern: Option<&'static str>,
    pub max_encoded_len: Option<EncodedLimit>,
}

impl StrSpec {
    /// Strictest spec: non-empty, single line, no patterns, no length limit.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            allow_empty: false,
            allow_newline: false,
            required_pattern: None,
            advisory_pattern: None,
            max_encoded_len: None,
        }
    }

    #[must_use = "StrSpec builders return a new spec"]
    pub const fn allow_empty(mut self) -> Self {
        self.allow_empty = true;
        self
    }

    #[must_use = "StrSpec builders return a new spec"]
    pub const fn allow_newline(mut self) -> Self {
        self.allow_newline = true;
        self
    }

    #[must_use = "StrSpec builders return a new spec"]
    pub const fn required_pattern(mut self, pattern: &'static str) -> Self {
        self.required_pattern = Some(pattern);
        self
    }

    #[must_use = "StrSpec builders return a new spec"]
    pub const fn advisory_pattern(mut self, pattern: &'static str) -> Self {
        self.advisory_pattern = Some(pattern);
        self
    }

    #[must_use = "StrSpec builders return a new spec"]
    pub const fn max_encoded_len(mut self, encoding: TextEncoding, max_bytes: usize) -> Self {
        self.max_encoded_len = Some(EncodedLimit { encoding, max_bytes });
        self
    }

    /// Runs every required check, in order; the first failure wins.
    ///
    /// 1. absent → [`ValueError::RequiredValue`]
    /// 2. empty → [`ValueError::EmptyNotAllowed`] unless `allow_empty`
    /// 3. line break → [`ValueError::NewlineNotAllowed`] unless `allow_newline`
    /// 4. required pattern → [`ValueError::PatternMismatch`]
    /// 5. encoded length → [`ValueError::EncodedLengthExceeded`]
    ///
    /// # Errors
    /// Returns the first failing check as listed above, or
    /// [`ValueError::InvariantViolation`] if the required pattern does not compile.
    pub fn check(&self, value: Option<&str>) -> Result<(), ValueError> {
        let Some(value) = value else {
            return Err(ValueError::RequiredValue {
                message: "absent value".into(),
                context: Some(self.name.into()),
            });
        };

        if value.is_empty() && !self.allow_empty {
            return Err(ValueError::EmptyNotAllowed {
                message: "empty string".into(),
                context: Some(self.name.into()),
            });
        }

        // `\r\n` contains `\n`, so one probe covers both line break styles.
        if !self.allow_newline && value.contains('\n') {
            return Err(ValueError::NewlineNotAllowed {
                message: format!("{value:?}").into(),
                context: Some(self.name.into()),
            });
        }

        if let Some(required) = self.required_pattern
            && !pattern::is_match(self.name, required, value)?
        {
            return Err(ValueError::PatternMismatch {
                message: format!("{value:?} does not match `{required}`").into(),
                context: Some(self.name.into()),
            });
        }

        if let Some(limit) = self.max_encoded_len {
            let len = limit.encoding.encoded_len(value);
            if len > limit.max_bytes {
                return Err(ValueError::EncodedLengthExceeded {
                    message: format!(
                        "{len} bytes in {} exceeds the limit of {}",
                        limit.encoding, limit.max_bytes
                    )
                    .into(),
                    context: Some(self.name.into()),
                });
            }
        }

        Ok(())
    }

    /// Checks the advisory pattern only. A mismatch is returned, never raised.
    ///
    /// # Errors
    /// Returns [`ValueError::InvariantViolation`] if the advisory pattern does not compile.
    pub fn advise(&self, value: &str) -> Result<Option<AdvisoryMismatch>, ValueError> {
        let Some(advisory) = self.advisory_pattern else {
            return Ok(None);
        };
        if pattern::is_match(self.name, advisory, value)? {
            Ok(None)
        } else {
            Ok(Some(AdvisoryMismatch { kind: self.name, pattern: advisory }))
        }
    }
}

/// Non-fatal notice that a value does not follow its kind's recommended pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvisoryMismatch {
    pub kind: &'static str,
    pub pattern: &'static str,
}

impl fmt::Display for AdvisoryMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} value does not follow the recommended pattern `{}`", self.kind, self.pattern)
    }
}
