//! Station telecode type.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an invalid station telecode.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station telecode: {reason}")]
pub struct InvalidTelecode {
    reason: &'static str,
}

/// A 3-letter station telecode, as used by the ticketing API.
///
/// Telecodes are stored uppercase (e.g. "BJP" for Beijing, "AOH" for
/// Shanghai Hongqiao). Input is case-insensitive, so `bjp` typed on the
/// command line names the same station.
///
/// # Examples
///
/// ```
/// use train_tickets::domain::Telecode;
///
/// let bjp = Telecode::parse("BJP").unwrap();
/// assert_eq!(bjp.as_str(), "BJP");
/// assert_eq!(Telecode::parse("bjp").unwrap(), bjp);
///
/// assert!(Telecode::parse("BJ").is_err());
/// assert!(Telecode::parse("B1P").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Telecode([u8; 3]);

impl Telecode {
    /// Parse a telecode, normalizing to uppercase.
    pub fn parse(s: &str) -> Result<Self, InvalidTelecode> {
        let code: [u8; 3] = s.as_bytes().try_into().map_err(|_| InvalidTelecode {
            reason: "expected 3 letters",
        })?;

        if !code.iter().all(u8::is_ascii_alphabetic) {
            return Err(InvalidTelecode {
                reason: "only ASCII letters are allowed",
            });
        }

        Ok(Telecode(code.map(|b| b.to_ascii_uppercase())))
    }

    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.0).unwrap_or_default()
    }
}

impl FromStr for Telecode {
    type Err = InvalidTelecode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for Telecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Telecode").field(&self.as_str()).finish()
    }
}

impl fmt::Display for Telecode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_telecodes() {
        assert!(Telecode::parse("BJP").is_ok());
        assert!(Telecode::parse("SHH").is_ok());
        assert!(Telecode::parse("AOH").is_ok());
        assert!(Telecode::parse("AAA").is_ok());
        assert!(Telecode::parse("ZZZ").is_ok());
    }

    #[test]
    fn lowercase_is_normalized() {
        for input in ["bjp", "Bjp", "BJp"] {
            assert_eq!(Telecode::parse(input).unwrap().as_str(), "BJP");
        }
        let code: Telecode = "aoh".parse().unwrap();
        assert_eq!(code, Telecode::parse("AOH").unwrap());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(Telecode::parse("").is_err());
        assert!(Telecode::parse("B").is_err());
        assert!(Telecode::parse("BJ").is_err());
        assert!(Telecode::parse("BJPP").is_err());
    }

    #[test]
    fn reject_non_letters() {
        assert!(Telecode::parse("B1P").is_err());
        assert!(Telecode::parse("B-P").is_err());
        assert!(Telecode::parse("B P").is_err());
        // Station names are never telecodes
        assert!(Telecode::parse("北京").is_err());
    }

    #[test]
    fn display_and_debug() {
        let code = Telecode::parse("VNP").unwrap();
        assert_eq!(format!("{}", code), "VNP");
        assert_eq!(format!("{:?}", code), "Telecode(\"VNP\")");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Any three uppercase letters round-trip through parse and as_str
        #[test]
        fn roundtrip(s in "[A-Z]{3}") {
            let code = Telecode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Case never changes which station a code names
        #[test]
        fn case_insensitive(s in "[A-Za-z]{3}") {
            let code = Telecode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.to_ascii_uppercase());
        }

        /// Wrong-length strings are rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z]{0,2}|[A-Z]{4,8}") {
            prop_assert!(Telecode::parse(&s).is_err());
        }
    }
}
