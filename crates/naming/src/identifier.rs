//! Keyspace identifiers and their folding rules.
//!
//! CQL treats an unquoted identifier as case-insensitive: the authority folds
//! it to lowercase before storing or resolving it. A double-quoted identifier
//! is taken verbatim, so `"myKeyspace"` and `"mykeyspace"` name two different
//! keyspaces.
//!
//! | CQL spelling    | Quoted | Stored as    |
//! |-----------------|--------|--------------|
//! | `myKeyspace`    | no     | `mykeyspace` |
//! | `MYKEYSPACE`    | no     | `mykeyspace` |
//! | `"myKeyspace"`  | yes    | `myKeyspace` |
//! | `"MYKEYSPACE"`  | yes    | `MYKEYSPACE` |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NamingError, NamingResult};

/// Longest keyspace name Cassandra accepts.
pub const MAX_IDENTIFIER_LENGTH: usize = 48;

/// A keyspace (or table) name together with its quoting.
///
/// # Examples
///
/// ```
/// use keyspace_naming::Identifier;
///
/// let folded = Identifier::parse("camelCaseName");
/// assert!(!folded.is_quoted());
/// assert_eq!(folded.normalized(), "camelcasename");
///
/// let exact = Identifier::parse(r#""camelCaseName""#);
/// assert!(exact.is_quoted());
/// assert_eq!(exact.normalized(), "camelCaseName");
/// assert_eq!(exact.to_cql(), r#""camelCaseName""#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Identifier {
    name: String,
    quoted: bool,
}

impl Identifier {
    /// Creates an identifier from a bare name and a quoting flag.
    pub fn new(name: impl Into<String>, quoted: bool) -> Self {
        Self { name: name.into(), quoted }
    }

    /// Creates an unquoted (case-folded) identifier.
    pub fn unquoted(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }

    /// Creates a quoted (case-preserving) identifier.
    pub fn quoted(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    /// Parses a CQL spelling.
    ///
    /// Text wrapped in double quotes is a quoted identifier, with `""`
    /// unescaped to `"`. Anything else is unquoted and kept as written.
    pub fn parse(text: &str) -> Self {
        match text.strip_prefix('"').and_then(|rest| rest.strip_suffix('"')) {
            Some(inner) => Self::quoted(inner.replace("\"\"", "\"")),
            None => Self::unquoted(text),
        }
    }

    /// The bare name, without quotes and before folding.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the identifier preserves its case.
    #[must_use]
    pub fn is_quoted(&self) -> bool {
        self.quoted
    }

    /// The spelling the authority stores: lowercase when unquoted, verbatim
    /// when quoted.
    #[must_use]
    pub fn normalized(&self) -> String {
        if self.quoted { self.name.clone() } else { self.name.to_lowercase() }
    }

    /// Renders the identifier as it appears in a CQL statement.
    #[must_use]
    pub fn to_cql(&self) -> String {
        if self.quoted {
            format!("\"{}\"", self.name.replace('"', "\"\""))
        } else {
            self.name.clone()
        }
    }

    /// Same quoting, different name.
    #[must_use]
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self::new(name, self.quoted)
    }

    /// Same quoting, every letter's case flipped.
    #[must_use]
    pub fn with_swapped_case(&self) -> Self {
        self.with_name(swap_case(&self.name))
    }

    /// Same quoting, name in uppercase.
    #[must_use]
    pub fn with_upper_case(&self) -> Self {
        self.with_name(self.name.to_uppercase())
    }

    /// Same quoting, name in lowercase.
    #[must_use]
    pub fn with_lower_case(&self) -> Self {
        self.with_name(self.name.to_lowercase())
    }

    /// Checks the name against Cassandra's keyspace naming rules.
    ///
    /// Names must be non-empty, at most [`MAX_IDENTIFIER_LENGTH`]
    /// characters, and made of ASCII letters, digits, and `_`. Quoting
    /// changes case handling only; it does not widen the character set.
    ///
    /// # Errors
    ///
    /// Returns [`NamingError::InvalidIdentifier`] describing the first rule
    /// the name breaks.
    pub fn validate(&self) -> NamingResult<()> {
        if self.name.is_empty() {
            return Err(NamingError::invalid_identifier(self.to_cql(), "name is empty"));
        }

        let length = self.name.chars().count();
        if length > MAX_IDENTIFIER_LENGTH {
            return Err(NamingError::invalid_identifier(
                self.to_cql(),
                format!("name is {length} characters, limit is {MAX_IDENTIFIER_LENGTH}"),
            ));
        }

        if let Some(bad) = self.name.chars().find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
            return Err(NamingError::invalid_identifier(
                self.to_cql(),
                format!("contains {bad:?}; only ASCII letters, digits and '_' are allowed"),
            ));
        }

        Ok(())
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_cql())
    }
}

impl From<&str> for Identifier {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

/// Flips the case of every letter; characters without case pass through.
///
/// ```
/// assert_eq!(keyspace_naming::swap_case("myKeyspace_1"), "MYkEYSPACE_1");
/// ```
#[must_use]
pub fn swap_case(text: &str) -> String {
    let mut swapped = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_uppercase() {
            swapped.extend(c.to_lowercase());
        } else if c.is_lowercase() {
            swapped.extend(c.to_uppercase());
        } else {
            swapped.push(c);
        }
    }
    swapped
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_quoted_and_unquoted() {
        assert_eq!(Identifier::parse(r#""myKeyspace""#), Identifier::quoted("myKeyspace"));
        assert_eq!(Identifier::parse("myKeyspace"), Identifier::unquoted("myKeyspace"));
    }

    #[test]
    fn parse_unescapes_doubled_quotes() {
        let id = Identifier::parse(r#""say ""hi""""#);
        assert_eq!(id.name(), r#"say "hi""#);
        assert_eq!(id.to_cql(), r#""say ""hi""""#);
    }

    #[test]
    fn lone_quote_is_unquoted() {
        let id = Identifier::parse("\"");
        assert!(!id.is_quoted());
        assert_eq!(id.name(), "\"");
    }

    #[test]
    fn normalized_folds_only_unquoted() {
        assert_eq!(Identifier::unquoted("MyKeyspace").normalized(), "mykeyspace");
        assert_eq!(Identifier::quoted("MyKeyspace").normalized(), "MyKeyspace");
    }

    #[test]
    fn unquoted_spellings_share_a_stored_name() {
        let upper = Identifier::unquoted("CAMELCASENAME");
        let lower = Identifier::unquoted("camelcasename");
        assert_eq!(upper.normalized(), lower.normalized());
        assert_eq!(lower.normalized(), Identifier::quoted("camelcasename").normalized());
        assert_ne!(upper.normalized(), Identifier::quoted("CAMELCASENAME").normalized());
    }

    #[test]
    fn case_variants_keep_quoting() {
        let id = Identifier::quoted("myKeyspace");
        assert_eq!(id.with_swapped_case(), Identifier::quoted("MYkEYSPACE"));
        assert_eq!(id.with_upper_case(), Identifier::quoted("MYKEYSPACE"));
        assert_eq!(id.with_lower_case(), Identifier::quoted("mykeyspace"));
    }

    #[test]
    fn validate_accepts_cassandra_names() {
        Identifier::unquoted("all_lowercase_name").validate().unwrap();
        Identifier::quoted("MixedCase_Name_01").validate().unwrap();
        Identifier::quoted("k".repeat(MAX_IDENTIFIER_LENGTH)).validate().unwrap();
    }

    #[test]
    fn validate_rejects_bad_names() {
        for id in [
            Identifier::unquoted(""),
            Identifier::quoted("k".repeat(MAX_IDENTIFIER_LENGTH + 1)),
            Identifier::unquoted("my-keyspace"),
            Identifier::quoted("my keyspace"),
            Identifier::quoted(r#"quote"inside"#),
        ] {
            let err = id.validate().expect_err("name should be rejected");
            assert!(matches!(err, NamingError::InvalidIdentifier { .. }), "got {err:?}");
        }
    }

    #[test]
    fn display_is_cql_spelling() {
        assert_eq!(Identifier::quoted("myTable").to_string(), r#""myTable""#);
        assert_eq!(Identifier::unquoted("myTable").to_string(), "myTable");
    }

    #[test]
    fn swap_case_round_trips_letters() {
        assert_eq!(swap_case("MixedCase_Name"), "mIXEDcASE_nAME");
        assert_eq!(swap_case(&swap_case("MixedCase_Name")), "MixedCase_Name");
        assert_eq!(swap_case("123_"), "123_");
    }
}
