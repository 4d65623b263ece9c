//! Value Objects - Immutable domain primitives
//!
//! Value objects are identified by their value rather than identity.
//! They are immutable and can be freely shared.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier assigned to an employee by the upstream service.
///
/// Parsing normalizes the textual form, so hyphenated, simple, braced and
/// mixed-case renderings of the same UUID compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(Uuid);

impl EmployeeId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    /// Parse an identifier from caller-supplied text.
    ///
    /// Returns None when the text is not a UUID. Such an id can never match
    /// an upstream record.
    ///
    /// # Examples
    /// ```
    /// use employee_api::domain::value_objects::EmployeeId;
    ///
    /// let lower = EmployeeId::parse("5255f1a5-f9f7-4be5-829a-134bde088d17");
    /// let upper = EmployeeId::parse("5255F1A5-F9F7-4BE5-829A-134BDE088D17");
    /// assert_eq!(lower, upper);
    /// assert!(EmployeeId::parse("not-an-id").is_none());
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        Uuid::parse_str(s.trim()).ok().map(Self)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl From<Uuid> for EmployeeId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}
