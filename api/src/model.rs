use serde::{Deserialize, Serialize};

/// One signup as sent to the `wishlist` table.
///
/// `name` is always serialized, as `null` when absent, so the table column
/// is explicitly cleared rather than left to a default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistEntry {
    pub email: String,
    pub name: Option<String>,
}

impl WaitlistEntry {
    /// Build an entry from raw form input.
    ///
    /// Returns `None` when the email is blank; nothing should be sent then.
    /// Both fields are otherwise forwarded as typed (no format checks); only
    /// an empty name becomes `None`.
    pub fn from_form(email: &str, name: &str) -> Option<Self> {
        if email.trim().is_empty() {
            return None;
        }
        Some(Self {
            email: email.to_string(),
            name: (!name.is_empty()).then(|| name.to_string()),
        })
    }
}

/// A row echoed back by the store after a successful insert.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct WaitlistRow {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_email_is_not_an_entry() {
        assert_eq!(WaitlistEntry::from_form("", "Ada"), None);
        assert_eq!(WaitlistEntry::from_form("   ", ""), None);
    }

    #[test]
    fn empty_name_serializes_as_null() {
        let entry = WaitlistEntry::from_form("a@example.com", "").unwrap();
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "email": "a@example.com", "name": null })
        );
    }

    #[test]
    fn malformed_email_is_forwarded() {
        let entry = WaitlistEntry::from_form("not-an-email", " Ada ").unwrap();
        assert_eq!(entry.email, "not-an-email");
        assert_eq!(entry.name.as_deref(), Some(" Ada "));
    }

    #[test]
    fn whitespace_name_is_sent_as_typed() {
        let entry = WaitlistEntry::from_form("a@example.com", "  ").unwrap();
        assert_eq!(entry.name.as_deref(), Some("  "));
    }

    #[test]
    fn row_tolerates_missing_columns() {
        let row: WaitlistRow = serde_json::from_str(r#"{"email":"a@example.com"}"#).unwrap();
        assert_eq!(row.email, "a@example.com");
        assert!(row.id.is_none());
    }
}
