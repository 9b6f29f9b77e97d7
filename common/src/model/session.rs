use serde::{Deserialize, Serialize};

/// The authenticated identity, produced once by the auth exchange and held
/// for the lifetime of the browser visit. Read-only to every view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub email: String,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_flag_uses_wire_name() {
        let session: Session =
            serde_json::from_str(r#"{"email":"a@b.c","isAdmin":true}"#).unwrap();
        assert!(session.is_admin);
        assert_eq!(session.email, "a@b.c");
    }
}
