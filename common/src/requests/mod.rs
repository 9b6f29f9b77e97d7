//! Request payloads for the label/image backend. Field names follow the wire
//! format the server expects (`userEmail`, `adminId`), so these structs are
//! the single place renames live.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct CreateLabelRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteLabelsRequest {
    pub ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteImagesRequest {
    pub filenames: Vec<String>,
}

/// Attaches label texts (not ids) to one image on behalf of a user.
#[derive(Debug, Clone, Serialize)]
pub struct AssociateLabelsRequest {
    #[serde(rename = "userEmail")]
    pub user_email: String,
    pub image: String,
    pub labels: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    #[serde(rename = "adminId")]
    pub admin_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn association_uses_camel_case_user_email() {
        let req = AssociateLabelsRequest {
            user_email: "a@b.c".to_string(),
            image: "scan.png".to_string(),
            labels: vec!["cyst".to_string()],
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains(r#""userEmail":"a@b.c""#));
        assert!(json.contains(r#""image":"scan.png""#));
    }

    #[test]
    fn register_renames_admin_id() {
        let req = RegisterRequest {
            email: "a@b.c".to_string(),
            password: "pw".to_string(),
            admin_id: "0000".to_string(),
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains(r#""adminId":"0000""#));
    }
}
