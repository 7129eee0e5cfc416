use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum UserRole {
    #[default]
    #[serde(rename = "admin")]
    Admin,
    #[serde(rename = "camaraAdmin")]
    ChamberAdmin,
}

impl UserRole {
    pub fn label(&self) -> &'static str {
        match self {
            UserRole::Admin => "Administrador Geral",
            UserRole::ChamberAdmin => "Administrador de Câmara",
        }
    }
}

/// A persisted administrative user. Field names on the wire are the
/// Portuguese ones the original storage blob uses.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserRecord {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    pub email: String,
    #[serde(rename = "tipo")]
    pub role: UserRole,
    #[serde(rename = "camaraId", skip_serializing_if = "Option::is_none")]
    pub chamber_id: Option<String>,
    #[serde(rename = "ativo")]
    pub active: bool,
    // Stored in the clear, exactly as the original app does. Known issue.
    #[serde(rename = "senha", skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "dataCriacao")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "dataAtualizacao", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Everything the caller supplies when creating a user. The store owns the
/// id and the timestamps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub chamber_id: Option<String>,
    pub active: bool,
    pub password: Option<String>,
}

/// Partial update. `None` fields are left exactly as they were.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub role: Option<UserRole>,
    pub chamber_id: Option<Option<String>>,
    pub active: Option<bool>,
    pub password: Option<String>,
}

/// One entry from the chamber-listing collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Chamber {
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
}
