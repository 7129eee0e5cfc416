use thiserror::Error;

use crate::records::{NewUser, UserRecord, UserRole, UserUpdate};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Este e-mail já está em uso por outro usuário.")]
    EmailTaken,
    #[error("Preencha o nome e o e-mail.")]
    MissingRequired,
    #[error("Informe uma senha para o novo usuário.")]
    MissingPassword,
    #[error("Selecione a câmara do administrador.")]
    MissingChamber,
}

/// Does any record other than `excluding_id` already use this email?
pub fn is_email_taken(records: &[UserRecord], email: &str, excluding_id: Option<&str>) -> bool {
    let email = email.trim();
    if email.is_empty() {
        return false;
    }

    records
        .iter()
        .filter(|u| Some(u.id.as_str()) != excluding_id)
        .any(|u| u.email == email)
}

/// What the edit form holds while the user types. An empty id means a user
/// being created; an empty password on edit means "leave it alone".
#[derive(Debug, Clone, PartialEq)]
pub struct UserDraft {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub chamber_id: String,
    pub active: bool,
    pub password: String,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            id: String::new(),
            name: String::new(),
            email: String::new(),
            role: UserRole::Admin,
            chamber_id: String::new(),
            active: true,
            password: String::new(),
        }
    }
}

impl From<&UserRecord> for UserDraft {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role,
            chamber_id: user.chamber_id.clone().unwrap_or_default(),
            active: user.active,
            password: String::new(),
        }
    }
}

impl UserDraft {
    pub fn is_new(&self) -> bool {
        self.id.is_empty()
    }

    fn chamber(&self) -> Option<String> {
        match self.role {
            UserRole::ChamberAdmin if !self.chamber_id.is_empty() => {
                Some(self.chamber_id.clone())
            }
            _ => None,
        }
    }

    pub fn to_new_user(&self) -> NewUser {
        NewUser {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            role: self.role,
            chamber_id: self.chamber(),
            active: self.active,
            password: Some(self.password.clone()),
        }
    }

    pub fn to_update(&self) -> UserUpdate {
        UserUpdate {
            name: Some(self.name.trim().to_owned()),
            email: Some(self.email.trim().to_owned()),
            role: Some(self.role),
            chamber_id: Some(self.chamber()),
            active: Some(self.active),
            password: if self.password.is_empty() {
                None
            } else {
                Some(self.password.clone())
            },
        }
    }
}

/// The form's rules, in order. First failure wins, and nothing reaches the
/// store until all of them pass.
pub fn validate_form(records: &[UserRecord], draft: &UserDraft) -> Result<(), FormError> {
    let excluding = if draft.is_new() {
        None
    } else {
        Some(draft.id.as_str())
    };

    if is_email_taken(records, &draft.email, excluding) {
        return Err(FormError::EmailTaken);
    }
    if draft.name.trim().is_empty() || draft.email.trim().is_empty() {
        return Err(FormError::MissingRequired);
    }
    if draft.is_new() && draft.password.trim().is_empty() {
        return Err(FormError::MissingPassword);
    }
    if draft.role == UserRole::ChamberAdmin && draft.chamber_id.is_empty() {
        return Err(FormError::MissingChamber);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use crate::store::UserStore;

    fn seeded() -> Vec<UserRecord> {
        UserStore::new(MemoryStorage::new()).list()
    }

    fn valid_draft() -> UserDraft {
        UserDraft {
            name: "Novo".to_owned(),
            email: "novo@x.com".to_owned(),
            password: "pw".to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn it_defaults_to_the_global_admin_role() {
        assert_eq!(UserRole::default(), UserRole::Admin);
        assert_eq!(NewUser::default().role, UserRole::Admin);
        assert_eq!(UserDraft::default().role, UserRole::Admin);
    }

    #[test]
    fn it_flags_another_users_email() {
        let records = seeded();
        let other = records[0].email.clone();
        let editing = &records[1];

        assert!(is_email_taken(&records, &other, Some(editing.id.as_str())));
    }

    #[test]
    fn it_accepts_a_users_own_email() {
        let records = seeded();
        let editing = &records[1];

        assert!(!is_email_taken(
            &records,
            &editing.email,
            Some(editing.id.as_str())
        ));
    }

    #[test]
    fn it_ignores_an_empty_email() {
        assert!(!is_email_taken(&seeded(), "  ", None));
    }

    #[test]
    fn it_rejects_a_colliding_email_first() {
        let records = seeded();
        let draft = UserDraft {
            email: records[0].email.clone(),
            // Also missing a name, but the collision is reported first.
            ..Default::default()
        };

        assert_eq!(validate_form(&records, &draft), Err(FormError::EmailTaken));
    }

    #[test]
    fn it_requires_name_and_email() {
        let draft = UserDraft {
            name: " ".to_owned(),
            ..valid_draft()
        };

        assert_eq!(
            validate_form(&seeded(), &draft),
            Err(FormError::MissingRequired)
        );
    }

    #[test]
    fn it_requires_a_password_only_when_creating() {
        let records = seeded();
        let draft = UserDraft {
            password: String::new(),
            ..valid_draft()
        };

        assert_eq!(
            validate_form(&records, &draft),
            Err(FormError::MissingPassword)
        );

        let editing = UserDraft {
            id: records[0].id.clone(),
            email: records[0].email.clone(),
            ..draft
        };
        assert_eq!(validate_form(&records, &editing), Ok(()));
    }

    #[test]
    fn it_rejects_a_chamber_admin_without_a_chamber() {
        let draft = UserDraft {
            role: UserRole::ChamberAdmin,
            ..valid_draft()
        };

        assert_eq!(
            validate_form(&seeded(), &draft),
            Err(FormError::MissingChamber)
        );
    }

    #[test]
    fn it_accepts_a_chamber_admin_with_a_chamber() {
        let draft = UserDraft {
            role: UserRole::ChamberAdmin,
            chamber_id: "1".to_owned(),
            ..valid_draft()
        };

        assert_eq!(validate_form(&seeded(), &draft), Ok(()));
    }

    #[test]
    fn it_keeps_a_blank_password_out_of_the_update() {
        let draft = UserDraft {
            id: "1".to_owned(),
            ..valid_draft()
        };
        let edited = UserDraft {
            password: String::new(),
            ..draft.clone()
        };

        assert_eq!(draft.to_update().password, Some("pw".to_owned()));
        assert_eq!(edited.to_update().password, None);
    }

    #[test]
    fn it_drops_the_chamber_when_the_role_is_global() {
        let draft = UserDraft {
            chamber_id: "1".to_owned(),
            ..valid_draft()
        };

        assert_eq!(draft.to_new_user().chamber_id, None);
        assert_eq!(draft.to_update().chamber_id, Some(None));
    }
}
