use chrono::Utc;

use crate::errors::StoreError;
use crate::records::{NewUser, UserRecord, UserRole, UserUpdate};
use crate::storage::StorageBackend;

pub const USERS_KEY: &str = "eplenarius.usuarios";

/// CRUD over the single persisted collection of users. Every mutation
/// rewrites the whole blob; there is exactly one writer, the current tab.
pub struct UserStore<B> {
    backend: B,
}

impl<B> UserStore<B>
where
    B: StorageBackend,
{
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// All persisted users, in storage order. Never fails: an absent blob is
    /// seeded with the two example users, an unreadable one yields nothing.
    pub fn list(&self) -> Vec<UserRecord> {
        match self.backend.load(USERS_KEY) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(users) => users,
                Err(e) => {
                    log::warn!("users: discarding unparsable blob: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => self.seed(),
            Err(e) => {
                log::warn!("users: load failed: {}", e);
                Vec::new()
            }
        }
    }

    pub fn get_by_id(&self, id: &str) -> Option<UserRecord> {
        self.list().into_iter().find(|u| u.id == id)
    }

    pub fn add(&self, new: NewUser) -> Result<UserRecord, StoreError> {
        let mut users = self.list();
        let now = Utc::now();

        let mut id = now.timestamp_millis();
        while users.iter().any(|u| u.id == id.to_string()) {
            id += 1;
        }

        let user = UserRecord {
            id: id.to_string(),
            name: new.name,
            email: new.email,
            role: new.role,
            chamber_id: new.chamber_id,
            active: new.active,
            password: new.password,
            created_at: now,
            updated_at: None,
        };

        users.push(user.clone());
        self.persist(&users)?;

        log::info!("users: added {}", user.id);

        Ok(user)
    }

    /// Merges `update` onto the record with the given id and stamps the
    /// update time. `Ok(None)` when the id is unknown, leaving storage alone.
    pub fn update(&self, id: &str, update: UserUpdate) -> Result<Option<UserRecord>, StoreError> {
        let mut users = self.list();

        let Some(user) = users.iter_mut().find(|u| u.id == id) else {
            return Ok(None);
        };

        if let Some(name) = update.name {
            user.name = name;
        }
        if let Some(email) = update.email {
            user.email = email;
        }
        if let Some(role) = update.role {
            user.role = role;
        }
        if let Some(chamber_id) = update.chamber_id {
            user.chamber_id = chamber_id;
        }
        if let Some(active) = update.active {
            user.active = active;
        }
        if let Some(password) = update.password {
            user.password = Some(password);
        }
        user.updated_at = Some(Utc::now());

        let updated = user.clone();
        self.persist(&users)?;

        Ok(Some(updated))
    }

    /// Removes the record with the given id, reporting whether anything was
    /// actually removed.
    pub fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut users = self.list();
        let before = users.len();
        users.retain(|u| u.id != id);
        if users.len() == before {
            return Ok(false);
        }

        self.persist(&users)?;

        log::info!("users: deleted {}", id);

        Ok(true)
    }

    fn persist(&self, users: &[UserRecord]) -> Result<(), StoreError> {
        let raw = serde_json::to_string(users)?;
        self.backend.save(USERS_KEY, &raw)
    }

    fn seed(&self) -> Vec<UserRecord> {
        let now = Utc::now();
        let users = vec![
            UserRecord {
                id: "1".to_owned(),
                name: "Administrador".to_owned(),
                email: "admin@eplenarius.com.br".to_owned(),
                role: UserRole::Admin,
                chamber_id: None,
                active: true,
                password: Some("admin123".to_owned()),
                created_at: now,
                updated_at: None,
            },
            UserRecord {
                id: "2".to_owned(),
                name: "Maria Silva".to_owned(),
                email: "maria@camaraexemplo.gov.br".to_owned(),
                role: UserRole::ChamberAdmin,
                chamber_id: Some("1".to_owned()),
                active: true,
                password: Some("camara123".to_owned()),
                created_at: now,
                updated_at: None,
            },
        ];

        if let Err(e) = self.persist(&users) {
            log::warn!("users: seeding failed: {}", e);
        }

        users
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;

    use super::*;
    use crate::storage::MemoryStorage;

    fn get_store() -> UserStore<MemoryStorage> {
        UserStore::new(MemoryStorage::new())
    }

    fn sample_user() -> NewUser {
        NewUser {
            name: "X".to_owned(),
            email: "x@x.com".to_owned(),
            role: UserRole::Admin,
            chamber_id: None,
            active: true,
            password: Some("pw".to_owned()),
        }
    }

    #[test]
    fn it_seeds_two_example_users_on_first_access() {
        let store = get_store();

        let users = store.list();

        assert_eq!(users.len(), 2);
        assert_eq!(store.list(), users);
    }

    #[test]
    fn it_returns_nothing_for_an_unparsable_blob() -> Result<()> {
        let backend = MemoryStorage::new();
        backend.save(USERS_KEY, "not json")?;
        let store = UserStore::new(backend);

        assert!(store.list().is_empty());

        Ok(())
    }

    #[test]
    fn it_adds_a_user_with_a_fresh_id_and_creation_stamp() -> Result<()> {
        let store = get_store();

        let before = Utc::now();
        let added = store.add(sample_user())?;

        assert!(!added.id.is_empty());
        assert_eq!(added.role, UserRole::Admin);
        assert!(added.created_at >= before);
        assert!(added.created_at <= Utc::now());
        assert!(added.updated_at.is_none());
        assert_eq!(store.get_by_id(&added.id), Some(added));

        Ok(())
    }

    #[test]
    fn it_never_reuses_an_id() -> Result<()> {
        let store = get_store();

        let first = store.add(sample_user())?;
        let second = store.add(NewUser {
            email: "y@x.com".to_owned(),
            ..sample_user()
        })?;

        assert_ne!(first.id, second.id);

        Ok(())
    }

    #[test]
    fn it_overlays_partial_updates_and_stamps_update_time() -> Result<()> {
        let store = get_store();
        let added = store.add(sample_user())?;

        let updated = store
            .update(
                &added.id,
                UserUpdate {
                    name: Some("Y".to_owned()),
                    ..Default::default()
                },
            )?
            .expect("updated");

        assert_eq!(updated.name, "Y");
        assert_eq!(updated.email, added.email);
        assert_eq!(updated.role, added.role);
        assert_eq!(updated.password, added.password);
        assert_eq!(updated.created_at, added.created_at);
        assert!(updated.updated_at.expect("stamped") >= added.created_at);
        assert_eq!(store.get_by_id(&added.id), Some(updated));

        Ok(())
    }

    #[test]
    fn it_switches_roles_and_clears_the_chamber() -> Result<()> {
        let store = get_store();
        let added = store.add(NewUser {
            role: UserRole::ChamberAdmin,
            chamber_id: Some("7".to_owned()),
            ..sample_user()
        })?;

        let updated = store
            .update(
                &added.id,
                UserUpdate {
                    role: Some(UserRole::Admin),
                    chamber_id: Some(None),
                    ..Default::default()
                },
            )?
            .expect("updated");

        assert_eq!(updated.role, UserRole::Admin);
        assert!(updated.chamber_id.is_none());

        Ok(())
    }

    #[test]
    fn it_leaves_storage_alone_when_updating_a_missing_id() -> Result<()> {
        let store = get_store();
        let before = store.list();

        let updated = store.update(
            "nope",
            UserUpdate {
                name: Some("Y".to_owned()),
                ..Default::default()
            },
        )?;

        assert!(updated.is_none());
        assert_eq!(store.list(), before);

        Ok(())
    }

    #[test]
    fn it_deletes_exactly_the_matching_user() -> Result<()> {
        let store = get_store();
        let added = store.add(sample_user())?;
        let before = store.list();

        assert!(store.delete(&added.id)?);

        let after = store.list();
        assert_eq!(after.len(), before.len() - 1);
        assert!(store.get_by_id(&added.id).is_none());

        Ok(())
    }

    #[test]
    fn it_reports_deleting_a_missing_id() -> Result<()> {
        let store = get_store();
        let before = store.list();

        assert!(!store.delete("nope")?);
        assert_eq!(store.list(), before);

        Ok(())
    }

    #[test]
    fn it_persists_the_original_field_names() -> Result<()> {
        let backend = MemoryStorage::new();
        let store = UserStore::new(backend);
        store.add(NewUser {
            role: UserRole::ChamberAdmin,
            chamber_id: Some("1".to_owned()),
            ..sample_user()
        })?;

        let raw = store.backend.load(USERS_KEY)?.expect("persisted");
        let value: serde_json::Value = serde_json::from_str(&raw)?;
        let last = value
            .as_array()
            .expect("array")
            .last()
            .expect("at least one");

        for field in ["id", "nome", "email", "tipo", "camaraId", "ativo", "senha", "dataCriacao"] {
            assert!(last.get(field).is_some(), "missing {}", field);
        }
        assert_eq!(last["tipo"], serde_json::json!("camaraAdmin"));
        assert!(last.get("dataAtualizacao").is_none());

        Ok(())
    }
}
