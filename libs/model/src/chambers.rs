use crate::errors::StoreError;
use crate::records::Chamber;
use crate::storage::StorageBackend;

pub const CHAMBERS_KEY: &str = "eplenarius.camaras";

/// Read side of the chamber-listing collaborator. The edit form only ever
/// needs the `{id, nome}` pairs for its selector.
pub struct ChamberDirectory<B> {
    backend: B,
}

impl<B> ChamberDirectory<B>
where
    B: StorageBackend,
{
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Unlike the user listing, a failure here is surfaced so the form can
    /// show its inline "could not load chambers" message.
    pub fn list(&self) -> Result<Vec<Chamber>, StoreError> {
        match self.backend.load(CHAMBERS_KEY)? {
            Some(raw) => Ok(serde_json::from_str(&raw)?),
            None => self.seed(),
        }
    }

    fn seed(&self) -> Result<Vec<Chamber>, StoreError> {
        let chambers = vec![
            Chamber {
                id: "1".to_owned(),
                name: "Câmara Municipal de Exemplo".to_owned(),
            },
            Chamber {
                id: "2".to_owned(),
                name: "Câmara Municipal de Modelo".to_owned(),
            },
        ];

        self.backend
            .save(CHAMBERS_KEY, &serde_json::to_string(&chambers)?)?;

        Ok(chambers)
    }
}
