use model::StoreError;
use thiserror::Error;

/// What the pages show when something below them fails. Validation has its
/// own type in `model`; this covers the storage boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Não foi possível salvar as alterações.")]
    Save,
    #[error("Não foi possível excluir o usuário.")]
    Delete,
    #[error("Não foi possível carregar as câmaras.")]
    Chambers,
}

impl Error {
    pub fn save(e: StoreError) -> Self {
        log::warn!("save failed: {}", e);
        Self::Save
    }

    pub fn delete(e: StoreError) -> Self {
        log::warn!("delete failed: {}", e);
        Self::Delete
    }

    pub fn chambers(e: StoreError) -> Self {
        log::warn!("chamber listing failed: {}", e);
        Self::Chambers
    }
}
