use model::{Chamber, ChamberDirectory};

use super::BrowserStorage;
use crate::errors::Error;

pub fn list_chambers() -> Result<Vec<Chamber>, Error> {
    ChamberDirectory::new(BrowserStorage)
        .list()
        .map_err(Error::chambers)
}
