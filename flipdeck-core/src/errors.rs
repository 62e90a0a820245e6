use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeckError {
    #[error("no cards found in input")]
    NothingImported,
    #[error("nothing to export")]
    NothingToExport,
    #[error("export failed: {0}")]
    Export(String),
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage read failed: {0}")]
    Read(String),
    #[error("storage write failed: {0}")]
    Write(String),
}
