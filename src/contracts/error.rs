use thiserror::Error;

#[derive(Error, Debug)]
pub enum MintError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Save error: {0}")]
    Save(#[from] SaveError),

    #[error("No unused candidate after {attempts} draws")]
    RetriesExhausted { attempts: usize },

    #[error("Code space exhausted: all {0} codes issued")]
    SpaceExhausted(u64),
}

#[derive(Error, Debug, Clone)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(String),
}

#[derive(Error, Debug, Clone)]
pub enum SaveError {
    #[error("IO error: {0}")]
    Io(String),
}
