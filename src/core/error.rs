use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("cannot equip item not in inventory: {0}")]
    ItemNotOwned(String),

    #[error("save data error: {0}")]
    Save(#[from] crate::save::SaveError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;
