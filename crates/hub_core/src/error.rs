use hub_reader::ReadError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HubMapError {
    /// A start or destination hub name that is not part of the map
    #[error("hub `{0}` does not exist")]
    HubNotFound(String),

    #[error("hub `{0}` is defined more than once")]
    DuplicateHub(String),

    #[error(transparent)]
    Input(#[from] ReadError),
}
