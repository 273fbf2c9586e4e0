//! Error types for the shopping list service

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No items found")]
    NoItems,

    #[error("Item with id {0} not found")]
    ItemNotFound(i64),

    #[error("Item {0} already exists")]
    ItemAlreadyExists(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
