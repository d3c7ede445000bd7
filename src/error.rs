use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Deck exhausted: no cards left to deal")]
    DeckExhausted,

    #[error("Invalid choice '{choice}'. Please enter a number from 1 to 3.")]
    InvalidMenuChoice { choice: String },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

pub type Result<T> = std::result::Result<T, GameError>;
