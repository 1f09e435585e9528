use thiserror::Error;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("No free cell left for food on a {width}x{height} board")]
    BoardFull { width: i32, height: i32 },
    #[error("JSON encoding error:")]
    Json {
        #[from]
        source: serde_json::Error,
    },
}
