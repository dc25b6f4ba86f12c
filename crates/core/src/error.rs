use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error with {} file at path `{}`: {}", .file_description, .path, .original)]
    Io {
        file_description: String,
        path: String,
        original: std::io::Error,
    },

    #[error("Error {} article store at `{}`: {}", .action, .path, .original)]
    Json {
        action: String,
        path: String,
        original: serde_json::Error,
    },

    #[error("Error fetching page: {}", .0)]
    Http(#[from] reqwest::Error),

    #[error("Could not open `{}`: {}", .url, .original)]
    Open {
        url: String,
        original: std::io::Error,
    },

    #[error("STDIO error: {}", .0)]
    Stdio(#[from] std::io::Error),

    #[error("Misc error: {}", .0)]
    Misc(String),
}

impl Error {
    pub fn io_error(file_description: String, path: String, original: std::io::Error) -> Self {
        Self::Io {
            file_description,
            path,
            original,
        }
    }

    pub fn json_error(action: String, path: String, original: serde_json::Error) -> Self {
        Self::Json {
            action,
            path,
            original,
        }
    }

    pub fn open_error(url: String, original: std::io::Error) -> Self {
        Self::Open { url, original }
    }
}
