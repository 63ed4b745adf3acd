/// Error types for host calls, form validation and dashboard commands.
use thiserror::Error;

/// A failed call into the browser's extension APIs
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bookmark operation failed: {0}")]
    Bookmarks(String),

    #[error("Tab operation failed: {0}")]
    Tabs(String),

    #[error("Storage operation failed: {0}")]
    Storage(String),

    #[error("Top sites unavailable: {0}")]
    TopSites(String),

    #[error("Failed to convert value: {0}")]
    Conversion(String),

    #[error("Invalid stored data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Edit/create form validation failure. The modal stays open on these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Title is required")]
    MissingTitle,

    #[error("URL is required")]
    MissingUrl,
}

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error("The default board cannot be deleted")]
    ProtectedBoard,

    #[error("No bookmark with id {0}")]
    NotFound(String),

    #[error("Nothing can be dropped here")]
    UnknownDropTarget,
}

pub type Result<T> = std::result::Result<T, DashboardError>;
