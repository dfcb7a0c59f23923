//! Domain model types (pure).
//!
//! All types in this module are pure data with smart constructors.

pub mod error;
pub mod image;
pub mod key_action;
pub mod page;

// Re-export for convenience
pub use error::{AppError, FetchError};
pub use image::{ImageId, ImageItem, ImageUrl, InvalidImageUrl};
pub use key_action::KeyAction;
pub use page::{InvalidPageSize, PageNumber, PageSize, ResultPage};
