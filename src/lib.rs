pub mod error;
pub mod ext;
pub mod feed;
mod render;

// Re-export main types for convenience
pub use error::{ExtensionError, RenderError, SerializeError};
pub use ext::{ApplePodcast, ExtensionOption, GooglePlay, PodcastIndex, ShowType};
pub use feed::{Author, Category, Enclosure, Feed, Image, Item, Link};
pub use render::render;
