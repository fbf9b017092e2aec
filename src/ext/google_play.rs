use crate::error::ExtensionError;
use crate::feed::Feed;
use crate::render::tree::{Document, GooglePlayCategory};

pub(crate) const GOOGLE_PLAY_NS: &str = "http://www.google.com/schemas/play-podcasts/1.0";

/// Google Play podcast directory metadata for a feed.
#[derive(Debug, Clone, Default)]
pub struct GooglePlay {
    /// Flat list of directory category names.
    pub categories: Vec<String>,
}

impl GooglePlay {
    pub(crate) fn apply(&self, _feed: &Feed, doc: &mut Document) -> Result<(), ExtensionError> {
        doc.google_play_ns = Some(GOOGLE_PLAY_NS);

        for category in &self.categories {
            doc.channel.google_play_categories.push(GooglePlayCategory {
                text: category.clone(),
            });
        }

        Ok(())
    }
}
