mod apple;
mod google_play;
mod podcast_index;

pub use apple::{ApplePodcast, ShowType};
pub use google_play::GooglePlay;
pub use podcast_index::PodcastIndex;

use crate::error::ExtensionError;
use crate::feed::Feed;
use crate::render::tree::Document;

/// An optional extension applied to a rendered feed.
///
/// Extensions are applied in the order supplied to [`render`], but each
/// one touches its own region of the document, so any combination may be
/// given in any order. Zero, one, or many may be supplied per call.
///
/// [`render`]: crate::render()
#[derive(Debug, Clone)]
pub enum ExtensionOption {
    /// Apple Podcasts (iTunes) directory metadata.
    ApplePodcast(ApplePodcast),
    /// Google Play podcast directory metadata.
    GooglePlay(GooglePlay),
    /// Podcast Index namespace metadata.
    PodcastIndex(PodcastIndex),
    /// Emit the most compact encoding instead of indented output.
    MinimizeOutput(bool),
    /// Override the channel generator with a literal string, bypassing
    /// the feed's generator field.
    Generator(String),
}

impl ExtensionOption {
    /// Name identifying this extension in error messages.
    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::ApplePodcast(_) => "ApplePodcast",
            Self::GooglePlay(_) => "GooglePlay",
            Self::PodcastIndex(_) => "PodcastIndex",
            Self::MinimizeOutput(_) => "MinimizeOutput",
            Self::Generator(_) => "Generator",
        }
    }

    /// Apply this extension to the document, reading from the feed.
    pub(crate) fn apply(&self, feed: &Feed, doc: &mut Document) -> Result<(), ExtensionError> {
        match self {
            Self::ApplePodcast(ext) => ext.apply(feed, doc),
            Self::GooglePlay(ext) => ext.apply(feed, doc),
            Self::PodcastIndex(ext) => ext.apply(feed, doc),
            Self::MinimizeOutput(minimize) => {
                doc.minimize = *minimize;
                Ok(())
            }
            Self::Generator(name) => {
                doc.channel.generator = Some(name.clone()).filter(|s| !s.is_empty());
                Ok(())
            }
        }
    }
}

impl From<ApplePodcast> for ExtensionOption {
    fn from(ext: ApplePodcast) -> Self {
        Self::ApplePodcast(ext)
    }
}

impl From<GooglePlay> for ExtensionOption {
    fn from(ext: GooglePlay) -> Self {
        Self::GooglePlay(ext)
    }
}

impl From<PodcastIndex> for ExtensionOption {
    fn from(ext: PodcastIndex) -> Self {
        Self::PodcastIndex(ext)
    }
}
