use crate::error::ExtensionError;
use crate::feed::{Feed, Link};
use crate::render::tree::{Document, Funding};

pub(crate) const PODCAST_NS: &str = "https://podcastindex.org/namespace/1.0";

/// Podcast Index namespace metadata for a feed.
#[derive(Debug, Clone, Default)]
pub struct PodcastIndex {
    /// Funding link; the URL becomes an attribute, the text the label.
    pub funding: Option<Link>,
}

impl PodcastIndex {
    pub(crate) fn apply(&self, _feed: &Feed, doc: &mut Document) -> Result<(), ExtensionError> {
        doc.podcast_ns = Some(PODCAST_NS);

        if let Some(funding) = &self.funding {
            doc.channel.podcast_funding = Some(Funding {
                url: funding.url.clone(),
                text: funding.text.clone(),
            });
        }

        Ok(())
    }
}
