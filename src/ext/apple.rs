// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::TimeDelta;

use crate::error::ExtensionError;
use crate::feed::{Category, Feed};
use crate::render::tree::{Document, ItunesCategory, ItunesImage, ItunesOwner};

pub(crate) const ITUNES_NS: &str = "http://www.itunes.com/dtds/podcast-1.0.dtd";

/// Show type declared to the Apple Podcasts directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowType {
    /// Standalone episodes, consumed newest-first.
    Episodic,
    /// Episodes meant to be consumed in order.
    Serial,
}

impl ShowType {
    pub fn as_str(self) -> &'static str {
        match self {
            ShowType::Episodic => "episodic",
            ShowType::Serial => "serial",
        }
    }
}

/// Apple Podcasts (iTunes) directory metadata for a feed.
///
/// Applying this extension requires every item to carry an enclosure;
/// rendering fails with the offending item's index otherwise.
#[derive(Debug, Clone, Default)]
pub struct ApplePodcast {
    /// Directory categories, each a possibly nested chain.
    pub categories: Vec<Category>,
    /// Show type; the element is omitted when unset.
    pub show_type: Option<ShowType>,
    /// True if the show will never publish another episode.
    pub complete: bool,
}

impl ApplePodcast {
    pub(crate) fn apply(&self, feed: &Feed, doc: &mut Document) -> Result<(), ExtensionError> {
        doc.itunes_ns = Some(ITUNES_NS);

        let channel = &mut doc.channel;
        if let Some(image) = &feed.image {
            channel.itunes_image = Some(ItunesImage {
                href: image.url.clone(),
            });
        }
        for category in &self.categories {
            channel.itunes_categories.push(convert_category(category));
        }

        // The channel-level flag is always emitted, true or false.
        channel.itunes_explicit = Some(feed.explicit.to_string());

        channel.itunes_author = feed
            .author
            .as_ref()
            .map(|author| author.name.clone())
            .filter(|name| !name.is_empty());
        channel.itunes_owner = feed.owner.as_ref().map(|owner| ItunesOwner {
            email: Some(owner.email.clone()).filter(|s| !s.is_empty()),
            name: Some(owner.name.clone()).filter(|s| !s.is_empty()),
        });

        for (index, (node, item)) in channel.items.iter_mut().zip(&feed.items).enumerate() {
            let enclosure = item
                .enclosure
                .as_ref()
                .ok_or(ExtensionError::MissingEnclosure { index })?;

            if let Some(duration) = enclosure.duration
                && duration > TimeDelta::zero()
            {
                node.itunes_duration = Some(format_duration(duration));
            }
            if let Some(image) = &item.image {
                node.itunes_image = Some(ItunesImage {
                    href: image.url.clone(),
                });
            }
            // Unlike the channel flag, the item-level flag is only
            // emitted when set.
            if item.explicit {
                node.itunes_explicit = Some("true".to_string());
            }
        }

        channel.itunes_type = self.show_type.map(|t| t.as_str().to_string());
        if self.complete {
            channel.itunes_complete = Some("Yes".to_string());
        }

        Ok(())
    }
}

/// Expand a category chain into nested `<itunes:category>` elements,
/// terminating at the first category without a sub.
fn convert_category(category: &Category) -> ItunesCategory {
    ItunesCategory {
        text: category.name.clone(),
        sub: category
            .sub
            .as_deref()
            .map(|sub| Box::new(convert_category(sub))),
    }
}

/// Format a media duration as h:mm:ss, rounded to the nearest second.
/// Hours are unpadded; negative durations format to an empty string.
pub(crate) fn format_duration(duration: TimeDelta) -> String {
    if duration < TimeDelta::zero() {
        return String::new();
    }
    let total = (duration.num_milliseconds() + 500) / 1000;
    let hours = total / 3600;
    let minutes = total % 3600 / 60;
    let seconds = total % 60;
    format!("{}:{:02}:{:02}", hours, minutes, seconds)
}
