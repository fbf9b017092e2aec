// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, TimeDelta, Utc};

/// A content feed: channel-level metadata plus an ordered list of items.
///
/// Title, link and description are required for a valid RSS document, but
/// the renderer is permissive: missing values come out as empty elements
/// rather than errors.
#[derive(Debug, Clone, Default)]
pub struct Feed {
    pub id: String,
    pub link: Link,
    pub created: Option<DateTime<Utc>>,
    /// Last update time; defaults to the current UTC time when `None`.
    pub updated: Option<DateTime<Utc>>,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Language code, e.g. "en-us".
    pub language: String,
    pub copyright: String,
    pub generator: String,
    /// Whether the feed contains explicit content.
    pub explicit: bool,
    pub author: Option<Author>,
    pub owner: Option<Author>,
    pub image: Option<Image>,
    pub items: Vec<Item>,
}

/// A single entry within a feed, such as an episode or article.
#[derive(Debug, Clone, Default)]
pub struct Item {
    /// Stable identifier, rendered as the item's GUID when non-empty.
    pub id: String,
    pub link: Link,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub title: String,
    pub description: String,
    /// Full body, rendered as a CDATA `content:encoded` block when non-empty.
    pub content: String,
    pub image: Option<Image>,
    pub author: Option<Author>,
    pub enclosure: Option<Enclosure>,
    pub explicit: bool,
}

/// An author or owner; an empty field counts as absent.
#[derive(Debug, Clone, Default)]
pub struct Author {
    pub name: String,
    pub email: String,
}

/// A feed or item image.
#[derive(Debug, Clone, Default)]
pub struct Image {
    pub url: String,
    pub title: String,
    pub link: String,
    /// Pixel width; zero means unspecified and is omitted from output.
    pub width: u32,
    /// Pixel height; zero means unspecified and is omitted from output.
    pub height: u32,
}

/// A URL with an optional display text.
#[derive(Debug, Clone, Default)]
pub struct Link {
    pub url: String,
    pub text: String,
}

/// A taxonomy entry forming a strictly linear chain, e.g. "Arts > Books".
#[derive(Debug, Clone, Default)]
pub struct Category {
    pub name: String,
    /// At most one nested sub-category.
    pub sub: Option<Box<Category>>,
}

/// A media attachment for an item, such as an audio file reference.
#[derive(Debug, Clone, Default)]
pub struct Enclosure {
    pub url: String,
    /// Byte length, kept as the caller-supplied string.
    pub length: String,
    pub mime_type: String,
    /// Media duration; negative values render as an empty string.
    pub duration: Option<TimeDelta>,
}
