// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use chrono::{DateTime, Utc};

use crate::feed::{Author, Feed, Image, Item};
use crate::render::tree;

/// RFC 1123 with a numeric zone offset, e.g. "Mon, 01 Jan 2024 12:00:00 +0000"
const RFC1123: &str = "%a, %d %b %Y %H:%M:%S %z";

/// Build the base RSS document for a feed.
///
/// Required channel fields are copied verbatim (empty values render as
/// empty elements); every optional field is included only when non-empty.
/// The feed's update time doubles as pubDate and lastBuildDate and falls
/// back to the current UTC time when unset.
pub(crate) fn build_document(feed: &Feed) -> tree::Document {
    let updated = feed.updated.unwrap_or_else(Utc::now);
    let stamp = format_timestamp(updated);

    let channel = tree::Channel {
        title: feed.title.clone(),
        link: feed.link.url.clone(),
        description: feed.description.clone(),
        language: non_empty(&feed.language),
        copyright: non_empty(&feed.copyright),
        managing_editor: non_empty(&format_author(feed.author.as_ref())),
        pub_date: Some(stamp.clone()),
        last_build_date: Some(stamp),
        generator: non_empty(&feed.generator),
        image: feed.image.as_ref().map(build_image),
        items: feed.items.iter().map(build_item).collect(),
        ..Default::default()
    };

    tree::Document {
        channel,
        ..Default::default()
    }
}

fn build_item(item: &Item) -> tree::Item {
    tree::Item {
        title: item.title.clone(),
        link: item.link.url.clone(),
        description: item.description.clone(),
        content: non_empty(&item.content),
        author: non_empty(&format_author(item.author.as_ref())),
        enclosure: item.enclosure.as_ref().map(|enclosure| tree::Enclosure {
            url: enclosure.url.clone(),
            length: enclosure.length.clone(),
            mime_type: enclosure.mime_type.clone(),
        }),
        guid: non_empty(&item.id),
        pub_date: item.updated.map(format_timestamp),
        ..Default::default()
    }
}

fn build_image(image: &Image) -> tree::Image {
    tree::Image {
        url: image.url.clone(),
        title: image.title.clone(),
        link: image.link.clone(),
        width: image.width,
        height: image.height,
    }
}

/// Format an author for RSS author fields.
///
/// With both email and name this is "jappleseed@example.com (Johnny
/// Appleseed)"; with only an email the address stands alone. Without an
/// email the whole field is suppressed, even if a name is present.
pub(crate) fn format_author(author: Option<&Author>) -> String {
    match author {
        Some(author) if !author.email.is_empty() => {
            if author.name.is_empty() {
                author.email.clone()
            } else {
                format!("{} ({})", author.email, author.name)
            }
        }
        _ => String::new(),
    }
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format(RFC1123).to_string()
}

fn non_empty(value: &str) -> Option<String> {
    Some(value.to_string()).filter(|s| !s.is_empty())
}
