// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::io::Write;

use quick_xml::Writer;
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, BytesText, Event};

use crate::error::SerializeError;
use crate::render::tree::{
    CONTENT_NS, Channel, Document, Image, Item, ItunesCategory, ItunesImage, ItunesOwner,
    RSS_VERSION,
};

const INDENT_CHAR: u8 = b' ';
const INDENT_SIZE: usize = 2;

type XmlResult = Result<(), quick_xml::Error>;

/// Serialize a document as XML text, indented by two spaces per level or
/// fully minimized when the document's minimize flag is set.
pub(crate) fn to_string(doc: &Document) -> Result<String, SerializeError> {
    let mut writer = if doc.minimize {
        Writer::new(Vec::new())
    } else {
        Writer::new_with_indent(Vec::new(), INDENT_CHAR, INDENT_SIZE)
    };

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    write_rss(&mut writer, doc)?;

    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_rss<W: Write>(writer: &mut Writer<W>, doc: &Document) -> XmlResult {
    let mut rss = BytesStart::new("rss");
    rss.push_attribute(("version", RSS_VERSION));
    rss.push_attribute(("xmlns:content", CONTENT_NS));
    if let Some(ns) = doc.itunes_ns {
        rss.push_attribute(("xmlns:itunes", ns));
    }
    if let Some(ns) = doc.google_play_ns {
        rss.push_attribute(("xmlns:googleplay", ns));
    }
    if let Some(ns) = doc.podcast_ns {
        rss.push_attribute(("xmlns:podcast", ns));
    }

    writer.write_event(Event::Start(rss))?;
    write_channel(writer, &doc.channel)?;
    writer.write_event(Event::End(BytesEnd::new("rss")))
}

fn write_channel<W: Write>(writer: &mut Writer<W>, channel: &Channel) -> XmlResult {
    writer.write_event(Event::Start(BytesStart::new("channel")))?;

    text(writer, "title", &channel.title)?;
    text(writer, "link", &channel.link)?;
    text(writer, "description", &channel.description)?;
    optional_text(writer, "language", channel.language.as_deref())?;
    optional_text(writer, "copyright", channel.copyright.as_deref())?;
    optional_text(writer, "managingEditor", channel.managing_editor.as_deref())?;
    optional_text(writer, "pubDate", channel.pub_date.as_deref())?;
    optional_text(writer, "lastBuildDate", channel.last_build_date.as_deref())?;
    optional_text(writer, "generator", channel.generator.as_deref())?;
    if let Some(image) = &channel.image {
        write_image(writer, image)?;
    }

    if let Some(image) = &channel.itunes_image {
        write_itunes_image(writer, image)?;
    }
    for category in &channel.itunes_categories {
        write_itunes_category(writer, category)?;
    }
    optional_text(writer, "itunes:explicit", channel.itunes_explicit.as_deref())?;
    optional_text(writer, "itunes:author", channel.itunes_author.as_deref())?;
    if let Some(owner) = &channel.itunes_owner {
        write_itunes_owner(writer, owner)?;
    }
    optional_text(writer, "itunes:type", channel.itunes_type.as_deref())?;
    optional_text(writer, "itunes:complete", channel.itunes_complete.as_deref())?;

    for category in &channel.google_play_categories {
        let mut element = BytesStart::new("googleplay:category");
        element.push_attribute(("text", category.text.as_str()));
        writer.write_event(Event::Empty(element))?;
    }

    if let Some(funding) = &channel.podcast_funding {
        let mut element = BytesStart::new("podcast:funding");
        element.push_attribute(("url", funding.url.as_str()));
        writer.write_event(Event::Start(element))?;
        writer.write_event(Event::Text(BytesText::new(&funding.text)))?;
        writer.write_event(Event::End(BytesEnd::new("podcast:funding")))?;
    }

    for item in &channel.items {
        write_item(writer, item)?;
    }

    writer.write_event(Event::End(BytesEnd::new("channel")))
}

fn write_item<W: Write>(writer: &mut Writer<W>, item: &Item) -> XmlResult {
    writer.write_event(Event::Start(BytesStart::new("item")))?;

    text(writer, "title", &item.title)?;
    text(writer, "link", &item.link)?;
    text(writer, "description", &item.description)?;
    if let Some(content) = &item.content {
        writer.write_event(Event::Start(BytesStart::new("content:encoded")))?;
        writer.write_event(Event::CData(BytesCData::new(content.as_str())))?;
        writer.write_event(Event::End(BytesEnd::new("content:encoded")))?;
    }
    optional_text(writer, "author", item.author.as_deref())?;
    if let Some(enclosure) = &item.enclosure {
        let mut element = BytesStart::new("enclosure");
        element.push_attribute(("url", enclosure.url.as_str()));
        element.push_attribute(("length", enclosure.length.as_str()));
        element.push_attribute(("type", enclosure.mime_type.as_str()));
        writer.write_event(Event::Empty(element))?;
    }
    optional_text(writer, "guid", item.guid.as_deref())?;
    optional_text(writer, "pubDate", item.pub_date.as_deref())?;

    if let Some(image) = &item.itunes_image {
        write_itunes_image(writer, image)?;
    }
    optional_text(writer, "itunes:duration", item.itunes_duration.as_deref())?;
    optional_text(writer, "itunes:explicit", item.itunes_explicit.as_deref())?;

    writer.write_event(Event::End(BytesEnd::new("item")))
}

fn write_image<W: Write>(writer: &mut Writer<W>, image: &Image) -> XmlResult {
    writer.write_event(Event::Start(BytesStart::new("image")))?;
    text(writer, "url", &image.url)?;
    text(writer, "title", &image.title)?;
    text(writer, "link", &image.link)?;
    if image.width > 0 {
        text(writer, "width", &image.width.to_string())?;
    }
    if image.height > 0 {
        text(writer, "height", &image.height.to_string())?;
    }
    writer.write_event(Event::End(BytesEnd::new("image")))
}

fn write_itunes_image<W: Write>(writer: &mut Writer<W>, image: &ItunesImage) -> XmlResult {
    let mut element = BytesStart::new("itunes:image");
    element.push_attribute(("href", image.href.as_str()));
    writer.write_event(Event::Empty(element))
}

/// Category chains nest, terminating at the first level without a sub.
fn write_itunes_category<W: Write>(
    writer: &mut Writer<W>,
    category: &ItunesCategory,
) -> XmlResult {
    let mut element = BytesStart::new("itunes:category");
    element.push_attribute(("text", category.text.as_str()));

    match &category.sub {
        Some(sub) => {
            writer.write_event(Event::Start(element))?;
            write_itunes_category(writer, sub)?;
            writer.write_event(Event::End(BytesEnd::new("itunes:category")))
        }
        None => writer.write_event(Event::Empty(element)),
    }
}

fn write_itunes_owner<W: Write>(writer: &mut Writer<W>, owner: &ItunesOwner) -> XmlResult {
    writer.write_event(Event::Start(BytesStart::new("itunes:owner")))?;
    optional_text(writer, "itunes:email", owner.email.as_deref())?;
    optional_text(writer, "itunes:name", owner.name.as_deref())?;
    writer.write_event(Event::End(BytesEnd::new("itunes:owner")))
}

fn text<W: Write>(writer: &mut Writer<W>, name: &str, value: &str) -> XmlResult {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(value)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))
}

fn optional_text<W: Write>(writer: &mut Writer<W>, name: &str, value: Option<&str>) -> XmlResult {
    if let Some(value) = value {
        text(writer, name, value)?;
    }
    Ok(())
}
