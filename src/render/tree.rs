//! Intermediate representation of the output document.
//!
//! Mirrors the shape of the generated XML: one struct per element kind,
//! with every optional field modeled as an `Option` (or `Vec`) so the
//! serializer can skip what is absent instead of emitting empty markup.

/// Content module namespace, always declared on the root element.
pub(crate) const CONTENT_NS: &str = "http://purl.org/rss/1.0/modules/content/";

pub(crate) const RSS_VERSION: &str = "2.0";

/// The `<rss>` root: namespace declarations, output mode, and the channel.
#[derive(Debug, Default)]
pub(crate) struct Document {
    pub itunes_ns: Option<&'static str>,
    pub google_play_ns: Option<&'static str>,
    pub podcast_ns: Option<&'static str>,
    /// Emit the most compact encoding instead of indented output.
    pub minimize: bool,
    pub channel: Channel,
}

#[derive(Debug, Default)]
pub(crate) struct Channel {
    pub title: String,
    pub link: String,
    pub description: String,
    pub language: Option<String>,
    pub copyright: Option<String>,
    pub managing_editor: Option<String>,
    pub pub_date: Option<String>,
    pub last_build_date: Option<String>,
    pub generator: Option<String>,
    pub image: Option<Image>,

    pub itunes_image: Option<ItunesImage>,
    pub itunes_categories: Vec<ItunesCategory>,
    pub itunes_explicit: Option<String>,
    pub itunes_author: Option<String>,
    pub itunes_owner: Option<ItunesOwner>,
    pub itunes_type: Option<String>,
    pub itunes_complete: Option<String>,

    pub google_play_categories: Vec<GooglePlayCategory>,
    pub podcast_funding: Option<Funding>,

    pub items: Vec<Item>,
}

#[derive(Debug, Default)]
pub(crate) struct Item {
    pub title: String,
    pub link: String,
    pub description: String,
    /// Rendered as a CDATA `<content:encoded>` block.
    pub content: Option<String>,
    pub author: Option<String>,
    pub enclosure: Option<Enclosure>,
    pub guid: Option<String>,
    pub pub_date: Option<String>,

    pub itunes_image: Option<ItunesImage>,
    pub itunes_duration: Option<String>,
    pub itunes_explicit: Option<String>,
}

#[derive(Debug, Default)]
pub(crate) struct Image {
    pub url: String,
    pub title: String,
    pub link: String,
    /// Zero means unspecified; the serializer omits the element.
    pub width: u32,
    pub height: u32,
}

/// `<enclosure>`; all fields are attributes, written verbatim.
#[derive(Debug, Default)]
pub(crate) struct Enclosure {
    pub url: String,
    pub length: String,
    pub mime_type: String,
}

#[derive(Debug, Default)]
pub(crate) struct ItunesImage {
    pub href: String,
}

/// `<itunes:category>`; nests at most one sub-category per level.
#[derive(Debug, Default)]
pub(crate) struct ItunesCategory {
    pub text: String,
    pub sub: Option<Box<ItunesCategory>>,
}

#[derive(Debug, Default)]
pub(crate) struct ItunesOwner {
    pub email: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Default)]
pub(crate) struct GooglePlayCategory {
    pub text: String,
}

/// `<podcast:funding>`; the url is an attribute, the text inner content.
#[derive(Debug, Default)]
pub(crate) struct Funding {
    pub url: String,
    pub text: String,
}
