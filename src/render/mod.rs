// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

mod serialize;
mod transform;
pub(crate) mod tree;

use crate::error::RenderError;
use crate::ext::ExtensionOption;
use crate::feed::Feed;

/// Render a feed as an RSS 2.0 document.
///
/// This is the main entry point for the library. It:
/// 1. Builds the base document from the feed
/// 2. Applies each extension in the order supplied
/// 3. Serializes the result as XML text
///
/// Any extension or serialization failure aborts the whole render; no
/// partial output is ever returned. The feed itself is never mutated, so
/// the same value can be rendered from any number of threads.
pub fn render(feed: &Feed, extensions: &[ExtensionOption]) -> Result<String, RenderError> {
    let mut doc = transform::build_document(feed);

    for extension in extensions {
        extension
            .apply(feed, &mut doc)
            .map_err(|source| RenderError::Extension {
                name: extension.name(),
                source,
            })?;
    }

    Ok(serialize::to_string(&doc)?)
}

#[cfg(test)]
mod tests {
    use chrono::{TimeDelta, TimeZone, Utc};

    use super::*;
    use crate::ext::{ApplePodcast, GooglePlay, PodcastIndex, ShowType};
    use crate::feed::{Author, Category, Enclosure, Image, Item, Link};

    fn fixed_updated() -> chrono::DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap()
    }

    fn minimal_feed() -> Feed {
        Feed {
            title: "T".to_string(),
            link: Link {
                url: "http://x".to_string(),
                text: String::new(),
            },
            description: "D".to_string(),
            updated: Some(fixed_updated()),
            items: vec![Item {
                id: "item-1".to_string(),
                link: Link {
                    url: "http://x/1".to_string(),
                    text: String::new(),
                },
                title: "I".to_string(),
                description: "First".to_string(),
                updated: Some(fixed_updated()),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    fn podcast_feed() -> Feed {
        Feed {
            id: "https://example.com/feed.xml".to_string(),
            link: Link {
                url: "https://example.com".to_string(),
                text: String::new(),
            },
            updated: Some(fixed_updated()),
            title: "Test Podcast".to_string(),
            description: "A test podcast".to_string(),
            language: "en-us".to_string(),
            copyright: "© 2024 Example Media".to_string(),
            generator: "feedforge".to_string(),
            explicit: false,
            author: Some(Author {
                name: "Johnny Appleseed".to_string(),
                email: "jappleseed@example.com".to_string(),
            }),
            owner: Some(Author {
                name: "Example Media".to_string(),
                email: "owner@example.com".to_string(),
            }),
            image: Some(Image {
                url: "https://example.com/cover.png".to_string(),
                title: "Test Podcast".to_string(),
                link: "https://example.com".to_string(),
                width: 144,
                height: 144,
            }),
            items: vec![
                Item {
                    id: "ep-1".to_string(),
                    link: Link {
                        url: "https://example.com/1".to_string(),
                        text: String::new(),
                    },
                    updated: Some(fixed_updated()),
                    title: "Episode One".to_string(),
                    description: "First episode".to_string(),
                    content: "<p>Show notes</p>".to_string(),
                    author: Some(Author {
                        name: "Johnny Appleseed".to_string(),
                        email: "jappleseed@example.com".to_string(),
                    }),
                    enclosure: Some(Enclosure {
                        url: "https://example.com/1.mp3".to_string(),
                        length: "1234567".to_string(),
                        mime_type: "audio/mpeg".to_string(),
                        duration: Some(TimeDelta::seconds(1800)),
                    }),
                    explicit: true,
                    ..Default::default()
                },
                Item {
                    id: "ep-2".to_string(),
                    link: Link {
                        url: "https://example.com/2".to_string(),
                        text: String::new(),
                    },
                    updated: Some(fixed_updated()),
                    title: "Episode Two".to_string(),
                    description: "Second episode".to_string(),
                    enclosure: Some(Enclosure {
                        url: "https://example.com/2.mp3".to_string(),
                        length: "7654321".to_string(),
                        mime_type: "audio/mpeg".to_string(),
                        duration: None,
                    }),
                    ..Default::default()
                },
            ],
            ..Default::default()
        }
    }

    fn directory_extensions() -> Vec<ExtensionOption> {
        vec![
            ApplePodcast {
                categories: vec![Category {
                    name: "Arts".to_string(),
                    sub: Some(Box::new(Category {
                        name: "Books".to_string(),
                        sub: None,
                    })),
                }],
                show_type: Some(ShowType::Episodic),
                complete: true,
            }
            .into(),
            GooglePlay {
                categories: vec!["Arts".to_string(), "Books".to_string()],
            }
            .into(),
            PodcastIndex {
                funding: Some(Link {
                    url: "https://example.com/donate".to_string(),
                    text: "Support the show".to_string(),
                }),
            }
            .into(),
        ]
    }

    #[test]
    fn render_starts_with_xml_declaration() {
        let output = render(&minimal_feed(), &[]).unwrap();
        assert!(output.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
    }

    #[test]
    fn render_minimal_feed_emits_only_required_and_derived_fields() {
        let output = render(&minimal_feed(), &[]).unwrap();

        let channel = rss::Channel::read_from(output.as_bytes()).unwrap();
        assert_eq!(channel.title(), "T");
        assert_eq!(channel.link(), "http://x");
        assert_eq!(channel.description(), "D");
        assert_eq!(channel.items().len(), 1);

        let item = &channel.items()[0];
        assert_eq!(item.title(), Some("I"));
        assert_eq!(item.link(), Some("http://x/1"));
        assert_eq!(item.description(), Some("First"));
        assert_eq!(item.guid().map(|g| g.value()), Some("item-1"));
        assert!(item.pub_date().is_some());
        assert!(item.author().is_none());
        assert!(item.enclosure().is_none());

        assert!(!output.contains("<enclosure"));
        assert!(!output.contains("<author>"));
        assert!(!output.contains("itunes"));
        assert!(!output.contains("<content:encoded>"));
    }

    #[test]
    fn render_omits_empty_optional_channel_fields() {
        let output = render(&minimal_feed(), &[]).unwrap();
        assert!(!output.contains("<language>"));
        assert!(!output.contains("<copyright>"));
        assert!(!output.contains("<managingEditor>"));
        assert!(!output.contains("<generator>"));
        assert!(!output.contains("<image>"));
    }

    #[test]
    fn render_includes_optional_channel_fields_when_set() {
        let output = render(&podcast_feed(), &[]).unwrap();
        assert!(output.contains("<language>en-us</language>"));
        assert!(output.contains("<copyright>© 2024 Example Media</copyright>"));
        assert!(output.contains(
            "<managingEditor>jappleseed@example.com (Johnny Appleseed)</managingEditor>"
        ));
        assert!(output.contains("<generator>feedforge</generator>"));
        assert!(output.contains("<width>144</width>"));
    }

    #[test]
    fn render_derives_pub_date_and_last_build_date_from_updated() {
        let output = render(&podcast_feed(), &[]).unwrap();
        assert!(output.contains("<pubDate>Mon, 01 Jan 2024 12:00:00 +0000</pubDate>"));
        assert!(output.contains("<lastBuildDate>Mon, 01 Jan 2024 12:00:00 +0000</lastBuildDate>"));
    }

    #[test]
    fn render_defaults_updated_to_now() {
        let mut feed = minimal_feed();
        feed.updated = None;

        let output = render(&feed, &[]).unwrap();
        let channel = rss::Channel::read_from(output.as_bytes()).unwrap();
        assert!(channel.pub_date().is_some());
        assert!(channel.last_build_date().is_some());
    }

    #[test]
    fn render_is_idempotent_for_a_fixed_update_time() {
        let feed = podcast_feed();
        let extensions = directory_extensions();

        let first = render(&feed, &extensions).unwrap();
        let second = render(&feed, &extensions).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn render_wraps_item_content_in_cdata() {
        let output = render(&podcast_feed(), &[]).unwrap();
        assert!(output.contains("<content:encoded><![CDATA[<p>Show notes</p>]]></content:encoded>"));
    }

    #[test]
    fn apple_extension_declares_namespace_and_channel_metadata() {
        let output = render(&podcast_feed(), &directory_extensions()).unwrap();

        assert!(output.contains("xmlns:itunes=\"http://www.itunes.com/dtds/podcast-1.0.dtd\""));
        assert!(output.contains("<itunes:image href=\"https://example.com/cover.png\"/>"));
        assert!(output.contains("<itunes:explicit>false</itunes:explicit>"));
        assert!(output.contains("<itunes:author>Johnny Appleseed</itunes:author>"));
        assert!(output.contains("<itunes:email>owner@example.com</itunes:email>"));
        assert!(output.contains("<itunes:name>Example Media</itunes:name>"));
        assert!(output.contains("<itunes:type>episodic</itunes:type>"));
        assert!(output.contains("<itunes:complete>Yes</itunes:complete>"));
    }

    #[test]
    fn apple_extension_expands_nested_categories() {
        let output = render(&podcast_feed(), &directory_extensions()).unwrap();
        assert!(output.contains("<itunes:category text=\"Arts\">"));
        assert!(output.contains("<itunes:category text=\"Books\"/>"));
    }

    #[test]
    fn apple_extension_renders_item_fields() {
        let output = render(&podcast_feed(), &directory_extensions()).unwrap();

        // Duration only where the enclosure carries one.
        assert_eq!(output.matches("<itunes:duration>").count(), 1);
        assert!(output.contains("<itunes:duration>0:30:00</itunes:duration>"));

        // Item-level explicit only where set, unlike the channel flag.
        assert_eq!(output.matches("<itunes:explicit>true</itunes:explicit>").count(), 1);
    }

    #[test]
    fn apple_extension_requires_an_enclosure_on_every_item() {
        let mut feed = podcast_feed();
        feed.items[1].enclosure = None;

        let err = render(&feed, &directory_extensions()).unwrap_err();
        assert_eq!(
            err.to_string(),
            "ApplePodcast: item at 1: must contain an enclosure"
        );
    }

    #[test]
    fn google_play_extension_appends_flat_categories() {
        let output = render(&podcast_feed(), &directory_extensions()).unwrap();
        assert!(output.contains("xmlns:googleplay=\"http://www.google.com/schemas/play-podcasts/1.0\""));
        assert_eq!(output.matches("<googleplay:category").count(), 2);
        assert!(output.contains("<googleplay:category text=\"Arts\"/>"));
    }

    #[test]
    fn podcast_index_extension_emits_funding() {
        let output = render(&podcast_feed(), &directory_extensions()).unwrap();
        assert!(output.contains("xmlns:podcast=\"https://podcastindex.org/namespace/1.0\""));
        assert!(output.contains(
            "<podcast:funding url=\"https://example.com/donate\">Support the show</podcast:funding>"
        ));
    }

    #[test]
    fn extension_namespaces_appear_only_when_applied() {
        let output = render(&minimal_feed(), &[]).unwrap();
        assert!(output.contains("xmlns:content=\"http://purl.org/rss/1.0/modules/content/\""));
        assert!(!output.contains("xmlns:itunes"));
        assert!(!output.contains("xmlns:googleplay"));
        assert!(!output.contains("xmlns:podcast"));
    }

    #[test]
    fn extensions_apply_the_same_in_any_order() {
        let feed = podcast_feed();
        let mut reversed = directory_extensions();
        reversed.reverse();

        let forward = render(&feed, &directory_extensions()).unwrap();
        let backward = render(&feed, &reversed).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn generator_option_overrides_the_feed_field() {
        let output = render(
            &podcast_feed(),
            &[ExtensionOption::Generator("custom/1.0".to_string())],
        )
        .unwrap();
        assert!(output.contains("<generator>custom/1.0</generator>"));
        assert!(!output.contains("<generator>feedforge</generator>"));
    }

    #[test]
    fn minimize_option_strips_all_inserted_whitespace() {
        let output = render(&podcast_feed(), &[ExtensionOption::MinimizeOutput(true)]).unwrap();
        assert!(!output.contains('\n'));
    }

    #[test]
    fn minimized_and_indented_output_parse_identically() {
        let feed = podcast_feed();
        let mut extensions = directory_extensions();

        let indented = render(&feed, &extensions).unwrap();
        extensions.push(ExtensionOption::MinimizeOutput(true));
        let minimized = render(&feed, &extensions).unwrap();

        assert_ne!(indented, minimized);
        let from_indented = rss::Channel::read_from(indented.as_bytes()).unwrap();
        let from_minimized = rss::Channel::read_from(minimized.as_bytes()).unwrap();
        assert_eq!(from_indented, from_minimized);
    }

    #[test]
    fn generated_feed_round_trips_through_a_parser() {
        let output = render(&podcast_feed(), &directory_extensions()).unwrap();

        let channel = rss::Channel::read_from(output.as_bytes()).unwrap();
        assert_eq!(channel.title(), "Test Podcast");
        assert_eq!(channel.items().len(), 2);

        let itunes = channel.itunes_ext().unwrap();
        assert_eq!(itunes.author(), Some("Johnny Appleseed"));
        assert_eq!(itunes.explicit(), Some("false"));

        let episode = &channel.items()[0];
        let enclosure = episode.enclosure().unwrap();
        assert_eq!(enclosure.url(), "https://example.com/1.mp3");
        assert_eq!(enclosure.length(), "1234567");
        assert_eq!(episode.content(), Some("<p>Show notes</p>"));
    }

    #[test]
    fn special_characters_are_escaped() {
        let mut feed = minimal_feed();
        feed.title = "Nuts & Bolts".to_string();

        let output = render(&feed, &[]).unwrap();
        assert!(output.contains("<title>Nuts &amp; Bolts</title>"));

        let channel = rss::Channel::read_from(output.as_bytes()).unwrap();
        assert_eq!(channel.title(), "Nuts & Bolts");
    }
}
