use crate::{
    config::{Context, IconStyle, MissingIdPolicy, Options},
    descriptor::{non_empty, ReleaseDescriptor},
    discord::{
        ActionRow, Button, Component, Container, Emoji, Message, Section, Separator, TextDisplay,
        Thumbnail,
    },
    git,
    version::Version,
};
use chrono::{DateTime, Utc};

const UNKNOWN_NAME: &str = "Unknown Mod";
const DOWNLOAD_BASE_URL: &str = "https://geode-sdk.org/mods";

const DOWNLOAD_LABEL: &str = "Download";
const SOURCE_LABEL: &str = "Source";

const DOWNLOAD_EMOJI_ID: &str = "1471682221881692191";
const DOWNLOAD_EMOJI_NAME: &str = "downloads";
const DOWNLOAD_EMOJI_UNICODE: &str = "📥";
const SOURCE_EMOJI_ID: &str = "1471682603106042013";
const SOURCE_EMOJI_NAME: &str = "GitHub";
const SOURCE_EMOJI_UNICODE: &str = "💻";

/// Display values derived from a descriptor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Release {
    pub name: String,
    pub version: String,
    pub geode: String,
    pub description: Option<String>,
    pub id: Option<String>,
    pub source: Option<String>,
}

impl Release {
    pub fn new(descriptor: &ReleaseDescriptor, options: &Options) -> Self {
        let name = non_empty(&descriptor.name)
            .or(descriptor.id())
            .unwrap_or(UNKNOWN_NAME)
            .to_owned();

        let version = non_empty(&descriptor.version).unwrap_or(options.default_version.as_str());

        Release {
            name,
            version: Version::new(version).strip_v_prefix().to_owned(),
            geode: Version::new(
                non_empty(&descriptor.geode).unwrap_or(options.default_version.as_str()),
            )
            .strip_v_prefix()
            .to_owned(),
            description: non_empty(&descriptor.description).map(str::to_owned),
            id: descriptor.id().map(str::to_owned),
            source: descriptor.source().map(str::to_owned),
        }
    }

    pub fn download_url(&self) -> Option<String> {
        self.id
            .as_ref()
            .map(|id| format!("{}/{}", DOWNLOAD_BASE_URL, id))
    }
}

pub fn compose(
    descriptor: &ReleaseDescriptor,
    context: &Context,
    options: &Options,
    now: DateTime<Utc>,
) -> Message {
    let release = Release::new(descriptor, options);
    log::debug!("composing message for {} v{}", release.name, release.version);

    let mut blocks = text_blocks(&release, context, options);

    if options.show_description {
        if let Some(description) = &release.description {
            blocks.push(Component::Text(TextDisplay::new(description)));
        }
    }

    let buttons = buttons(&release, options);
    if !buttons.is_empty() {
        blocks.push(Component::Separator(Separator::divider()));
        blocks.push(Component::ActionRow(ActionRow::new(buttons)));
    }

    let container = Container::new(blocks)
        .accent_color(options.accent_color)
        .spoiler(options.spoiler);

    let mut components = vec![Component::Container(container)];
    if options.footer {
        components.push(Component::Text(footer(&release, now)));
    }

    Message::new(components)
}

/// Heading, version and changelog, with the logo as accessory when the ref
/// points at one.
fn text_blocks(release: &Release, context: &Context, options: &Options) -> Vec<Component> {
    let mut lines = vec![
        TextDisplay::new(format!("# {}", release.name)),
        TextDisplay::new(format!("### Release `v{}`", release.version)),
    ];

    if !context.changelog.is_empty() {
        lines.push(TextDisplay::new(&context.changelog));
    }

    let logo = git::logo_url(&context.repository, &context.git_ref)
        .map(|url| Thumbnail::new(url).description(format!("{} mod logo.", release.name)));

    if logo.is_none() {
        log::debug!("no logo for ref {:?}, skipping accessory", context.git_ref);

        if options.inline_text_without_logo {
            return lines.into_iter().map(Component::Text).collect();
        }
    }

    vec![Component::Section(Section::new(lines).accessory(logo))]
}

fn buttons(release: &Release, options: &Options) -> Vec<Button> {
    let mut buttons = Vec::new();

    let download_url = release.download_url();
    if download_url.is_some() || options.missing_id == MissingIdPolicy::OmitUrl {
        buttons.push(
            Button::link(DOWNLOAD_LABEL)
                .url(download_url)
                .emoji(icon(
                    options.icons,
                    DOWNLOAD_EMOJI_ID,
                    DOWNLOAD_EMOJI_NAME,
                    DOWNLOAD_EMOJI_UNICODE,
                )),
        );
    }

    if let Some(source) = &release.source {
        buttons.push(
            Button::link(SOURCE_LABEL)
                .url(Some(source.to_owned()))
                .emoji(icon(
                    options.icons,
                    SOURCE_EMOJI_ID,
                    SOURCE_EMOJI_NAME,
                    SOURCE_EMOJI_UNICODE,
                )),
        );
    }

    buttons
}

fn icon(style: IconStyle, id: &str, name: &str, unicode: &str) -> Option<Emoji> {
    match style {
        IconStyle::Custom => Some(Emoji::custom(id, name)),
        IconStyle::Unicode => Some(Emoji::unicode(unicode)),
        IconStyle::None => None,
    }
}

fn footer(release: &Release, now: DateTime<Utc>) -> TextDisplay {
    let timestamp = format!("-# <t:{}:F>", now.timestamp());

    TextDisplay::new(format!("{} • **Geode `v{}`**", timestamp, release.geode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prune::{contains_null, prune_nulls};
    use chrono::TimeZone;
    use serde_json::{json, Value};
    use std::path::PathBuf;

    fn context(repository: &str, git_ref: &str, changelog: &str) -> Context {
        Context {
            webhook_url: "https://hook".to_owned(),
            repository: repository.to_owned(),
            git_ref: git_ref.to_owned(),
            changelog: changelog.to_owned(),
            descriptor_path: PathBuf::from("mod.json"),
            options_path: None,
        }
    }

    fn descriptor(json: Value) -> ReleaseDescriptor {
        serde_json::from_value(json).unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.timestamp_opt(1_700_000_000, 0).unwrap()
    }

    fn tagged() -> Context {
        context("org/repo", "refs/tags/v1.2.3", "")
    }

    #[test]
    fn should_strip_v_from_versions() {
        let release = Release::new(
            &descriptor(json!({ "version": "V1.2.3", "geode": "v4.0.0" })),
            &Options::default(),
        );

        assert_eq!(release.version, "1.2.3");
        assert_eq!(release.geode, "4.0.0");
    }

    #[test]
    fn should_keep_versions_without_prefix() {
        let release = Release::new(
            &descriptor(json!({ "version": "2.0.0-beta" })),
            &Options::default(),
        );

        assert_eq!(release.version, "2.0.0-beta");
        assert_eq!(release.geode, "1.0.0");
    }

    #[test]
    fn should_use_default_version() {
        let options = Options {
            default_version: "v0.0.0".to_owned(),
            ..Options::default()
        };

        let release = Release::new(&descriptor(json!({})), &options);

        assert_eq!(release.version, "0.0.0");
    }

    #[test]
    fn should_fall_back_to_id_then_placeholder_name() {
        let by_id = Release::new(&descriptor(json!({ "id": "foo" })), &Options::default());
        let unknown = Release::new(&descriptor(json!({})), &Options::default());

        assert_eq!(by_id.name, "foo");
        assert_eq!(unknown.name, "Unknown Mod");
    }

    #[test]
    fn should_compose_two_lines_without_changelog() {
        let message = compose(
            &descriptor(json!({ "name": "Foo", "id": "foo", "version": "v1.2.3" })),
            &tagged(),
            &Options::default(),
            now(),
        );

        let section = message.container().unwrap().section().unwrap();
        assert_eq!(section.lines(), vec!["# Foo", "### Release `v1.2.3`"]);
    }

    #[test]
    fn should_compose_three_lines_with_changelog() {
        let message = compose(
            &descriptor(json!({ "name": "Foo", "id": "foo", "version": "v1.2.3" })),
            &context("org/repo", "refs/tags/v1.2.3", "Fixed bugs.\n- and more"),
            &Options::default(),
            now(),
        );

        let section = message.container().unwrap().section().unwrap();
        assert_eq!(section.lines().len(), 3);
        assert_eq!(section.lines()[2], "Fixed bugs.\n- and more");
    }

    #[test]
    fn should_attach_logo_for_a_tag_ref() {
        let message = compose(
            &descriptor(json!({ "name": "Foo" })),
            &context("org/repo", "refs/tags/v2.0.0", ""),
            &Options::default(),
            now(),
        );

        let accessory = message
            .container()
            .unwrap()
            .section()
            .unwrap()
            .accessory
            .as_ref()
            .unwrap();
        assert_eq!(
            accessory.media.url,
            "https://raw.githubusercontent.com/org/repo/refs/tags/v2.0.0/logo.png"
        );
        assert_eq!(accessory.description.as_deref(), Some("Foo mod logo."));
    }

    #[test]
    fn should_keep_section_without_a_logo() {
        let message = compose(
            &descriptor(json!({ "name": "Foo", "id": "foo" })),
            &context("org/repo", "", ""),
            &Options::default(),
            now(),
        );

        let section = message.container().unwrap().section().unwrap();
        assert_eq!(section.lines(), vec!["# Foo", "### Release `v1.0.0`"]);
        assert!(section.accessory.is_none());

        let value = prune_nulls(serde_json::to_value(&message).unwrap());
        let section = &value["components"][0]["components"][0];
        assert_eq!(section["type"], 9);
        assert!(section.get("accessory").is_none());
    }

    #[test]
    fn should_keep_section_for_an_unknown_ref() {
        let message = compose(
            &descriptor(json!({ "name": "Foo" })),
            &context("org/repo", "refs/pull/12/merge", "Notes"),
            &Options::default(),
            now(),
        );

        let section = message.container().unwrap().section().unwrap();
        assert_eq!(section.lines().len(), 3);
        assert!(section.accessory.is_none());
    }

    #[test]
    fn should_inline_text_without_a_logo_when_configured() {
        let options = Options {
            inline_text_without_logo: true,
            ..Options::default()
        };

        let message = compose(
            &descriptor(json!({ "name": "Foo", "version": "1.0.0" })),
            &context("org/repo", "", "Notes"),
            &options,
            now(),
        );

        let container = message.container().unwrap();
        assert!(container.section().is_none());

        let texts: Vec<&str> = container
            .components
            .iter()
            .filter_map(|component| match component {
                Component::Text(text) => Some(text.content.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(texts, vec!["# Foo", "### Release `v1.0.0`", "Notes"]);
    }

    #[test]
    fn should_add_download_and_source_buttons() {
        let message = compose(
            &descriptor(json!({
                "name": "Foo",
                "id": "foo",
                "links": { "source": "https://github.com/org/repo" },
            })),
            &tagged(),
            &Options::default(),
            now(),
        );

        let container = message.container().unwrap();
        assert!(container.has_divider());

        let row = container.action_row().unwrap();
        assert_eq!(row.components.len(), 2);
        assert_eq!(row.components[0].label, "Download");
        assert_eq!(
            row.components[0].url.as_deref(),
            Some("https://geode-sdk.org/mods/foo")
        );
        assert_eq!(row.components[1].label, "Source");
        assert_eq!(
            row.components[1].url.as_deref(),
            Some("https://github.com/org/repo")
        );
    }

    #[test]
    fn should_skip_divider_and_row_without_buttons() {
        let message = compose(
            &descriptor(json!({ "name": "Foo" })),
            &tagged(),
            &Options::default(),
            now(),
        );

        let container = message.container().unwrap();
        assert!(!container.has_divider());
        assert!(container.action_row().is_none());
    }

    #[test]
    fn should_keep_download_button_without_url_when_configured() {
        let options = Options {
            missing_id: MissingIdPolicy::OmitUrl,
            ..Options::default()
        };

        let message = compose(&descriptor(json!({ "name": "Foo" })), &tagged(), &options, now());
        let value = prune_nulls(serde_json::to_value(&message).unwrap());

        let button = &value["components"][0]["components"][2]["components"][0];
        assert_eq!(button["label"], "Download");
        assert!(button.get("url").is_none());
    }

    #[test]
    fn should_follow_icon_style() {
        let source = json!({ "id": "foo", "links": { "source": "https://src" } });

        let none = compose(
            &descriptor(source.clone()),
            &tagged(),
            &Options {
                icons: IconStyle::None,
                ..Options::default()
            },
            now(),
        );
        let unicode = compose(
            &descriptor(source),
            &tagged(),
            &Options {
                icons: IconStyle::Unicode,
                ..Options::default()
            },
            now(),
        );

        let none_row = none.container().unwrap().action_row().unwrap();
        assert!(none_row.components.iter().all(|b| b.emoji.is_none()));

        let unicode_row = unicode.container().unwrap().action_row().unwrap();
        assert_eq!(
            unicode_row.components[0].emoji,
            Some(Emoji::unicode(DOWNLOAD_EMOJI_UNICODE))
        );
    }

    #[test]
    fn should_render_description_after_section() {
        let message = compose(
            &descriptor(json!({ "name": "Foo", "description": "Does foo" })),
            &tagged(),
            &Options::default(),
            now(),
        );

        let container = message.container().unwrap();
        assert!(matches!(
            &container.components[1],
            Component::Text(text) if text.content == "Does foo"
        ));
    }

    #[test]
    fn should_append_footer_with_geode_version() {
        let message = compose(
            &descriptor(json!({ "name": "Foo", "geode": "v4.2.0" })),
            &tagged(),
            &Options::default(),
            now(),
        );

        assert_eq!(message.components.len(), 2);
        assert!(matches!(
            &message.components[1],
            Component::Text(text) if text.content == "-# <t:1700000000:F> • **Geode `v4.2.0`**"
        ));
    }

    #[test]
    fn should_label_footer_with_default_geode_version() {
        let message = compose(
            &descriptor(json!({ "name": "Foo" })),
            &tagged(),
            &Options::default(),
            now(),
        );

        assert!(matches!(
            &message.components[1],
            Component::Text(text) if text.content == "-# <t:1700000000:F> • **Geode `v1.0.0`**"
        ));
    }

    #[test]
    fn should_drop_footer_when_disabled() {
        let options = Options {
            footer: false,
            ..Options::default()
        };

        let message = compose(&descriptor(json!({ "name": "Foo" })), &tagged(), &options, now());

        assert_eq!(message.components.len(), 1);
    }

    #[test]
    fn should_leave_no_nulls_after_pruning() {
        let message = compose(
            &descriptor(json!({})),
            &context("", "", ""),
            &Options {
                missing_id: MissingIdPolicy::OmitUrl,
                icons: IconStyle::Unicode,
                ..Options::default()
            },
            now(),
        );

        let raw = serde_json::to_value(&message).unwrap();
        assert!(contains_null(&raw));

        assert!(!contains_null(&prune_nulls(raw)));
    }

    #[test]
    fn should_carry_container_settings() {
        let options = Options {
            accent_color: 255,
            spoiler: true,
            ..Options::default()
        };

        let message = compose(&descriptor(json!({})), &tagged(), &options, now());

        let container = message.container().unwrap();
        assert_eq!(container.accent_color, Some(255));
        assert_eq!(container.spoiler, Some(true));
        assert_eq!(message.flags, 32768);
    }
}
