//! Discord message components ("components v2") as sent to an execute-webhook
//! endpoint.
//!
//! Optional fields serialize as `null`; callers run the serialized value
//! through [`crate::prune::prune_nulls`] before it goes on the wire.

mod emoji;

pub use emoji::Emoji;

use serde::{Serialize, Serializer};

/// Message flag enabling the layout components below.
pub const IS_COMPONENTS_V2: u32 = 1 << 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
    ActionRow = 1,
    Button = 2,
    Section = 9,
    TextDisplay = 10,
    Thumbnail = 11,
    Separator = 14,
    Container = 17,
}

impl Serialize for ComponentType {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(*self as u8)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonStyle {
    Link = 5,
}

impl Serialize for ButtonStyle {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u8(*self as u8)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Message {
    pub flags: u32,
    pub components: Vec<Component>,
}

impl Message {
    pub fn new(components: Vec<Component>) -> Self {
        Message {
            flags: IS_COMPONENTS_V2,
            components,
        }
    }
}

#[cfg(test)]
impl Message {
    pub fn container(&self) -> Option<&Container> {
        self.components.iter().find_map(|component| match component {
            Component::Container(container) => Some(container),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Component {
    Container(Container),
    Section(Section),
    Text(TextDisplay),
    Separator(Separator),
    ActionRow(ActionRow),
}

#[derive(Debug, Clone, Serialize)]
pub struct Container {
    #[serde(rename = "type")]
    kind: ComponentType,
    pub accent_color: Option<u32>,
    pub spoiler: Option<bool>,
    pub components: Vec<Component>,
}

impl Container {
    pub fn new(components: Vec<Component>) -> Self {
        Container {
            kind: ComponentType::Container,
            accent_color: None,
            spoiler: None,
            components,
        }
    }

    pub fn accent_color(mut self, accent_color: u32) -> Self {
        self.accent_color = Some(accent_color);
        self
    }

    pub fn spoiler(mut self, spoiler: bool) -> Self {
        self.spoiler = Some(spoiler);
        self
    }
}

#[cfg(test)]
impl Container {
    pub fn section(&self) -> Option<&Section> {
        self.components.iter().find_map(|component| match component {
            Component::Section(section) => Some(section),
            _ => None,
        })
    }

    pub fn action_row(&self) -> Option<&ActionRow> {
        self.components.iter().find_map(|component| match component {
            Component::ActionRow(row) => Some(row),
            _ => None,
        })
    }

    pub fn has_divider(&self) -> bool {
        self.components
            .iter()
            .any(|component| matches!(component, Component::Separator(_)))
    }
}

/// Up to three text blocks with an optional accessory on the side.
#[derive(Debug, Clone, Serialize)]
pub struct Section {
    #[serde(rename = "type")]
    kind: ComponentType,
    pub components: Vec<TextDisplay>,
    pub accessory: Option<Thumbnail>,
}

impl Section {
    pub fn new(components: Vec<TextDisplay>) -> Self {
        Section {
            kind: ComponentType::Section,
            components,
            accessory: None,
        }
    }

    pub fn accessory(mut self, accessory: Option<Thumbnail>) -> Self {
        self.accessory = accessory;
        self
    }
}

#[cfg(test)]
impl Section {
    pub fn lines(&self) -> Vec<&str> {
        self.components
            .iter()
            .map(|text| text.content.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TextDisplay {
    #[serde(rename = "type")]
    kind: ComponentType,
    pub content: String,
}

impl TextDisplay {
    pub fn new(content: impl Into<String>) -> Self {
        TextDisplay {
            kind: ComponentType::TextDisplay,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Thumbnail {
    #[serde(rename = "type")]
    kind: ComponentType,
    pub media: UnfurledMedia,
    pub description: Option<String>,
}

impl Thumbnail {
    pub fn new(url: impl Into<String>) -> Self {
        Thumbnail {
            kind: ComponentType::Thumbnail,
            media: UnfurledMedia { url: url.into() },
            description: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UnfurledMedia {
    pub url: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Separator {
    #[serde(rename = "type")]
    kind: ComponentType,
    pub spacing: u8,
    pub divider: bool,
}

impl Separator {
    pub fn divider() -> Self {
        Separator {
            kind: ComponentType::Separator,
            spacing: 1,
            divider: true,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ActionRow {
    #[serde(rename = "type")]
    kind: ComponentType,
    pub components: Vec<Button>,
}

impl ActionRow {
    pub fn new(components: Vec<Button>) -> Self {
        ActionRow {
            kind: ComponentType::ActionRow,
            components,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Button {
    #[serde(rename = "type")]
    kind: ComponentType,
    pub style: ButtonStyle,
    pub url: Option<String>,
    pub label: String,
    pub emoji: Option<Emoji>,
    pub disabled: bool,
}

impl Button {
    pub fn link(label: impl Into<String>) -> Self {
        Button {
            kind: ComponentType::Button,
            style: ButtonStyle::Link,
            url: None,
            label: label.into(),
            emoji: None,
            disabled: false,
        }
    }

    pub fn url(mut self, url: Option<String>) -> Self {
        self.url = url;
        self
    }

    pub fn emoji(mut self, emoji: Option<Emoji>) -> Self {
        self.emoji = emoji;
        self
    }
}
