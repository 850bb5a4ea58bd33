use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Emoji {
    pub id: Option<String>,
    pub name: String,
    pub animated: Option<bool>,
}

impl Emoji {
    /// An emoji uploaded to the guild or application.
    pub fn custom(id: impl Into<String>, name: impl Into<String>) -> Self {
        Emoji {
            id: Some(id.into()),
            name: name.into(),
            animated: Some(false),
        }
    }

    pub fn unicode(name: impl Into<String>) -> Self {
        Emoji {
            id: None,
            name: name.into(),
            animated: None,
        }
    }
}
