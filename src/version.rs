/// A version string as written in a descriptor, e.g. `v1.2.3` or `1.2.3`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Version {
    raw: String,
}

impl Version {
    pub fn new(raw: impl Into<String>) -> Self {
        Version { raw: raw.into() }
    }

    /// Strip one leading 'v' or 'V' if it exists
    pub fn strip_v_prefix(&self) -> &str {
        if self.raw.starts_with(['v', 'V']) {
            &self.raw[1..]
        } else {
            &self.raw
        }
    }
}
