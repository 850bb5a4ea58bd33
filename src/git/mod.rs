const TAG_PREFIX: &str = "refs/tags/";
const BRANCH_PREFIX: &str = "refs/heads/";
const RAW_CONTENT_HOST: &str = "https://raw.githubusercontent.com";
const LOGO_FILE_NAME: &str = "logo.png";

/// A fully qualified git ref as handed out by the CI runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitRef {
    Tag(String),
    Branch(String),
}

impl GitRef {
    /// Anything other than a non-empty tag or branch ref yields `None`.
    pub fn parse(value: &str) -> Option<GitRef> {
        if let Some(tag) = value.strip_prefix(TAG_PREFIX) {
            (!tag.is_empty()).then(|| GitRef::Tag(tag.to_owned()))
        } else if let Some(branch) = value.strip_prefix(BRANCH_PREFIX) {
            (!branch.is_empty()).then(|| GitRef::Branch(branch.to_owned()))
        } else {
            None
        }
    }

    pub fn qualified(&self) -> String {
        match self {
            GitRef::Tag(tag) => format!("{}{}", TAG_PREFIX, tag),
            GitRef::Branch(branch) => format!("{}{}", BRANCH_PREFIX, branch),
        }
    }
}

/// Raw URL of `logo.png` at the given ref, without checking it exists.
pub fn logo_url(repository: &str, git_ref: &str) -> Option<String> {
    if repository.is_empty() {
        return None;
    }

    let git_ref = GitRef::parse(git_ref)?;

    Some(format!(
        "{}/{}/{}/{}",
        RAW_CONTENT_HOST,
        repository,
        git_ref.qualified(),
        LOGO_FILE_NAME
    ))
}
