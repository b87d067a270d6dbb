use crate::domain::IssueKey;

/// First line of the comment block git appends when it opens an editor
pub const GIT_EDITOR_SENTINEL: &str = "# Please enter the commit message for your changes.";

/// The part of a commit message the user actually wrote
///
/// Everything from the editor sentinel onward is dropped, along with
/// trailing whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserMessage {
    text: String,
}

impl UserMessage {
    pub fn parse(raw: &str) -> Self {
        let body = match raw.find(GIT_EDITOR_SENTINEL) {
            Some(idx) => &raw[..idx],
            None => raw,
        };
        UserMessage {
            text: body.trim_end().to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn contains_key(&self, key: &IssueKey) -> bool {
        self.text.contains(key.as_str())
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Decide whether `raw` needs the key prefixed and build the new message
///
/// Returns `None` when the message is empty or already mentions the key.
pub fn compose(raw: &str, key: &IssueKey) -> Option<String> {
    let message = UserMessage::parse(raw);
    if message.is_empty() || message.contains_key(key) {
        return None;
    }
    Some(format!("{} {}", key, message.as_str()))
}
