//! Diagnostics produced by rules and the message catalog that renders them.
//!
//! Rules describe problems with either verbatim text (typically an engine
//! error) or a [`MessageKey`] plus substitution arguments. Turning that into
//! display text is the reporter's job, via [`Message::render`].

use std::{collections::BTreeMap, fmt, sync::LazyLock};

use regex::{Captures, Regex};
use swc_common::Span;

/// Placeholder syntax in catalog templates: `{name}`.
static PLACEHOLDER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(\w+)\}").expect("placeholder pattern is valid"));

/// Taxonomy codes for templated messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MessageKey {
    InvalidRegexp,
}

impl MessageKey {
    pub fn code(self) -> &'static str {
        match self {
            MessageKey::InvalidRegexp => "invalid regexp",
        }
    }

    pub fn template(self) -> &'static str {
        match self {
            MessageKey::InvalidRegexp => "Invalid flags supplied to RegExp constructor '{arg}'",
        }
    }
}

impl fmt::Display for MessageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

pub type MessageArgs = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Display text supplied as-is.
    Text(String),
    /// Catalog message with placeholder values.
    Keyed { key: MessageKey, args: MessageArgs },
}

impl Message {
    pub fn keyed<const N: usize>(key: MessageKey, args: [(&str, &str); N]) -> Self {
        Message::Keyed {
            key,
            args: args
                .into_iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
        }
    }

    pub fn key(&self) -> Option<MessageKey> {
        match self {
            Message::Text(_) => None,
            Message::Keyed { key, .. } => Some(*key),
        }
    }

    pub fn args(&self) -> Option<&MessageArgs> {
        match self {
            Message::Text(_) => None,
            Message::Keyed { args, .. } => Some(args),
        }
    }

    /// Final display text. Unknown placeholders are left untouched.
    pub fn render(&self) -> String {
        match self {
            Message::Text(text) => text.clone(),
            Message::Keyed { key, args } => PLACEHOLDER
                .replace_all(key.template(), |caps: &Captures<'_>| {
                    args.get(&caps[1])
                        .cloned()
                        .unwrap_or_else(|| caps[0].to_string())
                })
                .into_owned(),
        }
    }
}

/// A problem found at a location in the AST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub span: Span,
    pub message: Message,
}

impl Diagnostic {
    pub fn new(span: Span, message: Message) -> Self {
        Self { span, message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_text() {
        let message = Message::Text("Unterminated character class".to_string());
        assert_eq!(message.render(), "Unterminated character class");
        assert_eq!(message.key(), None);
    }

    #[test]
    fn test_render_keyed() {
        let message = Message::keyed(MessageKey::InvalidRegexp, [("arg", "q")]);
        assert_eq!(
            message.render(),
            "Invalid flags supplied to RegExp constructor 'q'"
        );
        assert_eq!(message.key(), Some(MessageKey::InvalidRegexp));
        assert_eq!(message.args().unwrap()["arg"], "q");
    }

    #[test]
    fn test_render_missing_arg_keeps_placeholder() {
        let message = Message::keyed(MessageKey::InvalidRegexp, []);
        assert_eq!(
            message.render(),
            "Invalid flags supplied to RegExp constructor '{arg}'"
        );
    }

    #[test]
    fn test_message_key_code() {
        assert_eq!(MessageKey::InvalidRegexp.code(), "invalid regexp");
        assert_eq!(MessageKey::InvalidRegexp.to_string(), "invalid regexp");
    }
}
