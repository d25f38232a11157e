//! Rendering collected answers as INI lines.

/// Line terminator used in the generated file.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";

/// Line terminator used in the generated file.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// One answered field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub name: String,
    pub value: String,
}

impl Answer {
    /// Pick the trimmed reply, or `default` when the reply is blank.
    pub fn from_reply(name: &str, reply: &str, default: &str) -> Self {
        let trimmed = reply.trim();
        let value = if trimmed.is_empty() { default } else { trimmed };
        Self {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    /// Whether the value came from the default rather than the reply.
    pub fn used_default(reply: &str) -> bool {
        reply.trim().is_empty()
    }
}

/// Render answers as `name = value` lines, one per answer.
///
/// Values are written verbatim; no quoting or escaping.
pub fn render(answers: &[Answer]) -> String {
    answers
        .iter()
        .map(|a| format!("{} = {}{}", a.name, a.value, LINE_ENDING))
        .collect()
}
