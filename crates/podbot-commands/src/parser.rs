//! Splits a prefixed message into a command name and its arguments.

/// A tokenized command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Lower-cased command name or alias.
    pub name: String,
    /// Remaining tokens, case preserved.
    pub args: Vec<String>,
}

/// Parses `content` as an invocation behind `prefix`.
///
/// The prefix match is case-sensitive. After stripping it the remainder is
/// trimmed and split on runs of spaces; the first token becomes the name.
/// Returns `None` when the prefix is missing or no name follows it.
pub fn parse(content: &str, prefix: &str) -> Option<ParsedCommand> {
    let rest = content.strip_prefix(prefix)?;
    let mut tokens = rest.trim().split(' ').filter(|token| !token.is_empty());

    let name = tokens.next()?.to_lowercase();
    let args = tokens.map(str::to_string).collect();

    Some(ParsedCommand { name, args })
}
