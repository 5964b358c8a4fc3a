//! Prefix command parsing for chat messages.

/// Name of the character lookup command.
pub const CHAR_COMMAND: &str = "char";

/// A recognized chat command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `<prefix>char <name>`; `name` is the raw remainder of the message.
    Char { name: String },
}

/// Parses a message into a command.
///
/// Returns `None` for messages without the prefix and for unknown commands.
/// The command word is matched case-insensitively; everything after the
/// first whitespace is the argument. Trimming and validation are left to
/// the caller.
pub fn parse_command(content: &str, prefix: &str) -> Option<Command> {
    let body = content.trim_start().strip_prefix(prefix)?;

    let (word, rest) = match body.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (body, ""),
    };

    if word.eq_ignore_ascii_case(CHAR_COMMAND) {
        Some(Command::Char {
            name: rest.to_string(),
        })
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn char_cmd(name: &str) -> Option<Command> {
        Some(Command::Char {
            name: name.to_string(),
        })
    }

    #[test]
    fn test_parse_char_command() {
        assert_eq!(parse_command("!char Gandalf", "!"), char_cmd("Gandalf"));
        assert_eq!(
            parse_command("!char Gandalf the Grey", "!"),
            char_cmd("Gandalf the Grey")
        );
        assert_eq!(parse_command("!CHAR Bob", "!"), char_cmd("Bob"));
    }

    #[test]
    fn test_parse_char_without_name() {
        assert_eq!(parse_command("!char", "!"), char_cmd(""));
        assert_eq!(parse_command("!char    ", "!"), char_cmd("   "));
    }

    #[test]
    fn test_parse_ignores_other_messages() {
        assert_eq!(parse_command("char Gandalf", "!"), None);
        assert_eq!(parse_command("!charm Gandalf", "!"), None);
        assert_eq!(parse_command("! char Gandalf", "!"), None);
        assert_eq!(parse_command("!help", "!"), None);
        assert_eq!(parse_command("", "!"), None);
    }

    #[test]
    fn test_parse_custom_prefix() {
        assert_eq!(parse_command("exp>char Bob", "exp>"), char_cmd("Bob"));
        assert_eq!(parse_command("!char Bob", "exp>"), None);
    }
}
