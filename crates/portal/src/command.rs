use std::path::PathBuf;

use portal_core::Page;

/// A parsed input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// `:go <page>`, shows another page.
    Go(Page),
    /// `:k [query]`, toggles the command palette, or opens it on `query`.
    Palette(String),
    /// `:close`, hides whatever overlay is open.
    Close,
    /// `:help`.
    Help,
    /// `:quit`.
    Quit,
    /// `/search [text]`, narrows the list on the current page.
    Search(String),
    /// `/category <label>`, picks a category on the current page.
    Category(String),
    /// `/quick <n>`, sends a quick action.
    Quick(usize),
    /// `/source <n>`, opens a citation.
    Source(usize),
    /// `/upload <path>`, uploads a document.
    Upload(PathBuf),
    /// `/clear`, forgets the uploaded document.
    Clear,
    /// `/stats`, shows what the backend has indexed.
    Stats,
    /// `/play <n>`, opens a video.
    Play(usize),
    /// `/toggle <section>.<item>`, ticks or unticks an item.
    Toggle(usize, usize),
    /// Anything else: a question for the current page.
    Say(String),
}

/// Why a line could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The command name is not known.
    #[error("unknown command `{0}`, type :help for a list")]
    Unknown(String),
    /// A required argument is missing.
    #[error("usage: {0}")]
    Usage(&'static str),
    /// A number was expected.
    #[error("`{0}` is not a number")]
    NotANumber(String),
}

impl Command {
    /// Parses one input line.
    ///
    /// Lines starting with `:` are portal commands, lines starting with `/`
    /// are page commands. Everything else is passed through as
    /// [`Command::Say`], untrimmed so the page can decide what blank means.
    /// Numbers are 1-based as shown on screen.
    pub fn parse(line: &str) -> Result<Command, ParseError> {
        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix(':') {
            return parse_portal(rest);
        }
        if let Some(rest) = trimmed.strip_prefix('/') {
            return parse_page(rest);
        }
        Ok(Command::Say(line.to_owned()))
    }
}

fn split(rest: &str) -> (&str, &str) {
    match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    }
}

fn parse_portal(rest: &str) -> Result<Command, ParseError> {
    let (name, arg) = split(rest);
    let command = match name {
        "go" | "g" => {
            if arg.is_empty() {
                return Err(ParseError::Usage(":go <page>"));
            }
            Command::Go(Page::from_id(arg))
        }
        "k" | "palette" => Command::Palette(arg.to_owned()),
        "close" => Command::Close,
        "help" | "h" | "?" => Command::Help,
        "quit" | "q" => Command::Quit,
        _ => return Err(ParseError::Unknown(format!(":{name}"))),
    };
    Ok(command)
}

fn parse_page(rest: &str) -> Result<Command, ParseError> {
    let (name, arg) = split(rest);
    let command = match name {
        "search" | "s" => Command::Search(arg.to_owned()),
        "category" | "c" => {
            if arg.is_empty() {
                return Err(ParseError::Usage("/category <name|All>"));
            }
            Command::Category(arg.to_owned())
        }
        "quick" => Command::Quick(index(arg, "/quick <n>")?),
        "source" => Command::Source(index(arg, "/source <n>")?),
        "upload" => {
            if arg.is_empty() {
                return Err(ParseError::Usage("/upload <path>"));
            }
            Command::Upload(PathBuf::from(arg))
        }
        "clear" => Command::Clear,
        "stats" => Command::Stats,
        "play" => Command::Play(index(arg, "/play <n>")?),
        "close" => Command::Close,
        "toggle" | "t" => {
            let usage = "/toggle <section>.<item>";
            let (section, item) =
                arg.split_once('.').ok_or(ParseError::Usage(usage))?;
            Command::Toggle(index(section, usage)?, index(item, usage)?)
        }
        _ => return Err(ParseError::Unknown(format!("/{name}"))),
    };
    Ok(command)
}

/// Parses a 1-based number into a 0-based index.
pub(crate) fn index(
    arg: &str,
    usage: &'static str,
) -> Result<usize, ParseError> {
    let arg = arg.trim();
    if arg.is_empty() {
        return Err(ParseError::Usage(usage));
    }
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(ParseError::NotANumber(arg.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_said() {
        assert_eq!(
            Command::parse("What is LTL?"),
            Ok(Command::Say("What is LTL?".to_owned()))
        );
        assert_eq!(Command::parse("   "), Ok(Command::Say("   ".to_owned())));
    }

    #[test]
    fn test_portal_commands() {
        assert_eq!(
            Command::parse(":go glossary"),
            Ok(Command::Go(Page::Glossary))
        );
        assert_eq!(
            Command::parse(":go nowhere"),
            Ok(Command::Go(Page::Dashboard))
        );
        assert_eq!(
            Command::parse(":k  docker "),
            Ok(Command::Palette("docker".to_owned()))
        );
        assert_eq!(Command::parse(":q"), Ok(Command::Quit));
        assert_eq!(Command::parse(":go"), Err(ParseError::Usage(":go <page>")));
        assert_eq!(
            Command::parse(":dance"),
            Err(ParseError::Unknown(":dance".to_owned()))
        );
    }

    #[test]
    fn test_page_commands() {
        assert_eq!(
            Command::parse("/search ssh keys"),
            Ok(Command::Search("ssh keys".to_owned()))
        );
        assert_eq!(
            Command::parse("/search"),
            Ok(Command::Search(String::new()))
        );
        assert_eq!(
            Command::parse("/category Sales & CS"),
            Ok(Command::Category("Sales & CS".to_owned()))
        );
        assert_eq!(Command::parse("/quick 2"), Ok(Command::Quick(1)));
        assert_eq!(
            Command::parse("/upload ./docs/design.pdf"),
            Ok(Command::Upload(PathBuf::from("./docs/design.pdf")))
        );
        assert_eq!(Command::parse("/toggle 2.3"), Ok(Command::Toggle(1, 2)));
    }

    #[test]
    fn test_bad_numbers() {
        assert_eq!(
            Command::parse("/quick zero"),
            Err(ParseError::NotANumber("zero".to_owned()))
        );
        assert_eq!(
            Command::parse("/play 0"),
            Err(ParseError::NotANumber("0".to_owned()))
        );
        assert_eq!(
            Command::parse("/toggle 3"),
            Err(ParseError::Usage("/toggle <section>.<item>"))
        );
    }
}
