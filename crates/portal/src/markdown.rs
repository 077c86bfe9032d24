//! Markdown to terminal text.

use owo_colors::OwoColorize;
use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

/// Renders assistant markdown for the terminal.
///
/// Raw HTML in the input is dropped. Links keep their text and show the
/// target in parentheses.
pub fn to_terminal(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options).filter(|event| {
        !matches!(event, Event::Html(_) | Event::InlineHtml(_))
    });

    let mut out = String::new();
    let mut lists: Vec<Option<u64>> = Vec::new();
    let mut quote_depth = 0usize;
    let mut in_code_block = false;
    let mut strong = false;
    let mut emphasis = false;
    let mut heading = false;
    let mut link: Option<String> = None;

    for event in parser {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                start_block(&mut out);
                heading = true;
            }
            Event::End(TagEnd::Heading(_)) => {
                heading = false;
                out.push('\n');
            }
            Event::Start(Tag::Paragraph) => {
                if lists.is_empty() {
                    start_block(&mut out);
                }
                push_quote(&mut out, quote_depth);
            }
            Event::End(TagEnd::Paragraph) => {
                if lists.is_empty() {
                    out.push('\n');
                }
            }
            Event::Start(Tag::CodeBlock(kind)) => {
                start_block(&mut out);
                in_code_block = true;
                if let CodeBlockKind::Fenced(lang) = kind {
                    if !lang.is_empty() {
                        out.push_str(&format!("  [{lang}]\n"));
                    }
                }
            }
            Event::End(TagEnd::CodeBlock) => {
                in_code_block = false;
            }
            Event::Start(Tag::List(first)) => {
                if lists.is_empty() {
                    start_block(&mut out);
                }
                lists.push(first);
            }
            Event::End(TagEnd::List(_)) => {
                lists.pop();
            }
            Event::Start(Tag::Item) => {
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
                let indent = "  ".repeat(lists.len().saturating_sub(1));
                out.push_str(&indent);
                match lists.last_mut() {
                    Some(Some(n)) => {
                        out.push_str(&format!("{n}. "));
                        *n += 1;
                    }
                    _ => out.push_str("• "),
                }
            }
            Event::End(TagEnd::Item) => {
                if !out.ends_with('\n') {
                    out.push('\n');
                }
            }
            Event::TaskListMarker(done) => {
                out.push_str(if done { "[x] " } else { "[ ] " });
            }
            Event::Start(Tag::BlockQuote(_)) => {
                quote_depth += 1;
            }
            Event::End(TagEnd::BlockQuote(_)) => {
                quote_depth = quote_depth.saturating_sub(1);
            }
            Event::Start(Tag::Strong) => strong = true,
            Event::End(TagEnd::Strong) => strong = false,
            Event::Start(Tag::Emphasis) => emphasis = true,
            Event::End(TagEnd::Emphasis) => emphasis = false,
            Event::Start(Tag::Link { dest_url, .. }) => {
                link = Some(dest_url.to_string());
            }
            Event::End(TagEnd::Link) => {
                if let Some(url) = link.take() {
                    out.push_str(&format!(" ({})", url.underline()));
                }
            }
            Event::Code(text) => {
                out.push_str(&text.bright_cyan().to_string());
            }
            Event::Text(text) => {
                if in_code_block {
                    for line in text.lines() {
                        out.push_str("    ");
                        out.push_str(&line.bright_black().to_string());
                        out.push('\n');
                    }
                } else if heading || strong {
                    out.push_str(&text.bold().to_string());
                } else if emphasis {
                    out.push_str(&text.italic().to_string());
                } else {
                    out.push_str(&text);
                }
            }
            Event::SoftBreak => out.push(' '),
            Event::HardBreak => {
                out.push('\n');
                push_quote(&mut out, quote_depth);
            }
            Event::Rule => {
                start_block(&mut out);
                out.push_str(&"─".repeat(24));
                out.push('\n');
            }
            _ => {}
        }
    }

    out.trim_end().to_owned()
}

/// Separates a block from whatever came before it by one blank line.
fn start_block(out: &mut String) {
    if out.is_empty() {
        return;
    }
    if !out.ends_with('\n') {
        out.push('\n');
    }
    if !out.ends_with("\n\n") {
        out.push('\n');
    }
}

fn push_quote(out: &mut String, depth: usize) {
    for _ in 0..depth {
        out.push_str("│ ");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_paragraphs() {
        assert_eq!(to_terminal("Hello\nthere."), "Hello there.");
        assert_eq!(to_terminal("One.\n\nTwo."), "One.\n\nTwo.");
    }

    #[test]
    fn test_html_is_dropped() {
        let out = to_terminal(
            "Before <script>alert(1)</script> after\n\n<div>block</div>\n",
        );
        assert!(!out.contains("<script>"));
        assert!(!out.contains("<div>"));
        assert!(out.contains("Before"));
        assert!(out.contains("after"));
    }

    #[test]
    fn test_lists() {
        let out = to_terminal(
            "Steps:\n\n1. Install Docker\n2. Clone repo\n\n- a\n- b\n",
        );
        assert!(out.contains("1. Install Docker\n2. Clone repo"));
        assert!(out.contains("• a\n• b"));
    }

    #[test]
    fn test_ordered_list_start() {
        let out = to_terminal("3. three\n4. four\n");
        assert_eq!(out, "3. three\n4. four");
    }

    #[test]
    fn test_code_block_is_indented() {
        let out = to_terminal("Run:\n\n```sh\ndocker compose up\n```\n");
        assert!(out.contains("[sh]"));
        assert!(out.contains("    "));
        assert!(out.contains("docker compose up"));
    }

    #[test]
    fn test_link_shows_target() {
        let out = to_terminal("See [the handbook](https://example.com/hb).");
        assert!(out.contains("the handbook"));
        assert!(out.contains("https://example.com/hb"));
    }
}
