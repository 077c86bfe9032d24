//! Drawing pages as terminal text.

use std::fmt::Write as _;

use owo_colors::OwoColorize;
use portal_api::SUGGESTED_EXTENSIONS;
use portal_core::catalog::checklist::Checklist;
use portal_core::catalog::dashboard::{self, ActivityKind, Priority};
use portal_core::catalog::glossary::{GlossaryCategory, TERMS};
use portal_core::catalog::org_chart::{Department, MEMBERS, STRUCTURE_NOTE};
use portal_core::catalog::resources::{
    RESOURCES, ResourceCategory, category_counts,
};
use portal_core::catalog::setup::QUICK_REFERENCE;
use portal_core::catalog::videos::VIDEOS;
use portal_core::chat::QUICK_ACTIONS;
use portal_core::filter::{Category, Filter};
use portal_core::navigation::NAV_ITEMS;
use portal_core::{DocumentState, Role, Transcript};

use crate::markdown;
use crate::shell::{
    AnalystPage, OraclePage, PageState, SetupPage, Shell, TutorPage,
};

const BAR_CHAR: &str = "▎";

const HELP: &str = "\
:go <page>        show a page (dashboard, oracle, tutor, analyst, resources,
                  checklist, glossary, org-chart, setup)
:k [query]        toggle the command palette; type to search, a number picks
:close            close the palette, source or video
:help             this list
:quit             leave
/search [text]    narrow the list on this page
/category <name>  pick a category, or All
/quick <n>        ask a suggested question
/source <n>       show a cited source
/upload <path>    upload a document for The Analyst
/clear            forget the uploaded document
/stats            show what the backend has indexed
/play <n>         open a video
/toggle <s>.<n>   tick or untick a checklist or setup item";

pub(crate) fn shell(shell: &Shell) -> String {
    let mut out = String::new();
    let page = shell.page();

    // Sidebar, flattened into a single line.
    let nav: Vec<String> = NAV_ITEMS
        .iter()
        .map(|item| {
            if item.page == page {
                item.label.bright_cyan().bold().to_string()
            } else {
                item.label.bright_black().to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "{} {}", BAR_CHAR.bright_cyan(), nav.join("  "));
    let _ = writeln!(out, "{}\n", page.title().bright_white().bold());

    match &shell.page {
        PageState::Dashboard => draw_dashboard(&mut out),
        PageState::Oracle(oracle) => {
            draw_oracle(&mut out, oracle, &shell.server)
        }
        PageState::Tutor(tutor) => draw_tutor(&mut out, tutor),
        PageState::Analyst(analyst) => draw_analyst(&mut out, analyst),
        PageState::Resources(filter) => draw_resources(&mut out, filter),
        PageState::Checklist(checklist) => draw_checklist(&mut out, checklist),
        PageState::Glossary(filter) => draw_glossary(&mut out, filter),
        PageState::OrgChart(filter) => draw_org_chart(&mut out, filter),
        PageState::Setup(setup) => draw_setup(&mut out, setup),
    }

    if shell.palette.is_open() {
        draw_palette(&mut out, shell);
    }
    if shell.show_help {
        let _ = writeln!(out, "\n{HELP}");
    }
    if let Some(notice) = &shell.notice {
        let _ = writeln!(
            out,
            "\n{} {}",
            BAR_CHAR.bright_yellow(),
            notice.yellow()
        );
    }
    let _ = write!(
        out,
        "\n{}",
        ":k palette · :go <page> · :help · :quit".bright_black()
    );
    out
}

fn progress_bar(percent: u32) -> String {
    let filled = (percent.min(100) / 5) as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(20 - filled))
}

fn chips<C: Category>(out: &mut String, filter: &Filter<C>) {
    let mut labels = vec![chip("All", filter.category().is_none())];
    labels.extend(
        C::ALL
            .iter()
            .map(|&c| chip(c.label(), filter.category() == Some(c))),
    );
    let _ = writeln!(out, "{}", labels.join(" "));
    if !filter.search().is_empty() {
        let _ = writeln!(out, "Search: {}", filter.search().bright_white());
    }
    out.push('\n');
}

fn chip(label: &str, selected: bool) -> String {
    if selected {
        format!("[{}]", label.bright_cyan().bold())
    } else {
        format!(" {} ", label.bright_black())
    }
}

fn draw_dashboard(out: &mut String) {
    let progress = dashboard::progress();
    let _ = writeln!(
        out,
        "Overall Progress {progress}%  {}",
        progress_bar(progress).bright_cyan()
    );
    let _ = writeln!(
        out,
        "{} of {} tasks completed",
        dashboard::TASKS_COMPLETED,
        dashboard::TASKS_TOTAL
    );
    let _ = writeln!(
        out,
        "High Priority: {}    Streak: {}\n",
        dashboard::high_priority_count(),
        dashboard::STREAK
    );

    let _ = writeln!(out, "{}", "Upcoming Tasks".bold());
    for task in dashboard::UPCOMING_TASKS {
        let badge = match task.priority {
            Priority::High => task.priority.label().red().to_string(),
            Priority::Medium => task.priority.label().yellow().to_string(),
        };
        let _ = writeln!(
            out,
            "  • {}  [{badge}] {} days left",
            task.title, task.days_left
        );
    }

    let _ = writeln!(out, "\n{}", "Recent Activity".bold());
    for activity in dashboard::RECENT_ACTIVITY {
        let icon = match activity.kind {
            ActivityKind::Completed => "✓".green().to_string(),
            ActivityKind::Viewed => "◷".blue().to_string(),
            ActivityKind::Pending => "!".yellow().to_string(),
        };
        let _ = writeln!(
            out,
            "  {icon} {} {}",
            activity.title,
            activity.time.bright_black()
        );
    }

    let _ = writeln!(
        out,
        "\n{} {}",
        "Quick Start Resources:".bold(),
        dashboard::QUICK_LINKS.join(" · ")
    );
}

fn draw_transcript(out: &mut String, transcript: &Transcript) {
    let mut source_no = 0;
    for entry in transcript.entries() {
        match entry.role() {
            Role::User => {
                let _ = writeln!(
                    out,
                    "{}{} {}",
                    BAR_CHAR.bright_blue(),
                    "You:".bold(),
                    entry.content().bright_white()
                );
            }
            Role::Assistant if entry.is_failure() => {
                let _ = writeln!(
                    out,
                    "{}🤖 {}",
                    BAR_CHAR.red(),
                    entry.content().red()
                );
            }
            Role::Assistant => {
                let body = markdown::to_terminal(entry.content());
                let mut lines = body.lines();
                let first = lines.next().unwrap_or_default();
                let _ = writeln!(out, "{}🤖 {first}", BAR_CHAR.bright_cyan());
                for line in lines {
                    let _ = writeln!(
                        out,
                        "{}   {line}",
                        BAR_CHAR.bright_cyan()
                    );
                }
            }
        }
        for source in entry.sources() {
            source_no += 1;
            let _ = writeln!(
                out,
                "   {} Source: {source}",
                format!("[{source_no}]").bright_black()
            );
        }
        out.push('\n');
    }
}

fn draw_oracle(out: &mut String, oracle: &OraclePage, server: &str) {
    match oracle.healthy {
        Some(true) => {
            let _ = writeln!(out, "{} {server}\n", "● connected".green());
        }
        Some(false) => {
            let _ = writeln!(
                out,
                "{} {server}\n",
                "● backend unavailable".red()
            );
        }
        None => {}
    }

    let session = &oracle.session;
    draw_transcript(out, session.transcript());
    if session.is_pending() {
        let _ = writeln!(out, "{}", "🤖 ...".bright_black());
    }

    if session.shows_quick_actions() {
        let _ = writeln!(out, "{}", "Quick actions:".bold());
        for (i, action) in QUICK_ACTIONS.iter().enumerate() {
            let _ = writeln!(out, "  /quick {}  {action}", i + 1);
        }
    }

    if let Some(doc) = oracle.drawer {
        let bar = BAR_CHAR.bright_magenta();
        let _ = writeln!(out, "\n{bar}{}", doc.title.bold());
        let _ = writeln!(out, "{bar}{}", doc.content);
        let _ = writeln!(
            out,
            "{bar}View Full Document: {}",
            doc.link.underline()
        );
    }
}

fn draw_tutor(out: &mut String, tutor: &TutorPage) {
    chips(out, &tutor.filter);
    for (i, video) in tutor.filter.apply(VIDEOS).into_iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} ({}) {}",
            i + 1,
            video.title.bold(),
            video.duration,
            video.category.bright_black()
        );
        let _ = writeln!(out, "   {}", video.description);
    }

    if let Some(video) = tutor.playing {
        let bar = BAR_CHAR.bright_magenta();
        let _ = writeln!(out, "\n{bar}▶ {}", video.title.bold());
        let _ = writeln!(
            out,
            "{bar}{}",
            video.category.to_string().to_uppercase()
        );
        let _ = writeln!(out, "{bar}{}", video.description);
        let _ = writeln!(
            out,
            "{bar}Transcript: {}",
            video.transcript.bright_black()
        );
    }
}

fn draw_analyst(out: &mut String, analyst: &AnalystPage) {
    let session = &analyst.session;
    match session.state() {
        DocumentState::NoDocument => {
            let _ = writeln!(out, "{}", "Upload Document or Code".bold());
            let _ = writeln!(
                out,
                "Supported: {}",
                SUGGESTED_EXTENSIONS
                    .iter()
                    .map(|ext| format!(".{ext}"))
                    .collect::<Vec<_>>()
                    .join(" ")
            );
            let _ = writeln!(out, "Use /upload <path> to pick a file.");
            if let Some(err) = session.upload_error() {
                let _ = writeln!(out, "\n{}", err.red());
            }
        }
        DocumentState::Uploading { filename } => {
            let _ = writeln!(out, "Uploading {filename}...");
        }
        DocumentState::Ready(handle) => {
            let _ = writeln!(
                out,
                "📄 {} {}\n",
                handle.filename.bold(),
                format!("({})", handle.document_id).bright_black()
            );
            draw_transcript(out, session.exchange().transcript());
            if session.exchange().is_pending() {
                let _ = writeln!(out, "{}", "🤖 ...".bright_black());
            }
            let _ = writeln!(
                out,
                "Ask a question about the document, or /clear to start over."
            );
        }
    }

    match &analyst.stats {
        Some(Ok(stats)) => {
            let _ = writeln!(out, "\n{}", "Indexed documents".bold());
            for (key, value) in &stats.0 {
                let _ = writeln!(out, "  {key}: {value}");
            }
        }
        Some(Err(err)) => {
            let _ = writeln!(
                out,
                "\n{}",
                format!("Could not load stats: {err}").red()
            );
        }
        None => {}
    }
}

fn draw_resources(out: &mut String, filter: &Filter<ResourceCategory>) {
    let counts = category_counts();
    let mut summary: Vec<String> = counts
        .iter()
        .map(|(category, n)| format!("{category} {n}"))
        .collect();
    summary.push(format!("Total {}", RESOURCES.len()));
    let _ = writeln!(out, "{}\n", summary.join(" · "));

    chips(out, filter);
    let found = filter.apply(RESOURCES);
    if found.is_empty() {
        let _ = writeln!(
            out,
            "{}",
            "No resources found in this category.".bright_black()
        );
        return;
    }
    for resource in found {
        let _ = writeln!(
            out,
            "• {} {}",
            resource.title.bold(),
            format!("[{}]", resource.category).bright_black()
        );
        let _ = writeln!(out, "  {}", resource.description);
        let _ = writeln!(
            out,
            "  {} · {}",
            resource.link.underline(),
            resource.last_updated.bright_black()
        );
    }
}

fn draw_checklist(out: &mut String, checklist: &Checklist) {
    let progress = checklist.progress();
    let _ = writeln!(
        out,
        "Overall Progress {progress}%  {}",
        progress_bar(progress).bright_cyan()
    );
    let _ = writeln!(
        out,
        "{} of {} tasks completed\n",
        checklist.completed(),
        checklist.total()
    );
    for (s, section) in checklist.sections().iter().enumerate() {
        let _ = writeln!(out, "{} · {}", section.day.bold(), section.title);
        for (t, task) in section.tasks.iter().enumerate() {
            let line = format!("  {}.{} {}", s + 1, t + 1, task.title);
            if task.completed {
                let _ = writeln!(
                    out,
                    "{} {}",
                    "✓".green(),
                    line.bright_black().strikethrough()
                );
            } else {
                let _ = writeln!(out, "○ {line}");
            }
        }
        out.push('\n');
    }
}

fn draw_glossary(out: &mut String, filter: &Filter<GlossaryCategory>) {
    chips(out, filter);
    let found = filter.apply(TERMS);
    if found.is_empty() {
        let _ = writeln!(out, "{}", "No terms found.".bright_black());
        return;
    }
    for term in found {
        let _ = writeln!(
            out,
            "{} {}",
            term.term.bold(),
            format!("[{}]", term.category).bright_black()
        );
        let _ = writeln!(out, "  {}", term.definition);
    }
}

fn draw_org_chart(out: &mut String, filter: &Filter<Department>) {
    chips(out, filter);
    for department in Department::ALL {
        let members: Vec<_> = filter
            .apply(MEMBERS)
            .into_iter()
            .filter(|m| m.department == *department)
            .collect();
        if members.is_empty() {
            continue;
        }
        let _ = writeln!(out, "{}", department.bold());
        for member in members {
            let _ = writeln!(
                out,
                "  {}  {}",
                member.name,
                member.role.bright_black()
            );
        }
        out.push('\n');
    }
    let _ = writeln!(out, "{}", STRUCTURE_NOTE.bright_black());
}

fn draw_setup(out: &mut String, setup: &SetupPage) {
    if !setup.search.is_empty() {
        let _ = writeln!(out, "Search: {}\n", setup.search.bright_white());
    }
    for (s, section) in setup.guide.sections().iter().enumerate() {
        let steps = section.matching_steps(&setup.search);
        if steps.is_empty() {
            continue;
        }
        let _ = writeln!(
            out,
            "{} · {}",
            section.title.bold(),
            section.description
        );
        for (t, step) in steps {
            let mark = if step.completed {
                "✓".green().to_string()
            } else {
                "○".to_owned()
            };
            let link = step
                .link
                .map(|link| format!("  {}", link.underline()))
                .unwrap_or_default();
            let _ = writeln!(
                out,
                "{mark}   {}.{} {}{link}",
                s + 1,
                t + 1,
                step.title
            );
        }
        out.push('\n');
    }

    let _ = writeln!(out, "{}", "Quick Reference".bold());
    for cmd in QUICK_REFERENCE {
        let _ = writeln!(
            out,
            "  {}  {}",
            cmd.command.bright_cyan(),
            cmd.description.bright_black()
        );
    }
}

fn draw_palette(out: &mut String, shell: &Shell) {
    let palette = &shell.palette;
    let bar = BAR_CHAR.bright_yellow();
    let _ = writeln!(out, "\n{bar}{} {}", "⌘K".bold(), palette.search());
    let results = palette.results();
    if results.is_empty() {
        let _ = writeln!(out, "{bar}{}", "No commands found.".bright_black());
        return;
    }
    let mut group = None;
    for (i, cmd) in results.iter().enumerate() {
        if group != Some(cmd.group) {
            group = Some(cmd.group);
            let _ = writeln!(out, "{bar}{}", cmd.group.label().bright_black());
        }
        let _ = writeln!(
            out,
            "{bar}  {}. {}  {}",
            i + 1,
            cmd.title,
            cmd.description.bright_black()
        );
    }
}

#[cfg(test)]
mod tests {
    use portal_core::Page;

    use super::*;

    fn screen(page: Page, lines: &[&str]) -> String {
        let mut shell = Shell::new("http://localhost:8000");
        shell.navigate(page);
        for line in lines {
            shell.handle_line(line);
        }
        shell.render()
    }

    #[test]
    fn test_dashboard() {
        let out = screen(Page::Dashboard, &[]);
        assert!(out.contains("Overall Progress 35%"));
        assert!(out.contains("7 of 20 tasks completed"));
        assert!(out.contains("Setup Development Environment"));
    }

    #[test]
    fn test_oracle_greets_with_source() {
        let out = screen(Page::Oracle, &[]);
        assert!(out.contains("Welcome to The Oracle"));
        assert!(out.contains("Source: Confluence: Engineering Handbook"));
        assert!(out.contains("/quick 2  What is LTL?"));
    }

    #[test]
    fn test_glossary_empty_result() {
        let out = screen(Page::Glossary, &["/search blockchain"]);
        assert!(out.contains("No terms found."));
    }

    #[test]
    fn test_resources_counts() {
        let out = screen(Page::Resources, &["/category GitHub"]);
        assert!(out.contains("Total 12"));
        assert!(out.contains("SDK Repository"));
        assert!(!out.contains("HR Policies"));
    }

    #[test]
    fn test_analyst_without_document() {
        let out = screen(Page::Analyst, &[]);
        assert!(out.contains("Upload Document or Code"));
        assert!(out.contains(".pptx"));
    }

    #[test]
    fn test_video_opens() {
        let out = screen(Page::Tutor, &["/category Security", "/play 1"]);
        assert!(out.contains("SSH Key Configuration"));
        assert!(out.contains("ssh-keygen"));
    }

    #[test]
    fn test_palette_and_help() {
        let out = screen(Page::Setup, &[":k env"]);
        assert!(out.contains("Environment Setup"));
        assert!(out.contains("npm install"));
        assert!(out.contains("Pages"));
        assert!(!out.contains("Navigation"));

        let out = screen(Page::Dashboard, &[":k"]);
        assert!(out.contains("Navigation"));
        assert!(out.contains("9. Environment Setup"));

        let out = screen(Page::Dashboard, &[":help"]);
        assert!(out.contains("/upload <path>"));
    }

    #[test]
    fn test_notice_is_shown() {
        let out = screen(Page::Dashboard, &["/bogus"]);
        assert!(out.contains("unknown command `/bogus`"));
    }
}
