use std::path::Path;

use portal_api::DocumentStats;
use portal_core::catalog::checklist::Checklist;
use portal_core::catalog::glossary::GlossaryCategory;
use portal_core::catalog::org_chart::Department;
use portal_core::catalog::resources::ResourceCategory;
use portal_core::catalog::setup::SetupGuide;
use portal_core::catalog::sources::{self, SourceDoc};
use portal_core::catalog::videos::{VIDEOS, Video, VideoCategory};
use portal_core::filter::{Category, Filter};
use portal_core::{
    ChatSession, CommandPalette, DocumentSession, Page, SubmitError, Transcript,
};

use crate::command::{Command, index};
use crate::effect::{Effect, EffectKind, Outcome, ShellEvent};
use crate::render;

pub(crate) struct OraclePage {
    pub(crate) session: ChatSession,
    pub(crate) healthy: Option<bool>,
    pub(crate) drawer: Option<&'static SourceDoc>,
}

pub(crate) struct TutorPage {
    pub(crate) filter: Filter<VideoCategory>,
    pub(crate) playing: Option<&'static Video>,
}

pub(crate) struct AnalystPage {
    pub(crate) session: DocumentSession,
    pub(crate) stats: Option<Result<DocumentStats, String>>,
}

pub(crate) struct SetupPage {
    pub(crate) guide: SetupGuide,
    pub(crate) search: String,
}

/// State of the page on screen. Built fresh on every visit.
pub(crate) enum PageState {
    Dashboard,
    Oracle(OraclePage),
    Tutor(TutorPage),
    Analyst(AnalystPage),
    Resources(Filter<ResourceCategory>),
    Checklist(Checklist),
    Glossary(Filter<GlossaryCategory>),
    OrgChart(Filter<Department>),
    Setup(SetupPage),
}

impl PageState {
    fn new(page: Page, server: &str) -> Self {
        match page {
            Page::Dashboard => PageState::Dashboard,
            Page::Oracle => PageState::Oracle(OraclePage {
                session: ChatSession::new(server),
                healthy: None,
                drawer: None,
            }),
            Page::Tutor => PageState::Tutor(TutorPage {
                filter: Filter::default(),
                playing: None,
            }),
            Page::Analyst => PageState::Analyst(AnalystPage {
                session: DocumentSession::default(),
                stats: None,
            }),
            Page::Resources => PageState::Resources(Filter::default()),
            Page::Checklist => PageState::Checklist(Checklist::default()),
            Page::Glossary => PageState::Glossary(Filter::default()),
            Page::OrgChart => PageState::OrgChart(Filter::default()),
            Page::Setup => PageState::Setup(SetupPage {
                guide: SetupGuide::default(),
                search: String::new(),
            }),
        }
    }

    fn page(&self) -> Page {
        match self {
            PageState::Dashboard => Page::Dashboard,
            PageState::Oracle(_) => Page::Oracle,
            PageState::Tutor(_) => Page::Tutor,
            PageState::Analyst(_) => Page::Analyst,
            PageState::Resources(_) => Page::Resources,
            PageState::Checklist(_) => Page::Checklist,
            PageState::Glossary(_) => Page::Glossary,
            PageState::OrgChart(_) => Page::OrgChart,
            PageState::Setup(_) => Page::Setup,
        }
    }
}

const NOT_HERE: &str =
    "That command does nothing on this page. Type :help for a list.";

/// The whole portal as seen from the terminal.
///
/// The shell never does I/O. Input lines go in through
/// [`Shell::handle_line`], which returns the [`Effect`]s to run; their
/// results come back through [`Shell::handle_event`]. Call
/// [`Shell::render`] after either to get the new screen.
///
/// Every navigation bumps a generation counter. Events that carry an older
/// generation belong to a page that was left and are dropped, the same way
/// an unmounted view never sees its pending requests complete.
pub struct Shell {
    pub(crate) server: String,
    pub(crate) page: PageState,
    pub(crate) palette: CommandPalette,
    pub(crate) notice: Option<String>,
    pub(crate) show_help: bool,
    generation: u64,
    quit: bool,
}

impl Shell {
    /// Creates a shell showing the dashboard.
    ///
    /// `server` is the backend base URL, used in messages only.
    pub fn new<S: Into<String>>(server: S) -> Self {
        Self {
            server: server.into(),
            page: PageState::Dashboard,
            palette: CommandPalette::default(),
            notice: None,
            show_help: false,
            generation: 0,
            quit: false,
        }
    }

    /// Returns the page on screen.
    #[inline]
    pub fn page(&self) -> Page {
        self.page.page()
    }

    /// Returns the current page generation.
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns whether the user asked to leave.
    #[inline]
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Returns the command palette.
    #[inline]
    pub fn palette(&self) -> &CommandPalette {
        &self.palette
    }

    /// Returns the last feedback message, if any.
    #[inline]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Returns the assistant session while the assistant page is shown.
    pub fn chat(&self) -> Option<&ChatSession> {
        match &self.page {
            PageState::Oracle(oracle) => Some(&oracle.session),
            _ => None,
        }
    }

    /// Returns the document session while the analyst page is shown.
    pub fn documents(&self) -> Option<&DocumentSession> {
        match &self.page {
            PageState::Analyst(analyst) => Some(&analyst.session),
            _ => None,
        }
    }

    /// Shows `page` with fresh state.
    ///
    /// Whatever the previous page held is dropped, and so are the answers
    /// to its outstanding requests once they arrive.
    pub fn navigate(&mut self, page: Page) -> Vec<Effect> {
        debug!("navigating to {page}");
        self.generation += 1;
        self.page = PageState::new(page, &self.server);
        self.palette.close();
        self.notice = None;

        match page {
            Page::Oracle => vec![self.effect(EffectKind::CheckHealth)],
            _ => Vec::new(),
        }
    }

    /// Applies one line of input.
    pub fn handle_line(&mut self, line: &str) -> Vec<Effect> {
        self.notice = None;
        self.show_help = false;

        if self.palette.is_open() && !line.trim_start().starts_with(':') {
            return self.palette_input(line.trim());
        }

        match Command::parse(line) {
            Ok(command) => self.apply(command),
            Err(err) => {
                self.notice = Some(err.to_string());
                Vec::new()
            }
        }
    }

    /// Applies the result of an effect.
    ///
    /// Returns `false` when the event was dropped as stale.
    pub fn handle_event(&mut self, event: ShellEvent) -> bool {
        if event.generation != self.generation {
            debug!(
                "dropping event of generation {}, now at {}",
                event.generation, self.generation
            );
            return false;
        }

        let page = self.page();
        match (event.outcome, &mut self.page) {
            (Outcome::Health(healthy), PageState::Oracle(oracle)) => {
                oracle.healthy = Some(healthy);
                true
            }
            (Outcome::Chat(ticket, result), PageState::Oracle(oracle)) => {
                oracle.session.resolve(ticket, result)
            }
            (
                Outcome::DocumentChat(ticket, result),
                PageState::Analyst(analyst),
            ) => analyst.session.resolve(ticket, result),
            (Outcome::Upload(ticket, result), PageState::Analyst(analyst)) => {
                analyst.session.finish_upload(ticket, result)
            }
            (Outcome::Stats(result), PageState::Analyst(analyst)) => {
                analyst.stats = Some(result.map_err(|err| err.to_string()));
                true
            }
            (outcome, _) => {
                warn!("{page} has no use for {outcome:?}");
                false
            }
        }
    }

    /// Draws the screen.
    pub fn render(&self) -> String {
        render::shell(self)
    }

    fn effect(&self, kind: EffectKind) -> Effect {
        Effect {
            generation: self.generation,
            kind,
        }
    }

    fn palette_input(&mut self, input: &str) -> Vec<Effect> {
        if input.chars().all(|c| c.is_ascii_digit()) && !input.is_empty() {
            return match index(input, "<n>") {
                Ok(idx) => match self.palette.select(idx) {
                    Some(page) => self.navigate(page),
                    None => {
                        self.notice = Some(format!("No command #{input}."));
                        Vec::new()
                    }
                },
                Err(err) => {
                    self.notice = Some(err.to_string());
                    Vec::new()
                }
            };
        }
        self.palette.set_search(input);
        Vec::new()
    }

    fn apply(&mut self, command: Command) -> Vec<Effect> {
        match command {
            Command::Go(page) => return self.navigate(page),
            Command::Palette(search) if search.is_empty() => {
                self.palette.toggle();
            }
            Command::Palette(search) => {
                self.palette.open();
                self.palette.set_search(search);
            }
            Command::Close => self.close_overlay(),
            Command::Help => self.show_help = true,
            Command::Quit => self.quit = true,
            Command::Search(text) => self.search(text),
            Command::Category(label) => self.select_category(&label),
            Command::Quick(idx) => return self.quick_action(idx),
            Command::Source(idx) => self.open_source(idx),
            Command::Upload(path) => return self.upload(&path),
            Command::Clear => match &mut self.page {
                PageState::Analyst(analyst) => {
                    analyst.session.clear();
                    analyst.stats = None;
                }
                _ => self.notice = Some(NOT_HERE.to_owned()),
            },
            Command::Stats => match &self.page {
                PageState::Analyst(_) => {
                    return vec![self.effect(EffectKind::FetchStats)];
                }
                _ => self.notice = Some(NOT_HERE.to_owned()),
            },
            Command::Play(idx) => self.play(idx),
            Command::Toggle(section, item) => self.toggle(section, item),
            Command::Say(text) => return self.say(&text),
        }
        Vec::new()
    }

    fn close_overlay(&mut self) {
        if self.palette.is_open() {
            self.palette.close();
            return;
        }
        match &mut self.page {
            PageState::Oracle(oracle) => oracle.drawer = None,
            PageState::Tutor(tutor) => tutor.playing = None,
            _ => {}
        }
    }

    fn search(&mut self, text: String) {
        match &mut self.page {
            PageState::Tutor(tutor) => tutor.filter.set_search(text),
            PageState::Resources(filter) => filter.set_search(text),
            PageState::Glossary(filter) => filter.set_search(text),
            PageState::OrgChart(filter) => filter.set_search(text),
            PageState::Setup(setup) => setup.search = text,
            _ => self.notice = Some(NOT_HERE.to_owned()),
        }
    }

    fn select_category(&mut self, label: &str) {
        let result = match &mut self.page {
            PageState::Tutor(tutor) => select_in(&mut tutor.filter, label),
            PageState::Resources(filter) => select_in(filter, label),
            PageState::Glossary(filter) => select_in(filter, label),
            PageState::OrgChart(filter) => select_in(filter, label),
            _ => Err(NOT_HERE.to_owned()),
        };
        if let Err(notice) = result {
            self.notice = Some(notice);
        }
    }

    fn quick_action(&mut self, idx: usize) -> Vec<Effect> {
        let PageState::Oracle(oracle) = &mut self.page else {
            self.notice = Some(NOT_HERE.to_owned());
            return Vec::new();
        };
        match oracle.session.submit_quick_action(idx) {
            Some(Ok(pending)) => {
                vec![self.effect(EffectKind::SendChat(pending))]
            }
            Some(Err(err)) => {
                self.notice = Some(err.to_string());
                Vec::new()
            }
            None => {
                self.notice = Some(format!("No quick action #{}.", idx + 1));
                Vec::new()
            }
        }
    }

    fn open_source(&mut self, idx: usize) {
        let PageState::Oracle(oracle) = &mut self.page else {
            self.notice = Some(NOT_HERE.to_owned());
            return;
        };
        match citations(oracle.session.transcript()).get(idx) {
            Some(citation) => oracle.drawer = Some(sources::lookup(citation)),
            None => self.notice = Some(format!("No source #{}.", idx + 1)),
        }
    }

    fn upload(&mut self, path: &Path) -> Vec<Effect> {
        let PageState::Analyst(analyst) = &mut self.page else {
            self.notice = Some(NOT_HERE.to_owned());
            return Vec::new();
        };
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        match analyst.session.begin_upload(filename) {
            Ok(ticket) => vec![self.effect(EffectKind::Upload {
                ticket,
                path: path.to_owned(),
            })],
            Err(err) => {
                self.notice = Some(err.to_string());
                Vec::new()
            }
        }
    }

    fn play(&mut self, idx: usize) {
        let PageState::Tutor(tutor) = &mut self.page else {
            self.notice = Some(NOT_HERE.to_owned());
            return;
        };
        match tutor.filter.apply(VIDEOS).get(idx) {
            Some(video) => tutor.playing = Some(*video),
            None => self.notice = Some(format!("No video #{}.", idx + 1)),
        }
    }

    fn toggle(&mut self, section: usize, item: usize) {
        let toggled = match &mut self.page {
            PageState::Checklist(checklist) => checklist.toggle(section, item),
            PageState::Setup(setup) => setup.guide.toggle(section, item),
            _ => {
                self.notice = Some(NOT_HERE.to_owned());
                return;
            }
        };
        if toggled.is_none() {
            self.notice =
                Some(format!("No item {}.{}.", section + 1, item + 1));
        }
    }

    fn say(&mut self, text: &str) -> Vec<Effect> {
        let submitted = match &mut self.page {
            PageState::Oracle(oracle) => oracle
                .session
                .submit(text)
                .map(EffectKind::SendChat),
            PageState::Analyst(analyst) => analyst
                .session
                .submit(text)
                .map(EffectKind::SendDocumentChat),
            _ if text.trim().is_empty() => return Vec::new(),
            _ => {
                self.notice = Some(NOT_HERE.to_owned());
                return Vec::new();
            }
        };
        match submitted {
            Ok(kind) => vec![self.effect(kind)],
            // Blank input is simply ignored, like an empty input box.
            Err(SubmitError::Empty) => Vec::new(),
            Err(err) => {
                self.notice = Some(err.to_string());
                Vec::new()
            }
        }
    }
}

fn select_in<C: Category>(
    filter: &mut Filter<C>,
    label: &str,
) -> Result<(), String> {
    filter.select_category(label).map_err(|err| {
        let known: Vec<_> = C::ALL.iter().map(|c| c.label()).collect();
        format!("{err}, try All, {}", known.join(", "))
    })
}

/// Every citation in `transcript`, in the order they are numbered on screen.
pub(crate) fn citations(transcript: &Transcript) -> Vec<&str> {
    transcript
        .entries()
        .iter()
        .flat_map(|entry| entry.sources())
        .map(String::as_str)
        .collect()
}

#[cfg(test)]
mod tests {
    use portal_api::{ChatReply, DocumentHandle, Error};
    use portal_core::Role;

    use super::*;

    fn shell_on(page: Page) -> (Shell, Vec<Effect>) {
        let mut shell = Shell::new("http://localhost:8000");
        let effects = shell.navigate(page);
        (shell, effects)
    }

    fn reply(text: &str) -> ChatReply {
        ChatReply {
            response: text.to_owned(),
            sources: vec!["Runway Portal".to_owned()],
            conversation_id: None,
        }
    }

    #[test]
    fn test_oracle_probes_health_on_visit() {
        let (shell, effects) = shell_on(Page::Oracle);
        assert_eq!(
            effects,
            vec![Effect {
                generation: shell.generation(),
                kind: EffectKind::CheckHealth,
            }]
        );
        let (_, effects) = shell_on(Page::Glossary);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_question_and_answer() {
        let (mut shell, _) = shell_on(Page::Oracle);
        let effects = shell.handle_line("How to use Runway?");
        let [effect] = effects.as_slice() else {
            panic!("expected one effect, got {effects:?}");
        };
        let EffectKind::SendChat(pending) = &effect.kind else {
            panic!("expected a chat request");
        };
        assert_eq!(pending.request.message, "How to use Runway?");

        // The input is disabled until the answer arrives.
        assert!(shell.handle_line("Another one").is_empty());
        assert!(shell.notice().is_some());

        assert!(shell.handle_event(ShellEvent {
            generation: effect.generation,
            outcome: Outcome::Chat(
                pending.ticket,
                Ok(reply("Open the portal.")),
            ),
        }));
        let transcript = shell.chat().unwrap().transcript();
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.entries()[2].role(), Role::Assistant);
    }

    #[test]
    fn test_blank_input_does_nothing() {
        let (mut shell, _) = shell_on(Page::Oracle);
        assert!(shell.handle_line("   ").is_empty());
        assert_eq!(shell.chat().unwrap().transcript().len(), 1);
        assert_eq!(shell.notice(), None);
    }

    #[test]
    fn test_answer_after_leaving_is_dropped() {
        let (mut shell, _) = shell_on(Page::Oracle);
        let effects = shell.handle_line("What is LTL?");
        let EffectKind::SendChat(pending) = &effects[0].kind else {
            panic!("expected a chat request");
        };

        shell.navigate(Page::Glossary);
        shell.navigate(Page::Oracle);
        assert!(!shell.handle_event(ShellEvent {
            generation: effects[0].generation,
            outcome: Outcome::Chat(pending.ticket, Ok(reply("Late"))),
        }));
        // The new visit starts over with just the greeting.
        assert_eq!(shell.chat().unwrap().transcript().len(), 1);
    }

    #[test]
    fn test_failed_answer_is_shown_in_transcript() {
        let (mut shell, _) = shell_on(Page::Oracle);
        let effects = shell.handle_line("Hi");
        let EffectKind::SendChat(pending) = &effects[0].kind else {
            panic!("expected a chat request");
        };
        assert!(shell.handle_event(ShellEvent {
            generation: effects[0].generation,
            outcome: Outcome::Chat(
                pending.ticket,
                Err(Error::transport("connection refused"))
            ),
        }));
        let last = shell.chat().unwrap().transcript().last().unwrap();
        assert!(last.is_failure());
        assert!(last.content().contains("connection refused"));
    }

    #[test]
    fn test_sources_open_drawer() {
        let (mut shell, _) = shell_on(Page::Oracle);
        shell.handle_line("/source 1");
        let PageState::Oracle(oracle) = &shell.page else {
            unreachable!();
        };
        assert_eq!(oracle.drawer.unwrap().title, "Engineering Handbook");

        shell.handle_line(":close");
        let PageState::Oracle(oracle) = &shell.page else {
            unreachable!();
        };
        assert!(oracle.drawer.is_none());

        shell.handle_line("/source 9");
        assert_eq!(shell.notice(), Some("No source #9."));
    }

    #[test]
    fn test_single_upload_at_a_time() {
        let (mut shell, _) = shell_on(Page::Analyst);
        let effects = shell.handle_line("/upload /tmp/design.pdf");
        let EffectKind::Upload { ticket, path } = &effects[0].kind else {
            panic!("expected an upload");
        };
        assert_eq!(path, Path::new("/tmp/design.pdf"));
        assert!(shell.documents().unwrap().is_uploading());

        assert!(shell.handle_line("/upload /tmp/other.pdf").is_empty());
        assert!(shell.notice().is_some());

        assert!(shell.handle_event(ShellEvent {
            generation: effects[0].generation,
            outcome: Outcome::Upload(
                *ticket,
                Ok(DocumentHandle {
                    document_id: "doc-1".to_owned(),
                    filename: "design.pdf".to_owned(),
                })
            ),
        }));
        let effects = shell.handle_line("Summarize");
        let EffectKind::SendDocumentChat(pending) = &effects[0].kind else {
            panic!("expected a document question");
        };
        assert_eq!(pending.request.document_id, "doc-1");
    }

    #[test]
    fn test_question_without_document() {
        let (mut shell, _) = shell_on(Page::Analyst);
        assert!(shell.handle_line("Summarize").is_empty());
        assert_eq!(shell.notice(), Some("upload a document first"));
    }

    #[test]
    fn test_glossary_filtering() {
        let (mut shell, _) = shell_on(Page::Glossary);
        shell.handle_line("/category Security");
        shell.handle_line("/search SSH");
        let PageState::Glossary(filter) = &shell.page else {
            unreachable!();
        };
        let terms = filter.apply(portal_core::catalog::glossary::TERMS);
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].term, "SSH");

        shell.handle_line("/category Chemistry");
        assert!(shell.notice().unwrap().contains("Logistics"));
    }

    #[test]
    fn test_palette_navigation() {
        let mut shell = Shell::new("x");
        shell.handle_line(":k");
        assert!(shell.palette().is_open());
        shell.handle_line("glossary");
        assert_eq!(shell.palette().results().len(), 1);
        shell.handle_line("1");
        assert_eq!(shell.page(), Page::Glossary);
        assert!(!shell.palette().is_open());
        assert_eq!(shell.palette().search(), "");
    }

    #[test]
    fn test_palette_shortcut_toggles() {
        let mut shell = Shell::new("x");
        shell.handle_line(":k");
        assert!(shell.palette().is_open());
        shell.handle_line(":k");
        assert!(!shell.palette().is_open());

        shell.handle_line(":k docker");
        shell.handle_line(":k docker");
        assert!(shell.palette().is_open());
        assert_eq!(shell.palette().search(), "docker");
    }

    #[test]
    fn test_checklist_toggle() {
        let (mut shell, _) = shell_on(Page::Checklist);
        shell.handle_line("/toggle 1.3");
        let PageState::Checklist(checklist) = &shell.page else {
            unreachable!();
        };
        assert_eq!(checklist.completed(), 3);
        shell.handle_line("/toggle 9.9");
        assert_eq!(shell.notice(), Some("No item 9.9."));
    }

    #[test]
    fn test_commands_outside_their_page() {
        let (mut shell, _) = shell_on(Page::Dashboard);
        for line in ["/quick 1", "/upload a.pdf", "/toggle 1.1", "hello"] {
            assert!(shell.handle_line(line).is_empty());
            assert_eq!(shell.notice(), Some(NOT_HERE));
        }
    }

    #[test]
    fn test_quit() {
        let mut shell = Shell::new("x");
        shell.handle_line(":quit");
        assert!(shell.should_quit());
    }
}
