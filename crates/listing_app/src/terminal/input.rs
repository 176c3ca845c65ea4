use listing_core::{ListingState, Msg};

pub const HELP: &str = "\
Type a location to filter, or a command:
  :next / :n        next page
  :prev / :p        previous page
  :page N           jump to page N
  :select N / :s N  show details of job N
  :clear            clear the location filter
  :help             show this help
  :quit / :q        exit";

/// A user intent read from one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Filter(String),
    NextPage,
    PreviousPage,
    Page(u32),
    Select(usize),
    Help,
    Quit,
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim_end_matches(['\r', '\n']);
    let Some(rest) = line.strip_prefix(':') else {
        return Command::Filter(line.to_string());
    };

    let mut parts = rest.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some("next" | "n"), None, None) => Command::NextPage,
        (Some("prev" | "p"), None, None) => Command::PreviousPage,
        (Some("page"), Some(n), None) => n.parse().map(Command::Page).unwrap_or(Command::Help),
        (Some("select" | "s"), Some(n), None) => {
            n.parse().map(Command::Select).unwrap_or(Command::Help)
        }
        (Some("clear"), None, None) => Command::Filter(String::new()),
        (Some("quit" | "q"), None, None) => Command::Quit,
        _ => Command::Help,
    }
}

impl Command {
    /// Message for the controller, if the command maps to one. Page numbers are
    /// clamped to the known range and selections are 1-based list positions.
    pub fn into_msg(self, state: &ListingState) -> Option<Msg> {
        match self {
            Command::Filter(text) => Some(Msg::LocationFilterChanged(text)),
            Command::NextPage => Some(Msg::NextPageClicked),
            Command::PreviousPage => Some(Msg::PreviousPageClicked),
            Command::Page(page) => {
                let last = state.total_pages().max(1);
                Some(Msg::PageRequested(page.clamp(1, last)))
            }
            Command::Select(position) => position
                .checked_sub(1)
                .and_then(|index| state.jobs().get(index))
                .cloned()
                .map(Msg::JobSelected),
            Command::Help | Command::Quit => None,
        }
    }
}
