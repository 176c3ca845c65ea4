use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use listing_core::{update, ListingState, Msg};
use listing_engine::FetchSettings;
use listing_logging::{listing_info, listing_warn};

use super::effects::EffectRunner;
use super::input::{parse_command, Command, HELP};
use super::{logging, render};

/// Everything the dispatch loop reacts to.
pub enum Inbound {
    Command(Command),
    Msg(Msg),
    InputClosed,
}

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize();
    listing_info!("Starting listing_app");

    let (inbox_tx, inbox_rx) = mpsc::channel::<Inbound>();
    let effects = EffectRunner::new(FetchSettings::default(), inbox_tx.clone())?;
    spawn_input_reader(inbox_tx);

    let mut app = App::new(effects);
    println!("{HELP}");
    app.dispatch(Msg::Started)?;

    while let Ok(inbound) = inbox_rx.recv() {
        match inbound {
            Inbound::Msg(msg) => app.dispatch(msg)?,
            Inbound::Command(Command::Quit) | Inbound::InputClosed => break,
            Inbound::Command(Command::Help) => println!("{HELP}"),
            Inbound::Command(command) => {
                if let Some(msg) = command.into_msg(&app.state) {
                    app.dispatch(msg)?;
                }
            }
        }
    }

    listing_info!("Exiting listing_app");
    Ok(())
}

fn spawn_input_reader(inbox: mpsc::Sender<Inbound>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let inbound = match line {
                Ok(line) => Inbound::Command(parse_command(&line)),
                Err(err) => {
                    listing_warn!("Failed to read stdin: {}", err);
                    Inbound::InputClosed
                }
            };
            let closed = matches!(inbound, Inbound::InputClosed);
            if inbox.send(inbound).is_err() || closed {
                return;
            }
        }
        let _ = inbox.send(Inbound::InputClosed);
    });
}

struct App {
    state: ListingState,
    effects: EffectRunner,
}

impl App {
    fn new(effects: EffectRunner) -> Self {
        Self {
            state: ListingState::new(),
            effects,
        }
    }

    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        self.effects.run(effects);

        let was_dirty = state.consume_dirty();
        let view = was_dirty.then(|| state.view());
        self.state = state;

        if let Some(view) = view {
            let mut stdout = io::stdout().lock();
            writeln!(stdout)?;
            stdout.write_all(render::render(&view).as_bytes())?;
            stdout.flush()?;
        }
        Ok(())
    }
}
