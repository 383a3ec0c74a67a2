//! The main REPL implementation.

use std::io::{self, Write};
use std::path::Path;

use tallytable_engine::Admission;
use tallytable_foundation::{Error, Result};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::session::Session;

/// The interactive REPL.
///
/// Plain lines are fed to the session as transcript entries; lines opening
/// with a colon are commands. Type `:help` for the command list.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (tracker, automatic numbering).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            session: Session::new(),
            show_banner: true,
            prompt: "tally> ".to_string(),
        }
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    self.print_error(&e);
                }
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let line = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        // Skip empty lines
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(true);
        }

        // Add to history
        self.editor.add_history(trimmed);

        if let Some(command) = trimmed.strip_prefix(':') {
            return self.execute_command(command);
        }

        match self.session.feed_line(trimmed)? {
            Some(Admission::Processed { kind, mutated }) => {
                if mutated {
                    println!("\x1b[1m{kind}\x1b[0m (ledger updated)");
                } else {
                    println!("\x1b[1m{kind}\x1b[0m");
                }
            }
            Some(Admission::Stale) => println!("stale entry, dropped"),
            None => {}
        }

        Ok(true)
    }

    /// Executes a colon command.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn execute_command(&mut self, command: &str) -> Result<bool> {
        let (name, arg) = match command.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (command, ""),
        };

        match name {
            "help" | "h" => {
                self.print_help();
                Ok(true)
            }
            "table" | "t" => {
                self.print_table();
                Ok(true)
            }
            "bank" | "b" => {
                self.print_bank();
                Ok(true)
            }
            "snapshot" => {
                println!("{}", self.session.snapshot_json()?);
                Ok(true)
            }
            "save" => {
                if arg.is_empty() {
                    return Err(Error::internal("usage: :save PATH"));
                }
                self.session.save_snapshot(Path::new(arg))?;
                println!("snapshot written to {arg}");
                Ok(true)
            }
            "load" => {
                if arg.is_empty() {
                    return Err(Error::internal("usage: :load PATH"));
                }
                let stats = self.session.load_file(Path::new(arg))?;
                println!(
                    "{} entries applied, {} mutations, {} stale",
                    stats.entries, stats.mutations, stats.stale
                );
                Ok(true)
            }
            "reset" => {
                self.session.reset();
                println!("game cleared");
                Ok(true)
            }
            "quit" | "q" | "exit" => Ok(false),
            other => Err(Error::internal(format!(
                "unknown command :{other} (try :help)"
            ))),
        }
    }

    /// Prints the player ledger table.
    fn print_table(&self) {
        let book = self.session.tracker().book();
        if book.is_empty() {
            println!("no players tracked yet");
            return;
        }
        let width = book.iter().map(|p| p.name.len()).max().unwrap_or(0);
        for player in book.iter() {
            let r = &player.resources;
            println!(
                "  {:width$}  wheat:{} stone:{} brick:{} wood:{} wool:{} unknown:{}  (total {})",
                player.name,
                r.wheat,
                r.stone,
                r.brick,
                r.wood,
                r.wool,
                r.unknown,
                r.total(),
            );
        }
    }

    /// Prints the development piece bank.
    fn print_bank(&self) {
        let bank = self.session.tracker().bank();
        println!("  deck remaining: {}/25", bank.remaining);
        println!(
            "  knights:{} victory:{} roads:{} plenty:{} monopoly:{}",
            bank.knights,
            bank.victory_points,
            bank.road_building,
            bank.year_of_plenty,
            bank.monopoly,
        );
    }

    /// Prints an error to stderr.
    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    /// Prints the command help.
    #[allow(clippy::unused_self)]
    fn print_help(&self) {
        println!(
            "\
Transcript lines are applied as they are typed, e.g.:
    [Amber|#e27174] got {{wool}} {{wool}}
    3 | [Bram] gave {{wood}} and got {{wheat}} from [Amber]

Commands:
    :help, :h        Show this help
    :table, :t       Show the player ledger table
    :bank, :b        Show the development piece bank
    :snapshot        Print the current snapshot as JSON
    :save PATH       Write the snapshot to a file
    :load PATH       Feed a transcript file
    :reset           Clear the game
    :quit, :q        Exit
    Ctrl+D           Exit"
        );
    }

    /// Prints the welcome banner.
    #[allow(clippy::unused_self)]
    fn print_banner(&self) {
        println!("\x1b[1;36m");
        println!(" _____       _  _         _          _      _");
        println!("|_   _|__ _ | || | _   _ | |_  __ _ | |__  | |  ___");
        println!("  | | / _` || || || | | || __|/ _` || '_ \\ | | / _ \\");
        println!("  | || (_| || || || |_| || |_| (_| || |_) || ||  __/");
        println!("  |_| \\__,_||_||_| \\__, | \\__|\\__,_||_.__/ |_| \\___|");
        println!("                   |___/");
        println!("\x1b[0m");
        println!("Welcome to Tallytable v{}", env!("CARGO_PKG_VERSION"));
        println!("Type transcript lines to track a game. Use :help for commands.\n");

        // Flush to ensure banner appears
        let _ = io::stdout().flush();
    }
}
