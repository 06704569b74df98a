//! Interactive chat shell.
//!
//! A readline loop over the turn processor. Plain lines are chat turns;
//! slash-prefixed lines are shell commands.

use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::history::{DefaultHistory, History};
use rustyline::{DefaultEditor, Editor};

use biochat_chat::{ChatSession, TurnProcessor};
use biochat_core::config::BioChatConfig;
use biochat_embeddings::engine;

/// Shell configuration options.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Path to history file (None disables persistence).
    pub history_file: Option<PathBuf>,
    /// Maximum number of history entries to keep.
    pub history_size: usize,
    /// Prompt string displayed before each input.
    pub prompt: String,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            history_file: dirs_home().map(|h| h.join(".biochat_history")),
            history_size: 1000,
            prompt: "you> ".to_string(),
        }
    }
}

/// Returns the user's home directory if available.
fn dirs_home() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Result of handling one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Assistant reply to print.
    Reply(String),
    /// Shell notice (help text, counts) to print.
    Notice(String),
    /// Shell should exit.
    Exit,
    /// Error occurred.
    Error(String),
}

/// Action to take after processing a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopAction {
    Continue,
    Exit,
}

/// Interactive chat shell over one session.
pub struct ChatShell {
    processor: TurnProcessor,
    session: ChatSession,
    config: ShellConfig,
}

impl ChatShell {
    /// Creates a shell with default shell options.
    #[must_use]
    pub fn new(config: BioChatConfig) -> Self {
        Self::with_shell_config(config, ShellConfig::default())
    }

    #[must_use]
    pub fn with_shell_config(config: BioChatConfig, shell: ShellConfig) -> Self {
        Self {
            processor: TurnProcessor::new(config),
            session: ChatSession::new(),
            config: shell,
        }
    }

    /// Handles a single line and returns what to do with it.
    pub fn execute(&mut self, input: &str) -> CommandResult {
        let trimmed = input.trim();

        if let Some(command) = trimmed.strip_prefix('/') {
            return self.run_command(&command.to_lowercase());
        }

        // Everything else, including the empty line, is a chat turn.
        let reply = self.processor.process(&mut self.session, input);
        CommandResult::Reply(reply.content)
    }

    fn run_command(&mut self, command: &str) -> CommandResult {
        match command {
            "quit" | "exit" | "q" => CommandResult::Exit,
            "help" | "h" | "?" => CommandResult::Notice(Self::help_text()),
            "count" => CommandResult::Notice(format!(
                "{} messages in this conversation.",
                self.session.message_count()
            )),
            "clear" => {
                let dropped = self.session.clear();
                CommandResult::Notice(format!("Cleared {dropped} messages."))
            }
            other => CommandResult::Error(format!(
                "Unknown command /{other}. Type /help for the list."
            )),
        }
    }

    /// Returns the help text.
    #[must_use]
    pub fn help_text() -> String {
        "\
BioChat - nucleotide sequence analysis demo

Type a DNA/RNA sequence and the assistant will analyze it.
An empty line gets you a greeting; plain text gets a polite redirect.

Commands:
  /help, /h, /?   Show this help message
  /count          Show the message count for this conversation
  /clear          Clear the conversation history
  /quit, /exit    Leave the shell

Examples:
  you> ATGCGATCGATCGATCG
  you> AUGGCUAAUGCUAAUG
"
        .to_string()
    }

    /// Processes a command result and returns whether to continue the loop.
    #[must_use]
    pub fn process_result(result: &CommandResult) -> LoopAction {
        match result {
            CommandResult::Reply(text) => {
                println!("bot> {text}\n");
                LoopAction::Continue
            }
            CommandResult::Notice(text) => {
                println!("{text}");
                LoopAction::Continue
            }
            CommandResult::Error(text) => {
                eprintln!("{text}");
                LoopAction::Continue
            }
            CommandResult::Exit => LoopAction::Exit,
        }
    }

    /// Returns the shell version string.
    #[must_use]
    pub const fn version() -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    /// Runs the interactive loop until exit.
    ///
    /// # Errors
    /// Returns an error if readline initialization fails.
    pub fn run(&mut self) -> anyhow::Result<()> {
        let mut editor: Editor<(), DefaultHistory> = DefaultEditor::new()?;
        if let Some(ref path) = self.config.history_file {
            let _ = editor.load_history(path);
        }
        editor.history_mut().set_max_len(self.config.history_size)?;

        println!("BioChat v{}", Self::version());
        println!("Paste a DNA/RNA sequence to analyze it. Type /help for commands.\n");

        loop {
            match editor.readline(&self.config.prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        let _ = editor.add_history_entry(line.trim());
                    }
                    if Self::process_result(&self.execute(&line)) == LoopAction::Exit {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => println!("^C"),
                Err(ReadlineError::Eof) => break,
                Err(err) => {
                    eprintln!("Error: {err}");
                    break;
                }
            }
        }

        println!(
            "Goodbye! {} messages in {}s.",
            self.session.message_count(),
            self.session.age().num_seconds()
        );
        if let Some(ref path) = self.config.history_file {
            let _ = editor.save_history(path);
        }
        engine::global().teardown();
        Ok(())
    }
}
