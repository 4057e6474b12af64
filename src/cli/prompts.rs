//! Interactive prompts using dialoguer

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Input;

/// Question asked after the confirmation message
pub const CONFIRM_QUESTION: &str = "Are you sure you want to do that?";

/// Source of the operator's consent before any file is touched
pub trait ConfirmationGate {
    /// Show `message` and ask for consent. `Ok(false)` means declined.
    fn confirm(&mut self, message: &str) -> io::Result<bool>;
}

/// Whether a free-text reply counts as consent.
///
/// Any reply containing `y` (which covers `yes`) in any case is accepted.
pub fn is_affirmative(reply: &str) -> bool {
    let reply = reply.to_lowercase();
    ["yes", "y"].iter().any(|keyword| reply.contains(keyword))
}

/// Asks on the terminal, or reads one line from stdin when it is piped
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl ConfirmationGate for TerminalPrompt {
    fn confirm(&mut self, message: &str) -> io::Result<bool> {
        let reply = if io::stdin().is_terminal() {
            println!("{}", message);
            Input::<String>::new()
                .with_prompt(CONFIRM_QUESTION)
                .allow_empty(true)
                .interact_text()
                .map_err(io::Error::other)?
        } else {
            let mut stderr = io::stderr();
            writeln!(stderr, "{}", message)?;
            write!(stderr, "{} ", CONFIRM_QUESTION)?;
            stderr.flush()?;

            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            line
        };

        Ok(is_affirmative(&reply))
    }
}

/// Consent given up front with `--no-confirm`
#[derive(Debug, Default)]
pub struct AutoConfirm;

impl ConfirmationGate for AutoConfirm {
    fn confirm(&mut self, _message: &str) -> io::Result<bool> {
        Ok(true)
    }
}

/// Answers every prompt with a fixed reply
#[derive(Debug, Clone)]
pub struct FixedReply {
    reply: String,
    asked: usize,
}

impl FixedReply {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            asked: 0,
        }
    }

    /// How many times the gate was consulted
    pub fn asked(&self) -> usize {
        self.asked
    }
}

impl ConfirmationGate for FixedReply {
    fn confirm(&mut self, _message: &str) -> io::Result<bool> {
        self.asked += 1;
        Ok(is_affirmative(&self.reply))
    }
}
