//! Interactive yes/no confirmation before committing.

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Input;

const QUESTION: &str = "Commit this message? (yes/no)";
const REPROMPT: &str = "Please enter 'yes' or 'no'.";

/// Where the confirmation gate shows text and reads answers.
///
/// Abstracted so the gate can be driven by scripted answers in tests.
pub trait Terminal {
    /// Print text for the user.
    fn show(&mut self, text: &str);

    /// Ask a question and return one line of input.
    fn ask(&mut self, question: &str) -> io::Result<String>;
}

/// Terminal backed by stdout/stdin.
///
/// Uses a `dialoguer` prompt on a TTY and plain line reads otherwise, so
/// answers can be piped in.
#[derive(Debug, Default)]
pub struct ConsoleTerminal;

impl Terminal for ConsoleTerminal {
    fn show(&mut self, text: &str) {
        println!("{text}");
    }

    fn ask(&mut self, question: &str) -> io::Result<String> {
        if io::stdin().is_terminal() {
            return Input::<String>::new()
                .with_prompt(question)
                .allow_empty(true)
                .interact_text()
                .map_err(|e| io::Error::other(e.to_string()));
        }

        print!("{question}: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before an answer was given",
            ));
        }
        Ok(line)
    }
}

/// Show the message and decide whether to commit it.
///
/// With `auto_confirm` no input is read. Otherwise the question repeats
/// until the answer is `yes`/`y` (true) or `no`/`n` (false), ignoring case.
pub fn confirm_commit(
    message: &str,
    auto_confirm: bool,
    terminal: &mut dyn Terminal,
) -> io::Result<bool> {
    terminal.show(&format!("Commit message:\n{message}\n"));

    if auto_confirm {
        return Ok(true);
    }

    loop {
        let answer = terminal.ask(QUESTION)?;
        match answer.trim().to_lowercase().as_str() {
            "yes" | "y" => return Ok(true),
            "no" | "n" => return Ok(false),
            _ => terminal.show(REPROMPT),
        }
    }
}
