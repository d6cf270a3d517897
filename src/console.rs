use std::collections::VecDeque;
use std::io::{self, BufRead, Write};

use rustyline::Editor;

use crate::error::{BankError, InputError};

/// Where the menu reads from and prints to
///
/// Input is read as whitespace separated words: blank lines are skipped and the words left over on
/// a line answer the following prompts.
pub trait Console {
    /// Shows ```prompt``` and returns the next word typed
    fn read_word(&mut self, prompt: &str) -> Result<String, BankError>;
    fn print_line(&mut self, line: &str) -> Result<(), BankError>;
}

/// Words read from a line and not consumed yet
#[derive(Debug, Default)]
struct Words(VecDeque<String>);

impl Words {
    fn next(&mut self) -> Option<String> {
        self.0.pop_front()
    }
    /// Keeps the words of ```line```, returns whether there was any
    fn refill(&mut self, line: &str) -> bool {
        self.0.extend(line.split_whitespace().map(|x| x.to_string()));
        !self.0.is_empty()
    }
}

/// A console over any reader and writer, for piped input and for tests
pub struct StreamConsole<R, W> {
    input: R,
    output: W,
    words: Words,
}

impl<R: BufRead, W: Write> StreamConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        StreamConsole {
            input,
            output,
            words: Words::default(),
        }
    }
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for StreamConsole<R, W> {
    fn read_word(&mut self, prompt: &str) -> Result<String, BankError> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        loop {
            if let Some(word) = self.words.next() {
                return Ok(word);
            }
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(InputError::EndOfInput.into());
            }
            self.words.refill(&line);
        }
    }

    fn print_line(&mut self, line: &str) -> Result<(), BankError> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }
}

/// An interactive terminal with line editing and history
pub struct TerminalConsole {
    editor: Editor<()>,
    words: Words,
}

impl TerminalConsole {
    pub fn new() -> Self {
        TerminalConsole {
            editor: Editor::<()>::new(),
            words: Words::default(),
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn read_word(&mut self, prompt: &str) -> Result<String, BankError> {
        if let Some(word) = self.words.next() {
            // answered ahead on a previous line
            print!("{}", prompt);
            io::stdout().flush()?;
            return Ok(word);
        }
        let mut prompt = prompt;
        loop {
            let line = self.editor.readline(prompt)?;
            if self.words.refill(&line) {
                self.editor.add_history_entry(line.as_str());
                return self.words.next().ok_or_else(|| InputError::EndOfInput.into());
            }
            prompt = "";
        }
    }

    fn print_line(&mut self, line: &str) -> Result<(), BankError> {
        println!("{}", line);
        Ok(())
    }
}
