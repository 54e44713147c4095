use crate::error::Result;
use console::{Style, Term};
use std::io::{self, BufRead, IsTerminal};

/// Source of interactive answers.
pub trait Prompt {
    /// Shows `question` and returns the trimmed answer.
    fn ask(&mut self, question: &str) -> Result<String>;
}

/// Asks on the terminal. Questions go to stderr so stdout only carries output.
pub struct TermPrompt {
    term: Term,
    color: bool,
}

impl TermPrompt {
    pub fn new(color: bool) -> Self {
        Self {
            term: Term::stderr(),
            color,
        }
    }
}

impl Prompt for TermPrompt {
    fn ask(&mut self, question: &str) -> Result<String> {
        let question = if self.color {
            Style::new()
                .yellow()
                .force_styling(true)
                .apply_to(question)
                .to_string()
        } else {
            question.to_string()
        };
        self.term.write_str(&format!("{}: ", question))?;
        if io::stdin().is_terminal() {
            Ok(self.term.read_line()?.trim().to_string())
        } else {
            read_answer(&mut io::stdin().lock())
        }
    }
}

/// One line of piped input; end of input is an empty answer.
fn read_answer<R: BufRead>(input: &mut R) -> Result<String> {
    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
pub mod scripted {
    use super::*;
    use std::collections::VecDeque;

    /// Replays canned answers and remembers the questions asked.
    #[derive(Default)]
    pub struct ScriptedPrompt {
        answers: VecDeque<String>,
        pub asked: Vec<String>,
    }

    impl ScriptedPrompt {
        pub fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|a| a.trim().to_string()).collect(),
                asked: Vec::new(),
            }
        }
    }

    impl Prompt for ScriptedPrompt {
        fn ask(&mut self, question: &str) -> Result<String> {
            self.asked.push(question.to_string());
            Ok(self.answers.pop_front().unwrap_or_default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn piped_answers_are_read_line_by_line() {
        let mut input = Cursor::new("nyc1\r\n  10 \n");
        assert_eq!(read_answer(&mut input).unwrap(), "nyc1");
        assert_eq!(read_answer(&mut input).unwrap(), "10");
        assert_eq!(read_answer(&mut input).unwrap(), "");
    }
}
