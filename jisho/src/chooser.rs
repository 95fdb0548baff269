//! Console headword chooser

use std::io::{self, BufRead, Write};

use tracing::warn;
use weblio::{Choice, Chooser};

/// Asks the user to pick a headword by number on a text console.
///
/// Choices are numbered from 1. Anything that isn't a number on the list is rejected and asked
/// for again, while an empty line, `q` or the end of input cancels.
pub struct ConsoleChooser<R, W> {
    input: R,
    output: W,
}

impl ConsoleChooser<io::StdinLock<'static>, io::Stdout> {
    /// Creates a chooser that reads from stdin and writes to stdout.
    #[must_use]
    pub fn stdio() -> Self {
        ConsoleChooser::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleChooser<R, W> {
    /// Creates a chooser that reads answers from `input` and writes prompts to `output`.
    pub const fn new(input: R, output: W) -> Self {
        ConsoleChooser { input, output }
    }

    fn prompt(&mut self, labels: &[String]) -> io::Result<()> {
        writeln!(
            self.output,
            "Choose which one you would like by typing the entry's number and press Enter:\n"
        )?;

        for (number, label) in labels.iter().enumerate().map(|(i, label)| (i + 1, label)) {
            writeln!(self.output, "{number}. {label}")?;
        }

        writeln!(self.output)?;
        self.output.flush()
    }

    fn ask(&mut self, labels: &[String]) -> io::Result<Choice> {
        self.prompt(labels)?;

        let mut line = String::new();

        loop {
            line.clear();

            if self.input.read_line(&mut line)? == 0 {
                return Ok(Choice::Cancel);
            }

            match line.trim() {
                "" | "q" => return Ok(Choice::Cancel),
                answer => match answer.parse::<usize>() {
                    Ok(number) if (1..=labels.len()).contains(&number) => {
                        return Ok(Choice::Index(number - 1));
                    }
                    _ => {
                        writeln!(self.output, "Error: enter a number that's on the list.")?;
                        self.output.flush()?;
                    }
                },
            }
        }
    }
}

impl<R: BufRead, W: Write> Chooser for ConsoleChooser<R, W> {
    fn choose(&mut self, labels: &[String]) -> Choice {
        self.ask(labels).unwrap_or_else(|err| {
            warn!(%err, "could not read choice from console");

            Choice::Cancel
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn labels() -> Vec<String> {
        ["上", "神", "紙"].map(String::from).to_vec()
    }

    fn choose(input: &str) -> (Choice, String) {
        let mut output = Vec::new();
        let choice = ConsoleChooser::new(Cursor::new(input), &mut output).choose(&labels());

        (choice, String::from_utf8(output).expect("utf-8 output"))
    }

    #[test]
    fn numbers_are_one_based() {
        let (choice, output) = choose("2\n");

        assert_eq!(choice, Choice::Index(1));
        assert!(output.contains("1. 上\n2. 神\n3. 紙\n"));
    }

    #[test]
    fn invalid_answers_are_asked_again() {
        let (choice, output) = choose("0\n4\nkami\n 3 \n");

        assert_eq!(choice, Choice::Index(2));
        assert_eq!(
            output.matches("Error: enter a number that's on the list.").count(),
            3
        );
    }

    #[test]
    fn empty_line_cancels() {
        assert_eq!(choose("\n").0, Choice::Cancel);
    }

    #[test]
    fn quit_cancels() {
        assert_eq!(choose("5\nq\n").0, Choice::Cancel);
    }

    #[test]
    fn end_of_input_cancels() {
        assert_eq!(choose("").0, Choice::Cancel);
    }
}
