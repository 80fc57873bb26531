//! User interaction seam for the controller: yes/no prompts and report lines.

use std::io::{self, BufRead, Write};

/// Where prompts are asked and report lines go.
pub trait Console {
    /// Ask a yes/no question; `Ok(false)` on a negative answer or end of input.
    fn confirm(&mut self, question: &str) -> io::Result<bool>;

    /// Emit one report line (a trailing newline is added).
    fn report(&mut self, line: &str) -> io::Result<()>;

    /// Emit a diagnostic about a skipped file. Goes to stderr by default.
    fn diagnose(&mut self, message: &str) -> io::Result<()> {
        crate::output::print_error(message);
        Ok(())
    }
}

/// POSIX-locale `rpmatch`: affirmative iff the answer starts with `y` or `Y`.
/// Leading blanks are not skipped.
pub fn is_affirmative(answer: &str) -> bool {
    answer.starts_with(['y', 'Y'])
}

/// Line-oriented console over any reader/writer pair.
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}

impl TerminalConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process stdin/stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn confirm(&mut self, question: &str) -> io::Result<bool> {
        self.output.write_all(question.as_bytes())?;
        self.output.flush()?;
        let mut answer = String::new();
        if self.input.read_line(&mut answer)? == 0 {
            // EOF: keep the terminal tidy for the next prompt or message.
            writeln!(self.output)?;
            return Ok(false);
        }
        Ok(is_affirmative(&answer))
    }

    fn report(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{line}")?;
        self.output.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn affirmative_matching() {
        assert!(is_affirmative("y\n"));
        assert!(is_affirmative("Yes"));
        assert!(is_affirmative("yes please"));
        assert!(!is_affirmative(" yes"));
        assert!(!is_affirmative(""));
        assert!(!is_affirmative("\n"));
        assert!(!is_affirmative("no"));
        assert!(!is_affirmative("sure"));
    }

    #[test]
    fn confirm_reads_one_line_per_question() {
        let mut c = TerminalConsole::new(Cursor::new("yes\nn\n"), Vec::new());
        assert!(c.confirm("first? ").unwrap());
        assert!(!c.confirm("second? ").unwrap());
        assert!(!c.confirm("third? ").unwrap());
        let (_, out) = c.into_inner();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("first? second? third? "));
    }

    #[test]
    fn report_appends_newline() {
        let mut c = TerminalConsole::new(Cursor::new(""), Vec::new());
        c.report("renamed file: 'a b' -> 'ab'").unwrap();
        let (_, out) = c.into_inner();
        assert_eq!(out, b"renamed file: 'a b' -> 'ab'\n");
    }
}
