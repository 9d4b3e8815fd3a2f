//! Line-based prompts for choosing a directory and archives.

use std::io;
use std::io::BufRead;
use std::io::Write;
use std::path::PathBuf;

use unbox_core::ArchiveFile;

/// Answer to the "which file" prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// 0-based position in the listing.
    Index(usize),
    /// The user typed `exit` or closed the input.
    Exit,
    /// Anything else.
    Invalid,
}

/// Parses an answer to the "which file" prompt for a listing of `len` files.
pub fn parse_choice(answer: &str, len: usize) -> Choice {
    let answer = answer.trim();
    if answer.eq_ignore_ascii_case("exit") {
        return Choice::Exit;
    }
    if answer.is_empty() || !answer.bytes().all(|b| b.is_ascii_digit()) {
        return Choice::Invalid;
    }
    match answer.parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => Choice::Index(n - 1),
        _ => Choice::Invalid,
    }
}

/// Asks questions on `output` and reads answers from `input`.
///
/// End of input is treated as a negative answer so piped or closed stdin
/// never loops.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Writes `question` and returns the trimmed answer, or `None` at end
    /// of input.
    fn ask(&mut self, question: &str) -> io::Result<Option<String>> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Asks for the directory to scan. A blank answer means the default.
    pub fn directory(&mut self) -> io::Result<Option<PathBuf>> {
        let answer = self.ask(
            "Enter the directory path containing compressed files, or press Enter to use the default Downloads folder: ",
        )?;
        Ok(answer.filter(|a| !a.is_empty()).map(PathBuf::from))
    }

    /// Asks a yes/no question; only `y` (any case) counts as yes.
    pub fn confirm(&mut self, question: &str) -> io::Result<bool> {
        Ok(self
            .ask(question)?
            .is_some_and(|a| a.eq_ignore_ascii_case("y")))
    }

    /// Prints the numbered listing.
    pub fn show_archives(&mut self, archives: &[ArchiveFile]) -> io::Result<()> {
        writeln!(self.output, "Available compressed files:")?;
        for (idx, archive) in archives.iter().enumerate() {
            writeln!(self.output, "{}: {}", idx + 1, archive.display_name())?;
        }
        Ok(())
    }

    /// Asks for one file, re-asking until the answer is valid.
    pub fn choose(&mut self, len: usize) -> io::Result<Choice> {
        let question = format!(
            "Enter the number of the file you want to extract (1-{len}, or type 'exit' to quit): "
        );
        loop {
            let Some(answer) = self.ask(&question)? else {
                return Ok(Choice::Exit);
            };
            match parse_choice(&answer, len) {
                Choice::Invalid => {
                    writeln!(self.output, "Invalid selection. Please choose a valid file number.")?;
                }
                choice => return Ok(choice),
            }
        }
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.output
    }
}
