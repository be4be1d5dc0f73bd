use anyhow::Result;
use console::style;

use super::{prompt::prompt_yes_no, LineWriter};

/// Everything the processing workflow needs from the terminal.
pub trait InteractiveStyle: LineWriter {
    fn note(&self, message: &str);
    fn warning(&self, message: &str);
    fn success(&self, message: &str);

    /// Blocks until the operator answered the yes/no question.
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

#[derive(Clone, Copy, Default)]
pub struct ConsoleStyle;

impl LineWriter for ConsoleStyle {
    fn write_line(&self, line: &str) {
        println!("{}", line);
    }
}

impl InteractiveStyle for ConsoleStyle {
    fn note(&self, message: &str) {
        println!();
        println!("{}", style(format!(" ! [NOTE] {message}")).yellow());
        println!();
    }

    fn warning(&self, message: &str) {
        println!();
        println!(
            "{}",
            style(format!(" [WARNING] {message} ")).black().on_yellow()
        );
        println!();
    }

    fn success(&self, message: &str) {
        println!();
        println!("{}", style(format!(" [OK] {message} ")).black().on_green());
        println!();
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        prompt_yes_no(prompt, true)
    }
}
