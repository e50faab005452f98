use bat::PrettyPrinter;
use crossterm::{style::Stylize, terminal::size};
use log::{log_enabled, Level};

// Error Handling
use domxml_error::DomxmlError;

/**
Print a document with syntax highlighting when info logs are enabled.
*/
pub fn print_highlighted(language: &str, string: &str) -> Result<(), DomxmlError> {
    if log_enabled!(Level::Info) {
        // Not a terminal, e.g. output piped to a file.
        let (cols, _) = size().unwrap_or((60, 0));
        let divider = "-".repeat((cols / 3).into());
        println!("{}", format!("{divider}{language}{divider}").green());
        PrettyPrinter::new()
            .input_from_bytes(string.as_bytes())
            .language(language)
            .print()?;
        println!();
    }
    Ok(())
}
