use console::style;

use crate::error::Error;

/// Display a success line
pub fn show_success(message: &str) {
    println!("{} {}", style("✅").bold(), style(message).green());
}

/// Display verbatim tool output
pub fn show_output(text: &str) {
    if !text.is_empty() {
        println!("{text}");
    }
}

/// Display a failed operation with its diagnostic
pub fn show_failure(context: &str, error: &Error) {
    eprintln!(
        "{} {} {}",
        style("❌").bold(),
        style(context).red().bold(),
        style(error).red()
    );
}

/// Display an error message
pub fn show_error(error: &Error) {
    eprintln!(
        "{} {} {}",
        style("❌").bold(),
        style("Error:").bold().red(),
        style(error).red()
    );
}

/// Display an informational line
pub fn show_info(message: &str) {
    println!("{} {}", style("ℹ️").bold(), style(message).cyan());
}

/// Display a dimmed hint line
pub fn show_hint(message: &str) {
    println!("{} {}", style("👉").bold(), style(message).dim());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_show_messages_do_not_panic() {
        show_success("ok");
        show_info("note");
        show_hint("hint");
        show_output("");
        show_output("line");
    }
}
