use std::env;

use atlas_core::CommandStatus;
use color_eyre::owo_colors::{OwoColorize, Style as OwoStyle};

pub struct Style {
    enabled: bool,
}

impl Style {
    pub fn new(force_no_color: bool, is_tty: bool) -> Self {
        let env_no_color = env::var_os("NO_COLOR").is_some();
        Self {
            enabled: !(force_no_color || env_no_color) && is_tty,
        }
    }

    pub fn status(&self, status: CommandStatus, text: &str) -> String {
        let (symbol, tone) = match status {
            CommandStatus::Ok => ("✔", Tone::Green),
            CommandStatus::UserError => ("✗", Tone::Yellow),
            CommandStatus::Failure => ("✖", Tone::Red),
        };
        let line = format!("{symbol} {text}");
        self.paint(&line, tone, true)
    }

    pub fn info(&self, text: &str) -> String {
        self.paint(text, Tone::Blue, false)
    }

    pub fn success(&self, text: &str) -> String {
        self.paint(text, Tone::Green, false)
    }

    pub fn warning(&self, text: &str) -> String {
        self.paint(text, Tone::Yellow, false)
    }

    pub fn command(&self, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        text.bold().to_string()
    }

    pub fn hint(&self, hint: &str) -> String {
        if !self.enabled {
            return format!("atlas ▸ Hint: {hint}");
        }
        let prefix = "atlas ▸ Hint:".cyan().bold().to_string();
        format!("{prefix} {hint}")
    }

    fn paint(&self, text: &str, tone: Tone, bold: bool) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let style = match tone {
            Tone::Green => OwoStyle::new().green(),
            Tone::Yellow => OwoStyle::new().yellow(),
            Tone::Red => OwoStyle::new().red(),
            Tone::Blue => OwoStyle::new().cyan(),
        };
        let style = if bold { style.bold() } else { style };
        text.style(style).to_string()
    }
}

enum Tone {
    Green,
    Yellow,
    Red,
    Blue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_style_leaves_text_plain() {
        let style = Style::new(true, true);
        assert_eq!(style.warning("careful"), "careful");
        assert_eq!(style.status(CommandStatus::Failure, "boom"), "✖ boom");
        assert_eq!(style.hint("retry"), "atlas ▸ Hint: retry");
    }

    #[test]
    fn non_tty_output_is_never_colored() {
        let style = Style::new(false, false);
        assert_eq!(style.success("ok"), "ok");
        assert_eq!(style.command("pytest -v"), "pytest -v");
    }

    #[test]
    fn enabled_style_bolds_status_lines_only() {
        let style = Style { enabled: true };
        let status = style.status(CommandStatus::Ok, "done");
        let plain = style.success("✔ done");
        assert!(status.contains("✔ done") && status.contains('\u{1b}'), "{status:?}");
        assert!(plain.contains("✔ done") && plain.contains('\u{1b}'), "{plain:?}");
        assert_ne!(status, plain);
        assert_ne!(style.info("x"), style.warning("x"));
    }
}
