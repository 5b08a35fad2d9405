//! Decorative startup banner.

use crossterm::style::Stylize;
use std::io::Write;

const FALLBACK_WIDTH: u16 = 80;

const ART: &str = r#"
  ____ _____ ____     ___ _   _ _____ ___  
 | __ )_   _/ ___|   |_ _| \ | |  ___/ _ \ 
 |  _ \ | || |  _____ | ||  \| | |_ | | | |
 | |_) || || |_|_____|| || |\  |  _|| |_| |
 |____/ |_| \____|   |___|_| \_|_|   \___/ 
"#;

/// Render the banner with every line padded so the art sits centered in
/// `width` columns. No padding when the terminal is narrower than the art.
pub fn render(width: u16) -> String {
    let art_width = ART.lines().map(|l| l.chars().count()).max().unwrap_or(0);
    let pad = (width as usize).saturating_sub(art_width) / 2;
    let indent = " ".repeat(pad);

    ART.lines()
        .map(|line| {
            if line.is_empty() {
                String::new()
            } else {
                format!("{}{}", indent, line)
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn terminal_width() -> u16 {
    crossterm::terminal::size()
        .map(|(w, _)| w)
        .unwrap_or(FALLBACK_WIDTH)
}

/// Write the banner centered to the current terminal width.
pub fn print(out: &mut dyn Write, color: bool) {
    let text = render(terminal_width());
    let _ = if color {
        writeln!(out, "{}", text.green())
    } else {
        writeln!(out, "{}", text)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_padding() {
        let art_width = ART.lines().map(|l| l.chars().count()).max().unwrap();
        let rendered = render(art_width as u16 + 20);
        let first_art_line = rendered.lines().find(|l| !l.is_empty()).unwrap();
        assert!(first_art_line.starts_with(&" ".repeat(10)));
    }

    #[test]
    fn test_narrow_terminal_has_no_padding() {
        let rendered = render(10);
        let expected: Vec<&str> = ART.lines().collect();
        assert_eq!(rendered.lines().collect::<Vec<_>>(), expected);
    }
}
