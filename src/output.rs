//! Output formatting for search results

use serde_json::Value;
use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Print matches one per line, highlighting words that start with a query token.
///
/// `normalize` folds a word the same way the index does.
pub fn print_matches(
    matches: &[&Value],
    tokens: &[String],
    normalize: &dyn Fn(&str) -> Vec<String>,
    color: bool,
) -> io::Result<()> {
    let choice = if color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(choice);

    for (i, m) in matches.iter().enumerate() {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(stdout, "{}", i + 1)?;
        stdout.reset()?;
        write!(stdout, ":")?;
        print_highlighted(&mut stdout, &m.to_string(), tokens, normalize)?;
        writeln!(stdout)?;
    }

    Ok(())
}

/// Print matches as JSON lines (for --json)
pub fn print_json_lines(matches: &[&Value]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for m in matches {
        writeln!(out, "{}", m)?;
    }
    Ok(())
}

/// Print tokens, one per line
pub fn print_tokens(tokens: &[String]) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);
    for token in tokens {
        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)))?;
        writeln!(stdout, "{}", token)?;
        stdout.reset()?;
    }
    Ok(())
}

/// Write `line`, coloring word runs that match any token
fn print_highlighted(
    stdout: &mut StandardStream,
    line: &str,
    tokens: &[String],
    normalize: &dyn Fn(&str) -> Vec<String>,
) -> io::Result<()> {
    for (segment, is_word) in split_words(line) {
        if is_word && is_hit(segment, tokens, normalize) {
            stdout.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            write!(stdout, "{}", segment)?;
            stdout.reset()?;
        } else {
            write!(stdout, "{}", segment)?;
        }
    }
    Ok(())
}

/// Whether any folded form of `segment` starts with a query token
fn is_hit(segment: &str, tokens: &[String], normalize: &dyn Fn(&str) -> Vec<String>) -> bool {
    normalize(segment)
        .iter()
        .any(|word| tokens.iter().any(|t| word.starts_with(t.as_str())))
}

/// Split into alternating word / non-word segments
fn split_words(line: &str) -> Vec<(&str, bool)> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut in_word = None;

    for (idx, ch) in line.char_indices() {
        let is_word = ch.is_alphanumeric();
        match in_word {
            Some(prev) if prev != is_word => {
                segments.push((&line[start..idx], prev));
                start = idx;
            }
            _ => {}
        }
        in_word = Some(is_word);
    }
    if let Some(prev) = in_word {
        segments.push((&line[start..], prev));
    }

    segments
}
