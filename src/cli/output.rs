//! Terminal output formatting
//!
//! Every function takes its destination stream explicitly so the command
//! processor can be driven against in-memory buffers. Colors respect
//! NO_COLOR, CLICOLOR, CLICOLOR_FORCE automatically.

use std::io::{self, IsTerminal, Write};

use colored::Colorize;
use serde::Serialize;
use serde_json::ser::Formatter;

/// Print error ("error:" prefix, red bold when stderr is a terminal)
pub fn error(w: &mut dyn Write, msg: &(impl std::fmt::Display + ?Sized)) -> io::Result<()> {
    writeln!(w, "{}: {}", error_label(io::stderr().is_terminal()), msg)
}

fn error_label(colorize: bool) -> String {
    if colorize {
        "error".red().bold().to_string()
    } else {
        "error".to_string()
    }
}

/// Print a `--verbose` trace line (`[debug]` prefix, no color)
pub fn debug(w: &mut dyn Write, msg: &(impl std::fmt::Display + ?Sized)) -> io::Result<()> {
    writeln!(w, "[debug] {}", msg)
}

/// Print plain output (no color)
pub fn info(w: &mut dyn Write, msg: &(impl std::fmt::Display + ?Sized)) -> io::Result<()> {
    writeln!(w, "{}", msg)
}

/// Print `value` as a single JSON line.
///
/// Uses `", "` and `": "` separators and escapes non-ASCII characters, so
/// `{"out": "/tmp/stub.md", "stub": true}` renders exactly like that.
pub fn json<T: Serialize + ?Sized>(w: &mut dyn Write, value: &T) -> io::Result<()> {
    let mut buf = Vec::new();
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, SpacedAsciiFormatter);
    value.serialize(&mut ser)?;
    buf.push(b'\n');
    w.write_all(&buf)
}

/// Single-line JSON formatter with spaced separators and ASCII-only strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpacedAsciiFormatter;

impl Formatter for SpacedAsciiFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if fragment.is_ascii() {
            return writer.write_all(fragment.as_bytes());
        }
        let mut units = [0u16; 2];
        for c in fragment.chars() {
            if c.is_ascii() {
                writer.write_all(&[c as u8])?;
            } else {
                for unit in c.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use serde_json::json;

    use super::*;

    fn render_json(value: &serde_json::Value) -> String {
        let mut buf = Vec::new();
        json(&mut buf, value).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn given_object_when_json_then_spaced_single_line() {
        let out = render_json(&json!({"out": "/tmp/stub.md", "stub": true}));
        assert_eq!(out, "{\"out\": \"/tmp/stub.md\", \"stub\": true}\n");
    }

    #[test]
    fn given_array_when_json_then_spaced_elements() {
        assert_eq!(render_json(&json!([1, 2, 3])), "[1, 2, 3]\n");
    }

    #[rstest]
    #[case("café", "\"caf\\u00e9\"\n")]
    #[case("😀", "\"\\ud83d\\ude00\"\n")]
    #[case("a\"b", "\"a\\\"b\"\n")]
    fn given_string_when_json_then_escapes_like_ascii_json(
        #[case] input: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(render_json(&json!(input)), expected);
    }

    #[test]
    fn given_non_ascii_when_json_then_round_trips() {
        let rendered = render_json(&json!({"out": "docs/ñ/prd.md"}));
        let parsed: serde_json::Value = serde_json::from_str(rendered.trim()).unwrap();
        assert_eq!(parsed["out"], "docs/ñ/prd.md");
    }

    #[test]
    fn given_message_when_debug_then_prefixed() {
        let mut buf = Vec::new();
        debug(&mut buf, "writing stub to a.md").unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "[debug] writing stub to a.md\n");
    }

    #[test]
    fn given_no_terminal_when_error_label_then_plain_text() {
        assert_eq!(error_label(false), "error");
    }

    #[test]
    fn given_message_when_error_then_contains_prefix_and_message() {
        let mut buf = Vec::new();
        error(&mut buf, "write file: a.md: denied").unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("error"));
        assert!(text.trim_end().ends_with("write file: a.md: denied"));
    }
}
