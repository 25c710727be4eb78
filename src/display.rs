use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use serde::Serialize;

use crate::delta::Delta;
use crate::system::ProcessSource;

pub const SEPARATOR: &str = "---";
pub const HEADER: &str = "IOWAIT-COUNT  PID     NAME";
pub const UNKNOWN_NAME: &str = "???";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn from_str_config(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Row {
    pub iowait_delta: u64,
    pub pid: u32,
    pub name: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub rows: Vec<Row>,
}

impl Frame {
    /// Attaches a display name to each ranked delta. Names are looked up only
    /// for the rows that will be shown.
    pub fn resolve<S>(ranked: &[Delta], source: &S) -> Self
    where
        S: ProcessSource + ?Sized,
    {
        let rows = ranked
            .iter()
            .map(|d| Row {
                iowait_delta: d.delta,
                pid: d.pid,
                name: source.name_of(d.pid),
            })
            .collect();
        Frame { rows }
    }
}

pub fn format_row(row: &Row) -> String {
    format!(
        "{:>12}  {:>6}  {}",
        row.iowait_delta,
        row.pid,
        row.name.as_deref().unwrap_or(UNKNOWN_NAME)
    )
}

pub fn render_table<W: Write>(out: &mut W, frame: &Frame) -> io::Result<()> {
    writeln!(out, "{SEPARATOR}")?;
    writeln!(out, "{HEADER}")?;
    for row in &frame.rows {
        writeln!(out, "{}", format_row(row))?;
    }
    Ok(())
}

/// One JSON object per frame, newline terminated.
pub fn render_json<W: Write>(out: &mut W, frame: &Frame) -> io::Result<()> {
    serde_json::to_writer(&mut *out, frame).map_err(io::Error::from)?;
    writeln!(out)
}

#[derive(Clone, Copy, Debug)]
pub struct Display {
    pub format: OutputFormat,
    pub clear_screen: bool,
}

impl Default for Display {
    fn default() -> Self {
        Display {
            format: OutputFormat::Table,
            clear_screen: false,
        }
    }
}

impl Display {
    pub fn show<W: Write>(&self, out: &mut W, frame: &Frame) -> io::Result<()> {
        if self.clear_screen {
            queue!(out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        match self.format {
            OutputFormat::Table => render_table(out, frame)?,
            OutputFormat::Json => render_json(out, frame)?,
        }
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    fn row(iowait_delta: u64, pid: u32, name: Option<&str>) -> Row {
        Row {
            iowait_delta,
            pid,
            name: name.map(str::to_string),
        }
    }

    fn table(frame: &Frame) -> String {
        let mut out = Vec::new();
        render_table(&mut out, frame).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn row_columns_are_right_justified() {
        assert_eq!(
            format_row(&row(3, 10, Some("foo"))),
            "           3      10  foo"
        );
        assert_eq!(
            format_row(&row(1234567890123, 1234567, None)),
            "1234567890123  1234567  ???"
        );
    }

    #[test]
    fn table_frame() {
        let frame = Frame {
            rows: vec![
                row(4821, 1337, Some("/usr/bin/rsync")),
                row(96, 42, Some("jbd2/sda1-8")),
                row(0, 7, None),
            ],
        };
        assert_snapshot!(table(&frame), @r"
        ---
        IOWAIT-COUNT  PID     NAME
                4821    1337  /usr/bin/rsync
                  96      42  jbd2/sda1-8
                   0       7  ???
        ");
    }

    #[test]
    fn empty_frame_has_header_only() {
        assert_eq!(table(&Frame::default()), "---\nIOWAIT-COUNT  PID     NAME\n");
    }

    #[test]
    fn json_frame() {
        let frame = Frame {
            rows: vec![row(3, 10, Some("foo")), row(1, 11, None)],
        };
        let mut out = Vec::new();
        render_json(&mut out, &frame).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{\"rows\":[{\"iowait_delta\":3,\"pid\":10,\"name\":\"foo\"},{\"iowait_delta\":1,\"pid\":11,\"name\":null}]}\n"
        );
    }

    #[test]
    fn clear_screen_prefixes_escape_sequences() {
        let display = Display {
            format: OutputFormat::Table,
            clear_screen: true,
        };
        let mut out = Vec::new();
        display.show(&mut out, &Frame::default()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with('\u{1b}'));
        assert!(text.ends_with("---\nIOWAIT-COUNT  PID     NAME\n"));
    }

    #[test]
    fn output_format_from_config() {
        assert_eq!(OutputFormat::from_str_config("JSON"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str_config("table"), Some(OutputFormat::Table));
        assert_eq!(OutputFormat::from_str_config("xml"), None);
    }
}
