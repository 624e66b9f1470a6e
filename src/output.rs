//! Triple serialization.
//!
//! Writes records directly to a `Write` sink, one `subject predicate
//! object .` statement per line. Uses `ryu` (via `number`) for the
//! probability literal.
use std::fmt;
use std::io::Write;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::activity::{ActivityGenerator, ActivityRecord};
use crate::error::GenError;
use crate::number::format_float;

/// Terminator written after each triple.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LineEnding {
    /// `\r\n`, the format downstream loaders were seeded with.
    #[default]
    Crlf,
    /// `\n`.
    Lf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::Crlf => "\r\n",
            LineEnding::Lf => "\n",
        }
    }
}

/// `prefix:local`, written bare as a triple object. The local part may not
/// end in `.`, which would read as the statement terminator.
static PREFIXED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[A-Za-z][A-Za-z0-9_.-]*)?:[A-Za-z0-9_](?:[A-Za-z0-9_.:-]*[A-Za-z0-9_:-])?$")
        .unwrap()
});

/// Reject `value` unless it can be written unquoted as a prefixed name.
pub fn check_prefixed_name(field: &'static str, value: &str) -> Result<(), GenError> {
    if PREFIXED_NAME.is_match(value) {
        Ok(())
    } else {
        Err(GenError::InvalidTerm {
            field,
            value: value.to_string(),
        })
    }
}

/// Escape `"` and `\` (and raw line breaks) for a quoted literal.
fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

impl ActivityRecord {
    /// Predicate/object pairs in output order.
    pub fn triples(&self) -> [(&'static str, String); 8] {
        [
            ("rdf:type", "suite:Activity".to_string()),
            (
                "suite:source",
                format!("\"{}\"^^xsd:anyURI", escape_literal(&self.source)),
            ),
            (
                "suite:activityID",
                format!("\"{}\"^^xsd:integer", self.activity_id),
            ),
            ("suite:activityType", self.activity_type.clone()),
            (
                "suite:probability",
                format!("\"{}\"^^xsd:float", format_float(self.probability)),
            ),
            (
                "suite:from",
                format!("\"{}\"^^xsd:dateTime", escape_literal(&self.from)),
            ),
            (
                "suite:to",
                format!("\"{}\"^^xsd:dateTime", escape_literal(&self.to)),
            ),
            ("suite:state", self.state.clone()),
        ]
    }
}

/// A record rendered with a chosen line ending.
pub struct Block<'a> {
    record: &'a ActivityRecord,
    line_ending: LineEnding,
}

impl fmt::Display for Block<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let eol = self.line_ending.as_str();
        for (predicate, object) in self.record.triples() {
            write!(f, "{} {predicate} {object} .{eol}", self.record.id)?;
        }
        Ok(())
    }
}

impl ActivityRecord {
    /// Display adapter terminating each triple with `line_ending`.
    pub fn block(&self, line_ending: LineEnding) -> Block<'_> {
        Block {
            record: self,
            line_ending,
        }
    }
}

impl fmt::Display for ActivityRecord {
    /// CRLF-terminated triple block.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.block(LineEnding::Crlf).fmt(f)
    }
}

/// Write one record's triples, each followed by `line_ending`.
pub fn write_activity<W: Write>(
    w: &mut W,
    record: &ActivityRecord,
    line_ending: LineEnding,
) -> std::io::Result<()> {
    write!(w, "{}", record.block(line_ending))
}

/// Write one record per day offset in `1..n`, each followed by a blank line.
///
/// Returns the number of records written; `n <= 1` writes nothing.
pub fn write_batch<W: Write>(
    w: &mut W,
    generator: &mut ActivityGenerator,
    n: i64,
    line_ending: LineEnding,
) -> Result<u64, GenError> {
    let mut written = 0;
    for day_offset in 1..n {
        let record = generator.generate_activity(day_offset)?;
        debug!(day_offset, id = %record.id, "generated activity");
        write_activity(w, &record, line_ending)?;
        // End of the print, then the blank separator line.
        w.write_all(b"\n\n")?;
        written += 1;
    }
    Ok(written)
}
