use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;

lazy_static! {
    // Optional single leading space, kind char, hex address, decimal length.
    // Valgrind indents data accesses one space and leaves instruction
    // fetches flush left, both shapes are accepted for any kind
    static ref TRACE_LINE: Regex = Regex::new(r"^ ?([ILSM]) ([0-9a-fA-F]+),([0-9]+)\s*$").unwrap();
}

/// The kind of a data access
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AccessKind {
    Load,
    Store,
    /// A read followed by a write to the same location, simulated as two
    /// consecutive accesses
    Modify,
}

impl fmt::Display for AccessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = match self {
            AccessKind::Load => 'L',
            AccessKind::Store => 'S',
            AccessKind::Modify => 'M',
        };
        write!(f, "{c}")
    }
}

/// One data access from the trace. The length is carried for verbose output
/// but plays no part in hit/miss accounting
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct AccessRecord {
    pub kind: AccessKind,
    pub address: u64,
    pub length: u64,
}

/// The result of tokenizing one trace line
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TraceLine {
    /// A Load, Store, or Modify to be simulated
    Access(AccessRecord),
    /// An instruction fetch, out of scope for data-cache simulation
    Instruction,
    /// Anything else. Skipped without being counted, the trace format is
    /// deliberately permissive
    Malformed,
}

/// Tokenizes one line of a Valgrind memory trace
///
/// Lines that do not match the format, including addresses or lengths too
/// large for 64 bits, are reported as `Malformed` rather than failing the
/// run
///
/// # Arguments
///
/// * `line`: The trace line, without its trailing newline
///
/// returns: TraceLine
///
/// # Examples
///
/// ```
/// use csimlib::trace::{parse_line, AccessKind, TraceLine};
/// match parse_line(" L 7ff000424,4") {
///     TraceLine::Access(record) => {
///         assert_eq!(record.kind, AccessKind::Load);
///         assert_eq!(record.address, 0x7ff000424);
///     }
///     _ => unreachable!(),
/// }
/// ```
pub fn parse_line(line: &str) -> TraceLine {
    let captures = match TRACE_LINE.captures(line) {
        Some(captures) => captures,
        None => return TraceLine::Malformed,
    };
    let kind = match &captures[1] {
        "I" => return TraceLine::Instruction,
        "L" => AccessKind::Load,
        "S" => AccessKind::Store,
        "M" => AccessKind::Modify,
        _ => unreachable!("the pattern only admits I, L, S, and M"),
    };
    let address = match u64::from_str_radix(&captures[2], 16) {
        Ok(address) => address,
        Err(_) => return TraceLine::Malformed,
    };
    let length = match captures[3].parse::<u64>() {
        Ok(length) => length,
        Err(_) => return TraceLine::Malformed,
    };
    TraceLine::Access(AccessRecord {
        kind,
        address,
        length,
    })
}
