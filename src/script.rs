use color_eyre::{
    eyre::{eyre, WrapErr},
    Report,
};
use std::str::FromStr;
use tracing::warn;

use crate::rope::CutPaste;

/// A document and the cut-paste operations to run on it.
///
/// The text format is the document on the first line, the number of
/// operations on the second, then one `i j k` triple per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Script {
    pub text: String,
    pub ops: Vec<CutPaste>,
}

impl FromStr for Script {
    type Err = Report;

    fn from_str(input: &str) -> Result<Self, Report> {
        parse(input)
    }
}

pub fn parse(input: &str) -> Result<Script, Report> {
    let mut lines = input.lines().enumerate().map(|(i, line)| (i + 1, line));

    let (_, text) = lines.next().ok_or_else(|| eyre!("Missing document text on line 1"))?;
    let text = text.trim().to_string();

    let (number, count) = lines.next().ok_or_else(|| eyre!("Missing operation count on line 2"))?;
    let count: usize =
        count.trim().parse().wrap_err_with(|| format!("Invalid operation count on line {}", number))?;

    // count comes from the input, so it can't size the allocation
    let mut ops = Vec::new();
    let mut last = number;
    for _ in 0..count {
        let (number, line) = lines.next().ok_or_else(|| {
            eyre!("Input ended at line {}: expected {} operations, found {}", last, count, ops.len())
        })?;
        last = number;
        ops.push(parse_op(line).wrap_err_with(|| format!("Invalid operation on line {}", number))?);
    }

    if let Some((number, line)) = lines.find(|(_, line)| !line.trim().is_empty()) {
        warn!(line = number, content = line, "ignoring input after the last operation");
    }

    Ok(Script { text, ops })
}

fn parse_op(line: &str) -> Result<CutPaste, Report> {
    let fields = line.split_whitespace().collect::<Vec<_>>();
    let [start, end, after] = fields.as_slice() else {
        return Err(eyre!("Expected three integers, found {} fields", fields.len()));
    };

    let field = |name: &str, value: &str| -> Result<usize, Report> {
        value.parse().wrap_err_with(|| format!("Invalid {} {:?}", name, value))
    };

    Ok(CutPaste::new(field("start", *start)?, field("end", *end)?, field("offset", *after)?))
}
