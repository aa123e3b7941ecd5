//! Snapshot output for the leapfrog engine
//!
//! A snapshot is one line holding `x` and `y` of every body in sequence order.
//! Every value is followed by the delimiter (a tab) and the line ends with `\n`.

use std::io::{self, Write};

use crate::simulation::states::Body;

pub const DELIMITER: char = '\t';

/// Writes snapshot lines to any `Write` sink and counts them
pub struct Reporter<W: Write> {
    out: W,
    precision: Option<usize>,
    lines: u64,
}

impl<W: Write> Reporter<W> {
    /// `precision: Some(p)` renders `p` significant digits like `%g`,
    /// `None` renders the shortest representation that round-trips
    pub fn new(out: W, precision: Option<usize>) -> Self {
        Self {
            out,
            precision,
            lines: 0,
        }
    }

    /// Write one snapshot of all bodies' positions
    pub fn emit(&mut self, bodies: &[Body]) -> io::Result<()> {
        let mut line = String::with_capacity(bodies.len() * 24 + 1);
        for b in bodies {
            for value in [b.x.x, b.x.y] {
                line.push_str(&self.format(value));
                line.push(DELIMITER);
            }
        }
        line.push('\n');

        self.out.write_all(line.as_bytes())?;
        self.lines += 1;
        Ok(())
    }

    /// Number of snapshot lines written so far
    pub fn lines(&self) -> u64 {
        self.lines
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn format(&self, value: f64) -> String {
        match self.precision {
            Some(p) => format_general(value, p),
            None => value.to_string(),
        }
    }
}

/// Render `value` like C's `%g` with `precision` significant digits
///
/// Fixed notation when the decimal exponent `X` satisfies `-4 <= X < precision`,
/// scientific otherwise; trailing zeros and a dangling decimal point are removed.
pub fn format_general(value: f64, precision: usize) -> String {
    let p = precision.max(1);

    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // exponent after rounding to p significant digits
    let sci = format!("{:.*e}", p - 1, value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return sci,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= p as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", strip_zeros(mantissa), sign, exponent.abs())
    } else {
        let decimals = (p as i32 - 1 - exponent).max(0) as usize;
        strip_zeros(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn strip_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
