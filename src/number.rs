//! Float formatting compatible with Python's `repr(float)`.
//!
//! ryu gives the shortest digits that round-trip; this module only moves
//! the decimal point. Positional notation is used for decimal exponents in
//! `[-4, 16)`, scientific notation (`1.5e-07`, `1e+16`) otherwise.
use std::fmt::Write;

/// Format `f` the way Python prints it.
pub fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if f == 0.0 {
        return if f.is_sign_negative() { "-0.0" } else { "0.0" }.to_string();
    }

    let mut buf = ryu::Buffer::new();
    let s = buf.format_finite(f.abs());
    let (mantissa, exp) = match s.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (s, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    // value = 0.<digits> * 10^point
    let all: String = [int_part, frac_part].concat();
    let trimmed = all.trim_start_matches('0');
    let leading = (all.len() - trimmed.len()) as i32;
    let digits = trimmed.trim_end_matches('0');
    let point = int_part.len() as i32 + exp - leading;

    let mut out = String::with_capacity(digits.len() + 8);
    if f < 0.0 {
        out.push('-');
    }
    let sci_exp = point - 1;
    if !(-4..16).contains(&sci_exp) {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        let sign = if sci_exp < 0 { '-' } else { '+' };
        let _ = write!(out, "e{sign}{:02}", sci_exp.abs());
    } else if point <= 0 {
        out.push_str("0.");
        out.extend(std::iter::repeat_n('0', (-point) as usize));
        out.push_str(digits);
    } else if point as usize >= digits.len() {
        out.push_str(digits);
        out.extend(std::iter::repeat_n('0', point as usize - digits.len()));
        out.push_str(".0");
    } else {
        let (head, tail) = digits.split_at(point as usize);
        out.push_str(head);
        out.push('.');
        out.push_str(tail);
    }
    out
}
