// File: crates/xyplot-core/src/format.rs
// Summary: Tick label number formatting from a compact format spec like ".2f" or "g".
// Notes:
// - Grammar: [sign][0][width][.precision][type], sign in "+- ", type in "fFeEgG%d".
// - The empty spec prints the shortest round-trip form, integral values with one
//   decimal ("20.0"), switching to exponent notation below 1e-4 and from 1e16.

use crate::error::PlotError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Kind {
    Default,
    Fixed,
    Exp,
    General,
    Percent,
    Integer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Sign {
    Negative,
    Always,
    Space,
}

/// Parsed numeric format specifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NumberFormat {
    kind: Kind,
    upper: bool,
    sign: Sign,
    zero_pad: bool,
    width: usize,
    precision: Option<usize>,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            kind: Kind::Default,
            upper: false,
            sign: Sign::Negative,
            zero_pad: false,
            width: 0,
            precision: None,
        }
    }
}

impl NumberFormat {
    pub fn parse(spec: &str) -> Result<Self, PlotError> {
        let fail = |reason| PlotError::InvalidFormat { spec: spec.to_string(), reason };
        let mut out = NumberFormat::default();
        let mut chars = spec.chars().peekable();

        match chars.peek() {
            Some('+') => out.sign = Sign::Always,
            Some('-') => out.sign = Sign::Negative,
            Some(' ') => out.sign = Sign::Space,
            _ => {}
        }
        if matches!(chars.peek(), Some('+' | '-' | ' ')) {
            chars.next();
        }
        if chars.peek() == Some(&'0') {
            out.zero_pad = true;
            chars.next();
        }
        let mut width = String::new();
        while let Some(c) = chars.peek().copied().filter(char::is_ascii_digit) {
            width.push(c);
            chars.next();
        }
        if !width.is_empty() {
            out.width = width.parse().map_err(|_| fail("width too large"))?;
        }
        if chars.peek() == Some(&'.') {
            chars.next();
            let mut prec = String::new();
            while let Some(c) = chars.peek().copied().filter(char::is_ascii_digit) {
                prec.push(c);
                chars.next();
            }
            if prec.is_empty() {
                return Err(fail("missing precision after '.'"));
            }
            out.precision = Some(prec.parse().map_err(|_| fail("precision too large"))?);
        }
        if let Some(c) = chars.next() {
            out.upper = c.is_ascii_uppercase();
            out.kind = match c {
                'f' | 'F' => Kind::Fixed,
                'e' | 'E' => Kind::Exp,
                'g' | 'G' => Kind::General,
                '%' => Kind::Percent,
                'd' => Kind::Integer,
                _ => return Err(fail("unknown presentation type")),
            };
        }
        if chars.next().is_some() {
            return Err(fail("trailing characters"));
        }
        if out.kind == Kind::Integer && out.precision.is_some() {
            return Err(fail("precision not allowed with 'd'"));
        }
        Ok(out)
    }

    pub fn format(&self, value: f64) -> String {
        let body = if !value.is_finite() {
            let s = if value.is_nan() { "nan" } else { "inf" };
            if self.upper { s.to_ascii_uppercase() } else { s.to_string() }
        } else {
            let v = value.abs();
            match self.kind {
                Kind::Default => match self.precision {
                    Some(p) => general(v, p, self.upper),
                    None => shortest(v),
                },
                Kind::Fixed => format!("{:.*}", self.precision.unwrap_or(6), v),
                Kind::Exp => exponent(v, self.precision.unwrap_or(6), self.upper),
                Kind::General => general(v, self.precision.unwrap_or(6), self.upper),
                Kind::Percent => format!("{:.*}%", self.precision.unwrap_or(6), v * 100.0),
                Kind::Integer => format!("{:.0}", v),
            }
        };
        let negative = value.is_sign_negative() && !value.is_nan() && body.bytes().any(|b| b.is_ascii_digit() && b != b'0');
        let sign = match (negative, self.sign) {
            (true, _) => "-",
            (false, Sign::Always) => "+",
            (false, Sign::Space) => " ",
            (false, Sign::Negative) => "",
        };
        let len = sign.len() + body.len();
        if len >= self.width {
            format!("{sign}{body}")
        } else if self.zero_pad {
            format!("{sign}{}{body}", "0".repeat(self.width - len))
        } else {
            format!("{}{sign}{body}", " ".repeat(self.width - len))
        }
    }
}

/// Split Rust's `{:e}` output into mantissa and exponent.
fn split_exp(s: &str) -> (&str, i32) {
    match s.split_once('e') {
        Some((m, e)) => (m, e.parse().unwrap_or(0)),
        None => (s, 0),
    }
}

fn exp_suffix(exp: i32, upper: bool) -> String {
    let e = if upper { 'E' } else { 'e' };
    let sign = if exp < 0 { '-' } else { '+' };
    format!("{e}{sign}{:02}", exp.abs())
}

fn exponent(v: f64, precision: usize, upper: bool) -> String {
    let s = format!("{:.*e}", precision, v);
    let (mantissa, exp) = split_exp(&s);
    format!("{mantissa}{}", exp_suffix(exp, upper))
}

fn strip_zeros(s: &str) -> &str {
    if s.contains('.') { s.trim_end_matches('0').trim_end_matches('.') } else { s }
}

fn general(v: f64, precision: usize, upper: bool) -> String {
    let p = precision.max(1);
    let s = format!("{:.*e}", p - 1, v);
    let (mantissa, exp) = split_exp(&s);
    if v == 0.0 || (-4..p as i32).contains(&exp) {
        let decimals = (p as i32 - 1 - exp).max(0) as usize;
        strip_zeros(&format!("{:.*}", decimals, v)).to_string()
    } else {
        format!("{}{}", strip_zeros(mantissa), exp_suffix(exp, upper))
    }
}

fn shortest(v: f64) -> String {
    if v != 0.0 && !(1e-4..1e16).contains(&v) {
        let s = format!("{:e}", v);
        let (mantissa, exp) = split_exp(&s);
        format!("{mantissa}{}", exp_suffix(exp, false))
    } else if v.fract() == 0.0 {
        format!("{:.1}", v)
    } else {
        format!("{}", v)
    }
}
