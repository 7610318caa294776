//! Vertex lines: whitespace separated rationals in canonical edge order.
//!
//! Tokens are parsed exactly (integer, decimal or `p/q`) into a reduced
//! fraction and converted to `f64` once, so `1/3` and `0.3333333333333333`
//! land on the same float as the shortest decimal printed by `vertex_to_line`.

use super::graph::nodes_and_edges;
use super::types::Vertex;
use crate::error::GapError;

/// Reduced fraction `num/den` with `den > 0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ratio {
    pub num: i128,
    pub den: i128,
}

// Integers up to 2^53 convert to f64 exactly, so one division rounds correctly.
const F64_EXACT: i128 = 1 << 53;
const EXPANSION_DIGITS: usize = 40;

impl Ratio {
    fn reduced(num: i128, den: i128) -> Option<Self> {
        if den == 0 {
            return None;
        }
        let g = gcd(num.unsigned_abs(), den.unsigned_abs()).max(1) as i128;
        let (mut num, mut den) = (num / g, den / g);
        if den < 0 {
            num = num.checked_neg()?;
            den = den.checked_neg()?;
        }
        Some(Self { num, den })
    }

    /// Exact parse of `p/q`, integers and decimals with optional exponent.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if let Some((p, q)) = token.split_once('/') {
            let num: i128 = parse_signed_int(p.trim())?;
            let den: i128 = q.trim().parse().ok()?;
            return Self::reduced(num, den);
        }
        parse_decimal(token)
    }

    pub fn to_f64(self) -> f64 {
        if self.num.unsigned_abs() <= F64_EXACT as u128 && self.den <= F64_EXACT {
            return self.num as f64 / self.den as f64;
        }
        // Long division to a decimal string, then a correctly rounded float parse.
        let neg = self.num < 0;
        let num = self.num.unsigned_abs();
        let den = self.den.unsigned_abs();
        let mut s = String::with_capacity(EXPANSION_DIGITS + 24);
        if neg {
            s.push('-');
        }
        s.push_str(&(num / den).to_string());
        s.push('.');
        let mut rem = num % den;
        for _ in 0..EXPANSION_DIGITS {
            let Some(scaled) = rem.checked_mul(10) else {
                break;
            };
            rem = scaled;
            s.push(char::from(b'0' + (rem / den) as u8));
            rem %= den;
        }
        s.parse().unwrap_or(f64::NAN)
    }
}

fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

fn parse_signed_int(s: &str) -> Option<i128> {
    let digits = s.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(s);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

fn pow10(k: u32) -> Option<i128> {
    10i128.checked_pow(k)
}

fn parse_decimal(token: &str) -> Option<Ratio> {
    let (neg, body) = match token.as_bytes().first()? {
        b'-' => (true, &token[1..]),
        b'+' => (false, &token[1..]),
        _ => (false, token),
    };
    let (mantissa, exp) = match body.find(|c: char| c == 'e' || c == 'E') {
        Some(i) => (&body[..i], parse_signed_int(&body[i + 1..])?),
        None => (body, 0),
    };
    let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
    if int_part.is_empty() && frac_part.is_empty() {
        return None;
    }
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if !all_digits(int_part) || !all_digits(frac_part) {
        return None;
    }
    let mut num: i128 = 0;
    for b in int_part.bytes().chain(frac_part.bytes()) {
        num = num.checked_mul(10)?.checked_add((b - b'0') as i128)?;
    }
    let scale = exp.checked_sub(frac_part.len() as i128)?;
    let (num, den) = if scale >= 0 {
        (num.checked_mul(pow10(u32::try_from(scale).ok()?)?)?, 1)
    } else {
        (num, pow10(u32::try_from(-scale).ok()?)?)
    };
    Ratio::reduced(if neg { -num } else { num }, den)
}

/// Parse one rational token into a float (exact parse, then a single conversion).
pub fn parse_rational(token: &str) -> Result<f64, GapError> {
    Ratio::parse(token)
        .map(Ratio::to_f64)
        .ok_or_else(|| GapError::BadNumber {
            token: token.to_string(),
        })
}

/// Read a vertex on `n` nodes from one line of `n(n-1)/2` values.
pub fn line_to_vertex(n: usize, line: &str) -> Result<Vertex, GapError> {
    let (_, edges) = nodes_and_edges(n);
    let values = line
        .split_whitespace()
        .map(parse_rational)
        .collect::<Result<Vec<_>, _>>()?;
    if values.len() != edges.len() {
        return Err(GapError::ValueCount {
            n,
            expected: edges.len(),
            found: values.len(),
        });
    }
    Ok(edges.into_iter().zip(values).collect())
}

/// Write the weights of `x` on `n` nodes in canonical edge order (absent edges as `0`).
pub fn vertex_to_line(n: usize, x: &Vertex) -> String {
    let (_, edges) = nodes_and_edges(n);
    edges
        .iter()
        .map(|&e| format_weight(x.weight(e)))
        .collect::<Vec<_>>()
        .join(" ")
}

fn format_weight(w: f64) -> String {
    if w.fract() == 0.0 && w.abs() < 1e15 {
        format!("{}", w as i64)
    } else {
        // Display for f64 prints the shortest round-tripping decimal.
        format!("{w}")
    }
}
