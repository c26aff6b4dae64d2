//! Number handling that matches what a browser page shows the user:
//! `parseFloat` on the way in and `String(number)` on the way out.
//! In the browser both go straight to the JS builtins; elsewhere (host
//! tests) a port of the same rules is used.

/// Parses the longest numeric prefix of `text`, ignoring leading whitespace
/// and any trailing junk. Text with no numeric prefix yields NaN.
#[cfg(target_arch = "wasm32")]
pub fn parse_float(text: &str) -> f64 {
    js_sys::parse_float(text)
}

/// Formats `v` the way a page prints a number.
#[cfg(target_arch = "wasm32")]
pub fn format_number(v: f64) -> String {
    js_sys::Number::from(v)
        .to_string(10)
        .map(String::from)
        .unwrap_or_else(|_| v.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn parse_float(text: &str) -> f64 {
    let trimmed = text.trim_start_matches(is_str_whitespace);
    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (-1.0, &trimmed[1..]),
        Some(b'+') => (1.0, &trimmed[1..]),
        _ => (1.0, trimmed),
    };
    if rest.starts_with("Infinity") {
        return sign * f64::INFINITY;
    }
    let len = numeric_prefix_len(rest);
    if len == 0 {
        return f64::NAN;
    }
    rest[..len]
        .parse::<f64>()
        .map(|v| sign * v)
        .unwrap_or(f64::NAN)
}

// StrWhiteSpaceChar: Zs, tab/vt/ff, BOM and line terminators. Not U+0085.
#[cfg(not(target_arch = "wasm32"))]
fn is_str_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

#[cfg(not(target_arch = "wasm32"))]
// digits [. digits] [(e|E) [sign] digits], at least one mantissa digit
fn numeric_prefix_len(s: &str) -> usize {
    let b = s.as_bytes();
    let digits_from = |mut i: usize| {
        while i < b.len() && b[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = digits_from(0);
    let int_digits = end;
    let mut frac_digits = 0;
    if end < b.len() && b[end] == b'.' {
        let after = digits_from(end + 1);
        frac_digits = after - end - 1;
        if int_digits > 0 || frac_digits > 0 {
            end = after;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return 0;
    }

    if end < b.len() && (b[end] == b'e' || b[end] == b'E') {
        let mut exp_start = end + 1;
        if exp_start < b.len() && (b[exp_start] == b'+' || b[exp_start] == b'-') {
            exp_start += 1;
        }
        let exp_end = digits_from(exp_start);
        if exp_end > exp_start {
            end = exp_end;
        }
    }
    end
}

/// Formats `v` the way a page prints a number: shortest round-trip digits,
/// no trailing `.0`, exponent notation outside `1e-7 < |v| < 1e21`.
#[cfg(not(target_arch = "wasm32"))]
pub fn format_number(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if v == 0.0 {
        // covers -0 as well
        return "0".to_string();
    }

    let Some((digits, exp)) = shortest_digits(v.abs()) else {
        return v.to_string();
    };
    let k = digits.len() as i32;
    // position of the decimal point relative to the first digit
    let n = exp + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{int_part}.{frac_part}")
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let e = n - 1;
        let exp_sign = if e >= 0 { '+' } else { '-' };
        let (lead, tail) = digits.split_at(1);
        if tail.is_empty() {
            format!("{lead}e{exp_sign}{}", e.abs())
        } else {
            format!("{lead}.{tail}e{exp_sign}{}", e.abs())
        }
    };

    if v < 0.0 { format!("-{body}") } else { body }
}

/// Shortest round-trip digits of a positive finite `abs` and the decimal
/// exponent of the first digit. Of two equally close candidates the one
/// with the even last digit wins.
#[cfg(not(target_arch = "wasm32"))]
fn shortest_digits(abs: f64) -> Option<(String, i32)> {
    let (digits, exp) = split_sci(&format!("{abs:e}"))?;
    if let Some(even) = even_tie_candidate(abs, digits.len()) {
        return Some(even);
    }
    Some((digits, exp))
}

#[cfg(not(target_arch = "wasm32"))]
fn split_sci(sci: &str) -> Option<(String, i32)> {
    let (mantissa, exp) = sci.split_once('e')?;
    let digits = mantissa.chars().filter(|c| *c != '.').collect();
    Some((digits, exp.parse().ok()?))
}

// A tie exists when the exact value is the k shortest digits followed by a 5.
#[cfg(not(target_arch = "wasm32"))]
fn even_tie_candidate(abs: f64, k: usize) -> Option<(String, i32)> {
    // enough places to print any f64 exactly
    let (exact, exp) = split_sci(&format!("{abs:.780e}"))?;
    let significant = exact.trim_end_matches('0');
    if significant.len() != k + 1 || !significant.ends_with('5') {
        return None;
    }
    let floor = &significant[..k];
    let last = floor.as_bytes()[k - 1] - b'0';
    let (digits, exp) = if last % 2 == 0 {
        (floor.to_string(), exp)
    } else {
        increment_digits(floor, exp)
    };
    let candidate: f64 = format!("0.{digits}e{}", exp + 1).parse().ok()?;
    (candidate == abs).then_some((digits, exp))
}

#[cfg(not(target_arch = "wasm32"))]
fn increment_digits(digits: &str, exp: i32) -> (String, i32) {
    let mut bytes = digits.as_bytes().to_vec();
    let mut i = bytes.len();
    loop {
        if i == 0 {
            bytes.insert(0, b'1');
            let len = bytes.len() - 1;
            bytes.truncate(len);
            return (trim_zeros(bytes), exp + 1);
        }
        i -= 1;
        if bytes[i] == b'9' {
            bytes[i] = b'0';
        } else {
            bytes[i] += 1;
            return (trim_zeros(bytes), exp);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn trim_zeros(mut bytes: Vec<u8>) -> String {
    while bytes.len() > 1 && bytes.last() == Some(&b'0') {
        bytes.pop();
    }
    String::from_utf8(bytes).unwrap_or_default()
}
