//! Разбор и форматирование чисел для калькулятора

/// Permissive float parsing: longest numeric prefix, otherwise `None`
///
/// Mirrors what browsers do with `<input type="number">` text: leading spaces are
/// skipped, trailing garbage is ignored (`"12abc"` is 12).
pub fn parse_float(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut mantissa_digits = end - digits_start;
    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        mantissa_digits += frac_end - frac_start;
        if mantissa_digits > 0 {
            end = frac_end;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }

    // экспонента принимается только целиком: "1e" -> 1
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok()
}

/// Unparseable input silently becomes zero
pub fn parse_float_or_zero(text: &str) -> f64 {
    match parse_float(text) {
        Some(v) if v.is_finite() => v,
        _ => 0.0,
    }
}

/// Фиксированное число знаков после запятой, без разделителей тысяч
///
/// Same sign rules as `Number.prototype.toFixed`: `-0.0` prints as `0.00`,
/// a small negative value keeps its sign (`-0.001` is `-0.00`).
pub fn to_fixed(value: f64, decimals: u8) -> String {
    let value = normalize_zero(value);
    match decimals {
        0 => format!("{:.0}", value),
        1 => format!("{:.1}", value),
        2 => format!("{:.2}", value),
        3 => format!("{:.3}", value),
        _ => format!("{:.2}", value),
    }
}

/// Денежное значение: 2 знака после запятой
pub fn format_money(value: f64) -> String {
    to_fixed(value, 2)
}

/// Shortest representation of a quantity: `2`, `2.5`
pub fn format_number(value: f64) -> String {
    format!("{}", normalize_zero(value))
}

fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}
