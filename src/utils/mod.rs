//! The utilities module provides general capabilities that span the
//! protocol, backend, and page modules.  The utilities are centered around
//! debugging/traceability and number presentation.

pub mod errors;
pub mod logging;

/// Formats a number with a fixed count of fractional digits, matching
/// JavaScript's `Number.prototype.toFixed`.  Rust's formatter rounds exact
/// ties to even, while `toFixed` picks the larger magnitude, so exact ties
/// are resolved here before formatting.  Negative zero renders unsigned, and
/// magnitudes from 1e21 up switch to exponent notation (`1e+21`), as
/// `toFixed` does.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if value.is_nan() {
        return String::from("NaN");
    }
    if value.is_infinite() {
        return String::from(if value > 0.0 { "Infinity" } else { "-Infinity" });
    }
    if value.abs() >= 1e21 {
        return format!("{:e}", value).replacen('e', "e+", 1);
    }
    if value == 0.0 {
        return format!("{:.*}", digits, 0.0);
    }
    let scale = 10f64.powi(digits as i32);
    let scaled = value * scale;
    // A zero residual means `scaled` is the exact product, so a half
    // fraction is a true tie rather than a binary approximation of one.
    let residual = value.mul_add(scale, -scaled);
    if residual == 0.0 && scaled.fract().abs() == 0.5 {
        let away_from_zero = scaled.trunc() + scaled.signum();
        return format!("{:.*}", digits, away_from_zero / scale);
    }
    format!("{:.*}", digits, value)
}

/// Reads the leading decimal number of `text`, after leading whitespace,
/// the way JavaScript's `parseFloat` does: `"5.678 units"` is `5.678`, and
/// text with no leading number is `None`.
pub fn parse_float(text: &str) -> Option<f64> {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |mut at: usize| {
        while bytes.get(at).map_or(false, u8::is_ascii_digit) {
            at += 1;
        }
        at
    };

    let mut end = 0;
    if let Some(b'+') | Some(b'-') = bytes.get(end) {
        end += 1;
    }
    let integer_end = digits_from(end);
    let mut mantissa_digits = integer_end - end;
    end = integer_end;
    if bytes.get(end) == Some(&b'.') {
        let fraction_end = digits_from(end + 1);
        let fraction_digits = fraction_end - end - 1;
        if mantissa_digits + fraction_digits > 0 {
            mantissa_digits += fraction_digits;
            end = fraction_end;
        }
    }
    if mantissa_digits == 0 {
        return None;
    }
    if let Some(b'e') | Some(b'E') = bytes.get(end) {
        let mut exponent = end + 1;
        if let Some(b'+') | Some(b'-') = bytes.get(exponent) {
            exponent += 1;
        }
        let exponent_end = digits_from(exponent);
        if exponent_end > exponent {
            end = exponent_end;
        }
    }
    text[..end].parse::<f64>().ok()
}

/// When the `console_error_panic_hook` feature is enabled, we can call the
/// `set_panic_hook` function at least once during initialization, and then
/// we will get better error messages if our code ever panics.
///
/// For more details see
/// <https://github.com/rustwasm/console_error_panic_hook#readme>
pub fn set_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
