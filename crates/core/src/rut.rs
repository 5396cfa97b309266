//! Chilean RUT (national identity number) checksum validation and display
//! formatting.
//!
//! A RUT is a 7-8 digit body plus one check character derived from the body
//! by a weighted modulus-11 sum. The check character catches transcription
//! errors; formatting (dots every three digits, dash before the check char)
//! is purely cosmetic.

/// Strip thousands separators and the dash, uppercase a trailing `k`.
///
/// Does not validate; the result may still be structurally invalid.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '.' && *c != '-')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Expected check character for a RUT body.
///
/// Weights cycle 2,3,4,5,6,7 starting from the rightmost digit. Standard
/// modulus-11 mapping: remainder 0 -> `'0'`, remainder 1 -> `'K'`,
/// otherwise the digit `11 - remainder`.
fn check_char(body: &str) -> Option<char> {
    let mut sum: u32 = 0;
    let mut weight = 2;
    for c in body.chars().rev() {
        sum += c.to_digit(10)? * weight;
        weight = if weight == 7 { 2 } else { weight + 1 };
    }
    Some(match sum % 11 {
        0 => '0',
        1 => 'K',
        r => char::from_digit(11 - r, 10)?,
    })
}

/// Whether `raw` is a structurally well-formed, checksum-valid RUT.
///
/// Accepts formatted (`12.345.678-5`) and bare (`123456785`) input, and a
/// lowercase check letter. The body must be 7-8 digits.
pub fn is_valid(raw: &str) -> bool {
    let clean = normalize(raw);
    let Some((body, check)) = split(&clean) else {
        return false;
    };
    if body.len() < 7 || body.len() > 8 || !body.chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    if !check.is_ascii_digit() && check != 'K' {
        return false;
    }
    check_char(body) == Some(check)
}

/// Canonical display form: dots every three digits from the right of the
/// body, dash before the check character.
///
/// Formatting does not validate, and is idempotent: formatting an
/// already-formatted RUT returns it unchanged. Inputs too short to carry a
/// check character are returned as-is (normalized).
pub fn format(raw: &str) -> String {
    let clean = normalize(raw);
    let Some((body, check)) = split(&clean) else {
        return clean;
    };

    let mut formatted = String::with_capacity(body.len() + body.len() / 3 + 2);
    let offset = body.len() % 3;
    for (i, c) in body.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            formatted.push('.');
        }
        formatted.push(c);
    }
    formatted.push('-');
    formatted.push(check);
    formatted
}

/// Split a normalized RUT into (body, check character). `None` when the
/// input is too short to carry a check character.
fn split(clean: &str) -> Option<(&str, char)> {
    if clean.len() < 2 {
        return None;
    }
    let check = clean.chars().next_back()?;
    Some((&clean[..clean.len() - check.len_utf8()], check))
}
