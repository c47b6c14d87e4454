//! ISBN-13 checksum and formatting helpers.

use crate::error::{Error, Result};

/// Bookland prefix shared by every generated ISBN.
pub const PREFIX: [u8; 3] = [9, 7, 8];

/// Check digit over the first 12 digits: weights alternate 1, 3.
pub fn check_digit(body: &[u8; 12]) -> u8 {
    let sum: u32 = body
        .iter()
        .enumerate()
        .map(|(position, digit)| {
            let weight = if position % 2 == 0 { 1 } else { 3 };
            u32::from(*digit) * weight
        })
        .sum();
    ((10 - sum % 10) % 10) as u8
}

/// Format as `PPP-D-DDDD-DDDD-C`.
pub fn format(body: &[u8; 12], check: u8) -> String {
    let digits: String = body.iter().map(|digit| char::from(b'0' + digit)).collect();
    format!(
        "{}-{}-{}-{}-{}",
        &digits[0..3],
        &digits[3..4],
        &digits[4..8],
        &digits[8..12],
        check
    )
}

/// Extract the 13 digits of a formatted ISBN, ignoring hyphens.
pub fn parse_digits(isbn: &str) -> Result<[u8; 13]> {
    let digits: Vec<u8> = isbn
        .chars()
        .filter(|ch| *ch != '-')
        .map(|ch| {
            ch.to_digit(10)
                .map(|digit| digit as u8)
                .ok_or_else(|| Error::Invalid(format!("non-digit '{ch}' in isbn '{isbn}'")))
        })
        .collect::<Result<_>>()?;
    digits
        .try_into()
        .map_err(|_| Error::Invalid(format!("isbn '{isbn}' must have 13 digits")))
}

/// True when the 13th digit matches the checksum of the first 12.
pub fn validate(isbn: &str) -> bool {
    let Ok(digits) = parse_digits(isbn) else {
        return false;
    };
    let mut body = [0_u8; 12];
    body.copy_from_slice(&digits[..12]);
    check_digit(&body) == digits[12]
}
