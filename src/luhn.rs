//! Luhn algorithm implementation.
//!
//! The Luhn algorithm (also known as the "modulus 10" algorithm) is a checksum
//! formula that catches single-digit typos and most adjacent transpositions
//! in card numbers.

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Checks whether a string of ASCII digits passes the Luhn checksum.
///
/// # Algorithm
///
/// 1. Starting from the rightmost digit, moving left
/// 2. Double every second digit
/// 3. If doubling results in a number > 9, subtract 9
/// 4. Sum all digits
/// 5. If the sum is divisible by 10, the number is valid
///
/// # Edge cases
///
/// The empty string sums to 0 and is reported valid; callers must reject
/// empty input before relying on the result. Any non-digit character makes
/// the result `false`.
///
/// # Example
///
/// ```
/// use cc_subform::luhn::is_valid_luhn;
///
/// assert!(is_valid_luhn("4532015112830366"));
/// assert!(!is_valid_luhn("4532015112830367"));
/// ```
pub fn is_valid_luhn(digits: &str) -> bool {
    let mut sum: u32 = 0;

    // Rightmost digit is position 0 (not doubled)
    for (i, byte) in digits.bytes().rev().enumerate() {
        if !byte.is_ascii_digit() {
            return false;
        }
        let digit = byte - b'0';
        sum += if i % 2 == 1 {
            DOUBLE_TABLE[digit as usize] as u32
        } else {
            digit as u32
        };
    }

    sum % 10 == 0
}

/// Computes the Luhn sum (not reduced modulo 10) for a slice of digit values.
///
/// # Arguments
///
/// * `digits` - A slice of digits (0-9), not ASCII.
#[inline]
pub fn checksum(digits: &[u8]) -> u32 {
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 1 {
                DOUBLE_TABLE[d as usize % 10] as u32
            } else {
                d as u32
            }
        })
        .sum()
}

/// Computes the check digit that makes `digits` followed by it pass Luhn.
///
/// # Example
///
/// ```
/// use cc_subform::luhn::check_digit;
///
/// let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(check_digit(&partial), 1);
/// ```
pub fn check_digit(digits: &[u8]) -> u8 {
    // Every existing digit shifts one place left once the check digit is
    // appended, so the doubling parity flips.
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &d)| {
            if i % 2 == 0 {
                DOUBLE_TABLE[d as usize % 10] as u32
            } else {
                d as u32
            }
        })
        .sum();

    ((10 - (sum % 10)) % 10) as u8
}
