//! Canonical forms of patient phone numbers and names.
//!
//! Guest appointments carry the phone number and name typed in at booking time. Before
//! comparing them against an account profile both sides are reduced to a canonical form so
//! that formatting differences (`(012) 345-6789` vs `0123456789`, `Jane Doe ` vs `jane doe`)
//! do not cause false mismatches. Both functions are total and idempotent.

/// Characters dropped from phone numbers before comparison.
const PHONE_SEPARATORS: [char; 4] = [' ', '-', '(', ')'];

/// Removes spaces, hyphens and parentheses from a phone number.
///
/// Every other character, including digits and a leading `+`, is kept in its
/// original order. Absent input normalizes to the empty string.
///
/// # Arguments
/// - `raw` - Phone number as entered, if any
///
/// # Returns
/// - `String` - Phone number with separators removed
pub fn normalize_phone(raw: Option<&str>) -> String {
    raw.map(|phone| {
        phone
            .chars()
            .filter(|c| !PHONE_SEPARATORS.contains(c))
            .collect()
    })
    .unwrap_or_default()
}

/// Trims surrounding whitespace from a name and lowercases it.
///
/// Absent input normalizes to the empty string.
///
/// # Arguments
/// - `raw` - Name as entered, if any
///
/// # Returns
/// - `String` - Trimmed, lowercased name
pub fn normalize_name(raw: Option<&str>) -> String {
    raw.map(|name| name.trim().to_lowercase()).unwrap_or_default()
}

/// Compares two values by their normalized form.
///
/// Empty normalized values never match, so two missing phone numbers do not count as
/// the same number.
pub(crate) fn matches_normalized(
    normalize: fn(Option<&str>) -> String,
    left: Option<&str>,
    right: Option<&str>,
) -> bool {
    let left = normalize(left);
    let right = normalize(right);

    !left.is_empty() && !right.is_empty() && left == right
}
