//! Line recognizers
//!
//! Each recognizer is a pure function from one trimmed line to a
//! [`Recognition`]. Their heuristics overlap, so the order in
//! [`RecognizerKind::PRIORITY`] decides which one wins.

use crate::types::{Recognition, TokenizedItem};

/// Signature shared by every recognizer
pub type Recognizer = fn(&str) -> Recognition;

/// Cubic-meter unit tokens accepted after a moon-ping volume, including the
/// UTF-8-read-as-Latin-1 form of `m³`
const CUBIC_METER_UNITS: [&str; 3] = ["m³", "mÂ³", "m3"];

/// Identifies one recognizer in the chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecognizerKind {
    /// Tab-delimited inventory and contract rows
    InventoryOrContract,

    /// `Name: <volume> m³` chat messages
    MoonPing,

    /// Free-typed fallback
    ManualEntry,
}

impl RecognizerKind {
    /// Most specific first. The first recognizer to match a line wins.
    pub const PRIORITY: [RecognizerKind; 3] = [
        RecognizerKind::InventoryOrContract,
        RecognizerKind::MoonPing,
        RecognizerKind::ManualEntry,
    ];

    /// Name used in logs
    pub fn as_str(&self) -> &'static str {
        match self {
            RecognizerKind::InventoryOrContract => "inventory_or_contract",
            RecognizerKind::MoonPing => "moon_ping",
            RecognizerKind::ManualEntry => "manual_entry",
        }
    }

    /// The function implementing this recognizer
    pub fn recognizer(&self) -> Recognizer {
        match self {
            RecognizerKind::InventoryOrContract => inventory_or_contract,
            RecognizerKind::MoonPing => moon_ping,
            RecognizerKind::ManualEntry => manual_entry,
        }
    }

    /// Run this recognizer on `line`
    pub fn recognize(&self, line: &str) -> Recognition {
        (self.recognizer())(line)
    }
}

/// Rows copied from inventory windows or contract listings
///
/// `Name<TAB>Quantity<TAB>...`, quantity using `.` as thousands separator.
/// Blueprint and formula rows are only taken when they carry a price or are
/// marked as originals; an empty quantity then means one copy.
pub fn inventory_or_contract(line: &str) -> Recognition {
    let fields: Vec<&str> = line.split('\t').collect();

    if fields.len() < 2 {
        return Recognition::Rejected;
    }

    let type_name = fields[0];
    let mut quantity = fields[1].replace('.', "");

    // no letters, or the multibuy totals row
    if !has_letter(type_name) || type_name.starts_with("Total:") {
        return Recognition::Rejected;
    }

    if type_name.contains("Blueprint") || type_name.contains("Formula") {
        let last_field = fields[fields.len() - 1];
        if !last_field.contains(" ISK") && !line.contains("ORIGINAL BLUEPRINT") {
            return Recognition::Rejected;
        }

        if quantity.is_empty() {
            quantity = "1".to_string();
        }
    }

    match parse_count(&quantity) {
        Some(quantity) => Recognition::Matched(TokenizedItem::with_quantity(type_name, quantity)),
        None => Recognition::Rejected,
    }
}

/// Mining chat messages: `Name: 15,828,569 m³`
pub fn moon_ping(line: &str) -> Recognition {
    let fields: Vec<&str> = line.split(' ').collect();

    if fields.len() < 3 {
        return Recognition::Rejected;
    }

    let type_name = fields[0].strip_suffix(':').unwrap_or(fields[0]);
    let volume = fields[1].replace(',', "");
    let unit = fields[2];

    if !has_letter(type_name) {
        return Recognition::Rejected;
    }

    let Some(volume) = parse_volume(&volume) else {
        return Recognition::Rejected;
    };

    if !CUBIC_METER_UNITS.contains(&unit) {
        return Recognition::Rejected;
    }

    Recognition::Matched(TokenizedItem::with_volume(type_name, volume))
}

/// Free-typed `Name 3269` lines; anything else with letters in it is taken
/// whole as a name with quantity 1
pub fn manual_entry(line: &str) -> Recognition {
    if line.contains('\t') {
        return Recognition::Rejected;
    }

    // originals and copies look the same here
    if line.contains("Blueprint") {
        return Recognition::Rejected;
    }

    let (type_name, quantity) = match line.rfind(' ') {
        Some(index) => (&line[..index], &line[index + 1..]),
        None => ("", line),
    };

    if !has_letter(line) && !has_letter(type_name) {
        return Recognition::Rejected;
    }

    match parse_count(quantity) {
        Some(quantity) => Recognition::Matched(TokenizedItem::with_quantity(type_name, quantity)),
        None => Recognition::Matched(TokenizedItem::with_quantity(line, 1)),
    }
}

fn has_letter(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_alphabetic())
}

/// Non-empty run of ASCII digits that fits in a `u64`
fn parse_count(s: &str) -> Option<u64> {
    if s.is_empty() || s.contains(',') || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Finite, non-negative decimal number
fn parse_volume(s: &str) -> Option<f64> {
    s.parse::<f64>()
        .ok()
        .filter(|volume| volume.is_finite() && *volume >= 0.0)
}
