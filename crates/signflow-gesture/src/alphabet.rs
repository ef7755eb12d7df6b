//! Polish fingerspelling alphabet specifics
//!
//! A subset of letters is "dynamic": the sign adds a directional hand
//! movement to the base pose and resolves to a diacritic or letter pair
//! instead of the plain label.

/// Substitute rendering for a dynamic letter label, `None` for static
/// letters.
pub fn substitute(label: &str) -> Option<&'static str> {
    let sub = match label {
        "A" => "Ą",
        "C" => "Ć",
        "D" => "D",
        "E" => "Ę",
        "F" => "F",
        "G" => "G",
        "H" => "H",
        "I" => "J",
        "K" => "K",
        "L" => "Ł",
        "N" => "Ń",
        "O" => "Ó",
        "R" => "RZ",
        "S" => "Ś",
        "Z" => "Ż/Ź",
        _ => return None,
    };
    Some(sub)
}

/// Whether the label names a letter whose sign involves movement.
pub fn is_dynamic(label: &str) -> bool {
    substitute(label).is_some()
}
