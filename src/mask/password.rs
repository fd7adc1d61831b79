const MASK: &str = "*****";

/// Masks a credential for logging. Fewer than five characters reveal nothing;
/// longer values keep only their first and last character.
pub fn password(s: &str) -> String {
    if s.chars().count() < 5 {
        return MASK.to_owned();
    }
    let mut chars = s.chars();
    match (chars.next(), chars.next_back()) {
        (Some(first), Some(last)) => format!("{first}{MASK}{last}"),
        _ => MASK.to_owned()
    }
}
