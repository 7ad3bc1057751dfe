/// Password strength score, 0..=4: length >= 8, an uppercase letter, a
/// digit, and a symbol each add one.
pub fn password_strength(pw: &str) -> u8 {
    if pw.is_empty() {
        return 0;
    }
    let mut score = 0;
    if pw.chars().count() >= 8 {
        score += 1;
    }
    if pw.chars().any(|c| c.is_ascii_uppercase()) {
        score += 1;
    }
    if pw.chars().any(|c| c.is_ascii_digit()) {
        score += 1;
    }
    if pw.chars().any(|c| !c.is_ascii_alphanumeric()) {
        score += 1;
    }
    score
}

pub fn strength_label(score: u8) -> &'static str {
    match score {
        1 => "Weak",
        2 => "Fair",
        3 => "Good",
        4 => "Strong",
        _ => "",
    }
}
