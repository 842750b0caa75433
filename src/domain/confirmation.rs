const AFFIRMATIVE: [&str; 4] = ["y", "yes", "ok", "true"];

/// Interpret a free-text answer as yes/no. Only an exact, case-insensitive affirmative counts.
pub fn parse_confirmation(input: &str) -> bool {
    AFFIRMATIVE.iter().any(|word| input.eq_ignore_ascii_case(word))
}
