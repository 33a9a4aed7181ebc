/// One `_` per character, space separated
pub fn blank_word(word: &str) -> String {
    word.chars().map(|_| "_").collect::<Vec<_>>().join(" ")
}

/// Fill-in answers ignore case and surrounding whitespace
pub fn check_answer(answer: &str, word: &str) -> bool {
    answer.trim().to_lowercase() == word.trim().to_lowercase()
}
