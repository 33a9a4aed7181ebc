/// Candidate terms for new random words
pub const COMMON_WORDS: &[&str] = &[
    "apple", "book", "cat", "dog", "elephant", "friend", "good", "happy",
    "important", "journey", "knowledge", "love", "music", "nature", "ocean",
    "peace", "question", "river", "smile", "time", "understand", "voice",
    "water", "year", "beautiful", "create", "develop", "energy", "future",
    "growth", "health", "idea", "learn", "moment", "opportunity", "problem",
    "quality", "reason", "success", "technology", "universe", "value",
    "wonder", "experience", "challenge", "discover", "explore", "imagine",
    "inspire", "language", "memory", "practice",
];

/// The built-in list as owned strings
pub fn default_word_list() -> Vec<String> {
    COMMON_WORDS.iter().map(|w| w.to_string()).collect()
}
