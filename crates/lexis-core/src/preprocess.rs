use unicode_normalization::UnicodeNormalization;

pub trait Preprocessor {
    // Default: lookup-ready English term
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Unicode normalization (NFKC) folds full-width letters and ligatures
        let text: String = text.nfkc().collect();

        text.replace(['\n', '\r'], " ").trim().to_lowercase()
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
