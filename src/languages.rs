//! Languages offered by the headlines language selector.
//!
//! Codes are passed to the backend untouched; this table only drives the
//! picker and display names.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
}

const fn lang(code: &'static str, name: &'static str) -> Language {
    Language { code, name }
}

pub const LANGUAGES: [Language; 22] = [
    lang("en", "English"),
    lang("hi", "Hindi (हिंदी)"),
    lang("bn", "Bengali (বাংলা)"),
    lang("te", "Telugu (తెలుగు)"),
    lang("mr", "Marathi (मराठी)"),
    lang("ta", "Tamil (தமிழ்)"),
    lang("ur", "Urdu (اردو)"),
    lang("gu", "Gujarati (ગુજરાતી)"),
    lang("kn", "Kannada (ಕನ್ನಡ)"),
    lang("ml", "Malayalam (മലയാളം)"),
    lang("or", "Odia (ଓଡ଼ିଆ)"),
    lang("pa", "Punjabi (ਪੰਜਾਬੀ)"),
    lang("as", "Assamese (অসমীয়া)"),
    lang("mai", "Maithili (मैथिली)"),
    lang("sat", "Santali (संताली)"),
    lang("ks", "Kashmiri (कश्मीरी)"),
    lang("ne", "Nepali (नेपाली)"),
    lang("doi", "Dogri (डोगरी)"),
    lang("gom", "Konkani (कोंकणी)"),
    lang("sd", "Sindhi (सिंधी)"),
    lang("mni", "Manipuri (মণিপুরী)"),
    lang("sa", "Sanskrit (संस्कृत)"),
];

/// Display name for a code, if it is one of the offered languages
#[must_use]
pub fn display_name(code: &str) -> Option<&'static str> {
    LANGUAGES.iter().find(|l| l.code == code).map(|l| l.name)
}

/// Display name, or the raw code for languages outside the table
#[must_use]
pub fn display_name_or_code(code: &str) -> String {
    display_name(code).map(str::to_string).unwrap_or_else(|| code.to_string())
}

/// Index of a code in [`LANGUAGES`]
#[must_use]
pub fn position(code: &str) -> Option<usize> {
    LANGUAGES.iter().position(|l| l.code == code)
}
