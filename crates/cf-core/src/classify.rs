use serde::Serialize;

use crate::labels::is_person_name;

/// Semantic category of a resolved destination label.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Default)]
pub enum Category {
    Voicemail,
    Greeting,
    Directory,
    CallQueue,
    ExternalTransfer,
    Person,
    #[default]
    Unknown,
}

impl Category {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Voicemail => "Voicemail",
            Self::Greeting => "Greeting",
            Self::Directory => "Directory",
            Self::CallQueue => "Call Queue",
            Self::ExternalTransfer => "External Transfer",
            Self::Person => "Person",
            Self::Unknown => "Unknown",
        }
    }
}

/// Keyword rules scanned in order; the first matching set wins, so a label
/// containing both "queue" and "transfer" is a CallQueue.
const KEYWORD_RULES: &[(&[&str], Category)] = &[
    (&["voicemail"], Category::Voicemail),
    (&["greeting", "transfer message"], Category::Greeting),
    (&["directory"], Category::Directory),
    (&["queue"], Category::CallQueue),
    (&["transfer", "external", "forward"], Category::ExternalTransfer),
];

/// Map a resolved label to exactly one category, case-insensitively.
#[must_use]
pub fn classify_label(label: &str) -> Category {
    let lower = label.to_ascii_lowercase();
    for (keywords, category) in KEYWORD_RULES {
        if keywords.iter().any(|keyword| lower.contains(keyword)) {
            return *category;
        }
    }

    if is_person_name(label) {
        Category::Person
    } else {
        Category::Unknown
    }
}
