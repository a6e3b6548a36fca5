//! Closed set of report categories.
//!
//! The labels are the Bulgarian words the classifier is instructed to answer
//! with. Whatever the model replies is folded into this set by
//! [`Category::normalize`]; unknown answers become [`Category::Other`].

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Lighting,
    Infrastructure,
    Transport,
    Animals,
    Hygiene,
    Noise,
    Other,
}

impl Category {
    pub const ALL: [Category; 7] = [
        Category::Lighting,
        Category::Infrastructure,
        Category::Transport,
        Category::Animals,
        Category::Hygiene,
        Category::Noise,
        Category::Other,
    ];

    pub const FALLBACK: Category = Category::Other;

    pub fn label(&self) -> &'static str {
        match self {
            Self::Lighting => "осветление",
            Self::Infrastructure => "инфраструктура",
            Self::Transport => "транспорт",
            Self::Animals => "животни",
            Self::Hygiene => "хигиена",
            Self::Noise => "шум",
            Self::Other => "други",
        }
    }

    /// Exact label lookup, no normalization.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// Map a raw classifier reply into the closed set.
    ///
    /// Lower-cases, removes every '.', trims, then requires an exact label
    /// match. Anything else (extra words, synonyms, other languages) is
    /// coerced to the fallback.
    pub fn normalize(raw: &str) -> Self {
        let lowercased = raw.to_lowercase().replace('.', "");
        Self::from_label(lowercased.trim()).unwrap_or(Self::FALLBACK)
    }

    /// "осветление, инфраструктура, ..." for prompts.
    pub fn label_list() -> String {
        Self::ALL
            .iter()
            .map(Category::label)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn as_str(&self) -> &'static str {
        self.label()
    }
}

impl AsRef<str> for Category {
    fn as_ref(&self) -> &str {
        self.label()
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl serde::Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> serde::Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Category::from_label(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("Unknown category: '{}'.", s)))
    }
}
