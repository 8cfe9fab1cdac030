use crate::convert::tokenizer::WordSequence;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target naming convention for rendered words.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamingConvention {
    /// `hello-world`
    #[default]
    Kebab,
    /// `helloWorld`
    Camel,
    /// `HelloWorld`
    Pascal,
    /// `hello_world`
    Snake,
    /// `HELLO_WORLD`
    ScreamingSnake,
    /// `hello world`
    Space,
}

impl NamingConvention {
    pub const ALL: [NamingConvention; 6] = [
        NamingConvention::Kebab,
        NamingConvention::Camel,
        NamingConvention::Pascal,
        NamingConvention::Snake,
        NamingConvention::ScreamingSnake,
        NamingConvention::Space,
    ];

    /// Text placed between words.
    pub fn separator(self) -> &'static str {
        match self {
            NamingConvention::Kebab => "-",
            NamingConvention::Snake | NamingConvention::ScreamingSnake => "_",
            NamingConvention::Space => " ",
            NamingConvention::Camel | NamingConvention::Pascal => "",
        }
    }
}

impl FromStr for NamingConvention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Accept both the short names and the conventions' own spellings.
        let key: String = s
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        match key.trim_end_matches("case") {
            "kebab" => Ok(NamingConvention::Kebab),
            "camel" | "lowercamel" => Ok(NamingConvention::Camel),
            "pascal" | "uppercamel" => Ok(NamingConvention::Pascal),
            "snake" => Ok(NamingConvention::Snake),
            "screamingsnake" | "constant" => Ok(NamingConvention::ScreamingSnake),
            "space" | "words" => Ok(NamingConvention::Space),
            _ => Err(format!("Unknown convention: {}", s)),
        }
    }
}

impl fmt::Display for NamingConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NamingConvention::Kebab => write!(f, "kebab"),
            NamingConvention::Camel => write!(f, "camel"),
            NamingConvention::Pascal => write!(f, "pascal"),
            NamingConvention::Snake => write!(f, "snake"),
            NamingConvention::ScreamingSnake => write!(f, "screaming-snake"),
            NamingConvention::Space => write!(f, "space"),
        }
    }
}

/// Join `words` in the given convention.
pub fn render(words: &WordSequence, convention: NamingConvention) -> String {
    let separator = convention.separator();
    let mut out = String::new();

    for (i, word) in words.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        match convention {
            NamingConvention::Kebab | NamingConvention::Snake | NamingConvention::Space => {
                out.push_str(word.as_str())
            }
            NamingConvention::ScreamingSnake => out.push_str(&word.as_str().to_ascii_uppercase()),
            NamingConvention::Camel if i == 0 => out.push_str(word.as_str()),
            NamingConvention::Camel | NamingConvention::Pascal => {
                out.push_str(&word.capitalized())
            }
        }
    }

    out
}
