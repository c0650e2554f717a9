use serde::{Deserialize, Serialize};
use std::fmt;

/// Languages the evaluator understands.
/// Serialized/deserialized in `lowercase` for config JSON and API output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    C,                                  // "c"
    #[serde(alias = "pseudocodigo")]
    PSeInt,                             // "pseint"
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::C => write!(f, "C"),
            Language::PSeInt => write!(f, "PSeInt"),
        }
    }
}

/// A named regex signature used to recognise a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signature {
    pub name: &'static str,
    pub pattern: &'static str,
}

const C_SIGNATURES: &[Signature] = &[
    Signature { name: "tipo primitivo", pattern: r"\b(int|float|char|double)\b" },
    Signature { name: "include",        pattern: r"#include" },
    Signature { name: "printf",         pattern: r"printf\s*\(" },
    Signature { name: "scanf",          pattern: r"scanf\s*\(" },
    Signature { name: "main",           pattern: r"main\s*\(" },
    Signature { name: "return",         pattern: r"return\s+.*;" },
];

const PSEINT_SIGNATURES: &[Signature] = &[
    Signature { name: "Definir",    pattern: r"\bDefinir\b" },
    Signature { name: "Como",       pattern: r"\bComo\b" },
    Signature { name: "asignacion", pattern: r"<-" },
    Signature { name: "Proceso",    pattern: r"\bProceso\b" },
    Signature { name: "FinProceso", pattern: r"\bFinProceso\b" },
    Signature { name: "Escribir",   pattern: r"\bEscribir\b" },
    Signature { name: "Leer",       pattern: r"\bLeer\b" },
];

pub trait LanguageExt {
    /// Ordered regex signatures that identify source written in this language.
    fn signatures(&self) -> &'static [Signature];

    /// Name of the reference solution file inside an exercise directory.
    fn solution_filename(&self) -> &'static str;
}

impl LanguageExt for Language {
    fn signatures(&self) -> &'static [Signature] {
        match self {
            Language::C => C_SIGNATURES,
            Language::PSeInt => PSEINT_SIGNATURES,
        }
    }

    fn solution_filename(&self) -> &'static str {
        match self {
            Language::C => "solution.c",
            Language::PSeInt => "solution.psc",
        }
    }
}

impl Language {
    pub const ALL: [Language; 2] = [Language::C, Language::PSeInt];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Language::C).unwrap(), "\"c\"");
        assert_eq!(serde_json::to_string(&Language::PSeInt).unwrap(), "\"pseint\"");
    }

    #[test]
    fn accepts_alias() {
        let lang: Language = serde_json::from_str("\"pseudocodigo\"").unwrap();
        assert_eq!(lang, Language::PSeInt);
    }

    #[test]
    fn display_uses_proper_names() {
        assert_eq!(Language::C.to_string(), "C");
        assert_eq!(Language::PSeInt.to_string(), "PSeInt");
    }

    #[test]
    fn each_language_has_signatures() {
        for lang in Language::ALL {
            assert!(!lang.signatures().is_empty());
        }
        assert_eq!(Language::PSeInt.solution_filename(), "solution.psc");
    }
}
