//! # Language Detector
//!
//! Classifies a snippet as C or PSeInt from keyword signatures.
//! PSeInt signatures are checked first: they are more distinctive, so they win
//! even when a C signature also fires (e.g. `Definir x Como Entero` next to
//! the word `int`).

use lazy_static::lazy_static;
use regex::Regex;
use util::languages::{Language, LanguageExt};

lazy_static! {
    static ref PSEINT_SIGNATURES: Vec<(&'static str, Regex)> = compile(Language::PSeInt);
    static ref C_SIGNATURES: Vec<(&'static str, Regex)> = compile(Language::C);
}

fn compile(language: Language) -> Vec<(&'static str, Regex)> {
    language
        .signatures()
        .iter()
        .map(|s| (s.name, Regex::new(s.pattern).unwrap()))
        .collect()
}

/// Name of the first signature in `signatures` that matches `code`.
fn first_match(signatures: &[(&'static str, Regex)], code: &str) -> Option<&'static str> {
    signatures
        .iter()
        .find(|(_, re)| re.is_match(code))
        .map(|(name, _)| *name)
}

/// Detects the language of `code`. Always returns a language; C is the default.
pub fn detect_language(code: &str) -> Language {
    let (language, signature) = if let Some(name) = first_match(&PSEINT_SIGNATURES, code) {
        (Language::PSeInt, name)
    } else if let Some(name) = first_match(&C_SIGNATURES, code) {
        (Language::C, name)
    } else {
        (fallback_heuristic(code), "heuristica")
    };
    tracing::debug!(%language, signature, "detected language");
    language
}

fn fallback_heuristic(code: &str) -> Language {
    if code.contains("<-") || code.contains("Definir") {
        Language::PSeInt
    } else {
        // `;` plus `(` also means C, which is the default anyway.
        Language::C
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_the_first_matching_signature() {
        assert_eq!(first_match(&PSEINT_SIGNATURES, "x <- 1"), Some("asignacion"));
        assert_eq!(first_match(&C_SIGNATURES, "printf(\"hola\");"), Some("printf"));
        assert_eq!(first_match(&C_SIGNATURES, "nada por aqui"), None);
    }

    #[test]
    fn detects_c_declaration() {
        assert_eq!(detect_language("int edad = 25;"), Language::C);
    }

    #[test]
    fn detects_c_program() {
        let code = "#include <stdio.h>\nint main() {\n  printf(\"hola\");\n  return 0;\n}";
        assert_eq!(detect_language(code), Language::C);
    }

    #[test]
    fn detects_pseint_process() {
        let code = "Proceso Saludo\n  Escribir \"Hola\"\nFinProceso";
        assert_eq!(detect_language(code), Language::PSeInt);
    }

    #[test]
    fn pseint_wins_over_c_keywords() {
        let code = "Definir x Como Entero\n// int es el tipo en C";
        assert_eq!(detect_language(code), Language::PSeInt);
    }

    #[test]
    fn arrow_assignment_is_pseint() {
        assert_eq!(detect_language("x <- 5"), Language::PSeInt);
    }

    #[test]
    fn unknown_text_defaults_to_c() {
        assert_eq!(detect_language("hola mundo"), Language::C);
        assert_eq!(detect_language(""), Language::C);
        assert_eq!(detect_language("foo(bar);"), Language::C);
    }

    #[test]
    fn keywords_inside_identifiers_do_not_count() {
        // "printer" and "Leerlo" are not signatures.
        assert_eq!(detect_language("printer; Leerlo"), Language::C);
    }
}
