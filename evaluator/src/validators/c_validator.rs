//! Syntax validator for the subset of C taught in the first units.
//!
//! The scan recognises declarations of the shape `type name [= value];` for
//! `int`, `float`, `char` and `double`, and requires every other statement line
//! to end in `;`, `{` or `}` unless it opens a control construct. Afterwards
//! every identifier in the program body must be either declared or reserved.

use crate::traits::validator::SyntaxValidator;
use crate::types::SyntaxError;
use crate::validators::mask_comments_and_literals;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;
use util::languages::Language;

lazy_static! {
    /// `int edad = 25;`, `char c;`
    pub(crate) static ref DECLARATION: Regex =
        Regex::new(r"^(int|float|char|double)\s+([A-Za-z_]\w*)\s*(=\s*[^;]+)?;$").unwrap();
    /// `if (...)`, `else`, `for (...)`, `while (...)`, `do`
    pub(crate) static ref CONTROL_HEAD: Regex =
        Regex::new(r"^(if|else|for|while|do)\b").unwrap();
    pub(crate) static ref IDENTIFIER: Regex = Regex::new(r"\b[A-Za-z_]\w*\b").unwrap();
    static ref PREPROCESSOR: Regex = Regex::new(r"(?m)^\s*#.*$").unwrap();
}

/// Identifiers that never need a declaration.
pub const RESERVED: &[&str] = &[
    "if", "else", "for", "while", "do", "return", "int", "float", "char", "double", "printf",
    "scanf", "main", "void", "break", "continue", "switch", "case", "default", "const", "long",
    "short", "unsigned", "signed", "sizeof", "include", "stdio", "h", "puts", "putchar",
    "getchar",
];

pub struct CValidator;

impl CValidator {
    /// Line scan over masked source: collects declared names and reports
    /// missing semicolons.
    fn scan_lines(&self, masked: &str, errors: &mut Vec<SyntaxError>) -> Vec<String> {
        let mut declared = Vec::new();

        for (idx, raw) in masked.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            if let Some(caps) = DECLARATION.captures(line) {
                declared.push(caps[2].to_string());
                continue;
            }

            if line.ends_with(';') || line.ends_with('{') || line.ends_with('}') {
                continue;
            }
            if CONTROL_HEAD.is_match(line) || line == ")" {
                continue;
            }

            errors.push(SyntaxError::sintaxis(
                line_no,
                format!("Falta punto y coma (;) al final de la línea {line_no}"),
            ));
        }

        declared
    }

    fn check_identifiers(&self, masked: &str, declared: &[String], errors: &mut Vec<SyntaxError>) {
        let known: HashSet<&str> = declared
            .iter()
            .map(String::as_str)
            .chain(RESERVED.iter().copied())
            .collect();
        let body = PREPROCESSOR.replace_all(masked, "");
        let mut reported: HashSet<&str> = HashSet::new();
        for m in IDENTIFIER.find_iter(&body) {
            let ident = m.as_str();
            if known.contains(ident) || !reported.insert(ident) {
                continue;
            }
            errors.push(SyntaxError::variable(
                0,
                format!("La variable '{ident}' no está declarada"),
            ));
        }
    }
}

impl SyntaxValidator for CValidator {
    fn language(&self) -> Language {
        Language::C
    }

    fn validate(&self, code: &str) -> Vec<SyntaxError> {
        let masked = mask_comments_and_literals(code);
        let mut errors = Vec::new();
        let declared = self.scan_lines(&masked, &mut errors);
        self.check_identifiers(&masked, &declared, &mut errors);
        tracing::debug!(
            declared = declared.len(),
            errors = errors.len(),
            "validated C submission"
        );
        errors
    }
}
