//! # Validators
//!
//! Per-language syntax validators. Each one scans source line by line with a
//! table of named patterns, so supporting a new construct means adding a
//! pattern rather than touching the scanning loop.
//!
//! - [`c_validator`]: declarations, missing semicolons, undeclared identifiers.
//! - [`pseint_validator`]: declarations, assignments, block structure.

pub mod c_validator;
pub mod pseint_validator;

use crate::traits::validator::SyntaxValidator;
use util::languages::Language;

/// Returns the validator for `language`.
pub fn validator_for(language: Language) -> Box<dyn SyntaxValidator> {
    match language {
        Language::C => Box::new(c_validator::CValidator),
        Language::PSeInt => Box::new(pseint_validator::PseIntValidator),
    }
}

/// Removes a trailing `// ...` comment from a single line.
///
/// A `//` inside a `"..."` or `'...'` literal is kept.
pub(crate) fn strip_line_comment(line: &str) -> &str {
    let mut quote: Option<char> = None;
    let mut prev_slash = false;

    for (idx, c) in line.char_indices() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => {}
            None => match c {
                '"' | '\'' => quote = Some(c),
                '/' if prev_slash => return &line[..idx - 1],
                _ => {}
            },
        }
        prev_slash = quote.is_none() && c == '/';
    }
    line
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum MaskState {
    Code,
    LineComment,
    BlockComment,
    Literal(char),
}

/// Blanks out comments and the contents of string and char literals.
///
/// Every newline is kept, so line numbers of the result match the input.
/// Quotes stay in place: `printf("a // b");` becomes `printf("      ");`.
pub(crate) fn mask_comments_and_literals(code: &str) -> String {
    let mut out = String::with_capacity(code.len());
    let mut state = MaskState::Code;
    let mut chars = code.chars().peekable();

    while let Some(c) = chars.next() {
        match state {
            MaskState::Code => match (c, chars.peek()) {
                ('/', Some('/')) => {
                    chars.next();
                    out.push_str("  ");
                    state = MaskState::LineComment;
                }
                ('/', Some('*')) => {
                    chars.next();
                    out.push_str("  ");
                    state = MaskState::BlockComment;
                }
                ('"' | '\'', _) => {
                    out.push(c);
                    state = MaskState::Literal(c);
                }
                _ => out.push(c),
            },
            MaskState::LineComment => {
                if c == '\n' {
                    out.push('\n');
                    state = MaskState::Code;
                } else {
                    out.push(' ');
                }
            }
            MaskState::BlockComment => match (c, chars.peek()) {
                ('*', Some('/')) => {
                    chars.next();
                    out.push_str("  ");
                    state = MaskState::Code;
                }
                ('\n', _) => out.push('\n'),
                _ => out.push(' '),
            },
            MaskState::Literal(quote) => match c {
                '\\' => {
                    out.push(' ');
                    if let Some(escaped) = chars.next() {
                        out.push(if escaped == '\n' { '\n' } else { ' ' });
                    }
                }
                // unterminated literal ends with its line
                '\n' => {
                    out.push('\n');
                    state = MaskState::Code;
                }
                _ if c == quote => {
                    out.push(c);
                    state = MaskState::Code;
                }
                _ => out.push(' '),
            },
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validator_matches_requested_language() {
        for language in Language::ALL {
            assert_eq!(validator_for(language).language(), language);
        }
    }

    #[test]
    fn line_comment_is_stripped() {
        assert_eq!(strip_line_comment("x <- 1 // uno"), "x <- 1 ");
        assert_eq!(strip_line_comment("sin comentario"), "sin comentario");
    }

    #[test]
    fn line_comment_inside_literal_is_kept() {
        assert_eq!(
            strip_line_comment("Escribir \"a // b\" // fin"),
            "Escribir \"a // b\" "
        );
        assert_eq!(strip_line_comment("c = '/'; // barra"), "c = '/'; ");
    }

    #[test]
    fn mask_blanks_comments_and_literal_contents() {
        assert_eq!(
            mask_comments_and_literals("printf(\"a // b\"); // fin"),
            "printf(\"      \");       "
        );
        assert_eq!(mask_comments_and_literals("c = '/';"), "c = ' ';");
        assert_eq!(
            mask_comments_and_literals("a; /* x\ny */ b;"),
            "a;     \n     b;"
        );
    }

    #[test]
    fn mask_handles_escapes_and_comment_markers_in_strings() {
        assert_eq!(
            mask_comments_and_literals(r#"s = "\"/*\"";"#),
            r#"s = "      ";"#
        );
        assert_eq!(mask_comments_and_literals("x = '\\'';"), "x = '  ';");
    }
}
