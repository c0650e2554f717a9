use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref LINE_COMMENT: Regex = Regex::new(r"//[^\n]*").unwrap();
    static ref BLOCK_COMMENT: Regex = Regex::new(r"(?s)/\*.*?\*/").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"\s+").unwrap();
}

/// Canonical form of `code`: comments removed, whitespace runs (newlines
/// included) collapsed to one space, trimmed, lowercased.
///
/// Line comments are stripped before block comments. The result is stable
/// under a second application.
pub fn normalize_code(code: &str) -> String {
    let without_line = LINE_COMMENT.replace_all(code, "");
    let without_block = BLOCK_COMMENT.replace_all(&without_line, "");
    let collapsed = WHITESPACE.replace_all(&without_block, " ");
    collapsed.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_line_comments() {
        assert_eq!(normalize_code("int a = 1; // uno"), "int a = 1;");
    }

    #[test]
    fn strips_block_comments_across_lines() {
        let code = "int a;/* uno\n dos */\nint b;";
        assert_eq!(normalize_code(code), "int a; int b;");
    }

    #[test]
    fn block_comments_are_non_greedy() {
        assert_eq!(normalize_code("/*a*/x/*b*/"), "x");
    }

    #[test]
    fn collapses_whitespace_and_lowercases() {
        assert_eq!(
            normalize_code("  Int   EDAD\t=\n 25 ;  "),
            "int edad = 25 ;"
        );
    }

    #[test]
    fn is_idempotent() {
        let samples = [
            "int main() {\n  // hola\n  printf(\"X\"); /* fin */ }",
            "a//*c*/b",
            "a/*x*//b",
            "Definir x Como Entero\n\nx <- 5",
            "",
            "   \n\t ",
        ];
        for s in samples {
            let once = normalize_code(s);
            assert_eq!(normalize_code(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(normalize_code("// solo comentario"), "");
    }
}
