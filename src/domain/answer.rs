//! Parsing of typed answers.

/// Interpret a typed line as yes/no.
///
/// Only the first non-whitespace character matters, case-insensitively:
/// `y` or `s` (sim) mean yes, `n` means no. Anything else is `None`.
pub fn parse_yes_no(line: &str) -> Option<bool> {
    match line.trim_start().chars().next()?.to_ascii_lowercase() {
        'y' | 's' => Some(true),
        'n' => Some(false),
        _ => None,
    }
}

/// Strip the line terminator from a typed line.
pub fn clean_line(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

/// Strip the line terminator and any trailing question marks.
pub fn clean_question(line: &str) -> &str {
    clean_line(line).trim_end().trim_end_matches('?').trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("yes\n", Some(true))]
    #[case("Y", Some(true))]
    #[case("   sim", Some(true))]
    #[case("S\n", Some(true))]
    #[case("no\n", Some(false))]
    #[case("\tNope", Some(false))]
    #[case("maybe\n", None)]
    #[case("\n", None)]
    #[case("", None)]
    fn given_line_when_parsing_yes_no_then_reads_first_char(
        #[case] line: &str,
        #[case] expected: Option<bool>,
    ) {
        assert_eq!(parse_yes_no(line), expected);
    }

    #[rstest]
    #[case("gato\n", "gato")]
    #[case("gato\r\n", "gato")]
    #[case("gato", "gato")]
    fn given_line_when_cleaning_then_drops_terminator(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(clean_line(line), expected);
    }

    #[rstest]
    #[case("mia?\n", "mia")]
    #[case("ele mia ? \n", "ele mia")]
    #[case("mia??\r\n", "mia")]
    #[case("mia\n", "mia")]
    fn given_question_when_cleaning_then_drops_question_mark(
        #[case] line: &str,
        #[case] expected: &str,
    ) {
        assert_eq!(clean_question(line), expected);
    }
}
