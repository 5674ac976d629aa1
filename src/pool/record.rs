//! Record presentation — turning a raw pool line into display text.
//!
//! Pool lines carry the shape `"<index> <category>,<name>,<description>"`.
//! The index and category are bookkeeping; only name and description are
//! shown to the user.

/// Format a raw pool line for display.
///
/// Splits on commas into at most 3 parts. With exactly 3 the display is
/// `"<name>: <description>"`, whitespace trimmed and one layer of enclosing
/// quotes stripped from the description. Anything else (no commas, or only
/// one) falls back to the raw line unchanged.
pub fn present(line: &str) -> String {
    let parts: Vec<&str> = line.splitn(3, ',').collect();
    if parts.len() == 3 {
        let name = parts[1].trim();
        let description = strip_quotes(parts[2].trim());
        format!("{name}: {description}")
    } else {
        line.to_string()
    }
}

/// Strip one enclosing double quote from each end, if present.
fn strip_quotes(s: &str) -> &str {
    let s = s.strip_prefix('"').unwrap_or(s);
    s.strip_suffix('"').unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_line() {
        let out = present("3 Scripting,Python,\"A dynamic language\"");
        assert_eq!(out, "Python: A dynamic language");
    }

    #[test]
    fn unquoted_description() {
        let out = present("1 Systems,Rust,Fearless concurrency");
        assert_eq!(out, "Rust: Fearless concurrency");
    }

    #[test]
    fn embedded_commas_stay_in_description() {
        let out = present("7 Functional,Haskell,\"Lazy, pure, typed\"");
        assert_eq!(out, "Haskell: Lazy, pure, typed");
    }

    #[test]
    fn embedded_quotes_survive() {
        let out = present("2 Esoteric,Brainfuck,\"Eight \"\"commands\"\" total\"");
        assert_eq!(out, "Brainfuck: Eight \"\"commands\"\" total");
    }

    #[test]
    fn no_commas_falls_back_to_raw_line() {
        assert_eq!(present("5 MalformedLine"), "5 MalformedLine");
    }

    #[test]
    fn one_comma_falls_back_to_raw_line() {
        assert_eq!(present("5 Weird,TwoParts"), "5 Weird,TwoParts");
    }

    #[test]
    fn whitespace_trimmed() {
        let out = present("4 Scripting,  Lua  ,  lightweight  ");
        assert_eq!(out, "Lua: lightweight");
    }
}
