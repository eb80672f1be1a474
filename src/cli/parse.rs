use strongpass::pass::{CharClass, ClassSet};
use thiserror::Error;

use super::CliFlags;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),
    #[error("Missing value for {0}")]
    MissingValue(String),
    #[error("Invalid class letter '{0}' (use l, u, d, s)")]
    InvalidClass(char),
    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "-s" | "--saved" => flags.saved = true,
            "--save" => flags.save = true,
            "--score" => flags.score = true,
            "--no-lower" => flags.no_lower = true,
            "--no-upper" => flags.no_upper = true,
            "--no-digits" => flags.no_digits = true,
            "-S" | "--symbols" => flags.symbols = true,
            flag @ ("-l" | "--length") => {
                flags.length = Some(number(value(args, &mut i, flag)?)?);
            }
            flag @ ("-n" | "--number") => {
                flags.number = Some(number(value(args, &mut i, flag)?)?);
            }
            "--only" => {
                flags.only = Some(classes(value(args, &mut i, "--only")?)?);
            }
            arg => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

fn value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Result<&'a str, ParseError> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| ParseError::MissingValue(flag.to_string()))
}

fn number(s: &str) -> Result<usize, ParseError> {
    s.parse().map_err(|_| ParseError::InvalidNumber(s.to_string()))
}

/// `lud` -> lowercase, uppercase, digits.
fn classes(s: &str) -> Result<ClassSet, ParseError> {
    s.chars()
        .map(|c| match c {
            'l' => Ok(CharClass::Lowercase),
            'u' => Ok(CharClass::Uppercase),
            'd' => Ok(CharClass::Digit),
            's' => Ok(CharClass::Symbol),
            other => Err(ParseError::InvalidClass(other)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(s: &str) -> Vec<String> {
        std::iter::once("strongpass")
            .chain(s.split_whitespace())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_generation_flags() {
        let flags = parse(&args("-l 20 -n 3 -S --no-digits -b -q")).unwrap();
        assert_eq!(flags.length, Some(20));
        assert_eq!(flags.number, Some(3));
        assert!(flags.symbols && flags.no_digits && flags.clipboard && flags.quiet);
        assert!(flags.has_explicit_args());
    }

    #[test]
    fn no_args_is_not_explicit() {
        let flags = parse(&args("")).unwrap();
        assert!(!flags.has_explicit_args());
    }

    #[test]
    fn only_selects_exact_classes() {
        let flags = parse(&args("--only ds")).unwrap();
        let only = flags.only.unwrap();
        assert_eq!(only.len(), 2);
        assert!(only.contains(CharClass::Digit));
        assert!(only.contains(CharClass::Symbol));

        assert_eq!(
            parse(&args("--only lx")).unwrap_err(),
            ParseError::InvalidClass('x')
        );
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!(
            parse(&args("-l twelve")).unwrap_err(),
            ParseError::InvalidNumber("twelve".into())
        );
        assert_eq!(
            parse(&args("-n")).unwrap_err(),
            ParseError::MissingValue("-n".into())
        );
        assert_eq!(
            parse(&args("--hex")).unwrap_err(),
            ParseError::UnknownArg("--hex".into())
        );
    }
}
