use thiserror::Error;

use super::CliFlags;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Invalid number: {0}")]
    InvalidNumber(String),

    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Unknown argument: {0}")]
    UnknownArg(String),
}

/// Parse `args` (including the program name at index 0).
pub fn parse(args: &[String]) -> Result<CliFlags, ParseError> {
    let mut flags = CliFlags::default();
    let mut i = 1;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "-h" | "--help" => flags.help = true,
            "-v" | "--version" => flags.version = true,
            "-q" | "--quiet" => flags.quiet = true,
            "-b" | "--board" => flags.clipboard = true,
            "--save" => flags.save = true,
            "-a" | "--all" => flags.all = true,
            "-L" | "--lower" => flags.lower = true,
            "-U" | "--upper" => flags.upper = true,
            "-d" | "--digits" => flags.digits = true,
            "-S" | "--symbols" => flags.symbols = true,
            "-l" | "--length" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| ParseError::MissingValue(arg.to_string()))?;
                flags.length = Some(value.clone());
            }
            "-n" | "--number" => {
                i += 1;
                let value = args
                    .get(i)
                    .ok_or_else(|| ParseError::MissingValue(arg.to_string()))?;
                let n: usize = value
                    .parse()
                    .map_err(|_| ParseError::InvalidNumber(value.clone()))?;
                if n == 0 {
                    return Err(ParseError::InvalidNumber(value.clone()));
                }
                flags.number = Some(n);
            }
            _ => return Err(ParseError::UnknownArg(arg.to_string())),
        }
        i += 1;
    }

    Ok(flags)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("passgen")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn empty_is_default() {
        assert_eq!(parse(&args(&[])).unwrap(), CliFlags::default());
    }

    #[test]
    fn short_and_long_forms() {
        let flags = parse(&args(&["-l", "12", "--upper", "-d", "-n", "3", "-q", "-b"])).unwrap();
        assert_eq!(flags.length.as_deref(), Some("12"));
        assert!(flags.upper);
        assert!(flags.digits);
        assert!(!flags.lower);
        assert_eq!(flags.number, Some(3));
        assert!(flags.quiet);
        assert!(flags.clipboard);
    }

    #[test]
    fn length_is_kept_raw() {
        let flags = parse(&args(&["--length", "abc"])).unwrap();
        assert_eq!(flags.length.as_deref(), Some("abc"));
    }

    #[test]
    fn errors() {
        assert_eq!(
            parse(&args(&["--bogus"])),
            Err(ParseError::UnknownArg("--bogus".into()))
        );
        assert_eq!(
            parse(&args(&["-l"])),
            Err(ParseError::MissingValue("-l".into()))
        );
        assert_eq!(
            parse(&args(&["-n", "x"])),
            Err(ParseError::InvalidNumber("x".into()))
        );
        assert_eq!(
            parse(&args(&["-n", "0"])),
            Err(ParseError::InvalidNumber("0".into()))
        );
    }
}
