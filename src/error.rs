use std::error::Error as StdError;
use std::fmt::{self, Display};
use std::io;

/// An error reported to the user of either front end.
#[derive(Debug)]
pub enum Error {
    /// A transform was requested before a rectangle was drawn.
    NoRectangle,
    /// A parameter's input was not a finite number.
    InvalidNumber {
        /// The name of the parameter being entered.
        parameter: &'static str,
        /// The rejected input.
        input: String,
    },
    /// A console command was missing one of its arguments.
    MissingArgument {
        /// The command being parsed.
        command: &'static str,
        /// The name of the missing argument.
        argument: &'static str,
    },
    /// A console command was given more arguments than it takes.
    UnexpectedArgument {
        /// The command being parsed.
        command: &'static str,
        /// The first argument that was not expected.
        argument: String,
    },
    /// A console command was not recognized.
    UnknownCommand(String),
    /// Reading from or writing to the console failed.
    Io(io::Error),
}

impl Error {
    /// Returns true if this error is a mistake the user can correct, rather
    /// than a failure of the environment.
    #[must_use]
    pub const fn is_user_error(&self) -> bool {
        !matches!(self, Error::Io(_))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::NoRectangle => f.write_str("Please draw a rectangle first"),
            Error::InvalidNumber { parameter, input } => {
                write!(f, "'{input}' is not a valid value for {parameter}")
            }
            Error::MissingArgument { command, argument } => {
                write!(f, "{command} is missing its {argument} argument")
            }
            Error::UnexpectedArgument { command, argument } => {
                write!(f, "{command} does not take the extra argument '{argument}'")
            }
            Error::UnknownCommand(command) => {
                write!(f, "unknown command '{command}', enter 'help' for a list")
            }
            Error::Io(err) => write!(f, "console i/o error: {err}"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<Error> for io::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Io(err) => err,
            other => io::Error::new(io::ErrorKind::InvalidInput, other),
        }
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Error::NoRectangle, Error::NoRectangle) => true,
            (
                Error::InvalidNumber { parameter, input },
                Error::InvalidNumber {
                    parameter: other_parameter,
                    input: other_input,
                },
            ) => parameter == other_parameter && input == other_input,
            (
                Error::MissingArgument { command, argument },
                Error::MissingArgument {
                    command: other_command,
                    argument: other_argument,
                },
            ) => command == other_command && argument == other_argument,
            (
                Error::UnexpectedArgument { command, argument },
                Error::UnexpectedArgument {
                    command: other_command,
                    argument: other_argument,
                },
            ) => command == other_command && argument == other_argument,
            (Error::UnknownCommand(a), Error::UnknownCommand(b)) => a == b,
            (Error::Io(a), Error::Io(b)) => a.kind() == b.kind(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::Error;

    #[test]
    fn only_io_errors_are_fatal() {
        assert!(Error::NoRectangle.is_user_error());
        assert!(Error::UnknownCommand(String::from("skew")).is_user_error());
        assert!(!Error::Io(io::Error::from(io::ErrorKind::BrokenPipe)).is_user_error());
    }

    #[test]
    fn io_errors_convert_back_unchanged() {
        let err = io::Error::from(Error::Io(io::Error::from(io::ErrorKind::BrokenPipe)));
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);

        let err = io::Error::from(Error::NoRectangle);
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert_eq!(err.to_string(), "Please draw a rectangle first");
    }
}
