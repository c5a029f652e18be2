//! A line-oriented front end that reads commands from a terminal.
//!
//! Transform commands accept their parameters inline (`translate 50 -20`).
//! When they are omitted, each parameter is prompted for individually.

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::geometry::Rectangle;
use crate::parameters::{parse_parameter, TransformKind};
use crate::session::Session;
use crate::Error;

const INSTRUCTIONS: &str = "\
=== 2D Geometric Transformations ===
Commands:
  rect <x1> <y1> <x2> <y2>   draw a rectangle from two opposite corners
  translate [dx dy]          draw a translated copy (red)
  rotate [degrees]           draw a copy rotated around its center (green)
  scale [sx sy]              draw a copy scaled around its center (purple)
  show                       list the rectangle and every transformed copy
  reset                      clear the canvas
  help                       show this message
  quit                       exit (also 'q')";

/// A command entered on the console.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Draw a new original rectangle.
    Rectangle(Rectangle),
    /// Apply a transform of the given kind. Parameters that were not provided
    /// inline are `None` and will be prompted for.
    Transform {
        /// The kind of transform requested.
        kind: TransformKind,
        /// The inline parameters, or `None` if they should be prompted for.
        values: Option<Vec<f32>>,
    },
    /// Print the current canvas contents.
    Show,
    /// Clear the canvas.
    Reset,
    /// Print the instructions.
    Help,
    /// Exit the console.
    Quit,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Err(Error::UnknownCommand(String::new()));
        };
        let arguments = words.collect::<Vec<_>>();

        match command.to_ascii_lowercase().as_str() {
            "rect" | "rectangle" => {
                const CORNERS: [&str; 4] = ["x1", "y1", "x2", "y2"];
                let mut coords = [0.; 4];
                for (index, name) in CORNERS.into_iter().enumerate() {
                    let value = arguments.get(index).ok_or(Error::MissingArgument {
                        command: "rect",
                        argument: name,
                    })?;
                    coords[index] = parse_parameter(name, value)?;
                }
                reject_extra("rect", &arguments, CORNERS.len())?;
                let [x1, y1, x2, y2] = coords;
                Ok(Self::Rectangle(Rectangle::from_coords(x1, y1, x2, y2)))
            }
            "show" => reject_extra("show", &arguments, 0).map(|()| Self::Show),
            "reset" => reject_extra("reset", &arguments, 0).map(|()| Self::Reset),
            "help" | "?" => Ok(Self::Help),
            "quit" | "q" | "exit" => Ok(Self::Quit),
            other => {
                let kind = other.parse::<TransformKind>()?;
                let values = if arguments.is_empty() {
                    None
                } else {
                    let parameters = kind.parameters();
                    let mut values = Vec::with_capacity(parameters.len());
                    for (index, parameter) in parameters.iter().enumerate() {
                        let value = arguments.get(index).ok_or(Error::MissingArgument {
                            command: kind.name(),
                            argument: parameter.name,
                        })?;
                        values.push(parameter.parse(value)?);
                    }
                    reject_extra(kind.name(), &arguments, parameters.len())?;
                    Some(values)
                };
                Ok(Self::Transform { kind, values })
            }
        }
    }
}

fn reject_extra(command: &'static str, arguments: &[&str], expected: usize) -> Result<(), Error> {
    match arguments.get(expected) {
        Some(extra) => Err(Error::UnexpectedArgument {
            command,
            argument: (*extra).to_string(),
        }),
        None => Ok(()),
    }
}

/// An interactive console session.
pub struct Console<R, W> {
    input: R,
    output: W,
    session: Session,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Returns a console reading from standard input and writing to standard
    /// output.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R, W> Console<R, W>
where
    R: BufRead,
    W: Write,
{
    /// Returns a console reading commands from `input` and writing replies
    /// to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            session: Session::new(),
        }
    }

    /// Returns the session being edited.
    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Consumes the console, returning its output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads and executes commands until `quit` is entered or the input ends.
    ///
    /// User mistakes are reported and the session continues.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the input or writing to the output
    /// fails.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "{INSTRUCTIONS}")?;
        loop {
            let Some(line) = self.prompt("> ")? else {
                break;
            };
            if line.trim().is_empty() {
                continue;
            }

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    tracing::debug!(%line, %err, "rejected command");
                    writeln!(self.output, "Error: {err}")?;
                    continue;
                }
            };

            match self.execute(command) {
                Ok(true) => {}
                Ok(false) => break,
                Err(err) if err.is_user_error() => writeln!(self.output, "Error: {err}")?,
                Err(err) => return Err(err.into()),
            }
        }
        self.output.flush()
    }

    /// Executes `command`, returning false if the console should exit.
    ///
    /// # Errors
    ///
    /// Returns user errors such as requesting a transform before drawing a
    /// rectangle, or [`Error::Io`] if the console could not be read from or
    /// written to.
    pub fn execute(&mut self, command: Command) -> Result<bool, Error> {
        match command {
            Command::Rectangle(rect) => {
                self.session.set_rectangle(rect);
                writeln!(self.output, "Original: {rect}")?;
            }
            Command::Transform { kind, values } => {
                // Rejected before prompting so no parameters are asked for in
                // vain.
                self.session.request(kind)?;

                let values = match values {
                    Some(values) => values,
                    None => match self.prompt_parameters(kind)? {
                        Some(values) => values,
                        None => return Ok(false),
                    },
                };
                let transform = kind.with_values(&values).ok_or_else(|| {
                    Error::MissingArgument {
                        command: kind.name(),
                        argument: kind
                            .parameters()
                            .get(values.len())
                            .map_or("value", |parameter| parameter.name),
                    }
                })?;
                let overlay = self.session.apply(transform)?;
                writeln!(self.output, "{}: {}", kind, overlay.outline)?;
            }
            Command::Show => self.show()?,
            Command::Reset => {
                self.session.reset();
                writeln!(self.output, "Canvas cleared")?;
            }
            Command::Help => writeln!(self.output, "{INSTRUCTIONS}")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn show(&mut self) -> io::Result<()> {
        let Some(original) = self.session.original() else {
            return writeln!(self.output, "The canvas is empty");
        };
        writeln!(self.output, "Original: {original}")?;
        for overlay in self.session.overlays() {
            writeln!(
                self.output,
                "{} ({}): {}",
                overlay.kind(),
                overlay.transform,
                overlay.outline
            )?;
        }
        Ok(())
    }

    /// Prompts for every parameter of `kind`, asking again when a value is
    /// rejected. Returns `None` if the input ends first.
    fn prompt_parameters(&mut self, kind: TransformKind) -> Result<Option<Vec<f32>>, Error> {
        let parameters = kind.parameters();
        let mut values = Vec::with_capacity(parameters.len());
        for parameter in parameters {
            loop {
                let Some(line) = self.prompt(parameter.prompt)? else {
                    return Ok(None);
                };
                match parameter.parse(&line) {
                    Ok(value) => {
                        values.push(value);
                        break;
                    }
                    Err(err) => writeln!(self.output, "Error: {err}")?,
                }
            }
        }
        Ok(Some(values))
    }

    /// Writes `text` and reads one line of input, returning `None` at the
    /// end of the input.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}
