//! Interactive front-end: a menu loop reading operator choices and file paths,
//! applying the requested operator and saving the result.

use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use log::{info, warn};

use crate::error::Result as MatrixResult;
use crate::io::{load, save};
use crate::param_guard::ParamGuard;
use crate::SparseMatrix;

pub mod error;

pub use error::SessionError;


const MENU: &str = "\nSelect an operation:\n\
                    1. Addition (+)\n\
                    2. Subtraction (-)\n\
                    3. Multiplication (*)\n\
                    4. Exit\n";

/// Binary operator selectable from the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
}

impl Operation {
    /// Maps a menu choice (`"1"` to `"3"`) to its operator.
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Operation::Add),
            "2" => Some(Operation::Subtract),
            "3" => Some(Operation::Multiply),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operation::Add => "Addition",
            Operation::Subtract => "Subtraction",
            Operation::Multiply => "Multiplication",
        }
    }

    pub fn apply(
        self,
        lhs: &SparseMatrix<i64>,
        rhs: &SparseMatrix<i64>,
    ) -> MatrixResult<SparseMatrix<i64>> {
        match self {
            Operation::Add => lhs.add(rhs),
            Operation::Subtract => lhs.subtract(rhs),
            Operation::Multiply => lhs.multiply(rhs),
        }
    }
}

/// Outcome counters of an interactive run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub completed: usize,
    pub failed: usize,
}

/// Run trait
///
/// Drives an interactive session reading the operator's answers from `input`
/// and writing prompts and reports to `output`, until the operator exits or
/// the input ends.
pub trait Run {
    fn run<R: BufRead, W: Write>(&self, input: R, output: W) -> Result<RunSummary, SessionError>;
}

/// A verified session configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SessionValidParams {
    input_dir: PathBuf,
    output_path: PathBuf,
}

impl SessionValidParams {
    pub fn input_dir(&self) -> &Path {
        &self.input_dir
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    /// Resolves a user supplied path: absolute paths are kept, relative ones
    /// are taken relative to the input directory.
    pub fn resolve(&self, user_path: &str) -> PathBuf {
        let path = Path::new(user_path);
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.input_dir.join(path)
        }
    }
}

/// A session configuration during construction
#[derive(Debug, Clone, PartialEq)]
pub struct SessionParams(SessionValidParams);

impl Default for SessionParams {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionParams {
    /// Create the default session configuration
    pub fn new() -> SessionParams {
        Self(SessionValidParams {
            input_dir: PathBuf::from("sample_inputs"),
            output_path: PathBuf::from("result.txt"),
        })
    }

    /// Set the directory relative input paths are resolved against.
    ///
    /// Defaults to `sample_inputs` if not set.
    pub fn input_dir<P: Into<PathBuf>>(mut self, input_dir: P) -> Self {
        self.0.input_dir = input_dir.into();
        self
    }

    /// Set the file every result is written to.
    ///
    /// Defaults to `result.txt` if not set.
    pub fn output_path<P: Into<PathBuf>>(mut self, output_path: P) -> Self {
        self.0.output_path = output_path.into();
        self
    }
}

impl ParamGuard for SessionParams {
    type Checked = SessionValidParams;
    type Error = SessionError;

    /// Validate the configuration
    fn check_ref(&self) -> Result<&Self::Checked, Self::Error> {
        if self.0.output_path.as_os_str().is_empty() {
            Err(SessionError::InvalidOutputPath)
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}

/// Entry point of the interactive session.
pub struct Session;

impl Session {
    /// Creates the default session configuration
    pub fn params() -> SessionParams {
        SessionParams::new()
    }
}

/// Prompts until a non-empty line is read. Returns `None` at end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
) -> std::io::Result<Option<String>> {
    loop {
        write!(output, "{}", message)?;
        output.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim();
        if !line.is_empty() {
            return Ok(Some(line.to_string()));
        }
        writeln!(output, "Input cannot be empty. Please try again.")?;
    }
}

impl SessionValidParams {
    fn load_operand<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: &mut W,
        ordinal: &str,
    ) -> Result<Option<SparseMatrix<i64>>, SessionError> {
        let message = format!("Enter the file path for the {} matrix: ", ordinal);
        let user_path = match prompt(input, output, &message)? {
            Some(p) => p,
            None => return Ok(None),
        };
        let path = self.resolve(&user_path);
        writeln!(
            output,
            "Attempting to load {} matrix from: {}",
            ordinal,
            path.display()
        )?;
        let matrix = load(&path)?;
        writeln!(output, "Successfully loaded {} matrix.", ordinal)?;
        Ok(Some(matrix))
    }

    /// Runs one operator. `Ok(None)` means the input ended mid-way.
    fn perform<R: BufRead, W: Write>(
        &self,
        operation: Operation,
        input: &mut R,
        output: &mut W,
    ) -> Result<Option<()>, SessionError> {
        let lhs = match self.load_operand(input, output, "first")? {
            Some(m) => m,
            None => return Ok(None),
        };
        let rhs = match self.load_operand(input, output, "second")? {
            Some(m) => m,
            None => return Ok(None),
        };

        writeln!(output, "\nPerforming {}...", operation.name())?;
        let result = operation.apply(&lhs, &rhs)?;
        save(&self.output_path, &result)?;
        writeln!(
            output,
            "{} successful. Result saved to {}",
            operation.name(),
            self.output_path.display()
        )?;
        Ok(Some(()))
    }
}

impl Run for SessionValidParams {
    fn run<R: BufRead, W: Write>(
        &self,
        mut input: R,
        mut output: W,
    ) -> Result<RunSummary, SessionError> {
        let mut summary = RunSummary::default();
        writeln!(output, "Sparse Matrix Operations\n------------------------")?;

        loop {
            write!(output, "{}", MENU)?;
            let choice = match prompt(&mut input, &mut output, "Enter your choice (1-4): ")? {
                Some(c) => c,
                None => break,
            };
            if choice == "4" {
                break;
            }
            let operation = match Operation::from_choice(&choice) {
                Some(op) => op,
                None => {
                    writeln!(
                        output,
                        "Invalid choice. Please enter a number between 1 and 3, or 4 to exit."
                    )?;
                    continue;
                }
            };

            match self.perform(operation, &mut input, &mut output) {
                Ok(Some(())) => summary.completed += 1,
                Ok(None) => break,
                Err(SessionError::Io(e)) => return Err(SessionError::Io(e)),
                Err(e) => {
                    warn!("{} failed: {}", operation.name(), e);
                    writeln!(output, "Error: {}", e)?;
                    summary.failed += 1;
                }
            }
        }

        writeln!(output, "Exiting program.")?;
        info!(
            "session finished: {} completed, {} failed",
            summary.completed, summary.failed
        );
        Ok(summary)
    }
}
