use std::error::Error;
use std::io::{BufRead, Write};

use crate::session::{Run, RunSummary, SessionError};

/// A set of parameters whose values have not been checked for validity. A
/// reference to the checked parameters can only be obtained after checking has
/// completed. If the [`Run`] trait has been implemented on the checked
/// parameters, it is also implemented on the unchecked parameters with the
/// checking step done automatically.
///
/// The validation done in `check_ref()` and `check()` should be identical.
pub trait ParamGuard {
    /// The checked parameters
    type Checked;
    /// Error type resulting from failed parameter checking
    type Error: Error;

    /// Checks the parameters and returns a reference to the checked parameters
    /// if successful
    fn check_ref(&self) -> Result<&Self::Checked, Self::Error>;

    /// Checks the parameters and returns the checked parameters if successful
    fn check(self) -> Result<Self::Checked, Self::Error>;

    /// Calls `check()` and unwraps the result
    fn check_unwrap(self) -> Self::Checked
    where
        Self: Sized,
    {
        self.check().unwrap()
    }
}

/// Performs checking step and calls `run` on the checked parameters. If
/// checking failed, the checking error is converted to [`SessionError`] and
/// returned.
impl<P: ParamGuard> Run for P
where
    P::Checked: Run,
    SessionError: From<P::Error>,
{
    fn run<R: BufRead, W: Write>(&self, input: R, output: W) -> Result<RunSummary, SessionError> {
        let checked = self.check_ref()?;
        checked.run(input, output)
    }
}
