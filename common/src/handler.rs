//! [`Handler`] abstractions.

/// Executable handler.
///
/// Execution is synchronous: a [`Handler`] is expected to compute its result
/// in place, without suspension points.
pub trait Handler<Args = ()> {
    /// Type of successful [`Handler`] result.
    type Ok;

    /// Type of this [`Handler`] error.
    type Err;

    /// Executes this [`Handler`] with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns [`Handler::Err`] if the execution fails.
    fn execute(&self, args: Args) -> Result<Self::Ok, Self::Err>;
}
