/// ProgressReporter port for user-facing progress messages
///
/// Messages go to stderr so that page output on stdout stays clean.
pub trait ProgressReporter {
    /// Reports a progress message
    fn report(&self, message: &str);

    /// Reports progress through a batch of `total` items
    ///
    /// # Arguments
    /// * `current` - Items finished so far
    /// * `total` - Items in the batch
    /// * `message` - Optional message to include
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports an error or warning message
    fn report_error(&self, message: &str);

    /// Reports completion of an operation
    fn report_completion(&self, message: &str);
}
