/// ProgressReporter port for reporting progress during a resolution run
///
/// This port abstracts user feedback (e.g., to stderr) so the use case
/// stays free of terminal handling.
pub trait ProgressReporter {
    /// Reports a step that is starting or under way
    fn report(&self, message: &str);

    /// Reports a warning; the run continues
    fn report_error(&self, message: &str);

    /// Reports completion of the run
    fn report_completion(&self, message: &str);
}
