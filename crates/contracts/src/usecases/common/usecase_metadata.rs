/// UseCase identification: heading and the service route it calls
pub trait UseCaseMetadata {
    /// Human readable name for headings
    fn display_name() -> &'static str;

    /// Service path relative to the backend base URL (e.g. "/generate-certificate")
    fn endpoint() -> &'static str;
}
