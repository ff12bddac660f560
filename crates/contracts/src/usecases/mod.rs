pub mod common;
pub mod u501_generate_certificate;
pub mod u502_verify_certificate;
pub mod u503_ask_assistant;

#[cfg(test)]
mod tests {
    use super::common::UseCaseMetadata;
    use super::u501_generate_certificate::GenerateCertificate;
    use super::u502_verify_certificate::VerifyCertificate;
    use super::u503_ask_assistant::AskAssistant;

    #[test]
    fn test_service_routes() {
        assert_eq!(GenerateCertificate::endpoint(), "/generate-certificate");
        assert_eq!(VerifyCertificate::endpoint(), "/verify-certificate");
        assert_eq!(AskAssistant::endpoint(), "/chatbot");
    }

    #[test]
    fn test_display_names() {
        assert_eq!(GenerateCertificate::display_name(), "Generate Certificate");
        assert_eq!(VerifyCertificate::display_name(), "Verify Certificate");
        assert_eq!(AskAssistant::display_name(), "Certificate Assistant");
    }
}
