#[derive(Debug, thiserror::Error)]
pub enum ProviderConfigError {
    #[error("{service}: base_url is required for the rest provider")]
    MissingBaseUrl { service: &'static str },
}

pub(crate) fn require_base_url<'a>(
    service: &'static str,
    base_url: Option<&'a str>,
) -> Result<&'a str, ProviderConfigError> {
    base_url.ok_or(ProviderConfigError::MissingBaseUrl { service })
}
