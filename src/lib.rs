//! Shapes for handing already-obtained AWS temporary credentials to the tools
//! that consume them: the `credential_process` JSON protocol, the shared
//! credentials file, process environment variables, or nothing at all.
//!
//! Obtaining credentials (STS calls, prompts, config discovery) is the caller's
//! job. This crate only projects a populated [`CredentialContainer`] into one of
//! the output shapes and serializes the shapes that have a wire contract.

pub mod container;
pub mod env;
pub mod file;
pub mod process;

pub use container::CredentialContainer;
pub use env::EnvVarCredential;
pub use file::CredsFileCredential;
pub use process::ProcessCredential;

/// Any of the credential output shapes, as one opaque value.
///
/// The variant set is closed: downstream code that only needs "something to
/// render" can hold a `Credential` without knowing which shape it is.
#[derive(Debug, Clone)]
pub enum Credential {
    /// Shape for process environment variables
    EnvVar(EnvVarCredential),
    /// Shape for the shared AWS credentials file
    CredsFile(CredsFileCredential),
    /// Shape for the `credential_process` JSON protocol
    Process(ProcessCredential),
    /// Sentinel meaning "emit nothing"
    Noop,
}

impl Credential {
    /// Every shape counts as a credential, including [`Credential::Noop`].
    /// There is no invalid state at this layer; validating field content is
    /// the responsibility of whoever populated the container.
    pub fn is_credential(&self) -> bool {
        true
    }
}

impl From<EnvVarCredential> for Credential {
    fn from(c: EnvVarCredential) -> Self {
        Credential::EnvVar(c)
    }
}

impl From<CredsFileCredential> for Credential {
    fn from(c: CredsFileCredential) -> Self {
        Credential::CredsFile(c)
    }
}

impl From<ProcessCredential> for Credential {
    fn from(c: ProcessCredential) -> Self {
        Credential::Process(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_variant_is_a_credential() {
        let variants = [
            Credential::EnvVar(EnvVarCredential::default()),
            Credential::CredsFile(CredsFileCredential::default()),
            Credential::Process(ProcessCredential::default()),
            Credential::Noop,
        ];

        for variant in variants {
            assert!(variant.is_credential());
        }
    }

    #[test]
    fn test_from_concrete_variants() {
        let cred: Credential = ProcessCredential::default().into();
        assert!(matches!(cred, Credential::Process(_)));

        let cred: Credential = EnvVarCredential::default().into();
        assert!(matches!(cred, Credential::EnvVar(_)));

        let cred: Credential = CredsFileCredential::default().into();
        assert!(matches!(cred, Credential::CredsFile(_)));
    }
}
