/// AWS credential shaped for process environment variables.
///
/// Plain strings only; choosing the variable names and exporting them into an
/// environment is the caller's responsibility.
#[derive(Debug, Clone, Default)]
pub struct EnvVarCredential {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: String,
}
