use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but cannot be parsed.
    #[error("Invalid value for environment variable {name}: '{value}' ({reason})")]
    InvalidValue {
        /// Name of the offending variable
        name: String,
        /// Raw value as read from the environment
        value: String,
        /// What was expected instead
        reason: String,
    },

    /// A role ID is configured both as a department role and as a status role,
    /// or is used by more than one department.
    #[error("Role {role_id} is configured more than once ({usage})")]
    OverlappingRoles {
        /// The duplicated role snowflake
        role_id: u64,
        /// Where the duplicate was found
        usage: String,
    },
}
