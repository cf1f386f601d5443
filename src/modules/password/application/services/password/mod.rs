pub mod basic_password_policy;
pub mod consecutive_run_scanner;
pub mod policy_config;
pub mod policy_validator;

pub use basic_password_policy::CharacterClassPolicy;
pub use consecutive_run_scanner::has_excessive_run;
pub use policy_config::{PolicyConfiguration, PolicyConfigurationBuilder, PolicyConfigurationError};
pub use policy_validator::{PasswordPolicyValidator, TOO_MANY_CONSECUTIVE_CHARACTERS};
