use std::env;
use std::str::FromStr;

const DEFAULT_MIN_LENGTH: usize = 12;
const DEFAULT_MAX_LENGTH: usize = 128;
const DEFAULT_MAX_CONSECUTIVE_CHARS: usize = 3;
const DEFAULT_REQUIRED_UNIQUE_CHARS: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyConfigurationError {
    #[error("min_length ({min}) must not exceed max_length ({max})")]
    MinExceedsMax { min: usize, max: usize },

    #[error("max_consecutive_identical_chars must be at least 1")]
    ZeroConsecutiveLimit,

    #[error("required_unique_chars ({unique}) must not exceed max_length ({max})")]
    UniqueExceedsMax { unique: usize, max: usize },

    #[error("Invalid value for {name}: {value}")]
    InvalidValue { name: &'static str, value: String },
}

/// Validated, immutable password thresholds. Built once at startup and shared
/// read-only across validation calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyConfiguration {
    min_length: usize,
    max_length: usize,
    require_digit: bool,
    require_lowercase: bool,
    require_uppercase: bool,
    require_symbol: bool,
    max_consecutive_identical_chars: usize,
    required_unique_chars: usize,
}

impl PolicyConfiguration {
    pub fn builder() -> PolicyConfigurationBuilder {
        PolicyConfigurationBuilder::default()
    }

    /// 25..=255 characters, every character class, no repeated neighbours.
    pub fn strict() -> Self {
        Self {
            min_length: 25,
            max_length: 255,
            require_digit: true,
            require_lowercase: true,
            require_uppercase: true,
            require_symbol: true,
            max_consecutive_identical_chars: 1,
            required_unique_chars: DEFAULT_REQUIRED_UNIQUE_CHARS,
        }
    }

    /// Load the policy from `PASSWORD_*` environment variables.
    /// Unset variables fall back to the builder defaults.
    pub fn from_env() -> Result<Self, PolicyConfigurationError> {
        dotenvy::dotenv().ok(); // Load environment variables if available

        let defaults = PolicyConfigurationBuilder::default();

        PolicyConfigurationBuilder {
            min_length: env_or("PASSWORD_MIN_LENGTH", defaults.min_length)?,
            max_length: env_or("PASSWORD_MAX_LENGTH", defaults.max_length)?,
            require_digit: env_or("PASSWORD_REQUIRE_DIGIT", defaults.require_digit)?,
            require_lowercase: env_or("PASSWORD_REQUIRE_LOWERCASE", defaults.require_lowercase)?,
            require_uppercase: env_or("PASSWORD_REQUIRE_UPPERCASE", defaults.require_uppercase)?,
            require_symbol: env_or("PASSWORD_REQUIRE_SYMBOL", defaults.require_symbol)?,
            max_consecutive_identical_chars: env_or(
                "PASSWORD_MAX_CONSECUTIVE_CHARS",
                defaults.max_consecutive_identical_chars,
            )?,
            required_unique_chars: env_or(
                "PASSWORD_REQUIRED_UNIQUE_CHARS",
                defaults.required_unique_chars,
            )?,
        }
        .build()
    }

    pub fn min_length(&self) -> usize {
        self.min_length
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    pub fn require_digit(&self) -> bool {
        self.require_digit
    }

    pub fn require_lowercase(&self) -> bool {
        self.require_lowercase
    }

    pub fn require_uppercase(&self) -> bool {
        self.require_uppercase
    }

    pub fn require_symbol(&self) -> bool {
        self.require_symbol
    }

    pub fn max_consecutive_identical_chars(&self) -> usize {
        self.max_consecutive_identical_chars
    }

    pub fn required_unique_chars(&self) -> usize {
        self.required_unique_chars
    }

    /// Sets the run limit without builder validation.
    #[cfg(test)]
    pub(crate) fn with_run_limit_unchecked(mut self, limit: usize) -> Self {
        self.max_consecutive_identical_chars = limit;
        self
    }
}

fn env_or<T: FromStr>(name: &'static str, default: T) -> Result<T, PolicyConfigurationError> {
    match env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| PolicyConfigurationError::InvalidValue { name, value }),
        Err(_) => Ok(default),
    }
}

#[derive(Debug, Clone)]
pub struct PolicyConfigurationBuilder {
    min_length: usize,
    max_length: usize,
    require_digit: bool,
    require_lowercase: bool,
    require_uppercase: bool,
    require_symbol: bool,
    max_consecutive_identical_chars: usize,
    required_unique_chars: usize,
}

impl Default for PolicyConfigurationBuilder {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            require_digit: true,
            require_lowercase: true,
            require_uppercase: true,
            require_symbol: true,
            max_consecutive_identical_chars: DEFAULT_MAX_CONSECUTIVE_CHARS,
            required_unique_chars: DEFAULT_REQUIRED_UNIQUE_CHARS,
        }
    }
}

impl PolicyConfigurationBuilder {
    pub fn min_length(mut self, value: usize) -> Self {
        self.min_length = value;
        self
    }

    pub fn max_length(mut self, value: usize) -> Self {
        self.max_length = value;
        self
    }

    pub fn require_digit(mut self, value: bool) -> Self {
        self.require_digit = value;
        self
    }

    pub fn require_lowercase(mut self, value: bool) -> Self {
        self.require_lowercase = value;
        self
    }

    pub fn require_uppercase(mut self, value: bool) -> Self {
        self.require_uppercase = value;
        self
    }

    pub fn require_symbol(mut self, value: bool) -> Self {
        self.require_symbol = value;
        self
    }

    pub fn max_consecutive_identical_chars(mut self, value: usize) -> Self {
        self.max_consecutive_identical_chars = value;
        self
    }

    pub fn required_unique_chars(mut self, value: usize) -> Self {
        self.required_unique_chars = value;
        self
    }

    pub fn build(self) -> Result<PolicyConfiguration, PolicyConfigurationError> {
        if self.min_length > self.max_length {
            return Err(PolicyConfigurationError::MinExceedsMax {
                min: self.min_length,
                max: self.max_length,
            });
        }

        if self.max_consecutive_identical_chars < 1 {
            return Err(PolicyConfigurationError::ZeroConsecutiveLimit);
        }

        if self.required_unique_chars > self.max_length {
            return Err(PolicyConfigurationError::UniqueExceedsMax {
                unique: self.required_unique_chars,
                max: self.max_length,
            });
        }

        Ok(PolicyConfiguration {
            min_length: self.min_length,
            max_length: self.max_length,
            require_digit: self.require_digit,
            require_lowercase: self.require_lowercase,
            require_uppercase: self.require_uppercase,
            require_symbol: self.require_symbol,
            max_consecutive_identical_chars: self.max_consecutive_identical_chars,
            required_unique_chars: self.required_unique_chars,
        })
    }
}
