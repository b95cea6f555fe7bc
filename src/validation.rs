use thiserror::Error;

pub const MIN_NAME_CHARS: usize = 3;
pub const MAX_NAME_CHARS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NameError {
    #[error("Habit name is required")]
    Required,

    #[error("Habit name must be at least 3 characters")]
    TooShort,

    #[error("Habit name must be at most 50 characters")]
    TooLong,
}

/// Checks a raw form value and returns it trimmed.
pub fn validate_name(raw: &str) -> Result<&str, NameError> {
    let name = raw.trim();
    let chars = name.chars().count();
    if chars == 0 {
        Err(NameError::Required)
    } else if chars < MIN_NAME_CHARS {
        Err(NameError::TooShort)
    } else if chars > MAX_NAME_CHARS {
        Err(NameError::TooLong)
    } else {
        Ok(name)
    }
}

/// Submit is allowed only for a non-empty valid name with nothing in flight.
pub fn can_submit(raw: &str, in_flight: bool) -> bool {
    !in_flight && validate_name(raw).is_ok()
}
