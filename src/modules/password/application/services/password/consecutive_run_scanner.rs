use crate::password::application::ports::incoming::InvalidArgument;

/// Returns true when `password` contains more than `max_run` identical
/// adjacent characters.
///
/// Single pass over the password's `char`s; no normalization or grapheme
/// segmentation is applied.
pub fn has_excessive_run(password: &str, max_run: usize) -> Result<bool, InvalidArgument> {
    if password.trim().is_empty() {
        return Err(InvalidArgument::BlankPassword);
    }

    if max_run == 0 {
        return Err(InvalidArgument::ZeroRunLength);
    }

    let mut previous: Option<char> = None;
    let mut run = 0usize;

    for current in password.chars() {
        if previous == Some(current) {
            run += 1;
        } else {
            run = 1;
            previous = Some(current);
        }

        if run > max_run {
            return Ok(true);
        }
    }

    Ok(false)
}
