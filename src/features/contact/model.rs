use std::time::Duration;

/// Minimum trimmed message length accepted by the form.
pub(crate) const MESSAGE_MIN_CHARS: usize = 3;

/// Maximum message length accepted by the form.
pub(crate) const MESSAGE_MAX_CHARS: usize = 200;

/// The input accepts one char of headroom past the maximum so the
/// too-long error can actually surface on submit.
pub(crate) const MESSAGE_INPUT_CAP: usize = MESSAGE_MAX_CHARS + 1;

/// How long the sent toast stays visible.
pub(crate) const TOAST_VISIBLE_FOR: Duration = Duration::from_secs(2);

pub(crate) const ERROR_EMPTY: &str = "Message cannot be empty.";
pub(crate) const ERROR_TOO_SHORT: &str =
    "Message must be at least 3 characters.";
pub(crate) const ERROR_TOO_LONG: &str = "Message cannot exceed 200 characters.";

/// Validate a draft message against the form's length rules. The
/// emptiness and minimum checks apply to the trimmed message; the
/// maximum applies to the raw input.
pub(crate) fn validate_message(message: &str) -> Result<(), &'static str> {
    let trimmed = message.trim();

    if trimmed.is_empty() {
        return Err(ERROR_EMPTY);
    }
    if trimmed.chars().count() < MESSAGE_MIN_CHARS {
        return Err(ERROR_TOO_SHORT);
    }
    if message.chars().count() > MESSAGE_MAX_CHARS {
        return Err(ERROR_TOO_LONG);
    }

    Ok(())
}
