use stack_roast_errors::AppError;
use uuid::Uuid;

pub(crate) fn required(value: Option<String>, field: &str, max_len: usize) -> Result<String, AppError> {
    let value = value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::validation(format!("Missing required field: {field}")))?;
    check_len(&value, field, max_len)?;
    Ok(value)
}

pub(crate) fn optional(
    value: Option<String>,
    field: &str,
    max_len: usize,
) -> Result<Option<String>, AppError> {
    match value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty()) {
        Some(v) => {
            check_len(&v, field, max_len)?;
            Ok(Some(v))
        }
        None => Ok(None),
    }
}

pub(crate) fn uuid(value: Option<String>, field: &str) -> Result<Uuid, AppError> {
    let raw = required(value, field, 64)?;
    Uuid::parse_str(&raw).map_err(|_| AppError::validation(format!("Invalid {field}: {raw}")))
}

fn check_len(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.chars().count() > max_len {
        return Err(AppError::validation(format!(
            "{field} cannot exceed {max_len} characters"
        )));
    }
    Ok(())
}
