use crate::errors::RepositoryError;

pub const FIRST_ORDER_NUMBER: &str = "ORD00001";

const PREFIX: &str = "ORD";

/// Derives the next sequential order number from the most recently created
/// one. The numeric suffix is zero-padded to five digits and keeps growing
/// past ORD99999. A stored value that does not parse as `ORD` + digits is
/// data corruption and fails loudly instead of restarting the sequence.
pub fn next_order_number(last: Option<&str>) -> Result<String, RepositoryError> {
    let Some(last) = last else {
        return Ok(FIRST_ORDER_NUMBER.to_string());
    };

    let digits = last
        .strip_prefix(PREFIX)
        .ok_or_else(|| RepositoryError::CorruptOrderNumber(last.to_string()))?;

    let sequence: u32 = digits
        .parse()
        .map_err(|_| RepositoryError::CorruptOrderNumber(last.to_string()))?;

    Ok(format!("{PREFIX}{:05}", sequence + 1))
}
