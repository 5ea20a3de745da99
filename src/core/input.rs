//! Reading the message to tokenize from the command line or stdin, within a size bound.

use std::io::{self, Read};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("Failed to read message: {0}")]
    Io(#[from] io::Error),
    #[error("message is over {limit} bytes (raise MEWTAGS_MAX_INPUT_BYTES to accept it)")]
    TooLarge { limit: usize },
}

/// Resolve the message argument: `-` reads stdin, anything else is the message itself.
pub fn read_message(arg: &str, max_bytes: usize) -> Result<String, InputError> {
    if arg == "-" {
        read_bounded(io::stdin().lock(), max_bytes)
    } else {
        check_size(arg.len(), max_bytes)?;
        Ok(arg.to_string())
    }
}

/// Read all of `reader`, stopping with an error once more than `max_bytes` arrive.
pub fn read_bounded<R: Read>(reader: R, max_bytes: usize) -> Result<String, InputError> {
    let mut bytes = Vec::new();
    let limit = u64::try_from(max_bytes).unwrap_or(u64::MAX).saturating_add(1);
    reader.take(limit).read_to_end(&mut bytes)?;
    check_size(bytes.len(), max_bytes)?;
    log::info!("read {} bytes from stdin", bytes.len());
    String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e).into())
}

fn check_size(size: usize, limit: usize) -> Result<(), InputError> {
    if size > limit {
        return Err(InputError::TooLarge { limit });
    }
    Ok(())
}
