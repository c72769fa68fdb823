pub mod chars;
pub mod cursor;
pub mod rules;

#[cfg(test)]
mod test;

pub use cursor::Cursor;

use crate::errors::SDPResult;

/// Runs `read` over the whole of `text`, leftovers are an error.
pub fn read_all<'a, T>(
    text: &'a str,
    read: impl FnOnce(&mut Cursor<'a>) -> SDPResult<T>,
) -> SDPResult<T> {
    let mut cursor = Cursor::new(text);
    let value = read(&mut cursor)?;
    cursor.expect_end()?;
    Ok(value)
}
