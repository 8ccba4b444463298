use std::io::Write;

use crate::dictionary::Dictionary;
use crate::error::Result;

/// Writes the dictionary as pretty-printed JSON (two-space indent, native
/// script left unescaped) followed by a newline.
pub fn write_json<W>(dictionary: &Dictionary, mut writer: W) -> Result<()>
where
    W: Write,
{
    serde_json::to_writer_pretty(&mut writer, dictionary).map_err(std::io::Error::from)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Renders the dictionary as pretty-printed JSON.
pub fn to_json_string(dictionary: &Dictionary) -> Result<String> {
    let mut buf = Vec::new();
    write_json(dictionary, &mut buf)?;
    String::from_utf8(buf)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e).into())
}
