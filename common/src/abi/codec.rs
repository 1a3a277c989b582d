use crate::{
    config::{ABI_MAX_STRING_SIZE, ABI_RETURN_PREFIX},
    serializer::{Reader, Writer},
};

use super::AbiError;

/// Encode an ARC4 string: big-endian u16 byte length followed by UTF-8 bytes
pub fn encode_string(value: &str) -> Result<Vec<u8>, AbiError> {
    let mut writer = Writer::new();
    write_string(&mut writer, value)?;
    Ok(writer.bytes())
}

fn write_string(writer: &mut Writer, value: &str) -> Result<(), AbiError> {
    if value.len() > ABI_MAX_STRING_SIZE {
        return Err(AbiError::ValueTooLarge(value.len()));
    }
    writer.write_u16(value.len() as u16);
    writer.write_bytes(value.as_bytes());
    Ok(())
}

fn read_string(reader: &mut Reader) -> Result<String, AbiError> {
    let size = reader.read_u16()? as usize;
    Ok(reader.read_string_with_size(size)?)
}

/// Decode an application argument holding exactly one ARC4 string
pub fn decode_string(bytes: &[u8]) -> Result<String, AbiError> {
    let mut reader = Reader::new(bytes);
    let value = read_string(&mut reader)?;
    if reader.size() != 0 {
        return Err(AbiError::TrailingBytes(reader.size()));
    }
    Ok(value)
}

/// Build the return log for a string result
pub fn encode_return(value: &str) -> Result<Vec<u8>, AbiError> {
    let mut writer = Writer::new();
    writer.write_bytes(&ABI_RETURN_PREFIX);
    write_string(&mut writer, value)?;
    Ok(writer.bytes())
}

/// Extract the string result from a return log
pub fn decode_return(log: &[u8]) -> Result<String, AbiError> {
    match log.strip_prefix(&ABI_RETURN_PREFIX[..]) {
        Some(value) => decode_string(value),
        None => Err(AbiError::MissingReturnPrefix),
    }
}
