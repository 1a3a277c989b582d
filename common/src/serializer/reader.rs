use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReaderError {
    #[error("Invalid size")]
    InvalidSize,
    #[error("Invalid value")]
    InvalidValue,
    #[error("Invalid hex")]
    InvalidHex,
    #[error("Invalid UTF-8 string")]
    InvalidUtf8,
}

// Big-endian cursor over a borrowed buffer
pub struct Reader<'a> {
    bytes: &'a [u8],
    total: usize,
}

impl<'a> Reader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, total: 0 }
    }

    pub fn read_bytes_ref(&mut self, n: usize) -> Result<&'a [u8], ReaderError> {
        if n > self.size() {
            return Err(ReaderError::InvalidSize);
        }

        let bytes = &self.bytes[self.total..self.total + n];
        self.total += n;
        Ok(bytes)
    }

    pub fn read_bytes<const N: usize>(&mut self) -> Result<[u8; N], ReaderError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes_ref(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, ReaderError> {
        Ok(self.read_bytes::<1>()?[0])
    }

    pub fn read_u16(&mut self) -> Result<u16, ReaderError> {
        Ok(u16::from_be_bytes(self.read_bytes()?))
    }

    pub fn read_u64(&mut self) -> Result<u64, ReaderError> {
        Ok(u64::from_be_bytes(self.read_bytes()?))
    }

    pub fn read_bool(&mut self) -> Result<bool, ReaderError> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            _ => Err(ReaderError::InvalidValue),
        }
    }

    pub fn read_string_with_size(&mut self, size: usize) -> Result<String, ReaderError> {
        let bytes = self.read_bytes_ref(size)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| ReaderError::InvalidUtf8)
    }

    // u64 length header followed by UTF-8 bytes
    pub fn read_string(&mut self) -> Result<String, ReaderError> {
        let size = usize::try_from(self.read_u64()?).map_err(|_| ReaderError::InvalidSize)?;
        self.read_string_with_size(size)
    }

    // Bytes left to read
    pub fn size(&self) -> usize {
        self.bytes.len() - self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_integers_big_endian() -> Result<(), ReaderError> {
        let bytes = [0x01, 0x02, 0, 0, 0, 0, 0, 0, 0, 0x03];
        let mut reader = Reader::new(&bytes);
        assert_eq!(reader.read_u16()?, 0x0102);
        assert_eq!(reader.size(), 8);
        assert_eq!(reader.read_u64()?, 3);
        assert_eq!(reader.size(), 0);
        Ok(())
    }

    #[test]
    fn test_read_past_end() {
        let mut reader = Reader::new(&[0x00]);
        assert_eq!(reader.read_u16(), Err(ReaderError::InvalidSize));
        // Failed reads do not consume input
        assert_eq!(reader.size(), 1);
    }

    #[test]
    fn test_read_string_huge_header() {
        let bytes = u64::MAX.to_be_bytes();
        let mut reader = Reader::new(&bytes);
        assert_eq!(reader.read_string(), Err(ReaderError::InvalidSize));
    }

    #[test]
    fn test_read_string_invalid_utf8() {
        let mut bytes = 2u64.to_be_bytes().to_vec();
        bytes.extend_from_slice(&[0xc3, 0x28]);
        let mut reader = Reader::new(&bytes);
        assert_eq!(reader.read_string(), Err(ReaderError::InvalidUtf8));
    }
}
