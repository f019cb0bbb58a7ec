use bitstream_io::{BigEndian, BitRead, BitReader, BitWrite, BitWriter};

/// An ordered sequence of single bits, bytes are expanded most significant bit first.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BitSequence(Vec<bool>);

impl BitSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bits: usize) -> Self {
        Self(Vec::with_capacity(bits))
    }

    /// expands every byte into 8 bits, most significant bit first
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut reader = BitReader::endian(bytes, BigEndian);

        Self(
            (0..bytes.len() << 3)
                .map_while(|_| reader.read_bit().ok())
                .collect(),
        )
    }

    /// packs the bits back into bytes, a trailing partial byte is dropped
    pub fn to_bytes(&self) -> std::io::Result<Vec<u8>> {
        let full_bytes = self.0.len() >> 3;
        let mut writer = BitWriter::endian(Vec::with_capacity(full_bytes), BigEndian);
        for bit in self.0.iter().take(full_bytes << 3) {
            writer.write_bit(*bit)?;
        }

        Ok(writer.into_writer())
    }

    pub fn push(&mut self, bit: bool) {
        self.0.push(bit);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

impl From<Vec<bool>> for BitSequence {
    fn from(bits: Vec<bool>) -> Self {
        Self(bits)
    }
}

impl FromIterator<bool> for BitSequence {
    fn from_iter<T: IntoIterator<Item = bool>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}
