//! Big-endian reads from the header block.

/// Read a most-significant-byte-first word.
#[inline]
pub fn be_u32(data: &[u8], at: usize) -> u32 {
    let mut word = [0; 4];
    word.copy_from_slice(&data[at..(at + 4)]);
    u32::from_be_bytes(word)
}

/// Copy a fixed-width field out of the block.
#[inline]
pub fn array<const N: usize>(data: &[u8], at: usize) -> [u8; N] {
    let mut field = [0; N];
    field.copy_from_slice(&data[at..(at + N)]);
    field
}

#[inline]
pub const fn hi(val: u32) -> u16 {
    (val >> 16) as u16
}
