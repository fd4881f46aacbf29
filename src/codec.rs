//! Big-endian integer packing for frame fields.
//!
//! No length checks beyond Rust's slice bounds: callers size the buffer.
//! Every function panics if `buf` is shorter than `offset + width`.

/// Write `n` as 2 big-endian bytes at `buf[offset..offset + 2]`.
pub fn put_be16(buf: &mut [u8], offset: usize, n: u16) {
    buf[offset..offset + 2].copy_from_slice(&n.to_be_bytes());
}

/// Write `n` as 4 big-endian bytes at `buf[offset..offset + 4]`.
pub fn put_be32(buf: &mut [u8], offset: usize, n: u32) {
    buf[offset..offset + 4].copy_from_slice(&n.to_be_bytes());
}

pub fn get_be16(buf: &[u8], offset: usize) -> u16 {
    u16::from_be_bytes([buf[offset], buf[offset + 1]])
}

pub fn get_be32(buf: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        buf[offset],
        buf[offset + 1],
        buf[offset + 2],
        buf[offset + 3],
    ])
}
