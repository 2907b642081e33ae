//! Bounds-checked slice cursor with a per-session byte order.

use crate::error::PaletteError;

/// Byte order for multi-byte integer reads.
///
/// Formats without an explicit order flag (ACT, RIFF PAL) infer this once
/// during the header probe and freeze it for the rest of the decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ByteOrder {
    #[default]
    Big,
    Little,
}

/// Cursor for reading from `&[u8]`.
///
/// Scalar reads honor the session [`ByteOrder`]; raw byte reads never do.
pub(crate) struct Cursor<'a> {
    data: &'a [u8],
    pos: usize,
    order: ByteOrder,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(data: &'a [u8], order: ByteOrder) -> Self {
        Self {
            data,
            pos: 0,
            order,
        }
    }

    pub(crate) fn order(&self) -> ByteOrder {
        self.order
    }

    pub(crate) fn set_order(&mut self, order: ByteOrder) {
        self.order = order;
    }

    pub(crate) fn position(&self) -> usize {
        self.pos
    }

    pub(crate) fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub(crate) fn set_position(&mut self, pos: usize) -> Result<(), PaletteError> {
        if pos > self.data.len() {
            return Err(PaletteError::UnexpectedEof);
        }
        self.pos = pos;
        Ok(())
    }

    /// Seek to `n` bytes before end-of-input.
    pub(crate) fn seek_from_end(&mut self, n: usize) -> Result<(), PaletteError> {
        let pos = self
            .data
            .len()
            .checked_sub(n)
            .ok_or(PaletteError::UnexpectedEof)?;
        self.pos = pos;
        Ok(())
    }

    pub(crate) fn skip(&mut self, n: usize) -> Result<(), PaletteError> {
        let new_pos = self.pos.checked_add(n).ok_or(PaletteError::UnexpectedEof)?;
        if new_pos > self.data.len() {
            return Err(PaletteError::UnexpectedEof);
        }
        self.pos = new_pos;
        Ok(())
    }

    pub(crate) fn read_u8(&mut self) -> Result<u8, PaletteError> {
        if self.pos < self.data.len() {
            let b = self.data[self.pos];
            self.pos += 1;
            Ok(b)
        } else {
            Err(PaletteError::UnexpectedEof)
        }
    }

    pub(crate) fn read_fixed<const N: usize>(&mut self) -> Result<[u8; N], PaletteError> {
        if self.pos + N > self.data.len() {
            return Err(PaletteError::UnexpectedEof);
        }
        let mut buf = [0u8; N];
        buf.copy_from_slice(&self.data[self.pos..self.pos + N]);
        self.pos += N;
        Ok(buf)
    }

    pub(crate) fn get_u16(&mut self) -> Result<u16, PaletteError> {
        let b = self.read_fixed::<2>()?;
        Ok(match self.order {
            ByteOrder::Big => u16::from_be_bytes(b),
            ByteOrder::Little => u16::from_le_bytes(b),
        })
    }

    pub(crate) fn get_i16(&mut self) -> Result<i16, PaletteError> {
        self.get_u16().map(|v| v as i16)
    }

    pub(crate) fn get_i32(&mut self) -> Result<i32, PaletteError> {
        let b = self.read_fixed::<4>()?;
        Ok(match self.order {
            ByteOrder::Big => i32::from_be_bytes(b),
            ByteOrder::Little => i32::from_le_bytes(b),
        })
    }

    pub(crate) fn get_f32(&mut self) -> Result<f32, PaletteError> {
        let b = self.read_fixed::<4>()?;
        Ok(match self.order {
            ByteOrder::Big => f32::from_be_bytes(b),
            ByteOrder::Little => f32::from_le_bytes(b),
        })
    }
}
