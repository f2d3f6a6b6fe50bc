//! Trait representing the minimal bus interface required by the 6502 core.

use crate::error::BusError;

pub trait Bus {
    fn read(&mut self, addr: u32) -> Result<u8, BusError>;
    fn write(&mut self, addr: u32, value: u8) -> Result<u8, BusError>;

    /// Little-endian word at `addr`, `addr + 1`.
    fn read_u16(&mut self, addr: u32) -> Result<u16, BusError> {
        let lo = self.read(addr)? as u16;
        let hi = self.read(addr.wrapping_add(1))? as u16;
        Ok((hi << 8) | lo)
    }
}
