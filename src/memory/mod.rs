use crate::cpu_bus::Bus;
use crate::error::BusError;

pub const MEMORY_SIZE: usize = 0x10000;

/// Flat 64KB address space. No mirroring, no mapped I/O.
pub struct Memory {
    pub(crate) ram: Box<[u8]>,
}

impl Memory {
    pub fn new() -> Self {
        Memory {
            ram: vec![0; MEMORY_SIZE].into_boxed_slice(),
        }
    }

    pub fn size(&self) -> usize {
        self.ram.len()
    }

    pub fn read(&self, addr: u32) -> Result<u8, BusError> {
        self.ram
            .get(addr as usize)
            .copied()
            .ok_or(BusError::OutOfRange { address: addr })
    }

    pub fn write(&mut self, addr: u32, data: u8) -> Result<u8, BusError> {
        let slot = self
            .ram
            .get_mut(addr as usize)
            .ok_or(BusError::OutOfRange { address: addr })?;
        *slot = data;
        Ok(data)
    }

    pub fn init(&mut self) {
        self.ram.fill(0);
    }

    /// Copies `program` to `start..`. Nothing is written if the image would
    /// run past the end of memory.
    pub fn load(&mut self, start: u16, program: &[u8]) -> Result<(), BusError> {
        let begin = start as usize;
        let end = begin + program.len();
        if end > self.ram.len() {
            return Err(BusError::OutOfRange {
                address: end as u32 - 1,
            });
        }
        self.ram[begin..end].copy_from_slice(program);
        Ok(())
    }

    // Save state methods
    pub fn get_ram(&self) -> &[u8] {
        &self.ram
    }

    pub fn set_ram(&mut self, ram: &[u8; MEMORY_SIZE]) {
        self.ram.copy_from_slice(ram);
    }
}

impl Default for Memory {
    fn default() -> Self {
        Self::new()
    }
}

impl Bus for Memory {
    fn read(&mut self, addr: u32) -> Result<u8, BusError> {
        Memory::read(self, addr)
    }

    fn write(&mut self, addr: u32, value: u8) -> Result<u8, BusError> {
        Memory::write(self, addr, value)
    }
}
