use thiserror::Error;

/// Failure reported by a [`Bus`](crate::cpu_bus::Bus) access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BusError {
    #[error("address ${address:05X} is outside the addressable space")]
    OutOfRange { address: u32 },
}

/// Non-fatal conditions raised while stepping the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CpuError {
    #[error("unknown opcode ${opcode:02X} at ${pc:04X}")]
    UnknownOpcode { opcode: u8, pc: u16 },
    #[error("bus error: {0}")]
    Bus(#[from] BusError),
}

#[derive(Debug, Error)]
pub enum SaveStateError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serialize error: {0}")]
    Encode(#[from] bincode::Error),
    #[error("save state version {found} is not supported (current: {current})")]
    UnsupportedVersion { found: u32, current: u32 },
    #[error("save state memory image is {0} bytes, expected 65536")]
    MemorySize(usize),
}
