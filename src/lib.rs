//! Execution core of an 8-bit MOS 6502: registers, status flags, a flat 64KB
//! memory and a cycle-budgeted fetch/decode/execute loop.

pub mod config;
pub mod cpu;
pub mod cpu_bus;
pub mod debug;
pub mod emulator;
pub mod error;
pub mod memory;
pub mod savestate;

pub use config::{CpuConfig, FlagPolicy};
pub use cpu::{Cpu, RunSummary};
pub use cpu_bus::Bus;
pub use emulator::Machine;
pub use error::{BusError, CpuError, SaveStateError};
pub use memory::Memory;
