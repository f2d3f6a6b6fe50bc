mod addressing;
pub mod opcodes;
mod registers;


pub use addressing::page_crossed;
pub use registers::{Register, Registers, StatusFlags};

use crate::config::{CpuConfig, FlagPolicy};
use crate::cpu_bus::Bus;
use crate::error::{BusError, CpuError};
use crate::memory::Memory;
use crate::savestate::CpuSaveState;
use addressing::Access;
use opcodes::{Mode, Operation};

/// Faults kept in a [`RunSummary`]; later ones are only counted.
pub const MAX_RECORDED_FAULTS: usize = 16;

/// Outcome of one [`Cpu::execute`] call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Cycles charged, including any overshoot past the budget.
    pub consumed: i32,
    /// Budget left when the loop stopped; zero or negative.
    pub remaining: i32,
    pub instructions: u32,
    /// Every fault raised during the run.
    pub fault_count: u32,
    /// The first [`MAX_RECORDED_FAULTS`] faults, in order.
    pub faults: Vec<CpuError>,
}

pub struct Cpu {
    pub regs: Registers,
    pub status: StatusFlags,
    config: CpuConfig,
    cycles: u64,
}

impl Cpu {
    pub fn new() -> Self {
        Self::with_config(CpuConfig::default())
    }

    pub fn with_config(config: CpuConfig) -> Self {
        let mut cpu = Cpu {
            regs: Registers::default(),
            status: StatusFlags::empty(),
            config,
            cycles: 0,
        };
        cpu.reset_registers();
        cpu
    }

    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    pub fn set_flag_policy(&mut self, policy: FlagPolicy) {
        self.config.flag_policy = policy;
    }

    /// Total cycles charged since construction.
    pub fn total_cycles(&self) -> u64 {
        self.cycles
    }

    pub fn reset(&mut self, memory: &mut Memory) {
        self.reset_registers();
        memory.init();
        log::debug!("reset: pc=${:04X}", self.regs.pc);
    }

    fn reset_registers(&mut self) {
        self.regs = Registers {
            a: 0,
            x: 0,
            y: 0,
            sp: 0xFF,
            pc: self.config.reset_vector,
        };
        self.status = StatusFlags::empty();
    }

    /// Runs instructions until `cycles` is used up. An instruction that
    /// starts with budget left always completes, so the budget may end
    /// negative.
    pub fn execute(&mut self, cycles: i32, bus: &mut dyn Bus) -> RunSummary {
        let mut budget = cycles;
        let mut summary = RunSummary::default();

        while budget > 0 {
            match self.step(&mut budget, bus) {
                Ok(()) => summary.instructions += 1,
                Err(err) => {
                    summary.fault_count = summary.fault_count.saturating_add(1);
                    if summary.faults.len() < MAX_RECORDED_FAULTS {
                        log::warn!("{}", err);
                        summary.faults.push(err);
                    } else {
                        log::trace!("{}", err);
                    }
                }
            }
        }

        summary.consumed = cycles.saturating_sub(budget);
        summary.remaining = budget;
        self.cycles += summary.consumed as u64;
        log::debug!(
            "halted: {} cycles, {} instructions, {} faults, pc=${:04X}",
            summary.consumed,
            summary.instructions,
            summary.fault_count,
            self.regs.pc
        );
        summary
    }

    /// Fetches, decodes and executes one instruction.
    pub fn step(&mut self, budget: &mut i32, bus: &mut dyn Bus) -> Result<(), CpuError> {
        let pc = self.regs.pc;
        let opcode = self.fetch_byte(budget, bus)?;
        log::trace!("fetched ${:02X} at ${:04X}", opcode, pc);

        let Some(op) = opcodes::decode(opcode) else {
            return Err(CpuError::UnknownOpcode { opcode, pc });
        };

        match op.operation {
            Operation::Load(reg) => self.load(reg, op.mode, budget, bus)?,
            Operation::Store(reg) => self.store(reg, op.mode, budget, bus)?,
        }
        Ok(())
    }

    fn load(&mut self, reg: Register, mode: Mode, budget: &mut i32, bus: &mut dyn Bus) -> Result<(), BusError> {
        let value = self.read_operand(mode, budget, bus)?;
        self.regs.set(reg, value);
        self.update_load_flags(value);
        Ok(())
    }

    fn store(&mut self, reg: Register, mode: Mode, budget: &mut i32, bus: &mut dyn Bus) -> Result<(), BusError> {
        let addr = self.resolve_address(mode, Access::Write, budget, bus)?;
        let value = self.regs.get(reg);
        self.write_to(addr, value, budget, bus)
    }

    fn update_load_flags(&mut self, value: u8) {
        match self.config.flag_policy {
            FlagPolicy::SetOnly => {
                if value & 0x80 != 0 {
                    self.status.insert(StatusFlags::NEGATIVE);
                }
                if value == 0 {
                    self.status.insert(StatusFlags::ZERO);
                }
            }
            FlagPolicy::Hardware => {
                self.status.set(StatusFlags::ZERO, value == 0);
                self.status.set(StatusFlags::NEGATIVE, value & 0x80 != 0);
            }
        }
    }

    // Save state methods
    pub fn save_state(&self) -> CpuSaveState {
        CpuSaveState {
            a: self.regs.a,
            x: self.regs.x,
            y: self.regs.y,
            sp: self.regs.sp,
            pc: self.regs.pc,
            p: self.status.bits(),
            cycles: self.cycles,
        }
    }

    pub fn load_state(&mut self, state: &CpuSaveState) {
        self.regs = Registers {
            a: state.a,
            x: state.x,
            y: state.y,
            sp: state.sp,
            pc: state.pc,
        };
        self.status = StatusFlags::from_bits_truncate(state.p);
        self.cycles = state.cycles;
    }
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}
