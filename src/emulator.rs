use crate::config::CpuConfig;
use crate::cpu::{Cpu, RunSummary};
use crate::error::{BusError, SaveStateError};
use crate::memory::{Memory, MEMORY_SIZE};
use crate::savestate::SaveState;

/// Called after every [`Machine::run`] with the halted CPU.
pub type Observer = Box<dyn FnMut(&Cpu, &RunSummary)>;

/// One emulated machine: a CPU and the memory it owns.
pub struct Machine {
    cpu: Cpu,
    memory: Memory,
    observer: Option<Observer>,
}

impl Machine {
    pub fn new(config: CpuConfig) -> Self {
        Self {
            cpu: Cpu::with_config(config),
            memory: Memory::new(),
            observer: None,
        }
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    pub fn set_observer<F>(&mut self, observer: F)
    where
        F: FnMut(&Cpu, &RunSummary) + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_observer(&mut self) {
        self.observer = None;
    }

    pub fn reset(&mut self) {
        self.cpu.reset(&mut self.memory);
    }

    pub fn load_program(&mut self, start: u16, program: &[u8]) -> Result<(), BusError> {
        self.memory.load(start, program)
    }

    /// Places `program` where execution begins after reset.
    pub fn load_at_reset_vector(&mut self, program: &[u8]) -> Result<(), BusError> {
        let start = self.cpu.config().reset_vector;
        self.memory.load(start, program)
    }

    pub fn run(&mut self, cycles: i32) -> RunSummary {
        let summary = self.cpu.execute(cycles, &mut self.memory);
        if let Some(observer) = self.observer.as_mut() {
            observer(&self.cpu, &summary);
        }
        summary
    }

    pub fn save_state(&self) -> SaveState {
        SaveState::new(self.cpu.save_state(), self.memory.get_ram().to_vec())
    }

    pub fn load_state(&mut self, state: &SaveState) -> Result<(), SaveStateError> {
        let ram: &[u8; MEMORY_SIZE] = state
            .memory
            .as_slice()
            .try_into()
            .map_err(|_| SaveStateError::MemorySize(state.memory.len()))?;
        self.memory.set_ram(ram);
        self.cpu.load_state(&state.cpu_state);
        Ok(())
    }
}

impl Default for Machine {
    fn default() -> Self {
        Self::new(CpuConfig::default())
    }
}
