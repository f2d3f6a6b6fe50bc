use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::SaveStateError;
use crate::memory::MEMORY_SIZE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveState {
    pub version: u32,
    pub cpu_state: CpuSaveState,
    pub memory: Vec<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CpuSaveState {
    pub a: u8,
    pub x: u8,
    pub y: u8,
    pub sp: u8,
    pub pc: u16,
    pub p: u8,
    pub cycles: u64,
}

impl SaveState {
    pub const CURRENT_VERSION: u32 = 1;

    pub fn new(cpu_state: CpuSaveState, memory: Vec<u8>) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            cpu_state,
            memory,
        }
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, SaveStateError> {
        Ok(bincode::serialize(self)?)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, SaveStateError> {
        let state: SaveState = bincode::deserialize(data)?;

        if state.version > Self::CURRENT_VERSION {
            return Err(SaveStateError::UnsupportedVersion {
                found: state.version,
                current: Self::CURRENT_VERSION,
            });
        }
        if state.memory.len() != MEMORY_SIZE {
            return Err(SaveStateError::MemorySize(state.memory.len()));
        }

        Ok(state)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), SaveStateError> {
        let data = self.to_bytes()?;
        let mut file = File::create(path)?;
        file.write_all(&data)?;
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, SaveStateError> {
        let mut file = File::open(path)?;
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }
}
