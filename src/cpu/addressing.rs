//! Addressing-mode resolution and the cycle-charging bus primitives.
//!
//! Every primitive access charges one cycle against the caller's budget
//! before touching the bus, so a failing bus still makes progress.

use super::opcodes::Mode;
use super::Cpu;
use crate::cpu_bus::Bus;
use crate::error::BusError;

/// Whether adding `offset` to `base` moves into another 256-byte page.
pub fn page_crossed(base: u16, offset: u8) -> bool {
    ((base ^ base.wrapping_add(offset as u16)) >> 8) != 0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Access {
    Read,
    Write,
}

impl Cpu {
    pub(super) fn fetch_byte(&mut self, budget: &mut i32, bus: &mut dyn Bus) -> Result<u8, BusError> {
        *budget -= 1;
        let byte = bus.read(self.regs.pc as u32)?;
        self.regs.pc = self.regs.pc.wrapping_add(1);
        Ok(byte)
    }

    pub(super) fn fetch_word(&mut self, budget: &mut i32, bus: &mut dyn Bus) -> Result<u16, BusError> {
        let low = self.fetch_byte(budget, bus)? as u16;
        let high = self.fetch_byte(budget, bus)? as u16;
        Ok((high << 8) | low)
    }

    pub(super) fn read_from(&mut self, addr: u16, budget: &mut i32, bus: &mut dyn Bus) -> Result<u8, BusError> {
        *budget -= 1;
        bus.read(addr as u32)
    }

    pub(super) fn write_to(
        &mut self,
        addr: u16,
        value: u8,
        budget: &mut i32,
        bus: &mut dyn Bus,
    ) -> Result<(), BusError> {
        *budget -= 1;
        bus.write(addr as u32, value)?;
        Ok(())
    }

    // Pointer lookups never leave the zero page; ($FF),Y takes its high
    // byte from $00.
    fn read_zero_page_pointer(&mut self, zp: u8, budget: &mut i32, bus: &mut dyn Bus) -> Result<u16, BusError> {
        let low = self.read_from(zp as u16, budget, bus)? as u16;
        let high = self.read_from(zp.wrapping_add(1) as u16, budget, bus)? as u16;
        Ok((high << 8) | low)
    }

    /// Consumes the operand bytes for `mode` and returns the effective address.
    /// Immediate resolves to the operand's own location.
    ///
    /// Indexed writes always pay the page-crossing cycle; reads only pay it
    /// when the high byte changes.
    pub(super) fn resolve_address(
        &mut self,
        mode: Mode,
        access: Access,
        budget: &mut i32,
        bus: &mut dyn Bus,
    ) -> Result<u16, BusError> {
        let addr = match mode {
            Mode::Immediate => {
                let addr = self.regs.pc;
                self.regs.pc = self.regs.pc.wrapping_add(1);
                addr
            }
            Mode::ZeroPage => self.fetch_byte(budget, bus)? as u16,
            // Documented NMOS timing: the index add costs a cycle and the
            // sum stays in the zero page. A plain zero-page read pays neither.
            Mode::ZeroPageX | Mode::ZeroPageY => {
                let base = self.fetch_byte(budget, bus)?;
                let index = if mode == Mode::ZeroPageX {
                    self.regs.x
                } else {
                    self.regs.y
                };
                *budget -= 1;
                base.wrapping_add(index) as u16
            }
            Mode::Absolute => self.fetch_word(budget, bus)?,
            Mode::AbsoluteX | Mode::AbsoluteY => {
                let base = self.fetch_word(budget, bus)?;
                let index = if mode == Mode::AbsoluteX {
                    self.regs.x
                } else {
                    self.regs.y
                };
                if access == Access::Write || page_crossed(base, index) {
                    *budget -= 1;
                }
                base.wrapping_add(index as u16)
            }
            Mode::IndirectX => {
                let zp = self.fetch_byte(budget, bus)?.wrapping_add(self.regs.x);
                *budget -= 1;
                self.read_zero_page_pointer(zp, budget, bus)?
            }
            Mode::IndirectY => {
                let zp = self.fetch_byte(budget, bus)?;
                let base = self.read_zero_page_pointer(zp, budget, bus)?;
                if access == Access::Write || page_crossed(base, self.regs.y) {
                    *budget -= 1;
                }
                base.wrapping_add(self.regs.y as u16)
            }
        };
        Ok(addr)
    }

    pub(super) fn read_operand(&mut self, mode: Mode, budget: &mut i32, bus: &mut dyn Bus) -> Result<u8, BusError> {
        let addr = self.resolve_address(mode, Access::Read, budget, bus)?;
        self.read_from(addr, budget, bus)
    }
}
