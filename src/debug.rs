use crate::cpu::opcodes::{self, Mode};
use crate::cpu::{Cpu, StatusFlags};
use crate::cpu_bus::Bus;
use crate::error::BusError;

pub fn format_registers(cpu: &Cpu) -> String {
    format!(
        "[ a: {:02X} | x: {:02X} | y: {:02X} | pc: {:04X} | sp: {:02X} ]",
        cpu.regs.a, cpu.regs.x, cpu.regs.y, cpu.regs.pc, cpu.regs.sp
    )
}

pub fn format_status(status: StatusFlags) -> String {
    let bit = |flag| u8::from(status.contains(flag));
    format!(
        "[ c: {} | z: {} | i: {} | d: {} | b: {} | v: {} | n: {} ]",
        bit(StatusFlags::CARRY),
        bit(StatusFlags::ZERO),
        bit(StatusFlags::INTERRUPT_DISABLE),
        bit(StatusFlags::DECIMAL),
        bit(StatusFlags::BREAK),
        bit(StatusFlags::OVERFLOW),
        bit(StatusFlags::NEGATIVE),
    )
}

/// Decodes the instruction at `addr` without touching CPU state.
/// Returns the text and the instruction length in bytes.
pub fn disassemble(bus: &mut dyn Bus, addr: u16) -> Result<(String, u16), BusError> {
    let opcode = bus.read(addr as u32)?;
    let Some(op) = opcodes::decode(opcode) else {
        return Ok((format!(".byte ${:02X}", opcode), 1));
    };

    // Operand bytes wrap at the top of memory the same way `pc` does
    let operand = addr.wrapping_add(1);
    let text = match op.mode.operand_len() {
        2 => {
            let low = bus.read(operand as u32)? as u16;
            let high = bus.read(operand.wrapping_add(1) as u32)? as u16;
            let word = (high << 8) | low;
            match op.mode {
                Mode::AbsoluteX => format!("{} ${:04X},X", op.mnemonic(), word),
                Mode::AbsoluteY => format!("{} ${:04X},Y", op.mnemonic(), word),
                _ => format!("{} ${:04X}", op.mnemonic(), word),
            }
        }
        _ => {
            let byte = bus.read(operand as u32)?;
            match op.mode {
                Mode::Immediate => format!("{} #${:02X}", op.mnemonic(), byte),
                Mode::ZeroPageX => format!("{} ${:02X},X", op.mnemonic(), byte),
                Mode::ZeroPageY => format!("{} ${:02X},Y", op.mnemonic(), byte),
                Mode::IndirectX => format!("{} (${:02X},X)", op.mnemonic(), byte),
                Mode::IndirectY => format!("{} (${:02X}),Y", op.mnemonic(), byte),
                _ => format!("{} ${:02X}", op.mnemonic(), byte),
            }
        }
    };
    Ok((text, 1 + op.mode.operand_len()))
}
