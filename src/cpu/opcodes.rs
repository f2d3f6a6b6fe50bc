//! Opcode table. Each documented opcode maps to an operation and an
//! addressing mode; everything else decodes to `None`.

use super::registers::Register;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Immediate,
    ZeroPage,
    ZeroPageX,
    ZeroPageY,
    Absolute,
    AbsoluteX,
    AbsoluteY,
    IndirectX,
    IndirectY,
}

impl Mode {
    /// Operand bytes following the opcode.
    pub const fn operand_len(self) -> u16 {
        match self {
            Mode::Absolute | Mode::AbsoluteX | Mode::AbsoluteY => 2,
            _ => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load(Register),
    Store(Register),
}

impl Operation {
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Operation::Load(Register::A) => "LDA",
            Operation::Load(Register::X) => "LDX",
            Operation::Load(Register::Y) => "LDY",
            Operation::Store(Register::A) => "STA",
            Operation::Store(Register::X) => "STX",
            Operation::Store(Register::Y) => "STY",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Opcode {
    pub operation: Operation,
    pub mode: Mode,
}

impl Opcode {
    pub fn mnemonic(&self) -> &'static str {
        self.operation.mnemonic()
    }
}

const fn ld(reg: Register, mode: Mode) -> Opcode {
    Opcode {
        operation: Operation::Load(reg),
        mode,
    }
}

const fn st(reg: Register, mode: Mode) -> Opcode {
    Opcode {
        operation: Operation::Store(reg),
        mode,
    }
}

const DEFINITIONS: [(u8, Opcode); 31] = [
    // LDA
    (0xA9, ld(Register::A, Mode::Immediate)),
    (0xA5, ld(Register::A, Mode::ZeroPage)),
    (0xB5, ld(Register::A, Mode::ZeroPageX)),
    (0xAD, ld(Register::A, Mode::Absolute)),
    (0xBD, ld(Register::A, Mode::AbsoluteX)),
    (0xB9, ld(Register::A, Mode::AbsoluteY)),
    (0xA1, ld(Register::A, Mode::IndirectX)),
    (0xB1, ld(Register::A, Mode::IndirectY)),
    // LDX
    (0xA2, ld(Register::X, Mode::Immediate)),
    (0xA6, ld(Register::X, Mode::ZeroPage)),
    (0xB6, ld(Register::X, Mode::ZeroPageY)),
    (0xAE, ld(Register::X, Mode::Absolute)),
    (0xBE, ld(Register::X, Mode::AbsoluteY)),
    // LDY
    (0xA0, ld(Register::Y, Mode::Immediate)),
    (0xA4, ld(Register::Y, Mode::ZeroPage)),
    (0xB4, ld(Register::Y, Mode::ZeroPageX)),
    (0xAC, ld(Register::Y, Mode::Absolute)),
    (0xBC, ld(Register::Y, Mode::AbsoluteX)),
    // STA
    (0x85, st(Register::A, Mode::ZeroPage)),
    (0x95, st(Register::A, Mode::ZeroPageX)),
    (0x8D, st(Register::A, Mode::Absolute)),
    (0x9D, st(Register::A, Mode::AbsoluteX)),
    (0x99, st(Register::A, Mode::AbsoluteY)),
    (0x81, st(Register::A, Mode::IndirectX)),
    (0x91, st(Register::A, Mode::IndirectY)),
    // STX
    (0x86, st(Register::X, Mode::ZeroPage)),
    (0x96, st(Register::X, Mode::ZeroPageY)),
    (0x8E, st(Register::X, Mode::Absolute)),
    // STY
    (0x84, st(Register::Y, Mode::ZeroPage)),
    (0x94, st(Register::Y, Mode::ZeroPageX)),
    (0x8C, st(Register::Y, Mode::Absolute)),
];

const fn build_table() -> [Option<Opcode>; 256] {
    let mut table = [None; 256];
    let mut i = 0;
    while i < DEFINITIONS.len() {
        let (code, opcode) = DEFINITIONS[i];
        table[code as usize] = Some(opcode);
        i += 1;
    }
    table
}

pub static OPCODES: [Option<Opcode>; 256] = build_table();

pub fn decode(opcode: u8) -> Option<Opcode> {
    OPCODES[opcode as usize]
}
