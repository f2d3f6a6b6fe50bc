use std::sync::OnceLock;

/// Address `pc` is set to on reset.
pub const DEFAULT_RESET_VECTOR: u16 = 0x0FFC;

/// How load instructions write the zero and negative flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlagPolicy {
    /// Only ever sets N and Z; a load never clears either.
    #[default]
    SetOnly,
    /// Recomputes N and Z from the loaded value, as the NMOS part does.
    Hardware,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuConfig {
    pub reset_vector: u16,
    pub flag_policy: FlagPolicy,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            reset_vector: DEFAULT_RESET_VECTOR,
            flag_policy: FlagPolicy::SetOnly,
        }
    }
}

impl CpuConfig {
    /// Defaults overridden by `M6502_RESET_VECTOR` and `M6502_HARDWARE_FLAGS`.
    pub fn from_env() -> Self {
        Self {
            reset_vector: reset_vector(),
            flag_policy: if hardware_flags() {
                FlagPolicy::Hardware
            } else {
                FlagPolicy::SetOnly
            },
        }
    }
}

fn env_flag(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| matches!(v.as_str(), "1" | "true" | "TRUE" | "on" | "ON"))
        .unwrap_or(default)
}

fn env_u16(key: &str, default: u16) -> u16 {
    std::env::var(key)
        .ok()
        .and_then(|v| parse_u16(&v))
        .unwrap_or(default)
}

fn env_i32(key: &str, default: i32) -> i32 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<i32>().ok())
        .unwrap_or(default)
}

/// Accepts `0x0FFC`, `$0FFC` or plain decimal.
pub(crate) fn parse_u16(s: &str) -> Option<u16> {
    let s = s.trim();
    if let Some(hex) = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .or_else(|| s.strip_prefix('$'))
    {
        u16::from_str_radix(hex, 16).ok()
    } else {
        s.parse::<u16>().ok()
    }
}

pub fn reset_vector() -> u16 {
    static VALUE: OnceLock<u16> = OnceLock::new();
    *VALUE.get_or_init(|| env_u16("M6502_RESET_VECTOR", DEFAULT_RESET_VECTOR))
}

pub fn hardware_flags() -> bool {
    static ON: OnceLock<bool> = OnceLock::new();
    *ON.get_or_init(|| env_flag("M6502_HARDWARE_FLAGS", false))
}

// Cycle budget for the demo binary
pub fn demo_cycles() -> i32 {
    static VALUE: OnceLock<i32> = OnceLock::new();
    *VALUE.get_or_init(|| env_i32("M6502_CYCLES", 2))
}
