use m6502_core::config::{self, CpuConfig};
use m6502_core::debug;
use m6502_core::Machine;
use std::process;

// LDX #$86
const DEMO_PROGRAM: [u8; 2] = [0xA2, 0x86];

fn main() {
    env_logger::init();

    let cpu_config = CpuConfig::from_env();
    let mut machine = Machine::new(cpu_config);
    machine.reset();

    if let Err(e) = machine.load_at_reset_vector(&DEMO_PROGRAM) {
        eprintln!("Failed to load program: {}", e);
        process::exit(1);
    }

    let mut offset = 0u16;
    while (offset as usize) < DEMO_PROGRAM.len() {
        let addr = cpu_config.reset_vector.wrapping_add(offset);
        match debug::disassemble(machine.memory_mut(), addr) {
            Ok((text, len)) => {
                println!("${:04X}  {}", addr, text);
                offset += len;
            }
            Err(e) => {
                eprintln!("{}", e);
                break;
            }
        }
    }

    machine.set_observer(|cpu, summary| {
        println!("{}", debug::format_registers(cpu));
        println!("{}", debug::format_status(cpu.status));
        println!(
            "[ cycles: {} | instructions: {} | faults: {} ]",
            summary.consumed,
            summary.instructions,
            summary.fault_count
        );
    });

    machine.run(config::demo_cycles());
}
