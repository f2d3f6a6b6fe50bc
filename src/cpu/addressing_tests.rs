use super::*;

#[cfg(test)]
mod addressing_mode_tests {
    use super::*;

    #[test]
    fn test_page_crossed() {
        assert!(page_crossed(0x20FF, 1));
        assert!(!page_crossed(0x2000, 1));
        assert!(!page_crossed(0x20FE, 1));
        assert!(page_crossed(0x2080, 0x80));
        assert!(page_crossed(0xFFFF, 1));
        assert!(!page_crossed(0x1234, 0));
    }

    #[test]
    fn test_zero_page_addressing() {
        let (mut cpu, mut bus) = setup_cpu();
        bus.poke(0x42, 0xAB);
        // LDA $42
        bus.load_program(&[0xA5, 0x42], DEFAULT_RESET_VECTOR);

        let cycles = step_cycles(&mut cpu, &mut bus);

        assert_eq!(cpu.regs.a, 0xAB);
        assert_eq!(cycles, 3);
    }

    #[test]
    fn test_zero_page_x_addressing() {
        let (mut cpu, mut bus) = setup_cpu();
        cpu.regs.x = 0x10;
        bus.poke(0x52, 0xCD); // 0x42 + 0x10
        // LDA $42,X
        bus.load_program(&[0xB5, 0x42], DEFAULT_RESET_VECTOR);

        let cycles = step_cycles(&mut cpu, &mut bus);

        assert_eq!(cpu.regs.a, 0xCD);
        assert_eq!(cycles, 4);
    }

    #[test]
    fn test_zero_page_x_wraparound() {
        let (mut cpu, mut bus) = setup_cpu();
        cpu.regs.x = 0xFF;
        bus.poke(0x41, 0xEF); // (0x42 + 0xFF) & 0xFF = 0x41
        bus.poke(0x0141, 0x11);
        // LDY $42,X
        bus.load_program(&[0xB4, 0x42], DEFAULT_RESET_VECTOR);

        step_cycles(&mut cpu, &mut bus);

        assert_eq!(cpu.regs.y, 0xEF);
    }

    #[test]
    fn test_zero_page_y_addressing() {
        let (mut cpu, mut bus) = setup_cpu();
        cpu.regs.y = 0x05;
        bus.poke(0x85, 0x3C);
        // LDX $80,Y
        bus.load_program(&[0xB6, 0x80], DEFAULT_RESET_VECTOR);

        let cycles = step_cycles(&mut cpu, &mut bus);

        assert_eq!(cpu.regs.x, 0x3C);
        assert_eq!(cycles, 4);
    }

    #[test]
    fn test_absolute_addressing() {
        let (mut cpu, mut bus) = setup_cpu();
        bus.poke(0x1234, 0x56);
        // LDA $1234
        bus.load_program(&[0xAD, 0x34, 0x12], DEFAULT_RESET_VECTOR);

        let cycles = step_cycles(&mut cpu, &mut bus);

        assert_eq!(cpu.regs.a, 0x56);
        assert_eq!(cpu.regs.pc, DEFAULT_RESET_VECTOR + 3);
        assert_eq!(cycles, 4);
    }

    #[test]
    fn test_absolute_x_page_cross_costs_one_cycle() {
        let (mut cpu, mut bus) = setup_cpu();
        cpu.regs.x = 1;
        bus.poke(0x2001, 0x01);
        bus.poke(0x2100, 0x02);
        // LDA $2000,X ; LDA $20FF,X
        bus.load_program(&[0xBD, 0x00, 0x20, 0xBD, 0xFF, 0x20], DEFAULT_RESET_VECTOR);

        let same_page = step_cycles(&mut cpu, &mut bus);
        assert_eq!(cpu.regs.a, 0x01);
        let crossed = step_cycles(&mut cpu, &mut bus);
        assert_eq!(cpu.regs.a, 0x02);

        assert_eq!(same_page, 4);
        assert_eq!(crossed, same_page + 1);
    }

    #[test]
    fn test_absolute_y_page_cross() {
        let (mut cpu, mut bus) = setup_cpu();
        cpu.regs.y = 0x10;
        bus.poke(0x310F, 0x9A);
        // LDX $30FF,Y
        bus.load_program(&[0xBE, 0xFF, 0x30], DEFAULT_RESET_VECTOR);

        let cycles = step_cycles(&mut cpu, &mut bus);

        assert_eq!(cpu.regs.x, 0x9A);
        assert_eq!(cycles, 5);
    }

    #[test]
    fn test_absolute_x_wraps_address_space() {
        let (mut cpu, mut bus) = setup_cpu();
        cpu.regs.x = 0x02;
        bus.poke(0x0001, 0x44);
        // LDY $FFFF,X
        bus.load_program(&[0xBC, 0xFF, 0xFF], DEFAULT_RESET_VECTOR);

        let cycles = step_cycles(&mut cpu, &mut bus);

        assert_eq!(cpu.regs.y, 0x44);
        assert_eq!(cycles, 5);
    }

    #[test]
    fn test_indexed_indirect_addressing() {
        let (mut cpu, mut bus) = setup_cpu();
        cpu.regs.x = 0x04;
        bus.poke(0x24, 0x74); // 0x20 + 0x04
        bus.poke(0x25, 0x20);
        bus.poke(0x2074, 0x33);
        // LDA ($20,X)
        bus.load_program(&[0xA1, 0x20], DEFAULT_RESET_VECTOR);

        let cycles = step_cycles(&mut cpu, &mut bus);

        assert_eq!(cpu.regs.a, 0x33);
        assert_eq!(cycles, 6);
    }

    #[test]
    fn test_indexed_indirect_pointer_wraps() {
        let (mut cpu, mut bus) = setup_cpu();
        cpu.regs.x = 0x01;
        bus.poke(0xFF, 0x00);
        bus.poke(0x00, 0x40);
        bus.poke(0x4000, 0x7E);
        // LDA ($FE,X): pointer at $FF, $00
        bus.load_program(&[0xA1, 0xFE], DEFAULT_RESET_VECTOR);

        let cycles = step_cycles(&mut cpu, &mut bus);

        assert_eq!(cpu.regs.a, 0x7E);
        assert_eq!(cycles, 6);
    }

    #[test]
    fn test_indirect_indexed_page_cross() {
        let (mut cpu, mut bus) = setup_cpu();
        cpu.regs.y = 0x20;
        bus.poke(0x10, 0xF0);
        bus.poke(0x11, 0x30);
        bus.poke(0x3110, 0xC3); // 0x30F0 + 0x20
        // LDA ($10),Y
        bus.load_program(&[0xB1, 0x10], DEFAULT_RESET_VECTOR);

        let cycles = step_cycles(&mut cpu, &mut bus);

        assert_eq!(cpu.regs.a, 0xC3);
        assert_eq!(cycles, 6);
    }

    #[test]
    fn test_indirect_indexed_same_page() {
        let (mut cpu, mut bus) = setup_cpu();
        cpu.regs.y = 0x05;
        bus.poke(0x10, 0x00);
        bus.poke(0x11, 0x30);
        bus.poke(0x3005, 0x21);
        // LDA ($10),Y
        bus.load_program(&[0xB1, 0x10], DEFAULT_RESET_VECTOR);

        let cycles = step_cycles(&mut cpu, &mut bus);

        assert_eq!(cpu.regs.a, 0x21);
        assert_eq!(cycles, 5);
    }

    #[test]
    fn test_indirect_indexed_pointer_wraps() {
        let (mut cpu, mut bus) = setup_cpu();
        cpu.regs.y = 0x01;
        bus.poke(0xFF, 0x00);
        bus.poke(0x00, 0x50);
        bus.poke(0x0100, 0xEE);
        bus.poke(0x5001, 0x5D);
        // LDA ($FF),Y: high byte comes from $00, not $0100
        bus.load_program(&[0xB1, 0xFF], DEFAULT_RESET_VECTOR);

        step_cycles(&mut cpu, &mut bus);

        assert_eq!(cpu.regs.a, 0x5D);
    }
}
