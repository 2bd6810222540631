use crate::config::{CpuConfig, PowerOnState};

use super::{Cpu, Flags, Registers, RunState};

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    /// A CPU with every register zeroed.
    pub fn new() -> Self {
        Self::with_config(CpuConfig::default())
    }

    pub fn with_config(config: CpuConfig) -> Self {
        let mut cpu = Self {
            regs: Registers::default(),
            ime: false,
            ime_enable_pending: false,
            state: RunState::Running,
            cycles: 0,
            power_on: config.power_on,
        };
        cpu.apply_power_on_state();
        cpu
    }

    /// Reset the CPU to its power-on state.
    ///
    /// Clears the run state (including a fault) and the cycle counter.
    pub fn reset(&mut self) {
        log::debug!("SM83 reset ({:?})", self.power_on);
        self.ime = false;
        self.ime_enable_pending = false;
        self.state = RunState::Running;
        self.cycles = 0;
        self.apply_power_on_state();
    }

    fn apply_power_on_state(&mut self) {
        self.regs = Registers::default();

        if self.power_on == PowerOnState::DmgBoot {
            // Values follow Pan Docs' "Power Up Sequence" for the DMG.
            self.regs.a = 0x01;
            self.regs.f = Flags::Z | Flags::H | Flags::C;
            self.regs.b = 0x00;
            self.regs.c = 0x13;
            self.regs.d = 0x00;
            self.regs.e = 0xD8;
            self.regs.h = 0x01;
            self.regs.l = 0x4D;
            self.regs.sp = 0xFFFE;
            self.regs.pc = 0x0100;
        }
    }
}
