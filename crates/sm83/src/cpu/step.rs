use crate::error::CpuError;

use super::table::{self, Instruction, Operand, OperandWidth, PREFIX_CB};
use super::{Cpu, MemoryBus, RunState};

impl Cpu {
    /// Execute a single instruction and return the number of T-cycles taken.
    ///
    /// A halted CPU returns `Ok(0)` without touching the bus. A faulted CPU
    /// keeps returning the fault that stopped it; only [`Cpu::reset`] clears
    /// either state.
    pub fn step<B: MemoryBus>(&mut self, bus: &mut B) -> Result<u32, CpuError> {
        match self.state {
            RunState::Running => {}
            RunState::Halted => return Ok(0),
            RunState::Faulted { opcode, address } => {
                return Err(CpuError::UnimplementedOpcode { opcode, address });
            }
        }

        let bus: &mut dyn MemoryBus = bus;
        let opcode_addr = self.regs.pc;
        let instr = self.decode(bus, opcode_addr)?;
        let operand = self.fetch_operand(bus, instr.width);

        log::trace!(
            "{opcode_addr:04X}: {} {:?} (A={:02X} F={:02X} SP={:04X})",
            instr.mnemonic,
            operand,
            self.regs.a,
            self.regs.f(),
            self.regs.sp,
        );

        // EI takes effect after the instruction that follows it.
        let enable_ime = self.ime_enable_pending;
        let extra = (instr.handler)(self, bus, instr, operand);
        if enable_ime && self.ime_enable_pending {
            self.ime = true;
            self.ime_enable_pending = false;
        }

        let cycles = instr.cycles + extra;
        self.cycles += u64::from(cycles);
        Ok(cycles)
    }

    /// Step until at least `budget` T-cycles have elapsed or the CPU stops
    /// running. Returns the cycles actually executed.
    pub fn run<B: MemoryBus>(&mut self, bus: &mut B, budget: u64) -> Result<u64, CpuError> {
        let mut elapsed = 0u64;
        while elapsed < budget && self.is_running() {
            elapsed += u64::from(self.step(bus)?);
        }
        Ok(elapsed)
    }

    /// Fetch the opcode (and the second byte of a prefixed opcode) and look
    /// it up. On a hole the PC is rewound and the CPU faults.
    fn decode(
        &mut self,
        bus: &mut dyn MemoryBus,
        opcode_addr: u16,
    ) -> Result<&'static Instruction, CpuError> {
        let opcode = self.fetch8(bus);
        let entry = if opcode == PREFIX_CB {
            let sub = self.fetch8(bus);
            table::prefixed(sub)
        } else {
            table::base(opcode)
        };

        match entry {
            Some(instr) => Ok(instr),
            None => {
                self.regs.pc = opcode_addr;
                self.state = RunState::Faulted {
                    opcode,
                    address: opcode_addr,
                };
                log::error!(
                    "SM83 faulted: unimplemented opcode 0x{opcode:02X} at PC=0x{pc:04X} (SP=0x{sp:04X} AF=0x{af:04X} BC=0x{bc:04X} DE=0x{de:04X} HL=0x{hl:04X})",
                    opcode = opcode,
                    pc = opcode_addr,
                    sp = self.regs.sp,
                    af = self.regs.af(),
                    bc = self.regs.bc(),
                    de = self.regs.de(),
                    hl = self.regs.hl(),
                );
                Err(CpuError::UnimplementedOpcode {
                    opcode,
                    address: opcode_addr,
                })
            }
        }
    }

    fn fetch_operand(&mut self, bus: &mut dyn MemoryBus, width: OperandWidth) -> Operand {
        match width {
            OperandWidth::None => Operand::None,
            OperandWidth::Byte => Operand::Byte(self.fetch8(bus)),
            OperandWidth::Word => Operand::Word(self.fetch16(bus)),
        }
    }
}
