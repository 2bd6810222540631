use sm83::MemoryBus;

/// 64 KiB of flat RAM with no mapped I/O.
pub struct FlatBus {
    pub memory: Vec<u8>,
}

impl FlatBus {
    pub fn with_program(origin: u16, program: &[u8]) -> Self {
        let mut memory = vec![0; 0x10000];
        let start = origin as usize;
        memory[start..start + program.len()].copy_from_slice(program);
        Self { memory }
    }
}

impl MemoryBus for FlatBus {
    fn read_byte(&mut self, addr: u16) -> u8 {
        self.memory[addr as usize]
    }

    fn write_byte(&mut self, addr: u16, value: u8) {
        self.memory[addr as usize] = value;
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
