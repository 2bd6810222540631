/// Abstraction over the address space the CPU executes against.
///
/// Both methods must be defined for every address in `0x0000..=0xFFFF`.
/// What unmapped regions return (typically an "open bus" value such as
/// `0xFF`) is the implementation's policy; the core never treats a bus
/// access as fallible.
///
/// The CPU accesses the bus in strict program order and reads an indirect
/// operand at most once per instruction, so memory-mapped registers with
/// read side effects see exactly the accesses the hardware would make.
pub trait MemoryBus {
    fn read_byte(&mut self, addr: u16) -> u8;
    fn write_byte(&mut self, addr: u16, value: u8);
}

impl<T: MemoryBus + ?Sized> MemoryBus for &mut T {
    #[inline]
    fn read_byte(&mut self, addr: u16) -> u8 {
        (**self).read_byte(addr)
    }

    #[inline]
    fn write_byte(&mut self, addr: u16, value: u8) {
        (**self).write_byte(addr, value)
    }
}
