use typed_builder::TypedBuilder;

/// Register values the CPU starts from at construction and after reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PowerOnState {
    /// Every register and pointer is zero.
    #[default]
    Zeroed,
    /// The values the DMG boot ROM leaves behind when it hands control to
    /// the cartridge at 0x0100.
    DmgBoot,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, TypedBuilder)]
pub struct CpuConfig {
    #[builder(default)]
    pub power_on: PowerOnState,
}
