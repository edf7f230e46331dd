//! Closed enumerations of the AVR8 command surface.
//!
//! The engine treats all of these as opaque bytes; the semantic meaning of
//! memory types and contexts lives in the tool, not here.

/// AVR8 command identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Avr8Command {
    /// Capability discovery.
    Query = 0x00,
    /// Set parameters.
    Set = 0x01,
    /// Get parameters.
    Get = 0x02,
    /// Connect physically.
    ActivatePhysical = 0x10,
    /// Disconnect physically.
    DeactivatePhysical = 0x11,
    /// Read the device ID.
    GetId = 0x12,
    /// Attach to the OCD module.
    Attach = 0x13,
    /// Detach from the OCD module.
    Detach = 0x14,
    /// Enter programming mode.
    ProgModeEnter = 0x15,
    /// Leave programming mode.
    ProgModeLeave = 0x16,
    /// Disable the debugWIRE interface.
    DisableDebugwire = 0x17,
    /// Erase the chip.
    Erase = 0x20,
    /// Read memory.
    MemoryRead = 0x21,
    /// Read memory through a mask.
    MemoryReadMasked = 0x22,
    /// Write memory.
    MemoryWrite = 0x23,
    /// Calculate CRC.
    Crc = 0x24,
    /// Reset the MCU.
    Reset = 0x30,
    /// Stop the MCU.
    Stop = 0x31,
    /// Resume execution.
    Run = 0x32,
    /// Resume with a temporary breakpoint.
    RunToAddress = 0x33,
    /// Single step.
    Step = 0x34,
    /// Read the program counter.
    PcRead = 0x35,
    /// Write the program counter.
    PcWrite = 0x36,
    /// Set hardware breakpoints.
    HwBreakSet = 0x40,
    /// Clear hardware breakpoints.
    HwBreakClear = 0x41,
    /// Set software breakpoints.
    SwBreakSet = 0x43,
    /// Clear software breakpoints.
    SwBreakClear = 0x44,
    /// Clear all software breakpoints.
    SwBreakClearAll = 0x45,
    /// Erase a page.
    PageErase = 0x50,
}

/// Parameter contexts: namespaces within the tool's configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Context {
    Config = 0x00,
    Physical = 0x01,
    Device = 0x02,
    Options = 0x03,
    Session = 0x04,
}

/// Parameters in the config context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ConfigParam {
    /// Device family/variant.
    Variant = 0x00,
    /// Functional intent of the session.
    Function = 0x01,
}

/// Parameters in the physical context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PhysicalParam {
    /// Physical interface selector.
    Interface = 0x00,
    /// JTAG daisy-chain settings.
    JtagDaisy = 0x01,
    /// debugWIRE clock divide ratio.
    DwClockDiv = 0x10,
    /// Clock for programming megaAVR.
    MegaProgClock = 0x20,
    /// Clock for debugging megaAVR.
    MegaDebugClock = 0x21,
    /// JTAG clock for AVR XMEGA.
    XmegaJtagClock = 0x30,
    /// PDI clock for AVR XMEGA and UPDI devices.
    XmegaPdiClock = 0x31,
}

/// Parameters in the options context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OptionParam {
    /// Keep timers running when stopped.
    RunTimers = 0x00,
    /// No data breakpoints during reset.
    DisableDataBreaks = 0x01,
    /// Relay IDR messages.
    EnableIdr = 0x03,
    /// Configure polling speed.
    PollInterval = 0x04,
    /// Use Power Nap.
    PowerNap = 0x05,
    /// Enable UPDI using 12V.
    HighVoltageUpdiEnable = 0x06,
    /// Use the chip-erase key when next entering programming mode.
    ChipEraseToEnter = 0x07,
}

/// Device family/variant selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Variant {
    /// Dummy device.
    Loopback = 0x00,
    /// tinyAVR or megaAVR with debugWIRE.
    TinyOcd = 0x01,
    /// megaAVR with JTAG.
    MegaOcd = 0x02,
    /// AVR XMEGA.
    Xmega = 0x03,
    /// UPDI devices.
    TinyX = 0x05,
    /// No device.
    None = 0xFF,
}

/// Functional intent of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Function {
    /// Not configured.
    None = 0x00,
    /// Programming only.
    Programming = 0x01,
    /// Debug session.
    Debugging = 0x02,
}

/// Physical interface selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PhysicalInterface {
    /// Not configured.
    None = 0x00,
    Jtag = 0x04,
    DebugWire = 0x05,
    Pdi = 0x06,
    Updi = 0x08,
}

/// Memory types: disjoint address spaces on the target.
///
/// No cross-region validation happens on this side; out-of-range or
/// wrong-type access is rejected by the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Memtype {
    Sram = 0x20,
    Eeprom = 0x22,
    /// Flash through the SPM interface.
    Spm = 0xA0,
    FlashPage = 0xB0,
    EepromPage = 0xB1,
    Fuses = 0xB2,
    Lockbits = 0xB3,
    Signature = 0xB4,
    /// Oscillator calibration values.
    Osccal = 0xB5,
    /// The register file, a fixed 32-byte virtual region.
    Regfile = 0xB8,
    ApplFlash = 0xC0,
    BootFlash = 0xC1,
    ApplFlashAtomic = 0xC2,
    BootFlashAtomic = 0xC3,
    EepromAtomic = 0xC4,
    UserSignature = 0xC5,
    CalibrationSignature = 0xC6,
    /// System information block.
    Sib = 0xD3,
}

/// Erase granularity for [`Avr8::erase`](crate::Avr8::erase).
///
/// The address argument is significant only for the page modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum EraseMode {
    Chip = 0x00,
    App = 0x01,
    Boot = 0x02,
    Eeprom = 0x03,
    AppPage = 0x04,
    BootPage = 0x05,
    EepromPage = 0x06,
    Usersig = 0x07,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_wire_values() {
        assert_eq!(Avr8Command::ActivatePhysical as u8, 0x10);
        assert_eq!(Avr8Command::Erase as u8, 0x20);
        assert_eq!(Avr8Command::MemoryWrite as u8, 0x23);
        assert_eq!(Avr8Command::Step as u8, 0x34);
        assert_eq!(Avr8Command::HwBreakSet as u8, 0x40);
        assert_eq!(Avr8Command::HwBreakClear as u8, 0x41);
        assert_eq!(Avr8Command::SwBreakClearAll as u8, 0x45);
    }

    #[test]
    fn context_wire_values() {
        assert_eq!(Context::Config as u8, 0x00);
        assert_eq!(Context::Session as u8, 0x04);
    }

    #[test]
    fn memtype_wire_values() {
        assert_eq!(Memtype::Sram as u8, 0x20);
        assert_eq!(Memtype::Regfile as u8, 0xB8);
        assert_eq!(Memtype::EepromAtomic as u8, 0xC4);
        assert_eq!(Memtype::Sib as u8, 0xD3);
    }

    #[test]
    fn erase_mode_wire_values() {
        assert_eq!(EraseMode::Chip as u8, 0x00);
        assert_eq!(EraseMode::AppPage as u8, 0x04);
        assert_eq!(EraseMode::Usersig as u8, 0x07);
    }
}
