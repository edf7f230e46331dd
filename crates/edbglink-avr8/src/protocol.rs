//! The AVR8 operation surface.

use bytes::{BufMut, Bytes};
use tracing::debug;

use edbglink_protocol::{Handler, Jtagice3, ProtocolError, Response, Status, VERSION0};
use edbglink_transport::Transport;

use crate::error::{Avr8Error, Result};
use crate::failures::AVR8_CATALOG;
use crate::types::{
    Avr8Command, ConfigParam, Context, EraseMode, Function, Memtype, OptionParam,
    PhysicalInterface, PhysicalParam, Variant,
};

/// Size of the AVR register file (R0..R31), a fixed virtual memory region.
pub const REGFILE_SIZE: usize = 32;

/// Last requested execution state of the target core.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutionState {
    /// Nothing requested yet, or the debugger is detached.
    #[default]
    Unknown,
    /// A run/run-to was last requested.
    Running,
    /// A stop/step/reset was last requested.
    Stopped,
}

/// Advisory session bookkeeping.
///
/// Tracks which lifecycle transitions were last requested and accepted.
/// This is diagnostic state only: nothing here gates a call, and the tool's
/// acceptance or rejection of each command remains authoritative. Invalid
/// sequences come back as a FAILED response (typically failure code 0x31,
/// invalid physical state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    /// A physical activation succeeded and has not been undone.
    pub physical_active: bool,
    /// An attach succeeded and has not been undone.
    pub attached: bool,
    /// Programming mode was entered and not left.
    pub in_progmode: bool,
    /// Last requested run/stop state.
    pub execution: ExecutionState,
}

/// The AVR8 device-control sub-protocol.
///
/// Holds an engine bound to the generic AVR8 handler. One instance per
/// transport connection; operations block until the tool responds.
pub struct Avr8<T> {
    engine: Jtagice3<T>,
    session: SessionState,
}

impl<T: Transport> Avr8<T> {
    /// Take exclusive ownership of a tool connection and speak AVR8 on it.
    pub fn new(transport: T) -> Self {
        Self {
            engine: Jtagice3::new(transport, Handler::Avr8Generic, AVR8_CATALOG),
            session: SessionState::default(),
        }
    }

    /// The advisory session state, for introspection.
    pub fn session(&self) -> SessionState {
        self.session
    }

    /// Consume the instance and return the transport connection.
    pub fn into_transport(self) -> T {
        self.engine.into_transport()
    }

    fn command(&mut self, command: Avr8Command, tail: &[u8]) -> Result<Response> {
        let mut body = Vec::with_capacity(2 + tail.len());
        body.push(command as u8);
        body.push(VERSION0);
        body.extend_from_slice(tail);
        Ok(self.engine.command_response(&body)?)
    }

    /// Issue a command whose only successful outcome is an OK response.
    fn acknowledged(&mut self, command: Avr8Command, tail: &[u8]) -> Result<()> {
        let response = self.command(command, tail)?;
        self.engine.check_response(response)?;
        Ok(())
    }

    // Configuration: uniform parameter writes rather than bespoke commands.

    /// Select the device family/variant (config context).
    pub fn set_variant(&mut self, variant: Variant) -> Result<()> {
        debug!(?variant, "selecting device variant");
        self.engine
            .set_byte(Context::Config as u8, ConfigParam::Variant as u8, variant as u8)?;
        Ok(())
    }

    /// Declare the functional intent of the session (config context).
    pub fn set_function(&mut self, function: Function) -> Result<()> {
        debug!(?function, "selecting session function");
        self.engine
            .set_byte(Context::Config as u8, ConfigParam::Function as u8, function as u8)?;
        Ok(())
    }

    /// Select the physical interface to the target (physical context).
    pub fn set_interface(&mut self, interface: PhysicalInterface) -> Result<()> {
        debug!(?interface, "selecting physical interface");
        self.engine.set_byte(
            Context::Physical as u8,
            PhysicalParam::Interface as u8,
            interface as u8,
        )?;
        Ok(())
    }

    /// Set a session option (options context).
    pub fn set_option(&mut self, option: OptionParam, value: u8) -> Result<()> {
        debug!(?option, value, "setting session option");
        self.engine
            .set_byte(Context::Options as u8, option as u8, value)?;
        Ok(())
    }

    /// Configure the JTAG daisy-chain topology (physical context).
    ///
    /// `settings` is `[devices_before, devices_after, bits_before,
    /// bits_after]`.
    pub fn configure_daisy_chain(&mut self, settings: [u8; 4]) -> Result<()> {
        debug!(?settings, "configuring JTAG daisy chain");
        let payload = [
            0x04,
            settings[0],
            settings[1],
            settings[2],
            settings[3],
        ];
        self.engine.set_parameters(
            Context::Physical as u8,
            PhysicalParam::JtagDaisy as u8,
            &payload,
        )?;
        Ok(())
    }

    /// Write the device-specific data blob into the device context.
    pub fn write_device_data(&mut self, data: &[u8]) -> Result<()> {
        debug!(len = data.len(), "writing device data");
        self.engine.set_parameters(Context::Device as u8, 0x00, data)?;
        Ok(())
    }

    // Physical lifecycle.

    /// Activate the physical interface to the target.
    ///
    /// Returns the 4-byte device ID if the interface can report one; not
    /// every physical interface can, so `None` is also a success.
    pub fn activate_physical(&mut self, use_reset: bool) -> Result<Option<[u8; 4]>> {
        debug!(use_reset, "activating physical interface");
        let response = self.command(Avr8Command::ActivatePhysical, &[u8::from(use_reset)])?;
        let payload = match response.status {
            Status::Failed => return Err(self.engine.remote_failure(&response.payload).into()),
            Status::Ok | Status::Data => response.payload,
            actual => {
                return Err(ProtocolError::UnexpectedStatus {
                    expected: Status::Ok,
                    actual,
                }
                .into())
            }
        };
        let id = match payload.len() {
            0 => None,
            4 => {
                let mut id = [0u8; 4];
                id.copy_from_slice(&payload);
                Some(id)
            }
            len => return Err(Avr8Error::DeviceIdLength(len)),
        };
        self.session.physical_active = true;
        if let Some(id) = id {
            debug!(
                id = format_args!("{:02X}{:02X}{:02X}{:02X}", id[3], id[2], id[1], id[0]),
                "target reported device ID"
            );
        }
        Ok(id)
    }

    /// Deactivate the physical interface. Resets the advisory session.
    pub fn deactivate_physical(&mut self) -> Result<()> {
        debug!("deactivating physical interface");
        self.acknowledged(Avr8Command::DeactivatePhysical, &[])?;
        self.session = SessionState::default();
        Ok(())
    }

    // Attach lifecycle.

    /// Attach the debugger to the target OCD module.
    ///
    /// `do_break` requests an immediate halt on attach.
    pub fn attach(&mut self, do_break: bool) -> Result<()> {
        debug!(do_break, "attaching to OCD");
        self.acknowledged(Avr8Command::Attach, &[u8::from(do_break)])?;
        self.session.attached = true;
        if do_break {
            self.session.execution = ExecutionState::Stopped;
        }
        Ok(())
    }

    /// Detach the debugger from the target.
    pub fn detach(&mut self) -> Result<()> {
        debug!("detaching from OCD");
        self.acknowledged(Avr8Command::Detach, &[])?;
        self.session.attached = false;
        self.session.execution = ExecutionState::Unknown;
        Ok(())
    }

    // Programming mode.

    /// Enter programming mode.
    pub fn enter_progmode(&mut self) -> Result<()> {
        debug!("entering programming mode");
        self.acknowledged(Avr8Command::ProgModeEnter, &[])?;
        self.session.in_progmode = true;
        Ok(())
    }

    /// Leave programming mode.
    pub fn leave_progmode(&mut self) -> Result<()> {
        debug!("leaving programming mode");
        self.acknowledged(Avr8Command::ProgModeLeave, &[])?;
        self.session.in_progmode = false;
        Ok(())
    }

    /// Read the raw device-ID payload.
    pub fn get_id(&mut self) -> Result<Bytes> {
        debug!("reading device ID");
        let response = self.command(Avr8Command::GetId, &[])?;
        Ok(self.engine.check_response_expecting(response, Status::Data)?)
    }

    // Memory.

    /// Erase target memory at the given granularity.
    ///
    /// The address matters only for the page-granularity modes.
    pub fn erase(&mut self, mode: EraseMode, address: u32) -> Result<()> {
        debug!(?mode, address = format_args!("0x{address:08X}"), "erasing");
        let mut tail = Vec::with_capacity(5);
        tail.push(mode as u8);
        tail.put_u32_le(address);
        self.acknowledged(Avr8Command::Erase, &tail)
    }

    /// Read `length` bytes from a target memory region.
    ///
    /// The tool either returns exactly the requested number of bytes or
    /// fails the command.
    pub fn memory_read(&mut self, memtype: Memtype, address: u32, length: u32) -> Result<Bytes> {
        debug!(?memtype, address = format_args!("0x{address:08X}"), length, "reading memory");
        let mut tail = Vec::with_capacity(9);
        tail.push(memtype as u8);
        tail.put_u32_le(address);
        tail.put_u32_le(length);
        let response = self.command(Avr8Command::MemoryRead, &tail)?;
        let data = self.engine.check_response_expecting(response, Status::Data)?;
        if data.len() != length as usize {
            return Err(Avr8Error::ReadLength {
                requested: length as usize,
                got: data.len(),
            });
        }
        Ok(data)
    }

    /// Write bytes to a target memory region.
    pub fn memory_write(&mut self, memtype: Memtype, address: u32, data: &[u8]) -> Result<()> {
        debug!(?memtype, address = format_args!("0x{address:08X}"), len = data.len(), "writing memory");
        let mut tail = Vec::with_capacity(10 + data.len());
        tail.push(memtype as u8);
        tail.put_u32_le(address);
        tail.put_u32_le(data.len() as u32);
        // reserved flags byte between length and payload, zero today
        tail.push(0x00);
        tail.extend_from_slice(data);
        self.acknowledged(Avr8Command::MemoryWrite, &tail)
    }

    /// Read the register file (R0..R31).
    pub fn regfile_read(&mut self) -> Result<[u8; REGFILE_SIZE]> {
        debug!("reading register file");
        let data = self.memory_read(Memtype::Regfile, 0, REGFILE_SIZE as u32)?;
        let mut regs = [0u8; REGFILE_SIZE];
        regs.copy_from_slice(&data);
        Ok(regs)
    }

    /// Write the register file (R0..R31).
    ///
    /// The region is exactly 32 bytes; any other length fails here, before
    /// a frame is sent.
    pub fn regfile_write(&mut self, data: &[u8]) -> Result<()> {
        if data.len() != REGFILE_SIZE {
            return Err(Avr8Error::RegfileLength { got: data.len() });
        }
        debug!("writing register file");
        self.memory_write(Memtype::Regfile, 0, data)
    }

    /// Read the program counter.
    pub fn program_counter_read(&mut self) -> Result<u32> {
        let response = self.command(Avr8Command::PcRead, &[])?;
        let payload = self.engine.check_response_expecting(response, Status::PcValue)?;
        if payload.len() != 4 {
            return Err(Avr8Error::ReadLength {
                requested: 4,
                got: payload.len(),
            });
        }
        let pc = u32::from_le_bytes([payload[0], payload[1], payload[2], payload[3]]);
        debug!(pc = format_args!("0x{pc:08X}"), "program counter read");
        Ok(pc)
    }

    /// Write the program counter.
    pub fn program_counter_write(&mut self, program_counter: u32) -> Result<()> {
        debug!(pc = format_args!("0x{program_counter:08X}"), "writing program counter");
        self.acknowledged(Avr8Command::PcWrite, &program_counter.to_le_bytes())
    }

    // Execution control.

    /// Reset the core and hold it in reset.
    pub fn reset(&mut self) -> Result<()> {
        debug!("core reset");
        self.acknowledged(Avr8Command::Reset, &[0x01])?;
        self.session.execution = ExecutionState::Stopped;
        Ok(())
    }

    /// Request a core halt.
    ///
    /// Completion is signalled asynchronously by a BREAK event outside this
    /// call; success here means the request was accepted, not that the
    /// target has stopped.
    pub fn stop(&mut self) -> Result<()> {
        debug!("core halt request");
        self.acknowledged(Avr8Command::Stop, &[0x01])?;
        self.session.execution = ExecutionState::Stopped;
        Ok(())
    }

    /// Resume core execution.
    pub fn run(&mut self) -> Result<()> {
        debug!("core resume");
        self.acknowledged(Avr8Command::Run, &[])?;
        self.session.execution = ExecutionState::Running;
        Ok(())
    }

    /// Resume execution with a temporary breakpoint at `address`.
    pub fn run_to(&mut self, address: u32) -> Result<()> {
        debug!(address = format_args!("0x{address:08X}"), "core run to address");
        self.acknowledged(Avr8Command::RunToAddress, &address.to_le_bytes())?;
        self.session.execution = ExecutionState::Running;
        Ok(())
    }

    /// Execute one instruction-level step.
    ///
    /// A BREAK event is always generated on completion, a holdover from
    /// debuggers that supported source-level stepping; this call does not
    /// wait for it.
    pub fn step(&mut self) -> Result<()> {
        debug!("core step");
        self.acknowledged(Avr8Command::Step, &[0x01, 0x01])?;
        self.session.execution = ExecutionState::Stopped;
        Ok(())
    }

    // Software breakpoints. The tool is the source of truth for which
    // addresses are currently set; nothing is tracked locally.

    /// Insert a software breakpoint at `address`.
    pub fn software_breakpoint_set(&mut self, address: u32) -> Result<()> {
        debug!(address = format_args!("0x{address:08X}"), "setting software breakpoint");
        self.acknowledged(Avr8Command::SwBreakSet, &address.to_le_bytes())
    }

    /// Remove the software breakpoint at `address`.
    pub fn software_breakpoint_clear(&mut self, address: u32) -> Result<()> {
        debug!(address = format_args!("0x{address:08X}"), "clearing software breakpoint");
        self.acknowledged(Avr8Command::SwBreakClear, &address.to_le_bytes())
    }

    /// Remove all software breakpoints.
    pub fn software_breakpoint_clear_all(&mut self) -> Result<()> {
        debug!("clearing all software breakpoints");
        self.acknowledged(Avr8Command::SwBreakClearAll, &[])
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use edbglink_transport::TransportError;

    use super::*;

    const HANDLER: u8 = 0x12;
    const RSP_OK: u8 = 0x80;
    const RSP_PC: u8 = 0x83;
    const RSP_DATA: u8 = 0x84;
    const RSP_FAILED: u8 = 0xA0;

    struct ScriptedTool {
        sent: Vec<Vec<u8>>,
        replies: VecDeque<Vec<u8>>,
    }

    impl ScriptedTool {
        fn new(replies: &[&[u8]]) -> Self {
            Self {
                sent: Vec::new(),
                replies: replies.iter().map(|r| r.to_vec()).collect(),
            }
        }
    }

    impl Transport for ScriptedTool {
        fn send(&mut self, report: &[u8]) -> edbglink_transport::Result<()> {
            self.sent.push(report.to_vec());
            Ok(())
        }

        fn receive(&mut self) -> edbglink_transport::Result<Vec<u8>> {
            self.replies.pop_front().ok_or(TransportError::Disconnected)
        }
    }

    fn avr8(replies: &[&[u8]]) -> Avr8<ScriptedTool> {
        Avr8::new(ScriptedTool::new(replies))
    }

    fn sent(avr8: Avr8<ScriptedTool>) -> Vec<Vec<u8>> {
        avr8.into_transport().sent
    }

    #[test]
    fn activate_physical_with_reset_sets_flag_byte() {
        let mut dbg = avr8(&[&[HANDLER, RSP_OK]]);
        let id = dbg.activate_physical(true).unwrap();
        assert_eq!(id, None);
        // body third byte (after cmd, version) is the reset flag
        assert_eq!(sent(dbg), vec![vec![HANDLER, 0x10, 0x00, 0x01]]);
    }

    #[test]
    fn activate_physical_without_reset_clears_flag_byte() {
        let mut dbg = avr8(&[&[HANDLER, RSP_OK]]);
        dbg.activate_physical(false).unwrap();
        assert_eq!(sent(dbg), vec![vec![HANDLER, 0x10, 0x00, 0x00]]);
    }

    #[test]
    fn activate_physical_returns_device_id_when_reported() {
        let mut dbg = avr8(&[&[HANDLER, RSP_DATA, 0x1E, 0x97, 0x0B, 0x00]]);
        let id = dbg.activate_physical(false).unwrap();
        assert_eq!(id, Some([0x1E, 0x97, 0x0B, 0x00]));
        assert!(dbg.session().physical_active);
    }

    #[test]
    fn activate_physical_accepts_empty_payload() {
        let mut dbg = avr8(&[&[HANDLER, RSP_OK]]);
        assert_eq!(dbg.activate_physical(false).unwrap(), None);
        assert!(dbg.session().physical_active);
    }

    #[test]
    fn activate_physical_rejects_odd_id_length() {
        let mut dbg = avr8(&[&[HANDLER, RSP_DATA, 0x01, 0x02]]);
        let err = dbg.activate_physical(false).unwrap_err();
        assert!(matches!(err, Avr8Error::DeviceIdLength(2)));
        assert!(!dbg.session().physical_active);
    }

    #[test]
    fn activate_physical_surfaces_invalid_state_rejection() {
        let mut dbg = avr8(&[&[HANDLER, RSP_FAILED, 0x31]]);
        let err = dbg.activate_physical(false).unwrap_err();
        assert_eq!(err.failure_code(), Some(0x31));
        assert!(err.to_string().contains("invalid physical state"));
    }

    #[test]
    fn erase_app_page_frame_is_bit_exact() {
        let mut dbg = avr8(&[&[HANDLER, RSP_OK]]);
        dbg.erase(EraseMode::AppPage, 0x0000_1000).unwrap();
        assert_eq!(
            sent(dbg),
            vec![vec![HANDLER, 0x20, 0x00, 0x04, 0x00, 0x10, 0x00, 0x00]]
        );
    }

    #[test]
    fn step_emits_one_frame_with_fixed_trailer() {
        let mut dbg = avr8(&[&[HANDLER, RSP_OK]]);
        dbg.step().unwrap();
        let frames = sent(dbg);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0], vec![HANDLER, 0x34, 0x00, 0x01, 0x01]);
    }

    #[test]
    fn stop_is_request_accepted_not_target_stopped() {
        // A single OK response completes the call; no second receive for a
        // break event.
        let mut dbg = avr8(&[&[HANDLER, RSP_OK]]);
        dbg.stop().unwrap();
        assert_eq!(dbg.session().execution, ExecutionState::Stopped);
        assert_eq!(sent(dbg), vec![vec![HANDLER, 0x31, 0x00, 0x01]]);
    }

    #[test]
    fn reset_and_run_frames() {
        let mut dbg = avr8(&[&[HANDLER, RSP_OK], &[HANDLER, RSP_OK]]);
        dbg.reset().unwrap();
        dbg.run().unwrap();
        assert_eq!(dbg.session().execution, ExecutionState::Running);
        assert_eq!(
            sent(dbg),
            vec![
                vec![HANDLER, 0x30, 0x00, 0x01],
                vec![HANDLER, 0x32, 0x00],
            ]
        );
    }

    #[test]
    fn run_to_encodes_address_little_endian() {
        let mut dbg = avr8(&[&[HANDLER, RSP_OK]]);
        dbg.run_to(0x0001_0200).unwrap();
        assert_eq!(
            sent(dbg),
            vec![vec![HANDLER, 0x33, 0x00, 0x00, 0x02, 0x01, 0x00]]
        );
    }

    #[test]
    fn memory_read_frame_and_payload() {
        let mut dbg = avr8(&[&[HANDLER, RSP_DATA, 0xAA, 0xBB, 0xCC, 0xDD]]);
        let data = dbg.memory_read(Memtype::Sram, 0x0080_0100, 4).unwrap();
        assert_eq!(data.as_ref(), &[0xAA, 0xBB, 0xCC, 0xDD]);
        assert_eq!(
            sent(dbg),
            vec![vec![
                HANDLER, 0x21, 0x00, 0x20, // memtype SRAM
                0x00, 0x01, 0x80, 0x00, // address LE
                0x04, 0x00, 0x00, 0x00, // length LE
            ]]
        );
    }

    #[test]
    fn memory_read_rejects_short_payload() {
        let mut dbg = avr8(&[&[HANDLER, RSP_DATA, 0xAA]]);
        let err = dbg.memory_read(Memtype::Sram, 0, 4).unwrap_err();
        assert!(matches!(
            err,
            Avr8Error::ReadLength {
                requested: 4,
                got: 1,
            }
        ));
    }

    #[test]
    fn memory_write_frame_has_reserved_byte() {
        let mut dbg = avr8(&[&[HANDLER, RSP_OK]]);
        dbg.memory_write(Memtype::Eeprom, 0x10, &[0x5A, 0xA5]).unwrap();
        assert_eq!(
            sent(dbg),
            vec![vec![
                HANDLER, 0x23, 0x00, 0x22, // memtype EEPROM
                0x10, 0x00, 0x00, 0x00, // address LE
                0x02, 0x00, 0x00, 0x00, // length LE
                0x00, // reserved
                0x5A, 0xA5,
            ]]
        );
    }

    #[test]
    fn regfile_write_wrong_length_fails_before_any_frame() {
        let mut dbg = avr8(&[]);
        for len in [0usize, 1, 31, 33, 64] {
            let err = dbg.regfile_write(&vec![0u8; len]).unwrap_err();
            assert!(matches!(err, Avr8Error::RegfileLength { got } if got == len));
        }
        assert!(sent(dbg).is_empty());
    }

    #[test]
    fn regfile_write_delegates_to_memory_write() {
        let mut dbg = avr8(&[&[HANDLER, RSP_OK]]);
        let regs = [0x11u8; REGFILE_SIZE];
        dbg.regfile_write(&regs).unwrap();

        let frames = sent(dbg);
        assert_eq!(frames.len(), 1);
        // memory write over the regfile region at address 0, length 32
        assert_eq!(&frames[0][..13], &[
            HANDLER, 0x23, 0x00, 0xB8, 0x00, 0x00, 0x00, 0x00, 0x20, 0x00, 0x00, 0x00, 0x00,
        ]);
        assert_eq!(&frames[0][13..], &regs);
    }

    #[test]
    fn regfile_read_returns_fixed_array() {
        let mut reply = vec![HANDLER, RSP_DATA];
        reply.extend(0u8..32);
        let mut dbg = avr8(&[&reply]);
        let regs = dbg.regfile_read().unwrap();
        assert_eq!(regs[0], 0);
        assert_eq!(regs[31], 31);
    }

    #[test]
    fn program_counter_round_trip() {
        let mut dbg = avr8(&[
            &[HANDLER, RSP_PC, 0x00, 0x10, 0x00, 0x00],
            &[HANDLER, RSP_OK],
        ]);
        let pc = dbg.program_counter_read().unwrap();
        assert_eq!(pc, 0x0000_1000);
        dbg.program_counter_write(0x0000_2000).unwrap();
        assert_eq!(
            sent(dbg),
            vec![
                vec![HANDLER, 0x35, 0x00],
                vec![HANDLER, 0x36, 0x00, 0x00, 0x20, 0x00, 0x00],
            ]
        );
    }

    #[test]
    fn program_counter_read_expects_pc_status() {
        let mut dbg = avr8(&[&[HANDLER, RSP_DATA, 0x00, 0x10, 0x00, 0x00]]);
        let err = dbg.program_counter_read().unwrap_err();
        assert!(matches!(
            err,
            Avr8Error::Protocol(ProtocolError::UnexpectedStatus {
                expected: Status::PcValue,
                actual: Status::Data,
            })
        ));
    }

    #[test]
    fn software_breakpoint_frames() {
        let mut dbg = avr8(&[
            &[HANDLER, RSP_OK],
            &[HANDLER, RSP_OK],
            &[HANDLER, RSP_OK],
        ]);
        dbg.software_breakpoint_set(0x0200).unwrap();
        dbg.software_breakpoint_clear(0x0200).unwrap();
        dbg.software_breakpoint_clear_all().unwrap();
        assert_eq!(
            sent(dbg),
            vec![
                vec![HANDLER, 0x43, 0x00, 0x00, 0x02, 0x00, 0x00],
                vec![HANDLER, 0x44, 0x00, 0x00, 0x02, 0x00, 0x00],
                vec![HANDLER, 0x45, 0x00],
            ]
        );
    }

    #[test]
    fn config_writes_are_parameter_sets() {
        let mut dbg = avr8(&[
            &[HANDLER, RSP_OK],
            &[HANDLER, RSP_OK],
            &[HANDLER, RSP_OK],
            &[HANDLER, RSP_OK],
        ]);
        dbg.set_variant(Variant::TinyX).unwrap();
        dbg.set_function(Function::Debugging).unwrap();
        dbg.set_interface(PhysicalInterface::Updi).unwrap();
        dbg.set_option(OptionParam::RunTimers, 0x01).unwrap();
        assert_eq!(
            sent(dbg),
            vec![
                vec![HANDLER, 0x01, 0x00, 0x00, 0x00, 0x01, 0x05],
                vec![HANDLER, 0x01, 0x00, 0x00, 0x01, 0x01, 0x02],
                vec![HANDLER, 0x01, 0x00, 0x01, 0x00, 0x01, 0x08],
                vec![HANDLER, 0x01, 0x00, 0x03, 0x00, 0x01, 0x01],
            ]
        );
    }

    #[test]
    fn daisy_chain_payload_is_length_prefixed() {
        let mut dbg = avr8(&[&[HANDLER, RSP_OK]]);
        dbg.configure_daisy_chain([1, 2, 3, 4]).unwrap();
        assert_eq!(
            sent(dbg),
            vec![vec![
                HANDLER, 0x01, 0x00, 0x01, 0x01, 0x05, 0x04, 0x01, 0x02, 0x03, 0x04,
            ]]
        );
    }

    #[test]
    fn write_device_data_targets_device_context() {
        let mut dbg = avr8(&[&[HANDLER, RSP_OK]]);
        dbg.write_device_data(&[0xDE, 0xAD]).unwrap();
        assert_eq!(
            sent(dbg),
            vec![vec![HANDLER, 0x01, 0x00, 0x02, 0x00, 0x02, 0xDE, 0xAD]]
        );
    }

    #[test]
    fn get_id_returns_raw_payload() {
        let mut dbg = avr8(&[&[HANDLER, RSP_DATA, 0x1E, 0x95, 0x0F, 0x00]]);
        let id = dbg.get_id().unwrap();
        assert_eq!(id.as_ref(), &[0x1E, 0x95, 0x0F, 0x00]);
        assert_eq!(sent(dbg), vec![vec![HANDLER, 0x12, 0x00]]);
    }

    #[test]
    fn lifecycle_updates_advisory_session_state() {
        let mut dbg = avr8(&[
            &[HANDLER, RSP_OK], // activate
            &[HANDLER, RSP_OK], // attach
            &[HANDLER, RSP_OK], // enter progmode
            &[HANDLER, RSP_OK], // leave progmode
            &[HANDLER, RSP_OK], // detach
            &[HANDLER, RSP_OK], // deactivate
        ]);
        assert_eq!(dbg.session(), SessionState::default());

        dbg.activate_physical(false).unwrap();
        assert!(dbg.session().physical_active);

        dbg.attach(true).unwrap();
        assert!(dbg.session().attached);
        assert_eq!(dbg.session().execution, ExecutionState::Stopped);

        dbg.enter_progmode().unwrap();
        assert!(dbg.session().in_progmode);

        dbg.leave_progmode().unwrap();
        assert!(!dbg.session().in_progmode);

        dbg.detach().unwrap();
        assert!(!dbg.session().attached);
        assert_eq!(dbg.session().execution, ExecutionState::Unknown);

        dbg.deactivate_physical().unwrap();
        assert_eq!(dbg.session(), SessionState::default());
    }

    #[test]
    fn rejected_transition_leaves_session_state_untouched() {
        let mut dbg = avr8(&[&[HANDLER, RSP_FAILED, 0x31]]);
        let err = dbg.attach(false).unwrap_err();
        assert_eq!(err.failure_code(), Some(0x31));
        assert!(!dbg.session().attached);
    }
}
