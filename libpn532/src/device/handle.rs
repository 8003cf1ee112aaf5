// libpn532/src/device/handle.rs

use std::marker::PhantomData;

use derive_more::Display;

use crate::card::TargetA;
use crate::clock::{Clock, SystemClock};
use crate::device::config::DriverConfig;
use crate::device::link;
use crate::protocol::codec;
use crate::protocol::{Command, Response};
use crate::transport::Transport;
use crate::types::{FirmwareVersion, Uid};
use crate::{Error, Result};

/// Type-state markers
pub struct Uninitialized;
pub struct Initialized;

/// Progress of a single command exchange.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    #[display(fmt = "idle")]
    Idle,
    #[display(fmt = "encoded")]
    Encoded,
    #[display(fmt = "transmitted")]
    Transmitted,
    #[display(fmt = "ack-pending")]
    AckPending,
    #[display(fmt = "ack-ok")]
    AckOk,
    #[display(fmt = "response-pending")]
    ResponsePending,
    #[display(fmt = "done")]
    Done,
    #[display(fmt = "failed")]
    Failed,
}

/// PN532 session: owns the transport, the clock and the configuration.
/// The controller must be brought up with `begin` before targets can be
/// listed; every operation borrows the device mutably so only one command
/// is ever in flight.
pub struct Device<State = Uninitialized> {
    transport: Box<dyn Transport>,
    clock: Box<dyn Clock>,
    config: DriverConfig,
    _state: PhantomData<State>,
}

impl<State> std::fmt::Debug for Device<State> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Device")
            .field("state", &std::any::type_name::<State>())
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Device<Uninitialized> {
    pub fn new(transport: Box<dyn Transport>, clock: Box<dyn Clock>, config: DriverConfig) -> Self {
        Self {
            transport,
            clock,
            config,
            _state: PhantomData,
        }
    }

    /// Create a Device from an existing Transport using the system clock
    /// and default configuration.
    pub fn new_with_transport(transport: Box<dyn Transport>) -> Self {
        Self::new(transport, Box::new(SystemClock::new()), DriverConfig::default())
    }

    /// Wake the controller and apply the mandatory SAM configuration.
    ///
    /// The first frame after power-up may only serve to wake the chip, so
    /// the GetFirmwareVersion sent here is allowed to fail.
    pub fn begin(mut self) -> Result<Device<Initialized>> {
        self.clock.delay_ms(self.config.wake_delay_ms);

        if let Err(e) = self.get_firmware_version() {
            log::debug!("wake command ignored: {}", e);
        }
        self.configure_sam()?;

        Ok(Device {
            transport: self.transport,
            clock: self.clock,
            config: self.config,
            _state: PhantomData,
        })
    }
}

impl<State> Device<State> {
    /// Run one full command exchange and return the parsed Response.
    ///
    /// encode -> write -> ACK -> response -> response code check. Nothing
    /// is retried: the first failure aborts the exchange.
    pub fn execute(&mut self, cmd: &Command, response_timeout_ms: u64) -> Result<Response> {
        let mut phase = Phase::Idle;
        let result = self.exchange(cmd, response_timeout_ms, &mut phase);
        if let Err(e) = &result {
            log::debug!(
                "command {:#04x} failed in {} phase: {}",
                cmd.command_code(),
                phase,
                e
            );
            log::trace!("command {:#04x}: {} -> {}", cmd.command_code(), phase, Phase::Failed);
        }
        result
    }

    fn exchange(
        &mut self,
        cmd: &Command,
        response_timeout_ms: u64,
        phase: &mut Phase,
    ) -> Result<Response> {
        let code = cmd.command_code();
        let mut advance = |next: Phase| {
            log::trace!("command {:#04x}: {} -> {}", code, *phase, next);
            *phase = next;
        };

        let params = cmd.encode();
        if params.len() > self.config.max_payload_len {
            return Err(Error::BufferTooSmall {
                needed: params.len(),
                capacity: self.config.max_payload_len,
            });
        }
        let wire = codec::encode_command_frame(cmd)?;
        advance(Phase::Encoded);

        link::send_frame(&mut *self.transport, &wire, &self.config)?;
        advance(Phase::Transmitted);

        advance(Phase::AckPending);
        link::read_ack(&mut *self.transport, &*self.clock, &self.config)?;
        advance(Phase::AckOk);

        advance(Phase::ResponsePending);
        let frame = link::read_response(
            &mut *self.transport,
            &*self.clock,
            &self.config,
            response_timeout_ms,
            cmd.response_capacity(),
        )?;
        let response = Response::decode(cmd, &frame, self.config.uid_capacity)?;
        advance(Phase::Done);
        Ok(response)
    }

    /// Query IC, version, revision and supported protocols.
    pub fn get_firmware_version(&mut self) -> Result<FirmwareVersion> {
        match self.execute(&Command::GetFirmwareVersion, self.config.response_timeout_ms)? {
            Response::FirmwareVersion(v) => Ok(v),
            other => Err(Error::ProtocolMismatch {
                expected: Command::GetFirmwareVersion.response_code(),
                actual: other.response_code(),
            }),
        }
    }

    /// Send SAMConfiguration with the configured mode, timeout and IRQ flag.
    pub fn configure_sam(&mut self) -> Result<()> {
        let cmd = Command::SamConfiguration(self.config.sam);
        match self.execute(&cmd, self.config.response_timeout_ms)? {
            Response::SamConfiguration => Ok(()),
            other => Err(Error::ProtocolMismatch {
                expected: cmd.response_code(),
                actual: other.response_code(),
            }),
        }
    }

    pub fn config(&self) -> &DriverConfig {
        &self.config
    }

    /// Give the transport back, ending the session.
    pub fn into_transport(self) -> Box<dyn Transport> {
        self.transport
    }
}

impl Device<Initialized> {
    /// Look for one ISO14443-A target at 106 kbps. `timeout_ms` bounds the
    /// wait for the response; `Ok(None)` means no target answered.
    pub fn detect_target_a(&mut self, timeout_ms: u64) -> Result<Option<TargetA>> {
        let cmd = Command::in_list_passive_target_a();
        match self.execute(&cmd, timeout_ms)? {
            Response::InListPassiveTarget(target) => Ok(target),
            other => Err(Error::ProtocolMismatch {
                expected: cmd.response_code(),
                actual: other.response_code(),
            }),
        }
    }

    /// UID of a nearby ISO14443-A target, `Ok(None)` when none is present.
    pub fn read_passive_target_a(&mut self, timeout_ms: u64) -> Result<Option<Uid>> {
        Ok(self.detect_target_a(timeout_ms)?.map(TargetA::into_uid))
    }
}
