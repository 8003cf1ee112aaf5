// libpn532/src/transport/mock.rs

use std::collections::VecDeque;

use crate::transport::traits::Transport;
use crate::{Error, Result};

/// Mock transport for unit tests. It records written frames and serves
/// queued read transactions in order.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub written: Vec<Vec<u8>>,
    pub reads: VecDeque<Vec<u8>>,
    /// Length requested by every read call, in order
    pub read_requests: Vec<usize>,
    /// Testing hook: number of subsequent writes that should fail
    pub write_failures: usize,
    /// Testing hook: number of subsequent reads that should fail
    pub read_failures: usize,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the bytes returned by one future read transaction.
    pub fn push_read(&mut self, bytes: Vec<u8>) {
        self.reads.push_back(bytes);
    }

    /// Set how many subsequent write calls should fail (for tests).
    pub fn set_write_failures(&mut self, n: usize) {
        self.write_failures = n;
    }

    /// Set how many subsequent read calls should fail (for tests).
    pub fn set_read_failures(&mut self, n: usize) {
        self.read_failures = n;
    }

    pub fn pop_written(&mut self) -> Option<Vec<u8>> {
        self.written.pop()
    }
}

impl Transport for MockTransport {
    fn write(&mut self, data: &[u8], _timeout_ms: u64) -> Result<()> {
        if self.write_failures > 0 {
            self.write_failures -= 1;
            return Err(Error::Transport("simulated write failure".into()));
        }
        self.written.push(data.to_vec());
        Ok(())
    }

    fn read(&mut self, buf: &mut [u8], _timeout_ms: u64) -> Result<()> {
        self.read_requests.push(buf.len());
        if self.read_failures > 0 {
            self.read_failures -= 1;
            return Err(Error::Transport("simulated read failure".into()));
        }
        let next = self.reads.pop_front().ok_or(Error::Timeout)?;
        if next.len() < buf.len() {
            return Err(Error::Transport(format!(
                "short read: wanted {} bytes, queued {}",
                buf.len(),
                next.len()
            )));
        }
        // The bus master stops clocking after buf.len() bytes
        buf.copy_from_slice(&next[..buf.len()]);
        Ok(())
    }
}
