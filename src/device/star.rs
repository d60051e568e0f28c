//! StarPRNT output device.

use std::io::Write;

use crate::device::Device;
use crate::error::{Error, Result};
use crate::ir::Op;

/// Encodes ops as StarPRNT bytes and writes them to `W`.
///
/// The device starts online, as a printer does at power-on. `Offline`
/// flushes the sink and makes the device ignore every op until the next
/// `Online`, mirroring how the mechanism behaves once deselected.
///
/// ```
/// use printml::device::{Device, StarDevice};
/// use printml::ir::Op;
///
/// let mut device = StarDevice::new(Vec::new());
/// device.apply(Op::SetBold(true))?;
/// device.apply(Op::Write("HI".into()))?;
/// assert_eq!(device.into_inner(), vec![0x1B, 0x45, b'H', b'I']);
/// # Ok::<(), printml::Error>(())
/// ```
pub struct StarDevice<W: Write> {
    sink: W,
    online: bool,
    strike: bool,
    dropped: usize,
}

impl<W: Write> StarDevice<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink,
            online: true,
            strike: false,
            dropped: 0,
        }
    }

    pub fn is_online(&self) -> bool {
        self.online
    }

    /// Whether strike-through was requested. The mechanism can't print it.
    pub fn strike(&self) -> bool {
        self.strike
    }

    /// Ops ignored while offline.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    pub fn into_inner(self) -> W {
        self.sink
    }

    fn write(&mut self, bytes: &[u8]) -> Result<()> {
        if bytes.is_empty() {
            return Ok(());
        }
        self.sink
            .write_all(bytes)
            .map_err(|e| Error::Device(format!("Write failed: {}", e)))
    }

    fn flush(&mut self) -> Result<()> {
        self.sink
            .flush()
            .map_err(|e| Error::Device(format!("Flush failed: {}", e)))
    }
}

impl<W: Write> Device for StarDevice<W> {
    fn apply(&mut self, op: Op) -> Result<()> {
        match op {
            Op::Online => {
                self.online = true;
                self.write(&op.to_bytes())
            }
            _ if !self.online => {
                self.dropped += 1;
                tracing::warn!(?op, "printer is offline, dropping op");
                Ok(())
            }
            Op::Offline => {
                self.online = false;
                self.flush()
            }
            Op::SetStrike(enabled) => {
                self.strike = enabled;
                tracing::debug!(enabled, "strike-through has no StarPRNT command");
                Ok(())
            }
            op => self.write(&op.to_bytes()),
        }
    }

    fn finish(&mut self) -> Result<()> {
        if self.dropped > 0 {
            tracing::warn!(dropped = self.dropped, "ops were sent while offline");
        }
        self.flush()
    }
}
