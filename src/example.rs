//! # Stand-in bus and frame for doc examples
//!
//! In-memory doubles of the CAN collaborators: [ExampleFrame] is a minimal
//! [embedded_can::Frame] and [ExampleBus] a non-blocking bus with canned
//! receive frames and a transmit log. Real applications substitute their
//! controller driver's types.

use alloc::vec::Vec;
use embedded_can::nb::Can;
use embedded_can::{ErrorKind, Frame, Id};

/// Classic CAN frame with up to 8 data bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleFrame {
    id: Id,
    data: [u8; 8],
    dlc: usize,
    remote: bool,
}

impl Frame for ExampleFrame {
    fn new(id: impl Into<Id>, data: &[u8]) -> Option<Self> {
        if data.len() > 8 {
            return None;
        }

        let mut buffer = [0u8; 8];
        buffer[..data.len()].copy_from_slice(data);

        Some(Self {
            id: id.into(),
            data: buffer,
            dlc: data.len(),
            remote: false,
        })
    }

    fn new_remote(id: impl Into<Id>, dlc: usize) -> Option<Self> {
        if dlc > 8 {
            return None;
        }

        Some(Self {
            id: id.into(),
            data: [0u8; 8],
            dlc,
            remote: true,
        })
    }

    fn is_extended(&self) -> bool {
        matches!(self.id, Id::Extended(_))
    }

    fn is_remote_frame(&self) -> bool {
        self.remote
    }

    fn id(&self) -> Id {
        self.id
    }

    fn dlc(&self) -> usize {
        self.dlc
    }

    fn data(&self) -> &[u8] {
        &self.data[..self.dlc]
    }
}

/// Bus delivering previously enqueued frames and logging transmissions.
#[derive(Debug, Default)]
pub struct ExampleBus {
    rx: Vec<ExampleFrame>,
    tx: Vec<ExampleFrame>,
}

impl ExampleBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a frame for a later [Can::receive] call.
    pub fn enqueue(&mut self, frame: ExampleFrame) {
        self.rx.push(frame);
    }

    /// Frames transmitted so far.
    pub fn sent(&self) -> &[ExampleFrame] {
        &self.tx
    }
}

impl Can for ExampleBus {
    type Frame = ExampleFrame;
    type Error = ErrorKind;

    fn transmit(&mut self, frame: &ExampleFrame) -> nb::Result<Option<ExampleFrame>, ErrorKind> {
        self.tx.push(frame.clone());
        Ok(None)
    }

    fn receive(&mut self) -> nb::Result<ExampleFrame, ErrorKind> {
        if self.rx.is_empty() {
            return Err(nb::Error::WouldBlock);
        }

        Ok(self.rx.remove(0))
    }
}
