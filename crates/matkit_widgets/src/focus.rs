//! Focus delivery
//!
//! Each control owns the receiving half of a focus channel and hands the
//! sending half, a [`FocusSignal`], back to whoever manages focus. Only the
//! owning control sees its events; there is no process-wide broadcast.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use crate::error::{Result, WidgetError};

/// A focus transition for one control
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusEvent {
    Gained,
    Lost,
}

impl FocusEvent {
    pub fn is_active(&self) -> bool {
        matches!(self, FocusEvent::Gained)
    }
}

/// Sending half of a control's focus channel
#[derive(Clone, Debug)]
pub struct FocusSignal {
    tx: Sender<FocusEvent>,
}

impl FocusSignal {
    pub fn send(&self, event: FocusEvent) -> Result<()> {
        self.tx
            .send(event)
            .map_err(|_| WidgetError::FocusChannelClosed)
    }

    pub fn focus_gained(&self) -> Result<()> {
        self.send(FocusEvent::Gained)
    }

    pub fn focus_lost(&self) -> Result<()> {
        self.send(FocusEvent::Lost)
    }
}

/// Receiving half, owned by the control
#[derive(Debug)]
pub(crate) struct FocusReceiver {
    rx: Receiver<FocusEvent>,
}

impl FocusReceiver {
    /// Pending events in the order they were sent
    pub(crate) fn drain(&self) -> Vec<FocusEvent> {
        let mut events = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        events
    }
}

/// Create a connected signal/receiver pair
pub(crate) fn focus_channel() -> (FocusSignal, FocusReceiver) {
    let (tx, rx) = mpsc::channel();
    (FocusSignal { tx }, FocusReceiver { rx })
}
