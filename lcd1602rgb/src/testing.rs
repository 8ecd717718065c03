//! Recording I²C bus and delay for unit tests.

use crate::Lcd1602Rgb;
use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, NoAcknowledgeSource, Operation};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Event {
    Write { address: u8, bytes: Vec<u8> },
    Delay { ns: u64 },
}

impl Event {
    pub fn write(address: u8, bytes: &[u8]) -> Self {
        Event::Write { address, bytes: bytes.to_vec() }
    }

    pub fn delay_ms(ms: u32) -> Self {
        Event::Delay { ns: u64::from(ms) * 1_000_000 }
    }

    pub fn delay_ns(&self) -> u64 {
        match self {
            Event::Delay { ns } => *ns,
            Event::Write { .. } => 0,
        }
    }
}

/// Shared log of everything the bus and the delay have seen, in order.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    events: Rc<RefCell<Vec<Event>>>,
    failing: Rc<Cell<bool>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn module(&self) -> Lcd1602Rgb<MockBus, MockDelay> {
        Lcd1602Rgb::new(
            MockBus { recorder: self.clone() },
            MockDelay { recorder: self.clone() },
        )
    }

    /// Makes every following write fail with a NACK.
    pub fn fail_writes(&self) {
        self.failing.set(true);
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    /// Only the bus writes, without the delays.
    pub fn writes(&self) -> Vec<Event> {
        self.events
            .borrow()
            .iter()
            .filter(|event| matches!(event, Event::Write { .. }))
            .cloned()
            .collect()
    }

    fn push(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

#[derive(Debug)]
pub struct MockError(ErrorKind);

impl embedded_hal::i2c::Error for MockError {
    fn kind(&self) -> ErrorKind {
        self.0
    }
}

#[derive(Debug)]
pub struct MockBus {
    recorder: Recorder,
}

impl ErrorType for MockBus {
    type Error = MockError;
}

impl I2c for MockBus {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        if self.recorder.failing.get() {
            return Err(MockError(ErrorKind::NoAcknowledge(NoAcknowledgeSource::Address)));
        }
        for operation in operations.iter_mut() {
            match operation {
                Operation::Write(bytes) => self.recorder.push(Event::write(address, bytes)),
                Operation::Read(buffer) => buffer.fill(0),
            }
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct MockDelay {
    recorder: Recorder,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.recorder.push(Event::Delay { ns: ns.into() });
    }

    fn delay_ms(&mut self, ms: u32) {
        self.recorder.push(Event::delay_ms(ms));
    }
}
