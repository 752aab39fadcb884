use std::sync::mpsc::{self, Receiver, TryRecvError};

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum SignalError {
    #[error("signal source disconnected")]
    Disconnected,
}

type Slot<T> = Box<dyn FnMut(T) + Send>;

/// An explicit callback registry standing in for toolkit signal/slot
/// connections. Slots receive every emitted value in registration order.
pub struct Signal<T> {
    slots: Vec<Slot<T>>,
}

impl<T: Clone> Signal<T> {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    pub fn connect<F>(&mut self, slot: F)
    where
        F: FnMut(T) + Send + 'static,
    {
        self.slots.push(Box::new(slot));
    }

    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn emit(&mut self, value: T) {
        for slot in &mut self.slots {
            slot(value.clone());
        }
    }
}

impl<T: Clone + Send + 'static> Signal<T> {
    /// Bridges the signal into a channel. A dropped receiver just makes
    /// later deliveries no-ops for that slot.
    pub fn connect_channel(&mut self) -> Receiver<T> {
        let (sender, receiver) = mpsc::channel();
        self.connect(move |value| {
            let _ = sender.send(value);
        });
        receiver
    }
}

impl<T: Clone> Default for Signal<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The eventual result of a signal emission, decoupled from any event loop.
pub struct Promise<T> {
    receiver: Receiver<T>,
}

impl<T> Promise<T> {
    pub fn try_take(&self) -> Result<Option<T>, SignalError> {
        match self.receiver.try_recv() {
            Ok(value) => Ok(Some(value)),
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Disconnected) => Err(SignalError::Disconnected),
        }
    }

    pub fn wait(self) -> Result<T, SignalError> {
        self.receiver.recv().map_err(|_| SignalError::Disconnected)
    }
}

/// Registers a one-shot listener on `signal`, runs `func`, and returns the
/// promise of the value the signal will deliver. `func` typically kicks off
/// whatever operation makes the signal fire.
pub fn connect_future<T, F>(signal: &mut Signal<T>, func: F) -> Promise<T>
where
    T: Clone + Send + 'static,
    F: FnOnce(),
{
    let receiver = signal.connect_channel();
    func();
    Promise { receiver }
}
