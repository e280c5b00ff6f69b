use crate::envelope::Envelope;
use crate::errors::TransportError;

/// Delivers finished envelopes.
///
/// A transport reports only success or failure; nothing it does feeds back
/// into envelope construction. Retries, if any, are the implementor's
/// business.
pub trait Transport {
    /// Sends one envelope.
    fn send(&mut self, envelope: &Envelope) -> Result<(), TransportError>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn send(&mut self, envelope: &Envelope) -> Result<(), TransportError> {
        (**self).send(envelope)
    }
}

impl Transport for Vec<Envelope> {
    fn send(&mut self, envelope: &Envelope) -> Result<(), TransportError> {
        self.push(envelope.clone());
        Ok(())
    }
}
