//! One-shot state fields.
//!
//! A [`Pulse`] lives inside a screen state like any other field, but it is
//! meant to trigger a side effect (navigation, toast) once per write. The
//! value is paired with a generation counter; a [`PulseReader`] remembers the
//! last generation it delivered, so replaying the same snapshot never fires
//! the effect twice.

/// A one-shot signal stored in a state snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pulse<T> {
    value: Option<T>,
    generation: u64,
}

impl<T> Pulse<T> {
    /// An inert pulse that has never been set.
    pub fn new() -> Self {
        Self {
            value: None,
            generation: 0,
        }
    }

    /// Set a fresh value. Every call produces a new, unconsumed generation,
    /// even when the value equals the previous one.
    pub fn set(&mut self, value: T) {
        self.value = Some(value);
        self.generation += 1;
    }

    /// Latest value regardless of consumption. Prefer [`PulseReader::read`]
    /// when reacting to the signal.
    pub fn peek(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Number of times this pulse has been set.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl<T> Default for Pulse<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-subscriber consumption tracker for a single pulse field.
#[derive(Debug, Default, Clone)]
pub struct PulseReader {
    delivered: u64,
}

impl PulseReader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the pulse value if it was set since the last successful read,
    /// marking it consumed. Returns `None` (inert) otherwise.
    pub fn read<T: Clone>(&mut self, pulse: &Pulse<T>) -> Option<T> {
        if pulse.generation <= self.delivered {
            return None;
        }
        self.delivered = pulse.generation;
        pulse.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_pulse_is_inert() {
        let pulse: Pulse<String> = Pulse::new();
        let mut reader = PulseReader::new();
        assert_eq!(pulse.generation(), 0);
        assert_eq!(reader.read(&pulse), None);
    }

    #[test]
    fn set_value_is_read_exactly_once() {
        let mut pulse = Pulse::new();
        pulse.set("saved".to_string());

        let mut reader = PulseReader::new();
        assert_eq!(reader.read(&pulse), Some("saved".to_string()));
        assert_eq!(reader.read(&pulse), None);
        assert_eq!(reader.read(&pulse.clone()), None);
    }

    #[test]
    fn setting_same_value_again_fires_again() {
        let mut pulse = Pulse::new();
        let mut reader = PulseReader::new();

        pulse.set(true);
        assert_eq!(reader.read(&pulse), Some(true));

        pulse.set(true);
        assert_eq!(reader.read(&pulse), Some(true));
        assert_eq!(reader.read(&pulse), None);
    }

    #[test]
    fn readers_are_independent() {
        let mut pulse = Pulse::new();
        pulse.set(7);

        let mut first = PulseReader::new();
        let mut second = PulseReader::new();
        assert_eq!(first.read(&pulse), Some(7));
        assert_eq!(second.read(&pulse), Some(7));
        assert_eq!(first.read(&pulse), None);
    }

    #[test]
    fn peek_does_not_consume() {
        let mut pulse = Pulse::new();
        pulse.set(1);
        assert_eq!(pulse.peek(), Some(&1));

        let mut reader = PulseReader::new();
        assert_eq!(reader.read(&pulse), Some(1));
        assert_eq!(pulse.peek(), Some(&1));
    }
}
