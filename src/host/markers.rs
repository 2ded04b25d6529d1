//! Marker layers
//!
//! Two ways for a host to receive marker samples: a [`SinkLayer`] built
//! from per-index sinks, and a [`MarkerBuffer`] that keeps the latest
//! sample of every marker for a renderer to read.

use crate::animator::host::{MarkerLayer, MarkerSample, MarkerSink};
use parking_lot::Mutex as ParkingMutex;
use std::sync::Arc;

impl<F> MarkerSink for F
where
    F: FnMut(&MarkerSample) + Send,
{
    fn apply(&mut self, sample: &MarkerSample) {
        (*self)(sample)
    }
}

type SinkFactory = Box<dyn FnMut(usize) -> Option<Box<dyn MarkerSink>> + Send>;

/// Layer that creates one sink per marker on attach.
///
/// The factory may return `None` for an index; that marker is then
/// skipped every frame.
pub struct SinkLayer {
    factory: SinkFactory,
    sinks: Vec<Option<Box<dyn MarkerSink>>>,
}

impl SinkLayer {
    pub fn new<F>(factory: F) -> Self
    where
        F: FnMut(usize) -> Option<Box<dyn MarkerSink>> + Send + 'static,
    {
        Self {
            factory: Box::new(factory),
            sinks: Vec::new(),
        }
    }

    /// Number of sinks currently attached
    pub fn attached(&self) -> usize {
        self.sinks.iter().filter(|s| s.is_some()).count()
    }
}

impl MarkerLayer for SinkLayer {
    fn attach(&mut self, count: usize) {
        self.sinks = (0..count).map(|index| (self.factory)(index)).collect();
    }

    fn render(&mut self, index: usize, sample: &MarkerSample) -> bool {
        match self.sinks.get_mut(index) {
            Some(Some(sink)) => {
                sink.apply(sample);
                true
            }
            _ => false,
        }
    }

    fn detach(&mut self) {
        self.sinks.clear();
    }
}

impl std::fmt::Debug for SinkLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SinkLayer")
            .field("attached", &self.attached())
            .finish_non_exhaustive()
    }
}

/// Layer that stores the latest sample of every marker
#[derive(Debug, Default)]
pub struct MarkerBuffer {
    samples: Arc<ParkingMutex<Vec<Option<MarkerSample>>>>,
}

impl MarkerBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> MarkerSnapshot {
        MarkerSnapshot {
            samples: self.samples.clone(),
        }
    }
}

impl MarkerLayer for MarkerBuffer {
    fn attach(&mut self, count: usize) {
        *self.samples.lock() = vec![None; count];
    }

    fn render(&mut self, index: usize, sample: &MarkerSample) -> bool {
        match self.samples.lock().get_mut(index) {
            Some(slot) => {
                *slot = Some(*sample);
                true
            }
            None => false,
        }
    }

    fn detach(&mut self) {
        self.samples.lock().clear();
    }
}

/// Reader side of a [`MarkerBuffer`]
#[derive(Debug, Clone)]
pub struct MarkerSnapshot {
    samples: Arc<ParkingMutex<Vec<Option<MarkerSample>>>>,
}

impl MarkerSnapshot {
    /// Latest samples in marker order, skipping markers not yet rendered
    pub fn samples(&self) -> Vec<MarkerSample> {
        self.samples.lock().iter().flatten().copied().collect()
    }

    pub fn get(&self, index: usize) -> Option<MarkerSample> {
        self.samples.lock().get(index).copied().flatten()
    }

    pub fn is_attached(&self) -> bool {
        !self.samples.lock().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(index: usize) -> MarkerSample {
        MarkerSample {
            index,
            x: index as f64,
            y: 0.0,
            scale: 1.0,
            opacity: 1.0,
        }
    }

    #[test]
    fn test_sink_layer_lifecycle() {
        let mut layer = SinkLayer::new(|index| {
            (index % 2 == 0).then(|| Box::new(|_: &MarkerSample| {}) as Box<dyn MarkerSink>)
        });
        assert_eq!(layer.attached(), 0);

        layer.attach(4);
        assert_eq!(layer.attached(), 2);
        assert!(layer.render(0, &sample(0)));
        assert!(!layer.render(1, &sample(1)));
        assert!(!layer.render(9, &sample(9)));

        layer.detach();
        assert_eq!(layer.attached(), 0);
        assert!(!layer.render(0, &sample(0)));
    }

    #[test]
    fn test_buffer_keeps_latest() {
        let mut buffer = MarkerBuffer::new();
        let snapshot = buffer.snapshot();
        assert!(!snapshot.is_attached());
        assert!(!buffer.render(0, &sample(0)));

        buffer.attach(2);
        assert!(snapshot.is_attached());
        assert!(snapshot.samples().is_empty());

        buffer.render(1, &sample(1));
        let mut moved = sample(1);
        moved.x = 50.0;
        buffer.render(1, &moved);
        assert_eq!(snapshot.get(1), Some(moved));
        assert_eq!(snapshot.get(0), None);
        assert_eq!(snapshot.samples(), vec![moved]);

        buffer.detach();
        assert!(!snapshot.is_attached());
    }
}
