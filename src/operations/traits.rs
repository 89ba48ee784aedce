//! Core trait definitions for spectral descriptors.

use super::types::DescriptorMode;
use crate::{RealFloat, RealVector, SpectralFrame};

/// A per-frame reduction of a spectrum to one scalar.
///
/// Implementations may keep state between frames (onset functions compare
/// each frame against its predecessors), so every method that consumes a frame
/// takes `&mut self`.
pub trait SpectralDescriptor<F: RealFloat> {
    /// Computes the descriptor value of `frame` and advances any internal state.
    fn compute(&mut self, frame: &SpectralFrame<F>) -> F;

    /// Computes the descriptor value of `frame` and writes it to `output[0]`.
    ///
    /// Elements past the first are left untouched.
    fn process(&mut self, frame: &SpectralFrame<F>, output: &mut RealVector<F>) {
        let value = self.compute(frame);
        output.set(0, value);
    }

    /// Computes one value per frame, in order.
    fn compute_all(&mut self, frames: &[SpectralFrame<F>]) -> Vec<F> {
        frames.iter().map(|frame| self.compute(frame)).collect()
    }

    /// Forgets all previously processed frames.
    fn reset(&mut self);

    /// The algorithm this descriptor computes.
    fn mode(&self) -> DescriptorMode;
}
