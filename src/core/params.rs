use std::sync::Arc;

use glam::Vec3;
use log::{debug, warn};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_DAMPING, DEFAULT_GRAVITY, DEFAULT_STIFFNESS, DEFAULT_WIND};

/// Force fields and solver tuning read by every strand each frame.
///
/// Values are not validated: stiffness outside `[0, 1]` may look unstable but
/// never fails.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsParams {
    pub gravity: Vec3,
    pub wind: Vec3,
    pub stiffness: f32,
    /// Accepted and stored only; the integrator does not apply it.
    pub damping: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity: Vec3::from_array(DEFAULT_GRAVITY),
            wind: Vec3::from_array(DEFAULT_WIND),
            stiffness: DEFAULT_STIFFNESS,
            damping: DEFAULT_DAMPING,
        }
    }
}

impl PhysicsParams {
    pub fn new(gravity: Vec3, wind: Vec3, stiffness: f32, damping: f32) -> Self {
        Self {
            gravity,
            wind,
            stiffness,
            damping,
        }
    }

    /// No gravity and no wind; the chain only relaxes toward its rest length.
    pub fn still() -> Self {
        Self {
            gravity: Vec3::ZERO,
            wind: Vec3::ZERO,
            ..Self::default()
        }
    }

    pub fn is_finite(&self) -> bool {
        self.gravity.is_finite()
            && self.wind.is_finite()
            && self.stiffness.is_finite()
            && self.damping.is_finite()
    }
}

/// Shared, lock-protected home of the active [`PhysicsParams`].
///
/// Cloning yields another handle to the same slot, so a UI thread can write
/// while the frame loop reads. Writes replace the whole value and reads copy
/// the whole value, so a frame never observes a partial update.
#[derive(Debug, Clone, Default)]
pub struct ParameterStore {
    inner: Arc<RwLock<PhysicsParams>>,
}

impl ParameterStore {
    pub fn new(params: PhysicsParams) -> Self {
        Self {
            inner: Arc::new(RwLock::new(params)),
        }
    }

    /// Another handle sharing this store.
    pub fn handle(&self) -> Self {
        self.clone()
    }

    /// Replaces the stored parameters by value.
    pub fn set(&self, params: PhysicsParams) {
        if !params.is_finite() {
            warn!("Accepting non-finite physics parameters: {params:?}");
        }
        *self.inner.write() = params;
        debug!(
            "physics params updated: gravity={} wind={} stiffness={} damping={}",
            params.gravity, params.wind, params.stiffness, params.damping
        );
    }

    pub fn set_components(&self, gravity: Vec3, wind: Vec3, stiffness: f32, damping: f32) {
        self.set(PhysicsParams::new(gravity, wind, stiffness, damping));
    }

    /// Copy of the current parameters; one call per frame.
    pub fn snapshot(&self) -> PhysicsParams {
        *self.inner.read()
    }

    /// Whether two handles point at the same slot.
    pub fn shares_with(&self, other: &ParameterStore) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_observe_each_others_writes() {
        let store = ParameterStore::default();
        let ui = store.handle();
        ui.set_components(Vec3::new(0.0, -0.01, 0.0), Vec3::ZERO, 0.2, 0.95);

        let seen = store.snapshot();
        assert_eq!(seen.gravity, Vec3::new(0.0, -0.01, 0.0));
        assert_eq!(seen.stiffness, 0.2);
        assert!(store.shares_with(&ui));
    }

    #[test]
    fn caller_vectors_are_copied() {
        let store = ParameterStore::default();
        let mut gravity = Vec3::new(0.0, -1.0, 0.0);
        store.set_components(gravity, Vec3::ZERO, 1.0, 1.0);
        gravity.y = 5.0;
        assert_eq!(store.snapshot().gravity.y, -1.0);
        assert_eq!(gravity.y, 5.0);
    }

    #[test]
    fn out_of_range_values_are_accepted() {
        let store = ParameterStore::default();
        store.set_components(Vec3::ZERO, Vec3::ZERO, 7.5, -3.0);
        let params = store.snapshot();
        assert_eq!(params.stiffness, 7.5);
        assert_eq!(params.damping, -3.0);
    }

    #[test]
    fn independent_stores_do_not_interfere() {
        let a = ParameterStore::default();
        let b = ParameterStore::default();
        a.set(PhysicsParams::still());
        assert_eq!(b.snapshot(), PhysicsParams::default());
        assert!(!a.shares_with(&b));
    }
}
