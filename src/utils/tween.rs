//! Time-driven eased interpolation of cube properties.
use std::ops::{Add, Mul, Sub};

use bevy::math::curve::Curve;
use bevy::math::curve::easing::EaseFunction;
use bevy::prelude::*;

/// Interpolates from a start value to an end value over a fixed duration.
#[derive(Clone, Debug)]
pub struct Tween<T> {
    from: T,
    to: T,
    elapsed: f32,
    duration: f32,
    ease: EaseFunction,
}

impl<T> Tween<T>
where
    T: Copy + Add<Output = T> + Sub<Output = T> + Mul<f32, Output = T>,
{
    pub fn new(from: T, to: T, duration: f32, ease: EaseFunction) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration,
            ease,
        }
    }

    /// Moves the tween forward by `delta_secs` and returns the new value.
    pub fn advance(&mut self, delta_secs: f32) -> T {
        self.elapsed = (self.elapsed + delta_secs).min(self.duration.max(0.0));
        self.value()
    }

    pub fn value(&self) -> T {
        let eased = self.ease.sample_clamped(self.progress());
        self.from + (self.to - self.from) * eased
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }
}

/// Shrinks (or grows) a cube's scale.
#[derive(Component, Clone, Debug)]
pub struct ScaleTween(pub Tween<Vec3>);

/// Drives a cube's spin angles (x, y) towards a fixed value.
#[derive(Component, Clone, Debug)]
pub struct SpinTween(pub Tween<Vec2>);
