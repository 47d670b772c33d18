//! Reusable UI components

mod animated_counter;

pub use animated_counter::AnimatedCounter;
