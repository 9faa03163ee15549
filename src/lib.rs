//! Rocket Boost game library.
//!
//! An arcade rocket game built on Bevy and Rapier3D.  The interesting part is
//! [`containment`]: a soft boundary that damps a body's escape velocity near
//! the faces of a box and fades its thrust out, with a hard clamp as the
//! safety net.

pub mod config;
pub mod constants;
pub mod containment;
pub mod error;
pub mod graphics;
pub mod level;
pub mod motion;
pub mod rocket;
