//! Arithmetic and elementary function kernels.

pub(crate) mod arith;
pub(crate) mod consts;
pub(crate) mod fixed;
pub(crate) mod log;
pub(crate) mod pow;
pub(crate) mod round;
pub(crate) mod sqrt;
pub(crate) mod trig;
