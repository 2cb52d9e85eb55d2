// eval/mod.rs — Color evaluator module tree
//
// Every evaluator here is a pure function of its explicit inputs:
// no ambient uniforms, no wall clock, no per-call allocation that
// escapes. The caller threads time, resolution and pointer state
// through as parameters.

pub mod bands;
pub mod cache;
pub mod color;
pub mod frame;
pub mod horizon;
pub mod noise;
pub mod radial;
pub mod temporal;
