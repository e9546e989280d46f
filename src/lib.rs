//! v4l2-offsets - V4L2 structure layout generator
//!
//! Computes field offsets of a fixed set of `<linux/videodev2.h>` structures
//! and the pointer width of the target, and renders them as a Go source file
//! for the `v4l2` facade package, which marshals these structures by hand.
//!
//! The layouts come from bindgen's reading of the system header for the
//! cargo target, so the generator has to be rebuilt (not reused) whenever the
//! headers, compiler or target change.

pub mod arch;
pub mod emit;
pub mod error;
pub mod layout;

pub use arch::{ArchSource, ArchTag};
pub use emit::render;
pub use error::{GenError, Result};
pub use layout::{LayoutFacts, OffsetFact};
