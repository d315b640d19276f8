//! Assemble a multi-resolution ICO container from pre-rendered square PNGs.
//!
//! Inputs follow a fixed naming convention (`assets/app-<size>.png` by default,
//! see [`IconLayout`]). The largest input that exists is decoded once,
//! normalised to RGBA8 and resampled to every available size; the frames are
//! written as PNG entries of a single `.ico` file.
//!
//! ```no_run
//! let report = icon_assembler::assemble(&icon_assembler::IconLayout::default())?;
//! assert!(!report.sizes.is_empty());
//! # Ok::<(), icon_assembler::AssemblerError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assemble;
mod foundation;
mod inspect;
mod layout;

pub use assemble::{AssemblyReport, assemble, load_base, render_frames, write_ico};
pub use foundation::error::{AssemblerError, AssemblerResult};
pub use inspect::{IcoEntry, parse_ico_entries, read_ico_entries};
pub use layout::{DEFAULT_SIZES, IconLayout, MAX_ICO_SIZE};
