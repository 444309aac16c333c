// SPDX-License-Identifier: MPL-2.0
//! Pull-to-reveal curtain interaction.
//!
//! A preview panel sits above a scrollable grid. Dragging the grid up past
//! the panel's bottom edge slides the panel away (Opening, then Opened on
//! release); pulling the grid down past its top brings it back (Closing,
//! then Closed). While the panel
//! moves the grid is frozen through an explicit scroll override so that one
//! physical motion never drives both.
//!
//! Everything here is pure: inputs are numbers, outputs are values. The
//! animation of rest-state snaps lives in the UI layer.

mod geometry;
mod machine;
mod session;
mod state;

pub use geometry::{Geometry, GeometryError};
pub use machine::{CurtainMachine, CurtainOutput};
pub use session::DragSession;
pub use state::CurtainState;
