// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core interaction logic with ZERO external dependencies.
//!
//! Pure types and rules only: no toolkit, no filesystem, no logging. This
//! keeps the curtain testable without a rendering surface.
//!
//! # Modules
//!
//! - [`curtain`]: The pull-to-reveal state machine ([`CurtainMachine`](curtain::CurtainMachine),
//!   [`Geometry`](curtain::Geometry), [`CurtainState`](curtain::CurtainState))
//! - [`ui`]: Settings value objects ([`TopInset`](ui::TopInset),
//!   [`SettleDuration`](ui::SettleDuration), [`GridColumns`](ui::GridColumns),
//!   [`BufferCapacity`](ui::BufferCapacity))

pub mod curtain;
pub mod ui;
