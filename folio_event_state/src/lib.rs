// Copyright 2026 the Folio Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Folio Event State: small state machines for legend and point interaction.
//!
//! Each module handles one interaction pattern:
//!
//! - [`activation`]: turn pointer press/release pairs **and** keyboard
//!   `Enter`/`Space` presses into a single "activate this entry" signal
//! - [`hover`]: track which point the pointer is over, for tooltips
//! - [`focus`]: roving keyboard focus across the entries of one legend
//!
//! The managers know nothing about legends, records or rendering. They accept
//! pre-resolved targets (whatever key type the caller uses) and produce
//! transitions that the presentation layer interprets.
//!
//! ## Activation
//!
//! ```rust
//! # #[cfg(feature = "activation")]
//! # fn example() {
//! use kurbo::Point;
//! use folio_event_state::activation::{ActivationState, Key};
//!
//! let mut activation = ActivationState::new(4.0);
//!
//! // Pointer press and release on the same legend entry.
//! activation.on_pointer_down(7_u32, Point::new(10.0, 10.0));
//! assert_eq!(activation.on_pointer_up(Some(&7), Point::new(11.0, 10.0)), Some(7));
//!
//! // The keyboard path yields the same activation.
//! assert_eq!(activation.on_key(Key::Enter, Some(7)), Some(7));
//! # }
//! ```
//!
//! ## Hover
//!
//! ```rust
//! use folio_event_state::hover::{HoverEvent, HoverState};
//!
//! let mut hover = HoverState::new();
//! assert_eq!(hover.update(Some(3)), Some(HoverEvent::Enter(3)));
//! assert_eq!(hover.update(Some(3)), None);
//! assert_eq!(hover.update(Some(4)), Some(HoverEvent::Move { from: 3, to: 4 }));
//! assert_eq!(hover.update(None), Some(HoverEvent::Leave(4)));
//! ```
//!
//! ## Features
//!
//! - `activation`: pointer/keyboard activation (requires the `kurbo` dependency)
//!
//! This crate is `no_std` compatible for all modules.

#![no_std]

#[cfg(feature = "activation")]
pub mod activation;
pub mod focus;
pub mod hover;
