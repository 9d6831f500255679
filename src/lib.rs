#![cfg_attr(not(test), no_std)]
#![cfg_attr(feature = "strict", deny(warnings))]

//! # Convenience utilities for embedded driver authors
//!
//! Crate currently offers the following features:
//! * Bit-field algebra over register images: [bit::Mask], [bit::Value] and
//!   the scoped read-modify-write [bit::Modify]
//! * Numeric limits for arbitrary-width integers packed into wider storage:
//!   [bit_limits::BitLimits]
//! * A non-owning, non-allocating intrusive doubly linked list:
//!   [static_list::StaticList]
//! * A heap-free CAN message router built on top of it: [can::CanRouter]
//! * no_std support
//!
//! ## Example
//!
//!```
//!use embedded_util::bit::{self, Mask};
//!use embedded_util::static_list::{Item, StaticList};
//!
//!// Accumulate field updates against a register image, committed in a
//!// single write when the modify scope ends
//!const ENABLE: Mask = Mask::bit(0);
//!const PRESCALER: Mask = Mask::range(4, 7);
//!
//!let mut control: u32 = 0;
//!bit::modify(&mut control).insert(PRESCALER, 0xF).set(ENABLE);
//!assert_eq!(control, 0x0000_00F1);
//!
//!// Collect caller-owned values without allocating
//!let mut list = StaticList::new();
//!let mut first = Item::new(1);
//!let mut second = Item::new(2);
//!unsafe {
//!    list.push_back(&mut first);
//!    list.push_back(&mut second);
//!}
//!
//!assert_eq!(list.len(), 2);
//!assert!(list.iter().eq([1, 2].iter()));
//!```

extern crate alloc;

pub mod bit;
pub mod bit_limits;
pub mod can;
pub mod example;
pub mod static_list;

#[cfg(test)]
pub(crate) mod mocks;
#[cfg(test)]
mod tests;
