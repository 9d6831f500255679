//!# CAN message router
//!
//! Routes received CAN frames to per-identifier callbacks. The route table is
//! a [StaticList], so adding a route never allocates: the caller owns the
//! [RouteItem] storage and the route stays registered for as long as that
//! item lives. This makes the router usable from interrupt-driven receive
//! paths where heap allocation is disallowed.
//!
//!```
//!use embedded_util::can::{CanRouter, FnHandler, Route};
//!use embedded_util::example::ExampleFrame;
//!use embedded_util::static_list::Item;
//!use embedded_can::{Frame, StandardId};
//!use core::cell::Cell;
//!
//!let seen = Cell::new(0u32);
//!let handler = FnHandler(|_frame: &ExampleFrame| seen.set(seen.get() + 1));
//!
//!let mut router = CanRouter::new();
//!let id = StandardId::new(0x55).unwrap();
//!let mut route = Item::new(Route::new(id).with_handler(&handler));
//!unsafe { router.add_route(&mut route) };
//!
//!let frame = ExampleFrame::new(id, &[1, 2]).unwrap();
//!assert!(router.dispatch(&frame));
//!assert_eq!(seen.get(), 1);
//!```
//!
//! Dispatch is synchronous and single-threaded; callers running handlers from
//! a receive interrupt serialize access themselves.

use crate::static_list::{Item, StaticList};
use embedded_can::nb::Can;
use embedded_can::{Frame, Id};
use log::debug;

/// Callback invoked for frames matching a route.
pub trait MessageHandler<F: Frame> {
    fn on_message(&self, frame: &F);
}

/// Adapter turning a plain closure into a [MessageHandler].
pub struct FnHandler<C>(pub C);

impl<F: Frame, C: Fn(&F)> MessageHandler<F> for FnHandler<C> {
    fn on_message(&self, frame: &F) {
        (self.0)(frame)
    }
}

/// A single routing table entry: an identifier and an optional handler.
///
/// A route without a handler still matches; the frame is consumed and
/// dropped, mirroring a callback slot that has not been filled in yet.
pub struct Route<'a, F: Frame> {
    id: Id,
    handler: Option<&'a dyn MessageHandler<F>>,
}

impl<'a, F: Frame> Route<'a, F> {
    pub fn new(id: impl Into<Id>) -> Self {
        Self {
            id: id.into(),
            handler: None,
        }
    }

    pub fn with_handler(mut self, handler: &'a dyn MessageHandler<F>) -> Self {
        self.handler = Some(handler);
        self
    }

    pub fn id(&self) -> Id {
        self.id
    }
}

/// List node carrying a [Route]; its storage belongs to the caller.
pub type RouteItem<'a, F> = Item<Route<'a, F>>;

/// Router dispatching CAN frames to the first matching [Route].
pub struct CanRouter<'a, F: Frame> {
    routes: StaticList<Route<'a, F>>,
}

impl<'a, F: Frame> CanRouter<'a, F> {
    pub const fn new() -> Self {
        Self {
            routes: StaticList::new(),
        }
    }

    /// Register a route.
    ///
    /// The route is removed again when the caller drops the [RouteItem].
    ///
    /// # Safety
    ///
    /// Same contract as [StaticList::push_back]: while the item stays
    /// registered it must not be dropped or accessed through its own handle
    /// during a borrow of the router ([dispatch](Self::dispatch),
    /// [poll](Self::poll), [routes](Self::routes)), and moving the item or
    /// the router requires a [relink](Self::relink) before further use.
    pub unsafe fn add_route(&mut self, route: &mut RouteItem<'a, F>) {
        self.routes.push_back(route);
    }

    /// The routing table, in registration order.
    ///
    /// Meant for inspection and tests; dispatching goes through
    /// [dispatch](Self::dispatch).
    pub fn routes(&self) -> &StaticList<Route<'a, F>> {
        &self.routes
    }

    /// Run the first route matching the frame's identifier.
    ///
    /// Returns whether any route matched. Unrouted frames are dropped.
    pub fn dispatch(&self, frame: &F) -> bool {
        for route in &self.routes {
            if route.id == frame.id() {
                if let Some(handler) = route.handler {
                    handler.on_message(frame);
                }
                return true;
            }
        }

        debug!("no route for CAN frame id {:?}", frame.id());
        false
    }

    /// Receive at most one frame from `bus` and dispatch it.
    ///
    /// Returns `Ok(true)` if a frame was received, `Ok(false)` if the bus had
    /// nothing pending. Bus errors are propagated.
    pub fn poll<C>(&self, bus: &mut C) -> Result<bool, C::Error>
    where
        C: Can<Frame = F>,
    {
        match bus.receive() {
            Ok(frame) => {
                self.dispatch(&frame);
                Ok(true)
            }
            Err(nb::Error::WouldBlock) => Ok(false),
            Err(nb::Error::Other(error)) => Err(error),
        }
    }

    /// Repair route back-references after the router was moved.
    ///
    /// # Safety
    ///
    /// Same contract as [StaticList::relink]: every registered route item
    /// must still be alive at the address it was registered at.
    pub unsafe fn relink(&mut self) {
        self.routes.relink();
    }
}

impl<F: Frame> Default for CanRouter<'_, F> {
    fn default() -> Self {
        Self::new()
    }
}
