//! Hand blocks from the sampling interrupt (or DMA callback) to the main loop.
//!
//! This is a single slot, not a queue. If the main loop is still busy when a newer block
//! arrives, the unread block is overwritten. The most recent block always wins.
use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::RawMutex;

use crate::audio::SampleBlock;
use crate::logging::debug;

struct Slot<const N: usize> {
    /// Some means the ready flag is set
    block: Option<SampleBlock<N>>,
    overwritten: u32,
}

/// Single slot, drop-oldest channel for [SampleBlock]s.
///
/// Use [embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex] when the producer is an interrupt.
pub struct BlockHandoff<M: RawMutex, const N: usize> {
    slot: Mutex<M, RefCell<Slot<N>>>,
}

impl<M: RawMutex, const N: usize> Default for BlockHandoff<M, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: RawMutex, const N: usize> BlockHandoff<M, N> {
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(RefCell::new(Slot {
                block: None,
                overwritten: 0,
            })),
        }
    }

    /// Producer side. Copy the block into the shadow slot and set the ready flag.
    ///
    /// Returns true if an unread block was overwritten.
    pub fn publish(&self, block: &SampleBlock<N>) -> bool {
        let overwrote = self.slot.lock(|slot| {
            let mut slot = slot.borrow_mut();

            let overwrote = slot.block.replace(*block).is_some();

            if overwrote {
                slot.overwritten = slot.overwritten.wrapping_add(1);
            }

            overwrote
        });

        if overwrote {
            debug!("unread block overwritten. processing is falling behind");
        }

        overwrote
    }

    /// Consumer side. Clear the ready flag and return the newest block, if there is one.
    ///
    /// The copy happens while the lock is held, so the producer can't tear it.
    pub fn try_take(&self) -> Option<SampleBlock<N>> {
        self.slot.lock(|slot| slot.borrow_mut().block.take())
    }

    pub fn is_ready(&self) -> bool {
        self.slot.lock(|slot| slot.borrow().block.is_some())
    }

    /// How many blocks were dropped because the consumer didn't take them in time. wraps around
    pub fn overwritten(&self) -> u32 {
        self.slot.lock(|slot| slot.borrow().overwritten)
    }
}
