use core::cell::RefCell;

use critical_section::Mutex;

use crate::rtc::{driver::Pcf8523, transport::Transport};

/// A [`Pcf8523`] that can be reached from several execution contexts.
///
/// Each [`with`](Self::with) call runs inside a critical section, so a
/// read-modify-write issued from the main loop cannot interleave with one
/// issued from an interrupt handler. Suitable for a `static`.
pub struct SharedPcf8523<T> {
    inner: Mutex<RefCell<Pcf8523<T>>>,
}

impl<T> core::fmt::Debug for SharedPcf8523<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("SharedPcf8523").finish_non_exhaustive()
    }
}

impl<T: Transport> SharedPcf8523<T> {
    pub const fn new(rtc: Pcf8523<T>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(rtc)),
        }
    }

    /// Runs `f` with exclusive access to the driver.
    ///
    /// # Panics
    /// Panics if called re-entrantly from inside `f`.
    pub fn with<R>(&self, f: impl FnOnce(&mut Pcf8523<T>) -> R) -> R {
        critical_section::with(|cs| {
            let mut rtc = self.inner.borrow_ref_mut(cs);
            f(&mut *rtc)
        })
    }

    pub fn into_inner(self) -> Pcf8523<T> {
        self.inner.into_inner().into_inner()
    }
}
