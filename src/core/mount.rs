use std::cell::RefCell;

/// Holds the page controller once it has been attached to the document.
///
/// Later mounts hand back the stored value instead of wiring the page a
/// second time. A failed mount leaves the slot empty so it can be retried.
pub struct MountSlot<T> {
    inner: RefCell<Option<T>>,
}

impl<T> Default for MountSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MountSlot<T> {
    pub const fn new() -> Self {
        Self {
            inner: RefCell::new(None),
        }
    }

    #[inline]
    pub fn is_mounted(&self) -> bool {
        self.inner.borrow().is_some()
    }
}

impl<T: Clone> MountSlot<T> {
    #[inline]
    pub fn get(&self) -> Option<T> {
        self.inner.borrow().clone()
    }

    pub fn get_or_try_mount<E>(&self, mount: impl FnOnce() -> Result<T, E>) -> Result<T, E> {
        if let Some(existing) = self.get() {
            return Ok(existing);
        }
        // no borrow is held while mounting
        let value = mount()?;
        *self.inner.borrow_mut() = Some(value.clone());
        Ok(value)
    }
}
