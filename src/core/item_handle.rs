// Item Handle System (HWND-like)
// Identifies rendered item views so input can be routed back to them
//
// Usage:
//   let mut handles = HandleAllocator::new();
//   let handle = handles.allocate();
//   // Later, a tap on that view...
//   bar.item_tapped(handle);

/// Handle to one item view instance (similar to Windows HWND)
///
/// Handles are never reused, so a handle kept across `set_tabs` does not
/// silently alias a newer item view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemHandle(u64);

impl ItemHandle {
    /// Get the internal ID of this handle
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Hands out monotonically increasing item handles
#[derive(Debug, Clone)]
pub struct HandleAllocator {
    next_id: u64,
}

impl HandleAllocator {
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    /// Allocate a handle that has never been returned before
    pub fn allocate(&mut self) -> ItemHandle {
        let handle = ItemHandle(self.next_id);
        self.next_id += 1;
        handle
    }
}

impl Default for HandleAllocator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_are_unique() {
        let mut handles = HandleAllocator::new();
        let first = handles.allocate();
        let second = handles.allocate();
        let third = handles.allocate();

        assert_ne!(first, second);
        assert_ne!(second, third);
        assert_eq!(first.id() + 1, second.id());
        assert_eq!(second.id() + 1, third.id());
    }

    #[test]
    fn test_cloned_allocator_continues_sequence() {
        let mut handles = HandleAllocator::default();
        let _ = handles.allocate();
        let mut copy = handles.clone();

        assert_eq!(handles.allocate(), copy.allocate());
    }
}
