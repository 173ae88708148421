//! Open-list stack for nested list rendering.
//!
//! The stack knows nothing about markup. [`ListStack::enter`] and
//! [`ListStack::close_all`] return the open and close operations the
//! renderer must emit, in order.

use crate::model::ListKind;

/// One open list wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Markup kind of the wrapper
    pub kind: ListKind,

    /// Nesting level the wrapper belongs to (0 = outermost)
    pub level: usize,
}

/// A transition the renderer must emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackOp {
    /// Open a list wrapper
    Open(Frame),
    /// Close a list wrapper
    Close(Frame),
}

/// Stack of currently open list wrappers.
///
/// Invariant: after [`enter`](Self::enter) for level `n`, the depth is
/// exactly `n + 1` and the top frame has the entered kind.
#[derive(Debug, Clone, Default)]
pub struct ListStack {
    frames: Vec<Frame>,
}

impl ListStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of open frames.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Check if no list is open.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Innermost open frame.
    pub fn top(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Move the stack to hold a list item of `kind` at `level`.
    ///
    /// Levels that must be opened below `level` get their kind from
    /// `intermediate`, which is called with each missing level index.
    pub fn enter<F>(&mut self, level: usize, kind: ListKind, mut intermediate: F) -> Vec<StackOp>
    where
        F: FnMut(usize) -> ListKind,
    {
        let target = level + 1;
        let mut ops = Vec::new();

        while self.frames.len() < target {
            let depth = self.frames.len();
            let frame = Frame {
                kind: if depth == level {
                    kind
                } else {
                    intermediate(depth)
                },
                level: depth,
            };
            self.frames.push(frame);
            ops.push(StackOp::Open(frame));
        }

        while self.frames.len() > target {
            if let Some(frame) = self.frames.pop() {
                ops.push(StackOp::Close(frame));
            }
        }

        if let Some(top) = self.frames.last_mut() {
            if top.kind != kind {
                let old = *top;
                top.kind = kind;
                ops.push(StackOp::Close(old));
                ops.push(StackOp::Open(*top));
            }
        }

        if !ops.is_empty() {
            log::debug!("list stack at level {}: {:?}", level, ops);
        }
        ops
    }

    /// Close every open frame, innermost first.
    pub fn close_all(&mut self) -> Vec<StackOp> {
        let mut ops = Vec::with_capacity(self.frames.len());
        while let Some(frame) = self.frames.pop() {
            ops.push(StackOp::Close(frame));
        }
        ops
    }
}
