//! # Tree Walker
//!
//! Visits a markup tree in document order and drives a [`Device`]:
//!
//! ```text
//! element:  enter ops ─► children, each fully ─► exit ops
//! text:     Write, unless whitespace-only
//! ```
//!
//! Unknown elements contribute no ops of their own, but their children are
//! still visited. The walk uses an explicit stack, so a deeply nested
//! document costs heap, not call stack.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::device::Device;
use crate::error::{Error, Result};
use crate::markup::node::Node;
use crate::markup::registry::Tag;
use crate::markup::text;

/// Shared flag that stops a running pass.
///
/// The walker checks it before visiting each node, never between a node's
/// enter and exit ops.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

enum Frame<'a> {
    Visit(&'a Node),
    Exit(Tag),
}

/// Runs interpretation passes.
#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    cancel: Option<CancelToken>,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop passes when `token` is cancelled.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Walk `root` into `device`, then finish the device.
    ///
    /// Returns the number of ops applied. The first error (malformed
    /// attribute, device failure, cancellation) ends the pass; ops already
    /// applied stay applied.
    ///
    /// ```
    /// use printml::ir::{Op, Program};
    /// use printml::markup::{self, Interpreter};
    ///
    /// let root = markup::parse("<bold>HI</bold>")?;
    /// let mut program = Program::new();
    /// Interpreter::new().run(&root, &mut program)?;
    ///
    /// assert_eq!(
    ///     program.ops,
    ///     vec![Op::SetBold(true), Op::Write("HI".into()), Op::SetBold(false)]
    /// );
    /// # Ok::<(), printml::Error>(())
    /// ```
    pub fn run<D: Device + ?Sized>(&self, root: &Node, device: &mut D) -> Result<usize> {
        let mut applied = 0;
        let mut stack = vec![Frame::Visit(root)];

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Visit(node) => {
                    if self.cancelled() {
                        tracing::debug!(applied, "interpretation cancelled");
                        return Err(Error::Cancelled);
                    }
                    match node {
                        Node::Text(content) => {
                            if let Some(op) = text::filter(content) {
                                device.apply(op)?;
                                applied += 1;
                            }
                        }
                        Node::Element(element) => {
                            let tag = Tag::lookup(&element.name);
                            match tag {
                                Some(tag) => {
                                    for op in tag.enter(element)? {
                                        device.apply(op)?;
                                        applied += 1;
                                    }
                                    stack.push(Frame::Exit(tag));
                                }
                                None => {
                                    tracing::trace!(tag = %element.name, "unrecognized tag");
                                }
                            }
                            stack.extend(element.children.iter().rev().map(Frame::Visit));
                        }
                    }
                }
                Frame::Exit(tag) => {
                    for op in tag.exit() {
                        device.apply(op)?;
                        applied += 1;
                    }
                }
            }
        }

        device.finish()?;
        tracing::debug!(applied, "interpretation pass complete");
        Ok(applied)
    }

    fn cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancelToken::is_cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Op, Program, Size};
    use crate::markup::node::Element;
    use crate::protocol::text::Alignment;
    use pretty_assertions::assert_eq;

    fn walk(root: impl Into<Node>) -> Vec<Op> {
        let mut program = Program::new();
        Interpreter::new().run(&root.into(), &mut program).unwrap();
        program.ops
    }

    #[test]
    fn test_enter_children_exit_order() {
        let root = Element::new("center")
            .child(Element::new("bold").child("a"))
            .child("b");
        assert_eq!(
            walk(root),
            vec![
                Op::Justify(Alignment::Center),
                Op::SetBold(true),
                Op::Write("a".into()),
                Op::SetBold(false),
                Op::Write("b".into()),
                Op::Justify(Alignment::Left),
            ]
        );
    }

    #[test]
    fn test_unknown_tag_is_transparent() {
        let wrapped = Element::new("foo").child(Element::new("bold").child("x"));
        let bare = Element::new("bold").child("x");
        assert_eq!(walk(wrapped), walk(bare));
    }

    #[test]
    fn test_text_root() {
        assert_eq!(walk(Node::text("hi")), vec![Op::Write("hi".into())]);
        assert!(walk(Node::text("  \n")).is_empty());
    }

    #[test]
    fn test_size_resets_ignore_nesting() {
        let root = Element::new("large")
            .child(Element::new("medium").child("x"))
            .child("y");
        assert_eq!(
            walk(root),
            vec![
                Op::SetSize(Size::Large),
                Op::SetSize(Size::Medium),
                Op::Write("x".into()),
                Op::SetSize(Size::Small),
                Op::Write("y".into()),
                Op::SetSize(Size::Small),
            ]
        );
    }

    #[test]
    fn test_error_stops_pass_after_applied_ops() {
        let root = Element::new("bold")
            .child("before")
            .child(Element::new("feed").attr("lines", "x"))
            .child("after");
        let mut program = Program::new();
        let err = Interpreter::new().run(&Node::from(root), &mut program);

        assert!(matches!(err, Err(Error::InvalidAttribute { .. })));
        assert_eq!(
            program.ops,
            vec![Op::SetBold(true), Op::Write("before".into())]
        );
    }

    #[test]
    fn test_cancelled_before_start() {
        let token = CancelToken::new();
        token.cancel();
        let mut program = Program::new();
        let result = Interpreter::new()
            .with_cancel(token)
            .run(&Node::from(Element::new("bold").child("x")), &mut program);

        assert!(matches!(result, Err(Error::Cancelled)));
        assert!(program.is_empty());
    }

    /// Cancels the token as soon as the first op arrives.
    struct CancelOnFirstOp {
        token: CancelToken,
        program: Program,
    }

    impl Device for CancelOnFirstOp {
        fn apply(&mut self, op: Op) -> Result<()> {
            self.token.cancel();
            self.program.push(op);
            Ok(())
        }
    }

    #[test]
    fn test_cancel_waits_for_node_boundary() {
        let token = CancelToken::new();
        let mut device = CancelOnFirstOp {
            token: token.clone(),
            program: Program::new(),
        };
        // <printout> enters with one op; cancelling inside it must not
        // split a node's enter ops, and the pass stops before the child.
        let root = Element::new("printout").child("x");
        let result = Interpreter::new()
            .with_cancel(token)
            .run(&Node::from(root), &mut device);

        assert!(matches!(result, Err(Error::Cancelled)));
        assert_eq!(device.program.ops, vec![Op::Online]);
    }

    #[test]
    fn test_deep_nesting_does_not_recurse() {
        let mut root = Element::new("bold").child("x");
        for _ in 0..100_000 {
            root = Element::new("wrapper").child(root);
        }
        let root = Node::from(root);
        let mut program = Program::new();
        let applied = Interpreter::new().run(&root, &mut program).unwrap();
        assert_eq!(applied, 3);

        // Dropping a tree this deep recursively would overflow the test
        // thread; unwind it by hand.
        let mut pending = vec![root];
        while let Some(node) = pending.pop() {
            if let Node::Element(element) = node {
                pending.extend(element.children);
            }
        }
    }

    #[test]
    fn test_run_counts_applied_ops() {
        let root = Element::new("printout").child(Element::new("feed"));
        let mut program = Program::new();
        let applied = Interpreter::new().run(&Node::from(root), &mut program).unwrap();
        assert_eq!(applied, program.len());
        assert_eq!(applied, 4);
    }
}
