//! Stack-safe recursion via trampolining.
//!
//! Rust does not guarantee tail call elimination, and the branching
//! evaluations (flatten, in-order traversal) are not tail recursive anyway:
//! after descending into a nested structure they still have to finish the
//! remainder. [`Recursion`] encodes each step as data. Pending "finish the
//! remainder" continuations are kept on a heap-allocated stack while
//! [`Recursion::run`] drives the computation in a loop, so the call stack
//! stays flat no matter how deeply the input is nested.

use std::fmt;

type Thunk<A> = Box<dyn FnOnce() -> Recursion<A>>;
type Continuation<A> = Box<dyn FnOnce(A) -> Recursion<A>>;

/// A recursive computation producing a value of type `A`.
///
/// # States
///
/// 1. `Done(A)` - finished with a value
/// 2. `Suspend(..)` - one more step has to be taken
/// 3. `Chain(..)` - run the inner computation, then feed its value to a continuation
///
/// # Examples
///
/// Counting the leaves of a nested structure descends into the left part and
/// continues with the right part afterwards:
///
/// ```rust
/// use shapewright::control::Recursion;
///
/// enum Node {
///     Leaf,
///     Branch(Box<Node>, Box<Node>),
/// }
///
/// fn count(node: Node, accumulator: usize) -> Recursion<usize> {
///     match node {
///         Node::Leaf => Recursion::done(accumulator + 1),
///         Node::Branch(left, right) => Recursion::suspend(move || count(*left, accumulator))
///             .and_then(move |accumulator| count(*right, accumulator)),
///     }
/// }
///
/// let tree = Node::Branch(
///     Box::new(Node::Leaf),
///     Box::new(Node::Branch(Box::new(Node::Leaf), Box::new(Node::Leaf))),
/// );
/// assert_eq!(count(tree, 0).run(), 3);
/// ```
pub enum Recursion<A> {
    /// The computation has completed with a value.
    Done(A),
    /// The computation needs another step.
    Suspend(Thunk<A>),
    /// Run the inner computation, then pass its value to the continuation.
    Chain(Box<Self>, Continuation<A>),
}

impl<A: 'static> Recursion<A> {
    /// Creates a finished computation.
    #[inline]
    pub const fn done(value: A) -> Self {
        Self::Done(value)
    }

    /// Creates a computation whose next step is produced by `thunk`.
    #[inline]
    pub fn suspend<F>(thunk: F) -> Self
    where
        F: FnOnce() -> Self + 'static,
    {
        Self::Suspend(Box::new(thunk))
    }

    /// Sequences a continuation after this computation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapewright::control::Recursion;
    ///
    /// let result = Recursion::done(vec![1])
    ///     .and_then(|mut accumulator| {
    ///         accumulator.push(2);
    ///         Recursion::done(accumulator)
    ///     })
    ///     .run();
    /// assert_eq!(result, vec![1, 2]);
    /// ```
    #[inline]
    pub fn and_then<F>(self, continuation: F) -> Self
    where
        F: FnOnce(A) -> Self + 'static,
    {
        Self::Chain(Box::new(self), Box::new(continuation))
    }

    /// Applies `function` to the final value.
    #[inline]
    pub fn map<F>(self, function: F) -> Self
    where
        F: FnOnce(A) -> A + 'static,
    {
        self.and_then(move |value| Self::Done(function(value)))
    }

    /// Drives the computation to completion.
    ///
    /// Continuations waiting for an inner result are kept on a heap stack,
    /// so the call stack depth stays constant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use shapewright::control::Recursion;
    ///
    /// fn nest(levels: u32) -> Recursion<u32> {
    ///     if levels == 0 {
    ///         Recursion::done(0)
    ///     } else {
    ///         Recursion::suspend(move || nest(levels - 1)).map(|inner| inner + 1)
    ///     }
    /// }
    ///
    /// // Non-tail recursion this deep would overflow the call stack
    /// assert_eq!(nest(200_000).run(), 200_000);
    /// ```
    pub fn run(self) -> A {
        let mut pending: Vec<Continuation<A>> = Vec::new();
        let mut current = self;

        loop {
            current = match current {
                Self::Done(value) => match pending.pop() {
                    Some(continuation) => continuation(value),
                    None => return value,
                },
                Self::Suspend(thunk) => thunk(),
                Self::Chain(inner, continuation) => {
                    pending.push(continuation);
                    *inner
                }
            };
        }
    }
}

impl<A: fmt::Debug> fmt::Debug for Recursion<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Done(value) => formatter.debug_tuple("Done").field(value).finish(),
            Self::Suspend(_) => formatter.debug_tuple("Suspend").field(&"<thunk>").finish(),
            Self::Chain(inner, _) => formatter
                .debug_tuple("Chain")
                .field(inner)
                .field(&"<continuation>")
                .finish(),
        }
    }
}
