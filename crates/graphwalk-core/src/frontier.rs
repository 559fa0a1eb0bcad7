//! Frontier containers for traversal ordering
//!
//! [`Queue`] yields values first-in first-out and drives breadth-first
//! expansion; [`Stack`] yields last-in first-out and drives depth-first
//! expansion. Both implement [`Frontier`] so a single expansion loop can be
//! written once and run in either order.

use std::collections::VecDeque;

/// Ordered collection of pending work for a traversal
pub trait Frontier<T> {
    /// Add a value to the frontier
    fn insert(&mut self, value: T);
    /// Remove the next value, or `None` when the frontier is empty
    fn remove(&mut self) -> Option<T>;
    /// Number of pending values
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// FIFO queue
#[derive(Debug, Clone)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }

    /// Create a queue already holding `start`
    pub fn with_start(start: T) -> Self {
        let mut queue = Self::new();
        queue.enqueue(start);
        queue
    }

    pub fn enqueue(&mut self, value: T) {
        self.items.push_back(value);
    }

    pub fn dequeue(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Queue<T> {
    fn insert(&mut self, value: T) {
        self.enqueue(value);
    }

    fn remove(&mut self) -> Option<T> {
        self.dequeue()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// LIFO stack
#[derive(Debug, Clone)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Create a stack already holding `start`
    pub fn with_start(start: T) -> Self {
        let mut stack = Self::new();
        stack.push(start);
        stack
    }

    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Frontier<T> for Stack<T> {
    fn insert(&mut self, value: T) {
        self.push(value);
    }

    fn remove(&mut self) -> Option<T> {
        self.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}
