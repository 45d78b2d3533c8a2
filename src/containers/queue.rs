//! Queues — FIFO ring buffers, growable and fixed-capacity.
//!
//! Variables:
//!   buf  : Vec<Option<T>>  — circular backing array, length C
//!   head : usize           — index of next dequeue
//!   tail : usize           — index of next enqueue
//!   len  : usize           — current occupancy
//!
//! Equations:
//!   enqueue(x): buf[tail] = x,  tail = (tail+1) mod C,  len += 1
//!   dequeue():  x = buf[head],  head = (head+1) mod C,  len -= 1
//!   full  iff len == C
//!   empty iff len == 0
//!
//! Queue doubles C when full (rebuilding the ring in dequeue order);
//! ArrayQueue keeps C fixed and errors instead.

use super::CapacityError;

pub struct Queue<T> {
    buf: Vec<Option<T>>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Self { buf: Vec::new(), head: 0, tail: 0, len: 0 }
    }

    pub fn enqueue(&mut self, value: T) {
        if self.len == self.buf.len() {
            self.grow();
        }
        self.buf[self.tail] = Some(value);
        self.tail = (self.tail + 1) % self.buf.len();
        self.len += 1;
    }

    pub fn dequeue(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.buf[self.head].take();
        self.head = (self.head + 1) % self.buf.len();
        self.len -= 1;
        value
    }

    pub fn peek(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.buf[self.head].as_ref()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Rebuild the ring at double capacity, oldest element first.
    fn grow(&mut self) {
        let old_cap = self.buf.len();
        let new_cap = if old_cap == 0 { 4 } else { old_cap * 2 };
        let mut buf: Vec<Option<T>> = Vec::with_capacity(new_cap);
        for i in 0..self.len {
            buf.push(self.buf[(self.head + i) % old_cap].take());
        }
        buf.resize_with(new_cap, || None);
        self.buf = buf;
        self.head = 0;
        self.tail = self.len;
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Circular queue with a hard capacity fixed at construction.
pub struct ArrayQueue<T> {
    buf: Vec<Option<T>>,
    head: usize,
    tail: usize,
    len: usize,
}

impl<T> ArrayQueue<T> {
    pub fn new(capacity: usize) -> Self {
        let mut buf = Vec::with_capacity(capacity);
        buf.resize_with(capacity, || None);
        Self { buf, head: 0, tail: 0, len: 0 }
    }

    pub fn try_enqueue(&mut self, value: T) -> Result<(), CapacityError> {
        if self.len == self.buf.len() {
            return Err(CapacityError { capacity: self.buf.len() });
        }
        self.buf[self.tail] = Some(value);
        self.tail = (self.tail + 1) % self.buf.len();
        self.len += 1;
        Ok(())
    }

    pub fn dequeue(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.buf[self.head].take();
        self.head = (self.head + 1) % self.buf.len();
        self.len -= 1;
        value
    }

    pub fn peek(&self) -> Option<&T> {
        if self.len == 0 {
            return None;
        }
        self.buf[self.head].as_ref()
    }

    pub fn len(&self) -> usize      { self.len }
    pub fn is_empty(&self) -> bool  { self.len == 0 }
    pub fn is_full(&self) -> bool   { self.len == self.buf.len() }
    pub fn capacity(&self) -> usize { self.buf.len() }
}
