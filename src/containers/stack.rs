//! Stacks — LIFO, growable and fixed-capacity.
//!
//! Variables:
//!   data : Vec<T>  — backing storage, top is the last element
//!   N    : usize   — current number of elements = data.len()
//!
//! Equations:
//!   push(x): data[N] = x,  N' = N + 1        O(1) amortised
//!   pop():   N' = N - 1,   returns data[N-1] O(1)
//!   peek():  returns &data[N-1]              O(1)
//!
//! BoundedStack adds:  full iff N == capacity;  try_push errors when full.

use super::CapacityError;

pub struct Stack<T> {
    data: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self { Self { data: Vec::new() } }
    pub fn push(&mut self, value: T)    { self.data.push(value); }
    pub fn pop(&mut self) -> Option<T>  { self.data.pop() }
    pub fn peek(&self) -> Option<&T>    { self.data.last() }
    pub fn is_empty(&self) -> bool      { self.data.is_empty() }
    pub fn len(&self) -> usize          { self.data.len() }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Stack with a hard capacity fixed at construction.
pub struct BoundedStack<T> {
    data: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    pub fn new(capacity: usize) -> Self {
        Self { data: Vec::with_capacity(capacity), capacity }
    }

    pub fn try_push(&mut self, value: T) -> Result<(), CapacityError> {
        if self.data.len() == self.capacity {
            return Err(CapacityError { capacity: self.capacity });
        }
        self.data.push(value);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<T>  { self.data.pop() }
    pub fn peek(&self) -> Option<&T>    { self.data.last() }
    pub fn is_empty(&self) -> bool      { self.data.is_empty() }
    pub fn is_full(&self) -> bool       { self.data.len() == self.capacity }
    pub fn len(&self) -> usize          { self.data.len() }
    pub fn capacity(&self) -> usize     { self.capacity }
}
