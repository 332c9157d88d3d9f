use std::collections::VecDeque;

/// Pending-node container of a traversal. The pop discipline decides the search order.
pub trait Frontier<T> {
    fn push(&mut self, item: T);
    fn pop(&mut self) -> Option<T>;
    fn is_empty(&self) -> bool;
}

/// Last in, first out. Drives depth-first search.
#[derive(Debug, Clone)]
pub struct Stack<T>(Vec<T>);

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack(Vec::new())
    }
}

impl<T> Frontier<T> for Stack<T> {
    fn push(&mut self, item: T) {
        self.0.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop()
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// First in, first out. Drives breadth-first search.
#[derive(Debug, Clone)]
pub struct Queue<T>(VecDeque<T>);

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue(VecDeque::new())
    }
}

impl<T> Frontier<T> for Queue<T> {
    fn push(&mut self, item: T) {
        self.0.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.0.pop_front()
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<F: Frontier<u8>>(mut frontier: F) -> Vec<u8> {
        [1, 2, 3].into_iter().for_each(|n| frontier.push(n));
        let mut out = Vec::new();
        while let Some(n) = frontier.pop() {
            out.push(n);
        }
        assert!(frontier.is_empty());
        out
    }

    #[test]
    fn test_pop_discipline() {
        assert_eq!(drain(Stack::default()), vec![3, 2, 1]);
        assert_eq!(drain(Queue::default()), vec![1, 2, 3]);
    }
}
