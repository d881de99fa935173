use lifo::{AnyStack, ArrayStack, Error, LinkedStack, Stack};

#[derive(Clone, Copy, Debug)]
enum Op {
    Push(u32),
    Pop,
    Peek,
    Clear,
}

/// Produce a reproducible pseudo-random sequence of operations.
///
/// Pushes are more frequent than pops, so that stacks grow beyond
/// the default capacity, and clearing is rare.
fn ops(seed: u64, n: usize) -> Vec<Op> {
    let mut state = seed;
    (0..n)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            let r = (state >> 33) as u32;
            match r % 20 {
                0 => Op::Clear,
                1..=6 => Op::Pop,
                7..=9 => Op::Peek,
                _ => Op::Push(r),
            }
        })
        .collect()
}

/// Observable state of a stack.
fn observe<S: Stack<u32> + ToString>(s: &S) -> (usize, bool, Result<u32, Error>, String) {
    (s.len(), s.is_empty(), s.peek().copied(), s.to_string())
}

fn apply<S: Stack<u32>>(s: &mut S, op: Op) -> Option<Result<u32, Error>> {
    match op {
        Op::Push(x) => {
            s.push(x);
            None
        }
        Op::Pop => Some(s.pop()),
        Op::Peek => Some(s.peek().copied()),
        Op::Clear => {
            s.clear();
            None
        }
    }
}

#[test]
fn same_observations() {
    for seed in 0..16 {
        let mut array = ArrayStack::with_capacity(1).unwrap();
        let mut linked = LinkedStack::new();
        for op in ops(seed, 500) {
            let len = array.len();
            assert_eq!(apply(&mut array, op), apply(&mut linked, op), "{:?}", op);
            assert_eq!(observe(&array), observe(&linked));
            assert_eq!(array.is_empty(), array.len() == 0);
            if let Op::Peek = op {
                assert_eq!(array.len(), len);
            }
        }
    }
}

#[test]
fn scenario() {
    let stacks: [AnyStack<u32>; 2] = [ArrayStack::new().into(), LinkedStack::new().into()];
    for mut s in stacks {
        s.push(10);
        s.push(20);
        s.push(30);
        assert_eq!(s.len(), 3);
        assert_eq!(s.peek(), Ok(&30));
        assert_eq!(s.to_string(), "[30, 20, 10]");
        assert_eq!(s.pop(), Ok(30));
        assert_eq!(s.len(), 2);
        assert_eq!(s.pop(), Ok(20));
        assert_eq!(s.pop(), Ok(10));
        assert_eq!(s.len(), 0);
        assert!(s.is_empty());
        assert_eq!(s.pop(), Err(Error::Empty));
        assert_eq!(s.peek(), Err(Error::Empty));
        assert_eq!(s.len(), 0);
    }
}

#[test]
fn lifo_order() {
    fn check<S: Stack<usize>>(mut s: S) {
        (0..100).for_each(|i| s.push(i));
        let popped: Vec<_> = core::iter::from_fn(|| s.pop().ok()).collect();
        assert_eq!(popped, (0..100).rev().collect::<Vec<_>>());
        assert!(s.is_empty());
    }
    check(ArrayStack::with_capacity(1).unwrap());
    check(ArrayStack::new());
    check(LinkedStack::new());
}

#[test]
fn clear_empties() {
    fn check<S: Stack<String> + ToString>(mut s: S) {
        s.clear();
        assert!(s.is_empty());
        ["a", "b", "c"].iter().for_each(|x| s.push(x.to_string()));
        s.clear();
        assert!(s.is_empty());
        assert_eq!(s.len(), 0);
        assert_eq!(s.to_string(), "[]");
    }
    check(ArrayStack::new());
    check(LinkedStack::new());
}
