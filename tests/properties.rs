use ctm_vector::Vector;
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
    Insert(usize, i32),
    InsertN(usize, usize, i32),
    Erase(usize),
    EraseRange(usize, usize),
    Resize(usize),
    Clear,
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<i32>().prop_map(Op::Push),
        Just(Op::Pop),
        (0..40usize, any::<i32>()).prop_map(|(p, v)| Op::Insert(p, v)),
        (0..40usize, 0..6usize, any::<i32>()).prop_map(|(p, n, v)| Op::InsertN(p, n, v)),
        (0..40usize).prop_map(Op::Erase),
        (0..40usize, 0..40usize).prop_map(|(a, b)| Op::EraseRange(a, b)),
        (0..40usize).prop_map(Op::Resize),
        Just(Op::Clear),
    ]
}

/// Applies `op` to both and checks they agree on whether the position was valid.
fn apply(vec: &mut Vector<i32>, model: &mut Vec<i32>, op: Op) -> Result<(), TestCaseError> {
    match op {
        Op::Push(v) => {
            vec.push_back(v).unwrap();
            model.push(v);
        }
        Op::Pop => {
            prop_assert_eq!(vec.pop_back(), model.pop());
        }
        Op::Insert(pos, v) => {
            let res = vec.insert(pos, v);
            prop_assert_eq!(res.is_ok(), pos <= model.len());
            if res.is_ok() {
                model.insert(pos, v);
            }
        }
        Op::InsertN(pos, n, v) => {
            let res = vec.insert_n(pos, n, v);
            prop_assert_eq!(res.is_ok(), pos <= model.len());
            if res.is_ok() {
                model.splice(pos..pos, std::iter::repeat_n(v, n));
            }
        }
        Op::Erase(pos) => {
            let res = vec.erase(pos);
            prop_assert_eq!(res.is_ok(), pos < model.len());
            if res.is_ok() {
                model.remove(pos);
            }
        }
        Op::EraseRange(a, b) => {
            let res = vec.erase_range(a..b);
            prop_assert_eq!(res.is_ok(), a <= b && b <= model.len());
            if res.is_ok() {
                model.drain(a..b);
            }
        }
        Op::Resize(n) => {
            vec.resize_default(n).unwrap();
            model.resize(n, 0);
        }
        Op::Clear => {
            vec.clear();
            model.clear();
        }
    }
    return Ok(());
}

proptest! {
    #[test]
    fn push_back_capacity_is_next_power_of_two(k in 0usize..600) {
        let mut vec = Vector::new();
        for i in 0..k {
            vec.push_back(i).unwrap();
        }
        prop_assert_eq!(vec.len(), k);
        let expected = if k == 0 { 0 } else { k.next_power_of_two() };
        prop_assert_eq!(vec.capacity(), expected);
        prop_assert!(vec.iter().copied().eq(0..k));
    }

    #[test]
    fn clear_then_refill_keeps_capacity(k in 1usize..300, refill in 0usize..300) {
        let mut vec = Vector::from_elem(k, 1u8).unwrap();
        let cap = vec.capacity();
        vec.clear();
        prop_assert_eq!(vec.len(), 0);
        prop_assert_eq!(vec.capacity(), cap);

        for _ in 0..refill.min(cap) {
            vec.push_back(2).unwrap();
        }
        prop_assert_eq!(vec.capacity(), cap);
    }

    #[test]
    fn matches_std_vec(ops in proptest::collection::vec(op(), 0..60)) {
        let mut vec = Vector::new();
        let mut model = Vec::new();
        for op in ops {
            let cap = vec.capacity();
            apply(&mut vec, &mut model, op)?;
            prop_assert_eq!(vec.as_slice(), model.as_slice());
            // Capacity never shrinks and is a power of two once allocated.
            prop_assert!(vec.capacity() >= cap);
            prop_assert!(vec.capacity() == 0 || vec.capacity().is_power_of_two());
            prop_assert!(vec.len() <= vec.capacity());
        }
    }

    #[test]
    fn at_is_checked(items in proptest::collection::vec(any::<i64>(), 0..50), extra in 0usize..10) {
        let vec = Vector::from_slice(&items).unwrap();
        for (i, item) in items.iter().enumerate() {
            prop_assert_eq!(vec.at(i).unwrap(), item);
        }
        prop_assert!(vec.at(items.len() + extra).unwrap_err().is_out_of_range());
    }
}
