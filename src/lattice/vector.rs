use rug::Integer;

pub(crate) fn dot(a: &[Integer], b: &[Integer]) -> Integer {
    let mut acc = Integer::new();
    for (x, y) in a.iter().zip(b.iter()) {
        acc += x * y;
    }
    acc
}

pub(crate) fn norm_squared(v: &[Integer]) -> Integer {
    dot(v, v)
}

/// `a -= q * b`, element-wise.
pub(crate) fn sub_scaled(a: &mut [Integer], q: &Integer, b: &[Integer]) {
    for (x, y) in a.iter_mut().zip(b.iter()) {
        *x -= q * y;
    }
}

pub(crate) fn is_zero(v: &[Integer]) -> bool {
    v.iter().all(|x| x.is_zero())
}
