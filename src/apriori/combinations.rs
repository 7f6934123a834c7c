/// Visit every `k`-combination of `items`, in lexicographic index order.
///
/// `buffer` is reused across calls so the walk does not allocate. The callback
/// returns `false` to stop early; the function then returns `false` too.
pub fn for_each_combination<T, F>(items: &[T], k: usize, buffer: &mut Vec<T>, callback: &mut F) -> bool
where
    T: Copy,
    F: FnMut(&[T]) -> bool,
{
    buffer.clear();
    if k > items.len() {
        return true;
    }
    combinations_recursive(items, k, 0, buffer, callback)
}

fn combinations_recursive<T, F>(
    items: &[T],
    k: usize,
    start: usize,
    current: &mut Vec<T>,
    callback: &mut F,
) -> bool
where
    T: Copy,
    F: FnMut(&[T]) -> bool,
{
    if current.len() == k {
        return callback(current);
    }

    // leave enough items behind to fill the remaining slots
    let last = items.len() - (k - current.len());
    for i in start..=last {
        current.push(items[i]);
        if !combinations_recursive(items, k, i + 1, current, callback) {
            return false;
        }
        current.pop();
    }
    true
}
