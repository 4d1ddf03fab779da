/// 稳定归并排序 - 容忍不一致的比较器
///
/// `slice::sort_by` may panic when the comparator is not a total order. The
/// order-ID comparator mixes decimal, hexadecimal and lexicographic readings,
/// so it is not transitive across heterogeneous ID encodings. This merge sort
/// works on an index permutation and always terminates with a permutation of
/// the input, whatever the comparator answers.
///
/// 性能特点：
/// - O(n log n) 次比较
/// - 仅分配两个 `Vec<usize>` 索引缓冲区，元素本身只移动一次
/// - 稳定：相等元素保持输入顺序
use std::cmp::Ordering;

/// Returns the stable sorted permutation of `0..len`.
///
/// `compare(a, b)` compares the elements at positions `a` and `b` of the
/// caller's sequence.
pub fn sorted_permutation<F>(len: usize, mut compare: F) -> Vec<usize>
where
    F: FnMut(usize, usize) -> Ordering,
{
    let mut index: Vec<usize> = (0..len).collect();
    if len < 2 {
        return index;
    }

    let mut scratch = vec![0usize; len];
    let mut width = 1;

    // 自底向上归并，每轮宽度翻倍
    while width < len {
        let mut start = 0;
        while start < len {
            let mid = (start + width).min(len);
            let end = (start + 2 * width).min(len);

            let (mut i, mut j, mut k) = (start, mid, start);
            while i < mid && j < end {
                // 只有右侧严格更小时才取右侧，保证稳定性
                if compare(index[j], index[i]) == Ordering::Less {
                    scratch[k] = index[j];
                    j += 1;
                } else {
                    scratch[k] = index[i];
                    i += 1;
                }
                k += 1;
            }

            let left_rest = mid - i;
            scratch[k..k + left_rest].copy_from_slice(&index[i..mid]);
            scratch[k + left_rest..end].copy_from_slice(&index[j..end]);

            start = end;
        }
        std::mem::swap(&mut index, &mut scratch);
        width *= 2;
    }

    index
}

/// Moves `items` into the order given by `permutation`.
///
/// `permutation` must be a permutation of `0..items.len()`; positions that are
/// repeated are taken only once.
pub fn apply_permutation<T>(items: Vec<T>, permutation: &[usize]) -> Vec<T> {
    let mut slots: Vec<Option<T>> = items.into_iter().map(Some).collect();
    permutation
        .iter()
        .filter_map(|&position| slots.get_mut(position).and_then(Option::take))
        .collect()
}

/// Stable sort of an owned vector by `compare`, never panicking on
/// inconsistent comparators.
pub fn merge_sort_by<T, F>(items: Vec<T>, mut compare: F) -> Vec<T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let permutation = sorted_permutation(items.len(), |a, b| compare(&items[a], &items[b]));
    apply_permutation(items, &permutation)
}
