pub fn quick_sort<T: Ord>(arr: &mut [T]) {
    if arr.len() <= 1 {
        return;
    }
    let pivot = partition(arr);
    let (left, right) = arr.split_at_mut(pivot);
    quick_sort(left);
    quick_sort(&mut right[1..]);
}

/// Lomuto partition around the last element.
fn partition<T: Ord>(arr: &mut [T]) -> usize {
    let pivot = arr.len() - 1;
    let mut boundary = 0;
    for j in 0..pivot {
        if arr[j] < arr[pivot] {
            arr.swap(boundary, j);
            boundary += 1;
        }
    }
    arr.swap(boundary, pivot);
    boundary
}
