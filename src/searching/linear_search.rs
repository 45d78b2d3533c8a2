/// Index of the first element equal to `target`.
pub fn linear_search<T: PartialEq>(arr: &[T], target: &T) -> Option<usize> {
    arr.iter().position(|v| v == target)
}
