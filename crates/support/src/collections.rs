//! Helpers for collections that may be absent.

/// Iterates the elements of `collection`, or nothing if it is absent.
///
/// The iterator is lazy and borrows the collection, so calling this again
/// restarts from the first element.
///
/// ```rust
/// use support::safe_iter;
///
/// let present = vec![1, 2, 3];
/// assert_eq!(safe_iter(Some(&present)).count(), 3);
/// assert_eq!(safe_iter::<Vec<i32>>(None).count(), 0);
/// ```
pub fn safe_iter<'a, C>(collection: Option<&'a C>) -> impl Iterator<Item = <&'a C as IntoIterator>::Item>
where
    C: ?Sized,
    &'a C: IntoIterator,
{
    collection.into_iter().flatten()
}

/// True when `collection` is present and has at least one element.
pub fn is_not_empty<'a, C>(collection: Option<&'a C>) -> bool
where
    C: ?Sized,
    &'a C: IntoIterator,
{
    safe_iter(collection).next().is_some()
}
