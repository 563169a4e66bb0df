pub(crate) trait OptionExtension<T> {
    fn unreachable(self) -> T;
}

impl<T> OptionExtension<T> for Option<T> {
    /// Acts similarly to [`Option::unwrap`] but with [`unreachable!`] in the none branch. Used where
    /// the list's own bookkeeping guarantees the value is present, such as the slot behind a linked
    /// node handle.
    #[track_caller]
    fn unreachable(self) -> T {
        match self {
            Some(val) => val,
            None => unreachable!("list links refer to a released slot"),
        }
    }
}
