/// The cardinality of values to accept for a flag.
///
/// Inspired by argparse: <https://docs.python.org/3/library/argparse.html#nargs>
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nargs {
    /// `N`: Precisely `N` values.
    Precisely(u8),
    /// `*`: May be any number of values, including `0`.
    Any,
    /// `+`: At least one value must be specified.
    AtLeastOne,
}

impl Nargs {
    /// The inclusive lower bound and (if any) upper bound on the number of values.
    pub(crate) fn bounds(&self) -> (usize, Option<usize>) {
        match self {
            Nargs::Precisely(n) => (*n as usize, Some(*n as usize)),
            Nargs::Any => (0, None),
            Nargs::AtLeastOne => (1, None),
        }
    }
}

impl std::fmt::Display for Nargs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}
