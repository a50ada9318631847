/// Builds an [`HCons`](crate::hlist::HCons) list value.
#[macro_export]
macro_rules! hlist {
    () => { $crate::hlist::HNil };
    ($head:expr $(, $tail:expr)* $(,)?) => {
        $crate::hlist::HCons {
            head: $head,
            tail: $crate::hlist!($($tail),*),
        }
    };
}

/// Spells the type of an [`HCons`](crate::hlist::HCons) list.
#[macro_export]
macro_rules! HList {
    () => { $crate::hlist::HNil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::hlist::HCons<$head, $crate::HList!($($tail),*)>
    };
}

/// Destructures an [`HCons`](crate::hlist::HCons) list.
#[macro_export]
macro_rules! hlist_pat {
    () => { $crate::hlist::HNil };
    ($head:pat $(, $tail:pat)* $(,)?) => {
        $crate::hlist::HCons {
            head: $head,
            tail: $crate::hlist_pat!($($tail),*),
        }
    };
}

/// Builds a [`Literal`](crate::literal::Literal) whose length is inferred
/// from a constant string.
#[macro_export]
macro_rules! literal {
    ($text:expr) => {
        $crate::literal::Literal::<{ $text.len() }>::new($text)
    };
}

/// Concatenates two constant [`Literal`](crate::literal::Literal)s.
#[macro_export]
macro_rules! literal_concat {
    ($lhs:expr, $rhs:expr) => {
        $lhs.concat::<{ $rhs.len() }, { $lhs.len() + $rhs.len() }>(&$rhs)
    };
}
