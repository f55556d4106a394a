// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Predicate composition over argument tuples.
//
// A predicate over several arguments is a `Predicate<(A, B, ...)>`. One trait
// covers every arity; the tuple impls below are generated for 1 to 9
// elements, which is where `spread`, `all_of!`/`any_of!`/`none_of!`, and the
// null checks stop.

/// A boolean test over a borrowed argument (or argument tuple).
pub trait Predicate<Args: ?Sized> {
    fn test(&self, args: &Args) -> bool;
}

impl<Args: ?Sized, F> Predicate<Args> for F
where
    F: Fn(&Args) -> bool,
{
    fn test(&self, args: &Args) -> bool {
        self(args)
    }
}

/// Heap-allocated predicate, for collections of differently typed closures.
pub type BoxedPredicate<Args> = Box<dyn Fn(&Args) -> bool + Send + Sync>;

/// Erase the concrete type of `p`.
pub fn boxed<Args, P>(p: P) -> BoxedPredicate<Args>
where
    Args: ?Sized + 'static,
    P: Predicate<Args> + Send + Sync + 'static,
{
    Box::new(move |args: &Args| p.test(args))
}

// ---------------------------------------------------------------------------
// Binary combinators
// ---------------------------------------------------------------------------

/// Both predicates hold (short-circuits on the first).
#[derive(Debug, Clone, Copy)]
pub struct And<P, Q>(pub P, pub Q);

/// Either predicate holds (short-circuits on the first).
#[derive(Debug, Clone, Copy)]
pub struct Or<P, Q>(pub P, pub Q);

/// Logical negation.
#[derive(Debug, Clone, Copy)]
pub struct Not<P>(pub P);

impl<Args: ?Sized, P: Predicate<Args>, Q: Predicate<Args>> Predicate<Args> for And<P, Q> {
    fn test(&self, args: &Args) -> bool {
        self.0.test(args) && self.1.test(args)
    }
}

impl<Args: ?Sized, P: Predicate<Args>, Q: Predicate<Args>> Predicate<Args> for Or<P, Q> {
    fn test(&self, args: &Args) -> bool {
        self.0.test(args) || self.1.test(args)
    }
}

impl<Args: ?Sized, P: Predicate<Args>> Predicate<Args> for Not<P> {
    fn test(&self, args: &Args) -> bool {
        !self.0.test(args)
    }
}

/// Method-style composition for any predicate.
pub trait PredicateExt<Args: ?Sized>: Predicate<Args> + Sized {
    fn and<Q: Predicate<Args>>(self, other: Q) -> And<Self, Q> {
        And(self, other)
    }

    fn or<Q: Predicate<Args>>(self, other: Q) -> Or<Self, Q> {
        Or(self, other)
    }

    fn negate(self) -> Not<Self> {
        Not(self)
    }
}

impl<Args: ?Sized, P: Predicate<Args>> PredicateExt<Args> for P {}

pub fn not<P>(p: P) -> Not<P> {
    Not(p)
}

/// Always true.
#[derive(Debug, Clone, Copy, Default)]
pub struct Always;

/// Always false.
#[derive(Debug, Clone, Copy, Default)]
pub struct Never;

impl<Args: ?Sized> Predicate<Args> for Always {
    fn test(&self, _: &Args) -> bool {
        true
    }
}

impl<Args: ?Sized> Predicate<Args> for Never {
    fn test(&self, _: &Args) -> bool {
        false
    }
}

pub fn always() -> Always {
    Always
}

pub fn never() -> Never {
    Never
}

// ---------------------------------------------------------------------------
// Variadic composition (fixed tuples)
// ---------------------------------------------------------------------------

/// Every predicate in the tuple holds. Build with [`all_of!`](crate::all_of).
#[derive(Debug, Clone, Copy)]
pub struct AllOf<T>(pub T);

/// At least one predicate in the tuple holds. Build with [`any_of!`](crate::any_of).
#[derive(Debug, Clone, Copy)]
pub struct AnyOf<T>(pub T);

/// No predicate in the tuple holds. Build with [`none_of!`](crate::none_of).
#[derive(Debug, Clone, Copy)]
pub struct NoneOf<T>(pub T);

macro_rules! impl_variadic {
    ($($P:ident $idx:tt),+) => {
        impl<Args: ?Sized, $($P: Predicate<Args>),+> Predicate<Args> for AllOf<($($P,)+)> {
            fn test(&self, args: &Args) -> bool {
                $(self.0.$idx.test(args))&&+
            }
        }

        impl<Args: ?Sized, $($P: Predicate<Args>),+> Predicate<Args> for AnyOf<($($P,)+)> {
            fn test(&self, args: &Args) -> bool {
                $(self.0.$idx.test(args))||+
            }
        }

        impl<Args: ?Sized, $($P: Predicate<Args>),+> Predicate<Args> for NoneOf<($($P,)+)> {
            fn test(&self, args: &Args) -> bool {
                !($(self.0.$idx.test(args))||+)
            }
        }
    };
}

impl_variadic!(P0 0);
impl_variadic!(P0 0, P1 1);
impl_variadic!(P0 0, P1 1, P2 2);
impl_variadic!(P0 0, P1 1, P2 2, P3 3);
impl_variadic!(P0 0, P1 1, P2 2, P3 3, P4 4);
impl_variadic!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5);
impl_variadic!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5, P6 6);
impl_variadic!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5, P6 6, P7 7);
impl_variadic!(P0 0, P1 1, P2 2, P3 3, P4 4, P5 5, P6 6, P7 7, P8 8);

/// Conjunction of 1 to 9 predicates, evaluated left to right.
///
/// ```
/// use lanyard_lang::{all_of, Predicate};
///
/// let in_range = all_of!(|x: &i32| *x > 0, |x: &i32| *x < 10);
/// assert!(in_range.test(&5));
/// assert!(!in_range.test(&10));
/// ```
#[macro_export]
macro_rules! all_of {
    ($($p:expr),+ $(,)?) => {
        $crate::predicate::AllOf(($($p,)+))
    };
}

/// Disjunction of 1 to 9 predicates, evaluated left to right.
#[macro_export]
macro_rules! any_of {
    ($($p:expr),+ $(,)?) => {
        $crate::predicate::AnyOf(($($p,)+))
    };
}

/// Holds when none of 1 to 9 predicates hold.
#[macro_export]
macro_rules! none_of {
    ($($p:expr),+ $(,)?) => {
        $crate::predicate::NoneOf(($($p,)+))
    };
}

// ---------------------------------------------------------------------------
// Variadic composition (runtime lists)
// ---------------------------------------------------------------------------

/// Every predicate in the list holds; true for an empty list.
#[derive(Debug, Clone)]
pub struct All<P>(pub Vec<P>);

/// At least one predicate in the list holds; false for an empty list.
#[derive(Debug, Clone)]
pub struct Any<P>(pub Vec<P>);

impl<Args: ?Sized, P: Predicate<Args>> Predicate<Args> for All<P> {
    fn test(&self, args: &Args) -> bool {
        self.0.iter().all(|p| p.test(args))
    }
}

impl<Args: ?Sized, P: Predicate<Args>> Predicate<Args> for Any<P> {
    fn test(&self, args: &Args) -> bool {
        self.0.iter().any(|p| p.test(args))
    }
}

pub fn all<P>(predicates: impl IntoIterator<Item = P>) -> All<P> {
    All(predicates.into_iter().collect())
}

pub fn any<P>(predicates: impl IntoIterator<Item = P>) -> Any<P> {
    Any(predicates.into_iter().collect())
}

// ---------------------------------------------------------------------------
// Multi-argument adapter
// ---------------------------------------------------------------------------

/// A multi-argument closure viewed as a predicate over its argument tuple.
#[derive(Debug, Clone, Copy)]
pub struct Spread<F>(pub F);

/// Adapt `Fn(&A, &B, ...) -> bool` (2 to 9 arguments) into a
/// `Predicate<(A, B, ...)>`.
pub fn spread<F>(f: F) -> Spread<F> {
    Spread(f)
}

macro_rules! impl_spread {
    ($($T:ident $v:ident),+) => {
        impl<F, $($T),+> Predicate<($($T,)+)> for Spread<F>
        where
            F: Fn($(&$T),+) -> bool,
        {
            fn test(&self, args: &($($T,)+)) -> bool {
                let ($($v,)+) = args;
                (self.0)($($v),+)
            }
        }
    };
}

impl_spread!(A a, B b);
impl_spread!(A a, B b, C c);
impl_spread!(A a, B b, C c, D d);
impl_spread!(A a, B b, C c, D d, E e);
impl_spread!(A a, B b, C c, D d, E e, G g);
impl_spread!(A a, B b, C c, D d, E e, G g, H h);
impl_spread!(A a, B b, C c, D d, E e, G g, H h, I i);
impl_spread!(A a, B b, C c, D d, E e, G g, H h, I i, J j);

// ---------------------------------------------------------------------------
// Null checks
// ---------------------------------------------------------------------------

/// Every element of an `Option` tuple is `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllNone;

/// At least one element of an `Option` tuple is `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyNone;

/// Every element of an `Option` tuple is `Some`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllSome;

/// At least one element of an `Option` tuple is `Some`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnySome;

macro_rules! impl_null_checks {
    ($($T:ident $idx:tt),+) => {
        impl<$($T),+> Predicate<($(Option<$T>,)+)> for AllNone {
            fn test(&self, args: &($(Option<$T>,)+)) -> bool {
                $(args.$idx.is_none())&&+
            }
        }

        impl<$($T),+> Predicate<($(Option<$T>,)+)> for AnyNone {
            fn test(&self, args: &($(Option<$T>,)+)) -> bool {
                $(args.$idx.is_none())||+
            }
        }

        impl<$($T),+> Predicate<($(Option<$T>,)+)> for AllSome {
            fn test(&self, args: &($(Option<$T>,)+)) -> bool {
                $(args.$idx.is_some())&&+
            }
        }

        impl<$($T),+> Predicate<($(Option<$T>,)+)> for AnySome {
            fn test(&self, args: &($(Option<$T>,)+)) -> bool {
                $(args.$idx.is_some())||+
            }
        }
    };
}

impl_null_checks!(A 0);
impl_null_checks!(A 0, B 1);
impl_null_checks!(A 0, B 1, C 2);
impl_null_checks!(A 0, B 1, C 2, D 3);
impl_null_checks!(A 0, B 1, C 2, D 3, E 4);
impl_null_checks!(A 0, B 1, C 2, D 3, E 4, G 5);
impl_null_checks!(A 0, B 1, C 2, D 3, E 4, G 5, H 6);
impl_null_checks!(A 0, B 1, C 2, D 3, E 4, G 5, H 6, I 7);
impl_null_checks!(A 0, B 1, C 2, D 3, E 4, G 5, H 6, I 7, J 8);

pub fn all_none() -> AllNone {
    AllNone
}

pub fn any_none() -> AnyNone {
    AnyNone
}

pub fn all_some() -> AllSome {
    AllSome
}

pub fn any_some() -> AnySome {
    AnySome
}

/// A single `Option` is `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsNone;

/// A single `Option` is `Some`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsSome;

impl<T> Predicate<Option<T>> for IsNone {
    fn test(&self, args: &Option<T>) -> bool {
        args.is_none()
    }
}

impl<T> Predicate<Option<T>> for IsSome {
    fn test(&self, args: &Option<T>) -> bool {
        args.is_some()
    }
}

pub fn is_none() -> IsNone {
    IsNone
}

pub fn is_some() -> IsSome {
    IsSome
}
