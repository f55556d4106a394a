// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Function helpers: identity/constant/composition, tuple-call adapters for
// 2 to 9 arguments, currying, and per-closure memoization.

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

use tracing::trace;

pub fn identity<T>(value: T) -> T {
    value
}

/// A function that ignores its argument and returns a clone of `value`.
pub fn constant<A, T: Clone>(value: T) -> impl Fn(A) -> T {
    move |_| value.clone()
}

/// `g ∘ f`: apply `f`, then `g`.
pub fn compose<A, B, C>(f: impl Fn(A) -> B, g: impl Fn(B) -> C) -> impl Fn(A) -> C {
    move |x| g(f(x))
}

/// Method-style composition for single-argument functions.
pub trait FunctionExt<A, B>: Fn(A) -> B + Sized {
    fn and_then<C, G: Fn(B) -> C>(self, g: G) -> impl Fn(A) -> C {
        move |x| g(self(x))
    }
}

impl<A, B, F: Fn(A) -> B> FunctionExt<A, B> for F {}

// ---------------------------------------------------------------------------
// Tuple calls
// ---------------------------------------------------------------------------

/// Call a multi-argument function with its arguments packed in a tuple.
pub trait Tupled<Args, R> {
    fn call_tupled(&self, args: Args) -> R;
}

macro_rules! impl_tupled {
    ($($T:ident $v:ident),+) => {
        impl<F, R, $($T),+> Tupled<($($T,)+), R> for F
        where
            F: Fn($($T),+) -> R,
        {
            fn call_tupled(&self, ($($v,)+): ($($T,)+)) -> R {
                self($($v),+)
            }
        }
    };
}

impl_tupled!(A a, B b);
impl_tupled!(A a, B b, C c);
impl_tupled!(A a, B b, C c, D d);
impl_tupled!(A a, B b, C c, D d, E e);
impl_tupled!(A a, B b, C c, D d, E e, G g);
impl_tupled!(A a, B b, C c, D d, E e, G g, H h);
impl_tupled!(A a, B b, C c, D d, E e, G g, H h, I i);
impl_tupled!(A a, B b, C c, D d, E e, G g, H h, I i, J j);

/// Turn `Fn(A, B, ...) -> R` into `Fn((A, B, ...)) -> R`, e.g. for
/// `iter.map(tupled(f))` over an iterator of pairs.
pub fn tupled<F, Args, R>(f: F) -> impl Fn(Args) -> R
where
    F: Tupled<Args, R>,
{
    move |args| f.call_tupled(args)
}

/// Turn `Fn(A, B) -> R` into a function of `A` returning a function of `B`.
pub fn curry2<A, B, R, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> R>
where
    A: Clone + 'static,
    B: 'static,
    R: 'static,
    F: Fn(A, B) -> R + 'static,
{
    let f = Rc::new(f);
    move |a: A| -> Box<dyn Fn(B) -> R> {
        let f = Rc::clone(&f);
        Box::new(move |b: B| f(a.clone(), b))
    }
}

// ---------------------------------------------------------------------------
// Memoization
// ---------------------------------------------------------------------------

/// A function wrapped with a per-instance result cache.
///
/// Single-threaded: the cache lives in a `RefCell` and is never shared
/// between instances.
pub struct Memoized<K, V, F> {
    f: F,
    cache: RefCell<HashMap<K, V>>,
}

impl<K, V, F> Memoized<K, V, F>
where
    K: Eq + Hash + Clone,
    V: Clone,
    F: Fn(K) -> V,
{
    /// Return the cached result for `key`, computing it on first use.
    pub fn call(&self, key: K) -> V {
        if let Some(hit) = self.cache.borrow().get(&key) {
            return hit.clone();
        }
        let value = (self.f)(key.clone());
        let mut cache = self.cache.borrow_mut();
        cache.insert(key, value.clone());
        trace!(entries = cache.len(), "memoized new result");
        value
    }

    /// Number of distinct keys computed so far.
    pub fn cached(&self) -> usize {
        self.cache.borrow().len()
    }

    pub fn clear(&self) {
        self.cache.borrow_mut().clear();
    }
}

pub fn memoize<K, V, F>(f: F) -> Memoized<K, V, F>
where
    F: Fn(K) -> V,
{
    Memoized {
        f,
        cache: RefCell::new(HashMap::new()),
    }
}
