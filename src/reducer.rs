//! Accumulation strategies for the repetition combinators
//!
//! A reducer is a fold: a seed, a combine step applied to every parsed item, and
//! a finishing step that turns the accumulator into the repetition's output.

/// Fold strategy used by `zero_plus_with` and `one_plus_with`
pub trait Reducer<T> {
    type Acc;
    type Output;

    fn seed(&self) -> Self::Acc;

    fn combine(&self, acc: &mut Self::Acc, item: T);

    fn finish(&self, acc: Self::Acc) -> Self::Output;
}

/// Collects items into a `Vec` in parse order
#[derive(Debug, Default, Clone, Copy)]
pub struct Collect;

impl<T> Reducer<T> for Collect {
    type Acc = Vec<T>;
    type Output = Vec<T>;

    fn seed(&self) -> Vec<T> {
        Vec::new()
    }

    fn combine(&self, acc: &mut Vec<T>, item: T) {
        acc.push(item);
    }

    fn finish(&self, acc: Vec<T>) -> Vec<T> {
        acc
    }
}

/// Builds a `String` out of characters or string pieces
#[derive(Debug, Default, Clone, Copy)]
pub struct Concat;

impl Reducer<char> for Concat {
    type Acc = String;
    type Output = String;

    fn seed(&self) -> String {
        String::new()
    }

    fn combine(&self, acc: &mut String, item: char) {
        acc.push(item);
    }

    fn finish(&self, acc: String) -> String {
        acc
    }
}

impl Reducer<String> for Concat {
    type Acc = String;
    type Output = String;

    fn seed(&self) -> String {
        String::new()
    }

    fn combine(&self, acc: &mut String, item: String) {
        acc.push_str(&item);
    }

    fn finish(&self, acc: String) -> String {
        acc
    }
}

/// Counts matches, discarding the items
#[derive(Debug, Default, Clone, Copy)]
pub struct Count;

impl<T> Reducer<T> for Count {
    type Acc = usize;
    type Output = usize;

    fn seed(&self) -> usize {
        0
    }

    fn combine(&self, acc: &mut usize, _item: T) {
        *acc += 1;
    }

    fn finish(&self, acc: usize) -> usize {
        acc
    }
}

/// Closure-driven fold with a cloneable seed
pub struct Fold<A, F> {
    seed: A,
    step: F,
}

impl<T, A, F> Reducer<T> for Fold<A, F>
where
    A: Clone,
    F: Fn(A, T) -> A,
{
    type Acc = Option<A>;
    type Output = A;

    fn seed(&self) -> Option<A> {
        Some(self.seed.clone())
    }

    fn combine(&self, acc: &mut Option<A>, item: T) {
        *acc = acc.take().map(|value| (self.step)(value, item));
    }

    fn finish(&self, acc: Option<A>) -> A {
        acc.unwrap_or_else(|| self.seed.clone())
    }
}

/// Fold every item into `seed` with `step`
pub fn fold<A, F>(seed: A, step: F) -> Fold<A, F> {
    Fold { seed, step }
}
