use std::collections::HashSet;
use std::fmt::Display;
use std::marker::PhantomData;
use std::str::FromStr;

use crate::api::capture::*;
use crate::model::Nargs;
use crate::prelude::Collectable;
use crate::token::TypeaheadToken;

fn convert<T>(token: &str) -> Result<T, InvalidCapture>
where
    T: FromStr,
    T::Err: Display,
{
    T::from_str(token).map_err(|error| InvalidCapture::InvalidConversion {
        token: token.to_string(),
        type_name: std::any::type_name::<T>(),
        reason: error.to_string(),
    })
}

/// A field that takes a single value (precisely 1).
pub struct Scalar<'a, T> {
    variable: &'a mut T,
}

impl<'a, T> Scalar<'a, T> {
    /// Create a scalar field.
    pub fn new(variable: &'a mut T) -> Self {
        Self { variable }
    }
}

impl<'a, T> Capturable for Scalar<'a, T>
where
    T: FromStr,
    T::Err: Display,
{
    fn matched(&mut self) {
        // Do nothing.
    }

    fn capture(&mut self, token: &str) -> Result<(), InvalidCapture> {
        *self.variable = convert(token)?;
        Ok(())
    }

    fn nargs(&self) -> Nargs {
        Nargs::Precisely(1)
    }
}

/// A field that takes no values (precisely 0); specifying the flag assigns the target.
pub struct Switch<'a, T> {
    variable: &'a mut T,
    target: Option<T>,
}

impl<'a, T> Switch<'a, T> {
    /// Create a switch field.
    pub fn new(variable: &'a mut T, target: T) -> Self {
        Self {
            variable,
            target: Some(target),
        }
    }
}

impl<'a, T> Capturable for Switch<'a, T> {
    fn matched(&mut self) {
        if let Some(target) = self.target.take() {
            *self.variable = target;
        }
    }

    fn capture(&mut self, _token: &str) -> Result<(), InvalidCapture> {
        unreachable!("internal error - must not capture on a Switch");
    }

    fn nargs(&self) -> Nargs {
        Nargs::Precisely(0)
    }
}

/// A field that maps down to [`Option`], taking a single value (precisely 1).
pub struct Optional<'a, T> {
    variable: &'a mut Option<T>,
}

impl<'a, T> Optional<'a, T> {
    /// Create an optional field.
    pub fn new(variable: &'a mut Option<T>) -> Self {
        Self { variable }
    }
}

impl<'a, T> Capturable for Optional<'a, T>
where
    T: FromStr,
    T::Err: Display,
{
    fn matched(&mut self) {
        // Do nothing
    }

    fn capture(&mut self, token: &str) -> Result<(), InvalidCapture> {
        self.variable.replace(convert(token)?);
        Ok(())
    }

    fn nargs(&self) -> Nargs {
        Nargs::Precisely(1)
    }
}

/// A field that takes multiple values (specifiable [`Nargs`]).
pub struct Collection<'a, C, T>
where
    C: 'a + Collectable<T>,
{
    variable: &'a mut C,
    nargs: Nargs,
    _phantom: PhantomData<T>,
}

impl<'a, C, T> Collection<'a, C, T>
where
    C: 'a + Collectable<T>,
{
    /// Create a collection field.
    pub fn new(variable: &'a mut C, nargs: Nargs) -> Self {
        Self {
            variable,
            nargs,
            _phantom: PhantomData,
        }
    }
}

impl<'a, C, T> Capturable for Collection<'a, C, T>
where
    T: FromStr,
    T::Err: Display,
    C: 'a + Collectable<T>,
{
    fn matched(&mut self) {
        // Do nothing.
    }

    fn capture(&mut self, token: &str) -> Result<(), InvalidCapture> {
        self.variable.add(convert(token)?);
        Ok(())
    }

    fn nargs(&self) -> Nargs {
        self.nargs
    }
}

/// Restrict another field to single word values (see [`TypeaheadToken`]).
pub struct SingleWord<C> {
    inner: C,
}

impl<C: Capturable> SingleWord<C> {
    /// Wrap `inner` with the single word rule.
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<C: Capturable> Capturable for SingleWord<C> {
    fn matched(&mut self) {
        self.inner.matched();
    }

    fn capture(&mut self, token: &str) -> Result<(), InvalidCapture> {
        TypeaheadToken::validate(token).map_err(|source| InvalidCapture::InvalidToken {
            token: token.to_string(),
            source,
        })?;
        self.inner.capture(token)
    }

    fn nargs(&self) -> Nargs {
        self.inner.nargs()
    }
}

impl<T> Collectable<T> for Vec<T> {
    fn add(&mut self, item: T) {
        self.push(item);
    }
}

impl<T: Eq + std::hash::Hash> Collectable<T> for HashSet<T> {
    fn add(&mut self, item: T) {
        self.insert(item);
    }
}
