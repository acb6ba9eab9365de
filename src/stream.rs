//! Replaying input into a form.
//!
//! [`keystrokes`] turns a finished card number into the sequence of
//! field values a user would produce while typing it, and
//! [`DriveExt::drive`] feeds any iterator of [`InputEvent`]s through a
//! [`CardForm`] one at a time.
//!
//! # Example
//!
//! ```
//! use cc_subform::stream::{keystrokes, DriveExt};
//! use cc_subform::{CardForm, FormEvent};
//!
//! let mut form = CardForm::default();
//! let enabled_at = keystrokes("4111 1111 1111 1111")
//!     .drive(&mut form)
//!     .position(|result| result.unwrap().contains(&FormEvent::FieldsEnabled));
//!
//! // Enabled by the last keystroke
//! assert_eq!(enabled_at, Some(18));
//! ```

use crate::error::FormError;
use crate::form::{CardForm, FormEvent, InputEvent};
use std::str::CharIndices;

/// Iterator over the prefixes of a typed string.
///
/// This struct is created by [`keystrokes`].
#[derive(Debug, Clone)]
pub struct Keystrokes<'a> {
    text: &'a str,
    chars: CharIndices<'a>,
}

impl<'a> Iterator for Keystrokes<'a> {
    type Item = InputEvent;

    fn next(&mut self) -> Option<Self::Item> {
        let (start, c) = self.chars.next()?;
        let end = start + c.len_utf8();
        Some(InputEvent::RawInputChanged(self.text[..end].to_string()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.chars.size_hint()
    }
}

/// Yields one [`InputEvent::RawInputChanged`] per typed character, each
/// holding the text entered so far.
///
/// ```
/// use cc_subform::stream::keystrokes;
/// use cc_subform::InputEvent;
///
/// let events: Vec<_> = keystrokes("41").collect();
/// assert_eq!(
///     events,
///     vec![
///         InputEvent::RawInputChanged("4".into()),
///         InputEvent::RawInputChanged("41".into()),
///     ]
/// );
/// ```
#[inline]
pub fn keystrokes(text: &str) -> Keystrokes<'_> {
    Keystrokes {
        text,
        chars: text.char_indices(),
    }
}

/// An iterator that delivers each input event to a form.
///
/// This struct is created by [`DriveExt::drive`].
#[derive(Debug)]
pub struct DriveStream<'f, I> {
    inner: I,
    form: &'f mut CardForm,
}

impl<'f, I> DriveStream<'f, I> {
    /// Consumes the stream and returns the inner iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<'f, I> Iterator for DriveStream<'f, I>
where
    I: Iterator<Item = InputEvent>,
{
    type Item = Result<Vec<FormEvent>, FormError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|event| self.form.handle(event))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'f, I> ExactSizeIterator for DriveStream<'f, I> where I: ExactSizeIterator<Item = InputEvent> {}

/// Extension trait for driving a [`CardForm`] from an iterator.
pub trait DriveExt: Iterator + Sized {
    /// Hands each event to `form` in order, yielding the events it produced.
    ///
    /// Lazy: nothing is delivered until the stream is consumed.
    fn drive(self, form: &mut CardForm) -> DriveStream<'_, Self>;
}

impl<I: Iterator<Item = InputEvent>> DriveExt for I {
    #[inline]
    fn drive(self, form: &mut CardForm) -> DriveStream<'_, Self> {
        DriveStream { inner: self, form }
    }
}
