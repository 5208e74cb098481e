use crate::cursor::TextCursor;
use crate::error::EngineFault;
use crate::parser::Parser;
use crate::result::ParseResult;
use std::any::type_name;
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::{debug, error, warn};

type Target<T> = Box<dyn Parser<Output = T> + Send + Sync>;

/// A placeholder parser whose target is bound after construction.
///
/// This is what makes recursive and forward-referencing grammars possible:
/// create the placeholder, wire clones of it into other combinators, then
/// bind it once the real rule exists. All clones share the same slot, so
/// binding any one of them binds them all.
///
/// The slot is written once, during grammar construction, and only read
/// while parsing. A fully bound grammar can therefore be shared between
/// threads without locking.
///
/// A grammar whose rule refers back to itself keeps itself alive through
/// its own placeholder. Build such grammars once and keep them.
///
/// ```
/// use sigmacomb::{defer, run, string, ParseResultExt};
///
/// let deferred = defer();
/// deferred.with(string("deferred")).unwrap();
///
/// assert_eq!(run(&deferred, "deferred").into_value().unwrap(), "deferred");
/// assert_eq!(run(&deferred, "lazy").expected(), Some("deferred"));
/// ```
pub struct Defer<T> {
    slot: Arc<OnceLock<Target<T>>>,
}

impl<T> Defer<T> {
    /// Create an unbound placeholder
    pub fn new() -> Self {
        Self {
            slot: Arc::new(OnceLock::new()),
        }
    }

    /// Bind the placeholder to its target parser
    ///
    /// Binding is write-once. A second call leaves the first target in
    /// place and returns [`EngineFault::AlreadyBound`].
    pub fn with<P>(&self, parser: P) -> Result<(), EngineFault>
    where
        P: Parser<Output = T> + Send + Sync + 'static,
    {
        match self.slot.set(Box::new(parser)) {
            Ok(()) => {
                debug!(target_type = type_name::<T>(), "deferred parser bound");
                Ok(())
            }
            Err(_) => {
                warn!(
                    target_type = type_name::<T>(),
                    "attempt to rebind deferred parser"
                );
                Err(EngineFault::AlreadyBound {
                    target: type_name::<T>(),
                })
            }
        }
    }

    pub fn is_bound(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl<T> Default for Defer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Defer<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T> fmt::Debug for Defer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Defer")
            .field("target", &type_name::<T>())
            .field("bound", &self.is_bound())
            .finish()
    }
}

impl<T> Parser for Defer<T> {
    type Output = T;

    fn parse<'code>(&self, cursor: TextCursor<'code>) -> ParseResult<'code, Self::Output> {
        match self.slot.get() {
            Some(parser) => parser.parse(cursor),
            None => {
                error!(
                    target_type = type_name::<T>(),
                    position = cursor.position(),
                    "deferred parser invoked before being bound"
                );
                Err(EngineFault::Unbound {
                    target: type_name::<T>(),
                }
                .into())
            }
        }
    }
}

/// Create an unbound deferred parser
pub fn defer<T>() -> Defer<T> {
    Defer::new()
}
