//! Memoization of grids by span.
//!
//! Each span in `[1, MAX_SPAN]` owns one slot. A slot starts unbuilt and
//! is filled at most once; after that every request for the span returns
//! the same [`Grid`]. Slots are [`OnceLock`]s, so concurrent first
//! requests for a span run the build once and the others block until it
//! is stored.

use crate::grid::Grid;
use goban_core::{GridError, MAX_SPAN};
use log::debug;
use std::fmt;
use std::ops::RangeInclusive;
use std::sync::OnceLock;

/// A span-indexed store of built grids.
///
/// Most callers want the process-wide instance behind [`grid()`]; an owned
/// cache is useful when grids should be dropped together with it.
///
/// # Examples
///
/// ```
/// use goban_grid::GridCache;
///
/// let cache = GridCache::new();
/// assert!(!cache.is_built(19));
/// let g = cache.get(19).unwrap();
/// assert_eq!(g.count(), 361);
/// assert!(cache.is_built(19));
/// assert!(std::ptr::eq(g, cache.get(19).unwrap()));
/// ```
pub struct GridCache {
    slots: [OnceLock<Grid>; MAX_SPAN],
}

impl GridCache {
    /// Create a cache with every slot unbuilt.
    pub const fn new() -> Self {
        Self {
            slots: [const { OnceLock::new() }; MAX_SPAN],
        }
    }

    fn slot(&self, span: usize) -> Result<&OnceLock<Grid>, GridError> {
        span.checked_sub(1)
            .and_then(|i| self.slots.get(i))
            .ok_or(GridError::span_out_of_range(span))
    }

    /// The grid for `span`, building and storing it on first request.
    ///
    /// Returns `Err(GridError::SpanOutOfRange)` if `span` is outside
    /// `[1, MAX_SPAN]`; nothing is built in that case.
    pub fn get(&self, span: usize) -> Result<&Grid, GridError> {
        let slot = self.slot(span)?;
        Ok(slot.get_or_init(|| build_logged(span)))
    }

    /// Returns `true` if the grid for `span` has already been built.
    ///
    /// Always `false` for out-of-range spans.
    pub fn is_built(&self, span: usize) -> bool {
        self.slot(span).is_ok_and(|slot| slot.get().is_some())
    }

    /// Spans whose grids have been built, ascending.
    pub fn built_spans(&self) -> impl Iterator<Item = usize> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.get().is_some())
            .map(|(i, _)| i + 1)
    }

    /// Build every grid in `spans` ahead of use.
    ///
    /// The whole range is validated first: if either end is out of range
    /// nothing is built. An empty range is accepted and does nothing.
    pub fn warm(&self, spans: RangeInclusive<usize>) -> Result<(), GridError> {
        if spans.is_empty() {
            return Ok(());
        }
        self.slot(*spans.start())?;
        self.slot(*spans.end())?;
        for span in spans {
            self.get(span)?;
        }
        Ok(())
    }

    /// Build every grid from 1 to [`MAX_SPAN`].
    pub fn warm_all(&self) {
        for (i, slot) in self.slots.iter().enumerate() {
            slot.get_or_init(|| build_logged(i + 1));
        }
        debug!("warmed grid cache for spans 1..={MAX_SPAN}");
    }
}

fn build_logged(span: usize) -> Grid {
    let grid = Grid::build(span);
    debug!("built grid for span {span} ({} cells)", grid.count());
    grid
}

impl Default for GridCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GridCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridCache")
            .field("built", &self.built_spans().collect::<Vec<_>>())
            .finish()
    }
}

static GLOBAL: GridCache = GridCache::new();

/// The process-wide cache.
pub fn global() -> &'static GridCache {
    &GLOBAL
}

/// The canonical grid for `span`, from the process-wide cache.
///
/// The first call for a span builds the grid; every later call returns the
/// same reference for the life of the process.
///
/// Returns `Err(GridError::SpanOutOfRange)` if `span` is outside
/// `[1, MAX_SPAN]`.
pub fn grid(span: usize) -> Result<&'static Grid, GridError> {
    GLOBAL.get(span)
}

/// Build every grid in the process-wide cache.
///
/// Call at startup to take all construction off later hot paths.
pub fn warm_all() {
    GLOBAL.warm_all();
}
