//! Zero-Cost Safety Macros
//!
//! The active-cell bitmap is read in the hot loop of every path search.
//! Callers bounds-check the coordinate once, then index through `fast!`.
//!
//! In Debug mode: Normal bounds-checked access (panics with useful errors)
//! In Release mode: Unsafe unchecked access (zero overhead)
//!
//! Usage:
//! ```rust
//! use panelgrid_engine::fast;
//!
//! let idx = 2;
//!
//! let active = vec![true, false, true, true];
//! // Read: fast!(slice, [index])
//! assert!(*fast!(active, [idx]));
//!
//! let mut cost = vec![u32::MAX; 4];
//! // Write: fast!(slice, [index] = value)
//! fast!(cost, [idx] = 300);
//! assert_eq!(cost[idx], 300);
//! ```

/// Bounds checking macro for pre-validated indices
///
/// - Debug: Uses normal indexing with bounds checks
/// - Release: Uses get_unchecked/get_unchecked_mut
///
/// Only use it where the index was produced by `ActiveCellSet::index_of`
/// or an equivalent in-bounds computation.
#[macro_export]
macro_rules! fast {
    // Read pattern: fast!(slice, [index])
    ($slice:expr, [$index:expr]) => {{
        #[cfg(debug_assertions)]
        {
            &$slice[$index]
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { $slice.get_unchecked($index) }
        }
    }};

    // Write pattern: fast!(slice, [index] = value)
    ($slice:expr, [$index:expr] = $val:expr) => {{
        #[cfg(debug_assertions)]
        {
            $slice[$index] = $val;
        }
        #[cfg(not(debug_assertions))]
        {
            unsafe { *$slice.get_unchecked_mut($index) = $val; }
        }
    }};
}
