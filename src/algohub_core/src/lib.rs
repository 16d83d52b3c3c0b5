//! # algohub Core
//! Classical numerical methods: bisection root finding and composite quadrature.
//!
//! This crate is kept independent of the Python wrappers and of any transport, so
//! the same routines back the web API and can be called directly from Rust.
//!
//! All routines are generic over [`num_traits::Float`], take the function to work
//! on as a plain closure, and hold no state between calls.
//!
//! ```
//!     use algohub_core::prelude::*;
//!
//!     let root = find_root(|x: f64| x - 5.0, 0.0, 10.0).unwrap();
//!     assert_eq!(root, 5.0);
//!
//!     let area = TrapezoidalIntegration
//!         .calculate(|x: f64| 2.0 * x + 1.0, 0.0, 4.0, 16)
//!         .unwrap();
//!     assert!((area - 20.0).abs() < 1e-12);
//! ```

pub mod errors;
pub mod quadrature;
pub mod roots;
pub mod round;

/// Common useful imports
pub mod prelude {
    pub use crate::errors::{NumericError, NumericResult};
    pub use crate::quadrature::{
        Integration, Quadrature, RectangularIntegration, TrapezoidalIntegration,
    };
    pub use crate::roots::{
        BisectionConfig, RootEstimate, Termination, bisect, find_root, find_root_with,
    };
}
