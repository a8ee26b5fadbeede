//! Pounce: a cat that chases the cursor.
//!
//! `sim` holds the pursuit simulation and the frame loop driver; it has no GPU or
//! window dependency and runs headlessly. `view` turns a `SimState` into a draw
//! list, and `app` hosts both inside the `pounce_engine` runtime.

pub mod app;
pub mod sim;
pub mod view;
