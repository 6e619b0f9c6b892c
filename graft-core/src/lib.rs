//! # Graft - Crossbreed Candidate Calculator
//!
//! Library for finding plant crossbreed combinations that reliably
//! produce a desired gene sequence.
//!
//! ## Overview
//!
//! Plants carry a 6-slot gene sequence over the letters G, H, Y (desirable)
//! and W, X (dominant, undesirable). Crossbreeding places 4 plants together;
//! at each gene slot the surrounding plants' genes compete by weight, and
//! the heaviest gene (or genes, on a tie) wins the slot. Graft enumerates
//! every 4-way combination from an input pool — each distinct sequence
//! usable up to twice — computes the outcome of each, and reports the
//! combinations whose outcome is unambiguous enough and free of unwanted
//! gene markers.
//!
//! ## Quick Start
//!
//! ```rust
//! use graft_core::CrossbreedCalculator;
//! use graft_core::config::CrossbreedConfig;
//! use graft_core::sequence::GenePool;
//!
//! let pool = GenePool::from_lines(["GGYHGY", "YGGHYH", "HGYYGG"])?;
//!
//! let calculator = CrossbreedCalculator::new(CrossbreedConfig::default());
//! let results = calculator.calculate(&pool);
//!
//! for candidate in &results.candidates {
//!     println!("{} from {:?}", candidate.outcome, candidate.parents);
//! }
//! # Ok::<(), graft_core::types::CrossbreedError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`config`]: Configuration options for a calculation run
//! - [`engine`]: The crossbreed calculator
//! - [`types`]: Gene alphabet and error types
//! - [`sequence`]: Gene sequences, the working pool, and input reading
//! - [`combinatorics`]: Combination enumeration over pool indices
//! - [`results`]: Calculation results and run statistics
//! - [`output`]: Listing formats for reporting candidates
//!
//! ## Error Handling
//!
//! All fallible operations return
//! [`Result<T, CrossbreedError>`](types::CrossbreedError). A gene letter
//! outside the recognized alphabet or a line of the wrong length aborts
//! the run; an input pool too small to form any combination is not an
//! error and simply yields an empty candidate list.

pub mod combinatorics;
pub mod config;
pub mod constants;
pub mod engine;
pub mod output;
pub mod results;
pub mod sequence;
pub mod types;

pub use engine::CrossbreedCalculator;
